//! Typing session: target text, input buffer, timing and scoring

use super::metrics::{classify, wpm, CharClass};
use super::Corpus;
use log::debug;
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of feeding a new buffer into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Session already finished; the buffer was not applied
    Ignored,
    /// Buffer replaced, target not yet matched
    Updated,
    /// Buffer matched the target exactly. Emitted once per session.
    Completed { final_wpm: u32 },
}

/// Speed figure to display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wpm {
    /// In-progress estimate, recomputed on every read
    Live(u32),
    /// Frozen at completion
    Final(u32),
}

/// Read-only copy of a session at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSnapshot {
    pub target: String,
    pub buffer: String,
    pub started_at: Option<Instant>,
    pub finished: bool,
    pub wpm: Wpm,
}

/// A single attempt at reproducing a target passage.
///
/// The clock starts on the first input, not on [`TypingSession::start`].
/// Completion requires exact equality with the target; longer buffers
/// (e.g. a paste with trailing text) never complete.
#[derive(Debug)]
pub struct TypingSession {
    corpus: Corpus,
    target: String,
    target_chars: Vec<char>,
    buffer: String,
    buffer_chars: Vec<char>,
    started_at: Option<Instant>,
    finished: bool,
    final_wpm: Option<u32>,
}

impl TypingSession {
    /// Create a session with a passage drawn from `corpus`
    pub fn new<R: Rng>(corpus: Corpus, rng: &mut R) -> Self {
        let target = corpus.choose(rng).to_string();
        let mut session = Self {
            corpus,
            target: String::new(),
            target_chars: Vec::new(),
            buffer: String::new(),
            buffer_chars: Vec::new(),
            started_at: None,
            finished: false,
            final_wpm: None,
        };
        session.start(target);
        session
    }

    /// Begin a fresh attempt at `target`, discarding all previous progress
    pub fn start(&mut self, target: impl Into<String>) {
        self.target = target.into();
        self.target_chars = self.target.chars().collect();
        self.buffer.clear();
        self.buffer_chars.clear();
        self.started_at = None;
        self.finished = false;
        self.final_wpm = None;
    }

    /// Start over with a random passage from the corpus
    pub fn restart_with<R: Rng>(&mut self, rng: &mut R) {
        let target = self.corpus.choose(rng).to_string();
        self.start(target);
    }

    pub fn restart(&mut self) {
        self.restart_with(&mut rand::thread_rng());
    }

    pub fn on_input(&mut self, buffer: impl Into<String>) -> InputOutcome {
        self.on_input_at(buffer, Instant::now())
    }

    /// Replace the input buffer as of `now`
    pub fn on_input_at(&mut self, buffer: impl Into<String>, now: Instant) -> InputOutcome {
        if self.finished {
            return InputOutcome::Ignored;
        }
        let started_at = *self.started_at.get_or_insert(now);

        self.buffer = buffer.into();
        self.buffer_chars = self.buffer.chars().collect();

        if self.buffer != self.target {
            return InputOutcome::Updated;
        }

        let final_wpm = wpm(
            self.target_chars.len(),
            now.saturating_duration_since(started_at),
        );
        self.finished = true;
        self.final_wpm = Some(final_wpm);
        debug!(
            "session complete: {} chars at {} wpm",
            self.target_chars.len(),
            final_wpm
        );
        InputOutcome::Completed { final_wpm }
    }

    /// Append one character, as a line editor would
    pub fn push_char_at(&mut self, c: char, now: Instant) -> InputOutcome {
        let mut buffer = self.buffer.clone();
        buffer.push(c);
        self.on_input_at(buffer, now)
    }

    /// Remove the last character. Does nothing on an empty buffer.
    pub fn pop_char_at(&mut self, now: Instant) -> InputOutcome {
        if self.finished {
            return InputOutcome::Ignored;
        }
        let mut buffer = self.buffer.clone();
        if buffer.pop().is_none() {
            return InputOutcome::Updated;
        }
        self.on_input_at(buffer, now)
    }

    pub fn push_char(&mut self, c: char) -> InputOutcome {
        self.push_char_at(c, Instant::now())
    }

    pub fn pop_char(&mut self) -> InputOutcome {
        self.pop_char_at(Instant::now())
    }

    /// Time since the first input, if any
    pub fn elapsed_at(&self, now: Instant) -> Option<Duration> {
        self.started_at
            .map(|started| now.saturating_duration_since(started))
    }

    /// In-progress WPM as of `now`.
    ///
    /// 0 before the first input. Once finished this returns the frozen
    /// final figure instead of drifting with the clock.
    pub fn live_wpm_at(&self, now: Instant) -> u32 {
        if let Some(final_wpm) = self.final_wpm {
            return final_wpm;
        }
        match self.elapsed_at(now) {
            Some(elapsed) => wpm(self.buffer_chars.len(), elapsed),
            None => 0,
        }
    }

    pub fn live_wpm(&self) -> u32 {
        self.live_wpm_at(Instant::now())
    }

    pub fn char_classification(&self, i: usize) -> CharClass {
        classify(&self.target_chars, &self.buffer_chars, self.finished, i)
    }

    /// Classification for every target character, in order
    pub fn classifications(&self) -> Vec<(char, CharClass)> {
        self.target_chars
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, self.char_classification(i)))
            .collect()
    }

    pub fn snapshot_at(&self, now: Instant) -> TypingSnapshot {
        let wpm = match self.final_wpm {
            Some(final_wpm) => Wpm::Final(final_wpm),
            None => Wpm::Live(self.live_wpm_at(now)),
        };
        TypingSnapshot {
            target: self.target.clone(),
            buffer: self.buffer.clone(),
            started_at: self.started_at,
            finished: self.finished,
            wpm,
        }
    }

    pub fn snapshot(&self) -> TypingSnapshot {
        self.snapshot_at(Instant::now())
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn final_wpm(&self) -> Option<u32> {
        self.final_wpm
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}
