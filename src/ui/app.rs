//! Main application state and logic

use crate::config::Config;
use crate::keyboard::{KeyEvent, KeyEventTracker, KeyStateSnapshot};
use crate::typing::{InputOutcome, TypingSession};
use log::{info, warn};
use std::time::Instant;

/// Current view/tab in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Tester,
    Typing,
    Help,
}

impl AppView {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tester => "Switch Tester",
            Self::Typing => "Speed Type",
            Self::Help => "Help",
        }
    }

    pub fn all() -> &'static [AppView] {
        &[Self::Tester, Self::Typing, Self::Help]
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Tester => 0,
            Self::Typing => 1,
            Self::Help => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Tester,
            1 => Self::Typing,
            _ => Self::Help,
        }
    }
}

/// Application running state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Quitting,
}

/// Main application
pub struct App {
    /// Current view
    pub view: AppView,
    /// Application state
    pub state: AppState,
    /// Configuration
    pub config: Config,
    /// Key state tracker
    pub tracker: KeyEventTracker,
    /// Latest tracker snapshot, what the keyboard visual draws
    pub key_state: KeyStateSnapshot,
    /// Typing exercise
    pub session: TypingSession,
    /// Application start time
    pub start_time: Instant,
    /// Total key events processed
    pub total_events: u64,
    /// Last status message
    pub status_message: Option<String>,
    /// Status message timestamp
    pub status_time: Option<Instant>,
    /// Listener history must be dropped before the next poll
    resync_pending: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let corpus = config.typing.corpus().unwrap_or_else(|e| {
            warn!("ignoring configured passages: {}", e);
            Default::default()
        });
        let session = TypingSession::new(corpus, &mut rand::thread_rng());
        Self::with_session(config, session)
    }

    /// Build an app around an existing typing session
    pub fn with_session(config: Config, session: TypingSession) -> Self {
        Self {
            view: AppView::Tester,
            state: AppState::Running,
            config,
            tracker: KeyEventTracker::new(),
            key_state: KeyStateSnapshot::default(),
            session,
            start_time: Instant::now(),
            total_events: 0,
            status_message: None,
            status_time: None,
            resync_pending: false,
        }
    }

    /// Feed a physical key transition to the tracker.
    ///
    /// Only the tester view listens; other views leave key state alone.
    pub fn process_event(&mut self, event: &KeyEvent) {
        if self.state != AppState::Running || self.view != AppView::Tester {
            return;
        }
        self.total_events += 1;
        self.key_state = self.tracker.process_event(event);
    }

    /// Clear tested keys and the last key
    pub fn reset_keys(&mut self) {
        self.key_state = self.tracker.reset();
        self.set_status("Tested keys reset".to_string());
    }

    /// Treat every held key as released
    pub fn release_all_keys(&mut self) {
        self.key_state = self.tracker.release_all();
    }

    /// Terminal lost focus; key-ups for held keys won't arrive
    pub fn focus_lost(&mut self) {
        self.release_all_keys();
    }

    /// Terminal regained focus. Keys still held are picked up again on the
    /// next listener poll.
    pub fn focus_gained(&mut self) {
        self.release_all_keys();
        self.resync_pending = true;
    }

    /// Whether the key listener should forget its previous key set. Clears
    /// the request.
    pub fn take_resync(&mut self) -> bool {
        std::mem::take(&mut self.resync_pending)
    }

    pub fn type_char(&mut self, c: char) {
        if self.view == AppView::Typing {
            let outcome = self.session.push_char(c);
            self.handle_outcome(outcome);
        }
    }

    pub fn backspace(&mut self) {
        if self.view == AppView::Typing {
            let outcome = self.session.pop_char();
            self.handle_outcome(outcome);
        }
    }

    /// Start the typing exercise over with a fresh passage
    pub fn restart_typing(&mut self) {
        self.session.restart();
        self.set_status("New passage".to_string());
    }

    fn handle_outcome(&mut self, outcome: InputOutcome) {
        if let InputOutcome::Completed { final_wpm } = outcome {
            info!("typing session completed at {} wpm", final_wpm);
            self.set_status(format!("Complete! {} WPM", final_wpm));
        }
    }

    /// Switch to a view, releasing held keys when leaving the tester.
    ///
    /// Entering the tester requests a listener resync, since transitions
    /// seen in other views were dropped.
    pub fn set_view(&mut self, view: AppView) {
        if self.view == AppView::Tester && view != AppView::Tester {
            self.release_all_keys();
        }
        if self.view != AppView::Tester && view == AppView::Tester {
            self.resync_pending = true;
        }
        self.view = view;
    }

    /// Switch to the next view
    pub fn next_view(&mut self) {
        let next = (self.view.index() + 1) % AppView::all().len();
        self.set_view(AppView::from_index(next));
    }

    /// Switch to the previous view
    pub fn prev_view(&mut self) {
        let current = self.view.index();
        let prev = if current == 0 {
            AppView::all().len() - 1
        } else {
            current - 1
        };
        self.set_view(AppView::from_index(prev));
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.state = AppState::Quitting;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_time = Some(Instant::now());
    }

    /// Get status message if still within the configured display window
    pub fn get_status(&self) -> Option<&str> {
        match (&self.status_message, self.status_time) {
            (Some(msg), Some(time)) if time.elapsed() < self.config.status_duration() => {
                Some(msg)
            }
            _ => None,
        }
    }

    /// Get elapsed time formatted
    pub fn elapsed_formatted(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing::Corpus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app_for(target: &str) -> App {
        let corpus = Corpus::new([target]).unwrap();
        let session = TypingSession::new(corpus, &mut StdRng::seed_from_u64(0));
        App::with_session(Config::default(), session)
    }

    #[test]
    fn view_cycling_wraps() {
        let mut app = App::default();
        assert_eq!(app.view, AppView::Tester);
        app.prev_view();
        assert_eq!(app.view, AppView::Help);
        app.next_view();
        assert_eq!(app.view, AppView::Tester);
    }

    #[test]
    fn leaving_tester_releases_keys() {
        let mut app = App::default();
        app.process_event(&KeyEvent::down("KeyA"));
        assert!(app.key_state.is_active("KeyA"));

        app.next_view();
        assert!(app.key_state.active.is_empty());
        assert!(app.key_state.is_tested("KeyA"));
    }

    #[test]
    fn key_events_ignored_outside_tester() {
        let mut app = App::default();
        app.set_view(AppView::Typing);
        app.process_event(&KeyEvent::down("KeyA"));
        assert_eq!(app.total_events, 0);
        assert!(app.key_state.tested.is_empty());
    }

    #[test]
    fn typing_only_in_typing_view() {
        let mut app = app_for("hi");
        app.type_char('h');
        assert_eq!(app.session.buffer(), "");

        app.set_view(AppView::Typing);
        app.type_char('h');
        app.type_char('x');
        app.backspace();
        assert_eq!(app.session.buffer(), "h");
    }

    #[test]
    fn completion_sets_status() {
        let mut app = app_for("ok");
        app.set_view(AppView::Typing);
        app.type_char('o');
        app.type_char('k');
        assert!(app.session.is_finished());
        assert!(app.get_status().is_some_and(|s| s.starts_with("Complete!")));
    }

    #[test]
    fn quit_sets_state() {
        let mut app = App::default();
        app.quit();
        assert_eq!(app.state, AppState::Quitting);
        app.process_event(&KeyEvent::down("KeyA"));
        assert_eq!(app.total_events, 0);
    }

    #[test]
    fn entering_tester_requests_resync() {
        let mut app = App::default();
        assert!(!app.take_resync());

        app.set_view(AppView::Typing);
        assert!(!app.take_resync());

        app.set_view(AppView::Tester);
        assert!(app.take_resync());
        assert!(!app.take_resync());
    }

    #[test]
    fn focus_gained_requests_resync() {
        let mut app = App::default();
        app.process_event(&KeyEvent::down("KeyA"));
        app.focus_lost();
        assert!(app.key_state.active.is_empty());

        app.focus_gained();
        assert!(app.take_resync());
        assert!(app.key_state.is_tested("KeyA"));
    }
}
