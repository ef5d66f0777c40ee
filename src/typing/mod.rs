//! Typing speed sessions and scoring

mod corpus;
pub mod metrics;
mod session;

pub use corpus::{Corpus, CorpusError, DEFAULT_PASSAGES};
pub use metrics::{wpm, CharClass};
pub use session::{InputOutcome, TypingSession, TypingSnapshot, Wpm};
