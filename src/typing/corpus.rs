//! Fixed table of practice passages

use rand::Rng;
use thiserror::Error;

/// Passages shipped with the application
pub const DEFAULT_PASSAGES: &[&str] = &[
    "Элегантный код подобен музыке. Каждая строка должна иметь свой ритм и смысл.",
    "Совершенство достигнуто не тогда, когда нечего добавить, а когда нечего убрать.",
    "Качественные механические переключатели создают тактильную симфонию для пальцев.",
    "В мире цифрового шума чистота дизайна и скорость реакции решают всё.",
];

/// Error type for corpus construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("corpus must contain at least one passage")]
    Empty,
    #[error("passage {0} is empty")]
    EmptyPassage(usize),
}

/// Non-empty, read-only list of passages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    passages: Vec<String>,
}

impl Corpus {
    pub fn new<I, S>(passages: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let passages: Vec<String> = passages.into_iter().map(Into::into).collect();
        if passages.is_empty() {
            return Err(CorpusError::Empty);
        }
        if let Some(index) = passages.iter().position(|p| p.is_empty()) {
            return Err(CorpusError::EmptyPassage(index));
        }
        Ok(Self { passages })
    }

    /// Pick a passage uniformly at random
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        &self.passages[rng.gen_range(0..self.passages.len())]
    }

    pub fn contains(&self, passage: &str) -> bool {
        self.passages.iter().any(|p| p == passage)
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    /// False for any constructed corpus
    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self {
            passages: DEFAULT_PASSAGES.iter().map(|p| p.to_string()).collect(),
        }
    }
}
