use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SentenceError {
    #[error("sentence {index} not found (dataset has {len} sentences)")]
    NotFound { index: i64, len: usize },
}

//
// ─── SENTENCE ──────────────────────────────────────────────────────────────────
//

/// A prompt and its expected answer.
///
/// Dataset files name these fields inconsistently, so deserialization accepts
/// `text`/`sentence`/`prompt` for the prompt and `answer`/`expectedAnswer` for
/// the answer. `options` is optional and only used by multiple-choice clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(alias = "sentence", alias = "prompt")]
    text: String,
    #[serde(alias = "expectedAnswer")]
    answer: String,
    #[serde(default)]
    options: Vec<String>,
}

impl Sentence {
    #[must_use]
    pub fn new(text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Exact, case-sensitive comparison against the expected answer.
    #[must_use]
    pub fn is_correct(&self, submitted: &str) -> bool {
        self.answer == submitted
    }
}

//
// ─── STORE ─────────────────────────────────────────────────────────────────────
//

/// Ordered, immutable list of sentences addressed by 0-based position.
///
/// Built once at startup and shared read-only; there are no write operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceStore {
    sentences: Vec<Sentence>,
}

impl SentenceStore {
    #[must_use]
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Look up a sentence by position.
    ///
    /// This is the only bounds check for sentence references; callers pass the
    /// raw client-supplied index straight through.
    ///
    /// # Errors
    ///
    /// Returns `SentenceError::NotFound` if `index` is negative or `>= len()`.
    pub fn get(&self, index: i64) -> Result<&Sentence, SentenceError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.sentences.get(i))
            .ok_or(SentenceError::NotFound {
                index,
                len: self.sentences.len(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.iter()
    }
}

impl FromIterator<Sentence> for SentenceStore {
    fn from_iter<I: IntoIterator<Item = Sentence>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
