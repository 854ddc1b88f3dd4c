use std::sync::Arc;

use quiz_core::model::{ProgressRecord, Sentence, SentenceStore, UserName};
use storage::repository::{NewProgress, ProgressRepository};

use crate::error::QuizError;

//
// ─── REQUESTS / RESULTS ────────────────────────────────────────────────────────
//

/// An answer as submitted by a client, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSubmission {
    pub user: String,
    pub sentence_index: i64,
    pub answer: String,
}

/// Result of a persisted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub record: ProgressRecord,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Serves sentences and grades submitted answers against them.
#[derive(Clone)]
pub struct QuizService {
    sentences: Arc<SentenceStore>,
    progress: Arc<dyn ProgressRepository>,
}

impl QuizService {
    #[must_use]
    pub fn new(sentences: Arc<SentenceStore>, progress: Arc<dyn ProgressRepository>) -> Self {
        Self {
            sentences,
            progress,
        }
    }

    /// Fetch the sentence at `index`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Sentence` if `index` is outside the dataset.
    pub fn sentence(&self, index: i64) -> Result<&Sentence, QuizError> {
        Ok(self.sentences.get(index)?)
    }

    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Grade an answer and record the attempt.
    ///
    /// The user and sentence are validated before anything is written, so a
    /// rejected submission leaves no record behind.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::User` for a blank or oversized user,
    /// `QuizError::Sentence` for an unknown sentence index, and
    /// `QuizError::Storage` if the record cannot be persisted.
    pub async fn submit_answer(
        &self,
        submission: AnswerSubmission,
    ) -> Result<AnswerOutcome, QuizError> {
        let user = UserName::parse(submission.user)?;
        let sentence = self.sentences.get(submission.sentence_index)?;
        let correct = sentence.is_correct(&submission.answer);

        let record = self
            .progress
            .insert(NewProgress::new(
                user.into_inner(),
                submission.sentence_index,
                correct,
            ))
            .await?;

        tracing::debug!(
            user = %record.user,
            sentence_index = record.sentence_index,
            correct,
            id = %record.id,
            "recorded answer"
        );

        Ok(AnswerOutcome { correct, record })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
