use std::path::Path;
use std::sync::Arc;

use quiz_core::model::SentenceStore;
use storage::dataset::load_sentences;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::quiz_service::QuizService;
use crate::stats_service::StatsService;

/// Assembles the request-facing services around one dataset and one storage.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
    stats: Arc<StatsService>,
}

impl AppServices {
    /// Load the dataset and build services backed by `SQLite` storage.
    ///
    /// The dataset is read first so a broken file fails before any database
    /// work happens.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the dataset cannot be loaded or storage
    /// initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        sentences_path: &Path,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let sentences = load_sentences(sentences_path)?;
        let storage = Storage::sqlite(db_url, clock).await?;
        Ok(Self::from_parts(sentences, &storage, clock))
    }

    /// Build services from an already-loaded dataset and storage.
    #[must_use]
    pub fn from_parts(sentences: SentenceStore, storage: &Storage, clock: Clock) -> Self {
        let sentences = Arc::new(sentences);
        let quiz = Arc::new(QuizService::new(sentences, Arc::clone(&storage.progress)));
        let stats = Arc::new(StatsService::new(clock, Arc::clone(&storage.progress)));
        Self { quiz, stats }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn stats(&self) -> Arc<StatsService> {
        Arc::clone(&self.stats)
    }
}
