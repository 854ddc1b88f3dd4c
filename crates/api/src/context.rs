use std::sync::Arc;

use services::{AppServices, QuizService, StatsService};

/// Shared handler state: the services every request reads from.
#[derive(Clone)]
pub struct ApiContext {
    quiz: Arc<QuizService>,
    stats: Arc<StatsService>,
}

impl ApiContext {
    #[must_use]
    pub fn new(services: &AppServices) -> Self {
        Self {
            quiz: services.quiz(),
            stats: services.stats(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizService {
        &self.quiz
    }

    #[must_use]
    pub fn stats(&self) -> &StatsService {
        &self.stats
    }
}
