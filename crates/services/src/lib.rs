#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz_service;
pub mod stats_service;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, QuizError, StatsError};
pub use quiz_service::{AnswerOutcome, AnswerSubmission, QuizService};
pub use stats_service::StatsService;
