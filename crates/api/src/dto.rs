//! Wire shapes for requests and responses.

use quiz_core::model::Sentence;
use quiz_core::stats::ProgressStats;
use serde::{Deserialize, Serialize};
use services::AnswerSubmission;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceResponse {
    pub text: String,
    pub answer: String,
    pub options: Vec<String>,
}

impl From<&Sentence> for SentenceResponse {
    fn from(sentence: &Sentence) -> Self {
        Self {
            text: sentence.text().to_owned(),
            answer: sentence.answer().to_owned(),
            options: sentence.options().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentenceCountResponse {
    pub count: usize,
}

/// Body of `POST /answer`. `sentenceIndex` is accepted as an alias.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerRequest {
    pub user: String,
    #[serde(alias = "sentenceIndex")]
    pub sentence_id: i64,
    pub answer: String,
}

impl From<AnswerRequest> for AnswerSubmission {
    fn from(req: AnswerRequest) -> Self {
        Self {
            user: req.user,
            sentence_index: req.sentence_id,
            answer: req.answer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerResponse {
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsResponse {
    pub total: u64,
    pub today: u64,
    pub week: u64,
    pub average_per_day: f64,
}

impl From<ProgressStats> for StatsResponse {
    fn from(stats: ProgressStats) -> Self {
        Self {
            total: stats.total,
            today: stats.today,
            week: stats.week,
            average_per_day: stats.average_per_day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
