use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};

use crate::context::ApiContext;
use crate::dto::{
    AnswerRequest, AnswerResponse, SentenceCountResponse, SentenceResponse, StatsResponse,
};
use crate::error::ApiError;

/// `GET /sentence/{idx}`
pub async fn get_sentence(
    State(ctx): State<ApiContext>,
    idx: Result<Path<i64>, PathRejection>,
) -> Result<Json<SentenceResponse>, ApiError> {
    let Path(idx) = idx?;
    let sentence = ctx.quiz().sentence(idx)?;
    Ok(Json(SentenceResponse::from(sentence)))
}

/// `GET /sentences/count`
pub async fn sentence_count(State(ctx): State<ApiContext>) -> Json<SentenceCountResponse> {
    Json(SentenceCountResponse {
        count: ctx.quiz().sentence_count(),
    })
}

/// `POST /answer`
pub async fn submit_answer(
    State(ctx): State<ApiContext>,
    body: Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let Json(req) = body?;
    let outcome = ctx.quiz().submit_answer(req.into()).await?;
    tracing::info!(
        op = "submit_answer",
        user = %outcome.record.user,
        sentence_index = outcome.record.sentence_index,
        correct = outcome.correct,
    );
    Ok(Json(AnswerResponse {
        correct: outcome.correct,
    }))
}

/// `GET /stats/{user}`
pub async fn get_stats(
    State(ctx): State<ApiContext>,
    user: Result<Path<String>, PathRejection>,
) -> Result<Json<StatsResponse>, ApiError> {
    let Path(user) = user?;
    let stats = ctx.stats().stats_for(&user).await?;
    tracing::info!(op = "get_stats", user = %user, total = stats.total);
    Ok(Json(StatsResponse::from(stats)))
}
