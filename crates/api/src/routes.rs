use axum::Router;
use axum::routing::{get, post};

use crate::context::ApiContext;
use crate::handlers;

/// Build the HTTP router over the given services.
pub fn router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/sentence/:idx", get(handlers::get_sentence))
        .route("/sentences/count", get(handlers::sentence_count))
        .route("/answer", post(handlers::submit_answer))
        .route("/stats/:user", get(handlers::get_stats))
        .with_state(ctx)
}
