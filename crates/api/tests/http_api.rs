use api::{ApiContext, router};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::model::{ProgressRecord, Sentence, SentenceStore};
use quiz_core::time::fixed_clock;
use serde_json::{Value, json};
use services::AppServices;
use storage::repository::{NewProgress, ProgressRepository, Storage, StorageError};
use tower::ServiceExt;

struct BrokenRepository;

#[async_trait]
impl ProgressRepository for BrokenRepository {
    async fn insert(&self, _entry: NewProgress) -> Result<ProgressRecord, StorageError> {
        Err(StorageError::Connection("database is locked".into()))
    }

    async fn count_by_user(&self, _user: &str) -> Result<u64, StorageError> {
        Err(StorageError::Connection("database is locked".into()))
    }

    async fn count_by_user_since(
        &self,
        _user: &str,
        _since: DateTime<Utc>,
    ) -> Result<u64, StorageError> {
        Err(StorageError::Connection("database is locked".into()))
    }

    async fn earliest_record(&self, _user: &str) -> Result<Option<ProgressRecord>, StorageError> {
        Err(StorageError::Connection("database is locked".into()))
    }
}

fn sentences() -> SentenceStore {
    SentenceStore::new(vec![
        Sentence::new("Hello", "bonjour"),
        Sentence::new("Hi", "bonjour").with_options(vec!["bonjour".into(), "merci".into()]),
        Sentence::new("Goodbye", "au revoir"),
    ])
}

fn app_with(storage: &Storage) -> Router {
    let services = AppServices::from_parts(sentences(), storage, fixed_clock());
    router(ApiContext::new(&services))
}

fn app() -> Router {
    app_with(&Storage::in_memory_with_clock(fixed_clock()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn get_sentence_returns_prompt_answer_and_options() {
    let app = app();

    let (status, body) = send(&app, get("/sentence/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"text": "Hi", "answer": "bonjour", "options": ["bonjour", "merci"]})
    );

    let (_, again) = send(&app, get("/sentence/1")).await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn get_sentence_out_of_range_is_404() {
    let app = app();

    let (status, body) = send(&app, get("/sentence/3")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("invalid sentence"));

    let (status, _) = send(&app, get("/sentence/-1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/sentence/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn sentence_count_reports_dataset_size() {
    let (status, body) = send(&app(), get("/sentences/count")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"count": 3}));
}

#[tokio::test]
async fn alice_scenario_over_http() {
    let app = app();

    let mut results = Vec::new();
    for (idx, answer) in [(0, "bonjour"), (1, "Bonjour"), (2, "au revoir")] {
        let (status, body) = send(
            &app,
            post_json(
                "/answer",
                &json!({"user": "alice", "sentence_id": idx, "answer": answer}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        results.push(body["correct"].as_bool().unwrap());
    }
    assert_eq!(results, [true, false, true]);

    let (status, body) = send(&app, get("/stats/alice")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"total": 3, "today": 3, "week": 3, "average_per_day": 3.0})
    );
}

#[tokio::test]
async fn answer_accepts_camel_case_index() {
    let (status, body) = send(
        &app(),
        post_json(
            "/answer",
            &json!({"user": "erin", "sentenceIndex": 2, "answer": "au revoir"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"correct": true}));
}

#[tokio::test]
async fn answer_for_unknown_sentence_is_404_and_not_recorded() {
    let app = app();

    let (status, _) = send(
        &app,
        post_json(
            "/answer",
            &json!({"user": "frank", "sentence_id": 42, "answer": "bonjour"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stats) = send(&app, get("/stats/frank")).await;
    assert_eq!(stats["total"], 0);
}

#[tokio::test]
async fn malformed_answer_bodies_are_client_errors() {
    let app = app();

    let (status, body) = send(
        &app,
        post_json("/answer", &json!({"user": "gina", "answer": "bonjour"})),
    )
    .await;
    assert!(status.is_client_error());
    assert!(body["detail"].is_string());

    let request = Request::builder()
        .method("POST")
        .uri("/answer")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        post_json(
            "/answer",
            &json!({"user": "  ", "sentence_id": 0, "answer": "bonjour"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "user cannot be empty");
}

#[tokio::test]
async fn stats_for_unknown_user_are_zero() {
    let (status, body) = send(&app(), get("/stats/nobody")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"total": 0, "today": 0, "week": 0, "average_per_day": 0.0})
    );
}

#[tokio::test]
async fn storage_failures_are_500_without_details() {
    let storage = Storage {
        progress: Arc::new(BrokenRepository),
    };
    let app = app_with(&storage);

    let (status, body) = send(
        &app,
        post_json(
            "/answer",
            &json!({"user": "hank", "sentence_id": 0, "answer": "bonjour"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "internal server error"}));

    let (status, body) = send(&app, get("/stats/hank")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "internal server error"}));
}
