use std::io::Write;
use std::sync::Arc;

use chrono::Duration;
use quiz_core::model::{Sentence, SentenceStore};
use quiz_core::time::{fixed_clock, fixed_now};
use services::{AnswerSubmission, AppServices, Clock, QuizService, StatsService};
use storage::repository::{InMemoryRepository, Storage};

fn french_store() -> SentenceStore {
    SentenceStore::new(vec![
        Sentence::new("Hello", "bonjour"),
        Sentence::new("Hi", "bonjour"),
        Sentence::new("Goodbye", "au revoir"),
    ])
}

fn submission(user: &str, sentence_index: i64, answer: &str) -> AnswerSubmission {
    AnswerSubmission {
        user: user.into(),
        sentence_index,
        answer: answer.into(),
    }
}

#[tokio::test]
async fn alice_answers_three_times_on_one_day() {
    let storage = Storage::in_memory_with_clock(fixed_clock());
    let app = AppServices::from_parts(french_store(), &storage, fixed_clock());

    let mut results = Vec::new();
    for (idx, answer) in [(0, "bonjour"), (1, "Bonjour"), (2, "au revoir")] {
        let outcome = app
            .quiz()
            .submit_answer(submission("alice", idx, answer))
            .await
            .unwrap();
        results.push(outcome.correct);
    }
    assert_eq!(results, [true, false, true]);

    let stats = app.stats().stats_for("alice").await.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.today, 3);
    assert_eq!(stats.week, 3);
    assert_eq!(stats.average_per_day, 3.0);
}

#[tokio::test]
async fn bob_has_one_old_record_and_two_from_today() {
    let now = fixed_now();
    let repo = InMemoryRepository::new().with_clock(fixed_clock());
    let store = Arc::new(french_store());

    let ten_days_ago = QuizService::new(
        Arc::clone(&store),
        Arc::new(repo.clone().with_clock(Clock::fixed(now - Duration::days(10)))),
    );
    ten_days_ago
        .submit_answer(submission("bob", 0, "bonjour"))
        .await
        .unwrap();

    let earlier_today = QuizService::new(
        Arc::clone(&store),
        Arc::new(repo.clone().with_clock(Clock::fixed(now - Duration::hours(1)))),
    );
    earlier_today
        .submit_answer(submission("bob", 1, "bonjour"))
        .await
        .unwrap();
    earlier_today
        .submit_answer(submission("bob", 2, "nope"))
        .await
        .unwrap();

    let stats = StatsService::new(fixed_clock(), Arc::new(repo))
        .stats_for("bob")
        .await
        .unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.today, 2);
    assert_eq!(stats.week, 2);
    assert_eq!(stats.average_per_day, 0.3);
}

#[tokio::test]
async fn sqlite_backed_services_load_dataset_and_record_answers() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("sentences.json");
    let mut file = std::fs::File::create(&dataset).unwrap();
    write!(file, r#"[{{"sentence": "Je ___ faim", "answer": "suis"}}]"#).unwrap();

    let app = AppServices::new_sqlite(
        "sqlite:file:memdb_services_flow?mode=memory&cache=shared",
        &dataset,
        fixed_clock(),
    )
    .await
    .unwrap();

    assert_eq!(app.quiz().sentence_count(), 1);
    let outcome = app
        .quiz()
        .submit_answer(submission("carol", 0, "suis"))
        .await
        .unwrap();
    assert!(outcome.correct);

    let stats = app.stats().stats_for("carol").await.unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.average_per_day, 1.0);
}

#[tokio::test]
async fn missing_dataset_fails_startup() {
    let err = AppServices::new_sqlite(
        "sqlite:file:memdb_services_missing?mode=memory&cache=shared",
        std::path::Path::new("/definitely/not/here.json"),
        Clock::default_clock(),
    )
    .await;
    assert!(matches!(err, Err(services::AppServicesError::Dataset(_))));
}
