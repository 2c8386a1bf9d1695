//! Tests for the documentation orchestration use case

use std::sync::atomic::Ordering;
use std::time::Duration;

use docgen_application::domain_services::DocumentationServiceInterface;
use docgen_application::use_cases::documentation_service::whole_millis;
use docgen_domain::constants::UNTITLED_RUN_TITLE;
use docgen_domain::{DocumentationRequest, EntityKind, Error, Verbosity};

use crate::test_utils::{StubSummarizer, fixture, fixture_with, sample_entities};

#[tokio::test]
async fn test_empty_source_rejected_before_any_work() {
    let f = fixture();

    let err = f
        .service
        .generate(DocumentationRequest::new(""))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(err.to_string(), "Source code cannot be empty.");
    assert_eq!(f.extractor.calls.load(Ordering::SeqCst), 0);
    assert_eq!(f.summarizer.call_count(), 0);
    assert!(f.history.runs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_one_summary_per_entity_in_order() {
    let f = fixture();

    let results = f
        .service
        .generate(DocumentationRequest::new("source").with_persist(false))
        .await
        .unwrap();

    let names: Vec<&str> = results.iter().map(|r| r.entity.name.as_str()).collect();
    assert_eq!(names, ["Foo", "Foo.bar", "add"]);
    assert_eq!(results[1].entity.kind, EntityKind::Method);
    assert_eq!(results[2].summary, "concise: def add(a, b):");
    assert_eq!(f.extractor.calls.load(Ordering::SeqCst), 1);
    assert_eq!(f.summarizer.call_count(), 3);
}

#[tokio::test]
async fn test_run_uses_single_verbosity() {
    let f = fixture();

    f.service
        .generate(
            DocumentationRequest::new("source")
                .with_verbosity(Verbosity::Detailed)
                .with_persist(false),
        )
        .await
        .unwrap();

    let seen = f.summarizer.verbosities.lock().unwrap().clone();
    assert_eq!(seen, vec![Verbosity::Detailed; 3]);
}

#[tokio::test]
async fn test_persist_appends_exactly_one_run() {
    let f = fixture();

    f.service
        .generate(DocumentationRequest::new("source").with_session("s1"))
        .await
        .unwrap();

    let runs = f.service.history("s1").await.unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].title, "Foo");
    assert_eq!(runs[0].results.len(), 3);
}

#[tokio::test]
async fn test_no_persist_leaves_history_unchanged() {
    let f = fixture();

    let results = f
        .service
        .generate(
            DocumentationRequest::new("source")
                .with_session("s1")
                .with_persist(false),
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
    assert!(f.service.history("s1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_extraction_is_persisted_with_placeholder_title() {
    let f = fixture_with(Vec::new(), StubSummarizer::new());

    let results = f
        .service
        .generate(DocumentationRequest::new("x = 1").with_session("s1"))
        .await
        .unwrap();

    assert!(results.is_empty());
    assert_eq!(f.summarizer.call_count(), 0);
    let runs = f.service.history("s1").await.unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].title, UNTITLED_RUN_TITLE);
}

#[tokio::test]
async fn test_sequential_runs_are_most_recent_first() {
    let f = fixture();
    f.service
        .generate(DocumentationRequest::new("first").with_session("s1"))
        .await
        .unwrap();

    let second = fixture_with(
        vec![docgen_domain::CodeEntity::function("second", "def second(): ...")],
        StubSummarizer::new(),
    );
    // Reuse the first fixture's history by running the second service against it
    let service = docgen_application::use_cases::DocumentationServiceImpl::new(
        second.extractor.clone(),
        second.summarizer.clone(),
        f.history.clone(),
    );
    service
        .generate(DocumentationRequest::new("second").with_session("s1"))
        .await
        .unwrap();

    let runs = f.service.history("s1").await.unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].title, "second");
    assert_eq!(runs[1].title, "Foo");
}

#[tokio::test]
async fn test_history_never_crosses_sessions() {
    let f = fixture();
    for session in ["alice", "bob", "alice"] {
        f.service
            .generate(DocumentationRequest::new("source").with_session(session))
            .await
            .unwrap();
    }

    let runs = f.service.history("alice").await.unwrap();
    assert_eq!(runs.len(), 2);
    assert!(runs.iter().all(|run| run.session_id == "alice"));
    assert!(f.service.history("carol").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_adapter_failure_aborts_run_without_persisting() {
    let f = fixture_with(sample_entities(), StubSummarizer::failing_on(2));

    let err = f
        .service
        .generate(DocumentationRequest::new("source").with_session("s1"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("model exploded"));
    assert_eq!(f.summarizer.call_count(), 2);
    assert!(f.history.runs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_find_run_by_id() {
    let f = fixture();
    f.service
        .generate(DocumentationRequest::new("source").with_session("s1"))
        .await
        .unwrap();
    let run_id = f.service.history("s1").await.unwrap()[0].id.clone();

    let run = f.service.find_run("s1", &run_id).await.unwrap();
    assert_eq!(run.id, run_id);

    let other_session = f.service.find_run("s2", &run_id).await.unwrap_err();
    assert!(matches!(other_session, Error::NotFound { .. }));
}

#[test]
fn test_elapsed_millis_truncate_and_saturate() {
    assert_eq!(whole_millis(Duration::from_micros(2_999)), 2);
    assert_eq!(whole_millis(Duration::from_secs(3)), 3_000);
    assert_eq!(whole_millis(Duration::MAX), u64::MAX);
}
