//! Unit tests for SummaryResult and DocumentationRun

use docgen_domain::constants::{RUN_TIMESTAMP_FORMAT, UNTITLED_RUN_TITLE};
use docgen_domain::{CodeEntity, DocumentationRun, SummaryResult};

fn sample_results() -> Vec<SummaryResult> {
    vec![
        SummaryResult::new(
            CodeEntity::class("Foo", "class Foo:\n    def bar(self):\n        pass"),
            "A class.",
        ),
        SummaryResult::new(
            CodeEntity::method("Foo", "bar", "def bar(self):\n        pass"),
            "Does nothing.",
        ),
    ]
}

#[test]
fn test_title_is_first_result_name() {
    let run = DocumentationRun::new("session-1", sample_results());

    assert_eq!(run.title, "Foo");
    assert_eq!(run.session_id, "session-1");
    assert_eq!(run.results.len(), 2);
}

#[test]
fn test_empty_run_gets_placeholder_title() {
    let run = DocumentationRun::new("session-1", Vec::new());

    assert_eq!(run.title, UNTITLED_RUN_TITLE);
    assert!(run.results.is_empty());
}

#[test]
fn test_runs_get_distinct_ids() {
    let first = DocumentationRun::new("s", Vec::new());
    let second = DocumentationRun::new("s", Vec::new());

    assert_ne!(first.id, second.id);
    assert!(uuid::Uuid::parse_str(&first.id).is_ok());
}

#[test]
fn test_timestamp_has_minute_precision() {
    let run = DocumentationRun::new("s", Vec::new());

    let parsed = chrono::NaiveDateTime::parse_from_str(&run.timestamp, RUN_TIMESTAMP_FORMAT);
    assert!(parsed.is_ok(), "unexpected timestamp {}", run.timestamp);
    assert_eq!(run.timestamp.len(), "2024-01-01 12:30".len());
}

#[test]
fn test_belongs_to_matches_exact_session() {
    let run = DocumentationRun::new("abc", Vec::new());

    assert!(run.belongs_to("abc"));
    assert!(!run.belongs_to("ABC"));
    assert!(!run.belongs_to("abc "));
}

#[test]
fn test_persisted_layout_is_flat() {
    let run = DocumentationRun::new("s", sample_results());
    let value = serde_json::to_value(&run).unwrap();

    for key in ["id", "session_id", "timestamp", "title", "results"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    let first = &value["results"][0];
    assert_eq!(first["entity_name"], "Foo");
    assert_eq!(first["entity_type"], "class");
    assert_eq!(first["generated_docstring"], "A class.");
    assert!(first.get("entity").is_none());
}

#[test]
fn test_run_roundtrips_through_json() {
    let run = DocumentationRun::new("s", sample_results());
    let json = serde_json::to_string(&run).unwrap();
    let back: DocumentationRun = serde_json::from_str(&json).unwrap();

    assert_eq!(back, run);
}
