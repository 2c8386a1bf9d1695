//! Tests for the Ollama summarization adapter

use std::time::Duration;

use docgen_domain::Verbosity;
use docgen_domain::ports::providers::SummarizationProvider;
use docgen_providers::summarization::OllamaSummarizer;
use mockito::{Matcher, Server};
use serde_json::json;

fn provider(base_url: String) -> OllamaSummarizer {
    OllamaSummarizer::new(
        base_url,
        "codellama".to_string(),
        Duration::from_secs(5),
        reqwest::Client::new(),
    )
}

#[tokio::test]
async fn test_generate_request_and_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::PartialJson(json!({
            "model": "codellama",
            "prompt": "def add(a, b):\n    return a + b",
            "stream": false,
            "options": { "num_predict": 64 }
        })))
        .with_status(200)
        .with_body(r#"{"model": "codellama", "response": "Adds two numbers.\n", "done": true}"#)
        .create_async()
        .await;

    let summary = provider(server.url())
        .summarize("def add(a, b):\n    return a + b", Verbosity::Concise)
        .await
        .unwrap();

    assert_eq!(summary, "Adds two numbers.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_detailed_uses_detailed_instruction() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::PartialJson(json!({
            "system": OllamaSummarizer::instruction(Verbosity::Detailed),
            "options": { "num_predict": 256 }
        })))
        .with_status(200)
        .with_body(r#"{"response": "A longer explanation."}"#)
        .create_async()
        .await;

    provider(server.url())
        .summarize("def f():\n    pass", Verbosity::Detailed)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_response_field() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(r#"{"done": true}"#)
        .create_async()
        .await;

    let err = provider(server.url())
        .summarize("def f():\n    pass", Verbosity::Concise)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("missing response"));
}

#[tokio::test]
async fn test_model_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/generate")
        .with_status(404)
        .with_body(r#"{"error": "model 'codellama' not found"}"#)
        .create_async()
        .await;

    let err = provider(server.url())
        .summarize("def f():\n    pass", Verbosity::Concise)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("model not found"));
}
