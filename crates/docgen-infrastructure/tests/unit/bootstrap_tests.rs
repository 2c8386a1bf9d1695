//! Composition root tests

use docgen_domain::{DocumentationRequest, Error};
use docgen_infrastructure::config::AppConfig;
use docgen_infrastructure::init_app;

fn offline_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.summarization.provider = "null".to_string();
    config.history.provider = "memory".to_string();
    config
}

#[tokio::test]
async fn test_init_app_with_offline_providers() {
    let context = init_app(offline_config()).await.unwrap();

    assert!(context.summarizer().is_ready());
    assert_eq!(context.extractor().language(), "python");
    assert_eq!(context.history().provider_name(), "memory");

    let results = context
        .documentation()
        .generate(DocumentationRequest::new("def add(a, b):\n    return a + b").with_session("s1"))
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entity.name, "add");
    assert_eq!(context.documentation().history("s1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_model_is_fatal() {
    let mut config = offline_config();
    config.summarization.provider = "huggingface".to_string();
    config.summarization.base_url = Some("http://127.0.0.1:9".to_string());
    config.summarization.timeout_secs = 2;

    let err = init_app(config).await.unwrap_err();

    assert!(matches!(err, Error::ModelUnavailable { .. }));
    assert!(err.to_string().contains("huggingface"));
}

#[tokio::test]
async fn test_startup_health_check_can_be_skipped() {
    let mut config = offline_config();
    config.summarization.provider = "huggingface".to_string();
    config.summarization.base_url = Some("http://127.0.0.1:9".to_string());
    config.summarization.verify_on_startup = false;

    let context = init_app(config).await.unwrap();
    assert!(context.summarizer().is_ready());
}

#[tokio::test]
async fn test_unknown_provider_is_config_error() {
    let mut config = offline_config();
    config.summarization.provider = "gpt-42".to_string();

    let err = init_app(config).await.unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_unsupported_language_is_config_error() {
    let mut config = offline_config();
    config.extraction.language = "cobol".to_string();

    assert!(init_app(config).await.is_err());
}
