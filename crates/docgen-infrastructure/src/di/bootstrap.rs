//! Composition root
//!
//! [`init_app`] turns an [`AppConfig`] into a ready [`AppContext`]. Startup is
//! the only place the summarization model is brought up; if it cannot be
//! reached the whole startup fails with `ModelUnavailable`.
//!
//! ```rust,ignore
//! let context = init_app(config).await?;
//! let results = context.documentation().generate(request).await?;
//! ```

use std::sync::Arc;

use docgen_application::domain_services::DocumentationServiceInterface;
use docgen_application::use_cases::DocumentationServiceImpl;
use docgen_domain::error::{Error, Result};
use docgen_domain::ports::providers::EntityExtractor;
use docgen_domain::repositories::HistoryRepository;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::di::handle::SummarizerHandle;
use crate::di::resolvers::{resolve_extractor, resolve_history, resolve_summarizer};

/// Application context shared by the server and the CLI
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    extractor: Arc<dyn EntityExtractor>,
    summarizer: Arc<SummarizerHandle>,
    history: Arc<dyn HistoryRepository>,
    documentation: Arc<dyn DocumentationServiceInterface>,
}

impl AppContext {
    /// Assemble a context from already resolved parts
    pub fn new(
        config: AppConfig,
        extractor: Arc<dyn EntityExtractor>,
        summarizer: Arc<SummarizerHandle>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        let documentation: Arc<dyn DocumentationServiceInterface> =
            Arc::new(DocumentationServiceImpl::new(
                extractor.clone(),
                summarizer.clone(),
                history.clone(),
            ));
        Self {
            config: Arc::new(config),
            extractor,
            summarizer,
            history,
            documentation,
        }
    }

    /// Documentation use case
    pub fn documentation(&self) -> Arc<dyn DocumentationServiceInterface> {
        self.documentation.clone()
    }

    /// Summarizer handle (readiness, provider and model names)
    pub fn summarizer(&self) -> Arc<SummarizerHandle> {
        self.summarizer.clone()
    }

    /// Entity extractor
    pub fn extractor(&self) -> Arc<dyn EntityExtractor> {
        self.extractor.clone()
    }

    /// History store
    pub fn history(&self) -> Arc<dyn HistoryRepository> {
        self.history.clone()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("extractor", &self.extractor.provider_name())
            .field("summarizer", &self.summarizer)
            .field("history", &self.history.provider_name())
            .finish()
    }
}

/// Resolve all providers and bring up the summarization model
///
/// Fails with `ModelUnavailable` when `verify_on_startup` is set and the model
/// does not answer the startup health check.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let extractor = resolve_extractor(&config.extraction)?;

    let provider = resolve_summarizer(&config.summarization)?;
    let provider_name = provider.provider_name().to_string();
    let model = provider.model().to_string();
    if config.summarization.verify_on_startup {
        provider.health_check().await.map_err(|e| {
            error!(provider = %provider_name, model = %model, error = %e, "Summarization model health check failed");
            Error::model_unavailable(format!("{provider_name} ({model}): {e}"))
        })?;
    }
    let summarizer = Arc::new(SummarizerHandle::new(
        config.summarization.serialize_inference,
    ));
    summarizer.install(provider)?;

    let history = resolve_history(&config.history)?;

    info!(
        extractor = extractor.provider_name(),
        provider = %provider_name,
        model = %model,
        history = history.provider_name(),
        "Application initialized"
    );

    Ok(AppContext::new(config, extractor, summarizer, history))
}
