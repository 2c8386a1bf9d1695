//! Summarizer handle with readiness flag
//!
//! The model adapter is expensive to bring up and shared by every request.
//! It is installed once during startup into this handle, which the
//! orchestrator receives as its summarization port. Every call goes through
//! the readiness check, so a request reaching an uninitialized model fails
//! with `ModelUnavailable` instead of crashing.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use docgen_domain::error::{Error, Result};
use docgen_domain::ports::providers::SummarizationProvider;
use docgen_domain::value_objects::Verbosity;

const UNAVAILABLE: &str = "unavailable";

/// Write-once slot for the summarization adapter
pub struct SummarizerHandle {
    provider: OnceLock<Arc<dyn SummarizationProvider>>,
    inference_lock: Option<Mutex<()>>,
}

impl SummarizerHandle {
    /// Create an empty handle
    ///
    /// With `serialize_inference` at most one model call runs at a time.
    pub fn new(serialize_inference: bool) -> Self {
        Self {
            provider: OnceLock::new(),
            inference_lock: serialize_inference.then(|| Mutex::new(())),
        }
    }

    /// Create a handle that is already ready
    pub fn ready(provider: Arc<dyn SummarizationProvider>, serialize_inference: bool) -> Self {
        let handle = Self::new(serialize_inference);
        // Fresh slot, cannot be occupied yet
        let _ = handle.provider.set(provider);
        handle
    }

    /// Install the adapter; fails if one is already installed
    pub fn install(&self, provider: Arc<dyn SummarizationProvider>) -> Result<()> {
        let name = provider.provider_name().to_string();
        self.provider
            .set(provider)
            .map_err(|_| Error::internal("Summarization provider already installed"))?;
        debug!(provider = %name, "Summarization provider installed");
        Ok(())
    }

    /// Whether an adapter has been installed
    pub fn is_ready(&self) -> bool {
        self.provider.get().is_some()
    }

    /// Installed adapter, or `ModelUnavailable`
    pub fn get(&self) -> Result<Arc<dyn SummarizationProvider>> {
        self.provider
            .get()
            .cloned()
            .ok_or_else(|| Error::model_unavailable("summarization model is not initialized"))
    }
}

impl std::fmt::Debug for SummarizerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerHandle")
            .field("ready", &self.is_ready())
            .field("serialized", &self.inference_lock.is_some())
            .finish()
    }
}

#[async_trait]
impl SummarizationProvider for SummarizerHandle {
    async fn summarize(&self, source_text: &str, verbosity: Verbosity) -> Result<String> {
        let provider = self.get()?;
        let _guard = match &self.inference_lock {
            Some(lock) => Some(lock.lock().await),
            None => None,
        };
        provider.summarize(source_text, verbosity).await
    }

    fn model(&self) -> &str {
        self.provider.get().map_or(UNAVAILABLE, |p| p.model())
    }

    fn provider_name(&self) -> &str {
        self.provider
            .get()
            .map_or(UNAVAILABLE, |p| p.provider_name())
    }

    async fn health_check(&self) -> Result<()> {
        self.get()?.health_check().await
    }
}
