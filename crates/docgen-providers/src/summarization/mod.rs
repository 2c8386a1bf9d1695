//! Summarization adapter implementations
//!
//! Each adapter wraps one way of reaching a pretrained sequence-to-sequence
//! model. Decoding parameters always come from the request's verbosity preset.
//!
//! ## Available Adapters
//!
//! | Adapter | Backend | Notes |
//! |---------|---------|-------|
//! | [`HuggingFaceSummarizer`] | HF Inference API / TGI | Default, CodeT5 summarization model |
//! | [`OllamaSummarizer`] | Local Ollama server | Instruction-tuned code models |
//! | [`NullSummarizer`] | None | Deterministic output for tests |

pub mod helpers;
pub mod null;

#[cfg(feature = "summarization-huggingface")]
pub mod huggingface;
#[cfg(feature = "summarization-ollama")]
pub mod ollama;

pub use null::NullSummarizer;

#[cfg(feature = "summarization-huggingface")]
pub use huggingface::HuggingFaceSummarizer;
#[cfg(feature = "summarization-ollama")]
pub use ollama::OllamaSummarizer;
