//! Text generation port for inference adapters.
//!
//! Defines the seam between the answering boundary and whatever backend
//! actually produces text.

use async_trait::async_trait;

use crate::error::Result;

/// Client for remote text generation.
///
/// Implementations wrap a hosted inference backend and handle
/// authentication and response normalization.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`); the answering
/// boundary may be shared across tasks.
///
/// # Errors
///
/// The [`generate`](Self::generate) method returns an error for transport
/// failures, upstream unavailability, or invalid responses. Implementations
/// perform at most one network call per invocation and never retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Return the backend name for logging.
    fn name(&self) -> &'static str;

    /// Send the question to the backend and return the generated text.
    async fn generate(&self, question: &str) -> Result<String>;
}
