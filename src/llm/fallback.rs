//! Fallback generator: wraps any [`ReplyGenerator`] and apologises on error.
//!
//! When the underlying model call fails for any reason (`MissingApiKey`,
//! `Request`, `Timeout`, `Api`, `Parse`, `EmptyResponse`)
//! [`FallbackGenerator`] logs the error and returns [`APOLOGY_REPLY`] instead
//! of propagating it, so the learner always gets a bot turn back.

use async_trait::async_trait;

use crate::llm::generator::{LlmError, ReplyGenerator};

/// Reply used when the model cannot be reached.
pub const APOLOGY_REPLY: &str =
    "I'm sorry, I'm having technical difficulties. Please try again later.";

// ---------------------------------------------------------------------------
// FallbackGenerator
// ---------------------------------------------------------------------------

/// A transparent wrapper around any [`ReplyGenerator`] that never returns an
/// error; on failure it returns [`APOLOGY_REPLY`].
///
/// # Example
/// ```rust
/// use nimmo::config::LlmConfig;
/// use nimmo::llm::{FallbackGenerator, GeminiGenerator};
///
/// let inner = GeminiGenerator::from_config(&LlmConfig::default());
/// let generator = FallbackGenerator::new(inner);
/// // `generator` is safe to use even when the API is unreachable.
/// ```
pub struct FallbackGenerator<G: ReplyGenerator> {
    inner: G,
}

impl<G: ReplyGenerator> FallbackGenerator<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

#[async_trait]
impl<G: ReplyGenerator> ReplyGenerator for FallbackGenerator<G> {
    /// This implementation **never** returns `Err(_)`.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        match self.inner.generate(prompt).await {
            Ok(reply) => Ok(reply),
            Err(err) => {
                log::error!("model call failed, sending apology reply: {err}");
                Ok(APOLOGY_REPLY.to_string())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
