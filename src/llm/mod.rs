//! Model access for Nimmo.
//!
//! This module provides:
//! * [`ReplyGenerator`]: async trait implemented by all model backends.
//! * [`GeminiGenerator`]: generative-language `generateContent` client.
//! * [`FallbackGenerator`]: wraps any generator; apologises on failure.
//! * [`ContextManager`]: renders recent chat turns for the request.
//! * [`LlmError`]: error variants for model calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use nimmo::config::AppConfig;
//! use nimmo::llm::{FallbackGenerator, GeminiGenerator, ReplyGenerator};
//! use nimmo::tutor::{Mode, PromptBuilder};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let generator = FallbackGenerator::new(GeminiGenerator::from_config(&config.llm));
//!
//!     let prompt = PromptBuilder::new(Mode::Conversation).build("Hi Nimmo!", None);
//!     let reply = generator.generate(&prompt).await.unwrap();
//!     println!("{reply}");
//! }
//! ```

pub mod context;
pub mod fallback;
pub mod generator;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use context::ContextManager;
pub use fallback::{FallbackGenerator, APOLOGY_REPLY};
pub use generator::{GeminiGenerator, LlmError, ReplyGenerator};
