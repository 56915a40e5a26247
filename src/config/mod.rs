//! Configuration module for Nimmo.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the server,
//! model API and chat session, `AppPaths` for the platform config directory,
//! and TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, ChatConfig, LlmConfig, ServerConfig, API_KEY_ENV};
