//! Nimmo, an English-practice chat companion.
//!
//! * [`tutor`]: mode prompts and canned grammar corrections (pure core).
//! * [`llm`]: generative-language client, fallback and conversation context.
//! * [`chat`]: turns, sessions and the request service.
//! * [`server`]: `POST /api/chat` HTTP API.
//! * [`app`]: terminal chat front-end.
//! * [`config`]: `settings.toml` loading.

pub mod app;
pub mod chat;
pub mod config;
pub mod llm;
pub mod server;
pub mod tutor;
