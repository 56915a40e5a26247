//! Chat orchestration: turns, sessions and the request service.
//!
//! * [`ChatTurn`] / [`Transcript`]: what the learner sees.
//! * [`ChatService`]: prompt → model → corrections for one request.
//! * [`ChatSession`]: a transcript plus the current mode, driven by the
//!   terminal chat.

pub mod service;
pub mod session;
pub mod turn;

pub use service::{ChatRequest, ChatResponse, ChatService};
pub use session::ChatSession;
pub use turn::{ChatTurn, Transcript, GREETING};
