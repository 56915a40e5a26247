//! Request handling shared by the HTTP API and the terminal chat.
//!
//! [`ChatService::respond`] does what one `/api/chat` call does:
//!
//! ```text
//! ChatRequest ─┬─ Mode::from_name ─▶ PromptBuilder ─┐
//!              ├─ ContextManager(history) ──────────┴─▶ ReplyGenerator ─▶ response
//!              └─ scan_for_corrections(message) ─▶ join_notices ─────────▶ corrections
//! ```
//!
//! The correction scan runs on the raw message and is independent of the
//! model call.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::turn::ChatTurn;
use crate::llm::{ContextManager, LlmError, ReplyGenerator};
use crate::tutor::{join_notices, scan_for_corrections, Mode, PromptBuilder};

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The learner's utterance.
    pub message: String,
    /// Practice mode name; absent or unknown means the base persona.
    #[serde(default)]
    pub mode: Option<String>,
    /// Turns shown so far, excluding `message`.
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, mode: Mode) -> Self {
        Self {
            message: message.into(),
            mode: mode.name().map(str::to_string),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<ChatTurn>) -> Self {
        self.history = history;
        self
    }

    pub fn mode(&self) -> Mode {
        Mode::from_name(self.mode.as_deref())
    }
}

/// Body of a `POST /api/chat` reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The model's reply.
    pub response: String,
    /// Correction notices joined with `". "`, or `null` when there are none.
    pub corrections: Option<String>,
}

// ---------------------------------------------------------------------------
// ChatService
// ---------------------------------------------------------------------------

/// Builds the prompt, calls the model and scans for corrections.
///
/// Cheap to clone; the generator is shared.
#[derive(Clone)]
pub struct ChatService {
    generator: Arc<dyn ReplyGenerator>,
    context: ContextManager,
}

impl ChatService {
    pub fn new(generator: Arc<dyn ReplyGenerator>, context: ContextManager) -> Self {
        Self { generator, context }
    }

    /// Answer one chat request.
    ///
    /// Only the model call can fail; the prompt and the corrections are
    /// always available.
    pub async fn respond(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let mode = request.mode();
        let context = self.context.build_context(&request.history);
        let prompt = PromptBuilder::new(mode).build(&request.message, context.as_deref());

        log::debug!(
            "chat request mode={} history={} message_len={}",
            mode,
            request.history.len(),
            request.message.len()
        );

        let response = self.generator.generate(&prompt).await?;
        let corrections = join_notices(&scan_for_corrections(&request.message));

        Ok(ChatResponse {
            response,
            corrections,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::tutor::BASE_PERSONA;

    /// Records every prompt and answers with a fixed reply.
    #[derive(Default)]
    struct Recording {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ReplyGenerator for Recording {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("Sounds good!".into())
        }
    }

    struct Broken;

    #[async_trait]
    impl ReplyGenerator for Broken {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Timeout)
        }
    }

    fn service_with(generator: Arc<Recording>) -> ChatService {
        ChatService::new(generator, ContextManager::new())
    }

    #[tokio::test]
    async fn reply_and_corrections_are_returned() {
        let generator = Arc::new(Recording::default());
        let service = service_with(generator.clone());

        let response = service
            .respond(&ChatRequest::new("He don't like tea", Mode::Conversation))
            .await
            .unwrap();

        assert_eq!(response.response, "Sounds good!");
        assert_eq!(
            response.corrections.as_deref(),
            Some("\"He don't\" should be \"he doesn't\". Use \"doesn't\" with he/she/it")
        );
    }

    #[tokio::test]
    async fn clean_message_has_no_corrections() {
        let service = service_with(Arc::new(Recording::default()));
        let response = service
            .respond(&ChatRequest::new("Hello, how are you?", Mode::Writing))
            .await
            .unwrap();
        assert_eq!(response.corrections, None);
    }

    #[tokio::test]
    async fn prompt_uses_mode_and_message() {
        let generator = Arc::new(Recording::default());
        let service = service_with(generator.clone());

        service
            .respond(&ChatRequest::new("Teach me a word", Mode::Vocabulary))
            .await
            .unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with(BASE_PERSONA));
        assert!(prompts[0].contains("vocabulary building"));
        assert!(prompts[0].ends_with("\n\nUser: Teach me a word"));
    }

    #[tokio::test]
    async fn unknown_mode_uses_base_persona_only() {
        let generator = Arc::new(Recording::default());
        let service = service_with(generator.clone());

        let request = ChatRequest {
            message: "hi".into(),
            mode: Some("quiz".into()),
            history: Vec::new(),
        };
        service.respond(&request).await.unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts[0], format!("{BASE_PERSONA}\n\nUser: hi"));
    }

    #[tokio::test]
    async fn history_is_rendered_into_prompt() {
        let generator = Arc::new(Recording::default());
        let service = service_with(generator.clone());

        let request = ChatRequest::new("And you?", Mode::Conversation).with_history(vec![
            ChatTurn::user("I am fine"),
            ChatTurn::bot("Glad to hear it!"),
        ]);
        service.respond(&request).await.unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].contains("Previous conversation:\nUser: I am fine\nNimmo: Glad to hear it!"));
    }

    #[tokio::test]
    async fn model_failure_propagates() {
        let service = ChatService::new(Arc::new(Broken), ContextManager::new());
        let err = service
            .respond(&ChatRequest::new("hi", Mode::Conversation))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Timeout));
    }

    #[test]
    fn request_defaults_optional_fields() {
        let request: ChatRequest = serde_json::from_str(r#"{ "message": "hi" }"#).unwrap();
        assert_eq!(request.mode(), Mode::Unspecified);
        assert!(request.history.is_empty());
    }

    #[test]
    fn response_serializes_null_corrections() {
        let json = serde_json::to_value(ChatResponse {
            response: "ok".into(),
            corrections: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "response": "ok", "corrections": null }));
    }
}
