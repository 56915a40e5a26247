//! One learner's chat session.
//!
//! [`ChatSession`] owns the [`Transcript`] and the current [`Mode`] and turns
//! each submitted utterance into new turns:
//!
//! 1. blank input is ignored;
//! 2. the user turn is appended;
//! 3. the service is called with the history as it was before step 2;
//! 4. a bot turn is appended, followed by a correction turn when the
//!    utterance matched any mistake rule.
//!
//! A failed model call still yields a bot turn (the fallback apology) so the
//! transcript never ends on an unanswered user turn.

use super::service::{ChatRequest, ChatService};
use super::turn::{ChatTurn, Transcript};
use crate::llm::APOLOGY_REPLY;
use crate::tutor::{join_notices, scan_for_corrections, Mode};

pub struct ChatSession {
    service: ChatService,
    transcript: Transcript,
    mode: Mode,
}

impl ChatSession {
    pub fn new(service: ChatService, mode: Mode) -> Self {
        Self {
            service,
            transcript: Transcript::new(),
            mode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        log::debug!("practice mode switched to {mode}");
        self.mode = mode;
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Submit one utterance and return the turns it added.
    ///
    /// Returns an empty slice when `input` is blank.
    pub async fn send(&mut self, input: &str) -> &[ChatTurn] {
        let message = input.trim();
        if message.is_empty() {
            return &[];
        }

        let start = self.transcript.len();
        let request = ChatRequest::new(message, self.mode)
            .with_history(self.transcript.turns().to_vec());
        self.transcript.push(ChatTurn::user(message));

        match self.service.respond(&request).await {
            Ok(response) => {
                self.transcript.push(ChatTurn::bot(response.response));
                if let Some(corrections) = response.corrections {
                    self.transcript
                        .push(ChatTurn::correction(corrections, message));
                }
            }
            Err(err) => {
                log::error!("chat request failed: {err}");
                self.transcript.push(ChatTurn::bot(APOLOGY_REPLY));
                if let Some(corrections) = join_notices(&scan_for_corrections(message)) {
                    self.transcript
                        .push(ChatTurn::correction(corrections, message));
                }
            }
        }

        &self.transcript.turns()[start..]
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::llm::{ContextManager, LlmError, ReplyGenerator};

    #[derive(Default)]
    struct Echo {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ReplyGenerator for Echo {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("Nice!".into())
        }
    }

    struct Broken;

    #[async_trait]
    impl ReplyGenerator for Broken {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyResponse)
        }
    }

    fn session(generator: Arc<dyn ReplyGenerator>) -> ChatSession {
        ChatSession::new(
            ChatService::new(generator, ContextManager::new()),
            Mode::Conversation,
        )
    }

    #[tokio::test]
    async fn blank_input_adds_nothing() {
        let mut session = session(Arc::new(Echo::default()));
        assert!(session.send("   ").await.is_empty());
        assert_eq!(session.transcript().len(), 1);
    }

    #[tokio::test]
    async fn clean_utterance_adds_user_and_bot_turns() {
        let mut session = session(Arc::new(Echo::default()));
        let added = session.send("  Hello, how are you?  ").await.to_vec();
        assert_eq!(
            added,
            vec![ChatTurn::user("Hello, how are you?"), ChatTurn::bot("Nice!")]
        );
    }

    #[tokio::test]
    async fn mistake_adds_correction_turn() {
        let mut session = session(Arc::new(Echo::default()));
        let added = session.send("It don't matter").await.to_vec();
        assert_eq!(added.len(), 3);
        assert_eq!(
            added[2],
            ChatTurn::correction(
                "\"It don't\" should be \"it doesn't\". Use \"doesn't\" with he/she/it",
                "It don't matter"
            )
        );
    }

    #[tokio::test]
    async fn history_excludes_current_message() {
        let echo = Arc::new(Echo::default());
        let mut session = session(echo.clone());
        session.send("first").await;
        session.send("second").await;

        let prompts = echo.prompts.lock().unwrap();
        assert!(!prompts[0].contains("User: first\n"));
        assert!(prompts[1].contains("User: first\nNimmo: Nice!\n"));
        assert!(prompts[1].ends_with("User: second"));
    }

    #[tokio::test]
    async fn failure_still_answers_and_corrects() {
        let mut session = session(Arc::new(Broken));
        let added = session.send("I can able to help").await.to_vec();
        assert_eq!(added.len(), 3);
        assert_eq!(added[1], ChatTurn::bot(APOLOGY_REPLY));
        assert!(matches!(added[2], ChatTurn::Correction { .. }));
    }

    #[tokio::test]
    async fn mode_switch_changes_prompt() {
        let echo = Arc::new(Echo::default());
        let mut session = session(echo.clone());
        session.set_mode(Mode::Writing);
        session.send("Please review this").await;
        assert_eq!(session.mode(), Mode::Writing);
        assert!(echo.prompts.lock().unwrap()[0].contains("writing skills"));
    }
}
