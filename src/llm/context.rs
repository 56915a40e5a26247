//! Rolling-window conversation context for model requests.
//!
//! [`ContextManager`] takes the chat history the front-end sends along with
//! each message and keeps the last *N* dialogue turns. It renders them as a
//! compact block that [`PromptBuilder`](crate::tutor::PromptBuilder) embeds
//! between the system prompt and the learner's message:
//!
//! ```text
//! Previous conversation:
//! Nimmo: Hello! I'm Nimmo, ...
//! User: I like tea
//! Nimmo: Tea is lovely! ...
//! ```
//!
//! Correction turns are display-only and never reach the model.

use crate::chat::ChatTurn;

/// Label used for bot turns in the rendered context.
const BOT_LABEL: &str = "Nimmo";

/// Selects and renders the most recent dialogue turns.
///
/// # Example
/// ```rust
/// use nimmo::chat::ChatTurn;
/// use nimmo::llm::ContextManager;
///
/// let mgr = ContextManager::with_capacity(4);
/// let history = vec![ChatTurn::user("hi"), ChatTurn::bot("Hello!")];
/// let ctx = mgr.build_context(&history).unwrap();
/// assert!(ctx.contains("User: hi"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ContextManager {
    max_turns: usize,
}

impl ContextManager {
    /// Default window: the last 6 dialogue turns.
    pub fn new() -> Self {
        Self { max_turns: 6 }
    }

    /// Custom window size; `0` disables context entirely.
    pub fn with_capacity(max_turns: usize) -> Self {
        Self { max_turns }
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Build the context block for `history`, oldest turn first.
    ///
    /// Returns `None` when the window is disabled or `history` holds no
    /// dialogue turns.
    pub fn build_context(&self, history: &[ChatTurn]) -> Option<String> {
        if self.max_turns == 0 {
            return None;
        }

        let mut recent: Vec<&ChatTurn> = history
            .iter()
            .rev()
            .filter(|turn| turn.is_dialogue())
            .take(self.max_turns)
            .collect();
        if recent.is_empty() {
            return None;
        }
        recent.reverse();

        let mut ctx = String::with_capacity(512);
        ctx.push_str("Previous conversation:\n");
        for turn in recent {
            let speaker = match turn {
                ChatTurn::User { .. } => "User",
                _ => BOT_LABEL,
            };
            ctx.push_str(&format!("{}: {}\n", speaker, turn.text().trim()));
        }

        Some(ctx)
    }
}

impl Default for ContextManager {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
