//! Chat turns and the per-session transcript.
//!
//! [`ChatTurn`] is the tagged value the front-end keeps for every bubble in
//! the chat window.  Its JSON shape matches what the browser page sends as
//! `history`:
//!
//! ```json
//! { "type": "correction", "text": "...", "original": "He don't like tea" }
//! ```

use serde::{Deserialize, Serialize};

/// Greeting shown as the first bot turn of every session.
pub const GREETING: &str =
    "Hello! I'm Nimmo, your English speaking companion. Let's practice English together!";

// ---------------------------------------------------------------------------
// ChatTurn
// ---------------------------------------------------------------------------

/// One entry in the chat window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatTurn {
    /// Something the learner typed or said.
    User { text: String },
    /// A reply from the model.
    Bot { text: String },
    /// Flattened correction notices for the learner's last utterance.
    Correction {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        original: Option<String>,
    },
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self::User { text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::Bot { text: text.into() }
    }

    pub fn correction(text: impl Into<String>, original: impl Into<String>) -> Self {
        Self::Correction {
            text: text.into(),
            original: Some(original.into()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::User { text } | Self::Bot { text } | Self::Correction { text, .. } => text,
        }
    }

    /// Whether the turn is part of the dialogue with the model (user or bot).
    pub fn is_dialogue(&self) -> bool {
        matches!(self, Self::User { .. } | Self::Bot { .. })
    }
}

// ---------------------------------------------------------------------------
// Transcript
// ---------------------------------------------------------------------------

/// Ordered turns of one chat session, seeded with [`GREETING`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            turns: vec![ChatTurn::bot(GREETING)],
        }
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_starts_with_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.turns()[0], ChatTurn::bot(GREETING));
    }

    #[test]
    fn turns_serialize_with_type_tag() {
        let json = serde_json::to_value(ChatTurn::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "user", "text": "hi" }));

        let json = serde_json::to_value(ChatTurn::correction("fix", "orig")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "correction", "text": "fix", "original": "orig" })
        );
    }

    #[test]
    fn correction_without_original_deserializes() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{ "type": "correction", "text": "fix" }"#).unwrap();
        assert_eq!(
            turn,
            ChatTurn::Correction {
                text: "fix".into(),
                original: None
            }
        );
        assert!(!turn.is_dialogue());
        assert_eq!(turn.text(), "fix");
    }
}
