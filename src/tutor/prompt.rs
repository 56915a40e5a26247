//! Prompt builder for the Nimmo tutor persona.
//!
//! [`build_prompt`] produces the system prompt for a [`Mode`]: a fixed base
//! persona followed by one behavioural suffix.  [`PromptBuilder`] wraps it
//! and also renders the flat request text sent to the model, i.e. the
//! system prompt, an optional conversation-context block, and the learner's
//! message.

use super::mode::Mode;

// ---------------------------------------------------------------------------
// Persona text
// ---------------------------------------------------------------------------

/// Shared by every mode.
pub const BASE_PERSONA: &str = "You are Nimmo, a professional English speaking bot designed \
to help users improve their English. You are friendly, encouraging, and patient. Always \
respond in clear, proper English.";

const CONVERSATION_SUFFIX: &str = "Engage in natural conversation on any topic. Help users \
practice speaking English fluently. If they make mistakes, gently correct them and explain why.";

const VOCABULARY_SUFFIX: &str = "Focus on vocabulary building. Introduce new words, explain \
their meanings, provide examples, and help users remember them through context and usage.";

const WRITING_SUFFIX: &str = "Help users improve their writing skills. Review their text, \
suggest improvements, explain grammar rules, and provide writing tips.";

/// Behavioural suffix for `mode`, `None` when the base persona stands alone.
pub fn mode_suffix(mode: Mode) -> Option<&'static str> {
    match mode {
        Mode::Conversation => Some(CONVERSATION_SUFFIX),
        Mode::Vocabulary => Some(VOCABULARY_SUFFIX),
        Mode::Writing => Some(WRITING_SUFFIX),
        Mode::Unspecified => None,
    }
}

/// Build the system prompt for `mode`.
///
/// ```
/// use nimmo::tutor::{build_prompt, Mode, BASE_PERSONA};
///
/// assert_eq!(build_prompt(Mode::Unspecified), BASE_PERSONA);
/// assert!(build_prompt(Mode::Writing).starts_with(BASE_PERSONA));
/// ```
pub fn build_prompt(mode: Mode) -> String {
    match mode_suffix(mode) {
        Some(suffix) => format!("{BASE_PERSONA} {suffix}"),
        None => BASE_PERSONA.to_string(),
    }
}

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds model requests for one practice mode.
///
/// # Example
/// ```rust
/// use nimmo::tutor::{Mode, PromptBuilder};
///
/// let builder = PromptBuilder::new(Mode::Vocabulary);
/// let text = builder.build("What does 'brisk' mean?", None);
/// assert!(text.ends_with("User: What does 'brisk' mean?"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    mode: Mode,
}

impl PromptBuilder {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The system prompt for this builder's mode.
    pub fn system_prompt(&self) -> String {
        build_prompt(self.mode)
    }

    /// Build the **flat** request text for the generative-language API.
    ///
    /// Structure (in order):
    /// 1. System prompt
    /// 2. Context block (if provided), e.g. previous turns
    /// 3. `User: <message>`
    pub fn build(&self, message: &str, context: Option<&str>) -> String {
        let mut prompt = String::with_capacity(512 + message.len());
        prompt.push_str(&self.system_prompt());
        if let Some(ctx) = context {
            prompt.push_str("\n\n");
            prompt.push_str(ctx.trim_end());
        }
        prompt.push_str("\n\nUser: ");
        prompt.push_str(message);
        prompt
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
