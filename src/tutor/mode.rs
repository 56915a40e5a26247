//! Practice modes selectable by the learner.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The practice focus that biases the generated prompt.
///
/// `Unspecified` is the fallback for an absent or unrecognised mode name; it
/// yields the base persona with no behavioural suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Natural dialogue coaching.
    Conversation,
    /// Introduce and reinforce new words.
    Vocabulary,
    /// Review and improve written text.
    Writing,
    /// No recognised mode: base persona only.
    Unspecified,
}

impl Mode {
    /// Every mode the learner can pick, in menu order.
    pub const SELECTABLE: [Mode; 3] = [Mode::Conversation, Mode::Vocabulary, Mode::Writing];

    /// Map an optional mode name onto a [`Mode`].
    ///
    /// Matching is exact and case-sensitive: `"conversation"`,
    /// `"vocabulary"` and `"writing"` select their mode, everything else
    /// (including `""` and `None`) is [`Mode::Unspecified`].
    ///
    /// ```
    /// use nimmo::tutor::Mode;
    ///
    /// assert_eq!(Mode::from_name(Some("writing")), Mode::Writing);
    /// assert_eq!(Mode::from_name(Some("quiz")), Mode::Unspecified);
    /// assert_eq!(Mode::from_name(None), Mode::Unspecified);
    /// ```
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("conversation") => Mode::Conversation,
            Some("vocabulary") => Mode::Vocabulary,
            Some("writing") => Mode::Writing,
            _ => Mode::Unspecified,
        }
    }

    /// The wire name of this mode, `None` for [`Mode::Unspecified`].
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Mode::Conversation => Some("conversation"),
            Mode::Vocabulary => Some("vocabulary"),
            Mode::Writing => Some("writing"),
            Mode::Unspecified => None,
        }
    }

    /// A short label for menus and status lines.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Conversation => "Conversation",
            Mode::Vocabulary => "Vocabulary",
            Mode::Writing => "Writing",
            Mode::Unspecified => "General",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Conversation
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("unspecified"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_select_their_mode() {
        assert_eq!(Mode::from_name(Some("conversation")), Mode::Conversation);
        assert_eq!(Mode::from_name(Some("vocabulary")), Mode::Vocabulary);
        assert_eq!(Mode::from_name(Some("writing")), Mode::Writing);
    }

    #[test]
    fn unknown_names_fall_back_to_unspecified() {
        for name in ["quiz", "", "Conversation", " writing", "WRITING"] {
            assert_eq!(
                Mode::from_name(Some(name)),
                Mode::Unspecified,
                "{name:?} must not select a mode"
            );
        }
        assert_eq!(Mode::from_name(None), Mode::Unspecified);
    }

    #[test]
    fn name_round_trips_through_from_name() {
        for mode in Mode::SELECTABLE {
            assert_eq!(Mode::from_name(mode.name()), mode);
        }
        assert_eq!(Mode::Unspecified.name(), None);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Mode::Vocabulary).unwrap();
        assert_eq!(json, "\"vocabulary\"");
        let mode: Mode = serde_json::from_str("\"writing\"").unwrap();
        assert_eq!(mode, Mode::Writing);
    }
}
