//! Canned grammar-mistake detection.
//!
//! [`MISTAKE_RULES`] is a fixed, ordered table of common learner mistakes.
//! [`scan_for_corrections`] tests an utterance against every rule in table
//! order and reports one [`CorrectionNotice`] per matching rule, quoting the
//! first matching substring verbatim.
//!
//! Every rule phrase is matched case-insensitively and only on whole words:
//! the phrase is escaped and wrapped in `(?i)\b…\b` when the table is
//! compiled, so a rule can never fire inside a larger word.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// ---------------------------------------------------------------------------
// MistakeRule
// ---------------------------------------------------------------------------

/// One known mistake: the wrong phrase, what to say instead, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MistakeRule {
    /// The mistaken phrase as literal text.
    pub phrase: &'static str,
    /// Accepted corrections; more than one means the learner may pick either.
    pub replacements: &'static [&'static str],
    /// Short grammar explanation shown after the correction.
    pub explanation: &'static str,
}

/// Built-in rules.  Table order is the order notices are reported in.
pub static MISTAKE_RULES: &[MistakeRule] = &[
    MistakeRule {
        phrase: "i am going to went",
        replacements: &["I am going to go"],
        explanation: "Use \"go\" after \"going to\"",
    },
    MistakeRule {
        phrase: "he don't",
        replacements: &["he doesn't"],
        explanation: "Use \"doesn't\" with he/she/it",
    },
    MistakeRule {
        phrase: "she don't",
        replacements: &["she doesn't"],
        explanation: "Use \"doesn't\" with he/she/it",
    },
    MistakeRule {
        phrase: "it don't",
        replacements: &["it doesn't"],
        explanation: "Use \"doesn't\" with he/she/it",
    },
    MistakeRule {
        phrase: "i can able to",
        replacements: &["I can", "I am able to"],
        explanation: "Don't use \"can\" and \"able to\" together",
    },
];

// ---------------------------------------------------------------------------
// CorrectionNotice
// ---------------------------------------------------------------------------

/// A correction for one matched rule.
///
/// Renders as `"<matched>" should be "<replacement>". <explanation>`; rules
/// with several replacements render them as `"a" or "b"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionNotice {
    /// The matched text exactly as it appeared in the utterance.
    pub matched: String,
    pub replacements: &'static [&'static str],
    pub explanation: &'static str,
}

impl fmt::Display for CorrectionNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" should be ", self.matched)?;
        for (i, replacement) in self.replacements.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "\"{replacement}\"")?;
        }
        write!(f, ". {}", self.explanation)
    }
}

// ---------------------------------------------------------------------------
// CorrectionScanner
// ---------------------------------------------------------------------------

struct CompiledRule {
    rule: MistakeRule,
    regex: Regex,
}

/// A compiled, immutable rule table.
///
/// The built-in table is compiled once on first use and shared; see
/// [`CorrectionScanner::builtin`].
pub struct CorrectionScanner {
    rules: Vec<CompiledRule>,
}

#[allow(clippy::expect_used)]
static BUILTIN: Lazy<CorrectionScanner> = Lazy::new(|| {
    CorrectionScanner::from_rules(MISTAKE_RULES).expect("built-in mistake rules are valid")
});

impl CorrectionScanner {
    /// Compile `rules`, preserving their order.
    pub fn from_rules(rules: &[MistakeRule]) -> Result<Self, regex::Error> {
        let rules = rules
            .iter()
            .map(|rule| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(rule.phrase));
                Ok(CompiledRule {
                    rule: *rule,
                    regex: Regex::new(&pattern)?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    /// The scanner over [`MISTAKE_RULES`].
    pub fn builtin() -> &'static CorrectionScanner {
        &BUILTIN
    }

    /// One notice per matching rule, in table order.
    pub fn scan(&self, utterance: &str) -> Vec<CorrectionNotice> {
        self.rules
            .iter()
            .filter_map(|compiled| {
                compiled.regex.find(utterance).map(|m| CorrectionNotice {
                    matched: m.as_str().to_string(),
                    replacements: compiled.rule.replacements,
                    explanation: compiled.rule.explanation,
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Scan `utterance` against the built-in rule table.
///
/// ```
/// use nimmo::tutor::scan_for_corrections;
///
/// let notices = scan_for_corrections("He don't like tea");
/// assert_eq!(notices.len(), 1);
/// assert_eq!(
///     notices[0].to_string(),
///     "\"He don't\" should be \"he doesn't\". Use \"doesn't\" with he/she/it"
/// );
/// ```
pub fn scan_for_corrections(utterance: &str) -> Vec<CorrectionNotice> {
    CorrectionScanner::builtin().scan(utterance)
}

/// Flatten notices into one display string joined by `". "`.
///
/// Returns `None` when there is nothing to report.
pub fn join_notices(notices: &[CorrectionNotice]) -> Option<String> {
    if notices.is_empty() {
        return None;
    }
    Some(
        notices
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(". "),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
