//! Tutor core: prompt construction and canned grammar corrections.
//!
//! This module provides:
//! * [`Mode`]: practice focus (conversation / vocabulary / writing).
//! * [`build_prompt`] / [`PromptBuilder`]: mode-specific persona prompts.
//! * [`scan_for_corrections`] / [`CorrectionScanner`]: regex-based mistake
//!   detection over the fixed [`MISTAKE_RULES`] table.
//!
//! Everything here is pure and synchronous.  The prompt builder and the
//! scanner are independent of each other.
//!
//! # Quick start
//!
//! ```rust
//! use nimmo::tutor::{build_prompt, join_notices, scan_for_corrections, Mode};
//!
//! let prompt = build_prompt(Mode::from_name(Some("conversation")));
//! assert!(prompt.contains("Nimmo"));
//!
//! let notices = scan_for_corrections("I am going to went home");
//! assert_eq!(
//!     join_notices(&notices).as_deref(),
//!     Some("\"I am going to went\" should be \"I am going to go\". Use \"go\" after \"going to\"")
//! );
//! ```

pub mod corrections;
pub mod mode;
pub mod prompt;

pub use corrections::{
    join_notices, scan_for_corrections, CorrectionNotice, CorrectionScanner, MistakeRule,
    MISTAKE_RULES,
};
pub use mode::Mode;
pub use prompt::{build_prompt, mode_suffix, PromptBuilder, BASE_PERSONA};
