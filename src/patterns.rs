//! Marker patterns and format constants for the backlog flat-file store.
//!
//! The store keeps one task per `task-NNN - Title.md` file with a
//! YAML-adjacent header, so titles must not carry bracketed markers or
//! unquoted reserved punctuation. Everything the validator and the
//! sanitizer detect is defined here, once.

use once_cell::sync::Lazy;
use regex::Regex;

/// A title substring that breaks the flat-file format, with the diagnostic
/// to report and the replacement to apply.
pub struct MarkerPattern {
    pub pattern: Regex,
    pub message: &'static str,
    pub replacement: &'static str,
}

/// `[P]` / `[p]` parallelizable marker, anywhere in the title.
pub static PARALLEL_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\[P\]").unwrap());

/// `[US<digits>]` user-story marker, anywhere in the title.
pub static USER_STORY_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\[US\d+\]").unwrap());

/// `T<three digits>` prefix at the start of the title.
pub static TASK_NUMBER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^T\d{3}\s*").unwrap());

/// Any leading bracketed chunk, non-greedy.
pub static LEADING_BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[.*?\]\s*").unwrap());

/// The fixed detection table. Order matters: diagnostics are reported and
/// removals applied in this order, and every matching entry is applied.
pub static MARKER_PATTERNS: Lazy<Vec<MarkerPattern>> = Lazy::new(|| {
    vec![
        MarkerPattern {
            pattern: PARALLEL_MARKER.clone(),
            message: "[P] marker found - use \"parallelizable\" label instead",
            replacement: "",
        },
        MarkerPattern {
            pattern: USER_STORY_MARKER.clone(),
            message: "[US#] marker found - use label instead",
            replacement: "",
        },
        MarkerPattern {
            pattern: TASK_NUMBER_PREFIX.clone(),
            message: "T### prefix found - Backlog.md uses task-### format",
            replacement: "",
        },
        MarkerPattern {
            pattern: LEADING_BRACKET.clone(),
            message: "Leading [...] found - will break YAML parsing",
            replacement: "",
        },
    ]
});

/// Characters that are reserved in the store's header syntax and need the
/// title quoted to survive.
pub static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[:\[\]{}#&*!|>'"%@`]"#).unwrap());

/// Zero-padded task id, the preferred shape.
pub static TASK_ID_PADDED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^task-\d{3}$").unwrap());

/// Any-width task id, accepted with a warning.
pub static TASK_ID_ANY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^task-\d+$").unwrap());

/// Whole-filename shape: `task-<digits> - <title>.md`, capturing the digit
/// run and the title segment.
pub static FILENAME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^task-(\d+) - (.+)\.md$").unwrap());

/// Statuses the store recognizes, exact match.
pub const VALID_STATUSES: [&str; 3] = ["To Do", "In Progress", "Done"];
