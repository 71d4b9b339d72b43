//! Task filename validation.
//!
//! Store files are named `task-<digits> - <title>.md`. Bracket characters
//! are rejected outright; the shape check runs independently so a bracketed
//! filename that also fails the shape reports both problems.

use crate::patterns::FILENAME_SHAPE;
use crate::validate::ValidationOutcome;

/// Validate a task filename against the store's naming convention.
///
/// The returned outcome never carries a sanitized title.
pub fn validate_filename(filename: &str) -> ValidationOutcome {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if filename.contains('[') || filename.contains(']') {
        errors.push(
            "Filename contains [ or ] - these cause file system and parsing issues".to_string(),
        );
    }

    match FILENAME_SHAPE.captures(filename) {
        None => {
            errors.push(
                "Filename doesn't match expected format: \"task-### - Title.md\"".to_string(),
            );
        }
        Some(caps) => {
            let task_num = &caps[1];
            let title = &caps[2];

            if task_num.len() < 3 {
                warnings.push("Task number should be zero-padded (e.g., task-001)".to_string());
            }

            if title.chars().count() > 50 {
                warnings.push(
                    "Title in filename is long - may cause issues on some systems".to_string(),
                );
            }
        }
    }

    ValidationOutcome::from_parts(errors, warnings, None)
}
