//! Task record validation.
//!
//! Validates a record before it is written to the backlog store, catching
//! the malformed titles, ids, and statuses that the store's parser would
//! otherwise misread silently.

use serde::{Deserialize, Serialize};

use crate::patterns::{MARKER_PATTERNS, SPECIAL_CHARS, TASK_ID_ANY, TASK_ID_PADDED, VALID_STATUSES};

/// A task record as handed to the validator. Transient value; the validator
/// never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaskRecord {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: None,
            status: None,
            labels: None,
            description: None,
        }
    }
}

/// Collected diagnostics for one record or filename.
///
/// Errors block acceptance into the store; warnings are advisory. `valid`
/// is derived from `errors` at construction and holds
/// `valid == errors.is_empty()` at all times.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized_title: Option<String>,
}

impl ValidationOutcome {
    /// Build an outcome, deriving `valid` from the error list.
    pub fn from_parts(
        errors: Vec<String>,
        warnings: Vec<String>,
        sanitized_title: Option<String>,
    ) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            sanitized_title,
        }
    }

    /// Merge a filename outcome with a record outcome: filename diagnostics
    /// first, sanitized title from the record side only.
    pub fn merge(filename: Self, record: Self) -> Self {
        let mut errors = filename.errors;
        errors.extend(record.errors);
        let mut warnings = filename.warnings;
        warnings.extend(record.warnings);
        Self::from_parts(errors, warnings, record.sanitized_title)
    }
}

/// Validate a single task record.
///
/// Each marker pattern is tested against the original title; matches are
/// reported as errors and removed from a running accumulator, in table
/// order. The remaining checks (reserved punctuation, length, id shape,
/// status) then run over the accumulator and the record's optional fields.
/// All diagnostics are collected; nothing short-circuits.
pub fn validate_record(record: &TaskRecord) -> ValidationOutcome {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut sanitized = record.title.clone();

    for marker in MARKER_PATTERNS.iter() {
        if marker.pattern.is_match(&record.title) {
            errors.push(format!("Title: {}", marker.message));
            sanitized = marker
                .pattern
                .replace_all(&sanitized, marker.replacement)
                .trim()
                .to_string();
        }
    }

    if SPECIAL_CHARS.is_match(&sanitized) && !sanitized.starts_with('"') {
        warnings.push("Title contains special characters - consider quoting it".to_string());
    }

    if sanitized.is_empty() {
        errors.push("Title is empty after sanitization".to_string());
    } else if sanitized.chars().count() > 100 {
        warnings.push("Title is very long (>100 chars) - consider shortening".to_string());
    }

    if let Some(id) = record.id.as_deref() {
        if !TASK_ID_PADDED.is_match(id) && !TASK_ID_ANY.is_match(id) {
            warnings.push(format!(
                "ID \"{id}\" doesn't match expected format (task-###)"
            ));
        }
    }

    if let Some(status) = record.status.as_deref() {
        if !VALID_STATUSES.contains(&status) {
            warnings.push(format!(
                "Status \"{status}\" may not be recognized. Valid: {}",
                VALID_STATUSES.join(", ")
            ));
        }
    }

    let sanitized_title = if sanitized != record.title {
        Some(sanitized)
    } else {
        None
    };

    ValidationOutcome::from_parts(errors, warnings, sanitized_title)
}
