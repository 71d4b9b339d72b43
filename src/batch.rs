//! Batch validation over (filename, record) pairs.
//!
//! A convenience for pre-commit hooks and CI: one pass over every staged
//! task, one merged outcome per task. Pure mapping; the caller loads the
//! records.

use serde::{Deserialize, Serialize};

use crate::filename::validate_filename;
use crate::validate::{validate_record, TaskRecord, ValidationOutcome};

/// One task to validate: its external filename and its record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    pub filename: String,
    pub record: TaskRecord,
}

/// Merged filename + record diagnostics for one task.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub filename: String,
    pub outcome: ValidationOutcome,
}

/// Validate every item, preserving input order, one outcome per input.
///
/// Filename and record are validated independently and merged: filename
/// diagnostics first, `valid` iff both sides are valid, sanitized title
/// from the record side only.
pub fn validate_all(items: &[BatchItem]) -> Vec<BatchOutcome> {
    items
        .iter()
        .map(|item| {
            let filename_outcome = validate_filename(&item.filename);
            let record_outcome = validate_record(&item.record);
            BatchOutcome {
                filename: item.filename.clone(),
                outcome: ValidationOutcome::merge(filename_outcome, record_outcome),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(filename: &str, title: &str) -> BatchItem {
        BatchItem {
            filename: filename.to_string(),
            record: TaskRecord::with_title(title),
        }
    }

    #[test]
    fn preserves_input_order_and_arity() {
        let items = vec![
            item("task-001 - One.md", "One"),
            item("task-002 - Two.md", "Two"),
            item("task-003 - Three.md", "Three"),
        ];
        let results = validate_all(&items);
        assert_eq!(results.len(), 3);
        let names: Vec<&str> = results.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "task-001 - One.md",
                "task-002 - Two.md",
                "task-003 - Three.md"
            ]
        );
    }

    #[test]
    fn filename_errors_come_before_record_errors() {
        let items = vec![item("bad name.txt", "[P] marked")];
        let results = validate_all(&items);
        let outcome = &results[0].outcome;
        assert!(!outcome.valid);
        assert!(outcome.errors[0].contains("expected format"));
        assert!(outcome.errors[1].contains("[P] marker"));
    }

    #[test]
    fn valid_requires_both_sides() {
        let both_ok = validate_all(&[item("task-001 - Fine.md", "Fine")]);
        assert!(both_ok[0].outcome.valid);

        let bad_filename = validate_all(&[item("nope.md", "Fine")]);
        assert!(!bad_filename[0].outcome.valid);

        let bad_record = validate_all(&[item("task-001 - Fine.md", "[US3] marked")]);
        assert!(!bad_record[0].outcome.valid);
    }

    #[test]
    fn warnings_merge_without_affecting_validity() {
        let results = validate_all(&[item("task-1 - Fine.md", "Deploy: staging")]);
        let outcome = &results[0].outcome;
        assert!(outcome.valid);
        assert_eq!(outcome.warnings.len(), 2);
        assert!(outcome.warnings[0].contains("zero-padded"));
        assert!(outcome.warnings[1].contains("special characters"));
    }

    #[test]
    fn sanitized_title_comes_from_the_record_side() {
        let results = validate_all(&[item("task-001 - Fine.md", "[P] Fine")]);
        assert_eq!(
            results[0].outcome.sanitized_title.as_deref(),
            Some("Fine")
        );

        let results = validate_all(&[item("[P] bad.md", "Fine")]);
        assert_eq!(results[0].outcome.sanitized_title, None);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(validate_all(&[]).is_empty());
    }
}
