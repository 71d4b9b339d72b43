//! taskcheck batch command implementation.
//!
//! Reads newline-delimited JSON items from stdin or `--input`, one
//! `{"filename": ..., "record": {...}}` object per line, and reports a
//! merged outcome per item.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use serde::Serialize;

use crate::batch::{validate_all, BatchItem, BatchOutcome};
use crate::error::{exit_codes, Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct BatchOptions {
    pub input: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct BatchReport {
    total: usize,
    invalid: usize,
    results: Vec<BatchOutcome>,
}

pub fn run_batch(options: BatchOptions) -> Result<i32> {
    let items = match &options.input {
        Some(path) => {
            if !path.exists() {
                return Err(Error::InputNotFound(path.clone()));
            }
            read_items(BufReader::new(File::open(path)?))?
        }
        None => read_items(std::io::stdin().lock())?,
    };

    tracing::debug!(items = items.len(), "loaded batch input");

    let results = validate_all(&items);
    let invalid = results.iter().filter(|r| !r.outcome.valid).count();
    let report = BatchReport {
        total: results.len(),
        invalid,
        results,
    };

    let human = describe_report(&report);
    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "batch",
        &report,
        Some(&human),
    )?;

    Ok(if report.invalid == 0 {
        exit_codes::SUCCESS
    } else {
        exit_codes::VALIDATION_FAILED
    })
}

fn read_items<R: BufRead>(reader: R) -> Result<Vec<BatchItem>> {
    let mut items = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let item: BatchItem =
            serde_json::from_str(&line).map_err(|err| Error::MalformedBatchLine {
                line: index + 1,
                message: err.to_string(),
            })?;
        items.push(item);
    }

    Ok(items)
}

fn describe_report(report: &BatchReport) -> HumanOutput {
    let verdict = if report.invalid == 0 {
        "all valid"
    } else {
        "invalid items found"
    };
    let mut human = HumanOutput::new(format!("batch: {verdict}"));
    human.push_summary("total", report.total.to_string());
    human.push_summary("invalid", report.invalid.to_string());

    for result in &report.results {
        for error in &result.outcome.errors {
            human.push_detail(format!("{}: {error}", result.filename));
        }
        for warning in &result.outcome.warnings {
            human.push_warning(format!("{}: {warning}", result.filename));
        }
    }

    human
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_items_skips_blank_lines() {
        let input = concat!(
            r#"{"filename": "task-001 - A.md", "record": {"title": "A"}}"#,
            "\n\n",
            r#"{"filename": "task-002 - B.md", "record": {"title": "B"}}"#,
            "\n",
        );
        let items = read_items(input.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].filename, "task-001 - A.md");
        assert_eq!(items[1].record.title, "B");
    }

    #[test]
    fn read_items_reports_the_offending_line_number() {
        let input = concat!(
            r#"{"filename": "task-001 - A.md", "record": {"title": "A"}}"#,
            "\n",
            "not json\n",
        );
        let err = read_items(input.as_bytes()).unwrap_err();
        match err {
            Error::MalformedBatchLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn read_items_accepts_optional_record_fields() {
        let input = concat!(
            r#"{"filename": "task-003 - C.md", "record": "#,
            r#"{"title": "C", "id": "task-003", "status": "Done", "labels": ["x"]}}"#,
            "\n",
        );
        let items = read_items(input.as_bytes()).unwrap();
        assert_eq!(items[0].record.id.as_deref(), Some("task-003"));
        assert_eq!(items[0].record.status.as_deref(), Some("Done"));
    }
}
