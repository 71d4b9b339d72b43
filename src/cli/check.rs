//! taskcheck check command implementation.

use crate::error::{exit_codes, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::validate::{validate_record, TaskRecord, ValidationOutcome};

pub struct CheckOptions {
    pub title: String,
    pub id: Option<String>,
    pub status: Option<String>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run_check(options: CheckOptions) -> Result<i32> {
    let record = TaskRecord {
        title: options.title,
        id: options.id,
        status: options.status,
        labels: None,
        description: None,
    };
    let outcome = validate_record(&record);

    let human = describe_outcome("task record", &outcome);
    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "check",
        &outcome,
        Some(&human),
    )?;

    Ok(if outcome.valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::VALIDATION_FAILED
    })
}

/// Shared human rendering for a single validation outcome.
pub(crate) fn describe_outcome(subject: &str, outcome: &ValidationOutcome) -> HumanOutput {
    let verdict = if outcome.valid { "valid" } else { "invalid" };
    let mut human = HumanOutput::new(format!("{subject}: {verdict}"));
    human.push_summary("errors", outcome.errors.len().to_string());
    human.push_summary("warnings", outcome.warnings.len().to_string());
    if let Some(title) = &outcome.sanitized_title {
        human.push_summary("sanitized title", title.as_str());
    }
    for error in &outcome.errors {
        human.push_detail(error.as_str());
    }
    for warning in &outcome.warnings {
        human.push_warning(warning.as_str());
    }
    if !outcome.valid && outcome.sanitized_title.is_some() {
        human.push_next_step("use the sanitized title, or run: taskcheck sanitize \"<title>\"");
    }
    human
}
