//! taskcheck filename command implementation.

use crate::cli::check::describe_outcome;
use crate::error::{exit_codes, Result};
use crate::filename::validate_filename;
use crate::output::{emit_success, OutputOptions};

pub struct FilenameOptions {
    pub filename: String,
    pub json: bool,
    pub quiet: bool,
}

pub fn run_filename(options: FilenameOptions) -> Result<i32> {
    let outcome = validate_filename(&options.filename);

    let human = describe_outcome(&options.filename, &outcome);
    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "filename",
        &outcome,
        Some(&human),
    )?;

    Ok(if outcome.valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::VALIDATION_FAILED
    })
}
