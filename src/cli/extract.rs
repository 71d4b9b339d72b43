//! taskcheck extract command implementation.

use crate::error::{exit_codes, Result};
use crate::metadata::extract_metadata;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct ExtractOptions {
    pub title: String,
    pub json: bool,
    pub quiet: bool,
}

pub fn run_extract(options: ExtractOptions) -> Result<i32> {
    let metadata = extract_metadata(&options.title);

    let mut human = HumanOutput::new(format!("title: {}", metadata.title));
    human.push_summary("labels", metadata.labels.len().to_string());
    for label in &metadata.labels {
        human.push_detail(label.as_str());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "extract",
        &metadata,
        Some(&human),
    )?;

    Ok(exit_codes::SUCCESS)
}
