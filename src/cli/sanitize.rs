//! taskcheck sanitize command implementation.

use serde::Serialize;

use crate::error::{exit_codes, Result};
use crate::output::{emit_success, OutputOptions};
use crate::sanitize::sanitize_title;

pub struct SanitizeOptions {
    pub title: String,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct SanitizeData {
    title: String,
}

pub fn run_sanitize(options: SanitizeOptions) -> Result<i32> {
    let title = sanitize_title(&options.title);

    if options.json {
        emit_success(
            OutputOptions {
                json: true,
                quiet: options.quiet,
            },
            "sanitize",
            &SanitizeData { title },
            None,
        )?;
    } else if !options.quiet {
        // Bare line so the output can be piped straight into other tools.
        println!("{title}");
    }

    Ok(exit_codes::SUCCESS)
}
