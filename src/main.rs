//! taskcheck - backlog task record validation CLI
//!
//! Validates task titles, ids, statuses, and filenames before they enter a
//! Backlog.md-style flat-file store. Built for pre-commit hooks and CI.

use clap::Parser;
use taskcheck::cli::Cli;
use taskcheck::output::{emit_error, infer_command_name_from_args};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Tracing is opt-in via RUST_LOG.
    // Keep startup robust in CI/hook envs: ignore invalid/huge filters.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let command = infer_command_name_from_args();
    let cli = Cli::parse();
    let json = cli.json;
    match cli.run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let _ = emit_error(&command, &err, json);
            std::process::exit(err.exit_code());
        }
    }
}
