//! Command-line interface for taskcheck
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;

mod batch;
mod check;
mod extract;
mod filename;
mod sanitize;

/// taskcheck - backlog task record validation
///
/// Checks task titles, ids, statuses, and filenames for content that would
/// corrupt the backlog flat-file store. Built for pre-commit hooks and CI.
#[derive(Parser, Debug)]
#[command(name = "taskcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a task record
    Check {
        /// Task title
        #[arg(long)]
        title: String,

        /// Task id (expected shape: task-###)
        #[arg(long)]
        id: Option<String>,

        /// Task status (To Do, In Progress, Done)
        #[arg(long)]
        status: Option<String>,
    },

    /// Validate a task filename against "task-### - Title.md"
    Filename {
        /// Filename to validate
        filename: String,
    },

    /// Print the sanitized form of a title
    Sanitize {
        /// Title to sanitize
        title: String,
    },

    /// Extract labels from the markers embedded in a title
    Extract {
        /// Title to inspect
        title: String,
    },

    /// Validate (filename, record) pairs from newline-delimited JSON
    Batch {
        /// Read items from a file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

impl Cli {
    /// Execute the CLI command, returning the process exit code.
    pub fn run(self) -> Result<i32> {
        match self.command {
            Commands::Check { title, id, status } => check::run_check(check::CheckOptions {
                title,
                id,
                status,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Filename { filename } => {
                filename::run_filename(filename::FilenameOptions {
                    filename,
                    json: self.json,
                    quiet: self.quiet,
                })
            }
            Commands::Sanitize { title } => sanitize::run_sanitize(sanitize::SanitizeOptions {
                title,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Extract { title } => extract::run_extract(extract::ExtractOptions {
                title,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Batch { input } => batch::run_batch(batch::BatchOptions {
                input,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
