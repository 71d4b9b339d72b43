//! taskcheck - Backlog Task Record Validation Library
//!
//! This library provides the core functionality for the taskcheck CLI tool,
//! catching task data that would silently corrupt a Backlog.md-style
//! flat-file store.
//!
//! # Core Concepts
//!
//! - **Markers**: bracketed annotations (`[P]`, `[US#]`, `T###` prefixes)
//!   that planning tools embed in titles and the store cannot represent
//! - **Errors vs warnings**: format-breaking findings block acceptance;
//!   advisory findings never do
//! - **Collect everything**: a single call surfaces every applicable
//!   finding, nothing short-circuits
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `error`: Error types, result alias, and exit codes
//! - `output`: JSON envelope and human-readable report formatting
//! - `patterns`: The fixed marker-pattern table and format constants
//! - `sanitize`: Title sanitization
//! - `validate`: Single-record validation
//! - `filename`: Task filename validation
//! - `metadata`: Label extraction from title markers
//! - `batch`: Order-preserving validation over (filename, record) pairs

pub mod batch;
pub mod cli;
pub mod error;
pub mod filename;
pub mod metadata;
pub mod output;
pub mod patterns;
pub mod sanitize;
pub mod validate;

pub use error::{Error, Result};
