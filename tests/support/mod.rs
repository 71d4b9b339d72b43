use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

pub fn taskcheck_cmd() -> Command {
    Command::cargo_bin("taskcheck").expect("binary")
}

/// Write newline-delimited JSON batch input to a temp file.
#[allow(dead_code)]
pub fn write_batch_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create tempfile");
    for line in lines {
        writeln!(file, "{line}").expect("failed to write line");
    }
    file
}
