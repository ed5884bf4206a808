//! Small helpers shared across CLI tests.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::{Cli, CliError, CommandReport, render_report, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_edge_list(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn read_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn render_to_string(report: &CommandReport) -> Result<String, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    render_report(report, &mut out)?;
    Ok(String::from_utf8(out)?)
}
