//! Report rendering for validation results.
//!
//! Provides a unified interface for printing a [`ValidationResult`] in
//! different modes:
//! - Human: plain lines, colored when the stream is a terminal
//! - Json: a single JSON document on stdout
//! - Quiet: diagnostics only, no success line
//!
//! Human output is byte-exact when piped, so scripts can match on
//! `Missing: <file>` lines. Writers can be injected for test capture.

use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::validation::{ValidationResult, SUCCESS_MESSAGE};

/// Environment variable that enables quiet mode
pub const QUIET_ENV: &str = "DOCSET_QUIET";

/// Check if quiet mode is enabled via environment variable
pub fn quiet_from_env() -> bool {
    std::env::var(QUIET_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable lines: success on stdout, diagnostics on stderr
    Human,
    /// One JSON report on stdout
    Json,
    /// Diagnostics on stderr only
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the CLI flags. `--json` wins over quiet.
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if json {
            Self::Json
        } else if quiet {
            Self::Quiet
        } else {
            Self::Human
        }
    }
}

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    base_path: &'a Path,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    kind: &'a str,
    file: &'a str,
    message: String,
}

/// Mode-aware reporter over a stdout and a stderr writer
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    out: SharedWriter,
    err: SharedWriter,
    out_is_tty: bool,
    err_is_tty: bool,
}

impl Output {
    /// Create an Output writing to the process stdout and stderr
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            out: Arc::new(Mutex::new(Box::new(io::stdout()))),
            err: Arc::new(Mutex::new(Box::new(io::stderr()))),
            out_is_tty: atty::is(atty::Stream::Stdout),
            err_is_tty: atty::is(atty::Stream::Stderr),
        }
    }

    /// Create an Output with custom writers (for testing)
    pub fn with_writers(
        mode: OutputMode,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            mode,
            out: Arc::new(Mutex::new(out)),
            err: Arc::new(Mutex::new(err)),
            out_is_tty: false,
            err_is_tty: false,
        }
    }

    /// Print a validation result according to the mode.
    pub fn report(&self, result: &ValidationResult) {
        match self.mode {
            OutputMode::Json => self.report_json(result),
            OutputMode::Human | OutputMode::Quiet => {
                for diagnostic in &result.diagnostics {
                    let line = diagnostic.to_string();
                    if self.err_is_tty {
                        write_line(&self.err, &line.red().to_string());
                    } else {
                        write_line(&self.err, &line);
                    }
                }

                if !result.failed() && self.mode == OutputMode::Human {
                    if self.out_is_tty {
                        write_line(&self.out, &SUCCESS_MESSAGE.green().to_string());
                    } else {
                        write_line(&self.out, SUCCESS_MESSAGE);
                    }
                }
            }
        }
    }

    fn report_json(&self, result: &ValidationResult) {
        let report = JsonReport {
            passed: !result.failed(),
            base_path: &result.base_path,
            diagnostics: result
                .diagnostics
                .iter()
                .map(|d| JsonDiagnostic {
                    kind: d.kind(),
                    file: d.file(),
                    message: d.to_string(),
                })
                .collect(),
        };

        match serde_json::to_string(&report) {
            Ok(json) => write_line(&self.out, &json),
            Err(e) => write_line(&self.err, &format!("Failed to serialize report: {}", e)),
        }
    }
}

/// Write a line to a shared writer
fn write_line(writer: &SharedWriter, line: &str) {
    if let Ok(mut writer) = writer.lock() {
        let _ = writeln!(writer, "{}", line);
    }
}
