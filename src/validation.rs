//! Presence and content validation for a prompts directory.
//!
//! [`validate`] runs every check against a base directory and collects one
//! [`Diagnostic`] per failed check. Failures never stop the remaining checks;
//! the caller decides how to report them and which exit code to use.

use anyhow::Result;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::docs::{PRD, REQUIRED_FILES};
use crate::prd::SectionCheck;

/// Printed when every check passes
pub const SUCCESS_MESSAGE: &str =
    "Validation passed: six files present, PRD §7 OUT OF SCOPE present.";

const MISSING_SECTION_MESSAGE: &str =
    "PRD.md must contain section \"7. Explicitly OUT OF SCOPE\" (or §7) with out-of-scope content.";

/// A single failed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A required document is not present in the base directory
    MissingFile { file: &'static str },
    /// The PRD exists but lacks the out-of-scope section
    MissingSection,
    /// The PRD exists but could not be read (permissions, or not a regular file)
    UnreadablePrd { reason: String },
}

impl Diagnostic {
    /// Stable identifier used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFile { .. } => "missing_file",
            Self::MissingSection => "missing_section",
            Self::UnreadablePrd { .. } => "unreadable_prd",
        }
    }

    /// The document this diagnostic is about
    pub fn file(&self) -> &'static str {
        match self {
            Self::MissingFile { file } => *file,
            Self::MissingSection | Self::UnreadablePrd { .. } => PRD,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile { file } => write!(f, "Missing: {}", file),
            Self::MissingSection => write!(f, "{}", MISSING_SECTION_MESSAGE),
            Self::UnreadablePrd { reason } => {
                write!(f, "{} (could not read {}: {})", MISSING_SECTION_MESSAGE, PRD, reason)
            }
        }
    }
}

/// Outcome of validating one base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Directory the required files were resolved against
    pub base_path: PathBuf,
    /// One entry per failed check, in check order
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    fn new(base_path: &Path) -> Self {
        Self {
            base_path: base_path.to_path_buf(),
            diagnostics: Vec::new(),
        }
    }

    /// True if any check failed
    pub fn failed(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Required files that were not found, in reporting order
    pub fn missing_files(&self) -> Vec<&'static str> {
        self.diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::MissingFile { file } => Some(*file),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Validate the six-document set under `base_path`.
///
/// Checks, in order:
/// 1. Each of [`REQUIRED_FILES`] exists directly inside `base_path`.
/// 2. If `PRD.md` exists, it contains the out-of-scope section (see
///    [`SectionCheck`]). A missing PRD is reported once, by step 1 only.
///
/// The base directory itself is not checked; if it does not exist every
/// file is reported missing.
pub fn validate(base_path: &Path) -> Result<ValidationResult> {
    let mut result = ValidationResult::new(base_path);

    for file in REQUIRED_FILES {
        if !base_path.join(file).exists() {
            result.push(Diagnostic::MissingFile { file });
        }
    }

    let prd_path = base_path.join(PRD);
    if prd_path.exists() {
        match fs::read(&prd_path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                if !SectionCheck::scan(&content)?.is_compliant() {
                    result.push(Diagnostic::MissingSection);
                }
            }
            Err(e) => result.push(Diagnostic::UnreadablePrd {
                reason: e.to_string(),
            }),
        }
    }

    Ok(result)
}
