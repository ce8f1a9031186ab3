use docset::docs::{PRD, REQUIRED_FILES};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// PRD content that satisfies the out-of-scope section check.
pub const COMPLIANT_PRD: &str = "# Product Requirements\n\n## 1. Goals\n\nShip it.\n\n## 7. OUT OF SCOPE\n\n- Native mobile apps\n";

/// TestHarness provides an isolated prompts directory.
/// Each harness creates a temporary directory that is removed on drop.
pub struct TestHarness {
    pub dir: TempDir,
    pub validate_binary: PathBuf,
}

impl TestHarness {
    /// Creates an empty harness directory (every required file missing).
    pub fn empty() -> Self {
        TestHarness {
            dir: TempDir::new().expect("Failed to create temp dir"),
            validate_binary: PathBuf::from(env!("CARGO_BIN_EXE_validate")),
        }
    }

    /// Creates a harness with all six documents and a compliant PRD.
    pub fn new() -> Self {
        let harness = Self::empty();
        for file in REQUIRED_FILES {
            harness.write_doc(file, &format!("# {}\n", file));
        }
        harness.write_doc(PRD, COMPLIANT_PRD);
        harness
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a document into the base directory.
    pub fn write_doc(&self, name: &str, content: &str) {
        fs::write(self.path().join(name), content).expect("Failed to write doc");
    }

    /// Removes a document from the base directory.
    pub fn remove_doc(&self, name: &str) {
        fs::remove_file(self.path().join(name)).expect("Failed to remove doc");
    }

    /// Runs the validate binary against the harness directory.
    pub fn run(&self, extra_args: &[&str]) -> std::io::Result<std::process::Output> {
        Command::new(&self.validate_binary)
            .args(extra_args)
            .arg(self.path())
            .env_remove("DOCSET_QUIET")
            .output()
    }

    /// Runs the validate binary with the given arguments from the harness directory.
    pub fn run_in_dir(&self, args: &[&str]) -> std::io::Result<std::process::Output> {
        Command::new(&self.validate_binary)
            .args(args)
            .current_dir(self.path())
            .env_remove("DOCSET_QUIET")
            .output()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
