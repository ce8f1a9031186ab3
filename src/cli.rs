//! CLI argument definitions for validate.

use clap::Parser;
use std::path::PathBuf;

/// Version line with the commit and build date stamped in by build.rs
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("GIT_SHA"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "validate")]
#[command(version = VERSION)]
#[command(about = "Check that a prompts directory has all six planning docs", long_about = None)]
#[command(
    after_help = "REQUIRED FILES:\n    PRD.md  APP_FLOW.md  TECH_STACK.md  FRONTEND_GUIDELINES.md\n    BACKEND_STRUCTURE.md  IMPLEMENTATION_PLAN.md\n\n    PRD.md must also contain a \"7. Explicitly OUT OF SCOPE\" section."
)]
pub struct Cli {
    /// Directory to validate (default: parent of the directory holding this executable)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Print the result as a single JSON object on stdout
    #[arg(long)]
    pub json: bool,

    /// Suppress the success message (also enabled by DOCSET_QUIET=1)
    #[arg(short, long)]
    pub quiet: bool,
}
