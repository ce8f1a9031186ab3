//! # docset - prompts directory validation
//!
//! Checks that a prompts directory carries the six planning documents and
//! that its PRD has an explicit out-of-scope section.
//!
//! ## Modules
//!
//! - [`docs`] - The fixed set of required document names
//! - [`prd`] - PRD section-7 / out-of-scope content check
//! - [`validation`] - Runs all checks and collects diagnostics
//! - [`paths`] - Base directory resolution
//! - [`output`] - Human, JSON and quiet reporting
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use docset::validation::validate;
//!
//! let result = validate(Path::new("./prompts")).expect("validation failed to run");
//! for diagnostic in &result.diagnostics {
//!     eprintln!("{}", diagnostic);
//! }
//! ```

pub mod docs;
pub mod output;
pub mod paths;
pub mod prd;
pub mod validation;
