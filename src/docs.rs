//! The fixed set of documents every prompts directory must carry.
//!
//! The names are matched exactly (case-sensitive) against the top level of
//! the base directory. They are not configurable.

/// Product requirements document. The only file with a content check.
pub const PRD: &str = "PRD.md";
/// Screen-by-screen application flow.
pub const APP_FLOW: &str = "APP_FLOW.md";
/// Chosen languages, frameworks and services.
pub const TECH_STACK: &str = "TECH_STACK.md";
/// UI conventions.
pub const FRONTEND_GUIDELINES: &str = "FRONTEND_GUIDELINES.md";
/// Server-side layout and data model.
pub const BACKEND_STRUCTURE: &str = "BACKEND_STRUCTURE.md";
/// Ordered build steps.
pub const IMPLEMENTATION_PLAN: &str = "IMPLEMENTATION_PLAN.md";

/// All six required documents, in reporting order.
pub const REQUIRED_FILES: [&str; 6] = [
    PRD,
    APP_FLOW,
    TECH_STACK,
    FRONTEND_GUIDELINES,
    BACKEND_STRUCTURE,
    IMPLEMENTATION_PLAN,
];
