//! Base directory resolution.
//!
//! Paths are resolved lexically: `.` and `..` are folded without touching
//! the filesystem, symlinks are not followed, and the result is not required
//! to exist.

use anyhow::{Context, Result};
use std::env;
use std::path::{Component, Path, PathBuf};

/// Resolve the directory to validate.
///
/// With no argument this is the parent of the directory holding the running
/// executable. A relative argument is resolved against the current working
/// directory.
pub fn resolve_base_path(arg: Option<&Path>) -> Result<PathBuf> {
    match arg {
        Some(path) => absolutize(path),
        None => default_base_path(),
    }
}

/// Parent of the executable's own directory
pub fn default_base_path() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let exe_dir = exe
        .parent()
        .with_context(|| format!("Executable path has no parent: {}", exe.display()))?;
    Ok(normalize(&exe_dir.join("..")))
}

/// Make `path` absolute against the current working directory.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    let cwd = env::current_dir().context("Failed to read current directory")?;
    Ok(normalize(&cwd.join(path)))
}

/// Fold `.` and `..` components. `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
