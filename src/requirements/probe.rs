//! Search-path resolution primitives.
//!
//! Resolution mirrors shell command lookup: walk the `PATH` directories in
//! order and take the first regular file with the tool's name that carries
//! execute permission. Does NOT shell out to `which` — `which` behavior
//! varies across systems and is sometimes a shell builtin with inconsistent
//! error handling.

use std::path::{Path, PathBuf};

/// Parse the system PATH environment variable into a list of directories.
///
/// An unset PATH yields an empty list, so every lookup fails rather than
/// erroring.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission
/// bits; [`candidate_names`] generates the extension variants.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// File names to try for a tool on this platform.
#[cfg(unix)]
fn candidate_names(tool: &str) -> Vec<String> {
    vec![tool.to_string()]
}

/// On Windows a bare name plus each `PATHEXT` extension, matching shell
/// lookup semantics.
#[cfg(not(unix))]
fn candidate_names(tool: &str) -> Vec<String> {
    let pathext =
        std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    let mut names = vec![tool.to_string()];
    for ext in pathext.split(';').filter(|e| !e.is_empty()) {
        names.push(format!("{tool}{ext}"));
    }
    names
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable, or `None` when the
/// tool is not resolvable anywhere on the given path.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}
