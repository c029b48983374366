//! Locating required build tools on the execution path.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Search `PATH` for an executable named `tool`.
///
/// A `tool` containing a path separator is checked as-is instead.
#[must_use]
pub fn find_executable(tool: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH").unwrap_or_default();
    find_executable_in(tool, &path_var)
}

/// Same as [`find_executable`] with an explicit `PATH` value.
#[must_use]
pub fn find_executable_in(tool: &str, path_var: &OsString) -> Option<PathBuf> {
    if tool.is_empty() {
        return None;
    }

    let direct = Path::new(tool);
    if direct.components().count() > 1 {
        return is_executable(direct).then(|| direct.to_path_buf());
    }

    std::env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidate_names(tool).map(move |name| dir.join(name)))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidate_names(tool: &str) -> impl Iterator<Item = String> + '_ {
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    let exts: Vec<String> = exts.split(';').map(str::to_string).collect();
    std::iter::once(tool.to_string()).chain(exts.into_iter().map(move |ext| format!("{tool}{ext}")))
}

#[cfg(not(windows))]
fn candidate_names(tool: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(tool.to_string())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
