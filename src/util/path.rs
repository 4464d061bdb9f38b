use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Locate `name` the way a shell would: as given if it contains a path
/// separator, otherwise in each `PATH` entry.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }
    let paths = env::var_os("PATH")?;
    find_in(name, &paths)
}

/// Look up `name` in a `PATH`-style list.
pub fn find_in(name: &str, paths: &OsStr) -> Option<PathBuf> {
    env::split_paths(paths)
        .flat_map(|dir| executable_names(name).into_iter().map(move |n| dir.join(n)))
        .find(|p| is_executable(p))
}

pub fn command_exists(name: &str) -> bool {
    find_executable(name).is_some()
}

#[cfg(windows)]
fn executable_names(name: &str) -> Vec<String> {
    vec![name.to_string(), format!("{name}.exe"), format!("{name}.cmd")]
}

#[cfg(not(windows))]
fn executable_names(name: &str) -> Vec<String> {
    vec![name.to_string()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
