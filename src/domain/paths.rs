//! Output directory expansion

use std::path::{Component, Path, PathBuf};

use crate::domain::error::{DomainError, DomainResult};

/// Expand the configured output directory.
///
/// A leading `~/` is replaced with `home`; anything else is resolved
/// against `cwd`. The result is lexically normalized.
pub fn expand_output_dir(raw: &str, home: Option<&Path>, cwd: &Path) -> DomainResult<PathBuf> {
    if raw.starts_with("~/") {
        let home = home
            .and_then(Path::to_str)
            .ok_or_else(|| DomainError::HomeDirUnavailable(raw.to_string()))?;
        let expanded = shellexpand::tilde_with_context(raw, || Some(home));
        return Ok(normalize(Path::new(expanded.as_ref())));
    }

    let path = Path::new(raw);
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&cwd.join(path)))
    }
}

/// Remove `.` and resolve `..` without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(result.components().next_back(), Some(Component::Normal(_))) {
                    result.pop();
                } else if !result.has_root() {
                    result.push("..");
                }
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}
