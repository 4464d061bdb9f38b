//! Output filename rules: timestamp insertion and extension defaulting

use chrono::NaiveDateTime;

/// `YYYYMMDD_HHMMSS`
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Base name used when the configured one is empty (e.g. `.txt`).
pub const FALLBACK_BASE_NAME: &str = "diff";

/// Format a local timestamp for use in a filename.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Split `name` into base and extension, the extension starting at the
/// last `.` of the final path element (`".txt"` -> `("", ".txt")`).
pub fn split_extension(name: &str) -> (&str, &str) {
    for (idx, ch) in name.char_indices().rev() {
        match ch {
            '/' | '\\' => break,
            '.' => return (&name[..idx], &name[idx..]),
            _ => {}
        }
    }
    (name, "")
}

/// Insert `_<stamp>` between base name and extension.
pub fn insert_timestamp(name: &str, stamp: &str) -> String {
    let (base, ext) = split_extension(name);
    let base = if base.is_empty() {
        FALLBACK_BASE_NAME
    } else {
        base
    };
    format!("{base}_{stamp}{ext}")
}

/// Final filename: optional timestamp, then `.<default_ext>` if there is
/// no extension at all.
pub fn finalize_filename(name: &str, stamp: Option<&str>, default_ext: &str) -> String {
    let mut result = match stamp {
        Some(stamp) => insert_timestamp(name, stamp),
        None => name.to_string(),
    };
    if split_extension(&result).1.is_empty() {
        result.push('.');
        result.push_str(default_ext.trim_start_matches('.'));
    }
    result
}
