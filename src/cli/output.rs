//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix)
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", "Warning".yellow(), msg);
}

/// Print message followed by a highlighted path
pub fn saved(msg: &(impl std::fmt::Display + ?Sized), path: &std::path::Path) {
    println!("{} {}", msg, path.display().to_string().green());
}

/// Print success status with a leading icon
pub fn success(icon: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", icon, msg.to_string().green());
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}
