//! sjiek: export a git repository's diff to a file, and optionally the clipboard.
//!
//! Layers, inner to outer:
//! - `domain`: diff types, run configuration, filename and path rules
//! - `application`: run-config resolution and the diff/export/interactive services
//! - `infrastructure`: process, filesystem, gum and clipboard adapters
//! - `cli`: argument parsing, orchestration and terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
