//! Domain layer: run configuration and output naming rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod filename;
pub mod paths;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use filename::{finalize_filename, format_timestamp};
pub use paths::expand_output_dir;
