//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, CommandRunner, etc.)
//! but are themselves concrete structs, not traits.

mod diff;
mod export;
mod interactive;

pub use diff::DiffService;
pub use export::{ExportService, OutputTarget};
pub use interactive::InteractiveService;
