//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod clipboard;
pub mod di;
pub mod error;
pub mod gum;
pub mod traits;

pub use error::{InfraError, InfraResult, PromptError, PromptResult};
