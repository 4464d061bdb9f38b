//! Infrastructure-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// Infrastructure errors wrap application errors and add I/O-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard copy failed: {message}")]
    Clipboard { message: String },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;

/// Failure of an interactive prompt, as opposed to a user cancellation.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("{0} command not found. Please install {0}")]
    NotInstalled(String),

    #[error("{program} {action} failed ({})", describe_exit(.code))]
    Failed {
        program: String,
        action: String,
        code: Option<i32>,
    },

    #[error("{program} execution failed: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for prompt operations; `Ok(None)` means the user cancelled.
pub type PromptResult<T> = Result<T, PromptError>;

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_string(),
    }
}
