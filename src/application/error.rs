//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::PromptError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The user aborted the interactive sequence. Not a failure.
    #[error("user cancelled at '{step}'")]
    Cancelled { step: String },

    #[error("directory '{0}' is not a git repository")]
    NotARepository(PathBuf),

    #[error("failed to check git repository status: {message}. Is this a git repository?")]
    RepositoryCheck { message: String },

    #[error("{tool} command not found. Please install {tool}")]
    ToolNotFound { tool: String },

    #[error("{program} failed ({}): {message}", describe_exit(.exit_code))]
    Command {
        program: String,
        exit_code: Option<i32>,
        message: String,
    },

    #[error("unexpected selection for Diff Type: '{0}'")]
    UnexpectedSelection(String),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApplicationError::Cancelled { .. })
    }
}

impl From<PromptError> for ApplicationError {
    fn from(e: PromptError) -> Self {
        match e {
            PromptError::NotInstalled(tool) => ApplicationError::ToolNotFound { tool },
            PromptError::Failed {
                program,
                action,
                code,
            } => ApplicationError::Command {
                program: format!("{program} {action}"),
                exit_code: code,
                message: "prompt did not complete".to_string(),
            },
            PromptError::Io { program, source } => ApplicationError::OperationFailed {
                context: format!("{program} execution failed: {source}"),
                source: Box::new(source),
            },
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_string(),
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
