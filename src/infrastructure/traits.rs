//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::fs::File;
use std::io;
use std::path::Path;
use std::process::{ExitStatus, Output, Stdio};

use crate::infrastructure::error::{InfraResult, PromptResult};

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Write string content to file, truncating it.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command in `dir` and capture its output.
    fn run_in(&self, dir: &Path, cmd: &str, args: &[&str]) -> io::Result<Output>;

    /// Run a command feeding `stdin`; its output is discarded.
    fn run_with_stdin(&self, cmd: &str, args: &[&str], stdin: &str) -> io::Result<ExitStatus>;

    /// Run a command attached to the terminal.
    fn run_attached(&self, cmd: &str, args: &[&str]) -> io::Result<ExitStatus>;

    /// Run a command attached to the terminal, with stdout redirected to `stdout`.
    fn run_to_file(&self, cmd: &str, args: &[&str], stdout: File) -> io::Result<ExitStatus>;
}

/// Interactive terminal prompts.
///
/// Every prompt returns `Ok(None)` when the user cancelled.
pub trait Prompter: Send + Sync {
    /// Whether the prompt tool can be used at all.
    fn is_available(&self) -> bool;

    /// Single choice among `options`, pre-selecting `selected`.
    fn choose(&self, header: &str, options: &[&str], selected: &str)
        -> PromptResult<Option<String>>;

    /// Free text pre-filled with `value`. An empty answer is `Some("")`.
    fn input(&self, header: &str, value: &str, placeholder: &str) -> PromptResult<Option<String>>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str) -> PromptResult<Option<bool>>;

    /// Show a spinner titled `title` while `shell_command` runs.
    fn spin(&self, title: &str, shell_command: &str) -> PromptResult<()>;

    /// Print `text` styled with the tool's style flags.
    fn style(&self, text: &str, flags: &[&str]) -> PromptResult<()>;
}

/// Write-only system clipboard.
pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> InfraResult<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run_in(&self, dir: &Path, cmd: &str, args: &[&str]) -> io::Result<Output> {
        std::process::Command::new(cmd)
            .args(args)
            .current_dir(dir)
            .output()
    }

    fn run_with_stdin(&self, cmd: &str, args: &[&str], stdin: &str) -> io::Result<ExitStatus> {
        use std::io::Write;

        // stdout stays closed: xclip and friends fork a holder process
        // that would keep a captured pipe open.
        let mut child = std::process::Command::new(cmd)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // the child is reaped even when it exits before reading everything
        let written = match child.stdin.take() {
            Some(mut child_stdin) => child_stdin.write_all(stdin.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        written.map(|()| status)
    }

    fn run_attached(&self, cmd: &str, args: &[&str]) -> io::Result<ExitStatus> {
        std::process::Command::new(cmd)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
    }

    fn run_to_file(&self, cmd: &str, args: &[&str], stdout: File) -> io::Result<ExitStatus> {
        std::process::Command::new(cmd)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::inherit())
            .status()
    }
}
