//! Prompter backed by the `gum` binary
//!
//! `gum choose` and `gum input` draw their UI on the terminal and print the
//! answer on stdout. The answer is captured by pointing stdout at a temp file
//! that is removed when the prompt returns, on every path.

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tracing::{debug, instrument, warn};

use crate::infrastructure::error::{PromptError, PromptResult};
use crate::infrastructure::traits::{CommandRunner, Prompter};
use crate::util::path::command_exists;

/// Exit status gum reports on Ctrl-C.
pub const EXIT_INTERRUPTED: i32 = 130;

/// Prompter that shells out to gum.
pub struct GumPrompter {
    bin: String,
    cmd: Arc<dyn CommandRunner>,
    /// Where selection files go; the system temp dir when unset
    temp_dir: Option<PathBuf>,
}

impl GumPrompter {
    pub fn new(bin: impl Into<String>, cmd: Arc<dyn CommandRunner>) -> Self {
        Self {
            bin: bin.into(),
            cmd,
            temp_dir: None,
        }
    }

    /// Create selection files in `dir` instead of the system temp dir.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    fn ensure_available(&self) -> PromptResult<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(PromptError::NotInstalled(self.bin.clone()))
        }
    }

    fn io_err(&self, source: std::io::Error) -> PromptError {
        if source.kind() == std::io::ErrorKind::NotFound {
            PromptError::NotInstalled(self.bin.clone())
        } else {
            PromptError::Io {
                program: self.bin.clone(),
                source,
            }
        }
    }

    /// Run `gum <args>` with stdout captured in a temp file.
    ///
    /// Returns the exit code and the trimmed captured text.
    #[instrument(level = "debug", skip(self))]
    fn capture(&self, args: &[&str]) -> PromptResult<(Option<i32>, String)> {
        self.ensure_available()?;

        let mut builder = tempfile::Builder::new();
        builder.prefix("sjiek-gum-selection-").suffix(".txt");
        let selection = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|e| self.io_err(e))?;
        let stdout = selection.reopen().map_err(|e| self.io_err(e))?;

        let status = self
            .cmd
            .run_to_file(&self.bin, args, stdout)
            .map_err(|e| self.io_err(e))?;

        let text = std::fs::read_to_string(selection.path())
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        debug!("capture: status={:?}, text={:?}", status.code(), text);

        remove_temp(selection);
        Ok((status.code(), text))
    }
}

fn remove_temp(file: NamedTempFile) {
    let path = file.path().to_path_buf();
    if let Err(e) = file.close() {
        warn!("failed to remove temporary file {}: {}", path.display(), e);
    }
}

/// Map the exit status of `gum choose`/`gum input` to an answer.
///
/// - 0: the captured text (possibly empty)
/// - 130: cancelled
/// - 1 without text: cancelled
/// - anything else: failure
pub fn interpret_selection(
    program: &str,
    action: &str,
    code: Option<i32>,
    text: String,
) -> PromptResult<Option<String>> {
    match code {
        Some(0) => Ok(Some(text)),
        Some(EXIT_INTERRUPTED) => Ok(None),
        Some(1) if text.is_empty() => Ok(None),
        code => Err(PromptError::Failed {
            program: program.to_string(),
            action: action.to_string(),
            code,
        }),
    }
}

/// Map the exit status of `gum confirm` to an answer.
///
/// - 0: yes
/// - 1: no
/// - 130: cancelled
/// - anything else: failure
pub fn interpret_confirm(program: &str, code: Option<i32>) -> PromptResult<Option<bool>> {
    match code {
        Some(0) => Ok(Some(true)),
        Some(1) => Ok(Some(false)),
        Some(EXIT_INTERRUPTED) => Ok(None),
        code => Err(PromptError::Failed {
            program: program.to_string(),
            action: "confirm".to_string(),
            code,
        }),
    }
}

impl Prompter for GumPrompter {
    fn is_available(&self) -> bool {
        command_exists(&self.bin)
    }

    fn choose(
        &self,
        header: &str,
        options: &[&str],
        selected: &str,
    ) -> PromptResult<Option<String>> {
        let mut args = vec!["choose"];
        args.extend_from_slice(options);
        args.extend(["--header", header, "--selected", selected]);

        let (code, text) = self.capture(&args)?;
        let answer = interpret_selection(&self.bin, "choose", code, text)?;
        // nothing chosen counts as cancel
        Ok(answer.filter(|s| !s.is_empty()))
    }

    fn input(&self, header: &str, value: &str, placeholder: &str) -> PromptResult<Option<String>> {
        let args = [
            "input",
            "--value",
            value,
            "--placeholder",
            placeholder,
            "--header",
            header,
        ];
        let (code, text) = self.capture(&args)?;
        interpret_selection(&self.bin, "input", code, text)
    }

    #[instrument(level = "debug", skip(self))]
    fn confirm(&self, prompt: &str) -> PromptResult<Option<bool>> {
        self.ensure_available()?;
        let status = self
            .cmd
            .run_attached(&self.bin, &["confirm", prompt])
            .map_err(|e| self.io_err(e))?;
        interpret_confirm(&self.bin, status.code())
    }

    fn spin(&self, title: &str, shell_command: &str) -> PromptResult<()> {
        self.ensure_available()?;
        let args = [
            "spin",
            "--spinner",
            "pulse",
            "--title",
            title,
            "--show-output",
            "--",
            "sh",
            "-c",
            shell_command,
        ];
        let status = self
            .cmd
            .run_attached(&self.bin, &args)
            .map_err(|e| self.io_err(e))?;
        if status.success() {
            Ok(())
        } else {
            Err(PromptError::Failed {
                program: self.bin.clone(),
                action: "spin".to_string(),
                code: status.code(),
            })
        }
    }

    fn style(&self, text: &str, flags: &[&str]) -> PromptResult<()> {
        self.ensure_available()?;
        let mut args = vec!["style"];
        args.extend_from_slice(flags);
        args.push(text);
        // styling is cosmetic; only a failure to launch matters
        self.cmd
            .run_attached(&self.bin, &args)
            .map(|_| ())
            .map_err(|e| self.io_err(e))
    }
}
