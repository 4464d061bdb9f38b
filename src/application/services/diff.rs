//! Diff capture service
//!
//! Runs `git` to check for a work tree and to produce the diff for a
//! [`DiffType`]. Diff computation itself is entirely git's.

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{DiffCapture, DiffType, DIFF_HEADER};
use crate::infrastructure::traits::CommandRunner;

/// Git diff capture service.
pub struct DiffService {
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
}

impl DiffService {
    /// Create a new diff service.
    pub fn new(cmd: Arc<dyn CommandRunner>, settings: Arc<Settings>) -> Self {
        Self { cmd, settings }
    }

    fn git(&self) -> &str {
        &self.settings.git_bin
    }

    fn spawn_err(&self, action: &str, e: io::Error) -> ApplicationError {
        if e.kind() == io::ErrorKind::NotFound {
            ApplicationError::ToolNotFound {
                tool: self.git().to_string(),
            }
        } else {
            ApplicationError::OperationFailed {
                context: format!("{} execution failed: {}", action, e),
                source: Box::new(e),
            }
        }
    }

    /// Fail unless `dir` is inside a git work tree.
    #[instrument(level = "debug", skip(self))]
    pub fn ensure_repository(&self, dir: &Path) -> ApplicationResult<()> {
        let output = self
            .cmd
            .run_in(dir, self.git(), &["rev-parse", "--is-inside-work-tree"])
            .map_err(|e| self.spawn_err("git rev-parse", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::RepositoryCheck {
                message: stderr.trim().to_string(),
            });
        }

        let answer = String::from_utf8_lossy(&output.stdout);
        if answer.trim() != "true" {
            return Err(ApplicationError::NotARepository(dir.to_path_buf()));
        }
        Ok(())
    }

    /// Capture the diff for `diff_type` in `dir`.
    ///
    /// Exit status 1 together with diff output means "differences exist".
    /// Any other non-zero status is an error.
    #[instrument(level = "debug", skip(self))]
    pub fn capture(&self, dir: &Path, diff_type: DiffType) -> ApplicationResult<DiffCapture> {
        let args = diff_type.git_args();
        let output = self
            .cmd
            .run_in(dir, self.git(), args)
            .map_err(|e| self.spawn_err("git diff", e))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        match output.status.code() {
            Some(0) => {}
            Some(1) if stdout.contains(DIFF_HEADER) => {
                debug!("capture: git reported differences via exit status 1");
            }
            code => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(ApplicationError::Command {
                    program: format!("{} {}", self.git(), args.join(" ")),
                    exit_code: code,
                    message: stderr.trim().to_string(),
                });
            }
        }

        let capture = DiffCapture::from_raw(diff_type, &stdout);
        debug!(
            "capture: diff_type={}, bytes={}, empty={}",
            diff_type,
            capture.content.len(),
            capture.is_empty()
        );
        Ok(capture)
    }
}
