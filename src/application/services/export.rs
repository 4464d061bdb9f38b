//! Output writing and clipboard export

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{expand_output_dir, finalize_filename, format_timestamp, DiffCapture, RunConfig};
use crate::infrastructure::traits::{Clipboard, FileSystem};
use crate::infrastructure::InfraResult;

/// Where the diff file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Expanded, absolute output directory
    pub dir: PathBuf,
    /// Final filename (timestamped, with extension)
    pub filename: String,
}

impl OutputTarget {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }
}

/// Writes the diff file and copies the diff to the clipboard.
pub struct ExportService {
    fs: Arc<dyn FileSystem>,
    clipboard: Arc<dyn Clipboard>,
    settings: Arc<Settings>,
}

impl ExportService {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        clipboard: Arc<dyn Clipboard>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            fs,
            clipboard,
            settings,
        }
    }

    /// Resolve directory and filename for `config` at local time `now`.
    pub fn plan(
        &self,
        config: &RunConfig,
        home: Option<&Path>,
        cwd: &Path,
        now: NaiveDateTime,
    ) -> ApplicationResult<OutputTarget> {
        let stamp = config.timestamp.then(|| format_timestamp(&now));
        let filename = finalize_filename(
            &config.filename,
            stamp.as_deref(),
            &self.settings.default_extension,
        );
        let dir = expand_output_dir(&config.output_dir, home, cwd)?;
        Ok(OutputTarget { dir, filename })
    }

    /// Create the directory and write the diff (empty or not), replacing any
    /// existing file. Returns the written path.
    #[instrument(level = "debug", skip(self, diff))]
    pub fn write(&self, target: &OutputTarget, diff: &DiffCapture) -> ApplicationResult<PathBuf> {
        self.fs
            .create_dir_all(&target.dir)
            .with_path_context("could not create output directory", &target.dir)?;

        let path = target.path();
        self.fs
            .write(&path, &diff.content)
            .with_path_context("could not write diff to file", &path)?;

        debug!("write: {} bytes to {}", diff.content.len(), path.display());
        Ok(path)
    }

    /// Copy the diff (or an empty string) to the system clipboard.
    pub fn copy_to_clipboard(&self, diff: &DiffCapture) -> InfraResult<()> {
        self.clipboard.copy(&diff.content)
    }
}
