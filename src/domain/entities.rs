//! Core domain types: the run configuration and the captured diff

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{DomainError, DomainResult};

/// Marker every real `git diff` output starts with.
pub const DIFF_HEADER: &str = "diff --git";

/// Which subset of uncommitted changes to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiffType {
    /// Staged and unstaged changes (diff against HEAD)
    #[default]
    All,
    /// Index only
    Staged,
    /// Working tree only
    Unstaged,
}

impl DiffType {
    /// All variants in prompt order.
    pub const ALL: [DiffType; 3] = [DiffType::All, DiffType::Staged, DiffType::Unstaged];

    /// Name used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffType::All => "all",
            DiffType::Staged => "staged",
            DiffType::Unstaged => "unstaged",
        }
    }

    /// Label shown by the interactive chooser.
    pub fn label(&self) -> &'static str {
        match self {
            DiffType::All => "all (staged & unstaged)",
            DiffType::Staged => "staged (for commit)",
            DiffType::Unstaged => "unstaged (working changes)",
        }
    }

    /// Human description used in the success message.
    pub fn description(&self) -> &'static str {
        match self {
            DiffType::All => "all uncommitted changes",
            DiffType::Staged => "staged changes",
            DiffType::Unstaged => "unstaged changes",
        }
    }

    /// Arguments passed to `git`.
    pub fn git_args(&self) -> &'static [&'static str] {
        match self {
            DiffType::All => &["diff", "HEAD"],
            DiffType::Staged => &["diff", "--staged"],
            DiffType::Unstaged => &["diff"],
        }
    }

    /// Reverse lookup of [`DiffType::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for DiffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiffType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DiffType::All),
            "staged" => Ok(DiffType::Staged),
            "unstaged" => Ok(DiffType::Unstaged),
            other => Err(DomainError::InvalidDiffType(other.to_string())),
        }
    }
}

/// Everything one invocation needs, threaded through every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Output directory as entered (may start with `~/`)
    pub output_dir: String,
    /// Filename before timestamping and extension defaulting
    pub filename: String,
    pub diff_type: DiffType,
    pub timestamp: bool,
    pub copy_to_clipboard: bool,
    pub interactive: bool,
    /// Show the startup intro
    pub intro: bool,
}

impl RunConfig {
    /// Check the invariants that user input can break.
    pub fn validate(&self) -> DomainResult<()> {
        if self.filename.trim().is_empty() {
            return Err(DomainError::EmptyFilename);
        }
        Ok(())
    }
}

/// Diff text captured from git.
///
/// Empty unless the output looked like a real diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffCapture {
    pub diff_type: DiffType,
    pub content: String,
}

impl DiffCapture {
    /// Keep raw output only if it starts with the diff header once trimmed.
    pub fn from_raw(diff_type: DiffType, raw: &str) -> Self {
        let content = if raw.trim().starts_with(DIFF_HEADER) {
            raw.to_string()
        } else {
            String::new()
        };
        Self { diff_type, content }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
