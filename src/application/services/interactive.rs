//! Interactive prompt sequence
//!
//! Five prompts in fixed order: diff type, output directory, filename,
//! timestamp, clipboard. A cancel at any step aborts the whole sequence.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{DiffType, RunConfig};
use crate::infrastructure::traits::Prompter;

pub const DIFF_TYPE_HEADER: &str = "Select Diff Type:";
pub const OUTPUT_DIR_HEADER: &str = "Output Directory:";
pub const OUTPUT_DIR_PLACEHOLDER: &str = "e.g., ~/llm_context_diffs/";
pub const FILENAME_HEADER: &str = "Filename:";
pub const FILENAME_PLACEHOLDER: &str = "e.g., current_diff.txt";
pub const TIMESTAMP_QUESTION: &str = "Add a timestamp to the filename?";
pub const CLIPBOARD_QUESTION: &str = "Copy diff to clipboard?";

/// Drives the prompt sequence that overrides a [`RunConfig`].
pub struct InteractiveService {
    prompter: Arc<dyn Prompter>,
}

fn answered<T>(step: &str, answer: Option<T>) -> ApplicationResult<T> {
    answer.ok_or_else(|| {
        debug!("cancelled at {}", step);
        ApplicationError::Cancelled {
            step: step.to_string(),
        }
    })
}

impl InteractiveService {
    pub fn new(prompter: Arc<dyn Prompter>) -> Self {
        Self { prompter }
    }

    /// Ask every question, updating `config` in place.
    ///
    /// Returns [`ApplicationError::Cancelled`] as soon as the user aborts;
    /// earlier answers may already be applied to `config` by then.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&self, config: &mut RunConfig) -> ApplicationResult<()> {
        let labels: Vec<&str> = DiffType::ALL.iter().map(DiffType::label).collect();
        let choice = self
            .prompter
            .choose(DIFF_TYPE_HEADER, &labels, config.diff_type.label())?;
        let choice = answered("diff type", choice)?;
        config.diff_type = DiffType::from_label(&choice)
            .ok_or_else(|| ApplicationError::UnexpectedSelection(choice.clone()))?;

        let output_dir = self.prompter.input(
            OUTPUT_DIR_HEADER,
            &config.output_dir,
            OUTPUT_DIR_PLACEHOLDER,
        )?;
        let output_dir = answered("output directory", output_dir)?;
        if !output_dir.is_empty() {
            config.output_dir = output_dir;
        }

        let filename =
            self.prompter
                .input(FILENAME_HEADER, &config.filename, FILENAME_PLACEHOLDER)?;
        let filename = answered("filename", filename)?;
        if !filename.is_empty() {
            config.filename = filename;
        }

        config.timestamp = answered("timestamp", self.prompter.confirm(TIMESTAMP_QUESTION)?)?;
        config.copy_to_clipboard =
            answered("clipboard", self.prompter.confirm(CLIPBOARD_QUESTION)?)?;

        debug!("run: {:?}", config);
        Ok(())
    }
}
