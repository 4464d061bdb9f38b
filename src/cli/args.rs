//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueHint};
use clap_complete::Shell;

use crate::application::RunFlags;

/// Export the current git diff to a file (and optionally the clipboard)
#[derive(Parser, Debug)]
#[command(name = "sjiek")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output directory (default: ~/llm_context_diffs or ./sjiek_diffs)
    #[arg(short = 'o', long = "output-dir", value_hint = ValueHint::DirPath)]
    pub output_dir: Option<String>,

    /// Filename (default: current_diff.txt)
    #[arg(short = 'n', long = "name", value_name = "FILENAME")]
    pub filename: Option<String>,

    /// Diff type: all, staged, unstaged
    #[arg(long = "diff-type", value_name = "TYPE")]
    pub diff_type: Option<String>,

    /// Add timestamp to filename
    #[arg(short = 't', long)]
    pub timestamp: bool,

    /// Copy diff to clipboard
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// Run in interactive mode using gum
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Show the startup intro animation
    #[arg(long)]
    pub intro: bool,

    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count)]
    pub debug: u8,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub show_config: bool,

    /// Print shell completions and exit
    #[arg(long = "generator", value_enum)]
    pub generator: Option<Shell>,
}

impl From<&Cli> for RunFlags {
    fn from(cli: &Cli) -> Self {
        RunFlags {
            output_dir: cli.output_dir.clone(),
            filename: cli.filename.clone(),
            diff_type: cli.diff_type.clone(),
            timestamp: cli.timestamp,
            copy_to_clipboard: cli.clipboard,
            interactive: cli.interactive,
            intro: cli.intro,
        }
    }
}
