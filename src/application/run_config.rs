//! Building the run configuration from flags and settings

use std::path::Path;

use tracing::{debug, warn};

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{DiffType, RunConfig};

/// Output directory under the home directory.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "llm_context_diffs";

/// Output directory when the home directory is unknown.
pub const FALLBACK_OUTPUT_DIR: &str = "./sjiek_diffs";

/// Values given on the command line; `None`/`false` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunFlags {
    pub output_dir: Option<String>,
    pub filename: Option<String>,
    pub diff_type: Option<String>,
    pub timestamp: bool,
    pub copy_to_clipboard: bool,
    pub interactive: bool,
    pub intro: bool,
}

/// Default output directory for a given home directory.
pub fn default_output_dir(home: Option<&Path>) -> String {
    match home {
        Some(home) => home.join(DEFAULT_OUTPUT_SUBDIR).to_string_lossy().into_owned(),
        None => {
            warn!(
                "could not get user home directory, defaulting output directory to {}",
                FALLBACK_OUTPUT_DIR
            );
            FALLBACK_OUTPUT_DIR.to_string()
        }
    }
}

/// Apply defaults (flags over settings over built-ins) and validate.
pub fn resolve_run_config(
    flags: &RunFlags,
    settings: &Settings,
    home: Option<&Path>,
) -> ApplicationResult<RunConfig> {
    let output_dir = flags
        .output_dir
        .clone()
        .filter(|d| !d.is_empty())
        .or_else(|| settings.output_dir.clone())
        .unwrap_or_else(|| default_output_dir(home));

    let filename = flags
        .filename
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| settings.filename.clone());

    let diff_type = flags
        .diff_type
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| settings.diff_type.clone())
        .parse::<DiffType>()?;

    let config = RunConfig {
        output_dir,
        filename,
        diff_type,
        timestamp: flags.timestamp || settings.timestamp,
        copy_to_clipboard: flags.copy_to_clipboard || settings.copy_to_clipboard,
        interactive: flags.interactive,
        intro: flags.intro,
    };
    config.validate()?;

    debug!("resolve_run_config: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::DomainError;
    use std::path::PathBuf;

    #[test]
    fn given_no_flags_when_resolving_then_uses_defaults() {
        let home = PathBuf::from("/home/alice");
        let config =
            resolve_run_config(&RunFlags::default(), &Settings::default(), Some(&home)).unwrap();

        assert_eq!(config.output_dir, "/home/alice/llm_context_diffs");
        assert_eq!(config.filename, "current_diff.txt");
        assert_eq!(config.diff_type, DiffType::All);
        assert!(!config.timestamp);
        assert!(!config.copy_to_clipboard);
        assert!(!config.interactive);
    }

    #[test]
    fn given_no_home_when_resolving_then_falls_back_to_local_dir() {
        let config = resolve_run_config(&RunFlags::default(), &Settings::default(), None).unwrap();
        assert_eq!(config.output_dir, "./sjiek_diffs");
    }

    #[test]
    fn given_flags_when_resolving_then_flags_win_over_settings() {
        let settings = Settings {
            output_dir: Some("/from/settings".into()),
            filename: "settings.txt".into(),
            diff_type: "staged".into(),
            ..Settings::default()
        };
        let flags = RunFlags {
            output_dir: Some("/from/flags".into()),
            filename: Some("flags.md".into()),
            diff_type: Some("unstaged".into()),
            timestamp: true,
            copy_to_clipboard: true,
            interactive: true,
            intro: false,
        };

        let config = resolve_run_config(&flags, &settings, None).unwrap();

        assert_eq!(config.output_dir, "/from/flags");
        assert_eq!(config.filename, "flags.md");
        assert_eq!(config.diff_type, DiffType::Unstaged);
        assert!(config.timestamp);
        assert!(config.copy_to_clipboard);
        assert!(config.interactive);
    }

    #[test]
    fn given_settings_only_when_resolving_then_settings_apply() {
        let settings = Settings {
            output_dir: Some("~/exports".into()),
            diff_type: "staged".into(),
            timestamp: true,
            ..Settings::default()
        };

        let config = resolve_run_config(&RunFlags::default(), &settings, None).unwrap();

        assert_eq!(config.output_dir, "~/exports");
        assert_eq!(config.diff_type, DiffType::Staged);
        assert!(config.timestamp);
    }

    #[test]
    fn given_invalid_diff_type_when_resolving_then_error_names_value() {
        let flags = RunFlags {
            diff_type: Some("head".into()),
            ..RunFlags::default()
        };
        let err = resolve_run_config(&flags, &Settings::default(), None).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidDiffType(ref v)) if v == "head"
        ));
    }

    #[test]
    fn given_blank_filename_in_settings_when_resolving_then_fails() {
        let settings = Settings {
            filename: "  ".into(),
            ..Settings::default()
        };
        let err = resolve_run_config(&RunFlags::default(), &settings, None).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::EmptyFilename)
        ));
    }
}
