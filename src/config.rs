//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/sjiek/sjiek.toml`
//! 3. Environment variables: `SJIEK_*` prefix
//! 4. Command-line flags (applied by the caller)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Persistent defaults for a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output directory (default: ~/llm_context_diffs, resolved at run time)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    /// Filename before timestamping
    pub filename: String,
    /// Diff type name: all, staged, unstaged
    pub diff_type: String,
    /// Timestamp the filename
    pub timestamp: bool,
    /// Copy the diff to the clipboard
    pub copy_to_clipboard: bool,
    /// Extension appended to filenames without one
    pub default_extension: String,
    /// gum binary used for interactive prompts
    pub gum_bin: String,
    /// git binary
    pub git_bin: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: None,
            filename: "current_diff.txt".into(),
            diff_type: "all".into(),
            timestamp: false,
            copy_to_clipboard: false,
            default_extension: "txt".into(),
            gum_bin: "gum".into(),
            git_bin: "git".into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub output_dir: Option<String>,
    pub filename: Option<String>,
    pub diff_type: Option<String>,
    pub timestamp: Option<bool>,
    pub copy_to_clipboard: Option<bool>,
    pub default_extension: Option<String>,
    pub gum_bin: Option<String>,
    pub git_bin: Option<String>,
}

/// The user's home directory, if it can be determined.
pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Get the XDG config directory for sjiek.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sjiek").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("sjiek.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            output_dir: overlay.output_dir.clone().or_else(|| self.output_dir.clone()),
            filename: overlay
                .filename
                .clone()
                .unwrap_or_else(|| self.filename.clone()),
            diff_type: overlay
                .diff_type
                .clone()
                .unwrap_or_else(|| self.diff_type.clone()),
            timestamp: overlay.timestamp.unwrap_or(self.timestamp),
            copy_to_clipboard: overlay.copy_to_clipboard.unwrap_or(self.copy_to_clipboard),
            default_extension: overlay
                .default_extension
                .clone()
                .unwrap_or_else(|| self.default_extension.clone()),
            gum_bin: overlay.gum_bin.clone().unwrap_or_else(|| self.gum_bin.clone()),
            git_bin: overlay.git_bin.clone().unwrap_or_else(|| self.git_bin.clone()),
        }
    }

    /// Load settings from the global config file and `SJIEK_*` variables.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit global config file.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply SJIEK_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(Environment::with_prefix("SJIEK"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("output_dir") {
            settings.output_dir = Some(val);
        }
        if let Ok(val) = config.get_string("filename") {
            settings.filename = val;
        }
        if let Ok(val) = config.get_string("diff_type") {
            settings.diff_type = val;
        }
        if let Ok(val) = config.get_bool("timestamp") {
            settings.timestamp = val;
        }
        if let Ok(val) = config.get_bool("copy_to_clipboard") {
            settings.copy_to_clipboard = val;
        }
        if let Ok(val) = config.get_string("default_extension") {
            settings.default_extension = val;
        }
        if let Ok(val) = config.get_string("gum_bin") {
            settings.gum_bin = val;
        }
        if let Ok(val) = config.get_string("git_bin") {
            settings.git_bin = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.output_dir, None);
        assert_eq!(settings.filename, "current_diff.txt");
        assert_eq!(settings.diff_type, "all");
        assert_eq!(settings.default_extension, "txt");
        assert_eq!(settings.gum_bin, "gum");
        assert_eq!(settings.git_bin, "git");
    }

    #[test]
    fn given_partial_overlay_when_merging_then_only_specified_fields_change() {
        let base = Settings::default();
        let overlay = RawSettings {
            output_dir: Some("~/exports".into()),
            timestamp: Some(true),
            ..RawSettings::default()
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.output_dir.as_deref(), Some("~/exports"));
        assert!(result.timestamp);
        assert_eq!(result.filename, "current_diff.txt");
        assert!(!result.copy_to_clipboard);
    }

    #[test]
    fn given_settings_when_serializing_then_toml_lists_keys() {
        let toml = Settings::default().to_toml().expect("serialize");
        assert!(toml.contains("filename = \"current_diff.txt\""));
        assert!(toml.contains("diff_type = \"all\""));
        assert!(!toml.contains("output_dir"));
    }
}
