//! Command execution: the whole run from flags to written file

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, instrument};

use crate::application::{resolve_run_config, RunFlags};
use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::Prompter;
use crate::infrastructure::InfraError;

pub const INTRO_TITLE: &str = "🫧 sjiek 🫧";
pub const INTRO_SLOGAN: &str = "🫦 chew on this 🫦";

/// Process-level context of a run.
#[derive(Debug, Clone)]
pub struct RunEnv {
    /// Directory whose repository is diffed; base for relative output paths
    pub cwd: PathBuf,
    /// Home directory, if known
    pub home: Option<PathBuf>,
    /// Local wall clock, read once the file is about to be written
    pub clock: fn() -> NaiveDateTime,
}

impl RunEnv {
    /// Capture the current process environment.
    pub fn current() -> CliResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| InfraError::io("determine current directory", e))?;
        Ok(Self {
            cwd,
            home: crate::config::home_dir(),
            clock: local_now,
        })
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Execute the command line against the real process environment.
pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    if cli.show_config {
        output::info(&container.settings.to_toml()?);
        return Ok(());
    }
    let env = RunEnv::current()?;
    execute_in(cli, container, &env)
}

/// Run: defaults, validate, [prompts, revalidate], capture, write, [copy].
///
/// Cancellation surfaces as an error for which `CliError::is_cancelled`
/// is true; no file has been written at that point.
#[instrument(level = "debug", skip_all)]
pub fn execute_in(cli: &Cli, container: &ServiceContainer, env: &RunEnv) -> CliResult<()> {
    let intro_shown = cli.intro && show_intro(container.prompter.as_ref());

    let flags = RunFlags::from(cli);
    let mut config = resolve_run_config(&flags, &container.settings, env.home.as_deref())?;

    if config.interactive {
        if !intro_shown {
            greet(container.prompter.as_ref());
        }
        container.interactive_service().run(&mut config)?;
        config.validate()?;
    }
    debug!("execute_in: config={:?}", config);

    let diff_service = container.diff_service();
    diff_service.ensure_repository(&env.cwd)?;
    let diff = diff_service.capture(&env.cwd, config.diff_type)?;

    let export = container.export_service();
    let now = (env.clock)();
    let target = export.plan(&config, env.home.as_deref(), &env.cwd, now)?;

    if diff.is_empty() {
        output::saved(
            &format!(
                "No changes for diff type '{}'. Empty file saved to:",
                config.diff_type
            ),
            &target.path(),
        );
    }
    let path = export.write(&target, &diff)?;
    if !diff.is_empty() {
        output::saved(
            &format!(
                "💾 diff for '{}' saved successfully to:",
                config.diff_type.description()
            ),
            &path,
        );
    }

    if config.copy_to_clipboard {
        copy_to_clipboard(container, &diff);
    }
    Ok(())
}

/// Clipboard failures never fail the run; the file is already written.
fn copy_to_clipboard(container: &ServiceContainer, diff: &crate::domain::DiffCapture) {
    match container.export_service().copy_to_clipboard(diff) {
        Ok(()) if diff.is_empty() => output::success("📋", "empty string copied to clipboard!"),
        Ok(()) => output::success("📋", "diff copied to clipboard!"),
        Err(e) if diff.is_empty() => {
            output::warning(&format!("Could not copy empty string to clipboard: {e}"))
        }
        Err(e) => {
            output::warning(&format!("Could not copy diff to clipboard: {e}"));
            output::detail(
                "Ensure a clipboard utility is installed (e.g., xclip/xsel on Linux, pbcopy on macOS, wl-clipboard for Wayland).",
            );
        }
    }
}

/// Startup intro; returns whether the animated version ran.
fn show_intro(prompter: &dyn Prompter) -> bool {
    if !prompter.is_available() {
        output::info(&format!("{INTRO_TITLE} - {INTRO_SLOGAN}"));
        output::info("");
        return false;
    }
    let command = format!("sleep 0.7; echo \"{INTRO_SLOGAN}\"");
    if let Err(e) = prompter.spin(INTRO_TITLE, &command) {
        debug!("show_intro: spinner failed: {}", e);
        output::info(&format!("{INTRO_TITLE} {INTRO_SLOGAN}"));
    }
    output::info("");
    true
}

/// Banner shown when interactive mode starts without the intro.
fn greet(prompter: &dyn Prompter) {
    if !prompter.is_available() {
        output::header("sjiek: interactive mode");
        return;
    }
    if let Err(e) = prompter.style(INTRO_SLOGAN, &["--padding", "1"]) {
        debug!("greet: style failed: {}", e);
        output::info(INTRO_SLOGAN);
    }
}
