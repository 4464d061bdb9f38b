//! System clipboard via platform utilities

use std::sync::Arc;

use tracing::debug;

use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::traits::{Clipboard, CommandRunner};

/// A clipboard utility invocation that reads the text from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ClipboardTool {
    const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

/// Candidate utilities for this platform, in order of preference.
pub fn platform_tools(wayland: bool) -> Vec<ClipboardTool> {
    if cfg!(target_os = "macos") {
        return vec![ClipboardTool::new("pbcopy", &[])];
    }
    if cfg!(windows) {
        return vec![ClipboardTool::new("clip", &[])];
    }

    let mut tools = Vec::new();
    if wayland {
        tools.push(ClipboardTool::new("wl-copy", &[]));
    }
    tools.extend([
        ClipboardTool::new("xclip", &["-in", "-selection", "clipboard"]),
        ClipboardTool::new("xsel", &["--input", "--clipboard"]),
        ClipboardTool::new("termux-clipboard-set", &[]),
    ]);
    tools
}

/// Clipboard that pipes text into the first working platform utility.
pub struct SystemClipboard {
    cmd: Arc<dyn CommandRunner>,
    tools: Vec<ClipboardTool>,
}

impl SystemClipboard {
    pub fn new(cmd: Arc<dyn CommandRunner>) -> Self {
        let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
        Self::with_tools(cmd, platform_tools(wayland))
    }

    pub fn with_tools(cmd: Arc<dyn CommandRunner>, tools: Vec<ClipboardTool>) -> Self {
        Self { cmd, tools }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> InfraResult<()> {
        let mut failures = Vec::new();

        for tool in &self.tools {
            match self.cmd.run_with_stdin(tool.program, tool.args, text) {
                Ok(status) if status.success() => {
                    debug!("copy: {} bytes via {}", text.len(), tool.program);
                    return Ok(());
                }
                Ok(status) => failures.push(format!("{} exited with {}", tool.program, status)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!("copy: {} not installed", tool.program);
                }
                Err(e) => failures.push(format!("{}: {}", tool.program, e)),
            }
        }

        let message = if failures.is_empty() {
            let names: Vec<_> = self.tools.iter().map(|t| t.program).collect();
            format!("no clipboard utility found (tried {})", names.join(", "))
        } else {
            failures.join("; ")
        };
        Err(InfraError::Clipboard { message })
    }
}
