//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{DiffService, ExportService, InteractiveService};
use crate::config::Settings;
use crate::infrastructure::clipboard::SystemClipboard;
use crate::infrastructure::gum::GumPrompter;
use crate::infrastructure::traits::{
    Clipboard, CommandRunner, FileSystem, Prompter, RealCommandRunner, RealFileSystem,
};

/// Container holding the shared dependencies of all services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,

    /// Interactive prompts
    pub prompter: Arc<dyn Prompter>,

    /// System clipboard
    pub clipboard: Arc<dyn Clipboard>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let cmd: Arc<dyn CommandRunner> = Arc::new(RealCommandRunner);
        let prompter = Arc::new(GumPrompter::new(settings.gum_bin.clone(), cmd.clone()));
        let clipboard = Arc::new(SystemClipboard::new(cmd.clone()));
        Self::with_deps(settings, Arc::new(RealFileSystem), cmd, prompter, clipboard)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        prompter: Arc<dyn Prompter>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            cmd,
            prompter,
            clipboard,
        }
    }

    pub fn diff_service(&self) -> DiffService {
        DiffService::new(self.cmd.clone(), self.settings.clone())
    }

    pub fn export_service(&self) -> ExportService {
        ExportService::new(self.fs.clone(), self.clipboard.clone(), self.settings.clone())
    }

    pub fn interactive_service(&self) -> InteractiveService {
        InteractiveService::new(self.prompter.clone())
    }
}
