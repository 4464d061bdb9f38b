//! Test doubles and git fixtures shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::process::Command;
use std::sync::Mutex;

use tempfile::TempDir;

use sjiek::infrastructure::error::{InfraError, PromptError, PromptResult};
use sjiek::infrastructure::traits::{Clipboard, Prompter};
use sjiek::infrastructure::InfraResult;

// ============================================================
// Prompter
// ============================================================

/// One scripted reaction of the mock prompter.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(&'static str),
    Yes,
    No,
    Cancel,
    Fail,
}

/// A prompt call as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asked {
    Choose {
        header: String,
        options: Vec<String>,
        selected: String,
    },
    Input {
        header: String,
        value: String,
    },
    Confirm(String),
}

/// Prompter answering from a script, recording every question.
pub struct ScriptedPrompter {
    available: bool,
    answers: Mutex<VecDeque<Answer>>,
    asked: Mutex<Vec<Asked>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            available: true,
            answers: Mutex::new(answers.into_iter().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// A prompter whose tool is not installed.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(Vec::new())
        }
    }

    pub fn asked(&self) -> Vec<Asked> {
        self.asked.lock().unwrap().clone()
    }

    fn next(&self) -> PromptResult<Answer> {
        if !self.available {
            return Err(PromptError::NotInstalled("gum".into()));
        }
        Ok(self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("prompter asked more questions than scripted"))
    }

    fn failed(action: &str) -> PromptError {
        PromptError::Failed {
            program: "gum".into(),
            action: action.into(),
            code: Some(2),
        }
    }

    fn text(&self, action: &str) -> PromptResult<Option<String>> {
        match self.next()? {
            Answer::Text(t) => Ok(Some(t.to_string())),
            Answer::Cancel => Ok(None),
            Answer::Fail => Err(Self::failed(action)),
            other => panic!("{action} answered with {other:?}"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn is_available(&self) -> bool {
        self.available
    }

    fn choose(
        &self,
        header: &str,
        options: &[&str],
        selected: &str,
    ) -> PromptResult<Option<String>> {
        self.asked.lock().unwrap().push(Asked::Choose {
            header: header.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            selected: selected.into(),
        });
        self.text("choose")
    }

    fn input(&self, header: &str, value: &str, _placeholder: &str) -> PromptResult<Option<String>> {
        self.asked.lock().unwrap().push(Asked::Input {
            header: header.into(),
            value: value.into(),
        });
        self.text("input")
    }

    fn confirm(&self, prompt: &str) -> PromptResult<Option<bool>> {
        self.asked
            .lock()
            .unwrap()
            .push(Asked::Confirm(prompt.into()));
        match self.next()? {
            Answer::Yes => Ok(Some(true)),
            Answer::No => Ok(Some(false)),
            Answer::Cancel => Ok(None),
            Answer::Fail => Err(Self::failed("confirm")),
            other => panic!("confirm answered with {other:?}"),
        }
    }

    fn spin(&self, _title: &str, _shell_command: &str) -> PromptResult<()> {
        Ok(())
    }

    fn style(&self, _text: &str, _flags: &[&str]) -> PromptResult<()> {
        Ok(())
    }
}

// ============================================================
// Clipboard
// ============================================================

/// Clipboard that remembers what it was given.
#[derive(Default)]
pub struct RecordingClipboard {
    should_fail: bool,
    copied: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn copy(&self, text: &str) -> InfraResult<()> {
        if self.should_fail {
            return Err(InfraError::Clipboard {
                message: "no clipboard utility found".into(),
            });
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

// ============================================================
// Git fixtures
// ============================================================

pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("run git");
    assert!(status.success(), "git {:?} failed", args);
}

/// Repository with one commit of `tracked.txt`.
pub fn init_repo() -> TempDir {
    let temp = TempDir::new().expect("create temp dir");
    let dir = temp.path();
    git(dir, &["init", "-q"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    std::fs::write(dir.join("tracked.txt"), "one\n").unwrap();
    git(dir, &["add", "tracked.txt"]);
    git(dir, &["commit", "-q", "-m", "initial"]);
    temp
}

/// Stage a new file and leave an unstaged edit to `tracked.txt`.
pub fn make_changes(dir: &Path) {
    std::fs::write(dir.join("staged.txt"), "staged content\n").unwrap();
    git(dir, &["add", "staged.txt"]);
    std::fs::write(dir.join("tracked.txt"), "two\n").unwrap();
}

pub fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path).expect("read output file")
}
