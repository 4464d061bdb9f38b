//! Tests for InteractiveService with a scripted prompter

mod common;

use std::sync::Arc;

use rstest::rstest;

use common::{Answer, Asked, ScriptedPrompter};
use sjiek::application::services::InteractiveService;
use sjiek::application::ApplicationError;
use sjiek::domain::{DiffType, RunConfig};

fn defaults() -> RunConfig {
    RunConfig {
        output_dir: "/home/alice/llm_context_diffs".into(),
        filename: "current_diff.txt".into(),
        diff_type: DiffType::All,
        timestamp: false,
        copy_to_clipboard: false,
        interactive: true,
        intro: false,
    }
}

fn run(answers: Vec<Answer>) -> (Arc<ScriptedPrompter>, RunConfig, Result<(), ApplicationError>) {
    let prompter = Arc::new(ScriptedPrompter::new(answers));
    let service = InteractiveService::new(prompter.clone());
    let mut config = defaults();
    let result = service.run(&mut config);
    (prompter, config, result)
}

#[test]
fn given_full_answers_when_run_then_overrides_every_field() {
    let (_, config, result) = run(vec![
        Answer::Text("staged (for commit)"),
        Answer::Text("~/exports"),
        Answer::Text("review.md"),
        Answer::Yes,
        Answer::Yes,
    ]);

    result.unwrap();
    assert_eq!(config.diff_type, DiffType::Staged);
    assert_eq!(config.output_dir, "~/exports");
    assert_eq!(config.filename, "review.md");
    assert!(config.timestamp);
    assert!(config.copy_to_clipboard);
}

#[test]
fn given_run_when_prompting_then_asks_in_order_with_current_values() {
    let (prompter, _, result) = run(vec![
        Answer::Text("all (staged & unstaged)"),
        Answer::Text(""),
        Answer::Text(""),
        Answer::No,
        Answer::No,
    ]);

    result.unwrap();
    assert_eq!(
        prompter.asked(),
        vec![
            Asked::Choose {
                header: "Select Diff Type:".into(),
                options: vec![
                    "all (staged & unstaged)".into(),
                    "staged (for commit)".into(),
                    "unstaged (working changes)".into(),
                ],
                selected: "all (staged & unstaged)".into(),
            },
            Asked::Input {
                header: "Output Directory:".into(),
                value: "/home/alice/llm_context_diffs".into(),
            },
            Asked::Input {
                header: "Filename:".into(),
                value: "current_diff.txt".into(),
            },
            Asked::Confirm("Add a timestamp to the filename?".into()),
            Asked::Confirm("Copy diff to clipboard?".into()),
        ]
    );
}

#[test]
fn given_empty_text_answers_when_run_then_keeps_existing_values() {
    let (_, config, result) = run(vec![
        Answer::Text("unstaged (working changes)"),
        Answer::Text(""),
        Answer::Text(""),
        Answer::No,
        Answer::No,
    ]);

    result.unwrap();
    assert_eq!(config.diff_type, DiffType::Unstaged);
    assert_eq!(config.output_dir, "/home/alice/llm_context_diffs");
    assert_eq!(config.filename, "current_diff.txt");
}

#[test]
fn given_declined_confirms_when_run_then_flags_turned_off() {
    let prompter = Arc::new(ScriptedPrompter::new(vec![
        Answer::Text("all (staged & unstaged)"),
        Answer::Text(""),
        Answer::Text(""),
        Answer::No,
        Answer::No,
    ]));
    let mut config = RunConfig {
        timestamp: true,
        copy_to_clipboard: true,
        ..defaults()
    };

    InteractiveService::new(prompter).run(&mut config).unwrap();

    assert!(!config.timestamp);
    assert!(!config.copy_to_clipboard);
}

#[rstest]
#[case(0, "diff type")]
#[case(1, "output directory")]
#[case(2, "filename")]
#[case(3, "timestamp")]
#[case(4, "clipboard")]
fn given_cancel_at_step_when_run_then_cancelled_and_no_further_prompts(
    #[case] step: usize,
    #[case] name: &str,
) {
    let mut answers = vec![
        Answer::Text("staged (for commit)"),
        Answer::Text("/tmp/out"),
        Answer::Text("x.txt"),
        Answer::Yes,
        Answer::Yes,
    ];
    answers.truncate(step);
    answers.push(Answer::Cancel);

    let (prompter, _, result) = run(answers);

    let err = result.unwrap_err();
    assert!(err.is_cancelled());
    assert!(matches!(err, ApplicationError::Cancelled { step: ref at } if at == name));
    assert_eq!(prompter.asked().len(), step + 1);
}

#[test]
fn given_unknown_label_when_run_then_unexpected_selection() {
    let (_, _, result) = run(vec![Answer::Text("everything")]);

    let err = result.unwrap_err();
    assert!(matches!(err, ApplicationError::UnexpectedSelection(ref s) if s == "everything"));
    assert!(!err.is_cancelled());
}

#[test]
fn given_prompt_failure_when_run_then_command_error() {
    let (_, _, result) = run(vec![Answer::Text("staged (for commit)"), Answer::Fail]);

    let err = result.unwrap_err();
    assert!(matches!(err, ApplicationError::Command { .. }));
    assert!(!err.is_cancelled());
}

#[test]
fn given_prompt_tool_missing_when_run_then_tool_not_found() {
    let prompter = Arc::new(ScriptedPrompter::unavailable());
    let mut config = defaults();

    let err = InteractiveService::new(prompter).run(&mut config).unwrap_err();

    assert!(matches!(err, ApplicationError::ToolNotFound { ref tool } if tool == "gum"));
    assert_eq!(err.to_string(), "gum command not found. Please install gum");
}
