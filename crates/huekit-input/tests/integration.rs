//! Integration tests for huekit-input.
//!
//! These drive whole prompt sessions through a shared [`MockTerminal`] so the
//! behavior is the same on a developer machine and in CI.

use std::sync::Arc;

use clap::{Arg, Command};
use huekit_input::{
    ArgSource, InputChain, InputError, InputSourceKind, MockTerminal, SelectPromptSource,
    TextPromptSource,
};

fn create_test_command() -> Command {
    Command::new("test")
        .arg(Arg::new("palette").long("palette"))
        .arg(Arg::new("out").long("out"))
        .arg(Arg::new("step").long("step"))
}

// ============================================================================
// Test: a three-question session answered from one scripted terminal
// ============================================================================

#[test]
fn session_answers_are_consumed_in_order() {
    let matches = create_test_command().try_get_matches_from(["test"]).unwrap();
    let terminal = Arc::new(MockTerminal::with_responses(["2", "", "0.35"]));

    let palette = InputChain::<String>::new()
        .try_source(ArgSource::new("palette"))
        .try_source(SelectPromptSource::with_shared_terminal(
            "Choose starter theme",
            vec!["ember".to_string(), "moss".to_string()],
            Arc::clone(&terminal),
        ))
        .default("ember".to_string())
        .resolve_with_source(&matches)
        .unwrap();

    let out = InputChain::<String>::new()
        .try_source(ArgSource::new("out"))
        .try_source(TextPromptSource::with_shared_terminal(
            "generate to which path?",
            Arc::clone(&terminal),
        ))
        .default("src/styles".to_string())
        .resolve_with_source(&matches)
        .unwrap();

    let step = InputChain::<String>::new()
        .try_source(ArgSource::new("step"))
        .try_source(TextPromptSource::with_shared_terminal(
            "set colour step",
            Arc::clone(&terminal),
        ))
        .default("0.2".to_string())
        .resolve_with_source(&matches)
        .unwrap();

    assert_eq!(palette.value, "moss");
    assert_eq!(palette.source, InputSourceKind::Prompt);
    assert_eq!(out.value, "src/styles");
    assert_eq!(out.source, InputSourceKind::Default);
    assert_eq!(step.value, "0.35");
    assert_eq!(terminal.reads(), 3);
}

#[test]
fn arguments_skip_the_prompt_entirely() {
    let matches = create_test_command()
        .try_get_matches_from(["test", "--out", "web/css"])
        .unwrap();
    let terminal = Arc::new(MockTerminal::with_responses(["ignored"]));

    let out = InputChain::<String>::new()
        .try_source(ArgSource::new("out"))
        .try_source(TextPromptSource::with_shared_terminal(
            "generate to which path?",
            Arc::clone(&terminal),
        ))
        .resolve_with_source(&matches)
        .unwrap();

    assert_eq!(out.value, "web/css");
    assert_eq!(out.source, InputSourceKind::Arg);
    assert_eq!(terminal.reads(), 0);
    assert!(terminal.prompts().is_empty());
}

#[test]
fn eof_mid_session_cancels() {
    let matches = create_test_command().try_get_matches_from(["test"]).unwrap();
    let terminal = Arc::new(MockTerminal::with_responses(["1"]));

    let first = InputChain::<String>::new()
        .try_source(SelectPromptSource::with_shared_terminal(
            "Choose starter theme",
            vec!["ember".to_string()],
            Arc::clone(&terminal),
        ))
        .resolve(&matches);
    assert_eq!(first.unwrap(), "ember");

    let second = InputChain::<String>::new()
        .try_source(TextPromptSource::with_shared_terminal(
            "generate to which path?",
            Arc::clone(&terminal),
        ))
        .default("src/styles".to_string())
        .resolve(&matches);
    assert!(matches!(second, Err(InputError::PromptCancelled)));
}

#[test]
fn piped_stdin_resolves_to_defaults() {
    let matches = create_test_command().try_get_matches_from(["test"]).unwrap();
    let terminal = Arc::new(MockTerminal::non_terminal());

    let step = InputChain::<String>::new()
        .try_source(ArgSource::new("step"))
        .try_source(TextPromptSource::with_shared_terminal(
            "set colour step",
            terminal,
        ))
        .default("0.2".to_string())
        .resolve_with_source(&matches)
        .unwrap();

    assert_eq!(step.value, "0.2");
    assert_eq!(step.source, InputSourceKind::Default);
}
