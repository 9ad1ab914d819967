use crate::{AppCommand, AppError, console::parse_line};

use serde_json::json;

/// WHAT: A JSON line becomes an action command
/// WHY: Console delivery feeds the dispatcher
#[test]
#[allow(clippy::unwrap_used, clippy::panic)]
fn given_action_line_when_parsing_then_action_command() {
    // Given: A start line
    let line = r#"{"action": "START_RECORDING", "params": {"title": "Algebra", "live": true}}"#;

    // When: Parsing
    let cmd = parse_line(line).unwrap().unwrap();

    // Then: Tag and params are carried over
    let AppCommand::Action { action, params, .. } = cmd else {
        panic!("expected an action");
    };
    assert_eq!(action, "START_RECORDING");
    assert_eq!(params.get("title"), Some(&json!("Algebra")));
    assert_eq!(params.get("live"), Some(&json!(true)));
}

/// WHAT: Params are optional
/// WHY: Stop and list actions usually carry none
#[test]
#[allow(clippy::unwrap_used)]
fn given_line_without_params_when_parsing_then_empty_params() {
    // Given/When: A stop line without params
    let cmd = parse_line(r#"{"action": "STOP_RECORDING"}"#).unwrap().unwrap();

    // Then: Empty params
    assert!(matches!(cmd, AppCommand::Action { ref params, .. } if params.is_empty()));
}

/// WHAT: Blank lines are ignored and garbage rejected
/// WHY: The console must survive stray input
#[test]
#[allow(clippy::unwrap_used)]
fn given_blank_or_invalid_line_when_parsing_then_ignored_or_rejected() {
    // Given/When/Then: Blank line
    assert!(parse_line("   ").unwrap().is_none());

    // Given/When/Then: Garbage
    assert!(matches!(
        parse_line("START_RECORDING"),
        Err(AppError::InvalidCommand { .. })
    ));
}
