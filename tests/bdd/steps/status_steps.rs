//! BDD step definitions for status rendering

use cucumber::{given, then, when};
use serde_json::json;

use homework_bot::status::parse_status;

use crate::world::BotWorld;

#[given(expr = "a homework record named {string} with status {string}")]
fn homework_record(world: &mut BotWorld, name: String, status: String) {
    world.homework = Some(json!({"homework_name": name, "status": status}));
}

#[given(expr = "a homework record with status {string} and no name")]
fn homework_record_without_name(world: &mut BotWorld, status: String) {
    world.homework = Some(json!({"status": status}));
}

#[when("the status message is rendered")]
fn render_status(world: &mut BotWorld) {
    let homework = world.homework.as_ref().expect("homework not set");
    world.parse_result = Some(parse_status(homework));
}

#[then(expr = "the message is {string}")]
fn message_is(world: &mut BotWorld, expected: String) {
    let result = world.parse_result.as_ref().expect("no render result");
    let message = result.as_ref().expect("rendering failed");
    assert_eq!(message, &expected);
}

#[then(expr = "the message contains {string}")]
fn message_contains(world: &mut BotWorld, expected: String) {
    let result = world.parse_result.as_ref().expect("no render result");
    let message = result.as_ref().expect("rendering failed");
    assert!(
        message.contains(&expected),
        "Expected message to contain '{}', got '{}'",
        expected,
        message
    );
}

#[then("rendering fails with an unrecognized status")]
fn rendering_fails_unrecognized(world: &mut BotWorld) {
    let result = world.parse_result.as_ref().expect("no render result");
    let err = result.as_ref().expect_err("rendering unexpectedly succeeded");
    assert!(
        matches!(err, homework_bot::BotError::UnrecognizedStatus(_)),
        "expected UnrecognizedStatus, got {err:?}"
    );
}

#[then("rendering fails with a missing name")]
fn rendering_fails_missing_name(world: &mut BotWorld) {
    let result = world.parse_result.as_ref().expect("no render result");
    let err = result.as_ref().expect_err("rendering unexpectedly succeeded");
    assert!(
        matches!(err, homework_bot::BotError::HomeworkNameMissing),
        "expected HomeworkNameMissing, got {err:?}"
    );
}
