//! BDD step definitions for response validation

use cucumber::{given, then, when};
use serde_json::{json, Value};

use homework_bot::response::check_response;

use crate::world::BotWorld;

#[given(expr = "a response mapping with current date {int} and a homework named {string} with status {string}")]
fn response_with_homework(world: &mut BotWorld, date: i64, name: String, status: String) {
    world.raw_response = Some(json!({
        "current_date": date,
        "homeworks": [{"homework_name": name, "status": status}]
    }));
}

#[given(expr = "a response mapping with current date {int} and an empty homework list")]
fn response_with_empty_list(world: &mut BotWorld, date: i64) {
    world.raw_response = Some(json!({"current_date": date, "homeworks": []}));
}

#[given(expr = "a response mapping without the {string} key")]
fn response_missing_key(world: &mut BotWorld, key: String) {
    let mut response = json!({"current_date": 1000, "homeworks": []});
    response
        .as_object_mut()
        .expect("response is a mapping")
        .remove(&key);
    world.raw_response = Some(response);
}

#[given(expr = "a response that is the number {int}")]
fn response_is_number(world: &mut BotWorld, number: i64) {
    world.raw_response = Some(json!(number));
}

#[given(expr = "a response mapping where {string} is the string {string}")]
fn response_key_is_string(world: &mut BotWorld, key: String, value: String) {
    world.raw_response = Some(json!({"current_date": 1000, key: value}));
}

#[when("the response is validated")]
fn validate_response(world: &mut BotWorld) {
    let response = world.raw_response.clone().expect("response not set");
    world.check_result = Some(check_response(response));
}

#[when("the same response wrapped in a one-element sequence is validated")]
fn validate_wrapped_response(world: &mut BotWorld) {
    let inner = world.raw_response.clone().expect("response not set");
    world.second_check_result = Some(check_response(Value::Array(vec![inner])));
}

#[then(expr = "validation yields {int} homework(s)")]
fn validation_yields(world: &mut BotWorld, count: usize) {
    let result = world.check_result.as_ref().expect("no validation result");
    let homeworks = result.as_ref().expect("validation failed");
    assert_eq!(homeworks.len(), count);
}

#[then("both validations yield the same homework list")]
fn validations_agree(world: &mut BotWorld) {
    let first = world
        .check_result
        .as_ref()
        .expect("no validation result")
        .as_ref()
        .expect("validation failed");
    let second = world
        .second_check_result
        .as_ref()
        .expect("no second validation result")
        .as_ref()
        .expect("second validation failed");
    assert_eq!(first, second);
}

#[then(expr = "validation fails mentioning {string}")]
fn validation_fails_mentioning(world: &mut BotWorld, expected: String) {
    let result = world.check_result.as_ref().expect("no validation result");
    let err = result
        .as_ref()
        .expect_err("validation unexpectedly succeeded");
    assert!(
        err.to_string().contains(&expected),
        "Expected error mentioning '{}', got '{}'",
        expected,
        err
    );
}
