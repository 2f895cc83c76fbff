use std::fs;

use chrono::NaiveDate;
use clinic_core::{Gender, UserId};
use clinic_forms::{
    extract_locked_field, extract_user_id, lock_deadline_text, normalize_gender_value,
    parse_lock_deadline,
};
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn load(name: &str) -> Value {
    let body = fs::read_to_string(fixture_path(name)).expect("Could not read login fixture");
    serde_json::from_str(&body).expect("Fixture is not valid JSON")
}

#[test]
fn therapist_login_yields_nested_id() {
    let response = load("login_therapist_response.json");

    assert_eq!(
        extract_user_id(&response),
        Some(UserId::Number(202_i64.into()))
    );
    assert_eq!(extract_locked_field(&response), None);
    assert_eq!(
        normalize_gender_value(&response["data"]["therapist"]["gender"]),
        Gender::Female
    );
}

#[test]
fn locked_login_reports_deadline_from_message() {
    let response = load("login_locked_response.json");

    assert_eq!(extract_locked_field(&response), None);
    assert_eq!(extract_user_id(&response), None);

    let text = lock_deadline_text(&response).expect("deadline should be found in error text");
    assert_eq!(text, "2024-01-01 12:00:00");

    let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid date");
    assert_eq!(parse_lock_deadline(&text), Some(expected));
}

#[test]
fn locked_login_prefers_dedicated_field() {
    let response = load("login_locked_field_response.json");

    let text = lock_deadline_text(&response).expect("locked field should be present");
    assert_eq!(text, "2024-01-01T12:00:00Z");

    let deadline = parse_lock_deadline(&text).expect("RFC 3339 deadline");
    assert_eq!(deadline.to_string(), "2024-01-01 12:00:00");
}
