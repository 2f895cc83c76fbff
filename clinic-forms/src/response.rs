//! Field probing on login and profile responses.
//!
//! The API has shipped several spellings of the same field over time, so each
//! lookup walks an ordered list of key paths under `data` and takes the first
//! truthy value. The order is significant.

use clinic_core::UserId;
use serde_json::Value;

use crate::dates::extract_date_string;
use crate::is_truthy;

type KeyPath = &'static [&'static str];

const LOCKED_FIELD_PATHS: [KeyPath; 4] = [
    &["locked_until"],
    &["lockedUntil"],
    &["lock_expires_at"],
    &["locked_at"],
];

const USER_ID_PATHS: [KeyPath; 8] = [
    &["id"],
    &["user_id"],
    &["therapist_id"],
    &["ID"],
    &["therapist", "ID"],
    &["therapist", "id"],
    &["user", "ID"],
    &["user", "id"],
];

const ERROR_MESSAGE_PATHS: [KeyPath; 3] = [&["error"], &["data", "error"], &["message"]];

/// Lock expiry reported by a rejected login, if any.
pub fn extract_locked_field(response: &Value) -> Option<String> {
    let data = payload(response)?;
    present_values(data, &LOCKED_FIELD_PATHS)
        .next()
        .map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
}

/// Id of the signed-in user or therapist, without coercion.
///
/// Values that are neither numbers nor strings are skipped and probing moves
/// on to the next path.
pub fn extract_user_id(response: &Value) -> Option<UserId> {
    let data = payload(response)?;
    present_values(data, &USER_ID_PATHS).find_map(|value| match value {
        Value::Number(number) => Some(UserId::Number(number.clone())),
        Value::String(text) => Some(UserId::Text(text.clone())),
        _ => None,
    })
}

/// Human-readable error attached to a failed request.
pub fn extract_error_message(response: &Value) -> Option<&str> {
    present_values(response, &ERROR_MESSAGE_PATHS).find_map(Value::as_str)
}

/// Lock expiry text: the dedicated field when present, otherwise the first
/// date-time mentioned in the error message.
pub fn lock_deadline_text(response: &Value) -> Option<String> {
    extract_locked_field(response).or_else(|| {
        extract_error_message(response)
            .and_then(extract_date_string)
            .map(str::to_string)
    })
}

fn payload(response: &Value) -> Option<&Value> {
    response.get("data").filter(|data| is_truthy(data))
}

fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, key| node.get(*key))
}

fn present_values<'a>(
    root: &'a Value,
    paths: &'a [KeyPath],
) -> impl Iterator<Item = &'a Value> + 'a {
    paths
        .iter()
        .filter_map(move |path| lookup(root, path))
        .filter(|value| is_truthy(value))
}
