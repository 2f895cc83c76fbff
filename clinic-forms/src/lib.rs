//! Normalization and validation helpers for the clinic registration forms.
//!
//! Every helper is a pure function over borrowed input. Absence of a match is
//! reported through `Option`, the `"-"` sentinel or a pass-through value rather
//! than an error; only the strict payload parsers in [`tables`] return `Result`.

pub mod conditions;
pub mod dates;
pub mod gender;
pub mod password;
pub mod response;
pub mod tables;

use serde_json::Value;

pub use conditions::{resolve_health_conditions, NONE_SENTINEL};
pub use dates::{extract_date_string, parse_lock_deadline};
pub use gender::{normalize_gender, normalize_gender_value};
pub use password::{
    evaluate_password, evaluate_password_with, unmet_requirements, unmet_requirements_with,
    validate_password_strength, validate_password_strength_with,
};
pub use response::{
    extract_error_message, extract_locked_field, extract_user_id, lock_deadline_text,
};
pub use tables::{disease_table_or_empty, parse_disease_table, parse_disease_table_str};

/// JavaScript truthiness applied to a JSON value.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
