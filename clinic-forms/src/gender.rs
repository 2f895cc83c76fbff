//! Gender tokens entered on patient and therapist forms.

use clinic_core::Gender;
use serde_json::Value;

use crate::is_truthy;

const MALE_TOKENS: [&str; 5] = ["l", "m", "male", "laki-laki", "laki"];

const FEMALE_TOKENS: [&str; 4] = ["p", "f", "female", "perempuan"];

/// Map a free-text gender token to [`Gender`].
///
/// `None` and the empty string mean nothing was entered. Anything else is
/// lowercased and trimmed before lookup, so `" Laki-Laki "` is male while a
/// whitespace-only value falls through to [`Gender::Other`].
pub fn normalize_gender(input: Option<&str>) -> Gender {
    match input {
        None | Some("") => Gender::Unspecified,
        Some(raw) => classify(raw),
    }
}

/// Same as [`normalize_gender`] for values read straight from a JSON payload,
/// where the API may send numbers or `null`.
pub fn normalize_gender_value(input: &Value) -> Gender {
    if !is_truthy(input) {
        return Gender::Unspecified;
    }

    match input {
        Value::String(text) => classify(text),
        Value::Number(number) => classify(&number.to_string()),
        Value::Bool(flag) => classify(if *flag { "true" } else { "false" }),
        _ => Gender::Other,
    }
}

fn classify(raw: &str) -> Gender {
    let token = raw.to_lowercase();
    let token = token.trim();

    if MALE_TOKENS.contains(&token) {
        Gender::Male
    } else if FEMALE_TOKENS.contains(&token) {
        Gender::Female
    } else {
        Gender::Other
    }
}
