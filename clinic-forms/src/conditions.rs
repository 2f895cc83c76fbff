//! Resolve the "riwayat penyakit" field of the patient form to disease ids.

use clinic_core::Disease;

/// Stored when the patient explicitly has no health conditions.
pub const NONE_SENTINEL: &str = "-";

/// Turn a comma-separated list of disease names or ids into a comma-separated
/// list of ids.
///
/// Numeric tokens are kept as they are. Other tokens pick the first disease
/// whose name contains them, ignoring case. Tokens that resolve to nothing are
/// dropped, unless nothing resolved at all, in which case the cleaned input is
/// returned unchanged so free text is not lost.
pub fn resolve_health_conditions(input: &str, diseases: &[Disease]) -> String {
    if input.trim().is_empty() || input == NONE_SENTINEL {
        return NONE_SENTINEL.to_string();
    }

    let tokens: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    let matched: Vec<String> = tokens
        .iter()
        .filter_map(|token| resolve_token(token, diseases))
        .collect();

    if matched.is_empty() {
        tracing::debug!(
            tokens = tokens.len(),
            "no health condition matched, keeping input as entered"
        );
        return tokens.join(",");
    }

    matched.join(",")
}

fn resolve_token(token: &str, diseases: &[Disease]) -> Option<String> {
    if is_numeric_id(token) {
        return Some(token.to_string());
    }

    let needle = token.to_lowercase();
    diseases
        .iter()
        .find(|disease| disease.name.to_lowercase().contains(&needle))
        .map(|disease| disease.id.to_string())
}

fn is_numeric_id(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
