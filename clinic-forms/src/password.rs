//! Password checklist shown on the registration and change-password forms.

use clinic_core::{PasswordEvaluation, PasswordPolicy, Requirement};

/// Characters that satisfy the special-character requirement.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

pub const UPPERCASE_LABEL: &str = "Mengandung huruf besar (A-Z)";
pub const LOWERCASE_LABEL: &str = "Mengandung huruf kecil (a-z)";
pub const DIGIT_LABEL: &str = "Mengandung angka (0-9)";
pub const SPECIAL_LABEL: &str = "Mengandung karakter khusus (!@#$%^&*)";

fn length_label(policy: &PasswordPolicy) -> String {
    format!("Minimal {} karakter", policy.min_length)
}

/// Check `password` against the default policy.
pub fn evaluate_password(password: &str) -> PasswordEvaluation {
    evaluate_password_with(password, &PasswordPolicy::default())
}

/// Check `password` against the five requirements, in display order:
/// length, uppercase, lowercase, digit, special character.
pub fn evaluate_password_with(password: &str, policy: &PasswordPolicy) -> PasswordEvaluation {
    let checks = [
        // Counted in chars, not UTF-16 units: an emoji is one character here
        // while the browser's `String.length` counts it as two.
        (
            length_label(policy),
            password.chars().count() >= policy.min_length,
        ),
        (
            UPPERCASE_LABEL.to_string(),
            password.chars().any(|c| c.is_ascii_uppercase()),
        ),
        (
            LOWERCASE_LABEL.to_string(),
            password.chars().any(|c| c.is_ascii_lowercase()),
        ),
        (
            DIGIT_LABEL.to_string(),
            password.chars().any(|c| c.is_ascii_digit()),
        ),
        (
            SPECIAL_LABEL.to_string(),
            password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        ),
    ];

    let requirements = checks
        .into_iter()
        .map(|(label, met)| Requirement { label, met })
        .collect();

    PasswordEvaluation::from_requirements(requirements)
}

/// True only when all five requirements hold.
pub fn validate_password_strength(password: &str) -> bool {
    validate_password_strength_with(password, &PasswordPolicy::default())
}

pub fn validate_password_strength_with(password: &str, policy: &PasswordPolicy) -> bool {
    evaluate_password_with(password, policy).all_met()
}

/// Labels of the failing requirements, in checklist order.
pub fn unmet_requirements(password: &str) -> Vec<String> {
    unmet_requirements_with(password, &PasswordPolicy::default())
}

pub fn unmet_requirements_with(password: &str, policy: &PasswordPolicy) -> Vec<String> {
    evaluate_password_with(password, policy)
        .unmet_labels()
        .map(str::to_string)
        .collect()
}
