//! Shared value types for the clinic registration forms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Password rules that can be tuned per deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPolicy {
    /// Minimum number of characters a password must contain.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

/// Canonical gender value stored on patient and therapist records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    /// No value was entered.
    #[default]
    #[serde(rename = "")]
    Unspecified,
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "other")]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Unspecified => "",
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete strength bucket shown under the password field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    #[serde(rename = "very weak")]
    VeryWeak,
    #[serde(rename = "weak")]
    Weak,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "strong")]
    Strong,
}

impl PasswordStrength {
    /// Bucket for the share of requirements met, in whole percent.
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 80 => PasswordStrength::Strong,
            p if p >= 60 => PasswordStrength::Moderate,
            p if p >= 40 => PasswordStrength::Weak,
            _ => PasswordStrength::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "very weak",
            PasswordStrength::Weak => "weak",
            PasswordStrength::Moderate => "moderate",
            PasswordStrength::Strong => "strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the password checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Requirement {
    pub label: String,
    pub met: bool,
}

/// Result of checking a password against every requirement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordEvaluation {
    pub requirements: Vec<Requirement>,
    pub met_count: usize,
    pub percentage: u32,
    #[serde(rename = "strengthLabel")]
    pub strength: PasswordStrength,
}

impl PasswordEvaluation {
    /// Builds the summary fields from the checklist.
    pub fn from_requirements(requirements: Vec<Requirement>) -> Self {
        let met_count = requirements.iter().filter(|req| req.met).count();
        let percentage = if requirements.is_empty() {
            0
        } else {
            (met_count * 100 / requirements.len()) as u32
        };

        Self {
            requirements,
            met_count,
            percentage,
            strength: PasswordStrength::from_percentage(percentage),
        }
    }

    /// True when every requirement holds.
    pub fn all_met(&self) -> bool {
        self.met_count == self.requirements.len()
    }

    /// Labels of the requirements that still fail, in checklist order.
    pub fn unmet_labels(&self) -> impl Iterator<Item = &str> {
        self.requirements
            .iter()
            .filter(|req| !req.met)
            .map(|req| req.label.as_str())
    }
}

/// Entry of the disease lookup table served by the clinic API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Disease {
    #[serde(alias = "ID")]
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Disease {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }
}

/// User identifier exactly as the login endpoint returned it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UserId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(number) => write!(f, "{number}"),
            UserId::Text(text) => f.write_str(text),
        }
    }
}

/// Errors raised while reading API payloads.
#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("Response is missing the expected data")]
    MissingData,
    #[error("Could not read response: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_thresholds_follow_percentage() {
        assert_eq!(PasswordStrength::from_percentage(0), PasswordStrength::VeryWeak);
        assert_eq!(PasswordStrength::from_percentage(20), PasswordStrength::VeryWeak);
        assert_eq!(PasswordStrength::from_percentage(40), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_percentage(60), PasswordStrength::Moderate);
        assert_eq!(PasswordStrength::from_percentage(79), PasswordStrength::Moderate);
        assert_eq!(PasswordStrength::from_percentage(80), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_percentage(100), PasswordStrength::Strong);
    }

    #[test]
    fn gender_serializes_to_canonical_strings() {
        let values = [Gender::Unspecified, Gender::Male, Gender::Female, Gender::Other];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["","male","female","other"]"#);
    }

    #[test]
    fn evaluation_counts_met_requirements() {
        let evaluation = PasswordEvaluation::from_requirements(vec![
            Requirement {
                label: "a".into(),
                met: true,
            },
            Requirement {
                label: "b".into(),
                met: false,
            },
        ]);
        assert_eq!(evaluation.met_count, 1);
        assert_eq!(evaluation.percentage, 50);
        assert_eq!(evaluation.strength, PasswordStrength::Weak);
        assert!(!evaluation.all_met());
        assert_eq!(evaluation.unmet_labels().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn user_id_keeps_raw_shape() {
        let number: UserId = serde_json::from_str("202").unwrap();
        let text: UserId = serde_json::from_str(r#""u-7""#).unwrap();
        assert_eq!(number.to_string(), "202");
        assert_eq!(text, UserId::Text("u-7".into()));
    }

    #[test]
    fn disease_accepts_uppercase_id() {
        let disease: Disease =
            serde_json::from_str(r#"{"ID": 3, "name": "Asthma", "description": "Paru"}"#).unwrap();
        assert_eq!(disease.id, 3);
        assert_eq!(disease.description.as_deref(), Some("Paru"));
    }
}
