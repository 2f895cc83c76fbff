//! Disease lookup table as served by the `/disease` endpoint.

use clinic_core::{ClinicError, Disease};
use serde_json::Value;

/// Parse the disease table from a JSON string.
pub fn parse_disease_table_str(json: &str) -> Result<Vec<Disease>, ClinicError> {
    let value: Value =
        serde_json::from_str(json).map_err(|err| ClinicError::Parse(err.to_string()))?;
    parse_disease_table(&value)
}

/// Parse the disease table from `{data: {disease: [...]}}`, `{data: [...]}` or
/// a bare array. Entries without a usable id or name are skipped.
pub fn parse_disease_table(response: &Value) -> Result<Vec<Disease>, ClinicError> {
    let entries = disease_entries(response).ok_or(ClinicError::MissingData)?;

    let diseases: Vec<Disease> = entries.iter().filter_map(parse_disease).collect();
    tracing::debug!(
        received = entries.len(),
        kept = diseases.len(),
        "parsed disease table"
    );

    Ok(diseases)
}

/// Like [`parse_disease_table`], but a response without a table counts as an
/// empty table, so resolution still yields the pass-through or `"-"`.
pub fn disease_table_or_empty(response: &Value) -> Vec<Disease> {
    parse_disease_table(response).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "no disease table in response, resolving without one");
        Vec::new()
    })
}

fn disease_entries(response: &Value) -> Option<&Vec<Value>> {
    if let Some(entries) = response.as_array() {
        return Some(entries);
    }

    let data = response.get("data")?;
    data.get("disease")
        .and_then(Value::as_array)
        .or_else(|| data.as_array())
}

fn parse_disease(entry: &Value) -> Option<Disease> {
    let id = entry.get("ID").or_else(|| entry.get("id")).and_then(parse_id);
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty());

    let (Some(id), Some(name)) = (id, name) else {
        tracing::warn!(entry = %entry, "skipping disease entry without id or name");
        return None;
    };

    let description = entry
        .get("description")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    Some(Disease {
        id,
        name: name.to_string(),
        description,
    })
}

fn parse_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::resolve_health_conditions;

    #[test]
    fn reads_wrapped_table() {
        let response = json!({"data": {"disease": [
            {"ID": 1, "name": "Diabetes", "description": "Gula darah tinggi"},
            {"ID": 2, "name": "Hypertension", "description": ""}
        ]}});
        let diseases = parse_disease_table(&response).unwrap();
        assert_eq!(diseases.len(), 2);
        assert_eq!(diseases[0].description.as_deref(), Some("Gula darah tinggi"));
        assert_eq!(diseases[1], Disease::new(2, "Hypertension"));
    }

    #[test]
    fn reads_bare_array_and_lowercase_ids() {
        let response = json!([{"id": "7", "name": "Asma"}]);
        assert_eq!(
            parse_disease_table(&response).unwrap(),
            vec![Disease::new(7, "Asma")]
        );

        let response = json!({"data": [{"id": 8, "name": "Stroke"}]});
        assert_eq!(
            parse_disease_table(&response).unwrap(),
            vec![Disease::new(8, "Stroke")]
        );
    }

    #[test]
    fn skips_incomplete_entries() {
        let response = json!([
            {"ID": 1},
            {"name": "Tanpa id"},
            {"ID": "x", "name": "Bad id"},
            {"ID": 4, "name": "  "},
            {"ID": 5, "name": "Vertigo"}
        ]);
        assert_eq!(
            parse_disease_table(&response).unwrap(),
            vec![Disease::new(5, "Vertigo")]
        );
    }

    #[test]
    fn unknown_shape_is_missing_data() {
        assert!(matches!(
            parse_disease_table(&json!({"data": {"patients": []}})),
            Err(ClinicError::MissingData)
        ));
        assert!(matches!(
            parse_disease_table(&Value::Null),
            Err(ClinicError::MissingData)
        ));
    }

    #[test]
    fn missing_table_resolves_as_empty() {
        for response in [
            Value::Null,
            json!({}),
            json!({"data": null}),
            json!({"data": {"patients": []}}),
        ] {
            let table = disease_table_or_empty(&response);
            assert!(table.is_empty(), "response {response}");
            assert_eq!(resolve_health_conditions("asma, 3", &table), "3");
            assert_eq!(resolve_health_conditions("asma", &table), "asma");
            assert_eq!(resolve_health_conditions("", &table), "-");
        }
    }

    #[test]
    fn lenient_table_keeps_valid_rows() {
        let response = json!([{"ID": 1, "name": "Diabetes"}]);
        assert_eq!(
            disease_table_or_empty(&response),
            vec![Disease::new(1, "Diabetes")]
        );
    }

    #[test]
    fn invalid_json_is_parse_error() {
        assert!(matches!(
            parse_disease_table_str("{not json"),
            Err(ClinicError::Parse(_))
        ));
    }
}
