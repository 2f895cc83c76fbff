//! WASM <-> JavaScript bridge for the clinic form helpers.

use clinic_core::PasswordPolicy;
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsPasswordPolicy {
    #[serde(default)]
    min_length: Option<usize>,
}

impl From<JsPasswordPolicy> for PasswordPolicy {
    fn from(cfg: JsPasswordPolicy) -> Self {
        let mut base = PasswordPolicy::default();
        if let Some(min_length) = cfg.min_length {
            base.min_length = min_length;
        }
        base
    }
}

fn read_policy(policy: Option<JsValue>) -> Result<PasswordPolicy, JsValue> {
    match policy {
        Some(js_policy) if !js_policy.is_undefined() && !js_policy.is_null() => {
            let cfg: JsPasswordPolicy = from_value(js_policy)
                .map_err(|err| JsValue::from_str(&format!("Could not read policy: {err}")))?;
            Ok(PasswordPolicy::from(cfg))
        }
        _ => Ok(PasswordPolicy::default()),
    }
}

fn read_json(value: JsValue) -> serde_json::Value {
    from_value::<serde_json::Value>(value).unwrap_or(serde_json::Value::Null)
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|err| JsValue::from_str(&format!("Could not serialize result: {err}")))
}

/// Runs once when the module is instantiated, before any export is called.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(js_name = normalizeGender)]
pub fn normalize_gender(input: JsValue) -> String {
    clinic_forms::normalize_gender_value(&read_json(input))
        .as_str()
        .to_string()
}

#[wasm_bindgen(js_name = evaluatePassword)]
pub fn evaluate_password(password: &str, policy: Option<JsValue>) -> Result<JsValue, JsValue> {
    let policy = read_policy(policy)?;
    to_js(&clinic_forms::evaluate_password_with(password, &policy))
}

#[wasm_bindgen(js_name = validatePasswordStrength)]
pub fn validate_password_strength(password: &str, policy: Option<JsValue>) -> Result<bool, JsValue> {
    let policy = read_policy(policy)?;
    Ok(clinic_forms::validate_password_strength_with(password, &policy))
}

#[wasm_bindgen(js_name = unmetRequirements)]
pub fn unmet_requirements(password: &str, policy: Option<JsValue>) -> Result<JsValue, JsValue> {
    let policy = read_policy(policy)?;
    to_js(&clinic_forms::unmet_requirements_with(password, &policy))
}

/// `diseases` is the raw `/disease` response or an already unwrapped array.
/// A response without a table resolves as if the table were empty.
#[wasm_bindgen(js_name = resolveHealthConditions)]
pub fn resolve_health_conditions(input: &str, diseases: JsValue) -> String {
    let table = clinic_forms::disease_table_or_empty(&read_json(diseases));
    clinic_forms::resolve_health_conditions(input, &table)
}

#[wasm_bindgen(js_name = extractLockedField)]
pub fn extract_locked_field(response: JsValue) -> Option<String> {
    clinic_forms::extract_locked_field(&read_json(response))
}

#[wasm_bindgen(js_name = extractUserId)]
pub fn extract_user_id(response: JsValue) -> Result<JsValue, JsValue> {
    match clinic_forms::extract_user_id(&read_json(response)) {
        Some(id) => to_js(&id),
        None => Ok(JsValue::UNDEFINED),
    }
}

#[wasm_bindgen(js_name = extractDateString)]
pub fn extract_date_string(text: &str) -> Option<String> {
    clinic_forms::extract_date_string(text).map(str::to_string)
}

#[wasm_bindgen(js_name = lockDeadline)]
pub fn lock_deadline(response: JsValue) -> Option<String> {
    clinic_forms::lock_deadline_text(&read_json(response))
}
