//! Warehouse form validation.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Maximum length of a warehouse name in characters.
pub const MAX_WAREHOUSE_NAME_LENGTH: u64 = 255;

/// Raw warehouse form submission. `is_operational` is an HTML checkbox and
/// is absent from the body when unchecked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WarehouseForm {
    pub name: String,
    pub is_operational: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ValidatedWarehouse {
    #[validate(length(
        min = 1,
        max = MAX_WAREHOUSE_NAME_LENGTH,
        message = "name is required and must fit the name length limit"
    ))]
    pub name: String,
    pub is_operational: bool,
}

/// Checkbox values browsers and hand-written clients send for "checked".
const TRUTHY: &[&str] = &["on", "true", "1", "yes"];

/// Validate a raw warehouse form.
pub fn validate_warehouse_form(form: &WarehouseForm) -> Result<ValidatedWarehouse, CoreError> {
    let warehouse = ValidatedWarehouse {
        name: form.name.trim().to_string(),
        is_operational: form
            .is_operational
            .as_deref()
            .map(is_checked)
            .unwrap_or(false),
    };

    warehouse.validate().map_err(|errors| {
        let messages: Vec<String> = errors
            .field_errors()
            .into_values()
            .flat_map(|list| list.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        CoreError::Validation(messages.join("; "))
    })?;

    Ok(warehouse)
}

fn is_checked(value: &str) -> bool {
    let value = value.trim();
    TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(value))
}
