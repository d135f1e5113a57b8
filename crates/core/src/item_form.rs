//! Item form validation.
//!
//! Maps the raw key-value pairs of an add/edit item submission onto typed,
//! validated values. Existence of the referenced warehouse is not checked
//! here; handlers resolve it against the datastore afterwards.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of an item code in characters.
pub const MAX_CODE_LENGTH: u64 = 64;

/// Maximum length of an item name in characters.
pub const MAX_NAME_LENGTH: u64 = 255;

/// Raw item form submission. Every field arrives as a string; missing
/// fields deserialize to empty strings so they fail validation instead of
/// being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub code: String,
    pub name: String,
    pub quantity: String,
    pub warehouse_id: String,
}

/// Field set produced by a successful [`validate_item_form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    pub code: String,
    pub name: String,
    pub quantity: i32,
    pub warehouse_id: Option<DbId>,
}

#[derive(Debug, Validate)]
struct ItemText {
    #[validate(length(
        min = 1,
        max = MAX_CODE_LENGTH,
        message = "code is required and must fit the code length limit"
    ))]
    code: String,
    #[validate(length(
        min = 1,
        max = MAX_NAME_LENGTH,
        message = "name is required and must fit the name length limit"
    ))]
    name: String,
}

/// Validate a raw item form.
///
/// Text fields are trimmed before checking. All failing fields are reported
/// together in a single [`CoreError::Validation`].
pub fn validate_item_form(form: &ItemForm) -> Result<ValidatedItem, CoreError> {
    let text = ItemText {
        code: form.code.trim().to_string(),
        name: form.name.trim().to_string(),
    };

    let mut errors: Vec<String> = Vec::new();

    if let Err(field_errors) = text.validate() {
        let mut fields: Vec<_> = field_errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        for (_, list) in fields {
            errors.extend(
                list.iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string())),
            );
        }
    }

    let quantity = parse_quantity(&form.quantity).map_err(|e| errors.push(e)).ok();
    let warehouse_id = parse_warehouse_id(&form.warehouse_id)
        .map_err(|e| errors.push(e))
        .ok();

    match (quantity, warehouse_id) {
        (Some(quantity), Some(warehouse_id)) if errors.is_empty() => Ok(ValidatedItem {
            code: text.code,
            name: text.name,
            quantity,
            warehouse_id,
        }),
        _ => Err(CoreError::Validation(errors.join("; "))),
    }
}

/// Parse a quantity: a non-negative whole number that fits an `INTEGER`.
pub fn parse_quantity(raw: &str) -> Result<i32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("quantity is required".to_string());
    }
    let value: i64 = raw
        .parse()
        .map_err(|_| format!("quantity must be a whole number, got '{raw}'"))?;
    if value < 0 {
        return Err("quantity must not be negative".to_string());
    }
    i32::try_from(value).map_err(|_| format!("quantity must be at most {}", i32::MAX))
}

/// Parse the optional warehouse reference. Blank means "no warehouse".
pub fn parse_warehouse_id(raw: &str) -> Result<Option<DbId>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    DbId::parse_str(raw)
        .map(Some)
        .map_err(|_| format!("warehouse_id '{raw}' is not a valid identifier"))
}
