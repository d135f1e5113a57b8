//! One-shot status notices shown on the next rendered page.
//!
//! Handlers attach a [`Notice`] to the redirect they return; the API layer
//! carries it to the following request in a cookie.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_ITEM_ADDED: &str = "Item added successfully";
pub const MSG_ITEM_EXISTS: &str = "Similar item exists with item code and warehouse";
pub const MSG_ITEM_NOT_FOUND: &str = "Unable to fetch item details";
pub const MSG_ITEM_DELETED: &str = "Item deleted";
pub const MSG_WAREHOUSE_NOT_FOUND: &str = "Unable to get warehouse";
pub const MSG_INVALID_FORM: &str = "Unable to submit form";
pub const MSG_WAREHOUSE_ADDED: &str = "Warehouse added successfully";

/// Success message for an edited item, identifying it by code.
pub fn item_edited_message(code: &str) -> String {
    format!("Item code - {code} edited")
}
