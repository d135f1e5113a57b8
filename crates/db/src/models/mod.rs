//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Input DTOs built from validated forms

pub mod item;
pub mod warehouse;
