//! Domain logic for the inventory dashboard.
//!
//! Everything in this crate is pure: form validation, pagination math,
//! notices and redirect sanitizing. Persistence lives in `inventory-db`
//! and HTTP concerns in `inventory-api`.

pub mod error;
pub mod item_form;
pub mod lookup;
pub mod notice;
pub mod pagination;
pub mod redirect;
pub mod types;
pub mod warehouse_form;
