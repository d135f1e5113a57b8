pub mod dashboard;
pub mod items;
pub mod warehouses;
