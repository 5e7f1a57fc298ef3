//! Inventory record kinds.
//!
//! Each kind is an independent record type implementing the
//! [`warehouse_core::InventoryItem`] capability; kind-specific fields are fixed
//! at construction (no IO, no storage).

pub mod electronic;
pub mod grocery;

pub use electronic::ElectronicItem;
pub use grocery::GroceryItem;
