//! `warehouse-core` — inventory foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the item capability contract, and the store error model.

pub mod error;
pub mod id;
pub mod item;

pub use error::{StoreError, StoreErrorKind, StoreResult};
pub use id::ItemId;
pub use item::{InventoryItem, ItemKind};
