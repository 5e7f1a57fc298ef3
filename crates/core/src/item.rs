//! Item capability contract: identity + name + mutable stock level.

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// The kinds of record a warehouse tracks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Electronic,
    Grocery,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Electronic => "electronic",
            ItemKind::Grocery => "grocery",
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimal shape every stored record exposes.
///
/// Implementors are independent record types; kind-specific fields stay on the
/// concrete type and are never touched through this trait. Only the quantity
/// is mutable after construction.
pub trait InventoryItem: Clone + core::fmt::Debug {
    /// Kind shared by every record of this type.
    const KIND: ItemKind;

    /// Returns the item identifier (immutable after creation).
    fn id(&self) -> ItemId;

    fn name(&self) -> &str;

    /// Units currently in stock.
    ///
    /// Unsigned so a negative stock level cannot be represented at all.
    fn quantity(&self) -> u32;

    fn set_quantity(&mut self, quantity: u32);
}
