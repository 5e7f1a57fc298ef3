use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use warehouse_core::{InventoryItem, ItemId, ItemKind};

/// Perishable stock with a fixed expiry date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: ItemId,
    name: String,
    quantity: u32,
    expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// True once `today` is past the expiry date (the expiry day itself is still sellable).
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        today > self.expiry_date
    }
}

impl InventoryItem for GroceryItem {
    const KIND: ItemKind = ItemKind::Grocery;

    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
