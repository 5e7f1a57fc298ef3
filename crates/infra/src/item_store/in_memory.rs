use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use warehouse_core::{InventoryItem, ItemId, StoreError, StoreResult};

use super::r#trait::ItemStore;

/// In-memory keyed store.
///
/// Single-owner: mutation goes through `&mut self`, so no locking is needed.
/// Backed by an ordered map, which makes enumeration follow ascending ids.
#[derive(Debug, Clone)]
pub struct InMemoryItemStore<T> {
    items: BTreeMap<ItemId, T>,
}

impl<T> InMemoryItemStore<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }
}

impl<T> Default for InMemoryItemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: InventoryItem> InMemoryItemStore<T> {
    fn checked_quantity(new_quantity: i64) -> StoreResult<u32> {
        u32::try_from(new_quantity).map_err(|_| StoreError::invalid_quantity(new_quantity))
    }
}

impl<T: InventoryItem> ItemStore<T> for InMemoryItemStore<T> {
    fn add(&mut self, item: T) -> StoreResult<()> {
        let id = item.id();
        match self.items.entry(id) {
            Entry::Occupied(_) => {
                tracing::warn!(kind = %T::KIND, %id, "rejected duplicate item");
                Err(StoreError::duplicate_key(id))
            }
            Entry::Vacant(slot) => {
                tracing::debug!(kind = %T::KIND, %id, quantity = item.quantity(), "item added");
                slot.insert(item);
                Ok(())
            }
        }
    }

    fn get_by_id(&self, id: ItemId) -> StoreResult<T> {
        self.items
            .get(&id)
            .cloned()
            .ok_or(StoreError::not_found(id))
    }

    fn remove(&mut self, id: ItemId) -> StoreResult<T> {
        let removed = self.items.remove(&id).ok_or(StoreError::not_found(id))?;
        tracing::debug!(kind = %T::KIND, %id, "item removed");
        Ok(removed)
    }

    fn get_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    fn update_quantity(&mut self, id: ItemId, new_quantity: i64) -> StoreResult<()> {
        let quantity = Self::checked_quantity(new_quantity)?;
        let item = self
            .items
            .get_mut(&id)
            .ok_or(StoreError::not_found(id))?;

        let previous = item.quantity();
        item.set_quantity(quantity);
        tracing::debug!(kind = %T::KIND, %id, previous, quantity, "quantity updated");
        Ok(())
    }

    fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
