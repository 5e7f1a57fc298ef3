//! Warehouse manager: one keyed store per item kind, wired to a console.

use std::io::{self, Write};

use chrono::NaiveDate;

use warehouse_core::{InventoryItem, ItemId, StoreResult};
use warehouse_infra::InMemoryItemStore;
use warehouse_inventory::{ElectronicItem, GroceryItem};

use crate::console::Console;
use crate::seed::{self, SeedError};

/// The per-kind stores a warehouse holds.
#[derive(Debug, Default)]
pub struct Stores {
    electronics: InMemoryItemStore<ElectronicItem>,
    groceries: InMemoryItemStore<GroceryItem>,
}

/// Selects the store for item kind `T` out of [`Stores`].
pub trait HoldsStore<T: InventoryItem> {
    fn store(&self) -> &InMemoryItemStore<T>;
    fn store_mut(&mut self) -> &mut InMemoryItemStore<T>;
}

impl HoldsStore<ElectronicItem> for Stores {
    fn store(&self) -> &InMemoryItemStore<ElectronicItem> {
        &self.electronics
    }

    fn store_mut(&mut self) -> &mut InMemoryItemStore<ElectronicItem> {
        &mut self.electronics
    }
}

impl HoldsStore<GroceryItem> for Stores {
    fn store(&self) -> &InMemoryItemStore<GroceryItem> {
        &self.groceries
    }

    fn store_mut(&mut self) -> &mut InMemoryItemStore<GroceryItem> {
        &mut self.groceries
    }
}

/// Orchestrates the per-kind stores.
///
/// `print_all`, `increase_stock` and `remove_by_id` are generic over the item
/// kind and pick the matching store, e.g.
/// `manager.increase_stock::<ElectronicItem>(ItemId::new(1), 5)`.
#[derive(Debug)]
pub struct WarehouseManager<W> {
    stores: Stores,
    console: Console<W>,
}

impl<W: Write> WarehouseManager<W> {
    pub fn new(out: W) -> Self {
        Self {
            stores: Stores::default(),
            console: Console::new(out),
        }
    }

    /// Load the fixed sample data. Errors propagate: a duplicate here is a
    /// setup defect, not something to recover from.
    pub fn seed(&mut self, today: NaiveDate) -> Result<(), SeedError> {
        seed::seed_sample_data(&mut self.stores, today)
    }

    pub fn store<T>(&self) -> &InMemoryItemStore<T>
    where
        T: InventoryItem,
        Stores: HoldsStore<T>,
    {
        HoldsStore::<T>::store(&self.stores)
    }

    pub fn store_mut<T>(&mut self) -> &mut InMemoryItemStore<T>
    where
        T: InventoryItem,
        Stores: HoldsStore<T>,
    {
        HoldsStore::<T>::store_mut(&mut self.stores)
    }

    pub fn console_mut(&mut self) -> &mut Console<W> {
        &mut self.console
    }

    pub fn print_all<T>(&mut self) -> io::Result<()>
    where
        T: InventoryItem,
        Stores: HoldsStore<T>,
    {
        let store = HoldsStore::<T>::store(&self.stores);
        self.console.print_all::<T, _>(store)
    }

    pub fn increase_stock<T>(&mut self, id: ItemId, delta: i64) -> io::Result<()>
    where
        T: InventoryItem,
        Stores: HoldsStore<T>,
    {
        let store = HoldsStore::<T>::store_mut(&mut self.stores);
        self.console.increase_stock::<T, _>(store, id, delta)
    }

    pub fn remove_by_id<T>(&mut self, id: ItemId) -> io::Result<()>
    where
        T: InventoryItem,
        Stores: HoldsStore<T>,
    {
        let store = HoldsStore::<T>::store_mut(&mut self.stores);
        self.console.remove_by_id::<T, _>(store, id)
    }

    /// Report the outcome of a direct store call; success writes nothing.
    pub fn report<T>(&mut self, result: StoreResult<T>) -> io::Result<()> {
        match result {
            Ok(_) => Ok(()),
            Err(err) => self.console.report_error(&err),
        }
    }

    pub fn output(&self) -> &W {
        self.console.get_ref()
    }

    pub fn into_output(self) -> W {
        self.console.into_inner()
    }
}
