//! Fixed sample inventory loaded at startup.

use chrono::{Days, NaiveDate};
use thiserror::Error;

use warehouse_core::{InventoryItem, ItemId, StoreError, StoreResult};
use warehouse_infra::ItemStore;
use warehouse_inventory::{ElectronicItem, GroceryItem};

use crate::manager::{HoldsStore, Stores};

pub fn sample_electronics() -> Vec<ElectronicItem> {
    vec![
        ElectronicItem::new(ItemId::new(1), "Laptop", 10, "Dell", 24),
        ElectronicItem::new(ItemId::new(2), "Smartphone", 20, "Samsung", 12),
    ]
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("expiry date {days} days after {today} is out of range")]
    ExpiryOutOfRange { today: NaiveDate, days: u64 },
}

/// Groceries expire relative to `today`.
pub fn sample_groceries(today: NaiveDate) -> Result<Vec<GroceryItem>, SeedError> {
    Ok(vec![
        GroceryItem::new(ItemId::new(1), "Milk", 50, expiry(today, 7)?),
        GroceryItem::new(ItemId::new(2), "Bread", 30, expiry(today, 2)?),
    ])
}

/// Load the sample data. Dates are computed before any insert, so an
/// out-of-range `today` leaves both stores untouched.
pub fn seed_sample_data(stores: &mut Stores, today: NaiveDate) -> Result<(), SeedError> {
    let groceries = sample_groceries(today)?;
    let electronics = load(stores, sample_electronics())?;
    let groceries = load(stores, groceries)?;
    tracing::info!(electronics, groceries, "seeded sample data");
    Ok(())
}

fn expiry(today: NaiveDate, days: u64) -> Result<NaiveDate, SeedError> {
    today
        .checked_add_days(Days::new(days))
        .ok_or(SeedError::ExpiryOutOfRange { today, days })
}

fn load<T>(stores: &mut Stores, items: Vec<T>) -> StoreResult<usize>
where
    T: InventoryItem,
    Stores: HoldsStore<T>,
{
    let store = HoldsStore::<T>::store_mut(stores);
    let count = items.len();
    for item in items {
        store.add(item)?;
    }
    Ok(count)
}
