use warehouse_core::{InventoryItem, ItemId, StoreResult};

/// Keyed store abstraction over a single item kind.
///
/// Every fallible operation reports one of the three [`warehouse_core::StoreError`]
/// kinds; a failed call never leaves the store partially mutated.
pub trait ItemStore<T: InventoryItem> {
    /// Track a new item.
    ///
    /// Fails with `DuplicateKey` if an item with the same id is already tracked;
    /// the existing entry is left untouched.
    fn add(&mut self, item: T) -> StoreResult<()>;

    /// Copy of the tracked item, or `NotFound`.
    fn get_by_id(&self, id: ItemId) -> StoreResult<T>;

    /// Stop tracking an item and hand it back. The id becomes free for reuse.
    fn remove(&mut self, id: ItemId) -> StoreResult<T>;

    /// Snapshot of every tracked item, in ascending id order.
    fn get_all(&self) -> Vec<T>;

    /// Overwrite an item's quantity.
    ///
    /// The quantity is validated before the id is looked up, so a negative
    /// value reports `InvalidQuantity` even for an untracked id.
    fn update_quantity(&mut self, id: ItemId, new_quantity: i64) -> StoreResult<()>;

    fn contains(&self, id: ItemId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
