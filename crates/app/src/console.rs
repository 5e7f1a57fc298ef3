//! Console rendering plus the kind-agnostic stock operations.
//!
//! Every operation here is written once against [`InventoryItem`] and works
//! with any [`ItemStore`]. Store failures inside `increase_stock` and
//! `remove_by_id` are reported to the sink and swallowed, so one bad call never
//! aborts a batch. Sink I/O errors are still returned.

use std::io::{self, Write};

use warehouse_core::{InventoryItem, ItemId, StoreError, StoreResult};
use warehouse_infra::ItemStore;

/// Line-oriented report writer over any `Write` sink.
#[derive(Debug)]
pub struct Console<W> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "=== {title} ===")
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Report a store failure raised by a direct store call.
    pub fn report_error(&mut self, err: &StoreError) -> io::Result<()> {
        writeln!(self.out, "Error: {err}")
    }

    /// Render one line per item followed by a blank separator line.
    pub fn print_all<T, S>(&mut self, store: &S) -> io::Result<()>
    where
        T: InventoryItem,
        S: ItemStore<T>,
    {
        for item in store.get_all() {
            writeln!(
                self.out,
                "ID: {}, Name: {}, Quantity: {}",
                item.id(),
                item.name(),
                item.quantity()
            )?;
        }
        writeln!(self.out)
    }

    /// Add `delta` units to an item's stock (negative deltas draw stock down).
    pub fn increase_stock<T, S>(&mut self, store: &mut S, id: ItemId, delta: i64) -> io::Result<()>
    where
        T: InventoryItem,
        S: ItemStore<T>,
    {
        match Self::apply_delta::<T, S>(store, id, delta) {
            Ok(quantity) => writeln!(
                self.out,
                "Stock updated for item ID {id}. New quantity: {quantity}"
            ),
            Err(err) => {
                tracing::warn!(kind = %T::KIND, %id, delta, error = %err, "stock increase failed");
                writeln!(self.out, "Error updating stock [{}]: {err}", err.kind())
            }
        }
    }

    pub fn remove_by_id<T, S>(&mut self, store: &mut S, id: ItemId) -> io::Result<()>
    where
        T: InventoryItem,
        S: ItemStore<T>,
    {
        match store.remove(id) {
            Ok(_) => writeln!(self.out, "Item ID {id} removed successfully."),
            Err(err) => {
                tracing::warn!(kind = %T::KIND, %id, error = %err, "item removal failed");
                writeln!(self.out, "Error removing item [{}]: {err}", err.kind())
            }
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn apply_delta<T, S>(store: &mut S, id: ItemId, delta: i64) -> StoreResult<i64>
    where
        T: InventoryItem,
        S: ItemStore<T>,
    {
        let current = store.get_by_id(id)?;
        // Saturate so an absurd delta surfaces as InvalidQuantity instead of overflowing.
        let target = i64::from(current.quantity()).saturating_add(delta);
        store.update_quantity(id, target)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_infra::InMemoryItemStore;
    use warehouse_inventory::ElectronicItem;

    fn store() -> InMemoryItemStore<ElectronicItem> {
        let mut store = InMemoryItemStore::new();
        store
            .add(ElectronicItem::new(ItemId::new(1), "Laptop", 10, "Dell", 24))
            .unwrap();
        store
            .add(ElectronicItem::new(ItemId::new(2), "Smartphone", 20, "Samsung", 12))
            .unwrap();
        store
    }

    fn rendered(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn print_all_renders_every_field_then_separator() {
        let mut console = Console::new(Vec::new());
        console.print_all(&store()).unwrap();

        assert_eq!(
            rendered(console),
            "ID: 1, Name: Laptop, Quantity: 10\nID: 2, Name: Smartphone, Quantity: 20\n\n"
        );
    }

    #[test]
    fn print_all_of_empty_store_is_just_the_separator() {
        let mut console = Console::new(Vec::new());
        let empty: InMemoryItemStore<ElectronicItem> = InMemoryItemStore::new();
        console.print_all(&empty).unwrap();

        assert_eq!(rendered(console), "\n");
    }

    #[test]
    fn increase_stock_reports_new_quantity() {
        let mut store = store();
        let mut console = Console::new(Vec::new());

        console.increase_stock(&mut store, ItemId::new(1), 5).unwrap();

        assert_eq!(store.get_by_id(ItemId::new(1)).unwrap().quantity(), 15);
        assert_eq!(
            rendered(console),
            "Stock updated for item ID 1. New quantity: 15\n"
        );
    }

    #[test]
    fn increase_stock_reports_missing_item_without_failing() {
        let mut store = store();
        let mut console = Console::new(Vec::new());

        console.increase_stock(&mut store, ItemId::new(99), 5).unwrap();

        assert_eq!(
            rendered(console),
            "Error updating stock [not_found]: item with id 99 not found\n"
        );
    }

    #[test]
    fn increase_stock_below_zero_is_reported_and_leaves_stock() {
        let mut store = store();
        let mut console = Console::new(Vec::new());

        console.increase_stock(&mut store, ItemId::new(1), -11).unwrap();

        assert_eq!(store.get_by_id(ItemId::new(1)).unwrap().quantity(), 10);
        assert!(
            rendered(console)
                .starts_with("Error updating stock [invalid_quantity]: invalid quantity -1")
        );
    }

    #[test]
    fn remove_by_id_reports_both_outcomes() {
        let mut store = store();
        let mut console = Console::new(Vec::new());

        console.remove_by_id(&mut store, ItemId::new(2)).unwrap();
        console.remove_by_id(&mut store, ItemId::new(2)).unwrap();

        assert!(!store.contains(ItemId::new(2)));
        assert_eq!(
            rendered(console),
            "Item ID 2 removed successfully.\n\
             Error removing item [not_found]: item with id 2 not found\n"
        );
    }

    #[test]
    fn report_error_prefixes_message() {
        let mut console = Console::new(Vec::new());
        console
            .report_error(&StoreError::duplicate_key(ItemId::new(1)))
            .unwrap();

        assert_eq!(rendered(console), "Error: item with id 1 already exists\n");
    }
}
