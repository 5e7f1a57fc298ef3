//! Demonstration run: print the seeded stock, provoke each store failure kind
//! through direct store calls, then exercise the recovering manager operations.

use std::io::{self, Write};

use warehouse_core::ItemId;
use warehouse_infra::ItemStore;
use warehouse_inventory::{ElectronicItem, GroceryItem};

use crate::manager::WarehouseManager;

pub fn run<W: Write>(manager: &mut WarehouseManager<W>) -> io::Result<()> {
    print_groups(manager)?;

    manager
        .console_mut()
        .line("Attempting to add duplicate electronic item...")?;
    let result = manager
        .store_mut::<ElectronicItem>()
        .add(ElectronicItem::new(ItemId::new(1), "Tablet", 5, "Apple", 12));
    manager.report(result)?;

    manager
        .console_mut()
        .line("Attempting to remove non-existent grocery item...")?;
    let result = manager.store_mut::<GroceryItem>().remove(ItemId::new(99));
    manager.report(result)?;

    manager
        .console_mut()
        .line("Attempting to update with invalid quantity...")?;
    let result = manager
        .store_mut::<ElectronicItem>()
        .update_quantity(ItemId::new(1), -5);
    manager.report(result)?;

    manager.console_mut().line("")?;
    manager.console_mut().heading("Stock Adjustments")?;
    manager.increase_stock::<ElectronicItem>(ItemId::new(1), 5)?;
    manager.increase_stock::<GroceryItem>(ItemId::new(99), 1)?;
    manager.remove_by_id::<GroceryItem>(ItemId::new(2))?;
    manager.console_mut().line("")?;

    print_groups(manager)
}

fn print_groups<W: Write>(manager: &mut WarehouseManager<W>) -> io::Result<()> {
    manager.console_mut().heading("Grocery Items")?;
    manager.print_all::<GroceryItem>()?;

    manager.console_mut().heading("Electronic Items")?;
    manager.print_all::<ElectronicItem>()
}
