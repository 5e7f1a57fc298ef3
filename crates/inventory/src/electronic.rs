use serde::{Deserialize, Serialize};

use warehouse_core::{InventoryItem, ItemId, ItemKind};

/// Electronic stock: carries the manufacturer brand and warranty length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: ItemId,
    name: String,
    quantity: u32,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: u32,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl InventoryItem for ElectronicItem {
    const KIND: ItemKind = ItemKind::Electronic;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_capability_and_kind_fields() {
        let item = ElectronicItem::new(ItemId::new(1), "Laptop", 10, "Dell", 24);

        assert_eq!(item.id(), ItemId::new(1));
        assert_eq!(item.name(), "Laptop");
        assert_eq!(item.quantity(), 10);
        assert_eq!(item.brand(), "Dell");
        assert_eq!(item.warranty_months(), 24);
        assert_eq!(ElectronicItem::KIND, ItemKind::Electronic);
    }

    #[test]
    fn set_quantity_leaves_other_fields_alone() {
        let mut item = ElectronicItem::new(ItemId::new(2), "Smartphone", 20, "Samsung", 12);
        item.set_quantity(3);

        assert_eq!(item.quantity(), 3);
        assert_eq!(item.name(), "Smartphone");
        assert_eq!(item.brand(), "Samsung");
        assert_eq!(item.warranty_months(), 12);
    }
}
