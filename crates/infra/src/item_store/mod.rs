//! Keyed item storage: one store instance per item kind.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryItemStore;
pub use r#trait::ItemStore;
