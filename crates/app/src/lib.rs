//! Warehouse application layer: one store per item kind, console reporting,
//! sample data and the demonstration run.

pub mod config;
pub mod console;
pub mod demo;
pub mod manager;
pub mod seed;

pub use config::{AppConfig, ConfigError};
pub use console::Console;
pub use manager::{HoldsStore, Stores, WarehouseManager};
pub use seed::SeedError;
