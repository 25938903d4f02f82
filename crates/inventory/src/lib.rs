//! Inventory domain module.
//!
//! An in-memory item → quantity store with JSON file persistence. The store
//! is an explicit value owned by its caller; mutating operations append to a
//! caller-supplied log when one is given.

pub mod config;
pub mod item;
pub mod persistence;
pub mod store;

#[cfg(test)]
mod test_support;

pub use config::{DEFAULT_CONFIG_PATH, DEFAULT_INVENTORY_PATH, InventoryConfig};
pub use item::{ItemName, LogEntry};
pub use persistence::{LoadOutcome, StorageError};
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, Removal};
