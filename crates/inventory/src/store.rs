use std::collections::BTreeMap;

use chrono::Utc;

use stockroom_core::{DomainError, DomainResult};

use crate::item::{ItemName, LogEntry};

/// Threshold used by callers that have no operator-defined low-stock level.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Outcome of [`InventoryStore::remove`].
///
/// `NotFound` and `InvalidQuantity` are recovered inside `remove` (logged and
/// left as no-ops); callers may still branch on them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The item is still stocked with this many units.
    Remaining(i64),
    /// The quantity reached zero or below and the item was dropped.
    Depleted,
    /// The item was not in stock; nothing changed.
    NotFound,
    /// The quantity could not be subtracted; nothing changed.
    InvalidQuantity,
}

/// In-memory item → quantity store.
///
/// Iterates in ascending item-name order. Items removed down to zero or below
/// are deleted, so `remove` never leaves a non-positive entry behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    pub(crate) items: BTreeMap<ItemName, i64>,
}

impl InventoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of `item`, creating the entry if needed.
    ///
    /// When `log` is given, one [`LogEntry`] is appended to it. Returns the
    /// new quantity. Empty names and sums outside `i64` are rejected without
    /// touching the store.
    pub fn add(
        &mut self,
        item: &str,
        qty: i64,
        log: Option<&mut Vec<LogEntry>>,
    ) -> DomainResult<i64> {
        let name = ItemName::new(item)?;
        let current = self.get_quantity(item);
        let updated = current.checked_add(qty).ok_or_else(|| {
            DomainError::overflow(format!("adding {qty} to '{item}'"))
        })?;

        let entry = LogEntry::added(name.clone(), qty, Utc::now());
        tracing::info!(item = %name, qty, quantity = updated, "stock added");
        if let Some(log) = log {
            log.push(entry);
        }

        self.items.insert(name, updated);
        Ok(updated)
    }

    /// Subtract `qty` units of `item`.
    ///
    /// Missing items and unrepresentable results are reported through the
    /// log and returned as [`Removal::NotFound`] / [`Removal::InvalidQuantity`]
    /// with the store left untouched.
    pub fn remove(&mut self, item: &str, qty: i64) -> Removal {
        let Some(current) = self.items.get_mut(item) else {
            tracing::warn!(item, "Item '{item}' not found in stock.");
            return Removal::NotFound;
        };
        let Some(remaining) = current.checked_sub(qty) else {
            tracing::warn!(item, qty, "Invalid quantity for removing '{item}'.");
            return Removal::InvalidQuantity;
        };

        if remaining <= 0 {
            self.items.remove(item);
            tracing::info!(item, qty, "stock depleted; item removed");
            return Removal::Depleted;
        }

        *current = remaining;
        tracing::info!(item, qty, quantity = remaining, "stock removed");
        Removal::Remaining(remaining)
    }

    /// Stored quantity for `item`, or 0 when it is not stocked.
    pub fn get_quantity(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Items whose quantity is strictly below `threshold`.
    pub fn low_stock(&self, threshold: i64) -> Vec<&str> {
        let low: Vec<&str> = self
            .items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.as_str())
            .collect();
        tracing::debug!(threshold, count = low.len(), "low stock query");
        low
    }

    /// Print the items report to stdout.
    pub fn report(&self) {
        print!("{self}");
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }
}

/// Renders the items report printed by [`InventoryStore::report`].
impl core::fmt::Display for InventoryStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items Report")?;
        for (name, qty) in self.iter() {
            writeln!(f, "{name} -> {qty}")?;
        }
        Ok(())
    }
}
