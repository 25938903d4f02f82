use std::path::Path;

use anyhow::Context;
use stockroom_inventory::{DEFAULT_CONFIG_PATH, InventoryConfig, InventoryStore};

/// Read `stockroom.json` when present; otherwise fall back to defaults.
fn load_config(path: &Path) -> anyhow::Result<InventoryConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(InventoryConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    InventoryConfig::from_json_str(&raw)
        .with_context(|| format!("parsing config from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = load_config(Path::new(DEFAULT_CONFIG_PATH))?;
    let mut store = InventoryStore::new();
    let mut log = Vec::new();

    store.add("apple", 10, Some(&mut log))?;
    store.add("banana", 2, Some(&mut log))?;
    store.remove("apple", 3);
    store.remove("orange", 1);

    println!("Apple stock: {}", store.get_quantity("apple"));
    println!("Low items: {:?}", store.low_stock(config.low_stock_threshold));

    for entry in &log {
        tracing::debug!(%entry, "stock log");
    }

    store
        .save(config.path())
        .with_context(|| format!("saving inventory to {}", config.path().display()))?;
    store
        .load(config.path())
        .with_context(|| format!("loading inventory from {}", config.path().display()))?;
    store.report();

    Ok(())
}
