//! JSON file persistence for [`InventoryStore`].
//!
//! The file is a single object mapping item names to integer quantities,
//! written with 4-space indentation.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::item::ItemName;
use crate::store::InventoryStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access inventory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse inventory file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write inventory file {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Outcome of [`InventoryStore::load`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store was replaced with `items` entries from the file.
    Loaded { items: usize },
    /// No file at the path; the store was left as it was.
    Missing,
}

impl InventoryStore {
    /// Replace the whole store with the contents of the JSON file at `path`.
    ///
    /// A missing file is reported and leaves the store unchanged; any other
    /// read or parse failure is returned and also leaves the store unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, StorageError> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "File '{}' not found; starting with empty inventory.",
                    path.display()
                );
                return Ok(LoadOutcome::Missing);
            }
            Err(err) => return Err(StorageError::io(path, err)),
        };

        let items: BTreeMap<ItemName, i64> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| {
                if source.is_io() {
                    StorageError::Io {
                        path: path.to_path_buf(),
                        source: source.into(),
                    }
                } else {
                    StorageError::Parse {
                        path: path.to_path_buf(),
                        source,
                    }
                }
            })?;

        let count = items.len();
        self.items = items;
        tracing::info!(path = %path.display(), items = count, "inventory loaded");
        Ok(LoadOutcome::Loaded { items: count })
    }

    /// Write the whole store to `path` as indented JSON, replacing any
    /// existing content.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|err| StorageError::io(path, err))?;
        let mut writer = BufWriter::new(file);

        let mut serializer =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        self.items
            .serialize(&mut serializer)
            .map_err(|source| StorageError::Serialize {
                path: path.to_path_buf(),
                source,
            })?;

        writer.flush().map_err(|err| StorageError::io(path, err))?;
        tracing::info!(path = %path.display(), items = self.items.len(), "inventory saved");
        Ok(())
    }
}
