//! At-most-once dataset loading per source path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::loader;
use crate::status::{RandomStatus, StatusGenerator};
use crate::table::InvoiceTable;

/// Caches loaded tables keyed by source path.
///
/// The composition root owns one cache and hands out `Arc` clones of the
/// table. The lock is held across the load itself, so concurrent first
/// callers serialize: exactly one reads the file, the rest block and then
/// observe the completed table. A repeat call never re-reads the source or
/// re-rolls the random statuses. Failed loads are not cached and may be
/// retried.
#[derive(Debug, Default)]
pub struct DatasetCache {
    tables: Mutex<HashMap<PathBuf, Arc<InvoiceTable>>>,
}

impl DatasetCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for `path`, loading it on first use.
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<InvoiceTable>> {
        self.get_or_load_with(path, &mut RandomStatus)
    }

    /// As [`DatasetCache::get_or_load`], drawing statuses from `statuses`
    /// on a cache miss. The generator is not consulted on a hit.
    pub fn get_or_load_with(
        &self,
        path: impl AsRef<Path>,
        statuses: &mut dyn StatusGenerator,
    ) -> Result<Arc<InvoiceTable>> {
        let path = path.as_ref();
        let mut tables = self.tables.lock().expect("dataset cache lock poisoned");

        if let Some(table) = tables.get(path) {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(loader::load_csv_with(path, statuses)?);
        tables.insert(path.to_path_buf(), Arc::clone(&table));
        Ok(table)
    }
}
