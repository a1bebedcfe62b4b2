//! Persistent record stores.
//!
//! An [`EntityStore`] keeps its records twice: a [`Ring`] preserves the
//! order lines had in the backing file (and the order they are written
//! back in), and a [`SearchIndex`] maps business keys to ring handles for
//! keyed lookup and range scans. Every mutation writes the whole store
//! back through, so the file always matches memory.
//!
//! A store is a state machine: it opens unloaded, [`load`](EntityStore::load)
//! reads the file exactly once, and [`clear`](EntityStore::clear) returns
//! it to the unloaded state so the file can be read again.

mod errors;
mod id;

pub use errors::StoreError;
pub use id::IdSequence;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::Result;
use crate::collections::{NodeId, Ring, SearchIndex};
use crate::flatfile;
use crate::record::Record;

/// What a load pass made of the backing file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Lines that became records.
    pub loaded: usize,
    /// Non-blank lines that were dropped as unparsable.
    pub skipped: usize,
}

/// A collection of records of one type, backed by one flat file.
///
/// Records live in a [`Ring`] in file order; a [`SearchIndex`] over their
/// business keys points back into the ring. The two are kept in lockstep:
/// every key in the index resolves to a live ring node, and every ring
/// node's key is in the index.
pub struct EntityStore<R: Record> {
    name: &'static str,
    path: PathBuf,
    records: Ring<R>,
    index: SearchIndex<String, NodeId>,
    sequences: Vec<IdSequence>,
    loaded: bool,
}

impl<R: Record> EntityStore<R> {
    /// Open a store over `path` with the id sequences its records use.
    ///
    /// Nothing is read from disk until [`load`](Self::load).
    pub fn open(name: &'static str, path: impl Into<PathBuf>, sequences: Vec<IdSequence>) -> Self {
        Self {
            name,
            path: path.into(),
            records: Ring::new(),
            index: SearchIndex::new(),
            sequences,
            loaded: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read the backing file into memory.
    ///
    /// Lines that fail to parse are logged and skipped rather than
    /// aborting the load, and a missing file starts the store empty. Keys
    /// are fed to the id sequences so later allocations continue past the
    /// ids already on disk. The index is rebuilt in a second pass once
    /// the ring holds every record.
    ///
    /// # Returns
    /// A [`LoadReport`] with the loaded and skipped line counts.
    ///
    /// # Errors
    /// Returns [`StoreError::AlreadyLoaded`] if records are already in
    /// memory; call [`clear`](Self::clear) first to reload.
    pub fn load(&mut self) -> Result<LoadReport> {
        if self.loaded {
            return Err(StoreError::AlreadyLoaded {
                name: self.name.to_string(),
            }
            .into());
        }

        let mut report = LoadReport::default();
        for line in flatfile::read_lines(&self.path)? {
            let fields = flatfile::split_fields(&line);
            match R::from_fields(&fields) {
                Ok(record) => {
                    for seq in &mut self.sequences {
                        seq.observe(record.key());
                    }
                    self.records.insert_back(record);
                    report.loaded += 1;
                }
                Err(err) => {
                    warn!(store = self.name, %err, line = %line, "Skipping unparsable line");
                    report.skipped += 1;
                }
            }
        }

        // Second pass: point the index at the ring nodes that now exist.
        // A key seen twice keeps its first record; the later one is
        // dropped so the index and ring stay in lockstep.
        let mut duplicates = Vec::new();
        for (id, record) in self.records.entries() {
            if self.index.contains_key(record.key()) {
                duplicates.push(id);
                continue;
            }
            self.index.insert(record.key().to_string(), id);
        }
        for id in duplicates {
            if let Some(record) = self.records.remove(id) {
                warn!(
                    store = self.name,
                    key = record.key(),
                    "Dropping record with duplicate key"
                );
                report.loaded -= 1;
                report.skipped += 1;
            }
        }

        self.loaded = true;
        debug!(
            store = self.name,
            loaded = report.loaded,
            skipped = report.skipped,
            "Store loaded"
        );
        Ok(report)
    }

    /// Write every record back to the file, in ring order.
    ///
    /// # Errors
    /// Returns [`StoreError::NotLoaded`] before the first load, or an I/O
    /// error from writing the file.
    pub fn save(&self) -> Result<()> {
        self.ensure_loaded()?;
        let lines: Vec<String> = self
            .records
            .iter()
            .map(|record| flatfile::join_fields(&record.to_fields()))
            .collect();
        flatfile::write_lines(&self.path, &lines)?;
        debug!(store = self.name, records = lines.len(), "Store saved");
        Ok(())
    }

    /// Append a record and persist the store.
    ///
    /// The record's key is also fed to the id sequences, so a
    /// hand-assigned id can never collide with a later allocation.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateKey`] if the key is already
    /// present, [`StoreError::NotLoaded`] before the first load, or an
    /// I/O error from the save.
    pub fn add(&mut self, record: R) -> Result<()> {
        self.ensure_loaded()?;
        let key = record.key().to_string();
        if self.index.contains_key(key.as_str()) {
            return Err(StoreError::DuplicateKey {
                name: self.name.to_string(),
                key,
            }
            .into());
        }
        for seq in &mut self.sequences {
            seq.observe(&key);
        }
        let id = self.records.insert_back(record);
        self.index.insert(key, id);
        self.save()
    }

    /// Look up a record by key.
    pub fn find(&self, key: &str) -> Option<&R> {
        let id = self.index.get(key)?;
        self.records.get(*id)
    }

    /// Like [`find`](Self::find), but a missing key is an error.
    pub fn get(&self, key: &str) -> std::result::Result<&R, StoreError> {
        self.find(key).ok_or_else(|| StoreError::KeyNotFound {
            name: self.name.to_string(),
            key: key.to_string(),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Mutate the record under `key` in place and persist the store.
    ///
    /// The closure must leave the record's key unchanged; the index entry
    /// is not rewritten.
    ///
    /// # Returns
    /// Whatever the closure returns.
    ///
    /// # Errors
    /// Returns [`StoreError::KeyNotFound`] if no record has the key,
    /// [`StoreError::NotLoaded`] before the first load, or an I/O error
    /// from the save.
    pub fn update<T, F>(&mut self, key: &str, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut R) -> T,
    {
        self.ensure_loaded()?;
        let id = *self.index.get(key).ok_or_else(|| StoreError::KeyNotFound {
            name: self.name.to_string(),
            key: key.to_string(),
        })?;
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::KeyNotFound {
                name: self.name.to_string(),
                key: key.to_string(),
            })?;
        let out = mutate(record);
        self.save()?;
        Ok(out)
    }

    /// Remove the record under `key` and persist the store.
    ///
    /// The record leaves the ring first and its index entry second, and
    /// the removed record is handed back to the caller.
    ///
    /// # Errors
    /// Returns [`StoreError::KeyNotFound`] if no record has the key,
    /// [`StoreError::NotLoaded`] before the first load, or an I/O error
    /// from the save.
    pub fn remove(&mut self, key: &str) -> Result<R> {
        self.ensure_loaded()?;
        let id = *self.index.get(key).ok_or_else(|| StoreError::KeyNotFound {
            name: self.name.to_string(),
            key: key.to_string(),
        })?;
        let record = self
            .records
            .remove(id)
            .ok_or_else(|| StoreError::KeyNotFound {
                name: self.name.to_string(),
                key: key.to_string(),
            })?;
        self.index.remove(key);
        self.save()?;
        Ok(record)
    }

    /// Visit records in file order.
    pub fn for_each<F: FnMut(&R)>(&self, f: F) {
        self.records.for_each(f);
    }

    /// Iterate records in file order.
    pub fn iter(&self) -> impl Iterator<Item = &R> + '_ {
        self.records.iter()
    }

    /// First record satisfying `pred`, in file order.
    pub fn find_where<P: FnMut(&R) -> bool>(&self, pred: P) -> Option<&R> {
        self.records.find_if(pred)
    }

    /// Record at `index` in file order, zero-based.
    pub fn nth(&self, index: usize) -> Option<&R> {
        self.records.by_index(index)
    }

    /// Records whose keys fall in `min..=max`, ascending by key.
    pub fn range(&self, min: &str, max: &str) -> Vec<&R> {
        let mut out = Vec::new();
        self.index.for_range(min, max, |_, id| {
            if let Some(record) = self.records.get(*id) {
                out.push(record);
            }
        });
        out
    }

    /// Allocate the next id for `prefix`, e.g. `T014`.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownPrefix`] if the store was opened
    /// without a sequence for `prefix`.
    pub fn next_id(&mut self, prefix: &str) -> std::result::Result<String, StoreError> {
        let seq = self
            .sequences
            .iter_mut()
            .find(|seq| seq.prefix() == prefix)
            .ok_or_else(|| StoreError::UnknownPrefix {
                name: self.name.to_string(),
                prefix: prefix.to_string(),
            })?;
        Ok(seq.allocate())
    }

    /// Drop every in-memory record, reset the id sequences, and return
    /// the store to its unloaded state. The backing file is untouched.
    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
        for seq in &mut self.sequences {
            seq.reset();
        }
        self.loaded = false;
    }

    fn ensure_loaded(&self) -> std::result::Result<(), StoreError> {
        if self.loaded {
            Ok(())
        } else {
            Err(StoreError::NotLoaded {
                name: self.name.to_string(),
            })
        }
    }
}
