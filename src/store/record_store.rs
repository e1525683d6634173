//! Record Store
//!
//! Owns the ordered collection and keeps the backing file in step with it.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::input::title_case;
use crate::record::StudentRecord;

use super::{load, save};

/// The in-memory collection mirrored to a backing file
///
/// ## Persistence:
/// - `open` replaces the collection wholesale from disk
/// - `add` / `remove_at` rewrite the whole file before returning
/// - If the write fails, the in-memory change is rolled back so memory
///   never runs ahead of the file
pub struct RecordStore {
    /// Backing file path
    path: PathBuf,

    /// Records in insertion order
    records: Vec<StudentRecord>,
}

impl RecordStore {
    /// Open the store at `path`, loading any existing records
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = load(&path)?;

        tracing::info!("Opened {} with {} records", path.display(), records.len());

        Ok(Self { path, records })
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the full collection to the backing file
    pub fn save(&self) -> Result<()> {
        save(&self.path, &self.records)
    }

    /// Append a record and persist
    pub fn add(&mut self, record: StudentRecord) -> Result<()> {
        self.records.push(record);

        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }

        tracing::debug!("Added record, collection now {} long", self.records.len());
        Ok(())
    }

    /// Remove the record at `index` (position in the full collection) and persist
    ///
    /// Returns `Ok(None)` if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<StudentRecord>> {
        if index >= self.records.len() {
            return Ok(None);
        }

        let removed = self.records.remove(index);

        if let Err(e) = self.save() {
            self.records.insert(index, removed);
            return Err(e);
        }

        tracing::debug!("Removed record at {}, collection now {} long", index, self.records.len());
        Ok(Some(removed))
    }

    /// Positions of every record whose name matches `name`, ignoring case
    pub fn find_by_name(&self, name: &str) -> Vec<usize> {
        let target = title_case(name);

        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| title_case(&record.name) == target)
            .map(|(index, _)| index)
            .collect()
    }
}
