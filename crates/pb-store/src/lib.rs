//! pb-store: in-memory photo repository.
//!
//! [`PhotoStore`] owns every [`PhotoRecord`] for the lifetime of the process
//! together with the id allocator. Records are kept in insertion order and
//! callers only ever receive clones.
//!
//! The record vector and the allocator sit behind a single mutex, and each
//! operation takes it exactly once, so create/update/delete are atomic with
//! respect to one another.

use parking_lot::Mutex;
use pb_core::{Error, PhotoId, PhotoInput, PhotoRecord, Result};

/// Entity name used in not-found errors.
const ENTITY: &str = "Photo";

/// In-memory photo repository.
#[derive(Debug)]
pub struct PhotoStore {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    records: Vec<PhotoRecord>,
    next_id: PhotoId,
}

impl Inner {
    fn position(&self, id: PhotoId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| Error::not_found(ENTITY, id))
    }
}

impl Default for PhotoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoStore {
    /// Create an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty store with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Vec::with_capacity(capacity),
                next_id: PhotoId::FIRST,
            }),
        }
    }

    /// List records in insertion order, optionally keeping only those tagged
    /// with `tag`. An empty tag is treated as no filter.
    pub fn list(&self, tag: Option<&str>) -> Vec<PhotoRecord> {
        let inner = self.inner.lock();
        match tag.filter(|t| !t.is_empty()) {
            Some(tag) => inner
                .records
                .iter()
                .filter(|r| r.has_tag(tag))
                .cloned()
                .collect(),
            None => inner.records.clone(),
        }
    }

    /// Get a record by id.
    pub fn get(&self, id: PhotoId) -> Result<PhotoRecord> {
        let inner = self.inner.lock();
        let idx = inner.position(id)?;
        Ok(inner.records[idx].clone())
    }

    /// Store a new record, assigning the next id and the current time.
    pub fn create(&self, input: PhotoInput) -> PhotoRecord {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        // u64 exhaustion is not reachable in practice; saturate rather than wrap.
        inner.next_id = id.next().unwrap_or(id);

        let record = PhotoRecord::from_input(id, pb_core::timestamp::now(), input);
        inner.records.push(record.clone());
        tracing::debug!(photo_id = %id, "Photo created");
        record
    }

    /// Replace the caller-owned fields of an existing record.
    pub fn update(&self, id: PhotoId, input: PhotoInput) -> Result<PhotoRecord> {
        let mut inner = self.inner.lock();
        let idx = inner.position(id)?;
        let record = &mut inner.records[idx];
        record.apply(input);
        tracing::debug!(photo_id = %id, "Photo updated");
        Ok(record.clone())
    }

    /// Remove a record and return its last state.
    pub fn delete(&self, id: PhotoId) -> Result<PhotoRecord> {
        let mut inner = self.inner.lock();
        let idx = inner.position(id)?;
        let record = inner.records.remove(idx);
        tracing::debug!(photo_id = %id, "Photo deleted");
        Ok(record)
    }

    /// Number of records currently stored.
    pub fn count(&self) -> usize {
        self.inner.lock().records.len()
    }
}
