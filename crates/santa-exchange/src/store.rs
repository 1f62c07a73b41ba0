//! Roster persistence seam
//!
//! The organizer UI keeps named group rosters between sessions. The trait is
//! synchronous and deliberately small: load everything, save one, remove
//! one. Records serialize to JSON so any string-keyed store (browser local
//! storage, a flat file) can hold them.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named group roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Display name of the group
    pub name: String,
    /// Participant names, in entry order
    pub members: Vec<String>,
}

/// Errors from roster persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Records could not be serialized or deserialized
    #[error("roster serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A thread panicked while holding the store lock
    #[error("roster store lock poisoned")]
    Poisoned,
}

/// Persistence for an ordered collection of group rosters.
///
/// Must be `Clone` (shared between workflow steps) and `Send + Sync`.
/// Implementations typically share internal state, so clones access the
/// same underlying store. Saving a group whose name already exists replaces
/// that record in place; order of the remaining records is preserved.
pub trait RosterStore: Clone + Send + Sync + 'static {
    /// All stored groups, in insertion order.
    fn load_groups(&self) -> Result<Vec<GroupRecord>, StoreError>;

    /// Insert or replace a group by name.
    fn save_group(&self, record: &GroupRecord) -> Result<(), StoreError>;

    /// Remove a group by name. Returns true if a record was removed.
    fn remove_group(&self, name: &str) -> Result<bool, StoreError>;
}

/// In-memory roster store for tests and single-session use.
///
/// State lives behind `Arc<Mutex<..>>` so clones observe the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Vec<GroupRecord>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RosterStore for MemoryStore {
    fn load_groups(&self) -> Result<Vec<GroupRecord>, StoreError> {
        let records = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }

    fn save_group(&self, record: &GroupRecord) -> Result<(), StoreError> {
        let mut records = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        if let Some(existing) = records.iter_mut().find(|r| r.name == record.name) {
            *existing = record.clone();
        } else {
            records.push(record.clone());
        }
        Ok(())
    }

    fn remove_group(&self, name: &str) -> Result<bool, StoreError> {
        let mut records = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        let before = records.len();
        records.retain(|r| r.name != name);
        Ok(records.len() != before)
    }
}

/// Serialize groups to the JSON payload shape stores persist.
pub fn groups_to_json(records: &[GroupRecord]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(records)?)
}

/// Parse a persisted JSON payload back into group records.
pub fn groups_from_json(payload: &str) -> Result<Vec<GroupRecord>, StoreError> {
    Ok(serde_json::from_str(payload)?)
}
