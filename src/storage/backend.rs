//! Storage backend abstraction.
//!
//! This module defines the [`ListingStorage`] trait that abstracts over
//! document-store backends. The in-memory [`crate::store::ListingStore`] stays
//! the session authority; a backend only hydrates it at startup and receives
//! whole snapshots after mutations.
//!
//! The trait is minimal and use-case shaped, not a generic ORM: hydrate, read
//! one, replace all.

use crate::domain::error::Result;
use crate::storage::models::ListingRecord;

/// Abstraction over durable listing storage.
///
/// # Implementations
///
/// - [`crate::storage::JsonStorage`]: JSON file with atomic writes (default)
pub trait ListingStorage: Send {
    /// Retrieves every stored listing, newest-first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn load_all(&self) -> Result<Vec<ListingRecord>>;

    /// Retrieves a single listing by id. `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get_by_id(&self, id: &str) -> Result<Option<ListingRecord>>;

    /// Replaces the stored collection with the given snapshot.
    ///
    /// Called after store mutations; the snapshot is the full session state,
    /// so stale or deleted records disappear on replace.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn replace_all(&mut self, records: &[ListingRecord]) -> Result<()>;
}
