//! The in-memory listing store.
//!
//! [`ListingStore`] owns the authoritative collection of listings for the
//! current session and exposes the atomic mutation operations the screens call.
//! State is volatile and process-local; durability, when wanted, is delegated
//! to the document-store backend in [`crate::storage`], with this store acting
//! as the session-scoped authority in front of it.
//!
//! # Ordering contract
//!
//! The collection is kept newest-first: `create` inserts at the head, and
//! `list` returns a snapshot in that order. "Most recent" views rely on this.
//!
//! # Identity and timestamps
//!
//! Ids are derived from a millisecond wall-clock stamp that is bumped past the
//! previously issued stamp whenever the clock has not advanced, so ids are
//! unique and `updated_at` is strictly monotonic per store even for
//! back-to-back mutations within one millisecond.

use crate::domain::error::{HostelfinderError, Result};
use crate::domain::{Listing, ListingDraft, ListingPatch};

/// Owns the session's listing collection and its mutation operations.
///
/// Single-threaded by design: every operation runs to completion before the
/// next event is processed, so no interior locking is needed. `list()` hands
/// out an owned snapshot, never a view into the backing vector.
///
/// # Examples
///
/// ```
/// use hostelfinder::store::ListingStore;
///
/// let mut store = ListingStore::new();
/// assert!(store.list().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ListingStore {
    /// Listings, newest-first.
    listings: Vec<Listing>,

    /// Last issued timestamp in Unix milliseconds. Stamps only move forward.
    last_stamp: i64,
}

impl ListingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with existing listings.
    ///
    /// Used when hydrating from the document-store backend. Listings are
    /// expected newest-first; the stamp watermark is advanced past every
    /// timestamp present so future mutations stay monotonic.
    #[must_use]
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        let last_stamp = listings
            .iter()
            .flat_map(|l| [l.created_at, l.updated_at])
            .max()
            .unwrap_or(0);
        Self {
            listings,
            last_stamp,
        }
    }

    /// Issues the next timestamp, strictly greater than any issued before.
    fn next_stamp(&mut self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        self.last_stamp = now.max(self.last_stamp + 1);
        self.last_stamp
    }

    /// Number of listings currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the store holds no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Creates a listing from a draft and inserts it at the head of the
    /// collection.
    ///
    /// Assigns a fresh unique id and sets both lifecycle timestamps to the
    /// same moment. Returns a clone of the stored listing. The store performs
    /// no field-level validation; that is the form layer's job.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostelfinder::store::{seed_listings, ListingStore};
    ///
    /// let mut store = ListingStore::new();
    /// for draft in seed_listings() {
    ///     store.create(draft);
    /// }
    /// assert_eq!(store.list().len(), 3);
    /// ```
    pub fn create(&mut self, draft: ListingDraft) -> Listing {
        let stamp = self.next_stamp();
        let listing = Listing {
            id: stamp.to_string(),
            name: draft.name,
            address: draft.address,
            price: draft.price,
            rating: draft.rating,
            distance: draft.distance,
            image: draft.image,
            images: draft.images,
            amenities: draft.amenities,
            hostel_type: draft.hostel_type,
            room_type: draft.room_type,
            is_favorite: draft.is_favorite,
            description: draft.description,
            contact_number: draft.contact_number,
            available_from: draft.available_from,
            owner_id: draft.owner_id,
            created_at: stamp,
            updated_at: stamp,
        };

        tracing::debug!(id = %listing.id, name = %listing.name, "listing created");
        self.listings.insert(0, listing.clone());
        listing
    }

    /// Merges a patch onto the listing with the given id and refreshes its
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`HostelfinderError::NotFound`] if no listing has that id. The
    /// not-found policy is an explicit signal rather than a silent no-op.
    pub fn update(&mut self, id: &str, patch: ListingPatch) -> Result<()> {
        let stamp = self.next_stamp();
        let listing = self
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| HostelfinderError::NotFound { id: id.to_string() })?;

        if let Some(name) = patch.name {
            listing.name = name;
        }
        if let Some(address) = patch.address {
            listing.address = address;
        }
        if let Some(price) = patch.price {
            listing.price = price;
        }
        if let Some(rating) = patch.rating {
            listing.rating = rating;
        }
        if let Some(distance) = patch.distance {
            listing.distance = distance;
        }
        if let Some(image) = patch.image {
            listing.image = image;
        }
        if let Some(images) = patch.images {
            listing.images = images;
        }
        if let Some(amenities) = patch.amenities {
            listing.amenities = amenities;
        }
        if let Some(hostel_type) = patch.hostel_type {
            listing.hostel_type = hostel_type;
        }
        if let Some(room_type) = patch.room_type {
            listing.room_type = room_type;
        }
        if let Some(description) = patch.description {
            listing.description = Some(description);
        }
        if let Some(contact_number) = patch.contact_number {
            listing.contact_number = Some(contact_number);
        }
        if let Some(available_from) = patch.available_from {
            listing.available_from = Some(available_from);
        }

        listing.updated_at = stamp;
        tracing::debug!(id = %id, "listing updated");
        Ok(())
    }

    /// Flips the favorite flag on the listing with the given id and refreshes
    /// its `updated_at`. Returns the new flag value.
    ///
    /// # Errors
    ///
    /// Returns [`HostelfinderError::NotFound`] if no listing has that id.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let stamp = self.next_stamp();
        let listing = self
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| HostelfinderError::NotFound { id: id.to_string() })?;

        listing.is_favorite = !listing.is_favorite;
        listing.updated_at = stamp;
        tracing::debug!(id = %id, favorite = listing.is_favorite, "favorite toggled");
        Ok(listing.is_favorite)
    }

    /// Removes the listing with the given id permanently.
    ///
    /// Idempotent: deleting a nonexistent id is not an error. There is no
    /// soft-delete and no undo.
    pub fn delete(&mut self, id: &str) {
        let before = self.listings.len();
        self.listings.retain(|l| l.id != id);
        if self.listings.len() < before {
            tracing::debug!(id = %id, "listing deleted");
        }
    }

    /// Looks up a listing by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Returns an owned snapshot of the full collection, newest-first.
    ///
    /// The snapshot stays safe to iterate even if the store is mutated before
    /// iteration completes; no shared mutable backing array is exposed.
    #[must_use]
    pub fn list(&self) -> Vec<Listing> {
        self.listings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_listings;

    fn draft(name: &str) -> ListingDraft {
        let mut draft = seed_listings().remove(0);
        draft.name = name.to_string();
        draft
    }

    #[test]
    fn create_assigns_pairwise_distinct_ids() {
        let mut store = ListingStore::new();
        let mut ids: Vec<String> = (0..50)
            .map(|i| store.create(draft(&format!("Hostel {i}"))).id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn create_inserts_newest_first() {
        let mut store = ListingStore::new();
        store.create(draft("A"));
        store.create(draft("B"));

        let names: Vec<String> = store.list().into_iter().map(|l| l.name).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn update_merges_fields_and_bumps_updated_at() {
        let mut store = ListingStore::new();
        let created = store.create(draft("X"));
        let before = created.updated_at;

        store
            .update(&created.id, ListingPatch::new().price(9_000))
            .unwrap();

        let updated = store.get(&created.id).unwrap();
        assert_eq!(updated.name, "X");
        assert_eq!(updated.price, 9_000);
        assert!(updated.updated_at > before);
        assert!(updated.updated_at >= updated.created_at);
        assert_eq!(updated.id, created.id);
    }

    #[test]
    fn update_missing_id_signals_not_found() {
        let mut store = ListingStore::new();
        let err = store.update("ghost", ListingPatch::new()).unwrap_err();
        assert!(matches!(
            err,
            crate::domain::HostelfinderError::NotFound { .. }
        ));
    }

    #[test]
    fn toggle_favorite_is_self_inverse() {
        let mut store = ListingStore::new();
        let created = store.create(draft("X"));
        let original = created.is_favorite;

        assert_eq!(store.toggle_favorite(&created.id).unwrap(), !original);
        assert_eq!(store.toggle_favorite(&created.id).unwrap(), original);
        assert_eq!(store.get(&created.id).unwrap().is_favorite, original);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = ListingStore::new();
        let keep = store.create(draft("Keep"));
        let gone = store.create(draft("Gone"));

        store.delete(&gone.id);
        let after_first: Vec<String> = store.list().into_iter().map(|l| l.id).collect();
        store.delete(&gone.id);
        let after_second: Vec<String> = store.list().into_iter().map(|l| l.id).collect();

        assert_eq!(after_first, after_second);
        assert_eq!(after_first, vec![keep.id]);
    }

    #[test]
    fn list_returns_detached_snapshot() {
        let mut store = ListingStore::new();
        store.create(draft("A"));
        let snapshot = store.list();
        store.delete(&snapshot[0].id);

        // Snapshot is unaffected by the later mutation.
        assert_eq!(snapshot.len(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn hydrated_store_keeps_timestamps_monotonic() {
        let mut store = ListingStore::new();
        let a = store.create(draft("A"));
        let listings = store.list();

        let mut rehydrated = ListingStore::with_listings(listings);
        let b = rehydrated.create(draft("B"));
        assert!(b.created_at > a.updated_at);
    }
}
