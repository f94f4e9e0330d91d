//! Listing store layer.
//!
//! Owns the authoritative in-memory collection of listings for the current
//! session. All state here is volatile; durability is the document-store
//! backend's concern ([`crate::storage`]).
//!
//! # Modules
//!
//! - [`listings`]: The [`ListingStore`] with create/update/toggle/delete/list
//! - [`seed`]: Demo listings for first-run population

pub mod listings;
pub mod seed;

pub use listings::ListingStore;
pub use seed::seed_listings;
