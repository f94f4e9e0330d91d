//! Document-store collaborator for durable listing data.
//!
//! The in-memory store in [`crate::store`] is the session authority; this
//! layer is the optional durable backing behind it. Its record schema mirrors
//! the listing entity field-for-field.
//!
//! # Modules
//!
//! - [`backend`]: Storage trait abstraction
//! - [`json`]: JSON file-based implementation with atomic writes
//! - [`models`]: Storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::ListingStorage;
pub use json::JsonStorage;
pub use models::ListingRecord;
