//! Domain layer for hostelfinder.
//!
//! This module contains the core domain types for the directory, independent of
//! presentation, storage, or session concerns. It follows domain-driven design
//! principles by keeping the listing model isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: Listing entity, categorical enums, drafts, and patches
//!
//! # Examples
//!
//! ```
//! use hostelfinder::domain::{HostelType, RoomType};
//!
//! let ht: HostelType = "girls".parse().unwrap();
//! assert_eq!(ht.label(), "Girls Only");
//! assert_eq!(RoomType::Sharing.to_string(), "sharing");
//! ```

pub mod error;
pub mod listing;

pub use error::{HostelfinderError, Result};
pub use listing::{HostelType, Listing, ListingDraft, ListingPatch, RoomType};
