//! Form intake layer.
//!
//! The add-listing input surface: raw string fields in, validated
//! [`crate::domain::ListingDraft`] out. Field-level validation lives here so
//! the store can stay validation-free.

pub mod listing_form;

pub use listing_form::ListingForm;

/// Amenity tags the add-listing and search screens offer.
pub const AMENITIES: [&str; 15] = [
    "WiFi",
    "Mess",
    "Laundry",
    "AC",
    "Gym",
    "Security",
    "Parking",
    "Study Room",
    "Common Area",
    "CCTV",
    "Backup Power",
    "Water Cooler",
    "Elevator",
    "Recreation Room",
    "Medical Facility",
];
