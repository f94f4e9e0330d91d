//! Storage record models for the persistence layer.
//!
//! The record type mirrors the [`crate::domain::Listing`] entity
//! field-for-field, keeping a clear boundary between the storage
//! representation and the domain model even though the shapes currently
//! coincide.

use crate::domain::{HostelType, Listing, RoomType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A listing as laid out in the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub price: u32,
    pub rating: f64,
    pub distance: String,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    pub hostel_type: HostelType,
    pub room_type: RoomType,
    pub is_favorite: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub available_from: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Listing> for ListingRecord {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            name: listing.name,
            address: listing.address,
            price: listing.price,
            rating: listing.rating,
            distance: listing.distance,
            image: listing.image,
            images: listing.images,
            amenities: listing.amenities,
            hostel_type: listing.hostel_type,
            room_type: listing.room_type,
            is_favorite: listing.is_favorite,
            description: listing.description,
            contact_number: listing.contact_number,
            available_from: listing.available_from,
            owner_id: listing.owner_id,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

impl From<ListingRecord> for Listing {
    fn from(record: ListingRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            address: record.address,
            price: record.price,
            rating: record.rating,
            distance: record.distance,
            image: record.image,
            images: record.images,
            amenities: record.amenities,
            hostel_type: record.hostel_type,
            room_type: record.room_type,
            is_favorite: record.is_favorite,
            description: record.description,
            contact_number: record.contact_number,
            available_from: record.available_from,
            owner_id: record.owner_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
