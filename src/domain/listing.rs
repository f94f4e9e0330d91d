//! Hostel listing domain model.
//!
//! This module defines the central [`Listing`] entity together with its
//! categorical enums, the [`ListingDraft`] used to create listings, and the
//! [`ListingPatch`] used for partial updates. The store owns identity and
//! lifecycle timestamps; drafts and patches deliberately carry neither.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Number of milliseconds in one minute.
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Number of milliseconds in one hour.
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Number of milliseconds in one day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Who a hostel admits.
///
/// Listings always carry one of these variants; free-form strings are rejected
/// at the boundary where categorical data enters the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostelType {
    /// Boys-only hostel.
    Boys,
    /// Girls-only hostel.
    Girls,
    /// Co-ed hostel.
    Coed,
}

impl HostelType {
    /// All variants, in display order.
    pub const ALL: [Self; 3] = [Self::Boys, Self::Girls, Self::Coed];

    /// Human-readable label, matching the add-listing form captions.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Boys => "Boys Only",
            Self::Girls => "Girls Only",
            Self::Coed => "Co-ed",
        }
    }
}

impl fmt::Display for HostelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Self::Boys => "boys",
            Self::Girls => "girls",
            Self::Coed => "coed",
        };
        write!(f, "{id}")
    }
}

impl FromStr for HostelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boys" => Ok(Self::Boys),
            "girls" => Ok(Self::Girls),
            "coed" => Ok(Self::Coed),
            other => Err(format!("unknown hostel type: {other}")),
        }
    }
}

/// Room arrangement offered by a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Single occupancy room.
    Single,
    /// Shared room, typically two or three beds.
    Sharing,
    /// Dormitory-style hall.
    Dormitory,
}

impl RoomType {
    /// All variants, in display order.
    pub const ALL: [Self; 3] = [Self::Single, Self::Sharing, Self::Dormitory];

    /// Human-readable label, matching the add-listing form captions.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "Single Room",
            Self::Sharing => "Sharing Room",
            Self::Dormitory => "Dormitory",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Self::Single => "single",
            Self::Sharing => "sharing",
            Self::Dormitory => "dormitory",
        };
        write!(f, "{id}")
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "sharing" => Ok(Self::Sharing),
            "dormitory" => Ok(Self::Dormitory),
            other => Err(format!("unknown room type: {other}")),
        }
    }
}

/// A hostel listing as held by the store.
///
/// The id is assigned by the store at creation and is immutable afterwards.
/// Both lifecycle timestamps are Unix milliseconds and are refreshed by the
/// store on mutation, never by callers. The amenity set is a `BTreeSet` so
/// duplicates cannot occur and insertion order is irrelevant.
///
/// # Fields
///
/// - `distance` is a display string such as `"0.5 km"`; the numeric value is
///   parsed out of it by the query engine when a distance bracket is active
/// - `rating` is a demo field, conventionally one decimal place in 4.0–5.0
/// - `owner_id` is a back-reference to the user who created the listing; it is
///   not authoritative at this layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
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

impl Listing {
    /// Returns a human-readable string describing how long ago the listing was
    /// last updated.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    #[must_use]
    pub fn time_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let diff = now - self.updated_at;

        if diff < MILLIS_PER_MINUTE {
            "just now".to_string()
        } else if diff < MILLIS_PER_HOUR {
            let mins = diff / MILLIS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < MILLIS_PER_DAY {
            let hours = diff / MILLIS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / MILLIS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

/// All listing fields except id and lifecycle timestamps.
///
/// This is the payload accepted by `ListingStore::create`. Field-level
/// validation (required fields, numeric parsing, defaulting) happens in the
/// form layer before a draft is constructed; the store accepts drafts as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub name: String,
    pub address: String,
    pub price: u32,
    pub rating: f64,
    pub distance: String,
    pub image: String,
    pub images: Vec<String>,
    pub amenities: BTreeSet<String>,
    pub hostel_type: HostelType,
    pub room_type: RoomType,
    pub is_favorite: bool,
    pub description: Option<String>,
    pub contact_number: Option<String>,
    pub available_from: Option<String>,
    pub owner_id: Option<String>,
}

/// Partial update for an existing listing.
///
/// Every field is optional; `None` leaves the current value untouched. Identity,
/// timestamps, and the favorite flag are not patchable here: the favorite flag
/// has its own toggle operation, and the store owns the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub price: Option<u32>,
    pub rating: Option<f64>,
    pub distance: Option<String>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<BTreeSet<String>>,
    pub hostel_type: Option<HostelType>,
    pub room_type: Option<RoomType>,
    pub description: Option<String>,
    pub contact_number: Option<String>,
    pub available_from: Option<String>,
}

impl ListingPatch {
    /// Returns a patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new monthly price.
    #[must_use]
    pub fn price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets a new display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a new free-text description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
