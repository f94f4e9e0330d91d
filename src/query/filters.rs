//! Structured search criteria for the query engine.
//!
//! This module defines [`SearchFilters`], the ephemeral criteria record built by
//! the search screen, together with the bracket enums for price and distance.
//! Every dimension defaults to "no constraint", so `SearchFilters::default()`
//! is the identity filter.
//!
//! Bracket boundaries mirror the directory's published ranges: budget is
//! ₹5,000–₹8,000, mid is ₹8,000–₹12,000, premium is ₹12,000 and up; walking
//! distance is within 1 km, nearby within 2 km, farther within 5 km.

use crate::domain::{HostelType, RoomType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Price bracket for the monthly rent dimension.
///
/// Brackets are half-open `[min, max)` ranges; [`PriceRange::All`] imposes no
/// constraint. Unrecognized bracket ids are rejected at the parse boundary by
/// [`PriceRange::from_id`], so the engine only ever sees a valid variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    /// Any price.
    #[default]
    All,
    /// ₹5,000 – ₹8,000.
    Budget,
    /// ₹8,000 – ₹12,000.
    Mid,
    /// ₹12,000 and above.
    Premium,
}

impl PriceRange {
    /// All variants, in the order the search screen presents them.
    pub const ALL: [Self; 4] = [Self::All, Self::Budget, Self::Mid, Self::Premium];

    /// Parses a bracket id as used by the search screen ("all", "budget",
    /// "mid", "premium"). Returns `None` for unrecognized ids.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "all" => Some(Self::All),
            "budget" => Some(Self::Budget),
            "mid" => Some(Self::Mid),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }

    /// Human-readable label for the search screen.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Prices",
            Self::Budget => "₹5,000 - ₹8,000",
            Self::Mid => "₹8,000 - ₹12,000",
            Self::Premium => "₹12,000+",
        }
    }

    /// Whether a monthly price falls inside this bracket.
    ///
    /// Brackets are half-open: a ₹8,000 listing is `Mid`, not `Budget`.
    #[must_use]
    pub fn matches(self, price: u32) -> bool {
        match self {
            Self::All => true,
            Self::Budget => (5_000..8_000).contains(&price),
            Self::Mid => (8_000..12_000).contains(&price),
            Self::Premium => price >= 12_000,
        }
    }

    /// The next bracket in cycle order, wrapping back to [`PriceRange::All`].
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Budget,
            Self::Budget => Self::Mid,
            Self::Mid => Self::Premium,
            Self::Premium => Self::All,
        }
    }
}

/// Distance-from-institute bracket.
///
/// Compared against the numeric kilometre value parsed from a listing's display
/// string. [`DistanceRange::All`] imposes no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceRange {
    /// Any distance.
    #[default]
    All,
    /// Walking distance, within 1 km.
    Walking,
    /// Within 2 km.
    Nearby,
    /// Within 5 km.
    Farther,
}

impl DistanceRange {
    /// All variants, in the order the search screen presents them.
    pub const ALL: [Self; 4] = [Self::All, Self::Walking, Self::Nearby, Self::Farther];

    /// Parses a bracket id ("all", "walking", "nearby", "farther").
    /// Returns `None` for unrecognized ids.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "all" => Some(Self::All),
            "walking" => Some(Self::Walking),
            "nearby" => Some(Self::Nearby),
            "farther" => Some(Self::Farther),
            _ => None,
        }
    }

    /// Human-readable label for the search screen.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Any Distance",
            Self::Walking => "Walking Distance",
            Self::Nearby => "Within 2km",
            Self::Farther => "Within 5km",
        }
    }

    /// Maximum distance in kilometres, `None` for no constraint.
    #[must_use]
    pub fn max_km(self) -> Option<f64> {
        match self {
            Self::All => None,
            Self::Walking => Some(1.0),
            Self::Nearby => Some(2.0),
            Self::Farther => Some(5.0),
        }
    }

    /// The next bracket in cycle order, wrapping back to [`DistanceRange::All`].
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Walking,
            Self::Walking => Self::Nearby,
            Self::Nearby => Self::Farther,
            Self::Farther => Self::All,
        }
    }
}

/// Sortable listing attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Monthly price.
    Price,
    /// Rating.
    Rating,
    /// Distance from the institute.
    Distance,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// A sort key paired with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

/// The full set of search criteria for one search interaction.
///
/// Dimensions combine conjunctively: a listing must satisfy every active
/// dimension to appear in the result. The default value constrains nothing
/// and sorts nothing, so filtering with it returns the input unchanged.
///
/// Filters are ephemeral: the search screen builds a fresh value per
/// interaction and discards it when the screen is left.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// Free-text query matched case-insensitively against name and address.
    pub query: String,
    /// Price bracket.
    pub price: PriceRange,
    /// Required room type, `None` for any.
    pub room_type: Option<RoomType>,
    /// Required hostel type, `None` for any.
    pub hostel_type: Option<HostelType>,
    /// Distance bracket.
    pub distance: DistanceRange,
    /// Amenities every result must offer. Empty set imposes no constraint.
    pub amenities: BTreeSet<String>,
    /// Optional sort key and direction applied after filtering.
    pub sort: Option<SortSpec>,
}

impl SearchFilters {
    /// Returns criteria that match everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any dimension is active.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.query.is_empty()
            && self.price == PriceRange::All
            && self.room_type.is_none()
            && self.hostel_type.is_none()
            && self.distance == DistanceRange::All
            && self.amenities.is_empty()
            && self.sort.is_none()
    }

    /// Resets every dimension to "no constraint".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Adds an amenity to the required set, or removes it if already present.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        if !self.amenities.remove(amenity) {
            self.amenities.insert(amenity.to_string());
        }
    }
}
