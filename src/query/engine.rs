//! Pure filtering and sorting over listing collections.
//!
//! This module implements the query engine: a side-effect-free transformation
//! from (collection, criteria) to a filtered, optionally sorted collection.
//! Nothing here mutates the store; callers receive owned clones of the
//! matching listings in their original newest-first order unless a sort is
//! requested.
//!
//! # Algorithm
//!
//! 1. Free-text query: case-insensitive substring match against name or
//!    address. Plain containment only; this is a UI convenience filter, not a
//!    search index.
//! 2. Structured dimensions applied conjunctively: price bracket, room type,
//!    hostel type, distance bracket, and required amenity set.
//! 3. Optional stable sort by price, rating, or distance. Ties keep their
//!    newest-first relative order.
//!
//! A listing whose distance display string cannot be parsed matches no
//! specific distance bracket and sorts after everything else under a distance
//! sort; it never causes an error.

use crate::domain::Listing;
use crate::query::filters::{SearchFilters, SortKey, SortOrder, SortSpec};
use std::cmp::Ordering;

/// Parses the numeric kilometre value out of a distance display string.
///
/// Accepts strings like `"0.5 km"`, `"2km"`, or a bare `"1.2"`; the first
/// whitespace- or unit-delimited token must parse as a non-negative float.
/// Returns `None` for anything malformed.
///
/// # Examples
///
/// ```
/// use hostelfinder::query::parse_distance_km;
///
/// assert_eq!(parse_distance_km("0.5 km"), Some(0.5));
/// assert_eq!(parse_distance_km("2km"), Some(2.0));
/// assert_eq!(parse_distance_km("far away"), None);
/// ```
#[must_use]
pub fn parse_distance_km(distance: &str) -> Option<f64> {
    let trimmed = distance.trim();
    let numeric = trimmed
        .strip_suffix("km")
        .or_else(|| trimmed.strip_suffix("KM"))
        .or_else(|| trimmed.strip_suffix("Km"))
        .unwrap_or(trimmed)
        .trim();

    match numeric.parse::<f64>() {
        Ok(km) if km.is_finite() && km >= 0.0 => Some(km),
        _ => None,
    }
}

/// Whether a single listing satisfies every active criterion.
///
/// Dimensions combine with AND semantics; an inactive dimension always passes.
#[must_use]
pub fn matches(listing: &Listing, filters: &SearchFilters) -> bool {
    if !filters.query.is_empty() {
        let query = filters.query.to_lowercase();
        let in_name = listing.name.to_lowercase().contains(&query);
        let in_address = listing.address.to_lowercase().contains(&query);
        if !in_name && !in_address {
            return false;
        }
    }

    if !filters.price.matches(listing.price) {
        return false;
    }

    if let Some(room_type) = filters.room_type {
        if listing.room_type != room_type {
            return false;
        }
    }

    if let Some(hostel_type) = filters.hostel_type {
        if listing.hostel_type != hostel_type {
            return false;
        }
    }

    if let Some(max_km) = filters.distance.max_km() {
        // Unparseable distance strings match no specific bracket.
        match parse_distance_km(&listing.distance) {
            Some(km) if km <= max_km => {}
            _ => return false,
        }
    }

    if !filters.amenities.is_empty() && !filters.amenities.is_subset(&listing.amenities) {
        return false;
    }

    true
}

/// Filters a collection against the given criteria and applies the optional
/// sort.
///
/// The input slice is never mutated. Results are owned clones in the input's
/// relative order; when a sort is active the sort is stable, so ties keep
/// their newest-first ordering.
///
/// # Examples
///
/// ```
/// use hostelfinder::query::{filter_listings, SearchFilters};
///
/// let filters = SearchFilters::default();
/// let results = filter_listings(&[], &filters);
/// assert!(results.is_empty());
/// ```
#[must_use]
pub fn filter_listings(listings: &[Listing], filters: &SearchFilters) -> Vec<Listing> {
    let _span = tracing::debug_span!(
        "filter_listings",
        total = listings.len(),
        query_len = filters.query.len(),
        price = ?filters.price,
        distance = ?filters.distance,
        amenity_count = filters.amenities.len()
    )
    .entered();

    let mut results: Vec<Listing> = listings
        .iter()
        .filter(|listing| matches(listing, filters))
        .cloned()
        .collect();

    if let Some(sort) = filters.sort {
        sort_listings(&mut results, sort);
    }

    tracing::debug!(matched = results.len(), "filter applied");
    results
}

/// Stable-sorts listings in place by the given key and direction.
///
/// Listings whose sort key is unavailable (an unparseable distance string)
/// always sort last, regardless of direction.
pub fn sort_listings(listings: &mut [Listing], sort: SortSpec) {
    listings.sort_by(|a, b| compare(a, b, sort));
}

fn compare(a: &Listing, b: &Listing, sort: SortSpec) -> Ordering {
    match sort.key {
        SortKey::Price => directed(a.price.cmp(&b.price), sort.order),
        SortKey::Rating => directed(
            a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal),
            sort.order,
        ),
        SortKey::Distance => compare_optional(
            parse_distance_km(&a.distance),
            parse_distance_km(&b.distance),
            sort.order,
        ),
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

fn compare_optional(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => directed(a.partial_cmp(&b).unwrap_or(Ordering::Equal), order),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HostelType, RoomType};
    use crate::query::filters::PriceRange;
    use std::collections::BTreeSet;

    fn listing(id: &str, name: &str, price: u32, distance: &str) -> Listing {
        Listing {
            id: id.to_string(),
            name: name.to_string(),
            address: format!("{name} Street"),
            price,
            rating: 4.2,
            distance: distance.to_string(),
            image: String::new(),
            images: vec![],
            amenities: BTreeSet::new(),
            hostel_type: HostelType::Coed,
            room_type: RoomType::Single,
            is_favorite: false,
            description: None,
            contact_number: None,
            available_from: None,
            owner_id: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn parses_distance_display_strings() {
        assert_eq!(parse_distance_km("0.5 km"), Some(0.5));
        assert_eq!(parse_distance_km(" 1.2 km "), Some(1.2));
        assert_eq!(parse_distance_km("3"), Some(3.0));
        assert_eq!(parse_distance_km(""), None);
        assert_eq!(parse_distance_km("near campus"), None);
        assert_eq!(parse_distance_km("-1 km"), None);
    }

    #[test]
    fn query_matches_name_or_address_case_insensitively() {
        let listings = vec![
            listing("1", "Sunrise Boys Hostel", 8_000, "0.5 km"),
            listing("2", "Elite Girls Hostel", 9_500, "0.8 km"),
        ];

        let mut filters = SearchFilters::default();
        filters.query = "SUNRISE".to_string();
        let results = filter_listings(&listings, &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");

        // Address matches too.
        filters.query = "girls hostel street".to_string();
        let results = filter_listings(&listings, &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "2");
    }

    #[test]
    fn malformed_distance_never_matches_an_active_bracket() {
        let listings = vec![
            listing("1", "Mystery Lodge", 6_000, "somewhere"),
            listing("2", "Known Lodge", 6_000, "0.4 km"),
        ];

        let mut filters = SearchFilters::default();
        filters.distance = crate::query::filters::DistanceRange::Walking;
        let results = filter_listings(&listings, &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "2");

        // With no bracket active the malformed listing passes through.
        filters.distance = crate::query::filters::DistanceRange::All;
        assert_eq!(filter_listings(&listings, &filters).len(), 2);
    }

    #[test]
    fn dimensions_combine_conjunctively() {
        let mut a = listing("1", "Alpha", 6_000, "0.5 km");
        a.room_type = RoomType::Single;
        let mut b = listing("2", "Beta", 9_000, "0.5 km");
        b.room_type = RoomType::Sharing;
        let mut c = listing("3", "Gamma", 13_000, "0.5 km");
        c.room_type = RoomType::Single;

        let mut filters = SearchFilters::default();
        filters.price = PriceRange::Budget;
        filters.room_type = Some(RoomType::Single);

        let results = filter_listings(&[a, b, c], &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn amenity_filter_requires_superset() {
        let mut with_wifi_mess = listing("1", "Alpha", 6_000, "0.5 km");
        with_wifi_mess.amenities = ["WiFi", "Mess"].iter().map(ToString::to_string).collect();
        let bare = listing("2", "Beta", 6_000, "0.5 km");

        let mut filters = SearchFilters::default();
        filters.amenities = ["WiFi", "AC"].iter().map(ToString::to_string).collect();
        assert!(filter_listings(&[with_wifi_mess.clone(), bare.clone()], &filters).is_empty());

        filters.amenities = ["WiFi"].iter().map(ToString::to_string).collect();
        let results = filter_listings(&[with_wifi_mess, bare], &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn empty_filter_is_identity() {
        let listings = vec![
            listing("3", "Gamma", 13_000, "2.0 km"),
            listing("2", "Beta", 9_000, "1.0 km"),
            listing("1", "Alpha", 6_000, "0.5 km"),
        ];

        let results = filter_listings(&listings, &SearchFilters::default());
        assert_eq!(results, listings);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut first = listing("1", "Alpha", 6_000, "0.5 km");
        first.rating = 4.5;
        let mut second = listing("2", "Beta", 9_000, "0.8 km");
        second.rating = 4.5;

        let mut filters = SearchFilters::default();
        filters.sort = Some(SortSpec {
            key: SortKey::Rating,
            order: SortOrder::Desc,
        });

        let results = filter_listings(&[first, second], &filters);
        let ids: Vec<&str> = results.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn unparseable_distance_sorts_last_in_both_directions() {
        let near = listing("1", "Near", 6_000, "0.5 km");
        let far = listing("2", "Far", 6_000, "3.0 km");
        let unknown = listing("3", "Unknown", 6_000, "???");

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let mut filters = SearchFilters::default();
            filters.sort = Some(SortSpec {
                key: SortKey::Distance,
                order,
            });
            let results =
                filter_listings(&[near.clone(), far.clone(), unknown.clone()], &filters);
            assert_eq!(results.last().unwrap().id, "3");
        }
    }
}
