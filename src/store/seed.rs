//! Demo seed data.
//!
//! Three canonical listings used to populate an empty directory so the screens
//! have something to show before anyone creates a listing. Seeding is opt-in
//! via the `seed_demo_data` configuration flag.

use crate::domain::{HostelType, ListingDraft, RoomType};
use std::collections::BTreeSet;

fn amenity_set(amenities: &[&str]) -> BTreeSet<String> {
    amenities.iter().map(ToString::to_string).collect()
}

/// Returns the demo listing drafts, oldest-first.
///
/// Creating them in order leaves the store newest-first with "Budget Stay
/// Hostel" at the head.
#[must_use]
pub fn seed_listings() -> Vec<ListingDraft> {
    vec![
        ListingDraft {
            name: "Sunrise Boys Hostel".to_string(),
            address: "123 College Road, Near Haris Institute".to_string(),
            price: 8_000,
            rating: 4.5,
            distance: "0.5 km".to_string(),
            image: "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            images: vec![],
            amenities: amenity_set(&["WiFi", "Mess", "Laundry", "AC"]),
            hostel_type: HostelType::Boys,
            room_type: RoomType::Single,
            is_favorite: false,
            description: Some(
                "A comfortable boys hostel with all modern amenities near the institute."
                    .to_string(),
            ),
            contact_number: Some("+91 9876543210".to_string()),
            available_from: Some("Immediately".to_string()),
            owner_id: Some("owner1".to_string()),
        },
        ListingDraft {
            name: "Elite Girls Hostel".to_string(),
            address: "456 University Avenue, Haris Colony".to_string(),
            price: 9_500,
            rating: 4.7,
            distance: "0.8 km".to_string(),
            image: "https://images.pexels.com/photos/1571468/pexels-photo-1571468.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            images: vec![],
            amenities: amenity_set(&["WiFi", "Mess", "Security", "AC", "Gym"]),
            hostel_type: HostelType::Girls,
            room_type: RoomType::Single,
            is_favorite: true,
            description: Some(
                "Premium girls hostel with excellent security and facilities.".to_string(),
            ),
            contact_number: Some("+91 9876543211".to_string()),
            available_from: Some("1st January 2024".to_string()),
            owner_id: Some("owner2".to_string()),
        },
        ListingDraft {
            name: "Budget Stay Hostel".to_string(),
            address: "789 Student Street, Institute Area".to_string(),
            price: 6_500,
            rating: 4.2,
            distance: "1.2 km".to_string(),
            image: "https://images.pexels.com/photos/1571463/pexels-photo-1571463.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            images: vec![],
            amenities: amenity_set(&["WiFi", "Mess", "Laundry"]),
            hostel_type: HostelType::Coed,
            room_type: RoomType::Sharing,
            is_favorite: false,
            description: Some(
                "Affordable hostel option for budget-conscious students.".to_string(),
            ),
            contact_number: Some("+91 9876543212".to_string()),
            available_from: Some("15th January 2024".to_string()),
            owner_id: Some("owner3".to_string()),
        },
    ]
}
