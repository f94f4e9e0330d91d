//! Add-listing form intake and validation.
//!
//! The form layer owns field-level validation: required-field checks, numeric
//! parsing of the price, and defaulting of optional fields. The store accepts
//! whatever draft comes out of here without further checks.
//!
//! Rating and distance are demo fields on new listings; real values would come
//! from reviews and geocoding. The form assigns a random rating in 4.0–5.0
//! (one decimal) and a random distance from a small fixed pool, exactly as the
//! directory has always presented new listings.

use crate::auth::Session;
use crate::domain::error::{HostelfinderError, Result};
use crate::domain::{HostelType, ListingDraft, RoomType};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Stock image used when the lister supplies no photos.
const FALLBACK_IMAGE: &str =
    "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=400";

/// Demo distance pool for new listings.
const DEMO_DISTANCES: [&str; 6] = ["0.3 km", "0.5 km", "0.8 km", "1.2 km", "1.5 km", "2.0 km"];

/// Raw input from the add-listing screen, all fields as entered.
///
/// Nothing here is validated or parsed; `validate` turns a form into a
/// [`ListingDraft`] or reports the first problem found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingForm {
    pub name: String,
    pub address: String,
    /// Price as typed, parsed to a non-negative integer during validation.
    pub price: String,
    pub description: String,
    pub room_type: Option<RoomType>,
    pub hostel_type: Option<HostelType>,
    pub amenities: BTreeSet<String>,
    pub images: Vec<String>,
    pub contact_number: String,
    /// Defaults to "Immediately" when left blank.
    pub available_from: String,
}

impl ListingForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an amenity tag, or removes it if already selected.
    pub fn toggle_amenity(&mut self, amenity: &str) {
        if !self.amenities.remove(amenity) {
            self.amenities.insert(amenity.to_string());
        }
    }

    /// Validates the form and produces a draft owned by the given session.
    ///
    /// Required fields: name, address, price, contact number. The price must
    /// parse as a non-negative integer. Room and hostel type default to single
    /// and boys when unset, matching the screen's initial selection.
    /// `available_from` defaults to "Immediately" when blank, the primary
    /// image falls back to a stock photo, and demo rating/distance values are
    /// assigned here.
    ///
    /// # Errors
    ///
    /// Returns [`HostelfinderError::Validation`] describing the first failed
    /// check.
    pub fn validate(&self, session: &Session) -> Result<ListingDraft> {
        if self.name.trim().is_empty()
            || self.address.trim().is_empty()
            || self.price.trim().is_empty()
            || self.contact_number.trim().is_empty()
        {
            return Err(HostelfinderError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }

        let price: u32 = self.price.trim().parse().map_err(|_| {
            HostelfinderError::Validation(format!(
                "Price must be a non-negative whole number, got {:?}",
                self.price
            ))
        })?;

        let mut rng = rand::thread_rng();
        let rating = (rng.gen_range(4.0_f64..=5.0) * 10.0).round() / 10.0;
        let distance = DEMO_DISTANCES
            .choose(&mut rng)
            .copied()
            .unwrap_or("0.5 km")
            .to_string();

        let available_from = if self.available_from.trim().is_empty() {
            "Immediately".to_string()
        } else {
            self.available_from.trim().to_string()
        };

        let image = self
            .images
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_IMAGE.to_string());

        Ok(ListingDraft {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            price,
            rating,
            distance,
            image,
            images: self.images.clone(),
            amenities: self.amenities.clone(),
            hostel_type: self.hostel_type.unwrap_or(HostelType::Boys),
            room_type: self.room_type.unwrap_or(RoomType::Single),
            is_favorite: false,
            description: if self.description.trim().is_empty() {
                None
            } else {
                Some(self.description.trim().to_string())
            },
            contact_number: Some(self.contact_number.trim().to_string()),
            available_from: Some(available_from),
            owner_id: Some(session.user_id.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new("user-42", "lister@campus.edu", true)
    }

    fn filled_form() -> ListingForm {
        ListingForm {
            name: "Green View Hostel".to_string(),
            address: "12 Institute Lane".to_string(),
            price: "7200".to_string(),
            contact_number: "+91 9000000000".to_string(),
            ..ListingForm::default()
        }
    }

    #[test]
    fn missing_required_field_is_rejected() {
        for strip in ["name", "address", "price", "contact"] {
            let mut form = filled_form();
            match strip {
                "name" => form.name.clear(),
                "address" => form.address.clear(),
                "price" => form.price.clear(),
                _ => form.contact_number.clear(),
            }
            assert!(form.validate(&session()).is_err(), "{strip} accepted empty");
        }
    }

    #[test]
    fn unparseable_price_is_rejected() {
        let mut form = filled_form();
        form.price = "seven thousand".to_string();
        assert!(form.validate(&session()).is_err());

        form.price = "-500".to_string();
        assert!(form.validate(&session()).is_err());
    }

    #[test]
    fn defaults_are_applied() {
        let draft = filled_form().validate(&session()).unwrap();
        assert_eq!(draft.available_from.as_deref(), Some("Immediately"));
        assert_eq!(draft.image, FALLBACK_IMAGE);
        assert_eq!(draft.hostel_type, HostelType::Boys);
        assert_eq!(draft.room_type, RoomType::Single);
        assert_eq!(draft.owner_id.as_deref(), Some("user-42"));
        assert!(!draft.is_favorite);
        assert!((4.0..=5.0).contains(&draft.rating));
        assert!(DEMO_DISTANCES.contains(&draft.distance.as_str()));
    }

    #[test]
    fn explicit_fields_survive_validation() {
        let mut form = filled_form();
        form.available_from = "1st March".to_string();
        form.images = vec!["https://example.com/a.jpg".to_string()];
        form.room_type = Some(RoomType::Dormitory);
        form.hostel_type = Some(HostelType::Girls);
        form.toggle_amenity("WiFi");

        let draft = form.validate(&session()).unwrap();
        assert_eq!(draft.available_from.as_deref(), Some("1st March"));
        assert_eq!(draft.image, "https://example.com/a.jpg");
        assert_eq!(draft.room_type, RoomType::Dormitory);
        assert_eq!(draft.hostel_type, HostelType::Girls);
        assert!(draft.amenities.contains("WiFi"));
        assert_eq!(draft.price, 7_200);
    }
}
