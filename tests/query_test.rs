#[cfg(test)]
mod search_and_filtering {
    use std::collections::BTreeSet;

    use hostelfinder::domain::{HostelType, ListingDraft, RoomType};
    use hostelfinder::query::{
        filter_listings, DistanceRange, PriceRange, SearchFilters, SortKey, SortOrder, SortSpec,
    };
    use hostelfinder::store::ListingStore;
    use hostelfinder::Listing;

    fn draft(name: &str, price: u32, distance: &str) -> ListingDraft {
        ListingDraft {
            name: name.to_string(),
            address: format!("{name} street"),
            price,
            rating: 4.0,
            distance: distance.to_string(),
            image: String::new(),
            images: vec![],
            amenities: BTreeSet::new(),
            hostel_type: HostelType::Coed,
            room_type: RoomType::Sharing,
            is_favorite: false,
            description: None,
            contact_number: None,
            available_from: None,
            owner_id: None,
        }
    }

    fn campus() -> Vec<Listing> {
        let mut store = ListingStore::new();
        let mut near = draft("Sunrise Boys Hostel", 8000, "0.5 km");
        near.hostel_type = HostelType::Boys;
        near.room_type = RoomType::Single;
        near.amenities = ["WiFi", "Mess", "Laundry"]
            .iter()
            .map(ToString::to_string)
            .collect();
        store.create(near);

        let mut mid = draft("Elite Girls Hostel", 9500, "1.8 km");
        mid.hostel_type = HostelType::Girls;
        mid.room_type = RoomType::Single;
        mid.rating = 4.7;
        mid.amenities = ["WiFi", "AC"].iter().map(ToString::to_string).collect();
        store.create(mid);

        let mut far = draft("Budget Stay Hostel", 6500, "4.0 km");
        far.rating = 4.2;
        store.create(far);

        let mut unknown = draft("Mystery Lodge", 14000, "across the river");
        unknown.rating = 4.9;
        store.create(unknown);

        store.list()
    }

    #[test]
    fn empty_filters_return_everything_in_order() {
        let listings = campus();
        let results = filter_listings(&listings, &SearchFilters::default());
        let names: Vec<&str> = results.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Mystery Lodge",
                "Budget Stay Hostel",
                "Elite Girls Hostel",
                "Sunrise Boys Hostel"
            ]
        );
    }

    #[test]
    fn query_matches_address_too() {
        let listings = campus();
        let filters = SearchFilters {
            query: "ELITE GIRLS STREET".to_string(),
            ..SearchFilters::default()
        };
        let results = filter_listings(&listings, &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Elite Girls Hostel");
    }

    #[test]
    fn price_brackets_use_half_open_bounds() {
        let listings = campus();

        let budget = SearchFilters {
            price: PriceRange::Budget,
            ..SearchFilters::default()
        };
        let names: Vec<String> = filter_listings(&listings, &budget)
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, ["Budget Stay Hostel"]);

        // 8000 belongs to the mid bracket, not budget.
        let mid = SearchFilters {
            price: PriceRange::Mid,
            ..SearchFilters::default()
        };
        let names: Vec<String> = filter_listings(&listings, &mid)
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, ["Elite Girls Hostel", "Sunrise Boys Hostel"]);

        let premium = SearchFilters {
            price: PriceRange::Premium,
            ..SearchFilters::default()
        };
        let names: Vec<String> = filter_listings(&listings, &premium)
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, ["Mystery Lodge"]);
    }

    #[test]
    fn distance_brackets_exclude_unparseable_listings() {
        let listings = campus();

        let walking = SearchFilters {
            distance: DistanceRange::Walking,
            ..SearchFilters::default()
        };
        let names: Vec<String> = filter_listings(&listings, &walking)
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, ["Sunrise Boys Hostel"]);

        let farther = SearchFilters {
            distance: DistanceRange::Farther,
            ..SearchFilters::default()
        };
        let names: Vec<String> = filter_listings(&listings, &farther)
            .into_iter()
            .map(|l| l.name)
            .collect();
        // "across the river" never parses, so Mystery Lodge stays out.
        assert_eq!(
            names,
            ["Budget Stay Hostel", "Elite Girls Hostel", "Sunrise Boys Hostel"]
        );
    }

    #[test]
    fn all_dimensions_combine_conjunctively() {
        let listings = campus();
        let filters = SearchFilters {
            query: "hostel".to_string(),
            price: PriceRange::Mid,
            room_type: Some(RoomType::Single),
            hostel_type: Some(HostelType::Girls),
            distance: DistanceRange::Nearby,
            amenities: ["WiFi", "AC"].iter().map(ToString::to_string).collect(),
            sort: None,
        };
        let results = filter_listings(&listings, &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Elite Girls Hostel");
    }

    #[test]
    fn amenity_filter_requires_superset() {
        let listings = campus();
        let filters = SearchFilters {
            amenities: ["WiFi", "Laundry"].iter().map(ToString::to_string).collect(),
            ..SearchFilters::default()
        };
        let results = filter_listings(&listings, &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Sunrise Boys Hostel");
    }

    #[test]
    fn sorting_by_price_runs_both_directions() {
        let listings = campus();

        let asc = SearchFilters {
            sort: Some(SortSpec {
                key: SortKey::Price,
                order: SortOrder::Asc,
            }),
            ..SearchFilters::default()
        };
        let prices: Vec<u32> = filter_listings(&listings, &asc)
            .into_iter()
            .map(|l| l.price)
            .collect();
        assert_eq!(prices, [6500, 8000, 9500, 14000]);

        let desc = SearchFilters {
            sort: Some(SortSpec {
                key: SortKey::Price,
                order: SortOrder::Desc,
            }),
            ..SearchFilters::default()
        };
        let prices: Vec<u32> = filter_listings(&listings, &desc)
            .into_iter()
            .map(|l| l.price)
            .collect();
        assert_eq!(prices, [14000, 9500, 8000, 6500]);
    }

    #[test]
    fn unparseable_distance_sorts_last_in_both_directions() {
        let listings = campus();

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let filters = SearchFilters {
                sort: Some(SortSpec {
                    key: SortKey::Distance,
                    order,
                }),
                ..SearchFilters::default()
            };
            let names: Vec<String> = filter_listings(&listings, &filters)
                .into_iter()
                .map(|l| l.name)
                .collect();
            assert_eq!(names.last().map(String::as_str), Some("Mystery Lodge"));
        }
    }

    #[test]
    fn bracket_ids_round_trip_and_reject_unknowns() {
        assert_eq!(PriceRange::from_id("budget"), Some(PriceRange::Budget));
        assert_eq!(PriceRange::from_id("luxury"), None);
        assert_eq!(DistanceRange::from_id("walking"), Some(DistanceRange::Walking));
        assert_eq!(DistanceRange::from_id("teleport"), None);
    }
}
