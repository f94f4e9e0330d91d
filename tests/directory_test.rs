#[cfg(test)]
mod directory_flow {
    use hostelfinder::auth::Session;
    use hostelfinder::forms::ListingForm;
    use hostelfinder::storage::{JsonStorage, ListingRecord, ListingStorage};
    use hostelfinder::store::{seed_listings, ListingStore};
    use hostelfinder::ui::Theme;
    use hostelfinder::{handle_event, Action, AppState, Event, Listing, ViewMode};

    fn seeded_store() -> ListingStore {
        let mut store = ListingStore::new();
        for draft in seed_listings() {
            store.create(draft);
        }
        store
    }

    fn verified_state(store: &ListingStore) -> AppState {
        let session = Session::new("owner1", "priya@university.edu", true);
        AppState::new(store.list(), session, Theme::default())
    }

    #[test]
    fn created_listing_appears_first_and_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");

        let mut store = seeded_store();
        let mut state = verified_state(&store);
        let mut storage = JsonStorage::new(path.clone()).unwrap();

        let form = ListingForm {
            name: "Green View Hostel".to_string(),
            address: "12 Institute Lane".to_string(),
            price: "7200".to_string(),
            contact_number: "+91 9000000000".to_string(),
            ..ListingForm::default()
        };

        let (should_render, actions) =
            handle_event(&mut state, &mut store, &Event::SubmitListing(form)).unwrap();
        assert!(should_render);
        assert!(actions.contains(&Action::PersistListings));

        let records: Vec<ListingRecord> =
            store.list().into_iter().map(ListingRecord::from).collect();
        storage.replace_all(&records).unwrap();
        drop(storage);

        let reloaded = JsonStorage::new(path).unwrap();
        let restored: Vec<Listing> = reloaded
            .load_all()
            .unwrap()
            .into_iter()
            .map(Listing::from)
            .collect();
        assert_eq!(restored.len(), 4);
        assert_eq!(restored[0].name, "Green View Hostel");
        assert_eq!(restored[0].owner_id.as_deref(), Some("owner1"));
    }

    #[test]
    fn unverified_session_cannot_create_listings() {
        let mut store = seeded_store();
        let session = Session::new("visitor", "new@campus.edu", false);
        let mut state = AppState::new(store.list(), session, Theme::default());

        let form = ListingForm {
            name: "Green View Hostel".to_string(),
            address: "12 Institute Lane".to_string(),
            price: "7200".to_string(),
            contact_number: "+91 9000000000".to_string(),
            ..ListingForm::default()
        };

        let before = store.len();
        let (_, actions) =
            handle_event(&mut state, &mut store, &Event::SubmitListing(form)).unwrap();
        assert_eq!(store.len(), before);
        assert!(actions
            .iter()
            .any(|a| matches!(a, Action::ShowMessage(m) if m.contains("Verify"))));
    }

    #[test]
    fn favorite_toggle_survives_a_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");

        let mut store = seeded_store();
        let mut state = verified_state(&store);

        // Sunrise is the oldest seed, so it sits last in browse order.
        let target_id = store.list().last().map(|l| l.id.clone()).unwrap();
        handle_event(&mut state, &mut store, &Event::KeyUp).unwrap();
        assert_eq!(state.selected_listing().map(|l| l.id.clone()), Some(target_id.clone()));

        let (_, actions) = handle_event(&mut state, &mut store, &Event::ToggleFavorite).unwrap();
        assert!(actions.contains(&Action::PersistListings));

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        let records: Vec<ListingRecord> =
            store.list().into_iter().map(ListingRecord::from).collect();
        storage.replace_all(&records).unwrap();
        drop(storage);

        let restored: Vec<Listing> = JsonStorage::new(path)
            .unwrap()
            .load_all()
            .unwrap()
            .into_iter()
            .map(Listing::from)
            .collect();
        let sunrise = restored.iter().find(|l| l.id == target_id).unwrap();
        assert!(sunrise.is_favorite);
    }

    #[test]
    fn deleting_someone_elses_listing_is_refused() {
        let mut store = seeded_store();
        let mut state = verified_state(&store);

        // Selection starts on the newest seed, which belongs to owner3, not
        // the signed-in owner1.
        let before = store.len();
        let (_, actions) = handle_event(&mut state, &mut store, &Event::DeleteListing).unwrap();
        assert_eq!(store.len(), before);
        assert!(actions
            .iter()
            .any(|a| matches!(a, Action::ShowMessage(m) if m.contains("owner"))));
    }

    #[test]
    fn my_listings_view_shows_only_owned_hostels() {
        let mut store = seeded_store();
        let mut state = verified_state(&store);

        handle_event(&mut state, &mut store, &Event::ShowMyListings).unwrap();
        assert_eq!(state.view_mode, ViewMode::MyListings);
        assert_eq!(state.filtered_listings.len(), 1);
        assert_eq!(state.filtered_listings[0].name, "Sunrise Boys Hostel");
    }

    #[test]
    fn live_search_narrows_and_escape_restores() {
        let mut store = seeded_store();
        let mut state = verified_state(&store);

        handle_event(&mut state, &mut store, &Event::SearchMode).unwrap();
        for c in "girls".chars() {
            handle_event(&mut state, &mut store, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.filtered_listings.len(), 1);
        assert_eq!(state.filtered_listings[0].name, "Elite Girls Hostel");

        handle_event(&mut state, &mut store, &Event::ExitSearch).unwrap();
        assert_eq!(state.filtered_listings.len(), 3);
    }
}
