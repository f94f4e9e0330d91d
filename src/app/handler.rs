//! Event handling and state transition logic.
//!
//! The event handler processes user input, mutates the listing store and
//! application state, and returns actions for the shim to execute. It is the
//! primary control-flow coordinator for the directory's screens.
//!
//! # Event Categories
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Search input**: `SearchMode`, `FocusSearchBar`, `FocusResults`,
//!   `ExitSearch`, `Char`, `Backspace`, `Escape`
//! - **Structured filters**: bracket cycling, amenity toggling, sorting
//! - **Views**: `ShowBrowse`, `ShowFavorites`, `ShowMyListings`
//! - **Mutations**: `ToggleFavorite`, `DeleteListing`, `SubmitListing`
//!
//! Mutation events are the only place the store is touched. After a mutation
//! the handler resyncs the state snapshot and emits
//! [`Action::PersistListings`] so the durable copy follows along.
//!
//! # Ownership policy
//!
//! Deleting (and any future editing of) a listing requires the signed-in
//! session to own it. The check uses the real authenticated identity, never a
//! hardcoded id. Favorite toggling is personal bookkeeping and is not gated.

use crate::app::modes::{InputMode, SearchFocus, ViewMode};
use crate::app::{Action, AppState};
use crate::domain::error::{HostelfinderError, Result};
use crate::forms::ListingForm;
use crate::query::{SortKey, SortOrder, SortSpec};
use crate::store::ListingStore;

/// Events triggered by user input.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves the selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Exits the directory.
    Quit,

    /// Flips the favorite flag on the selected listing.
    ToggleFavorite,
    /// Removes the selected listing, if the session owns it.
    DeleteListing,
    /// Validates an add-listing form and creates the listing.
    SubmitListing(ListingForm),

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the result list (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the query and returns to normal mode.
    Escape,

    /// Switches to the all-listings view.
    ShowBrowse,
    /// Switches to the favorites view.
    ShowFavorites,
    /// Switches to the signed-in user's listings.
    ShowMyListings,

    /// Advances the price bracket to its next value.
    CyclePriceRange,
    /// Advances the distance bracket to its next value.
    CycleDistanceRange,
    /// Advances the room type constraint (any → single → sharing → dormitory).
    CycleRoomType,
    /// Advances the hostel type constraint (any → boys → girls → coed).
    CycleHostelType,
    /// Adds or removes a required amenity.
    ToggleAmenityFilter(String),
    /// Cycles sorting on a key: ascending → descending → off.
    CycleSort(SortKey),
    /// Resets every filter dimension and the query.
    ClearFilters,
}

/// Processes an event, mutates state and store, and returns actions.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI needs a redraw, and the side
/// effects for the shim to execute in order.
///
/// # Errors
///
/// Only internal invariant violations surface as errors. A mutation that
/// targets a vanished listing id is handled by resyncing and reporting via
/// [`Action::ShowMessage`], never by failing the caller.
#[allow(clippy::too_many_lines)]
pub fn handle_event(
    state: &mut AppState,
    store: &mut ListingStore,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::ToggleFavorite => {
            let Some(id) = state.selected_listing().map(|l| l.id.clone()) else {
                return Ok((false, vec![]));
            };
            match store.toggle_favorite(&id) {
                Ok(now_favorite) => {
                    state.sync_listings(store.list());
                    let message = if now_favorite {
                        "Added to favorites"
                    } else {
                        "Removed from favorites"
                    };
                    Ok((
                        true,
                        vec![
                            Action::PersistListings,
                            Action::ShowMessage(message.to_string()),
                        ],
                    ))
                }
                Err(HostelfinderError::NotFound { .. }) => {
                    // Selection raced a deletion; resync instead of failing.
                    state.sync_listings(store.list());
                    Ok((
                        true,
                        vec![Action::ShowMessage(
                            "That listing no longer exists".to_string(),
                        )],
                    ))
                }
                Err(e) => Err(e),
            }
        }

        Event::DeleteListing => {
            let Some(listing) = state.selected_listing().cloned() else {
                return Ok((false, vec![]));
            };

            if !state.session.owns(listing.owner_id.as_deref()) {
                tracing::debug!(id = %listing.id, "delete refused, not the owner");
                return Ok((
                    false,
                    vec![Action::ShowMessage(
                        "Only the owner can remove a listing".to_string(),
                    )],
                ));
            }

            store.delete(&listing.id);
            state.sync_listings(store.list());
            Ok((
                true,
                vec![
                    Action::PersistListings,
                    Action::ShowMessage(format!("Removed \"{}\"", listing.name)),
                ],
            ))
        }

        Event::SubmitListing(form) => {
            if !state.session.verified {
                return Ok((
                    false,
                    vec![Action::ShowMessage(
                        "Verify your email before creating listings".to_string(),
                    )],
                ));
            }

            match form.validate(&state.session) {
                Ok(draft) => {
                    let created = store.create(draft);
                    state.sync_listings(store.list());
                    tracing::info!(id = %created.id, name = %created.name, "listing submitted");
                    Ok((
                        true,
                        vec![
                            Action::PersistListings,
                            Action::ShowMessage(
                                "Hostel listing created successfully!".to_string(),
                            ),
                        ],
                    ))
                }
                Err(HostelfinderError::Validation(message)) => {
                    Ok((false, vec![Action::ShowMessage(message)]))
                }
                Err(e) => Err(e),
            }
        }

        Event::SearchMode | Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if matches!(state.input_mode, InputMode::Search(_)) {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            state.input_mode = InputMode::Normal;
            state.filters.query.clear();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                state.filters.query.push(*c);
                state.apply_filters();
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::Backspace => {
            if matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                state.filters.query.pop();
                state.apply_filters();
                Ok((true, vec![]))
            } else {
                Ok((false, vec![]))
            }
        }

        Event::ShowBrowse => {
            state.view_mode = ViewMode::Browse;
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ShowFavorites => {
            state.view_mode = ViewMode::Favorites;
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ShowMyListings => {
            state.view_mode = ViewMode::MyListings;
            state.apply_filters();
            Ok((true, vec![]))
        }

        Event::CyclePriceRange => {
            state.filters.price = state.filters.price.next();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::CycleDistanceRange => {
            state.filters.distance = state.filters.distance.next();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::CycleRoomType => {
            state.filters.room_type = cycle_option(state.filters.room_type, &crate::domain::RoomType::ALL);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::CycleHostelType => {
            state.filters.hostel_type =
                cycle_option(state.filters.hostel_type, &crate::domain::HostelType::ALL);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ToggleAmenityFilter(amenity) => {
            state.filters.toggle_amenity(amenity);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::CycleSort(key) => {
            state.filters.sort = match state.filters.sort {
                Some(SortSpec { key: current, order }) if current == *key => match order {
                    SortOrder::Asc => Some(SortSpec {
                        key: *key,
                        order: SortOrder::Desc,
                    }),
                    SortOrder::Desc => None,
                },
                _ => Some(SortSpec {
                    key: *key,
                    order: SortOrder::Asc,
                }),
            };
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            state.filters.clear();
            state.apply_filters();
            Ok((true, vec![]))
        }
    }
}

/// Advances an optional constraint through `None → variants… → None`.
fn cycle_option<T: Copy + PartialEq>(current: Option<T>, all: &[T]) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => {
            let idx = all.iter().position(|v| *v == value);
            match idx {
                Some(i) if i + 1 < all.len() => Some(all[i + 1]),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;
    use crate::store::seed_listings;
    use crate::ui::theme::Theme;

    fn setup(session: Session) -> (AppState, ListingStore) {
        let mut store = ListingStore::new();
        for draft in seed_listings() {
            store.create(draft);
        }
        let state = AppState::new(store.list(), session, Theme::default());
        (state, store)
    }

    fn owner_session() -> Session {
        // Owns "Budget Stay Hostel", the newest seed listing.
        Session::new("owner3", "owner3@campus.edu", true)
    }

    #[test]
    fn toggle_favorite_persists_and_reports() {
        let (mut state, mut store) = setup(owner_session());
        let id = state.filtered_listings[0].id.clone();

        let (_, actions) = handle_event(&mut state, &mut store, &Event::ToggleFavorite).unwrap();
        assert!(actions.contains(&Action::PersistListings));
        assert!(store.get(&id).unwrap().is_favorite);

        handle_event(&mut state, &mut store, &Event::ToggleFavorite).unwrap();
        assert!(!store.get(&id).unwrap().is_favorite);
    }

    #[test]
    fn delete_requires_ownership() {
        let (mut state, mut store) = setup(Session::new("stranger", "s@x.edu", true));
        let before = store.len();

        let (_, actions) = handle_event(&mut state, &mut store, &Event::DeleteListing).unwrap();
        assert_eq!(store.len(), before);
        assert!(matches!(actions.as_slice(), [Action::ShowMessage(_)]));
    }

    #[test]
    fn owner_can_delete_own_listing() {
        let (mut state, mut store) = setup(owner_session());
        // Selection starts on the newest listing, owned by owner3.
        let id = state.filtered_listings[0].id.clone();

        let (_, actions) = handle_event(&mut state, &mut store, &Event::DeleteListing).unwrap();
        assert!(store.get(&id).is_none());
        assert!(actions.contains(&Action::PersistListings));
    }

    #[test]
    fn submit_requires_verified_session() {
        let (mut state, mut store) = setup(Session::new("u", "u@x.edu", false));
        let before = store.len();

        let form = ListingForm {
            name: "New Place".to_string(),
            address: "1 Road".to_string(),
            price: "7000".to_string(),
            contact_number: "+91 9".to_string(),
            ..ListingForm::default()
        };
        let (_, actions) =
            handle_event(&mut state, &mut store, &Event::SubmitListing(form)).unwrap();
        assert_eq!(store.len(), before);
        assert!(matches!(actions.as_slice(), [Action::ShowMessage(_)]));
    }

    #[test]
    fn submit_creates_listing_owned_by_session() {
        let (mut state, mut store) = setup(owner_session());

        let form = ListingForm {
            name: "New Place".to_string(),
            address: "1 Road".to_string(),
            price: "7000".to_string(),
            contact_number: "+91 9".to_string(),
            ..ListingForm::default()
        };
        handle_event(&mut state, &mut store, &Event::SubmitListing(form)).unwrap();

        let newest = &state.filtered_listings[0];
        assert_eq!(newest.name, "New Place");
        assert_eq!(newest.owner_id.as_deref(), Some("owner3"));
    }

    #[test]
    fn invalid_form_reports_without_creating() {
        let (mut state, mut store) = setup(owner_session());
        let before = store.len();

        let form = ListingForm::default();
        let (_, actions) =
            handle_event(&mut state, &mut store, &Event::SubmitListing(form)).unwrap();
        assert_eq!(store.len(), before);
        assert!(matches!(actions.as_slice(), [Action::ShowMessage(_)]));
    }

    #[test]
    fn typing_in_search_mode_filters_live() {
        let (mut state, mut store) = setup(owner_session());

        handle_event(&mut state, &mut store, &Event::SearchMode).unwrap();
        for c in "budget".chars() {
            handle_event(&mut state, &mut store, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.filtered_listings.len(), 1);
        assert_eq!(state.filtered_listings[0].name, "Budget Stay Hostel");

        handle_event(&mut state, &mut store, &Event::Escape).unwrap();
        assert_eq!(state.filtered_listings.len(), 3);
        assert!(state.filters.query.is_empty());
    }

    #[test]
    fn sort_cycles_asc_desc_off() {
        let (mut state, mut store) = setup(owner_session());

        handle_event(&mut state, &mut store, &Event::CycleSort(SortKey::Price)).unwrap();
        assert_eq!(state.filtered_listings[0].price, 6_500);

        handle_event(&mut state, &mut store, &Event::CycleSort(SortKey::Price)).unwrap();
        assert_eq!(state.filtered_listings[0].price, 9_500);

        handle_event(&mut state, &mut store, &Event::CycleSort(SortKey::Price)).unwrap();
        assert!(state.filters.sort.is_none());
    }

    #[test]
    fn room_type_constraint_cycles_back_to_any() {
        let (mut state, mut store) = setup(owner_session());

        for _ in 0..=crate::domain::RoomType::ALL.len() {
            handle_event(&mut state, &mut store, &Event::CycleRoomType).unwrap();
        }
        assert!(state.filters.room_type.is_none());
    }
}
