//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! directory's screens, along with filtering, selection management, and UI
//! view model generation. It is the single source of truth for all transient
//! UI state.
//!
//! # State Components
//!
//! - **Listings**: master snapshot taken from the listing store
//! - **Filtered Listings**: subset after applying view mode and search criteria
//! - **Selection**: cursor position within filtered results
//! - **Input Mode / View Mode**: keybinding interpretation and base filtering
//! - **Filters**: the active [`SearchFilters`] built by the search screen
//! - **Session**: the signed-in identity used for ownership checks
//!
//! The state never talks to the store directly; the event handler mutates the
//! store and hands a fresh snapshot to [`AppState::sync_listings`].

use super::modes::{InputMode, SearchFocus, ViewMode};
use crate::auth::Session;
use crate::domain::Listing;
use crate::query::{self, SearchFilters};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};

/// Central application state container.
///
/// Mutated by the event handler in response to user input; view models are
/// computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Master snapshot of store contents, newest-first.
    pub listings: Vec<Listing>,

    /// Listings matching the current view mode and search criteria.
    ///
    /// Recomputed by `apply_filters()` after state changes.
    pub filtered_listings: Vec<Listing>,

    /// Zero-based index of the selected listing within `filtered_listings`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Active search criteria, rebuilt per search interaction.
    pub filters: SearchFilters,

    /// Current view filtering mode.
    pub view_mode: ViewMode,

    /// Signed-in identity; drives ownership checks and the `MyListings` view.
    pub session: Session,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates application state from an initial snapshot, session, and theme.
    ///
    /// Starts in normal input mode on the Browse view with identity filters.
    #[must_use]
    pub fn new(listings: Vec<Listing>, session: Session, theme: Theme) -> Self {
        let mut state = Self {
            listings,
            filtered_listings: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            filters: SearchFilters::default(),
            view_mode: ViewMode::Browse,
            session,
            theme,
        };
        state.apply_filters();
        state
    }

    /// Replaces the master snapshot after a store mutation and re-filters.
    pub fn sync_listings(&mut self, listings: Vec<Listing>) {
        self.listings = listings;
        self.apply_filters();
    }

    /// Moves the selection cursor down, wrapping to the top at the end.
    pub fn move_selection_down(&mut self) {
        if self.filtered_listings.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_listings.len();
    }

    /// Moves the selection cursor up, wrapping to the bottom at the start.
    pub fn move_selection_up(&mut self) {
        if self.filtered_listings.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_listings.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected listing, if any.
    #[must_use]
    pub fn selected_listing(&self) -> Option<&Listing> {
        self.filtered_listings.get(self.selected_index)
    }

    /// Applies the view mode and search criteria to the master snapshot.
    ///
    /// First narrows by view mode (all / favorites / owned), then runs the
    /// query engine over the remainder, and finally clamps the selection to
    /// valid bounds.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            total = self.listings.len(),
            view_mode = ?self.view_mode,
            query_len = self.filters.query.len()
        )
        .entered();

        let base: Vec<Listing> = self
            .listings
            .iter()
            .filter(|listing| match self.view_mode {
                ViewMode::Browse => true,
                ViewMode::Favorites => listing.is_favorite,
                ViewMode::MyListings => self.session.owns(listing.owner_id.as_deref()),
            })
            .cloned()
            .collect();

        self.filtered_listings = query::filter_listings(&base, &self.filters);

        if self.filtered_listings.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_listings.len() - 1);
        }

        tracing::debug!(filtered = self.filtered_listings.len(), "filters applied");
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Handles windowing (centering the visible slice on the selection),
    /// substring-match highlighting, and the empty state.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        if self.filtered_listings.is_empty() {
            return UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header: self.compute_header(),
                footer: self.compute_footer(),
                filter_summary: self.compute_filter_summary(),
                empty_state: Some(self.compute_empty_state()),
                search_bar: self.compute_search_bar(),
            };
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered_listings.len());
        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.filtered_listings.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items: Vec<DisplayItem> = self.filtered_listings[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, listing)| {
                self.compute_display_item(listing, visible_start + relative_idx, cols)
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            filter_summary: self.compute_filter_summary(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
        }
    }

    fn compute_display_item(&self, listing: &Listing, absolute_idx: usize, cols: usize) -> DisplayItem {
        const NAME_COLUMN_WIDTH: usize = 30;

        let is_selected = absolute_idx == self.selected_index;
        let is_own = self.session.owns(listing.owner_id.as_deref());

        let name = if listing.name.chars().count() > NAME_COLUMN_WIDTH - 2 {
            let truncated: String = listing.name.chars().take(NAME_COLUMN_WIDTH - 5).collect();
            format!("{truncated}...")
        } else {
            listing.name.clone()
        };

        let max_address_width = cols.saturating_sub(NAME_COLUMN_WIDTH + 42);
        let address = Self::truncate_tail(&listing.address, max_address_width);

        let highlight_ranges = if self.filters.query.is_empty() {
            vec![]
        } else {
            Self::substring_ranges(&name, &self.filters.query)
        };

        DisplayItem {
            name,
            address,
            price: listing.price,
            rating: listing.rating,
            distance: listing.distance.clone(),
            hostel_type: listing.hostel_type,
            room_type: listing.room_type,
            is_favorite: listing.is_favorite,
            is_own,
            is_selected,
            highlight_ranges,
        }
    }

    /// Finds every case-insensitive occurrence of `query` in `text`.
    ///
    /// Returns `(start, end)` character index ranges, exclusive end. Characters
    /// are compared per position via `char::to_lowercase`, so the ranges index
    /// into `text` as rendered even when lowercasing a character changes its
    /// length (e.g. 'İ').
    fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
        let haystack: Vec<char> = text.chars().collect();
        let needle: Vec<char> = query.chars().collect();
        if needle.is_empty() || needle.len() > haystack.len() {
            return vec![];
        }

        let mut ranges = Vec::new();
        let mut i = 0;
        while i + needle.len() <= haystack.len() {
            let matched = haystack[i..i + needle.len()]
                .iter()
                .zip(&needle)
                .all(|(h, n)| h.to_lowercase().eq(n.to_lowercase()));
            if matched {
                ranges.push((i, i + needle.len()));
                i += needle.len();
            } else {
                i += 1;
            }
        }
        ranges
    }

    fn truncate_tail(text: &str, max_width: usize) -> String {
        if max_width == 0 {
            return String::new();
        }
        if text.chars().count() > max_width {
            let keep: String = text.chars().take(max_width.saturating_sub(3)).collect();
            format!("{keep}...")
        } else {
            text.to_string()
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " {} ({}) ",
                self.view_mode.title(),
                self.filtered_listings.len()
            ),
        }
    }

    /// One-line summary of active structured filters, `None` when idle.
    fn compute_filter_summary(&self) -> Option<String> {
        use crate::query::{DistanceRange, PriceRange};

        let mut parts = Vec::new();
        if self.filters.price != PriceRange::All {
            parts.push(self.filters.price.label().to_string());
        }
        if let Some(room_type) = self.filters.room_type {
            parts.push(room_type.label().to_string());
        }
        if let Some(hostel_type) = self.filters.hostel_type {
            parts.push(hostel_type.label().to_string());
        }
        if self.filters.distance != DistanceRange::All {
            parts.push(self.filters.distance.label().to_string());
        }
        if !self.filters.amenities.is_empty() {
            let amenities: Vec<&str> =
                self.filters.amenities.iter().map(String::as_str).collect();
            parts.push(amenities.join("+"));
        }
        if let Some(sort) = self.filters.sort {
            parts.push(format!("sort: {:?} {:?}", sort.key, sort.order).to_lowercase());
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("  |  "))
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.view_mode) {
            (InputMode::Search(SearchFocus::Typing), _) => {
                "ESC: exit search  Enter: results  Type to filter".to_string()
            }
            (InputMode::Search(SearchFocus::Navigating), _) => {
                "ESC: exit search  /: edit query  j/k: navigate  f: favorite".to_string()
            }
            (InputMode::Normal, ViewMode::MyListings) => {
                "j/k: navigate  f: favorite  x: remove  b: browse  q: quit".to_string()
            }
            (InputMode::Normal, _) => {
                "j/k: navigate  /: search  f: favorite  p/r/t/d: filters  v/m: views  q: quit"
                    .to_string()
            }
        };
        let selection = self
            .selected_listing()
            .map(|listing| format!("updated {}", listing.time_ago()));
        FooterInfo {
            keybindings,
            selection,
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        let (message, subtitle) = if self.listings.is_empty() {
            (
                "No hostels listed yet".to_string(),
                "Use the add command to create the first listing".to_string(),
            )
        } else {
            (
                "No hostels match".to_string(),
                "Relax a filter or clear the search query".to_string(),
            )
        };
        EmptyState { message, subtitle }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.filters.query.clone(),
            })
        } else {
            None
        }
    }

    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        // Header, column captions, filter line, footer, and the search bar
        // when it is open.
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(7),
            InputMode::Search(_) => total_rows.saturating_sub(10),
        }
    }
}
