//! View model types representing renderable UI state.
//!
//! Immutable view models computed from application state, consumed by the
//! renderer. They contain no business logic, only display-ready data such as
//! pre-computed substring highlight ranges and selection flags.

use crate::domain::{HostelType, RoomType};

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows to display in the listing table.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Header information (view title, count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// One-line summary of active structured filters, when any.
    pub filter_summary: Option<String>,

    /// Empty-state message when no listings are visible.
    pub empty_state: Option<EmptyState>,

    /// Search bar state when search mode is active.
    pub search_bar: Option<SearchBarInfo>,
}

/// Display information for a single listing row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Listing name, possibly truncated for the column width.
    pub name: String,

    /// Address, truncated to the remaining width.
    pub address: String,

    /// Monthly price in rupees.
    pub price: u32,

    /// Rating, one decimal place.
    pub rating: f64,

    /// Distance display string (e.g. "0.5 km").
    pub distance: String,

    /// Hostel category.
    pub hostel_type: HostelType,

    /// Room arrangement.
    pub room_type: RoomType,

    /// Whether the user has starred this listing.
    pub is_favorite: bool,

    /// Whether the signed-in session owns this listing.
    pub is_own: bool,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges of the name matching the search query.
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the visible listing count.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,

    /// Freshness of the selected listing (e.g. "updated 3h ago"), shown
    /// right-aligned when a listing is selected.
    pub selection: Option<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No hostels match").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
