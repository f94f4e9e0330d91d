//! Input and view mode state types for the application.
//!
//! These enums control keybinding interpretation and which listings are
//! visible before search filtering is applied.
//!
//! # State Machine
//!
//! Input modes:
//! - **Normal**: default navigation and command mode
//! - **Search**: active free-text search, with typing or result-navigation focus
//!
//! View modes mirror the directory's tabs:
//! - **Browse**: every listing
//! - **Favorites**: listings the user has starred
//! - **`MyListings`**: listings owned by the signed-in user

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    Typing,

    /// User is navigating through filtered results.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// View filtering mode determining which listings are displayed.
///
/// Applied before the structured filters; changes the header title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// All listings, newest-first.
    Browse,

    /// Only listings marked as favorites.
    Favorites,

    /// Only listings owned by the signed-in user.
    MyListings,
}

impl ViewMode {
    /// Header title for this view.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Browse => "All Hostels",
            Self::Favorites => "Favorites",
            Self::MyListings => "Your Listings",
        }
    }
}
