//! Hostelfinder: a terminal directory of student hostels.
//!
//! Hostelfinder is an interactive hostel directory that provides:
//! - Substring-searchable listings with structured filters (price bracket,
//!   distance, hostel type, room type, amenities)
//! - Stable sorting by price, rating, or distance in either direction
//! - Favorites, ownership-gated editing, and a guided listing intake form
//! - Persistent state backed by JSON file storage
//! - Session-aware views (all hostels, favorites, your listings)

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Query Layer   │
//! │ (ui/)         │   │ (storage/)    │   │ (query/)      │
//! │ - Rendering   │   │ - JSON I/O    │   │ - Filtering   │
//! │ - Theming     │   │ - Records     │   │ - Sorting     │
//! │ - Components  │   │ - Backend API │   │ - Brackets    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Store & Support Layers                     │
//! │  - Listing model, errors (domain/)                  │
//! │  - In-memory listing store (store/)                 │
//! │  - Sessions and credential checks (auth/)           │
//! │  - Listing intake form (forms/)                     │
//! │  - Platform paths (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber on stderr                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`auth`]: Session identity and credential validation
//! - [`domain`]: Core domain types (Listing, errors)
//! - [`forms`]: Listing intake form with validation
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`query`]: Filter criteria and the matching/sorting engine
//! - [`storage`]: JSON file persistence layer
//! - [`store`]: In-memory listing store with id allocation
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Diagnostic tracing
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Parse configuration from CLI arguments and optional TOML file
//!    - Initialize tracing (optional)
//!    - Open JSON storage and hydrate the listing store (seeding demo data
//!      on first run when enabled)
//!    - Create `AppState` with theme and session
//!
//! 2. **Event Loop**:
//!    - Read user input and translate it into events
//!    - `handle_event` mutates the store and state, emitting actions
//!    - Execute actions (persist listings, show messages, quit)
//!    - Re-render when the handler requests it
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```rust
//! use hostelfinder::{handle_event, initialize, Config, Event};
//! use hostelfinder::store::ListingStore;
//!
//! let config = Config::default();
//! let mut store = ListingStore::default();
//! let mut state = initialize(&config);
//! state.sync_listings(store.list());
//!
//! let (should_render, actions) = handle_event(&mut state, &mut store, &Event::KeyDown)?;
//! // Execute actions...
//! # Ok::<(), hostelfinder::HostelfinderError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Newest-First Ordering
//!
//! New listings are prepended to the store and carry strictly increasing
//! creation timestamps, so the unsorted view always shows the most recent
//! hostels first and explicit sorts break ties in that same order.
//!
//! ## Conjunctive Filtering
//!
//! All active filter criteria must match for a listing to appear. Filters are
//! typed at the boundary; unknown bracket or category identifiers never reach
//! the matching engine.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes expensive operations (match highlighting, truncation)

pub mod app;
pub mod auth;
pub mod domain;
pub mod forms;
pub mod infrastructure;
pub mod query;
pub mod storage;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, ViewMode};
pub use auth::Session;

use auth::{validate_email, AuthProvider, LocalAuth};
pub use domain::{HostelfinderError, Listing, Result};
pub use query::SearchFilters;
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Runtime configuration.
///
/// Values may come from a TOML config file, CLI arguments, or both; CLI
/// arguments win. Every field has a default so a bare invocation works.
///
/// # Example
///
/// ```toml
/// # ~/.config/hostelfinder/config.toml
/// data_file = "~/.local/share/hostelfinder/listings.json"
/// seed_demo_data = true
/// theme = "campus-light"
/// trace_level = "debug"
/// user_id = "owner1"
/// user_email = "priya@university.edu"
/// user_verified = true
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the JSON listings file.
    ///
    /// Tilde-prefixed paths are expanded against `$HOME`. Default:
    /// `~/.local/share/hostelfinder/listings.json`.
    pub data_file: Option<String>,

    /// Whether to seed demo listings when the storage file is empty.
    ///
    /// Default: `true`.
    pub seed_demo_data: bool,

    /// Built-in theme name to use.
    ///
    /// Options: `campus-dark`, `campus-light`. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for diagnostic output.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Identity of the signed-in user, used for ownership checks.
    pub user_id: Option<String>,

    /// Email of the signed-in user.
    pub user_email: Option<String>,

    /// Whether the signed-in user has verified their email.
    ///
    /// Unverified sessions cannot create listings. Default: `false`.
    pub user_verified: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            seed_demo_data: true,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            user_id: None,
            user_email: None,
            user_verified: false,
        }
    }
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// CLI arguments are collected into a `BTreeMap<String, String>` before
    /// being handed here. Extracts and parses typed values with fallback
    /// defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `data_file`: String → `Option<String>`
    /// - `seed_demo_data`: `"true"`/`"false"` → `bool` (defaults to `true`)
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    /// - `user_id` / `user_email`: String → `Option<String>`
    /// - `user_verified`: `"true"`/`"false"` → `bool` (defaults to `false`)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use hostelfinder::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "campus-light".to_string());
    /// map.insert("user_verified".to_string(), "true".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("campus-light"));
    /// assert!(config.user_verified);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let seed_demo_data = config
            .get("seed_demo_data")
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(true);

        let user_verified = config
            .get("user_verified")
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            data_file: config.get("data_file").cloned(),
            seed_demo_data,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            user_id: config.get("user_id").cloned(),
            user_email: config.get("user_email").cloned(),
            user_verified,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`HostelfinderError::Config`] if the file cannot be read or
    /// parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| HostelfinderError::Config(format!("failed to read config file: {e}")))?;
        toml::from_str(&contents)
            .map_err(|e| HostelfinderError::Config(format!("failed to parse config file: {e}")))
    }

    /// Builds the identity provider described by this configuration.
    ///
    /// Signed out when no user is configured. A configured email that fails
    /// validation is logged but does not block sign-in; the backend that
    /// issued the identity is authoritative.
    #[must_use]
    pub fn auth_provider(&self) -> LocalAuth {
        if self.user_id.is_none() && self.user_email.is_none() {
            return LocalAuth::signed_out();
        }

        let user_id = self.user_id.clone().unwrap_or_else(|| "owner1".to_string());
        let email = self
            .user_email
            .clone()
            .unwrap_or_else(|| "demo@hostelfinder.local".to_string());

        let check = validate_email(&email);
        if !check.is_valid {
            tracing::warn!(
                email = %email,
                reason = check.error.as_deref().unwrap_or("invalid"),
                "configured user email failed validation"
            );
        }

        LocalAuth::signed_in(Session::new(user_id, email, self.user_verified))
    }

    /// Resolves the session identity for this configuration.
    ///
    /// Asks the configured [`AuthProvider`] for the current session and falls
    /// back to a local demo identity when nobody is signed in, so the
    /// favorites and ownership features remain usable out of the box.
    #[must_use]
    pub fn session(&self) -> Session {
        self.auth_provider()
            .current_session()
            .unwrap_or_else(|| Session::new("owner1", "demo@hostelfinder.local", false))
    }
}

/// Initializes the application with configuration.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - Session identity built from the configuration
/// - Empty listing list (populated after storage hydration via
///   [`AppState::sync_listings`])
///
/// # Example
///
/// ```rust
/// use hostelfinder::{initialize, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// // State is ready for event processing
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing hostelfinder");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(vec![], config.session(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_map_parses_typed_values() {
        let mut map = BTreeMap::new();
        map.insert("data_file".to_string(), "~/hostels.json".to_string());
        map.insert("seed_demo_data".to_string(), "false".to_string());
        map.insert("theme".to_string(), "campus-light".to_string());
        map.insert("user_id".to_string(), "owner2".to_string());
        map.insert("user_verified".to_string(), "true".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.data_file.as_deref(), Some("~/hostels.json"));
        assert!(!config.seed_demo_data);
        assert_eq!(config.theme_name.as_deref(), Some("campus-light"));
        assert_eq!(config.user_id.as_deref(), Some("owner2"));
        assert!(config.user_verified);
    }

    #[test]
    fn config_defaults_are_usable() {
        let config = Config::default();
        assert!(config.seed_demo_data);
        assert!(!config.user_verified);

        let session = config.session();
        assert_eq!(session.user_id, "owner1");
        assert!(!session.verified);
    }

    #[test]
    fn default_config_is_signed_out_with_demo_fallback() {
        let config = Config::default();
        assert!(config.auth_provider().current_session().is_none());
        assert_eq!(config.session().email, "demo@hostelfinder.local");
    }

    #[test]
    fn configured_user_signs_in_through_the_provider() {
        let config = Config {
            user_id: Some("owner2".to_string()),
            user_email: Some("elite@campus.edu".to_string()),
            user_verified: true,
            ..Default::default()
        };

        let session = config.auth_provider().current_session().unwrap();
        assert_eq!(session.user_id, "owner2");
        assert_eq!(session.email, "elite@campus.edu");
        assert!(session.verified);
        assert_eq!(config.session(), session);
    }

    #[test]
    fn initialize_respects_theme_name() {
        let config = Config {
            theme_name: Some("campus-light".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "campus-light");
    }

    #[test]
    fn initialize_falls_back_on_unknown_theme() {
        let config = Config {
            theme_name: Some("nonexistent".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "campus-dark");
    }
}
