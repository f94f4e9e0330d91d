//! Terminal shim and entry point.
//!
//! The thin integration layer between the hostelfinder library and the
//! terminal. It parses configuration, wires up storage and the listing store,
//! translates input lines into library events, and executes resulting
//! actions.
//!
//! # Startup Flow
//!
//! 1. **Configuration**: Parse `--config <file>` and `key=value` arguments
//! 2. **Tracing**: Initialize the diagnostic subscriber (stderr)
//! 3. **Storage**: Open the JSON listings file and hydrate the store,
//!    seeding demo listings on first run when enabled
//! 4. **State**: Create `AppState` with theme and session
//! 5. **Loop**: Read commands, delegate to `handle_event`, execute actions,
//!    re-render when requested
//!
//! # Command Mapping
//!
//! Input lines are translated to library events:
//!
//! Normal mode:
//! - `j` / `down`: Move down — `k` / `up`: Move up
//! - `f`: Toggle favorite on the selected listing
//! - `x`: Delete the selected listing (owners only)
//! - `/`: Enter search mode
//! - `b` / `v` / `m`: Browse / Favorites / Your Listings views
//! - `p`: Cycle price bracket — `d`: Cycle distance bracket
//! - `r`: Cycle room type — `t`: Cycle hostel type
//! - `a <amenity>`: Toggle an amenity filter
//! - `s <price|rating|distance>`: Cycle sort on a key (asc → desc → off)
//! - `c`: Clear all filters
//! - `add <name>|<address>|<price>|<contact>[|<description>]`: Create a listing
//! - `q`: Quit
//!
//! Search mode (typing):
//! - Any line: Appended to the query character by character
//! - `<bs>`: Backspace — `<esc>`: Exit search — empty line: Focus results

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use hostelfinder::forms::ListingForm;
use hostelfinder::infrastructure::{expand_tilde, get_data_dir};
use hostelfinder::query::SortKey;
use hostelfinder::storage::{JsonStorage, ListingRecord, ListingStorage};
use hostelfinder::store::{seed_listings, ListingStore};
use hostelfinder::{
    handle_event, initialize, Action, AppState, Config, Event, InputMode, Listing, Result,
    SearchFocus,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("hostelfinder: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = parse_args()?;
    hostelfinder::observability::init_tracing(&config);

    let span = tracing::debug_span!("startup");
    let _guard = span.entered();

    let data_file = resolve_data_file(&config);
    tracing::debug!(data_file = %data_file.display(), "opening storage");
    let mut storage = JsonStorage::new(data_file)?;

    let mut store = hydrate_store(&mut storage, &config)?;
    tracing::debug!(listing_count = store.len(), "store hydrated");

    let mut state = initialize(&config);
    state.sync_listings(store.list());
    drop(_guard);

    let (rows, cols) = terminal_size();
    draw(&state, rows, cols, None);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let events = map_line(&state, line.trim_end());

        let mut should_render = false;
        let mut status = None;
        let mut quit = false;

        for event in &events {
            let (render_needed, actions) = handle_event(&mut state, &mut store, event)?;
            should_render |= render_needed;

            for action in actions {
                match action {
                    Action::Quit => quit = true,
                    Action::PersistListings => persist(&mut storage, &store)?,
                    Action::ShowMessage(message) => status = Some(message),
                }
            }
        }

        if quit {
            break;
        }
        if should_render || status.is_some() {
            draw(&state, rows, cols, status.as_deref());
        }
    }

    Ok(())
}

/// Parses CLI arguments into a configuration.
///
/// `--config <file>` loads a TOML config file; bare `key=value` arguments
/// override individual fields afterwards.
fn parse_args() -> Result<Config> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config_file = None;
    let mut overrides = BTreeMap::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            config_file = iter.next().cloned();
        } else if let Some((key, value)) = arg.split_once('=') {
            overrides.insert(key.to_string(), value.to_string());
        }
    }

    let mut config = match config_file {
        Some(path) => Config::from_file(expand_tilde(&path))?,
        None => Config::default(),
    };

    for (key, value) in &overrides {
        apply_override(&mut config, key, value);
    }

    Ok(config)
}

/// Applies one `key=value` CLI override to the configuration.
fn apply_override(config: &mut Config, key: &str, value: &str) {
    match key {
        "data_file" => config.data_file = Some(value.to_string()),
        "seed_demo_data" => config.seed_demo_data = value.parse().unwrap_or(true),
        "theme" => config.theme_name = Some(value.to_string()),
        "theme_file" => config.theme_file = Some(value.to_string()),
        "trace_level" => config.trace_level = Some(value.to_string()),
        "user_id" => config.user_id = Some(value.to_string()),
        "user_email" => config.user_email = Some(value.to_string()),
        "user_verified" => config.user_verified = value.parse().unwrap_or(false),
        _ => tracing::debug!(key = %key, "ignoring unknown configuration key"),
    }
}

/// Resolves the JSON storage path from configuration or the default location.
fn resolve_data_file(config: &Config) -> PathBuf {
    config.data_file.as_ref().map_or_else(
        || get_data_dir().join("listings.json"),
        |path| PathBuf::from(expand_tilde(path)),
    )
}

/// Hydrates the in-memory store from storage, seeding demo data on first run.
fn hydrate_store(storage: &mut JsonStorage, config: &Config) -> Result<ListingStore> {
    let records = storage.load_all()?;

    if records.is_empty() && config.seed_demo_data {
        tracing::debug!("storage empty, seeding demo listings");
        let mut store = ListingStore::new();
        for draft in seed_listings() {
            store.create(draft);
        }
        persist(storage, &store)?;
        return Ok(store);
    }

    let listings: Vec<Listing> = records.into_iter().map(Listing::from).collect();
    Ok(ListingStore::with_listings(listings))
}

/// Writes the current store snapshot through to durable storage.
fn persist(storage: &mut JsonStorage, store: &ListingStore) -> Result<()> {
    let records: Vec<ListingRecord> = store.list().into_iter().map(ListingRecord::from).collect();
    storage.replace_all(&records)
}

/// Reads the terminal size from `LINES`/`COLUMNS`, defaulting to 24x80.
fn terminal_size() -> (usize, usize) {
    let rows = std::env::var("LINES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(24);
    let cols = std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(80);
    (rows, cols)
}

/// Clears the screen, renders the UI, and prints an optional status line.
fn draw(state: &AppState, rows: usize, cols: usize, status: Option<&str>) {
    print!("\u{1b}[2J\u{1b}[H");
    hostelfinder::ui::render(state, rows, cols);

    if let Some(message) = status {
        hostelfinder::ui::helpers::position_cursor(rows, 1);
        let shown: String = message.chars().take(cols).collect();
        print!("{shown}");
    }

    let _ = std::io::stdout().flush();
}

/// Translates one input line into library events, respecting the input mode.
///
/// In search typing mode every character of the line becomes a `Char` event
/// so the filter narrows as it would with live keystrokes; the `<bs>` and
/// `<esc>` tokens map to backspace and escape.
fn map_line(state: &AppState, line: &str) -> Vec<Event> {
    if state.input_mode == InputMode::Search(SearchFocus::Typing) {
        return match line {
            "" => vec![Event::FocusResults],
            "<esc>" => vec![Event::ExitSearch],
            "<bs>" => vec![Event::Backspace],
            text => text.chars().map(Event::Char).collect(),
        };
    }

    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match command {
        "q" => Event::Quit,
        "j" | "down" => Event::KeyDown,
        "k" | "up" => Event::KeyUp,
        "f" => Event::ToggleFavorite,
        "x" => Event::DeleteListing,
        "/" => match state.input_mode {
            InputMode::Search(_) => Event::FocusSearchBar,
            InputMode::Normal => Event::SearchMode,
        },
        "<esc>" => match state.input_mode {
            InputMode::Search(_) => Event::ExitSearch,
            InputMode::Normal => Event::Escape,
        },
        "b" => Event::ShowBrowse,
        "v" => Event::ShowFavorites,
        "m" => Event::ShowMyListings,
        "p" => Event::CyclePriceRange,
        "d" => Event::CycleDistanceRange,
        "r" => Event::CycleRoomType,
        "t" => Event::CycleHostelType,
        "c" => Event::ClearFilters,
        "a" if !rest.is_empty() => Event::ToggleAmenityFilter(rest.to_string()),
        "s" => match rest {
            "price" => Event::CycleSort(SortKey::Price),
            "rating" => Event::CycleSort(SortKey::Rating),
            "distance" => Event::CycleSort(SortKey::Distance),
            _ => return vec![],
        },
        "add" => match parse_add_command(rest) {
            Some(form) => Event::SubmitListing(form),
            None => return vec![],
        },
        _ => return vec![],
    };

    vec![event]
}

/// Parses an `add` command into a listing form.
///
/// Format: `<name>|<address>|<price>|<contact>[|<description>]`. Field-level
/// validation happens in the form layer; this only splits the line.
fn parse_add_command(rest: &str) -> Option<ListingForm> {
    let mut parts = rest.split('|').map(str::trim);

    let name = parts.next()?;
    let address = parts.next()?;
    let price = parts.next()?;
    let contact_number = parts.next()?;
    let description = parts.next().unwrap_or("");

    Some(ListingForm {
        name: name.to_string(),
        address: address.to_string(),
        price: price.to_string(),
        contact_number: contact_number.to_string(),
        description: description.to_string(),
        ..ListingForm::default()
    })
}
