//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes for the terminal renderer, supporting two built-in palettes
//! and custom themes loaded from TOML files. Colors are hex strings converted
//! to 24-bit ANSI escape sequences at render time.
//!
//! # Built-in Themes
//!
//! - `campus-dark`: dark palette (default)
//! - `campus-light`: the directory's original light palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#3b82f6"
//! selection_fg = "#f9fafb"
//! selection_bg = "#3b82f6"
//! text_normal = "#1f2937"
//! text_dim = "#6b7280"
//! border = "#e5e7eb"
//! search_bar_border = "#14b8a6"
//! match_highlight_fg = "#1f2937"
//! match_highlight_bg = "#f59e0b"
//! empty_state_fg = "#3b82f6"
//! favorite_fg = "#f97316"
//! ```

use crate::domain::error::{HostelfinderError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Query match highlight foreground.
    pub match_highlight_fg: String,
    /// Query match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Favorite star indicator color.
    pub favorite_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `campus-dark`, `campus-light`. Returns `None` for
    /// unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "campus-dark" => Some(Self::campus_dark()),
            "campus-light" => Some(Self::campus_light()),
            _ => None,
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`HostelfinderError::Theme`] if the file cannot be read or
    /// parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| HostelfinderError::Theme(format!("failed to read theme file: {e}")))?;
        toml::from_str(&contents)
            .map_err(|e| HostelfinderError::Theme(format!("failed to parse theme file: {e}")))
    }

    /// The dark palette.
    #[must_use]
    pub fn campus_dark() -> Self {
        Self {
            name: "campus-dark".to_string(),
            colors: ThemeColors {
                header_fg: "#60a5fa".to_string(),
                header_bg: None,
                selection_fg: "#111827".to_string(),
                selection_bg: "#60a5fa".to_string(),
                text_normal: "#e5e7eb".to_string(),
                text_dim: "#6b7280".to_string(),
                border: "#374151".to_string(),
                search_bar_border: "#2dd4bf".to_string(),
                match_highlight_fg: "#111827".to_string(),
                match_highlight_bg: "#f59e0b".to_string(),
                empty_state_fg: "#60a5fa".to_string(),
                favorite_fg: "#fb923c".to_string(),
            },
        }
    }

    /// The original light palette.
    #[must_use]
    pub fn campus_light() -> Self {
        Self {
            name: "campus-light".to_string(),
            colors: ThemeColors {
                header_fg: "#3b82f6".to_string(),
                header_bg: Some("#f9fafb".to_string()),
                selection_fg: "#f9fafb".to_string(),
                selection_bg: "#3b82f6".to_string(),
                text_normal: "#1f2937".to_string(),
                text_dim: "#6b7280".to_string(),
                border: "#e5e7eb".to_string(),
                search_bar_border: "#14b8a6".to_string(),
                match_highlight_fg: "#1f2937".to_string(),
                match_highlight_bg: "#f59e0b".to_string(),
                empty_state_fg: "#3b82f6".to_string(),
                favorite_fg: "#f97316".to_string(),
            },
        }
    }

    /// ANSI foreground escape for a hex color.
    ///
    /// Falls back to the reset sequence when the hex string is malformed.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        match parse_hex(hex) {
            Some((r, g, b)) => format!("\u{1b}[38;2;{r};{g};{b}m"),
            None => Self::reset(),
        }
    }

    /// ANSI background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        match parse_hex(hex) {
            Some((r, g, b)) => format!("\u{1b}[48;2;{r};{g};{b}m"),
            None => Self::reset(),
        }
    }

    /// ANSI bold escape.
    #[must_use]
    pub fn bold() -> String {
        "\u{1b}[1m".to_string()
    }

    /// ANSI dim escape.
    #[must_use]
    pub fn dim() -> String {
        "\u{1b}[2m".to_string()
    }

    /// ANSI reset escape.
    #[must_use]
    pub fn reset() -> String {
        "\u{1b}[0m".to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::campus_dark()
    }
}

/// Parses `#rrggbb` into an RGB triple.
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
