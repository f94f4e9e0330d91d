//! Composable UI component renderers.
//!
//! Specialized rendering components for different UI elements, following a
//! component-based architecture. Each component is responsible for rendering
//! one part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with view name and listing count
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`table`]: Hostel list with columns (NAME, PRICE, TYPE, ROOM, DIST, RATING, ADDRESS)
//! - [`empty`]: Empty state message when no listings are visible
//!
//! # Layout Modes
//!
//! The module provides two high-level layout functions:
//!
//! - [`render_normal_mode`]: Header + Filter line + Table + Footer
//! - [`render_search_mode`]: Header + `SearchBar` + Filter line + Table + Footer

mod empty;
mod footer;
mod header;
mod search;
mod table;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UIViewModel};

use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/table, table/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the active filter summary line at the specified row.
///
/// Shows the labels of every active structured filter joined with separators,
/// or a blank line when no filters are active so the table always starts at
/// the same row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_filter_line(row: usize, summary: Option<&String>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match summary {
        Some(text) => {
            let shown: String = text.chars().take(cols.saturating_sub(10)).collect();
            print!("{}", Theme::fg(&theme.colors.search_bar_border));
            print!(" Filters: ");
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{shown}");
            let used = 10 + shown.chars().count();
            print!("{}", " ".repeat(cols.saturating_sub(used)));
            print!("{}", Theme::reset());
        }
        None => {
            print!("{}", " ".repeat(cols));
        }
    }
    row + 1
}

/// Renders the normal mode layout (no search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Filter line]
/// [Table Headers]
/// [Table Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// # Line Accounting
///
/// Reserves 7 lines for chrome (blank, header, 2 borders, filter line, header
/// row, footer). Fills remaining space with table rows and blank lines.
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_line(current_row, vm.filter_summary.as_ref(), theme, cols);
    current_row = render_table_headers(current_row, theme);
    let _current_row = render_table_rows(current_row, &vm.display_items, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the search mode layout (with search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Filter line]
/// [Table Headers]
/// [Table Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// # Line Accounting
///
/// Reserves 10 lines for chrome (blank, header, 2 borders, search bar
/// [3 lines], filter line, header row, footer). Fills remaining space with
/// table rows and blank lines.
pub fn render_search_mode(
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    current_row = render_filter_line(current_row, vm.filter_summary.as_ref(), theme, cols);
    current_row = render_table_headers(current_row, theme);
    let _current_row = render_table_rows(current_row, &vm.display_items, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
