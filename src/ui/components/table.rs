//! Listing table component renderer.
//!
//! Renders the hostel list as a multi-column table with NAME, PRICE, TYPE,
//! ROOM, DIST, RATING, and ADDRESS columns. Supports selection highlighting,
//! search match highlighting, and favorite/ownership markers.

use crate::ui::helpers::{self, format_price, format_rating, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Fixed width of the NAME column.
const NAME_WIDTH: usize = 30;

/// Combined width of the fixed columns between NAME and ADDRESS.
const FIXED_COLUMNS_WIDTH: usize = 42;

/// Renders the table column headers at the specified row.
///
/// Displays the column captions with bold styling and theme colors. Uses the
/// same fixed column widths as the row renderer.
///
/// # Parameters
///
/// * `row` - Row position to render the headers (1-indexed)
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<NAME_WIDTH$}{:<12}{:<7}{:<11}{:<7}{:<5}{:<}",
        "NAME", "PRICE", "TYPE", "ROOM", "DIST", "★", "ADDRESS"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Parameters
///
/// * `row` - Starting row position for the table (1-indexed)
/// * `items` - List of display items to render
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns (for padding)
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single table row at the specified row position.
///
/// Displays one hostel listing with:
/// - Favorite marker (`♥`) and ownership marker (`*`) before the name
/// - NAME column (30 chars fixed width, left-aligned)
/// - PRICE, TYPE, ROOM, DIST, RATING columns (fixed widths)
/// - ADDRESS column (remaining width)
/// - Selection highlighting (full row background)
/// - Search match highlighting on the name (character ranges)
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Normal text color
///
/// The row is padded to fill the entire terminal width to ensure consistent
/// selection background rendering.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let mut indicator_len = 0;
    if item.is_favorite {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.favorite_fg));
        }
        print!("♥ ");
        indicator_len += 2;
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    }
    if item.is_own {
        print!("* ");
        indicator_len += 2;
    }

    if item.highlight_ranges.is_empty() {
        print!("{}", item.name);
    } else {
        helpers::render_highlighted_text(
            &item.name,
            &item.highlight_ranges,
            theme,
            item.is_selected,
        );
    }

    let name_visual_len = item.name.chars().count().min(NAME_WIDTH - 2) + indicator_len;
    print!("{}", " ".repeat(NAME_WIDTH.saturating_sub(name_visual_len)));

    print!("{:<12}", format_price(item.price));
    print!("{:<7}", item.hostel_type);
    print!("{:<11}", item.room_type);
    print!("{:<7}", item.distance);
    print!("{:<5}", format_rating(item.rating));

    print!("{}", item.address);
    let address_len = item.address.chars().count();

    let line_len = NAME_WIDTH + FIXED_COLUMNS_WIDTH + address_len;
    let padding = cols.saturating_sub(line_len);
    print!("{}", " ".repeat(padding));

    print!("{}", Theme::reset());
    row + 1
}
