//! Footer component renderer.
//!
//! Renders the footer help bar with centered keybinding hints.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling, and
/// the selected listing's freshness right-aligned when it fits beside the
/// hints. Pads the line to fill the entire terminal width.
///
/// # Parameters
///
/// * `row` - Row position to render the footer (1-indexed)
/// * `footer` - Footer information (keybinding text, selection freshness)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Truncation
///
/// If the help text exceeds terminal width, it is truncated to fit. This
/// prevents layout corruption on narrow terminals.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text: String = footer.keybindings.chars().take(cols).collect();

    let text_len = help_text.chars().count();
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");

    let trailing = cols.saturating_sub(padding + text_len);
    match &footer.selection {
        // Right-aligned with one trailing space, only when a gap remains
        // between the hints and the freshness text.
        Some(selection) if selection.chars().count() + 2 <= trailing => {
            let selection_len = selection.chars().count() + 1;
            print!("{}", " ".repeat(trailing - selection_len));
            print!("{selection} ");
        }
        _ => print!("{}", " ".repeat(trailing)),
    }
    print!("{}", Theme::reset());
    row + 1
}
