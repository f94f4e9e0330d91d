//! Shared rendering utilities and display formatting.
//!
//! Low-level helpers used across UI components: cursor positioning, substring
//! match highlighting with ANSI escape management, and the display formats for
//! prices and ratings.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape `\u{1b}[{row};{col}H`; coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Formats a monthly price with the rupee sign and thousands separators.
///
/// # Examples
///
/// ```
/// use hostelfinder::ui::helpers::format_price;
///
/// assert_eq!(format_price(8000), "₹8,000/mo");
/// assert_eq!(format_price(12500), "₹12,500/mo");
/// assert_eq!(format_price(500), "₹500/mo");
/// ```
#[must_use]
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("₹{grouped}/mo")
}

/// Formats a rating with one decimal and a star.
///
/// # Examples
///
/// ```
/// use hostelfinder::ui::helpers::format_rating;
///
/// assert_eq!(format_rating(4.5), "4.5★");
/// assert_eq!(format_rating(4.0), "4.0★");
/// ```
#[must_use]
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}★")
}

/// Renders text with highlighted character ranges for query matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// ranges. Highlighting is suppressed on selected rows so it does not fight
/// the selection background.
///
/// Ranges use character indices (exclusive end), not byte indices.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal: String = chars[current_pos..start.min(chars.len())].iter().collect();
            print!("{normal}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start.min(chars.len())..end.min(chars.len())]
            .iter()
            .collect();
        print!("{highlighted}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_price_digits() {
        assert_eq!(format_price(0), "₹0/mo");
        assert_eq!(format_price(999), "₹999/mo");
        assert_eq!(format_price(6500), "₹6,500/mo");
        assert_eq!(format_price(1_250_000), "₹1,250,000/mo");
    }

    #[test]
    fn rating_has_one_decimal() {
        assert_eq!(format_rating(4.25), "4.2★");
        assert_eq!(format_rating(5.0), "5.0★");
    }
}
