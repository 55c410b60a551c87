//! Twelve-character display fitting

use crate::core::number::{text_to_number, to_fixed};

/// Width of the display in characters
pub const DISPLAY_WIDTH: usize = 12;

/// Fits a number's text into [`DISPLAY_WIDTH`] characters.
///
/// Text that already fits is returned as is. Text with an exponent marker is
/// also returned as is, even when it is too wide. An integer part that fills
/// the display on its own is cut to its first twelve characters, which
/// changes the magnitude. Anything else is rounded to as many fractional
/// digits as fit, then trailing zeros are dropped.
///
/// ```rust
/// use deskcalc::core::format::fit_to_display;
///
/// assert_eq!(fit_to_display("8"), "8");
/// assert_eq!(fit_to_display("0.3333333333333333"), "0.3333333333");
/// assert_eq!(fit_to_display("1234567890123"), "123456789012");
/// ```
#[must_use]
pub fn fit_to_display(text: &str) -> String {
    if text.chars().count() <= DISPLAY_WIDTH {
        return text.to_string();
    }

    if text.contains('e') {
        return text.to_string();
    }

    let int_part = text.split('.').next().unwrap_or(text);
    let int_len = int_part.chars().count();

    if int_len >= DISPLAY_WIDTH {
        return int_part.chars().take(DISPLAY_WIDTH).collect();
    }

    // One cell goes to the decimal point
    let max_decimals = DISPLAY_WIDTH - int_len - 1;
    let rounded = to_fixed(text_to_number(text), max_decimals);

    if rounded.contains('.') {
        rounded
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rounded
    }
}
