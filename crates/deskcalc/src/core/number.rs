//! Number ⇄ text conversions used by the display
//!
//! The engine keeps every operand as text, so the exact rules for turning a
//! value into text (and back) decide what the user sees: when a result picks
//! up an exponent marker, how a percent looks, what a stray `-` evaluates to.

/// Precision large enough to print any finite `f64` exactly.
const EXACT_PRECISION: usize = 1100;

/// Renders a value with the shortest digits that round-trip.
///
/// Plain notation is used while the decimal exponent stays within
/// `-6 < n <= 21`; outside that range the value is written as `d.ddde±x`.
///
/// ```rust
/// use deskcalc::core::number::number_to_text;
///
/// assert_eq!(number_to_text(8.0), "8");
/// assert_eq!(number_to_text(0.05), "0.05");
/// assert_eq!(number_to_text(1e21), "1e+21");
/// assert_eq!(number_to_text(-0.0), "0");
/// ```
#[must_use]
pub fn number_to_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_digits, frac_digits) = digits.split_at(n as usize);
        format!("{int_digits}.{frac_digits}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{e_sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{e_sign}{}", e.abs())
        }
    };

    format!("{sign}{body}")
}

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped and trailing garbage ignored. Text without a
/// numeric prefix (`"-"`, `"Error"`, `""`) yields NaN.
#[must_use]
pub fn text_to_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut cursor = frac_start;
        while cursor < len && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        mantissa_digits += cursor - frac_start;
        end = cursor;
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < len && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exp_start = cursor;
        while cursor < len && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exp_start {
            end = cursor;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

/// Fixed-point rendering with exactly `digits` fractional digits.
///
/// Rounds the exact binary value half away from zero, so `2.5` becomes `"3"`
/// and `1.005` (stored as `1.00499…`) becomes `"1.00"`.
#[must_use]
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return number_to_text(value);
    }

    let exact = format!("{:.*}", EXACT_PRECISION, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|&next| next >= b'5');
    if round_up && carry_one(&mut kept) {
        kept.insert(0, 1);
        int_len += 1;
    }

    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|d| char::from(b'0' + d)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// Adds one to the last digit; returns true when the carry ran off the front.
fn carry_one(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}
