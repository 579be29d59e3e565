//! Price string parsing
//!
//! Menu prices are stored and displayed as strings like `"KSh 1,800"`.
//! Parsing strips every non-digit character before reading the number, so
//! `"KSh 1,800"`, `"1800"` and `" KSh  450 "` all resolve to the same amount.
//! This is a tolerant-input policy, not a currency validator.

/// Extract the integer amount from a display price string.
///
/// An input with no digits at all parses to 0.
pub fn parse_price(price: &str) -> i64 {
    let digits: String = price.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Render an integer amount as a display price with thousands separators.
pub fn format_price(amount: i64) -> String {
    let raw = amount.abs().to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("KSh -{}", grouped)
    } else {
        format!("KSh {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formatted_price() {
        assert_eq!(parse_price("KSh 1,800"), 1800);
        assert_eq!(parse_price("KSh 450"), 450);
    }

    #[test]
    fn parses_bare_and_padded_numbers() {
        assert_eq!(parse_price("1800"), 1800);
        assert_eq!(parse_price("  KSh  2,200  "), 2200);
    }

    #[test]
    fn no_digits_is_zero() {
        assert_eq!(parse_price("KSh"), 0);
        assert_eq!(parse_price(""), 0);
    }

    #[test]
    fn formats_with_separators() {
        assert_eq!(format_price(450), "KSh 450");
        assert_eq!(format_price(1800), "KSh 1,800");
        assert_eq!(format_price(1234567), "KSh 1,234,567");
    }

    #[test]
    fn round_trips_through_display_form() {
        for amount in [0, 9, 450, 1800, 2400, 1234567] {
            assert_eq!(parse_price(&format_price(amount)), amount);
        }
    }
}
