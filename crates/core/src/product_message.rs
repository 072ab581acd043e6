//! Parser for the bot's structured product message.
//!
//! An admin submits a new product as one newline-delimited block:
//!
//! ```text
//! line 1  name
//! line 2  category
//! line 3  price            (non-digit characters stripped)
//! line 4  old price        (optional; empty line -> absent)
//! line 5  image reference
//! line 6  badge            (optional; empty line -> absent)
//! line 7+ description      (joined with newlines)
//! ```
//!
//! Parsing is pure and mutates nothing; validation of the resulting
//! fields (category enumeration, image pattern, bounds) happens in the
//! catalog service, not here.

use serde::Serialize;

/// Minimum number of lines a structured message must contain.
pub const MIN_LINES: usize = 6;

/// A successfully parsed product submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedProduct {
    pub name: String,
    pub category: String,
    pub price: i64,
    #[serde(rename = "oldPrice", skip_serializing_if = "Option::is_none")]
    pub old_price: Option<i64>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub description: String,
}

/// Why a structured message could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected at least {MIN_LINES} lines, got {0}")]
    TooFewLines(usize),

    #[error("price is not a number: {0:?}")]
    BadPrice(String),

    #[error("old price is not a number: {0:?}")]
    BadOldPrice(String),
}

/// Parse a structured message into a product submission.
pub fn parse(text: &str) -> Result<ParsedProduct, ParseError> {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < MIN_LINES {
        return Err(ParseError::TooFewLines(lines.len()));
    }

    let price = parse_price(lines[2]).ok_or_else(|| ParseError::BadPrice(lines[2].to_string()))?;

    let old_price_raw = lines[3].trim();
    let old_price = if old_price_raw.is_empty() {
        None
    } else {
        Some(parse_price(lines[3]).ok_or_else(|| ParseError::BadOldPrice(lines[3].to_string()))?)
    };

    let badge_raw = lines[5].trim();
    let badge = if badge_raw.is_empty() {
        None
    } else {
        Some(badge_raw.to_string())
    };

    Ok(ParsedProduct {
        name: lines[0].trim().to_string(),
        category: lines[1].trim().to_string(),
        price,
        old_price,
        image: lines[4].trim().to_string(),
        badge,
        description: lines[6..].join("\n").trim().to_string(),
    })
}

/// Strip every non-digit character, then parse. Lets admins paste prices
/// with thousands separators or currency suffixes ("12 990 000 so'm").
fn parse_price(line: &str) -> Option<i64> {
    let digits: String = line.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_MESSAGE: &str = "iPhone 16 Pro\n\
                                iphone\n\
                                12 990 000 so'm\n\
                                13,990,000\n\
                                https://example.com/iphone.png\n\
                                Yangi\n\
                                A18 Pro chip, Pro camera system";

    #[test]
    fn parses_a_full_message() {
        let parsed = parse(FULL_MESSAGE).unwrap();
        assert_eq!(parsed.name, "iPhone 16 Pro");
        assert_eq!(parsed.category, "iphone");
        assert_eq!(parsed.price, 12_990_000);
        assert_eq!(parsed.old_price, Some(13_990_000));
        assert_eq!(parsed.image, "https://example.com/iphone.png");
        assert_eq!(parsed.badge.as_deref(), Some("Yangi"));
        assert_eq!(parsed.description, "A18 Pro chip, Pro camera system");
    }

    #[test]
    fn rejects_five_lines_as_format_error() {
        let text = "name\niphone\n100\n\nhttps://example.com/a.png";
        assert_eq!(parse(text), Err(ParseError::TooFewLines(5)));
    }

    #[test]
    fn empty_old_price_line_means_absent() {
        // 7 lines with an empty 4th line: old price absent, description is
        // line 7.
        let text = "iPad Pro\nipad\n1990000\n\nhttps://example.com/ipad.png\n\nM4 chip";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed.old_price, None);
        assert_eq!(parsed.badge, None);
        assert_eq!(parsed.description, "M4 chip");
    }

    #[test]
    fn six_lines_yield_empty_description() {
        let text = "AirPods Pro 2\nairpods\n2490000\n\nhttps://example.com/a.png\nTop";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed.badge.as_deref(), Some("Top"));
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn multi_line_description_is_joined() {
        let text = format!("{FULL_MESSAGE}\nAction Button\nTitanium body");
        let parsed = parse(&text).unwrap();
        assert_eq!(
            parsed.description,
            "A18 Pro chip, Pro camera system\nAction Button\nTitanium body"
        );
    }

    #[test]
    fn price_without_digits_is_an_error() {
        let text = "name\niphone\nfree\n\nhttps://example.com/a.png\n";
        assert!(matches!(parse(text), Err(ParseError::BadPrice(_))));
    }

    #[test]
    fn bad_old_price_is_an_error() {
        let text = "name\niphone\n100\nexpensive once\nhttps://example.com/a.png\n";
        assert!(matches!(parse(text), Err(ParseError::BadOldPrice(_))));
    }
}
