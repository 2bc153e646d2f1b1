//! Field normalization and display formatting.
//!
//! Input menus are hand-written and loosely typed: a price may arrive as a
//! number, a string of Persian digits, or a dash; a phone number may be an
//! integer. Every text field therefore goes through [`norm_value`], a total
//! coercion that never fails. Formatting helpers on top of it produce the
//! strings the renderer embeds.
//!
//! ## Price Rules
//!
//! | Input            | Output (currency `K`) | With alternate numerals |
//! |------------------|-----------------------|-------------------------|
//! | `""`, `"-"`      | `-`                   | `-`                     |
//! | `120000`         | `120000 K`            | `۱۲۰۰۰۰ K`              |
//! | `"۱۲۰,۰۰۰"`      | `۱۲۰,۰۰۰ K`           | `۱۲۰,۰۰۰ K`             |
//! | `"ask the staff"`| `ask the staff`       | `ask the staff`         |

use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

/// Western and Persian digits, optionally grouped with commas.
static NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9۰-۹,]+$").expect("numeral pattern is valid"));
static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("url pattern is valid"));

const ALT_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Key under which `toml` hands a datetime scalar to a self-describing
/// deserializer.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

/// Marker for a price that is not currently offered.
pub const UNAVAILABLE: &str = "-";

/// A normalized, trimmed text field.
///
/// Deserializes from any value: strings are trimmed, numbers and booleans are
/// stringified, `null` becomes empty. Deserialization of a `Text` never fails
/// on the shape of the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text(String);

impl Text {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The text itself, or `fallback` when empty.
    pub fn or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.0.is_empty() { fallback } else { &self.0 }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Text(norm_value(&value)))
    }
}

/// Coerce an arbitrary value into a trimmed display string.
///
/// - `null` → `""`
/// - strings → trimmed
/// - numbers, booleans, TOML datetimes → their textual form
/// - arrays and objects → compact JSON
pub fn norm_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Object(map) if map.len() == 1 => match map.get(TOML_DATETIME_KEY) {
            Some(Value::String(s)) => s.trim().to_string(),
            _ => value.to_string(),
        },
        other => other.to_string().trim().to_string(),
    }
}

/// True if `s` starts with `http://` or `https://`, ignoring case and
/// surrounding whitespace.
pub fn is_url(s: &str) -> bool {
    HTTP_URL.is_match(s.trim())
}

/// True if `s` is made only of Western digits, Persian digits and commas.
///
/// Already-Persian numerals count as numeric, so they still receive the
/// currency suffix.
pub fn looks_numeric(s: &str) -> bool {
    NUMERAL.is_match(s)
}

/// Replace every ASCII digit with its Persian counterpart.
pub fn to_alt_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => ALT_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Format a price for display.
///
/// Empty and `-` prices are unavailable and always render as `-`. Numeric
/// prices get ` {currency}` appended; anything else passes through. Digit
/// conversion runs last, so it also applies to digits inside the currency
/// label.
pub fn format_price(price: &Text, currency: &str, alt_numerals: bool) -> String {
    let p = price.as_str();
    if p.is_empty() || p == UNAVAILABLE {
        return UNAVAILABLE.to_string();
    }

    let out = if looks_numeric(p) {
        format!("{p} {currency}").trim().to_string()
    } else {
        p.to_string()
    };

    if alt_numerals { to_alt_digits(&out) } else { out }
}
