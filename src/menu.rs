//! Menu data model and input loading.
//!
//! A menu file is a single record: venue metadata plus an ordered list of
//! categories, each holding an ordered list of items.
//!
//! ```json
//! {
//!   "cafe": { "name": "Lamp", "phone": "021 5555", "currency": "هزار تومان" },
//!   "menu": [
//!     { "title": "Hot", "hint": "espresso based", "items": [
//!       { "name": "Latte", "desc": "double shot", "price": 95, "img": "https://…" }
//!     ]}
//!   ]
//! }
//! ```
//!
//! Files ending in `.toml` are parsed as TOML with the same shape; everything
//! else is parsed as JSON.
//!
//! Text fields are [`Text`] and accept any scalar, so a wrongly-typed field
//! degrades instead of failing. Only structural problems (unreadable file,
//! syntax error, `menu` that is not a list) are errors.

use crate::text::Text;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Venue name used when the input has no `name` key at all.
pub const DEFAULT_VENUE_NAME: &str = "کافه";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid TOML in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level input record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MenuDocument {
    #[serde(alias = "venue")]
    pub cafe: VenueInfo,
    /// Categories in display order. Position drives the anchor id.
    #[serde(alias = "categories")]
    pub menu: Vec<Category>,
}

/// Café metadata. Every field is optional free text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VenueInfo {
    /// `None` only when the key is missing; see [`VenueInfo::display_name`].
    #[serde(deserialize_with = "present_text")]
    pub name: Option<Text>,
    pub subtitle: Text,
    pub address: Text,
    pub phone: Text,
    pub instagram: Text,
    pub telegram: Text,
    pub whatsapp: Text,
    #[serde(alias = "mapsLink")]
    pub maps: Text,
    #[serde(alias = "currencyLabel")]
    pub currency: Text,
}

/// A key that is present is always `Some`, even when its value is `null`.
fn present_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Text>, D::Error> {
    Text::deserialize(deserializer).map(Some)
}

impl VenueInfo {
    /// Name as written, or [`DEFAULT_VENUE_NAME`] if the key was absent.
    /// A present-but-empty name stays empty.
    pub fn display_name(&self) -> &str {
        self.name
            .as_ref()
            .map(Text::as_str)
            .unwrap_or(DEFAULT_VENUE_NAME)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Category {
    pub title: Text,
    pub hint: Text,
    pub items: Vec<Item>,
}

impl Category {
    /// Title, or the generated `دسته N` label for a 1-based `position`.
    pub fn display_title(&self, position: usize) -> String {
        if self.title.is_empty() {
            format!("دسته {position}")
        } else {
            self.title.to_string()
        }
    }
}

/// In-page anchor id for the category at 1-based `position`.
pub fn category_anchor(position: usize) -> String {
    format!("category-{position}")
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Item {
    pub name: Text,
    #[serde(alias = "description")]
    pub desc: Text,
    /// Number, numeral string, or `-` for unavailable.
    pub price: Text,
    #[serde(alias = "imageUrl")]
    pub img: Text,
    /// Glyph shown when there is no usable image.
    #[serde(alias = "iconGlyph")]
    pub icon: Text,
}

/// Input syntax, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }
}

/// Parse menu source text in the given format.
///
/// `path` is only used to label errors.
pub fn parse_menu(
    content: &str,
    format: InputFormat,
    path: &Path,
) -> Result<MenuDocument, InputError> {
    match format {
        InputFormat::Json => serde_json::from_str(content).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        }),
        InputFormat::Toml => toml::from_str(content).map_err(|source| InputError::Toml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read and parse a menu file.
pub fn load_menu(path: &Path) -> Result<MenuDocument, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_menu(&content, InputFormat::from_path(path), path)
}

impl MenuDocument {
    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.menu.iter().map(|c| c.items.len()).sum()
    }
}
