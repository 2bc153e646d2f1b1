//! Shared test utilities for the cafe-menu test suite.
//!
//! Builders for small in-memory menus, plus a loader for the sample input in
//! `fixtures/`.

use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::menu::{Category, Item, MenuDocument, VenueInfo};
use crate::text::Text;

/// Stock config; tests that need alternate numerals override the flag.
pub fn test_config() -> RenderConfig {
    RenderConfig::default()
}

pub fn item(name: &str, price: &str) -> Item {
    Item {
        name: Text::new(name),
        price: Text::new(price),
        ..Default::default()
    }
}

pub fn category(title: &str, items: Vec<Item>) -> Category {
    Category {
        title: Text::new(title),
        items,
        ..Default::default()
    }
}

/// Two categories, one of them empty, with a named venue and currency `K`.
pub fn sample_menu() -> MenuDocument {
    MenuDocument {
        cafe: VenueInfo {
            name: Some(Text::new("Lamp")),
            phone: Text::new("021 5555 1234"),
            telegram: Text::new("https://t.me/lamp"),
            currency: Text::new("K"),
            ..Default::default()
        },
        menu: vec![
            category("Hot", vec![item("Latte", "95000"), item("Mocha", "-")]),
            category("Seasonal", vec![]),
        ],
    }
}

/// Path to the sample menu shipped in `fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}
