//! # Cafe Menu
//!
//! Turns a structured café menu (venue details, categories, items, prices)
//! into a static right-to-left Persian HTML page and its stylesheet.
//!
//! # Pipeline
//!
//! ```text
//! cafe.json ──load──▶ MenuDocument ──render──▶ Markup ──generate──▶ output/menu.html
//!                                                                  output/style.css
//! ```
//!
//! A run is a single synchronous pass: read one file, build the page in
//! memory, write the stylesheet and then the page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`menu`] | Input data model and loading (JSON or TOML) |
//! | [`text`] | Total field coercion, price formatting, URL and numeral helpers |
//! | [`render`] | Page assembly from small maud fragments |
//! | [`generate`] | Writes `style.css` and `menu.html` to the output directory |
//! | [`config`] | Render settings: stock defaults, optional TOML file, CLI overrides |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Coerce, Don't Validate
//!
//! Menus are edited by hand. A price typed as a number in one item and as a
//! string of Persian digits in the next, a phone number stored as an integer,
//! a `null` subtitle: none of these stop a build. Every text field is a
//! [`text::Text`], which accepts any scalar and normalizes it to a trimmed
//! string. Only an unreadable file or broken syntax is fatal.
//!
//! ## Maud Fragments
//!
//! HTML is produced with [Maud](https://maud.lambda.xyz/). Each visual block
//! (contact card, category nav, section, item card) is its own function
//! returning `Markup`, so blocks can be tested in isolation and every
//! interpolated value is escaped by construction.
//!
//! ## Fixed Stylesheet
//!
//! `static/style.css` is compiled into the binary and written verbatim. It
//! does not depend on the menu, so the page and its look evolve separately.

pub mod config;
pub mod generate;
pub mod menu;
pub mod output;
pub mod render;
pub mod text;

#[cfg(test)]
pub(crate) mod test_helpers;
