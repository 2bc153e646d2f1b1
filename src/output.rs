//! CLI output formatting.
//!
//! Output lists what was rendered, not just which files were touched: each
//! category appears with its 1-based position, display title and item count,
//! with the anchor or item details indented beneath it.
//!
//! ## Render
//!
//! ```text
//! Categories
//! 001 Hot (2 items)
//!     Anchor: #category-1
//! 002 Seasonal (empty)
//!     Anchor: #category-2
//!
//! style.css → output/style.css
//! menu.html → output/menu.html
//! ```
//!
//! ## Check
//!
//! ```text
//! Venue
//!     Name: Lamp
//!     Currency: K
//! Categories
//! 001 Hot (2 items)
//!     001 Latte: 95000 K
//!     002 Mocha: -
//!
//! Menu is valid: 2 categories, 2 items
//! ```
//!
//! Each `format_*` function is pure and returns lines; the `print_*`
//! wrappers write them to stdout.

use crate::config::RenderConfig;
use crate::generate::{DOCUMENT_FILE, GeneratedSite, STYLE_FILE};
use crate::menu::{Category, MenuDocument, category_anchor};
use crate::text::format_price;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Category header: index, display title and item count.
///
/// ```text
/// 001 Hot (2 items)
/// 002 Seasonal (empty)
/// ```
fn category_header(position: usize, category: &Category) -> String {
    let title = category.display_title(position);
    match category.items.len() {
        0 => format!("{} {} (empty)", format_index(position), title),
        1 => format!("{} {} (1 item)", format_index(position), title),
        n => format!("{} {} ({} items)", format_index(position), title, n),
    }
}

pub fn format_render_output(doc: &MenuDocument, site: &GeneratedSite) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    for (idx, category) in doc.menu.iter().enumerate() {
        lines.push(category_header(idx + 1, category));
        lines.push(format!("{}Anchor: #{}", indent(1), category_anchor(idx + 1)));
    }
    lines.push(String::new());
    lines.push(format!("{} → {}", STYLE_FILE, site.stylesheet.display()));
    lines.push(format!("{} → {}", DOCUMENT_FILE, site.document.display()));
    lines
}

pub fn format_check_output(doc: &MenuDocument, config: &RenderConfig) -> Vec<String> {
    let venue = &doc.cafe;
    let currency = venue.currency.or(&config.default_currency);

    let mut lines = vec![
        "Venue".to_string(),
        format!("{}Name: {}", indent(1), venue.display_name()),
        format!("{}Currency: {}", indent(1), currency),
        "Categories".to_string(),
    ];
    for (idx, category) in doc.menu.iter().enumerate() {
        lines.push(category_header(idx + 1, category));
        for (item_idx, item) in category.items.iter().enumerate() {
            lines.push(format!(
                "{}{} {}: {}",
                indent(1),
                format_index(item_idx + 1),
                item.name.or("(unnamed)"),
                format_price(&item.price, currency, config.alt_numerals)
            ));
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "Menu is valid: {} categories, {} items",
        doc.menu.len(),
        doc.item_count()
    ));
    lines
}

pub fn print_render_output(doc: &MenuDocument, site: &GeneratedSite) {
    for line in format_render_output(doc, site) {
        println!("{}", line);
    }
}

pub fn print_check_output(doc: &MenuDocument, config: &RenderConfig) {
    for line in format_check_output(doc, config) {
        println!("{}", line);
    }
}
