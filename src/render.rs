//! HTML document assembly.
//!
//! The page is built bottom-up from small fragment functions, each returning
//! a [`Markup`] that can be rendered and inspected on its own:
//!
//! ```text
//! render_document
//! ├── top_bar             address badge + title badge linking to the first category
//! ├── brand               venue name and subtitle
//! ├── hero
//! │   ├── category_nav    one pill per category → #category-N
//! │   ├── contact_block   phone_row + contact_row per social/map link
//! │   └── quick_links     currency label, display direction
//! ├── category_section*   heading + grid of item_card (or empty_card)
//! └── footer              generator name + timestamp
//! ```
//!
//! All interpolation goes through maud's escaping. The only unescaped content
//! is markup produced by these functions themselves.
//!
//! Nothing here fails: absent fields fall back to placeholders or are left
//! out of the page.

use crate::config::RenderConfig;
use crate::generate::STYLE_FILE;
use crate::menu::{Category, Item, MenuDocument, VenueInfo, category_anchor};
use crate::text::{format_price, is_url, to_alt_digits};
use maud::{DOCTYPE, Markup, html};

const FONT_CSS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Vazirmatn:wght@300;400;600;700&display=swap";

const UNNAMED_ITEM: &str = "بدون نام";
const EMPTY_CATEGORY: &str = "فعلاً آیتمی ثبت نشده.";
const ADDRESS_PLACEHOLDER: &str = "آدرس را در ورودی وارد کنید";
const PHONE_PLACEHOLDER: &str = "تلفن را در ورودی وارد کنید.";

/// Render the complete menu page.
///
/// `generated_at` is stamped into the footer as-is; it is the only part of
/// the output that depends on anything other than `doc` and `config`.
pub fn render_document(doc: &MenuDocument, config: &RenderConfig, generated_at: &str) -> Markup {
    let venue = &doc.cafe;
    let currency = venue.currency.or(&config.default_currency);
    let page_title = format!("{} | {}", config.title, venue.display_name());

    let content = html! {
        div.container {
            (top_bar(venue, &config.title))
            (brand(venue))
            div.hero {
                div.hero-inner {
                    div {
                        div.pill { "دسته‌ها" }
                        (category_nav(&doc.menu))
                    }
                    (contact_block(venue, config.alt_numerals))
                }
                (quick_links(currency))
            }
            @for (idx, category) in doc.menu.iter().enumerate() {
                (category_section(category, idx + 1, currency, config))
            }
            (footer(generated_at))
        }
    };

    base_document(&page_title, content)
}

/// Document shell: RTL Persian page, web font, external stylesheet.
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fa" dir="rtl" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width,initial-scale=1";
                meta name="color-scheme" content="dark";
                title { (title) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link rel="stylesheet" href=(FONT_CSS_URL);
                link rel="stylesheet" href=(STYLE_FILE);
            }
            body {
                (content)
            }
        }
    }
}

fn top_bar(venue: &VenueInfo, page_title: &str) -> Markup {
    html! {
        div.topbar {
            div.badge {
                "📍 "
                span { (venue.address.or(ADDRESS_PLACEHOLDER)) }
            }
            a.badge href={ "#" (category_anchor(1)) } {
                "🧾 "
                span { (page_title) }
            }
        }
    }
}

fn brand(venue: &VenueInfo) -> Markup {
    html! {
        div.brand {
            h1 { (venue.display_name()) }
            div.subtitle { (venue.subtitle.as_str()) }
        }
    }
}

/// Quick-navigation pills, one per category, in input order.
pub fn category_nav(categories: &[Category]) -> Markup {
    html! {
        nav.pills {
            @for (idx, category) in categories.iter().enumerate() {
                a.pill href={ "#" (category_anchor(idx + 1)) } {
                    strong { (category.display_title(idx + 1)) }
                }
            }
        }
    }
}

/// Contact card: phone row (or its placeholder) followed by the link rows.
pub fn contact_block(venue: &VenueInfo, alt_numerals: bool) -> Markup {
    html! {
        div.info {
            h3 { "اطلاعات تماس" }
            (phone_row(venue.phone.as_str(), alt_numerals))
            (contact_row("اینستاگرام", venue.instagram.as_str()))
            (contact_row("تلگرام", venue.telegram.as_str()))
            (contact_row("واتس‌اپ", venue.whatsapp.as_str()))
            (contact_row("نقشه", venue.maps.as_str()))
        }
    }
}

/// Phone number as literal text, never a link.
pub fn phone_row(phone: &str, alt_numerals: bool) -> Markup {
    if phone.is_empty() {
        return html! { div.row { (PHONE_PLACEHOLDER) } };
    }
    let shown = if alt_numerals {
        to_alt_digits(phone)
    } else {
        phone.to_string()
    };
    html! {
        div.row {
            b { "تلفن:" }
            " "
            (shown)
        }
    }
}

/// A labeled contact value: an external link for http(s) URLs, plain text
/// otherwise, nothing at all when empty.
pub fn contact_row(label: &str, value: &str) -> Markup {
    if value.is_empty() {
        return html! {};
    }
    html! {
        div.row {
            b { (label) ":" }
            " "
            @if is_url(value) {
                a href=(value) target="_blank" rel="noopener noreferrer" { (value) }
            } @else {
                (value)
            }
        }
    }
}

fn quick_links(currency: &str) -> Markup {
    html! {
        div.quicklinks {
            span.pill { "واحد قیمت: " strong { (currency) } }
            span.pill { "نمایش: " strong { "RTL" } }
        }
    }
}

/// One category: heading plus a card grid. An empty category gets a single
/// placeholder card so the grid never collapses.
pub fn category_section(
    category: &Category,
    position: usize,
    currency: &str,
    config: &RenderConfig,
) -> Markup {
    html! {
        section.section id=(category_anchor(position)) {
            div.section-title {
                h2 { (category.display_title(position)) }
                @if !category.hint.is_empty() {
                    div.hint { (category.hint.as_str()) }
                }
            }
            div.grid {
                @if category.items.is_empty() {
                    (empty_card())
                } @else {
                    @for item in &category.items {
                        (item_card(item, currency, config))
                    }
                }
            }
        }
    }
}

/// A single menu item card.
pub fn item_card(item: &Item, currency: &str, config: &RenderConfig) -> Markup {
    let name = item.name.or(UNNAMED_ITEM);
    let price = format_price(&item.price, currency, config.alt_numerals);

    html! {
        div.item {
            div.thumb {
                @if is_url(item.img.as_str()) {
                    img src=(item.img.as_str()) alt=(name) loading="lazy";
                } @else {
                    (item.icon.or(&config.default_icon))
                }
            }
            div.meta {
                div.name {
                    h4 { (name) }
                    div.price { (price) }
                }
                @if !item.desc.is_empty() {
                    div.desc { (item.desc.as_str()) }
                }
            }
        }
    }
}

fn empty_card() -> Markup {
    html! {
        div.item.empty {
            div.meta {
                div.desc { (EMPTY_CATEGORY) }
            }
        }
    }
}

fn footer(generated_at: &str) -> Markup {
    html! {
        div.footer {
            "ساخته‌شده با " (env!("CARGO_PKG_NAME")) " • " (generated_at)
        }
    }
}
