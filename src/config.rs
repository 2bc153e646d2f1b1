//! Render configuration.
//!
//! Settings come from three layers, later layers winning:
//!
//! 1. Stock defaults ([`RenderConfig::default`])
//! 2. An optional TOML file passed with `--config`
//! 3. Command-line flags (`--title`, `--alt-numerals`)
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "منو"                  # Page title and top-bar badge label
//! alt_numerals = false           # Render digits as Persian numerals
//! default_currency = "هزار تومان" # Used when the menu has no currency
//! default_icon = "☕"            # Glyph for items without an image
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings that shape the rendered page but are not part of the menu itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Page title, shown in `<title>` and the top-bar badge.
    pub title: String,
    /// Convert Western digits in prices and the phone number to Persian digits.
    pub alt_numerals: bool,
    /// Currency label used when the menu leaves `currency` empty.
    pub default_currency: String,
    /// Thumbnail glyph for items with no image URL and no `icon`.
    pub default_icon: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "منو".to_string(),
            alt_numerals: false,
            default_currency: "هزار تومان".to_string(),
            default_icon: "☕".to_string(),
        }
    }
}

impl RenderConfig {
    /// Reject blank values that would leave holes in the page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.default_currency.trim().is_empty() {
            return Err(ConfigError::Validation(
                "default_currency must not be empty".into(),
            ));
        }
        if self.default_icon.trim().is_empty() {
            return Err(ConfigError::Validation(
                "default_icon must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides. A blank `--title` keeps the configured
    /// title; `--alt-numerals` can only switch the option on.
    pub fn with_overrides(mut self, title: Option<String>, alt_numerals: bool) -> Self {
        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            self.title = title;
        }
        self.alt_numerals |= alt_numerals;
        self
    }
}

/// Load the render config.
///
/// With no path, returns stock defaults. With a path, the file's values are
/// layered over the defaults, unknown keys are rejected and the result is
/// validated.
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => RenderConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` command.
pub fn stock_config_toml() -> &'static str {
    r##"# Cafe Menu Configuration
# =======================
# All options are optional. Remove or comment out any you don't need.
# Unknown keys will cause an error.
# Command-line flags override these values.

# Page title, shown in the browser tab and the top-bar badge.
title = "منو"

# Render digits in prices and the phone number as Persian numerals.
# Also enabled by --alt-numerals.
alt_numerals = false

# Currency label appended to numeric prices when the menu's
# cafe.currency field is empty.
default_currency = "هزار تومان"

# Glyph shown in the thumbnail slot of items without an image URL.
default_icon = "☕"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = RenderConfig::default();
        assert_eq!(config.title, "منو");
        assert!(!config.alt_numerals);
        assert_eq!(config.default_currency, "هزار تومان");
        assert_eq!(config.default_icon, "☕");
    }

    #[test]
    fn parse_partial_config() {
        let config: RenderConfig = toml::from_str("alt_numerals = true").unwrap();
        assert!(config.alt_numerals);
        assert_eq!(config.title, "منو");
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<RenderConfig, _> = toml::from_str("colour = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: RenderConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_without_path_is_default() {
        assert_eq!(load_config(None).unwrap(), RenderConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("menu.toml");
        fs::write(&path, "title = \"Drinks\"\ndefault_currency = \"K\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.title, "Drinks");
        assert_eq!(config.default_currency, "K");
        assert_eq!(config.default_icon, "☕");
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config(Some(&tmp.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("menu.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_blank_currency_fails_validation() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("menu.toml");
        fs::write(&path, "default_currency = \"  \"").unwrap();

        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_blank_title() {
        let config = RenderConfig {
            title: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn overrides_replace_title_and_enable_numerals() {
        let config = RenderConfig::default().with_overrides(Some("Night".into()), true);
        assert_eq!(config.title, "Night");
        assert!(config.alt_numerals);
    }

    #[test]
    fn blank_title_override_keeps_config_title() {
        let config = RenderConfig::default().with_overrides(Some("   ".into()), false);
        assert_eq!(config.title, "منو");
        assert!(config.validate().is_ok());

        let config = RenderConfig::default().with_overrides(Some(String::new()), false);
        assert_eq!(config.title, "منو");
    }

    #[test]
    fn missing_overrides_keep_config() {
        let base = RenderConfig {
            alt_numerals: true,
            ..Default::default()
        };
        let config = base.clone().with_overrides(None, false);
        assert_eq!(config, base);
    }
}
