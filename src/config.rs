//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the source directory next to `public/`; stock defaults are overridden by
//! whatever keys the user sets.
//!
//! ## Config File Location
//!
//! ```text
//! site/
//! ├── config.toml              # Site config (overrides stock defaults)
//! └── public/                  # Static assets, copied to the output root
//!     └── images/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_name = "Searock"
//! tagline = "Your Flooring Partner"
//!
//! [contact]
//! phone = "+91 6238811940"
//! whatsapp = "916238811940"   # Digits only, used for wa.me deep links
//! email = "searocktilegallery@gmail.com"
//! address = "Panambi, Near EMS Hospital, Perinthalmanna, Kerala -679332"
//! hours = "Mon - Sun: 9AM - 7PM"
//!
//! [cms]
//! api_base = "https://api.storyblok.com/v2/cdn"
//! version = "published"       # "published" or "draft"
//! token_env = "STORYBLOK_TOKEN"
//! timeout_secs = 10
//!
//! [widgets]
//! highlight_interval_ms = 2000
//! testimonial_interval_ms = 5000
//! partner_interval_ms = 4000
//! feature_interval_ms = 3000
//! partner_page_size = 3
//! counter_duration_ms = 2000
//!
//! [colors]
//! primary = "#3C3063"
//! primary_600 = "#2A2347"
//! secondary = "#F9811E"
//! text = "#1e293b"
//! background = "#ffffff"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [cms]
//! version = "draft"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
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

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Brand name used in page titles and alt texts.
    pub site_name: String,
    /// Short tagline shown under the hero headline.
    pub tagline: String,
    /// Store contact details rendered in the footer, contact page and FAB.
    pub contact: ContactConfig,
    /// Headless content API settings.
    pub cms: CmsConfig,
    /// Timings and sizes for the client-side widgets.
    pub widgets: WidgetsConfig,
    /// Brand palette.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Searock".to_string(),
            tagline: "Your Flooring Partner".to_string(),
            contact: ContactConfig::default(),
            cms: CmsConfig::default(),
            widgets: WidgetsConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site_name must not be empty".into(),
            ));
        }
        if self.contact.whatsapp.is_empty()
            || !self.contact.whatsapp.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ConfigError::Validation(
                "contact.whatsapp must contain digits only (country code included)".into(),
            ));
        }
        if !self.cms.api_base.starts_with("http://") && !self.cms.api_base.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "cms.api_base must be an http(s) URL".into(),
            ));
        }
        if self.cms.token_env.trim().is_empty() {
            return Err(ConfigError::Validation(
                "cms.token_env must name an environment variable".into(),
            ));
        }
        if self.cms.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "cms.timeout_secs must be non-zero".into(),
            ));
        }
        if self.widgets.partner_page_size == 0 {
            return Err(ConfigError::Validation(
                "widgets.partner_page_size must be non-zero".into(),
            ));
        }
        let intervals = [
            ("highlight_interval_ms", self.widgets.highlight_interval_ms),
            ("testimonial_interval_ms", self.widgets.testimonial_interval_ms),
            ("partner_interval_ms", self.widgets.partner_interval_ms),
            ("feature_interval_ms", self.widgets.feature_interval_ms),
            ("counter_duration_ms", self.widgets.counter_duration_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(ConfigError::Validation(format!(
                    "widgets.{name} must be non-zero"
                )));
            }
        }
        Ok(())
    }
}

/// Store contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Display phone number; also used for `tel:` links with spaces removed.
    pub phone: String,
    /// WhatsApp recipient, digits only with country code (no `+`).
    pub whatsapp: String,
    pub email: String,
    pub address: String,
    pub hours: String,
    /// Pre-generated map embed URL for the location iframe.
    pub map_embed_url: String,
}

impl ContactConfig {
    /// `tel:` href for the phone number.
    pub fn tel_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    /// `mailto:` href for the email address.
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Bare WhatsApp chat link without a pre-filled message.
    pub fn whatsapp_href(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "+91 6238811940".to_string(),
            whatsapp: "916238811940".to_string(),
            email: "searocktilegallery@gmail.com".to_string(),
            address: "Panambi, Near EMS Hospital, Perinthalmanna, Kerala -679332".to_string(),
            hours: "Mon - Sun: 9AM - 7PM".to_string(),
            map_embed_url: DEFAULT_MAP_EMBED_URL.to_string(),
        }
    }
}

const DEFAULT_MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d14467.199615625987!2d76.23768555892087!3d10.970625652041782!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3ba7cd21b11d5611%3A0x6f07d77d5f4aea6a!2sSearock%20Tile%20Gallery!5e0!3m2!1sen!2sin!4v1760172765876!5m2!1sen!2sin";

/// Which content version the API should serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentVersion {
    /// Unpublished edits, visible to preview tokens only.
    Draft,
    Published,
}

impl ContentVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentVersion::Draft => "draft",
            ContentVersion::Published => "published",
        }
    }
}

/// Headless content API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CmsConfig {
    /// Base URL of the CDN API, without the `/stories` path.
    pub api_base: String,
    /// Preferred content version. Failed requests retry with `published`.
    pub version: ContentVersion,
    /// Environment variable holding the access token. When it is unset or
    /// empty the site is built from fixture content only.
    pub token_env: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.storyblok.com/v2/cdn".to_string(),
            version: ContentVersion::Published,
            token_env: "STORYBLOK_TOKEN".to_string(),
            timeout_secs: 10,
        }
    }
}

impl CmsConfig {
    /// Read the access token from the configured environment variable.
    ///
    /// Returns `None` for both an unset and an empty variable.
    pub fn token_from_env(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

/// Client-side widget timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetsConfig {
    /// Rotation interval of the "About" highlight icons.
    pub highlight_interval_ms: u64,
    /// Rotation interval of the testimonial card.
    pub testimonial_interval_ms: u64,
    /// Auto-advance interval of the partner logo carousel.
    pub partner_interval_ms: u64,
    /// Rotation interval of the product page feature slides.
    pub feature_interval_ms: u64,
    /// Partner logos visible at once.
    pub partner_page_size: usize,
    /// Duration of the stat counter animation.
    pub counter_duration_ms: u64,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            highlight_interval_ms: 2000,
            testimonial_interval_ms: 5000,
            partner_interval_ms: 4000,
            feature_interval_ms: 3000,
            partner_page_size: 3,
            counter_duration_ms: 2000,
        }
    }
}

/// Brand palette, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Brand purple: headings, buttons, navbar accents.
    pub primary: String,
    /// Darker purple for gradients and form fields.
    pub primary_600: String,
    /// Brand orange: highlights and CTAs.
    pub secondary: String,
    pub text: String,
    pub background: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#3C3063".to_string(),
            primary_600: "#2A2347".to_string(),
            secondary: "#F9811E".to_string(),
            text: "#1e293b".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Searock Site Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at <source>/config.toml (default: site/config.toml).
# Unknown keys will cause an error.

# Brand name used in page titles and alt texts.
site_name = "Searock"

# Tagline shown under the hero headline.
tagline = "Your Flooring Partner"

# ---------------------------------------------------------------------------
# Store contact details
# ---------------------------------------------------------------------------
[contact]
phone = "+91 6238811940"
# WhatsApp recipient: digits only, country code included, no "+".
whatsapp = "916238811940"
email = "searocktilegallery@gmail.com"
address = "Panambi, Near EMS Hospital, Perinthalmanna, Kerala -679332"
hours = "Mon - Sun: 9AM - 7PM"
# Pre-generated map embed URL for the location iframe.
# map_embed_url = "https://www.google.com/maps/embed?pb=..."

# ---------------------------------------------------------------------------
# Headless content API (Storyblok CDN)
# ---------------------------------------------------------------------------
[cms]
api_base = "https://api.storyblok.com/v2/cdn"
# "published" or "draft". Failed requests are retried with "published".
version = "published"
# Environment variable holding the access token. When unset, the site is
# built from placeholder content and no request is made.
token_env = "STORYBLOK_TOKEN"
# Per-request timeout in seconds.
timeout_secs = 10

# ---------------------------------------------------------------------------
# Client-side widgets
# ---------------------------------------------------------------------------
[widgets]
highlight_interval_ms = 2000
testimonial_interval_ms = 5000
partner_interval_ms = 4000
feature_interval_ms = 3000
# Partner logos visible at once.
partner_page_size = 3
counter_duration_ms = 2000

# ---------------------------------------------------------------------------
# Brand colors
# ---------------------------------------------------------------------------
[colors]
primary = "#3C3063"
primary_600 = "#2A2347"
secondary = "#F9811E"
text = "#1e293b"
background = "#ffffff"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-primary-600: {primary_600};
    --color-secondary: {secondary};
    --color-text: {text};
    --color-bg: {background};
}}"#,
        primary = colors.primary,
        primary_600 = colors.primary_600,
        secondary = colors.secondary,
        text = colors.text,
        background = colors.background,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.site_name, "Searock");
        assert_eq!(config.cms.version, ContentVersion::Published);
        assert_eq!(config.widgets.partner_page_size, 3);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[cms]
version = "draft"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.cms.version, ContentVersion::Draft);
        // Default values preserved
        assert_eq!(config.cms.token_env, "STORYBLOK_TOKEN");
        assert_eq!(config.colors.primary, "#3C3063");
    }

    #[test]
    fn unknown_keys_rejected() {
        let toml = r#"
[cms]
verison = "draft"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_version_rejected() {
        let toml = r#"
[cms]
version = "latest"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_non_digit_whatsapp() {
        let mut config = SiteConfig::default();
        config.contact.whatsapp = "+91 6238811940".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let mut config = SiteConfig::default();
        config.widgets.partner_page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let mut config = SiteConfig::default();
        config.widgets.testimonial_interval_ms = 0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("testimonial_interval_ms"));
    }

    #[test]
    fn validate_rejects_non_http_api_base() {
        let mut config = SiteConfig::default();
        config.cms.api_base = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_missing_file_returns_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.tagline, "Your Flooring Partner");
    }

    #[test]
    fn load_config_merges_over_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
site_name = "Searock Tiles"

[colors]
secondary = "#ff8800"
"##,
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site_name, "Searock Tiles");
        assert_eq!(config.colors.secondary, "#ff8800");
        assert_eq!(config.colors.primary, "#3C3063");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "site_name = ").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_config_runs_validation() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[widgets]\npartner_page_size = 0\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn merge_toml_overlay_wins_and_base_preserved() {
        let base: toml::Value = toml::from_str("a = 1\n[t]\nx = 1\ny = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("[t]\ny = 3\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["t"]["x"].as_integer(), Some(1));
        assert_eq!(merged["t"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.site_name, defaults.site_name);
        assert_eq!(config.cms.api_base, defaults.cms.api_base);
        assert_eq!(config.widgets.counter_duration_ms, defaults.widgets.counter_duration_ms);
        assert_eq!(config.contact.map_embed_url, defaults.contact.map_embed_url);
    }

    #[test]
    fn contact_hrefs() {
        let contact = ContactConfig::default();
        assert_eq!(contact.tel_href(), "tel:+916238811940");
        assert_eq!(contact.mailto_href(), "mailto:searocktilegallery@gmail.com");
        assert_eq!(contact.whatsapp_href(), "https://wa.me/916238811940");
    }

    #[test]
    fn color_css_contains_variables() {
        let css = generate_color_css(&ColorConfig::default());
        assert!(css.contains("--color-primary: #3C3063;"));
        assert!(css.contains("--color-secondary: #F9811E;"));
    }

    #[test]
    fn token_from_env_treats_empty_as_missing() {
        let mut cms = CmsConfig::default();
        cms.token_env = "SEAROCK_TEST_TOKEN_THAT_IS_NEVER_SET".to_string();
        assert_eq!(cms.token_from_env(), None);
    }
}
