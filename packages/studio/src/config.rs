//! # Studio configuration — `studio.toml`
//!
//! The web entry point embeds a `studio.toml` and parses it at startup. It
//! controls the language of new block content, how the preview refreshes,
//! and the domain used for cosmetic publish references.
//!
//! ## Structure
//!
//! ```toml
//! [blocks]
//! locale = "en"                      # "en" | "ru"
//!
//! [preview]
//! mode = "manual"                    # "manual" | "live"
//!
//! [publish]
//! domain = "sitestudio.dev/project"
//!
//! [links]
//! channel = "https://t.me/example"   # optional, shown in the menu
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`StudioConfig`] | Top-level config with TOML (de)serialisation and builder helpers. |
//! | [`BlocksConfig`] | Locale used for default block content. |
//! | [`PreviewConfig`] | [`PreviewMode`] of the preview surface. |
//! | [`PublishConfig`] | Domain prefix of generated publish references. |
//! | [`LinksConfig`] | Optional external links listed in the menu. |
//!
//! Every section derives or implements `Default`, so a missing or empty file
//! is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration stored in `studio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudioConfig {
    #[serde(default)]
    pub blocks: BlocksConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub publish: PublishConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlocksConfig {
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default)]
    pub mode: PreviewMode,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Prefix of every generated reference, without a trailing slash.
    #[serde(default = "default_publish_domain")]
    pub domain: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Project channel URL. The menu item is hidden when unset or blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl LinksConfig {
    pub fn channel(&self) -> Option<&str> {
        self.channel
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

fn default_publish_domain() -> String {
    "sitestudio.dev/project".to_string()
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            domain: default_publish_domain(),
        }
    }
}

/// Language of the default content given to new blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// How the preview surface picks up changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    /// Snapshot taken on explicit refresh; the frame remounts per revision.
    #[default]
    Manual,
    /// Recomposed on every buffer change; the frame may treat itself as same-origin.
    Live,
}

impl PreviewMode {
    /// Value for the iframe `sandbox` attribute.
    pub fn sandbox(&self) -> &'static str {
        match self {
            PreviewMode::Manual => "allow-scripts allow-modals allow-forms allow-popups",
            PreviewMode::Live => {
                "allow-scripts allow-modals allow-forms allow-popups allow-same-origin"
            }
        }
    }
}

impl StudioConfig {
    /// Builder method to set the block locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.blocks.locale = locale;
        self
    }

    /// Builder method to set the preview mode.
    pub fn with_preview_mode(mut self, mode: PreviewMode) -> Self {
        self.preview.mode = mode;
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = StudioConfig::from_toml("").unwrap();
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.blocks.locale, Locale::En);
        assert_eq!(config.preview.mode, PreviewMode::Manual);
        assert_eq!(config.publish.domain, "sitestudio.dev/project");
    }

    #[test]
    fn test_partial_sections() {
        let config = StudioConfig::from_toml("[preview]\nmode = \"live\"\n").unwrap();
        assert_eq!(config.preview.mode, PreviewMode::Live);
        assert_eq!(config.blocks.locale, Locale::En);
        assert_eq!(config.publish, PublishConfig::default());
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let config = StudioConfig::default()
            .with_locale(Locale::Ru)
            .with_preview_mode(PreviewMode::Live);
        let text = config.to_toml().unwrap();
        assert!(text.contains("locale = \"ru\""));
        assert_eq!(StudioConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_channel_link() {
        assert_eq!(StudioConfig::default().links.channel(), None);

        let config =
            StudioConfig::from_toml("[links]\nchannel = \"https://t.me/example\"\n").unwrap();
        assert_eq!(config.links.channel(), Some("https://t.me/example"));

        let blank = StudioConfig::from_toml("[links]\nchannel = \"  \"\n").unwrap();
        assert_eq!(blank.links.channel(), None);
    }

    #[test]
    fn test_unknown_mode_is_error() {
        let err = StudioConfig::from_toml("[preview]\nmode = \"sometimes\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_sandbox_same_origin_only_when_live() {
        assert!(!PreviewMode::Manual.sandbox().contains("allow-same-origin"));
        assert!(PreviewMode::Live.sandbox().contains("allow-same-origin"));
        assert!(PreviewMode::Manual.sandbox().contains("allow-scripts"));
    }
}
