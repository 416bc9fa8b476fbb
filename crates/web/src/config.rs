//! Storefront configuration, passed explicitly into view construction.

use serde::{Deserialize, Serialize};
use storefront_core::{DomainError, DomainResult};

use crate::types::Theme;

/// Heading shown above the catalog unless configured otherwise.
pub const DEFAULT_TITLE: &str = "E-commerce Web App";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Initial theme of the feature section.
    pub theme: Theme,
    /// Heading of the feature section.
    pub title: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| DomainError::validation(format!("storefront config: {e}")))?;
        if config.title.trim().is_empty() {
            return Err(DomainError::validation("storefront config: title cannot be empty"));
        }
        Ok(config)
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = StorefrontConfig::from_json("{}").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.title, "E-commerce Web App");
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn fields_override_defaults() {
        let config =
            StorefrontConfig::from_json(r#"{"theme":"dark","title":"Corner Shop"}"#).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.title, "Corner Shop");
    }

    #[test]
    fn rejects_unknown_theme() {
        let err = StorefrontConfig::from_json(r#"{"theme":"sepia"}"#).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.starts_with("storefront config:")),
            _ => panic!("Expected Validation error for unknown theme"),
        }
    }

    #[test]
    fn rejects_blank_title() {
        assert!(StorefrontConfig::from_json(r#"{"title":"  "}"#).is_err());
    }

    #[test]
    fn with_theme_overrides_only_theme() {
        let config = StorefrontConfig::default().with_theme(Theme::Dark);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.title, DEFAULT_TITLE);
    }
}
