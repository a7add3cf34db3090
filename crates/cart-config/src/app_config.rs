//! Application configuration
//!
//! Configuration loaded from `.cart-tui.toml`.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from `.cart-tui.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Question shown by the clear-cart confirmation dialog
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Label of the button that confirms clearing the cart
    #[serde(default = "default_confirm_label")]
    pub confirm_label: String,

    /// Label of the button that dismisses the dialog
    #[serde(default = "default_cancel_label")]
    pub cancel_label: String,

    /// SKUs cycled through when adding items to the cart
    #[serde(default = "default_catalog")]
    pub catalog: Vec<String>,
}

fn default_prompt() -> String {
    "Remove all items from your shopping cart?".to_string()
}

fn default_confirm_label() -> String {
    "confirm".to_string()
}

fn default_cancel_label() -> String {
    "cancel".to_string()
}

fn default_catalog() -> Vec<String> {
    ["sku-apple", "sku-bread", "sku-cheese", "sku-dates"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            confirm_label: default_confirm_label(),
            cancel_label: default_cancel_label(),
            catalog: default_catalog(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::parse_or_default(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Parse TOML content, falling back to defaults when it is malformed
    pub fn parse_or_default(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.prompt, "Remove all items from your shopping cart?");
        assert_eq!(config.confirm_label, "confirm");
        assert_eq!(config.cancel_label, "cancel");
        assert!(!config.catalog.is_empty());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            confirm_label = "yes"
            catalog = ["sku1"]
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.confirm_label, "yes");
        assert_eq!(config.catalog, vec!["sku1".to_string()]);
        // Other fields should use defaults
        assert_eq!(config.cancel_label, "cancel");
        assert_eq!(config.prompt, "Remove all items from your shopping cart?");
    }

    #[test]
    fn test_parse_or_default_falls_back_on_garbage() {
        let config = AppConfig::parse_or_default("confirm_label = [not toml");
        assert_eq!(config, AppConfig::default());
    }
}
