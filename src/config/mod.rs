//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Billed backend (e.g., "http://localhost:5678")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Local storage key holding the bearer token, if any
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

/// Page rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Height of the vertical navigation bar, in `vh`
    #[serde(default = "default_layout_height")]
    pub layout_height: u32,

    /// Width of the receipt image in the preview modal, in pixels
    #[serde(default = "default_modal_image_width")]
    pub modal_image_width: u32,
}

/// New bill form settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// VAT percentage used when the `pct` field is not a number
    #[serde(default = "default_pct")]
    pub default_pct: u32,
}

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BilledConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub form: FormConfig,
}

fn default_base_url() -> String {
    "http://localhost:5678".to_string()
}

fn default_token_key() -> String {
    "jwt".to_string()
}

fn default_layout_height() -> u32 {
    120
}

fn default_modal_image_width() -> u32 {
    400
}

fn default_pct() -> u32 {
    20
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_key: default_token_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout_height: default_layout_height(),
            modal_image_width: default_modal_image_width(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_pct: default_pct(),
        }
    }
}

impl BilledConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BilledConfig::default();

        assert_eq!(config.api.base_url, "http://localhost:5678");
        assert_eq!(config.api.token_key, "jwt");
        assert_eq!(config.ui.layout_height, 120);
        assert_eq!(config.form.default_pct, 20);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
api:
  base_url: "https://billed.test"
ui:
  modal_image_width: 640
"#;
        let config = BilledConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.api.base_url, "https://billed.test");
        assert_eq!(config.api.token_key, "jwt");
        assert_eq!(config.ui.modal_image_width, 640);
        assert_eq!(config.ui.layout_height, 120);
        assert_eq!(config.form.default_pct, 20);
    }

    #[test]
    fn test_yaml_serialization() {
        let config = BilledConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = BilledConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(BilledConfig::from_yaml_str("ui: [not, a, map]").is_err());
    }
}
