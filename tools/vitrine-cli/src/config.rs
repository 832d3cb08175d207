//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vitrine_commerce::checkout::{
    CheckoutConfig, DEFAULT_MESSAGING_DOMAIN, DEFAULT_PHONE_NUMBER, DEFAULT_STORE_NAME,
};
use vitrine_commerce::money::CURRENCY_PREFIX;

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["vitrine.toml", ".vitrine.toml", "vitrine.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Checkout destination.
    #[serde(default)]
    pub checkout: CheckoutSection,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config content; JSON when the path ends in `.json`, TOML otherwise.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Checkout settings as the commerce crate expects them.
    pub fn checkout_config(&self) -> CheckoutConfig {
        CheckoutConfig {
            store_name: self.store.name.clone(),
            messaging_domain: self.checkout.messaging_domain.clone(),
            phone_number: self.checkout.phone_number.clone(),
            currency_prefix: self.checkout.currency_prefix.clone(),
        }
    }
}

/// Store metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Store name, used in the order greeting.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Path to a JSON catalog feed. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Base path the storefront is served under.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_store_name() -> String {
    DEFAULT_STORE_NAME.to_string()
}

fn default_base_path() -> String {
    "/".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            catalog: None,
            base_path: default_base_path(),
        }
    }
}

/// Checkout destination settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSection {
    /// Messaging service host.
    #[serde(default = "default_messaging_domain")]
    pub messaging_domain: String,

    /// Recipient phone number.
    #[serde(default = "default_phone_number")]
    pub phone_number: String,

    /// Prefix in front of every amount.
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,
}

fn default_messaging_domain() -> String {
    DEFAULT_MESSAGING_DOMAIN.to_string()
}

fn default_phone_number() -> String {
    DEFAULT_PHONE_NUMBER.to_string()
}

fn default_currency_prefix() -> String {
    CURRENCY_PREFIX.to_string()
}

impl Default for CheckoutSection {
    fn default() -> Self {
        Self {
            messaging_domain: default_messaging_domain(),
            phone_number: default_phone_number(),
            currency_prefix: default_currency_prefix(),
        }
    }
}

/// Generate a default vitrine.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Vitrine storefront configuration

[store]
name = "{name}"
base_path = "/"
# catalog = "catalog.json"

[checkout]
messaging_domain = "{domain}"
phone_number = "{phone}"
currency_prefix = "{prefix}"
"#,
        name = name,
        domain = DEFAULT_MESSAGING_DOMAIN,
        phone = DEFAULT_PHONE_NUMBER,
        prefix = CURRENCY_PREFIX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = CliConfig::parse("vitrine.toml", &generate_default_config("Loja Teste")).unwrap();
        assert_eq!(config.store.name, "Loja Teste");
        assert_eq!(config.store.catalog, None);
        assert_eq!(config.checkout, CheckoutSection::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::parse("vitrine.toml", "").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.checkout_config(), CheckoutConfig::default());
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            "vitrine.json",
            r#"{"checkout": {"phone_number": "5521988887777"}}"#,
        )
        .unwrap();
        assert_eq!(config.checkout.phone_number, "5521988887777");
        assert_eq!(config.checkout.messaging_domain, "wa.me");
    }

    #[test]
    fn test_checkout_config_carries_store_name() {
        let mut config = CliConfig::default();
        config.store.name = "Outra Loja".to_string();
        assert_eq!(config.checkout_config().store_name, "Outra Loja");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(CliConfig::parse("vitrine.toml", "[store\nname=").is_err());
    }
}
