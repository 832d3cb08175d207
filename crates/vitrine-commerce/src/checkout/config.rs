//! Checkout destination and message settings.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::CURRENCY_PREFIX;

pub const DEFAULT_STORE_NAME: &str = "Almeida Modas";
pub const DEFAULT_MESSAGING_DOMAIN: &str = "wa.me";
pub const DEFAULT_PHONE_NUMBER: &str = "5511962209599";

/// Where checkout links point and how the order summary is worded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Store name used in the greeting line.
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Host of the messaging service (e.g., "wa.me").
    #[serde(default = "default_messaging_domain")]
    pub messaging_domain: String,

    /// Recipient phone number, digits only with country code.
    #[serde(default = "default_phone_number")]
    pub phone_number: String,

    /// Prefix in front of every amount.
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,
}

fn default_store_name() -> String {
    DEFAULT_STORE_NAME.to_string()
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

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            messaging_domain: default_messaging_domain(),
            phone_number: default_phone_number(),
            currency_prefix: default_currency_prefix(),
        }
    }
}

impl CheckoutConfig {
    pub fn with_store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = name.into();
        self
    }

    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = phone.into();
        self
    }

    pub fn with_messaging_domain(mut self, domain: impl Into<String>) -> Self {
        self.messaging_domain = domain.into();
        self
    }

    /// Check that the destination can form a link.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.phone_number.is_empty() {
            return Err(CommerceError::InvalidCheckoutConfig(
                "phone_number is required".to_string(),
            ));
        }
        if !self.phone_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommerceError::InvalidCheckoutConfig(format!(
                "phone_number must contain digits only: {}",
                self.phone_number
            )));
        }
        if self.messaging_domain.is_empty() {
            return Err(CommerceError::InvalidCheckoutConfig(
                "messaging_domain is required".to_string(),
            ));
        }
        if self.messaging_domain.contains("://") || self.messaging_domain.contains('/') {
            return Err(CommerceError::InvalidCheckoutConfig(format!(
                "messaging_domain must be a bare host: {}",
                self.messaging_domain
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CheckoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_phone_must_be_digits() {
        let config = CheckoutConfig::default().with_phone_number("+55 11 9");
        assert!(matches!(
            config.validate(),
            Err(CommerceError::InvalidCheckoutConfig(_))
        ));
    }

    #[test]
    fn test_domain_must_be_bare_host() {
        let config = CheckoutConfig::default().with_messaging_domain("https://wa.me");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CheckoutConfig = serde_json::from_str(r#"{"phone_number":"5511900000000"}"#).unwrap();
        assert_eq!(config.phone_number, "5511900000000");
        assert_eq!(config.messaging_domain, "wa.me");
        assert_eq!(config.store_name, "Almeida Modas");
    }
}
