//! Messaging deep link construction.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::checkout::{CheckoutConfig, CheckoutMessage};
use crate::error::CommerceError;
use crate::money::Money;

/// Characters left as-is inside a URI component. Everything else, including
/// every non-ASCII byte, is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use as a single URI component.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// A checkout link: `https://<domain>/<phone>?text=<encoded summary>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutLink {
    url: String,
    #[serde(skip)]
    total: Money,
}

impl CheckoutLink {
    pub fn new(config: &CheckoutConfig, message: &CheckoutMessage) -> Self {
        let url = format!(
            "https://{}/{}?text={}",
            config.messaging_domain,
            config.phone_number,
            encode_component(message.text())
        );
        Self {
            url,
            total: message.total(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Order total carried in the message.
    pub fn total(&self) -> Money {
        self.total
    }
}

impl fmt::Display for CheckoutLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Platform primitive that opens a URL in a new browsing context.
pub trait LinkOpener {
    fn open_in_new_context(&self, url: &str) -> Result<(), CommerceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_uri_component_rules() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("*(2x)*"), "*(2x)*");
        assert_eq!(encode_component("R$ 1.00\n"), "R%24%201.00%0A");
        assert_eq!(encode_component("Olá"), "Ol%C3%A1");
        assert_eq!(encode_component("a&b=c?"), "a%26b%3Dc%3F");
        assert_eq!(encode_component("-_.!~'"), "-_.!~'");
    }
}
