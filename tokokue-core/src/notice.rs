//! User-facing notices raised by storefront operations.
//!
//! Notices carry an i18n key plus the values interpolated into it; the web
//! crate renders them through its locale bundle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// A new line was appended to the cart.
    Added { name: String },
    /// An existing line's quantity went up by one.
    Incremented { name: String },
    /// A line was removed, either directly or by decrementing to zero.
    Removed { name: String },
    /// The whole cart was emptied.
    Cleared,
    /// Checkout was attempted on an empty cart.
    CartEmpty,
    /// Checkout acknowledgement.
    CheckoutThanks,
    /// A search matched no menu card.
    NoResults,
    /// The contact form finished its simulated submission.
    MessageSent,
}

impl Notice {
    /// Locale key for this notice.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Added { .. } => "cart.added",
            Self::Incremented { .. } => "cart.incremented",
            Self::Removed { .. } => "cart.removed",
            Self::Cleared => "cart.cleared",
            Self::CartEmpty => "cart.empty",
            Self::CheckoutThanks => "cart.checkout_thanks",
            Self::NoResults => "search.no_results",
            Self::MessageSent => "contact.sent",
        }
    }

    /// Interpolation values for [`Notice::key`].
    #[must_use]
    pub fn vars(&self) -> BTreeMap<&'static str, &str> {
        let mut vars = BTreeMap::new();
        if let Self::Added { name } | Self::Incremented { name } | Self::Removed { name } = self {
            vars.insert("name", name.as_str());
        }
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_notices_expose_the_product_name() {
        let notice = Notice::Removed {
            name: String::from("Red Velvet"),
        };
        assert_eq!(notice.key(), "cart.removed");
        assert_eq!(notice.vars().get("name"), Some(&"Red Velvet"));
    }

    #[test]
    fn plain_notices_have_no_vars() {
        assert!(Notice::Cleared.vars().is_empty());
        assert_eq!(Notice::NoResults.key(), "search.no_results");
    }

    #[test]
    fn notices_serialize_with_kind_tag() {
        let json = serde_json::to_string(&Notice::Added {
            name: String::from("Tiramisu"),
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"added","name":"Tiramisu"}"#);
    }
}
