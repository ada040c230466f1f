//! Newtype IDs for type-safe identifiers.
//!
//! Products, categories and brands are all keyed by plain strings in the
//! catalog document; the newtypes keep them from being mixed up.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CategoryId);
define_id!(BrandId);

impl ProductId {
    /// Catalog-style id for the n-th generated product (`KWSK-000001`).
    pub fn sequential(n: u32) -> Self {
        Self(format!("KWSK-{:06}", n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("KWSK-000123");
        assert_eq!(id.as_str(), "KWSK-000123");
    }

    #[test]
    fn test_sequential_id() {
        assert_eq!(ProductId::sequential(1).as_str(), "KWSK-000001");
        assert_eq!(ProductId::sequential(450).as_str(), "KWSK-000450");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut index = HashMap::new();
        index.insert(ProductId::new("a"), 1usize);
        assert_eq!(index.get("a"), Some(&1));
    }

    #[test]
    fn test_serde_transparent() {
        let id: BrandId = serde_json::from_str("\"komatsu\"").unwrap();
        assert_eq!(id, BrandId::from("komatsu"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"komatsu\"");
    }
}
