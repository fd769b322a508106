use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to a resolved resource, typically a file path.
///
/// The decorator never inspects the contents; it only needs the value to be
/// cheap to clone and serializable for the cache store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    /// Creates a locator from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the locator as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the locator, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Locator {
    fn from(value: String) -> Self {
        Self(value)
    }
}
