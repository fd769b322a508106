//! Fixed-table resolver.

use std::collections::HashMap;

use async_trait::async_trait;

use locache_core::resolver::{Locator, Resolver, Result};

/// Resolver backed by a fixed name-to-locator table.
///
/// No searching happens here; a name either is in the table or it is not.
/// Useful as a test collaborator and for projects whose name map is known
/// up front (e.g. generated from a build manifest).
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    locators: HashMap<String, Locator>,
}

impl StaticResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, builder style.
    pub fn with_entry(mut self, name: impl Into<String>, locator: impl Into<Locator>) -> Self {
        self.locators.insert(name.into(), locator.into());
        self
    }

    /// Adds an entry in place.
    pub fn insert(&mut self, name: impl Into<String>, locator: impl Into<Locator>) {
        self.locators.insert(name.into(), locator.into());
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.locators.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}

#[async_trait]
impl Resolver for StaticResolver {
    async fn resolve(&self, name: &str) -> Result<Option<Locator>> {
        Ok(self.locators.get(name).cloned())
    }

    async fn known_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.locators.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
