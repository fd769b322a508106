use async_trait::async_trait;

use super::{Locator, ResolveError, Result};

/// Capability that maps a symbolic name to a resource locator.
///
/// The resolution algorithm is entirely the implementation's business; it may
/// scan the filesystem, consult a manifest, or answer from a fixed table.
/// Implementations are expected to be deterministic for a given name while
/// their underlying source material is unchanged — that is what makes the
/// answers cacheable.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolves a name to its locator.
    ///
    /// `Ok(None)` means the resolver looked and found nothing. It is a
    /// legitimate, cacheable answer, not an error.
    async fn resolve(&self, name: &str) -> Result<Option<Locator>>;

    /// Lists every name this resolver can currently answer for.
    ///
    /// Not every resolver is enumerable; the default declines with
    /// [`ResolveError::Unsupported`].
    async fn known_names(&self) -> Result<Vec<String>> {
        Err(ResolveError::Unsupported("known_names"))
    }
}
