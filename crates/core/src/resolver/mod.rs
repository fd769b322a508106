mod error;
mod traits;
mod types;

pub use error::{ConfigurationError, ResolveError, Result};
pub use traits::Resolver;
pub use types::Locator;
