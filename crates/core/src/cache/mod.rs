mod error;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{lookup_key, prefix_pattern};
pub use patterns::pattern_matches;
pub use serialization::{deserialize_lookup, serialize_lookup, SerializationError};
pub use traits::Cache;
