//! Cache key derivation.
//!
//! Every cached lookup lives under a caller-chosen prefix so that multiple
//! independent resolvers can share one store without observing each other's
//! entries. The key is the plain concatenation `prefix + name`, matching the
//! namespacing the decorator was configured with.

/// Returns the cache key for a name lookup under a prefix.
///
/// # Examples
///
/// ```
/// use locache_core::cache::lookup_key;
///
/// assert_eq!(lookup_key("app_", "Foo"), "app_Foo");
/// ```
pub fn lookup_key(prefix: &str, name: &str) -> String {
    format!("{prefix}{name}")
}

/// Returns the glob pattern matching every lookup key under a prefix.
///
/// Used for bulk invalidation of a single resolver's entries.
///
/// # Examples
///
/// ```
/// use locache_core::cache::prefix_pattern;
///
/// assert_eq!(prefix_pattern("app_"), "app_*");
/// ```
pub fn prefix_pattern(prefix: &str) -> String {
    format!("{prefix}*")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::pattern_matches;

    #[test]
    fn test_lookup_key() {
        assert_eq!(lookup_key("app_", "Foo"), "app_Foo");
        assert_eq!(lookup_key("vendor:", "Acme\\Widget"), "vendor:Acme\\Widget");
    }

    #[test]
    fn test_lookup_key_empty_name() {
        assert_eq!(lookup_key("app_", ""), "app_");
    }

    #[test]
    fn test_prefix_pattern() {
        assert_eq!(prefix_pattern("app_"), "app_*");
    }

    #[test]
    fn test_prefix_pattern_matches_own_keys_only() {
        let pattern = prefix_pattern("app_");

        assert!(pattern_matches(&pattern, &lookup_key("app_", "Foo")));
        assert!(pattern_matches(&pattern, &lookup_key("app_", "Bar")));
        assert!(!pattern_matches(&pattern, &lookup_key("vendor_", "Foo")));
    }

    #[test]
    fn test_distinct_prefixes_never_collide_for_same_name() {
        assert_ne!(lookup_key("app_", "Foo"), lookup_key("vendor_", "Foo"));
    }
}
