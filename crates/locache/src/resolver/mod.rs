//! Resolver implementations.
//!
//! The decorator works with any `locache_core::resolver::Resolver`; this
//! module only ships the trivial fixed-table implementation used in tests
//! and simple wiring.

mod static_table;

pub use static_table::StaticResolver;
