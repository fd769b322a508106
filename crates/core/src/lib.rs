//! Core traits and types for the locache project.
//!
//! This crate defines the two collaborator capabilities the `locache`
//! decorator composes — a [`resolver::Resolver`] that maps symbolic names to
//! resource locators, and a [`cache::Cache`] key-value store that memoizes
//! those answers — together with cache key derivation, the serialized lookup
//! encoding, and the error enums for each concern.
//!
//! Backend implementations live in the `locache` crate; nothing here touches
//! the network or the filesystem.

pub mod cache;
pub mod resolver;
