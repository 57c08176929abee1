//! Shared collection utilities
//!
//! This module provides the small collection helpers used by the combiner
//! and indexers, chiefly the append-or-create [`MultiMap`] backing every
//! one-to-many index in the crate.

pub mod multimap;

pub use multimap::MultiMap;
