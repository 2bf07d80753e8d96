//! Shared foundational types for the Silica extraction toolkit.
//!
//! This crate provides content hashing and the deterministic slug type used
//! to name generated stylesheet files reproducibly.

#![warn(missing_docs)]

pub mod hash;
pub mod slug;

pub use hash::ContentHash;
pub use slug::Slug;
