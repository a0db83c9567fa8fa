//! Core contracts for Acheron.
//!
//! This crate defines the identifier-space allocator, the input corpus, and
//! the error type shared across the generator crates.

pub mod corpus;
pub mod error;
pub mod idspace;

pub use corpus::{Corpus, LevelPlaces};
pub use error::{Error, Result};
pub use idspace::{Counter, IdAllocator, IdRange, SENTINEL_ROWS};
