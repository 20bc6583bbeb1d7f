//! `forgecatalog-core` — shared building blocks for the catalog crates.
//!
//! This crate contains **pure** primitives (no IO): the value-object marker,
//! the lazy-once singleton cell and its error.

pub mod error;
pub mod singleton;
pub mod value_object;

pub use error::DuplicateSingletonError;
pub use singleton::Singleton;
pub use value_object::ValueObject;
