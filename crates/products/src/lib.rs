//! Products domain module (in-memory catalog).
//!
//! This crate contains the catalog's business rules implemented purely as
//! in-memory domain logic (no IO, no storage): the product value type, the
//! factory that builds it from a category label, the process-wide catalog and
//! the filter strategies applied to it.

pub mod catalog;
pub mod category;
pub mod factory;
pub mod filter;
pub mod product;

pub use catalog::ProductCatalog;
pub use category::Category;
pub use factory::ProductFactory;
pub use filter::{And, CategoryFilter, FilterStrategy, Not, Or, PriceFilter};
pub use forgecatalog_core::DuplicateSingletonError;
pub use product::Product;
