//! Process-wide product catalog.
//!
//! There is exactly one catalog per process. It is created lazily by
//! [`ProductCatalog::get_instance`]; [`ProductCatalog::try_new`] is the direct
//! construction path and refuses to build a second instance.

use std::sync::{PoisonError, RwLock};

use forgecatalog_core::{DuplicateSingletonError, Singleton};

use crate::filter::FilterStrategy;
use crate::product::Product;

static CATALOG: Singleton<ProductCatalog> = Singleton::new();

/// Insertion-ordered product list.
///
/// Duplicates are allowed and nothing is ever removed. The list sits behind a
/// lock so `add` cannot interleave with a running `filter`.
#[derive(Debug)]
pub struct ProductCatalog {
    products: RwLock<Vec<Product>>,
}

impl ProductCatalog {
    fn empty() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
        }
    }

    /// Returns the process-wide catalog, creating it on first call.
    pub fn get_instance() -> &'static ProductCatalog {
        CATALOG.get_or_init(Self::empty)
    }

    /// Directly constructs the process-wide catalog.
    ///
    /// Fails with [`DuplicateSingletonError`] if the catalog already exists.
    pub fn try_new() -> Result<&'static ProductCatalog, DuplicateSingletonError> {
        CATALOG.try_init(Self::empty)
    }

    /// Appends `product` to the end of the catalog.
    pub fn add(&self, product: Product) {
        tracing::trace!(name = product.name(), category = %product.category(), "adding product");
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(product);
    }

    /// Copy of every product, in insertion order.
    ///
    /// Changing the returned vector does not affect the catalog.
    pub fn all(&self) -> Vec<Product> {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Products selected by `strategy`, in insertion order.
    ///
    /// The strategy runs over a snapshot taken from [`ProductCatalog::all`], with
    /// no lock held, so it may call back into the catalog.
    pub fn filter<S>(&self, strategy: &S) -> Vec<Product>
    where
        S: FilterStrategy + ?Sized,
    {
        let products = self.all();
        let selected = strategy.filter(&products);
        tracing::trace!(total = products.len(), selected = selected.len(), "filtered catalog");
        selected
    }

    pub fn len(&self) -> usize {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
