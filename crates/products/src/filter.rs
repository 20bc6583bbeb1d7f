//! Filter strategies over product sequences.
//!
//! A strategy is a predicate plus the order-preserving selection built on it.
//! Strategies only hold their configuration, so one value can be reused across
//! catalogs and calls. Any `Fn(&Product) -> bool` closure is a strategy too.

use crate::product::Product;

pub trait FilterStrategy {
    /// Whether `product` is selected.
    fn matches(&self, product: &Product) -> bool;

    /// Selected products, in their original relative order.
    fn filter(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    /// Products selected by both `self` and `other`.
    fn and<B>(self, other: B) -> And<Self, B>
    where
        Self: Sized,
        B: FilterStrategy,
    {
        And(self, other)
    }

    /// Products selected by `self` or `other` (each at most once).
    fn or<B>(self, other: B) -> Or<Self, B>
    where
        Self: Sized,
        B: FilterStrategy,
    {
        Or(self, other)
    }

    /// Products not selected by `self`.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<F> FilterStrategy for F
where
    F: Fn(&Product) -> bool,
{
    fn matches(&self, product: &Product) -> bool {
        self(product)
    }
}

/// Selects products whose category label equals `category` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl FilterStrategy for CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        product.category().as_str() == self.category
    }
}

/// Selects products priced within `[min, max]` (inclusive).
///
/// Bounds are not validated: an inverted range selects nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceFilter {
    min: f64,
    max: f64,
}

impl PriceFilter {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl FilterStrategy for PriceFilter {
    fn matches(&self, product: &Product) -> bool {
        self.min <= product.price() && product.price() <= self.max
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct And<A, B>(A, B);

impl<A: FilterStrategy, B: FilterStrategy> FilterStrategy for And<A, B> {
    fn matches(&self, product: &Product) -> bool {
        self.0.matches(product) && self.1.matches(product)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Or<A, B>(A, B);

impl<A: FilterStrategy, B: FilterStrategy> FilterStrategy for Or<A, B> {
    fn matches(&self, product: &Product) -> bool {
        self.0.matches(product) || self.1.matches(product)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Not<A>(A);

impl<A: FilterStrategy> FilterStrategy for Not<A> {
    fn matches(&self, product: &Product) -> bool {
        !self.0.matches(product)
    }
}
