//! Product factory: category label -> product variant.

use crate::category::Category;
use crate::product::Product;

/// Builds products from a category label.
///
/// Known labels get their tagged constructor; anything else produces a generic
/// product that keeps the caller's label verbatim. Creation never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFactory;

impl ProductFactory {
    pub fn create(category: &str, name: impl Into<String>, price: f64) -> Product {
        Self::create_with(Category::from_label(category), name, price)
    }

    pub fn create_with(category: Category, name: impl Into<String>, price: f64) -> Product {
        match category {
            Category::Electronics => Product::electronics(name, price),
            Category::Clothing => Product::clothing(name, price),
            Category::Food => Product::food(name, price),
            Category::Other(label) => {
                tracing::debug!(
                    category = %label,
                    "unrecognized category, creating generic product"
                );
                Product::new(name, price, Category::Other(label))
            }
        }
    }
}
