use serde::{Deserialize, Serialize};

use forgecatalog_core::ValueObject;

use crate::category::Category;

/// Catalog item.
///
/// Immutable after construction and compared by value: two products with the
/// same name, price and category are equal, and nothing prevents the catalog
/// from holding both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: f64,
    category: Category,
}

impl Product {
    /// Generic product carrying any category.
    ///
    /// The price is not validated.
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<Category>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    pub fn electronics(name: impl Into<String>, price: f64) -> Self {
        Self::new(name, price, Category::Electronics)
    }

    pub fn clothing(name: impl Into<String>, price: f64) -> Self {
        Self::new(name, price, Category::Clothing)
    }

    pub fn food(name: impl Into<String>, price: f64) -> Self {
        Self::new(name, price, Category::Food)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// One-line listing, e.g. `Laptop - $1200 - Electronics`.
    pub fn info(&self) -> String {
        self.to_string()
    }
}

impl ValueObject for Product {}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - ${} - {}", self.name, self.price, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_constructors_fix_the_category() {
        assert_eq!(Product::electronics("Laptop", 1200.0).category(), &Category::Electronics);
        assert_eq!(Product::clothing("T-Shirt", 25.0).category(), &Category::Clothing);
        assert_eq!(Product::food("Pizza", 15.0).category(), &Category::Food);
    }

    #[test]
    fn tagged_variant_equals_generic_product_with_same_fields() {
        let tagged = Product::food("Pizza", 15.0);
        let generic = Product::new("Pizza", 15.0, "Food");
        assert_eq!(tagged, generic);
    }

    #[test]
    fn info_matches_listing_format() {
        assert_eq!(Product::electronics("Laptop", 1200.0).info(), "Laptop - $1200 - Electronics");
        assert_eq!(Product::new("Mug", 7.5, "Kitchen").info(), "Mug - $7.5 - Kitchen");
    }

    #[test]
    fn negative_price_is_accepted() {
        let product = Product::new("Refund voucher", -5.0, "Other");
        assert_eq!(product.price(), -5.0);
    }

    #[test]
    fn serializes_with_category_label() {
        let product = Product::clothing("T-Shirt", 25.0);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "T-Shirt", "price": 25.0, "category": "Clothing" })
        );

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }
}
