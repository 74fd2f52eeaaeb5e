//! Catalog data model.
//!
//! A run produces one [`Catalog`] holding every [`ProductRecord`] extracted from the portfolio,
//! plus the distinct brand and category labels. Both serialize with a fixed key order, which
//! is what the website consumes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A product row as read from a portfolio sheet, before categorization.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedProduct {
    pub code: String,
    pub name: String,
    pub unit: String,
    pub price: f64,
    pub brand: String,
}

impl ExtractedProduct {
    /// Attach a category, producing the catalog record.
    pub fn with_category(self, category: impl Into<String>) -> ProductRecord {
        ProductRecord {
            code: self.code,
            name: self.name,
            unit: self.unit,
            price: self.price,
            brand: self.brand,
            category: category.into(),
        }
    }
}

/// A single normalized product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Supplier product code, trimmed.
    pub code: String,
    /// Product display name, trimmed (always longer than two characters).
    pub name: String,
    /// Sales unit, trimmed; empty when the sheet has no unit column.
    pub unit: String,
    /// Final price; `0.0` when the cell was missing or unparsable.
    pub price: f64,
    /// Brand derived from the portfolio file name.
    pub brand: String,
    /// Category assigned by keyword match on `name`.
    pub category: String,
}

/// The aggregated catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Products ordered by `(brand, name)`.
    pub products: Vec<ProductRecord>,
    /// Sorted distinct brands appearing in `products`.
    pub brands: Vec<String>,
    /// Sorted distinct categories appearing in `products`.
    pub categories: Vec<String>,
    /// Always equal to `products.len()`.
    pub total_products: usize,
}

impl Catalog {
    /// Build a catalog from unordered products.
    ///
    /// Products are stably sorted by brand, then name, using plain code-point comparison
    /// (no accent folding). Brand and category sets are derived from the products themselves.
    pub fn from_products(mut products: Vec<ProductRecord>) -> Self {
        products.sort_by(|a, b| {
            (a.brand.as_str(), a.name.as_str()).cmp(&(b.brand.as_str(), b.name.as_str()))
        });

        let brands: BTreeSet<&str> = products.iter().map(|p| p.brand.as_str()).collect();
        let categories: BTreeSet<&str> = products.iter().map(|p| p.category.as_str()).collect();

        let brands = brands.into_iter().map(str::to_owned).collect();
        let categories = categories.into_iter().map(str::to_owned).collect();
        let total_products = products.len();

        Self {
            products,
            brands,
            categories,
            total_products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(brand: &str, name: &str, category: &str) -> ProductRecord {
        ProductRecord {
            code: "1".to_string(),
            name: name.to_string(),
            unit: String::new(),
            price: 0.0,
            brand: brand.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn from_products_sorts_by_brand_then_name() {
        let catalog = Catalog::from_products(vec![
            product("ZENU", "SALCHICHA", "Carnes y Embutidos"),
            product("ALPINA", "YOGURT", "Lácteos"),
            product("ALPINA", "AREQUIPE", "Lácteos"),
        ]);

        let order: Vec<(&str, &str)> = catalog
            .products
            .iter()
            .map(|p| (p.brand.as_str(), p.name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("ALPINA", "AREQUIPE"), ("ALPINA", "YOGURT"), ("ZENU", "SALCHICHA")]
        );
        assert_eq!(catalog.brands, vec!["ALPINA", "ZENU"]);
        assert_eq!(catalog.categories, vec!["Carnes y Embutidos", "Lácteos"]);
        assert_eq!(catalog.total_products, 3);
    }

    #[test]
    fn from_products_does_not_fold_accents() {
        // 'Á' (U+00C1) sorts after every ASCII uppercase letter.
        let catalog = Catalog::from_products(vec![
            product("B", "ÁGUILA", "Otros"),
            product("B", "ZANAHORIA", "Otros"),
        ]);
        assert_eq!(catalog.products[0].name, "ZANAHORIA");
        assert_eq!(catalog.products[1].name, "ÁGUILA");
    }

    #[test]
    fn empty_catalog_has_no_labels() {
        let catalog = Catalog::from_products(Vec::new());
        assert!(catalog.brands.is_empty());
        assert!(catalog.categories.is_empty());
        assert_eq!(catalog.total_products, 0);
    }
}
