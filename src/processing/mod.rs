//! Normalization, categorization and aggregation of extracted products.
//!
//! These are pure functions: they never touch the filesystem and can be tested on plain
//! values.
//!
//! - [`normalize_price()`]: turn a price cell into a float
//! - [`brand_from_file_name()`]: derive a brand label from a portfolio file name
//! - [`categorize()`]: assign a category by ordered keyword match
//! - [`aggregate()`]: fold per-file batches into a sorted [`crate::types::Catalog`]
//!
//! ## Example
//!
//! ```rust
//! use portfolio_catalog::processing::{aggregate, categorize};
//! use portfolio_catalog::types::ExtractedProduct;
//!
//! assert_eq!(categorize("Cocoa con chocolate"), "Café y Chocolate");
//!
//! let catalog = aggregate(vec![vec![ExtractedProduct {
//!     code: "001".to_string(),
//!     name: "LECHE ENTERA".to_string(),
//!     unit: "LT".to_string(),
//!     price: 4500.0,
//!     brand: "LECHERIA".to_string(),
//! }]]);
//! assert_eq!(catalog.categories, vec!["Lácteos".to_string()]);
//! ```

pub mod aggregate;
pub mod brand;
pub mod category;
pub mod price;

pub use aggregate::{aggregate, catalog_to_json};
pub use brand::brand_from_file_name;
pub use category::{categorize, CATEGORY_RULES, FALLBACK_CATEGORY};
pub use price::{normalize_price, normalize_price_text};
