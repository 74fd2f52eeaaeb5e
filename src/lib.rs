//! `portfolio-catalog` turns a folder of supplier spreadsheet price lists into one normalized
//! JSON product catalog for a static website.
//!
//! The primary entrypoint is [`pipeline::run`], which:
//!
//! - lists the `.xlsx`, `.xls` and `.ods` files of the portfolio directory (sorted by name)
//! - reads the first sheet of each, locating the header row by content and mapping the
//!   code / name / unit / price columns by keyword
//! - derives the brand from the file name and the category from the product name
//! - sorts everything by brand and name and writes the catalog as pretty-printed JSON
//!
//! ## Output document
//!
//! ```json
//! {
//!   "products": [
//!     {
//!       "code": "001",
//!       "name": "LECHE ENTERA",
//!       "unit": "LT",
//!       "price": 4500.0,
//!       "brand": "LECHERIA",
//!       "category": "Lácteos"
//!     }
//!   ],
//!   "brands": ["LECHERIA"],
//!   "categories": ["Lácteos"],
//!   "total_products": 1
//! }
//! ```
//!
//! ## Quick example
//!
//! ```no_run
//! use portfolio_catalog::pipeline::{build_catalog, BuildOptions};
//!
//! # fn main() -> Result<(), portfolio_catalog::CatalogError> {
//! let options = BuildOptions {
//!     portfolio_dir: "listas".into(),
//!     ..Default::default()
//! };
//! // Reads and aggregates without writing the output file.
//! let catalog = build_catalog(&options)?;
//! println!("products={} brands={:?}", catalog.total_products, catalog.brands);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: file discovery, sheet extraction and progress observers
//! - [`processing`]: price normalization, brand derivation, categorization, aggregation
//! - [`pipeline`]: build options and the end-to-end run
//! - [`types`]: catalog data model
//! - [`error`]: error type used across the crate
//! - [`logging`]: `tracing` subscriber setup for the binary and tests

pub mod error;
pub mod ingestion;
pub mod logging;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{CatalogError, CatalogResult};
