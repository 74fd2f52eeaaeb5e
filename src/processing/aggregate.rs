//! Folding per-file products into the final [`Catalog`].

use crate::error::CatalogResult;
use crate::types::{Catalog, ExtractedProduct};

use super::category::categorize;

/// Categorize and combine per-file product batches into one catalog.
///
/// Batches may arrive in any order; the catalog ordering only depends on brand and name.
pub fn aggregate<I>(batches: I) -> Catalog
where
    I: IntoIterator<Item = Vec<ExtractedProduct>>,
{
    let products = batches
        .into_iter()
        .flatten()
        .map(|p| {
            let category = categorize(&p.name);
            p.with_category(category)
        })
        .collect();

    Catalog::from_products(products)
}

/// Serialize a catalog as pretty-printed JSON (two-space indent, non-ASCII kept as-is).
pub fn catalog_to_json(catalog: &Catalog) -> CatalogResult<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}
