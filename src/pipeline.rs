//! End-to-end catalog build.
//!
//! Most callers should use [`run`], which lists the portfolio directory, reads every workbook,
//! aggregates the products and writes the JSON catalog.
//!
//! - Files that cannot be read, or lack a code/name column, are reported and skipped.
//! - A missing portfolio directory, any other I/O failure or a failed output write aborts the
//!   run.
//! - If an [`CatalogObserver`] is configured, progress is reported to it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::error::CatalogResult;
use crate::ingestion::{
    locate_portfolio_files, read_portfolio_file, CatalogObserver, CatalogSummary, FileContext,
    FileStats,
};
use crate::processing::{aggregate, catalog_to_json};
use crate::types::{Catalog, ExtractedProduct};

/// Default directory holding the portfolio spreadsheets.
pub const DEFAULT_PORTFOLIO_DIR: &str = "portfolio";
/// Default location of the generated catalog.
pub const DEFAULT_OUTPUT_FILE: &str = "site/data.json";

/// Environment variable overriding [`BuildOptions::portfolio_dir`].
pub const PORTFOLIO_DIR_ENV: &str = "CATALOG_PORTFOLIO_DIR";
/// Environment variable overriding [`BuildOptions::output_file`].
pub const OUTPUT_FILE_ENV: &str = "CATALOG_OUTPUT_FILE";

/// Options controlling a catalog build.
///
/// Use [`Default`] (or [`BuildOptions::from_env`]) for common cases.
#[derive(Clone)]
pub struct BuildOptions {
    /// Directory scanned for portfolio spreadsheets.
    pub portfolio_dir: PathBuf,
    /// Path of the JSON catalog to write.
    pub output_file: PathBuf,
    /// Optional observer for progress reporting.
    pub observer: Option<Arc<dyn CatalogObserver>>,
}

impl fmt::Debug for BuildOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildOptions")
            .field("portfolio_dir", &self.portfolio_dir)
            .field("output_file", &self.output_file)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            portfolio_dir: PathBuf::from(DEFAULT_PORTFOLIO_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            observer: None,
        }
    }
}

impl BuildOptions {
    /// Defaults, overridden by `CATALOG_PORTFOLIO_DIR` / `CATALOG_OUTPUT_FILE` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for the environment keys.
    ///
    /// Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = non_empty(PORTFOLIO_DIR_ENV) {
            options.portfolio_dir = PathBuf::from(dir);
        }
        if let Some(out) = non_empty(OUTPUT_FILE_ENV) {
            options.output_file = PathBuf::from(out);
        }
        options
    }
}

/// Build the catalog and write it to `options.output_file`.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use portfolio_catalog::ingestion::StdOutObserver;
/// use portfolio_catalog::pipeline::{run, BuildOptions};
///
/// # fn main() -> Result<(), portfolio_catalog::CatalogError> {
/// let options = BuildOptions {
///     observer: Some(Arc::new(StdOutObserver::default())),
///     ..BuildOptions::from_env()
/// };
/// let catalog = run(&options)?;
/// println!("products={}", catalog.total_products);
/// # Ok(())
/// # }
/// ```
pub fn run(options: &BuildOptions) -> CatalogResult<Catalog> {
    let catalog = build_catalog(options)?;
    write_catalog(&catalog, &options.output_file)?;

    info!(
        output = %options.output_file.display(),
        products = catalog.total_products,
        "catalog written"
    );
    if let Some(obs) = options.observer.as_ref() {
        obs.on_catalog_written(
            &options.output_file,
            CatalogSummary {
                total_products: catalog.total_products,
                brands: catalog.brands.len(),
                categories: catalog.categories.len(),
            },
        );
    }

    Ok(catalog)
}

/// Read every portfolio file and aggregate the products, without writing anything.
pub fn build_catalog(options: &BuildOptions) -> CatalogResult<Catalog> {
    let files = locate_portfolio_files(&options.portfolio_dir)?;
    if let Some(obs) = options.observer.as_ref() {
        obs.on_run_started(&options.portfolio_dir, files.len());
    }

    let batches: Vec<Vec<ExtractedProduct>> = files
        .iter()
        .map(|path| process_file(path, options.observer.as_deref()))
        .collect::<CatalogResult<_>>()?;

    Ok(aggregate(batches))
}

/// Products of one file; file-local failures are reported and yield no products.
fn process_file(
    path: &Path,
    observer: Option<&dyn CatalogObserver>,
) -> CatalogResult<Vec<ExtractedProduct>> {
    let ctx = FileContext::new(path);
    if let Some(obs) = observer {
        obs.on_file_started(&ctx);
    }
    settle_file(&ctx, read_portfolio_file(path), observer)
}

fn settle_file(
    ctx: &FileContext,
    result: CatalogResult<Vec<ExtractedProduct>>,
    observer: Option<&dyn CatalogObserver>,
) -> CatalogResult<Vec<ExtractedProduct>> {
    match result {
        Ok(products) => {
            if let Some(obs) = observer {
                obs.on_file_processed(ctx, FileStats { products: products.len() });
            }
            Ok(products)
        }
        Err(e) if e.is_file_local() => {
            warn!(
                path = %ctx.path.display(),
                format = ?ctx.format,
                error = %e,
                "skipping portfolio file"
            );
            if let Some(obs) = observer {
                obs.on_file_failed(ctx, &e);
            }
            Ok(Vec::new())
        }
        Err(e) => {
            error!(path = %ctx.path.display(), error = %e, "aborting catalog build");
            Err(e)
        }
    }
}

/// Serialize `catalog` and write it to `output`, creating parent directories.
///
/// The document goes to a sibling `.tmp` file first and is renamed into place, so `output` is
/// either the complete new catalog or left untouched.
pub fn write_catalog(catalog: &Catalog, output: impl AsRef<Path>) -> CatalogResult<()> {
    let output = output.as_ref();
    let json = catalog_to_json(catalog)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut tmp = output.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, json)?;
    fs::rename(&tmp, output)?;
    Ok(())
}
