//! Portfolio discovery and spreadsheet extraction.
//!
//! - [`locator`]: lists the `.xlsx` / `.xls` / `.ods` files of a portfolio directory
//! - [`excel`]: reads the first sheet of a workbook, finds its header row, maps columns and
//!   yields [`crate::types::ExtractedProduct`]s
//! - [`observability`]: observer hooks reporting per-file progress and failures

pub mod excel;
pub mod locator;
pub mod observability;

pub use excel::{
    extract_products, find_header_row, header_labels, load_first_sheet, read_portfolio_file,
    ColumnMap,
};
pub use locator::{locate_portfolio_files, PortfolioFormat};
pub use observability::{
    CatalogObserver, CatalogSummary, CompositeObserver, FileContext, FileStats, ProgressObserver,
    StdOutObserver,
};
