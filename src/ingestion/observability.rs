use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::CatalogError;

use super::locator::PortfolioFormat;

/// Context about one portfolio file being processed.
#[derive(Debug, Clone)]
pub struct FileContext {
    /// Path of the portfolio file.
    pub path: PathBuf,
    /// Format inferred from the extension, if recognized.
    pub format: Option<PortfolioFormat>,
}

impl FileContext {
    /// Build the context for `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = PortfolioFormat::from_path(&path);
        Self { path, format }
    }

    /// File name without the directory, for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Stats reported after a file was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    /// Products kept from the file.
    pub products: usize,
}

/// Totals reported once the catalog has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total_products: usize,
    pub brands: usize,
    pub categories: usize,
}

/// Observer interface for catalog build progress.
///
/// Every method has a no-op default so implementors only override what they need.
pub trait CatalogObserver: Send + Sync {
    /// Called once the portfolio directory has been listed.
    fn on_run_started(&self, _portfolio_dir: &Path, _files: usize) {}

    /// Called before a file is read.
    fn on_file_started(&self, _ctx: &FileContext) {}

    /// Called when a file was read successfully.
    fn on_file_processed(&self, _ctx: &FileContext, _stats: FileStats) {}

    /// Called when a file was skipped because it could not be used.
    fn on_file_failed(&self, _ctx: &FileContext, _error: &CatalogError) {}

    /// Called after the catalog document was written.
    fn on_catalog_written(&self, _output: &Path, _summary: CatalogSummary) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn CatalogObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn CatalogObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl CatalogObserver for CompositeObserver {
    fn on_run_started(&self, portfolio_dir: &Path, files: usize) {
        for o in &self.observers {
            o.on_run_started(portfolio_dir, files);
        }
    }

    fn on_file_started(&self, ctx: &FileContext) {
        for o in &self.observers {
            o.on_file_started(ctx);
        }
    }

    fn on_file_processed(&self, ctx: &FileContext, stats: FileStats) {
        for o in &self.observers {
            o.on_file_processed(ctx, stats);
        }
    }

    fn on_file_failed(&self, ctx: &FileContext, error: &CatalogError) {
        for o in &self.observers {
            o.on_file_failed(ctx, error);
        }
    }

    fn on_catalog_written(&self, output: &Path, summary: CatalogSummary) {
        for o in &self.observers {
            o.on_catalog_written(output, summary);
        }
    }
}

/// Writes operator-facing progress lines to `W`.
///
/// Writes are best-effort; failures to write are ignored.
pub struct ProgressObserver<W> {
    out: Mutex<W>,
}

/// Progress lines on stdout, as printed by the `portfolio-catalog` binary.
pub type StdOutObserver = ProgressObserver<io::Stdout>;

impl<W: Write + Send> ProgressObserver<W> {
    /// Create an observer writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn line(&self, line: fmt::Arguments<'_>) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
        }
    }
}

impl Default for ProgressObserver<io::Stdout> {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> fmt::Debug for ProgressObserver<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressObserver").finish_non_exhaustive()
    }
}

impl<W: Write + Send> CatalogObserver for ProgressObserver<W> {
    fn on_run_started(&self, _portfolio_dir: &Path, files: usize) {
        self.line(format_args!("Found {files} portfolio files\n"));
    }

    fn on_file_started(&self, ctx: &FileContext) {
        self.line(format_args!("  Processing: {}", ctx.file_name()));
    }

    fn on_file_processed(&self, _ctx: &FileContext, stats: FileStats) {
        self.line(format_args!("    Found {} products", stats.products));
    }

    fn on_file_failed(&self, _ctx: &FileContext, error: &CatalogError) {
        match error {
            CatalogError::MissingColumns { found } => {
                self.line(format_args!("    Could not find required columns. Found: {found:?}"))
            }
            other => self.line(format_args!("    Error reading file: {other}")),
        }
    }

    fn on_catalog_written(&self, output: &Path, summary: CatalogSummary) {
        self.line(format_args!("\n{}", "=".repeat(50)));
        self.line(format_args!("Generated {}", output.display()));
        self.line(format_args!("Total products: {}", summary.total_products));
        self.line(format_args!("Brands: {}", summary.brands));
        self.line(format_args!("Categories: {}", summary.categories));
        self.line(format_args!("\nTo update the catalog, modify your spreadsheets and run:"));
        self.line(format_args!("  portfolio-catalog"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(obs: ProgressObserver<Vec<u8>>) -> String {
        String::from_utf8(obs.into_inner()).unwrap()
    }

    #[test]
    fn progress_lines_per_file() {
        let obs = ProgressObserver::new(Vec::<u8>::new());
        let ok = FileContext::new("portfolio/ALPINA 2025.xlsx");
        let bad = FileContext::new("portfolio/SIN NOMBRE.ods");
        let broken = FileContext::new("portfolio/ROTO.xls");

        obs.on_run_started(Path::new("portfolio"), 3);
        obs.on_file_started(&ok);
        obs.on_file_processed(&ok, FileStats { products: 2 });
        obs.on_file_started(&bad);
        obs.on_file_failed(
            &bad,
            &CatalogError::MissingColumns {
                found: vec!["CÓDIGO".to_string(), "DETALLE".to_string()],
            },
        );
        obs.on_file_started(&broken);
        obs.on_file_failed(
            &broken,
            &CatalogError::EmptyWorkbook {
                path: PathBuf::from("portfolio/ROTO.xls"),
            },
        );

        assert_eq!(
            output(obs),
            [
                "Found 3 portfolio files",
                "",
                "  Processing: ALPINA 2025.xlsx",
                "    Found 2 products",
                "  Processing: SIN NOMBRE.ods",
                "    Could not find required columns. Found: [\"CÓDIGO\", \"DETALLE\"]",
                "  Processing: ROTO.xls",
                "    Error reading file: workbook has no sheets (portfolio/ROTO.xls)",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn summary_after_write() {
        let obs = ProgressObserver::new(Vec::<u8>::new());
        obs.on_catalog_written(
            Path::new("site/data.json"),
            CatalogSummary {
                total_products: 5,
                brands: 2,
                categories: 4,
            },
        );

        let out = output(obs);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(
            &lines[2..],
            [
                "Generated site/data.json",
                "Total products: 5",
                "Brands: 2",
                "Categories: 4",
                "",
                "To update the catalog, modify your spreadsheets and run:",
                "  portfolio-catalog",
            ]
        );
    }

    #[test]
    fn debug_does_not_need_a_debug_writer() {
        let obs = StdOutObserver::default();
        assert!(format!("{obs:?}").starts_with("ProgressObserver"));
    }
}
