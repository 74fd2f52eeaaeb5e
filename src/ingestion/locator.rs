//! Portfolio file discovery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::{CatalogError, CatalogResult};

/// Spreadsheet formats accepted in a portfolio directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioFormat {
    /// Office Open XML workbook.
    Xlsx,
    /// Legacy binary workbook.
    Xls,
    /// OpenDocument spreadsheet.
    Ods,
}

impl PortfolioFormat {
    /// Every accepted format, in discovery order.
    pub const ALL: [PortfolioFormat; 3] = [Self::Xlsx, Self::Xls, Self::Ods];

    /// File extension (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
            Self::Ods => "ods",
        }
    }

    /// Parse a format from a file extension. Matching is exact, like the discovery globs.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// Format of a path, judged by its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// List the portfolio files directly inside `dir`, sorted by path.
///
/// Only regular files ending in `.xlsx`, `.xls` or `.ods` are returned; subdirectories are not
/// searched. A missing or unreadable directory is an error.
pub fn locate_portfolio_files(dir: impl AsRef<Path>) -> CatalogResult<Vec<PathBuf>> {
    let dir = dir.as_ref();

    // glob silently yields nothing for unreadable directories.
    fs::read_dir(dir)?;

    let base = Pattern::escape(&dir.to_string_lossy());
    let mut files = Vec::new();
    for format in PortfolioFormat::ALL {
        let pattern = format!("{base}/*.{ext}", ext = format.extension());
        let entries = glob::glob(&pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        for entry in entries {
            let path = entry.map_err(|e| CatalogError::Io(e.into()))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
