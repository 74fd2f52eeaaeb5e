use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error type returned by catalog building functions.
///
/// Per-file variants ([`CatalogError::Excel`], [`CatalogError::EmptyWorkbook`],
/// [`CatalogError::MissingColumns`]) are recoverable: the pipeline reports them and skips the
/// file. Everything else aborts the run.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying I/O error (e.g. portfolio directory missing, output not writable).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The spreadsheet could not be opened or decoded.
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// The workbook contains no sheets at all.
    #[error("workbook has no sheets ({})", path.display())]
    EmptyWorkbook { path: PathBuf },

    /// The code or name column could not be found among the header labels.
    #[error("could not find required columns. found: {found:?}")]
    MissingColumns { found: Vec<String> },

    /// Catalog serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Whether the pipeline can skip the offending file and keep going.
    pub fn is_file_local(&self) -> bool {
        matches!(
            self,
            CatalogError::Excel(_)
                | CatalogError::EmptyWorkbook { .. }
                | CatalogError::MissingColumns { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_workbook_problems_are_file_local() {
        let missing = CatalogError::MissingColumns {
            found: vec!["CÓDIGO".to_string()],
        };
        let empty = CatalogError::EmptyWorkbook {
            path: PathBuf::from("VACIO.xlsx"),
        };
        assert!(missing.is_file_local());
        assert!(empty.is_file_local());

        let io = CatalogError::from(std::io::Error::other("disk full"));
        assert!(!io.is_file_local());
    }
}
