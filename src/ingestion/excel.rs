use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::processing::{brand_from_file_name, normalize_price};
use crate::types::ExtractedProduct;

const CODE_LABELS: [&str; 2] = ["CÓDIGO", "CODIGO"];

/// Read every product from one portfolio workbook.
///
/// Behavior:
/// - Reads the first sheet of the workbook
/// - Detects the header row as the first row mentioning a code column ([`find_header_row`])
/// - Maps code/name/unit/price columns from the header labels ([`ColumnMap::from_labels`])
/// - Converts the rows below the header into products, stamping the brand derived from the
///   file name
pub fn read_portfolio_file(path: impl AsRef<Path>) -> CatalogResult<Vec<ExtractedProduct>> {
    let path = path.as_ref();
    let range = load_first_sheet(path)?;

    let header_row_idx = find_header_row(range.rows());
    let labels = range
        .rows()
        .nth(header_row_idx)
        .map(header_labels)
        .unwrap_or_default();
    debug!(path = %path.display(), header_row_idx, ?labels, "header row detected");

    let columns = ColumnMap::from_labels(&labels)?;
    debug!(path = %path.display(), ?columns, "columns mapped");

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let brand = brand_from_file_name(&file_name);

    Ok(extract_products(range.rows().skip(header_row_idx + 1), columns, &brand).collect())
}

/// Open a workbook (format picked by extension) and return its first sheet.
pub fn load_first_sheet(path: impl AsRef<Path>) -> CatalogResult<Range<Data>> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;

    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| CatalogError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?;

    Ok(workbook.worksheet_range(&first)?)
}

/// Index of the first row whose non-empty cells mention a code column.
///
/// Falls back to `0` when no row qualifies.
pub fn find_header_row<'a, I>(rows: I) -> usize
where
    I: IntoIterator<Item = &'a [Data]>,
{
    rows.into_iter()
        .position(|row| {
            let joined = row
                .iter()
                .filter(|c| !matches!(c, Data::Empty))
                .map(|c| cell_to_header_string(c).to_uppercase())
                .collect::<Vec<_>>()
                .join(" ");
            CODE_LABELS.iter().any(|label| joined.contains(label))
        })
        .unwrap_or(0)
}

/// Trimmed, uppercased labels of a header row.
pub fn header_labels(row: &[Data]) -> Vec<String> {
    row.iter()
        .map(|c| cell_to_header_string(c).trim().to_uppercase())
        .collect()
}

/// Column positions of the product fields within a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub code: usize,
    pub name: usize,
    pub unit: Option<usize>,
    pub price: Option<usize>,
}

impl ColumnMap {
    /// Map header labels (already trimmed and uppercased) to product fields.
    ///
    /// Each label claims at most one field, tested in the order code, name, unit, final price;
    /// the first label claiming a field keeps it. Without a `FINAL` column the first label
    /// mentioning `PRECIO` is used for the price.
    ///
    /// Fails with [`CatalogError::MissingColumns`] when no code or name column exists.
    pub fn from_labels(labels: &[String]) -> CatalogResult<Self> {
        let mut code = None;
        let mut name = None;
        let mut unit = None;
        let mut price = None;

        for (idx, label) in labels.iter().enumerate() {
            if CODE_LABELS.iter().any(|l| label.contains(l)) {
                code.get_or_insert(idx);
            } else if label.contains("PRODUCTO") || label.contains("NOMBRE") {
                name.get_or_insert(idx);
            } else if label.contains("UNIDAD") {
                unit.get_or_insert(idx);
            } else if label.contains("FINAL") {
                price.get_or_insert(idx);
            }
        }

        let price = price.or_else(|| labels.iter().position(|l| l.contains("PRECIO")));

        match (code, name) {
            (Some(code), Some(name)) => Ok(Self {
                code,
                name,
                unit,
                price,
            }),
            _ => Err(CatalogError::MissingColumns {
                found: labels.to_vec(),
            }),
        }
    }
}

/// Lazily convert data rows into products.
///
/// Rows without a code or name, repeated header rows and rows whose name is two characters or
/// shorter are skipped.
pub fn extract_products<'a, I>(
    rows: I,
    columns: ColumnMap,
    brand: &'a str,
) -> impl Iterator<Item = ExtractedProduct> + 'a
where
    I: IntoIterator<Item = &'a [Data]>,
    I::IntoIter: 'a,
{
    rows.into_iter()
        .filter_map(move |row| row_to_product(row, &columns, brand))
}

fn row_to_product(row: &[Data], columns: &ColumnMap, brand: &str) -> Option<ExtractedProduct> {
    let cell = |idx: usize| row.get(idx).unwrap_or(&Data::Empty);

    let code = cell_to_text(cell(columns.code))?;
    let name = cell_to_text(cell(columns.name))?;
    let code = code.trim();
    let name = name.trim();
    if code.is_empty() || name.is_empty() {
        return None;
    }
    if CODE_LABELS.contains(&code.to_uppercase().as_str()) {
        return None;
    }
    if name.chars().count() <= 2 {
        return None;
    }

    let unit = columns
        .unit
        .and_then(|idx| cell_to_text(cell(idx)))
        .map(|u| u.trim().to_string())
        .unwrap_or_default();
    let price = columns.price.map(|idx| normalize_price(cell(idx))).unwrap_or(0.0);

    Some(ExtractedProduct {
        code: code.to_string(),
        name: name.to_string(),
        unit,
        price,
        brand: brand.to_string(),
    })
}

/// Text of a value cell; `None` for empty and error cells.
fn cell_to_text(c: &Data) -> Option<String> {
    match c {
        Data::Empty | Data::Error(_) => None,
        other => Some(cell_to_header_string(other)),
    }
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{f:.0}"),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(f) => f.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => "".to_string(),
    }
}
