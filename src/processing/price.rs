//! Price cell normalization.

use calamine::Data;

/// Normalize an arbitrary price cell into a float.
///
/// - empty / error cells become `0.0`
/// - numeric cells (and booleans, as `1.0` / `0.0`) are cast directly
/// - anything else is stringified and passed to [`normalize_price_text`]
pub fn normalize_price(cell: &Data) -> f64 {
    match cell {
        Data::Empty | Data::Error(_) => 0.0,
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Data::String(s) => normalize_price_text(s),
        other => normalize_price_text(&other.to_string()),
    }
}

/// Clean a textual price and parse it.
///
/// Every character other than an ASCII digit, `,` or `.` is dropped, commas become periods
/// and the remainder is parsed as `f64`. Anything unparsable yields `0.0`.
///
/// Only a single decimal separator is understood: `"1.234,56"` turns into `"1.234.56"` and
/// therefore yields `0.0`.
pub fn normalize_price_text(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    cleaned.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_are_cast_directly() {
        assert_eq!(normalize_price(&Data::Float(7500.0)), 7500.0);
        assert_eq!(normalize_price(&Data::Int(7500)), 7500.0);
        assert_eq!(normalize_price(&Data::Float(12.75)), 12.75);
        assert_eq!(normalize_price(&Data::Bool(true)), 1.0);
    }

    #[test]
    fn missing_and_empty_values_are_zero() {
        assert_eq!(normalize_price(&Data::Empty), 0.0);
        assert_eq!(normalize_price(&Data::String(String::new())), 0.0);
        assert_eq!(normalize_price_text("   "), 0.0);
        assert_eq!(normalize_price_text("N/A"), 0.0);
    }

    #[test]
    fn currency_symbols_and_spaces_are_stripped() {
        assert_eq!(normalize_price_text("7.50"), 7.5);
        assert_eq!(normalize_price_text("$ 4500"), 4500.0);
        assert_eq!(normalize_price_text("COP 12,5"), 12.5);
    }

    #[test]
    fn mixed_separators_are_unparsable() {
        // "12.345,67" -> "12.345.67"
        assert_eq!(normalize_price_text("$ 12.345,67"), 0.0);
        assert_eq!(normalize_price(&Data::String("$ 12.345,67".to_string())), 0.0);
    }

    #[test]
    fn lone_separator_is_zero() {
        assert_eq!(normalize_price_text("."), 0.0);
        assert_eq!(normalize_price_text("$,"), 0.0);
    }
}
