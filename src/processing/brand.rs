//! Brand names from portfolio file names.

use std::path::Path;

/// Derive a brand label from a portfolio file name.
///
/// The extension is removed, then a trailing year token (optional whitespace followed by 2 to
/// 4 digits at the very end) is dropped, and the result is trimmed:
///
/// ```rust
/// use portfolio_catalog::processing::brand_from_file_name;
///
/// assert_eq!(brand_from_file_name("LACTEOS DEL VALLE 2025.xlsx"), "LACTEOS DEL VALLE");
/// assert_eq!(brand_from_file_name("ALPINA.xls"), "ALPINA");
/// ```
pub fn brand_from_file_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    strip_year_suffix(&stem).trim().to_string()
}

/// Remove a trailing `\s*\d{2,4}` token.
///
/// When more than four digits trail the name only the last four are removed, and the
/// whitespace in front of them stays (the match cannot reach past a digit).
fn strip_year_suffix(stem: &str) -> &str {
    let digits = stem.chars().rev().take_while(|c| c.is_ascii_digit()).count();
    if digits < 2 {
        return stem;
    }

    // ASCII digits are one byte each.
    let cut = stem.len() - digits.min(4);
    let head = &stem[..cut];
    if digits > 4 {
        head
    } else {
        head.trim_end_matches(char::is_whitespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_digit_year_is_removed() {
        assert_eq!(brand_from_file_name("LACTEOS DEL VALLE 2025.xlsx"), "LACTEOS DEL VALLE");
    }

    #[test]
    fn two_digit_year_is_removed() {
        assert_eq!(brand_from_file_name("LECHERIA 26.xlsx"), "LECHERIA");
        assert_eq!(brand_from_file_name("NESTLE25.ods"), "NESTLE");
    }

    #[test]
    fn names_without_year_pass_through() {
        assert_eq!(brand_from_file_name("ALPINA.xls"), "ALPINA");
        assert_eq!(brand_from_file_name("  COLANTA .xlsx"), "COLANTA");
    }

    #[test]
    fn single_trailing_digit_is_kept() {
        assert_eq!(brand_from_file_name("LINEA 7.xlsx"), "LINEA 7");
    }

    #[test]
    fn long_digit_runs_lose_only_four_digits() {
        assert_eq!(brand_from_file_name("LOTE 123456.xlsx"), "LOTE 12");
    }

    #[test]
    fn only_last_extension_is_stripped() {
        assert_eq!(brand_from_file_name("DON.PEPE 2024.xlsx"), "DON.PEPE");
    }
}
