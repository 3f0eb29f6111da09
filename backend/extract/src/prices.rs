//! Price scanning over raw document text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Price-shaped token: optional `$`, then a thousands-grouped number or a
/// simple decimal with up to two fractional digits.
///
/// The grouped branch comes first: the regex engine is leftmost-first, and
/// with the simple branch first `"$1,234.56"` would split into `1` and
/// `234.56` instead of matching whole. The pattern is deliberately
/// permissive: the grouped branch also accepts digit runs that are not
/// group-aligned, so `"1234"` alone scans as `123` then `4`. Downstream
/// behavior relies on this, so it stays.
static PRICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$?(\d{1,3}(?:,\d{3})*(?:\.\d{2})?|\d+(?:\.\d{2})?)").unwrap()
});

/// Scan text for price-like substrings and parse them, in left-to-right
/// order of first occurrence. No deduplication. Tokens that fail to parse,
/// or parse to a negative or non-finite value, are skipped.
pub fn extract_prices(text: &str) -> Vec<f64> {
    PRICE_PATTERN
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .filter(|p| p.is_finite() && *p >= 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_and_simple_prices() {
        assert_eq!(
            extract_prices("Total: $1,234.56 and $9.99"),
            vec![1234.56, 9.99]
        );
    }

    #[test]
    fn bare_integer_is_a_valid_match() {
        assert_eq!(extract_prices("precio 500"), vec![500.0]);
    }

    #[test]
    fn matches_keep_document_order_without_dedup() {
        assert_eq!(
            extract_prices("a 9.99 b 100 c 9.99"),
            vec![9.99, 100.0, 9.99]
        );
    }

    #[test]
    fn ungrouped_long_run_splits_on_group_boundary() {
        // Known heuristic limitation of the permissive grouped branch.
        assert_eq!(extract_prices("1234"), vec![123.0, 4.0]);
    }

    #[test]
    fn dollar_sign_is_optional() {
        assert_eq!(extract_prices("pan 12.50 leche $3.25"), vec![12.50, 3.25]);
    }

    #[test]
    fn no_prices_in_plain_words() {
        assert!(extract_prices("hola mundo").is_empty());
    }

    #[test]
    fn results_are_finite_and_non_negative() {
        let text = "x 1,000.00 y $87 z 0.50 w 12,345,678.90";
        for p in extract_prices(text) {
            assert!(p.is_finite());
            assert!(p >= 0.0);
        }
    }
}
