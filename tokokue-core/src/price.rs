//! Price formatting for menu cards and the cart panel.

use crate::constants::CURRENCY_PREFIX;

/// Format a price the way the storefront displays it.
///
/// Amounts of 1000 or more are shown in thousands with a `K` suffix and no
/// truncation (`1500` becomes `1.5K`); smaller amounts are shown as-is.
#[must_use]
pub fn format_price(amount: u64) -> String {
    if amount < 1_000 {
        return amount.to_string();
    }

    let whole = amount / 1_000;
    let frac = amount % 1_000;
    if frac == 0 {
        return format!("{whole}K");
    }

    let digits = format!("{frac:03}");
    format!("{whole}.{}K", digits.trim_end_matches('0'))
}

/// Format a price with the currency label, e.g. `IDR 90K`.
#[must_use]
pub fn format_currency(amount: u64) -> String {
    format!("{CURRENCY_PREFIX} {}", format_price(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_render_plain() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(7), "7");
        assert_eq!(format_price(999), "999");
    }

    #[test]
    fn thousands_use_k_suffix() {
        assert_eq!(format_price(1_000), "1K");
        assert_eq!(format_price(90_000), "90K");
        assert_eq!(format_price(180_000), "180K");
    }

    #[test]
    fn fractional_thousands_are_not_truncated() {
        assert_eq!(format_price(1_500), "1.5K");
        assert_eq!(format_price(1_050), "1.05K");
        assert_eq!(format_price(1_234), "1.234K");
        assert_eq!(format_price(12_001), "12.001K");
    }

    #[test]
    fn every_large_amount_ends_in_k() {
        for amount in (1_000..200_000).step_by(317) {
            let formatted = format_price(amount);
            assert!(formatted.ends_with('K'), "{amount} -> {formatted}");
            let numeric: f64 = formatted.trim_end_matches('K').parse().unwrap();
            #[allow(clippy::cast_precision_loss)]
            let expected = amount as f64 / 1_000.0;
            assert!((numeric - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn currency_prefix_is_prepended() {
        assert_eq!(format_currency(90_000), "IDR 90K");
        assert_eq!(format_currency(500), "IDR 500");
    }
}
