// ============================================================
// Layer 5 — Number Formatting
// ============================================================
// Students should see "0.3", not "0.30000000000000004",
// and "3", not "3.0000".
//
// Rules, applied in order:
//   1. Round to 4 decimal places (halves round toward +∞)
//   2. Print with exactly 4 decimals
//   3. Strip trailing zeros, then a dangling '.'
//   4. Anything that rounded to zero prints as "0"
//
// Examples:
//   3.0        → "3"
//   -4.0       → "-4"
//   0.1        → "0.1"
//   2.0 / 3.0  → "0.6667"
//   -0.00001   → "0"

/// Scale for 4 decimal places
const SCALE: f64 = 10_000.0;

/// Format a number for display on a card.
pub fn format_number(n: f64) -> String {
    let rounded = (n * SCALE + 0.5).floor() / SCALE;

    // -0.0 and tiny negatives would otherwise print as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    let fixed = format!("{rounded:.4}");
    if !fixed.contains('.') {
        // inf / NaN have no fractional part to trim
        return fixed;
    }

    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_decimal_point() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(20.0), "20");
    }

    #[test]
    fn test_short_decimals_are_kept_exact() {
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(-0.2), "-0.2");
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(1.5), "1.5");
    }

    #[test]
    fn test_rounds_to_four_places() {
        assert_eq!(format_number(2.0 / 3.0), "0.6667");
        assert_eq!(format_number(1.0_f64.cos()), "0.5403");
        assert_eq!(format_number(-(2.0_f64.sin())), "-0.9093");
    }

    #[test]
    fn test_float_noise_is_hidden() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-1.0 - 0.2 * -4.0), "-0.2");
        assert_eq!(format_number(3.0 - 0.1 * 6.0), "2.4");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.00001), "0");
    }

    #[test]
    fn test_never_ends_in_dot_or_exceeds_four_decimals() {
        let samples = [
            0.0, 1.0, -1.0, 0.12345, -9.87654, 1e-5, 123.456789,
            2.00005, 0.99999, -0.99999, 1.0 / 7.0, 10.0 / 3.0,
        ];
        for n in samples {
            let s = format_number(n);
            assert!(!s.ends_with('.'), "{n} → {s}");
            if let Some((_, frac)) = s.split_once('.') {
                assert!(frac.len() <= 4, "{n} → {s}");
                assert!(!frac.ends_with('0'), "{n} → {s}");
            }
        }
    }
}
