/// Scale suffixes for successive thousand groups.
const SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Shorten a numeric value for compact axis labels.
///
/// Values under a thousand come back fixed to two decimals with the sign
/// dropped; the original dashboard behaved this way in its small-magnitude
/// branch and the quirk is preserved here rather than silently fixed. Larger
/// values are divided down by the matching power of a thousand: an integral
/// quotient renders without a decimal point, anything else rounds to exactly
/// one decimal; the K/M/B/T suffix follows, sign reapplied. Magnitudes past
/// the table clamp to `T`. Non-finite input passes through as the literal
/// float rendering.
pub fn abbreviate(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { -1.0 } else { 1.0 };
    let magnitude = value.abs();

    // Completed thousand groups, counted off the decimal string of the
    // integer part. String length, not log10: exact at the 1000^k boundaries.
    let digits = format!("{}", magnitude.trunc()).len();
    let index = ((digits - 1) / 3).min(SUFFIXES.len() - 1);

    if index == 0 {
        return format!("{magnitude:.2}");
    }

    let scaled = magnitude / 1000f64.powi(index as i32);
    let signed = sign * scaled;
    if scaled.fract() == 0.0 {
        format!("{signed:.0}{}", SUFFIXES[index])
    } else {
        format!("{signed:.1}{}", SUFFIXES[index])
    }
}

/// Prefix an abbreviated value with a currency symbol, as used for y-axis
/// ticks on the balance trend.
pub fn tick_label(value: f64, symbol: &str) -> String {
    format!("{symbol}{}", abbreviate(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_keep_two_decimals() {
        assert_eq!(abbreviate(0.0), "0.00");
        assert_eq!(abbreviate(42.5), "42.50");
        assert_eq!(abbreviate(999.0), "999.00");
        assert_eq!(abbreviate(999.99), "999.99");
    }

    #[test]
    fn small_negative_values_drop_the_sign() {
        assert_eq!(abbreviate(-500.0), "500.00");
        assert_eq!(abbreviate(-0.25), "0.25");
    }

    #[test]
    fn thousand_groups_pick_their_suffix() {
        assert_eq!(abbreviate(1000.0), "1K");
        assert_eq!(abbreviate(1500.0), "1.5K");
        assert_eq!(abbreviate(1_000_000.0), "1M");
        assert_eq!(abbreviate(2_750_000_000.0), "2.8B");
        assert_eq!(abbreviate(1_000_000_000_000.0), "1T");
    }

    #[test]
    fn sign_is_reapplied_for_suffixed_values() {
        assert_eq!(abbreviate(-2500.0), "-2.5K");
        assert_eq!(abbreviate(-1000.0), "-1K");
    }

    #[test]
    fn suffix_holds_until_the_next_thousand_group() {
        // 999,999 rounds up within its own group rather than promoting to M.
        assert_eq!(abbreviate(999_999.0), "1000.0K");
        assert_eq!(abbreviate(999_949_999.0), "999.9M");
    }

    #[test]
    fn fractional_quotients_keep_one_decimal() {
        // The branch is picked on the raw quotient, so a value that rounds
        // to a whole number still shows the decimal it entered with.
        assert_eq!(abbreviate(1049.0), "1.0K");
        assert_eq!(abbreviate(-1049.0), "-1.0K");
        assert_eq!(abbreviate(1_020_000.0), "1.0M");
    }

    #[test]
    fn exact_quotients_render_without_a_decimal_point() {
        assert_eq!(abbreviate(2000.0), "2K");
        assert_eq!(abbreviate(3_500_000.0), "3.5M");
        assert_eq!(abbreviate(40_000_000_000.0), "40B");
    }

    #[test]
    fn magnitudes_past_the_table_clamp_to_t() {
        assert_eq!(abbreviate(1e15), "1000T");
        assert_eq!(abbreviate(2.5e15), "2500T");
    }

    #[test]
    fn non_finite_input_passes_through() {
        assert_eq!(abbreviate(f64::NAN), "NaN");
        assert_eq!(abbreviate(f64::INFINITY), "inf");
        assert_eq!(abbreviate(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn tick_labels_carry_the_currency_symbol() {
        assert_eq!(tick_label(1500.0, "€"), "€1.5K");
        assert_eq!(tick_label(250.0, "$"), "$250.00");
    }
}
