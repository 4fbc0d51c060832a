//! Byte counts as text: grouped decimal (`1,234,567`) or binary magnitudes (`1.5Ki`).

const UNITS: [&str; 9] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi", "Yi"];

/// Format a byte count without the trailing `B`.
///
/// With `human_readable` the value is scaled by 1024 until it drops below 1024 (at most eight
/// times), rounded to two decimals with ties going to the even hundredth, and suffixed with the
/// binary prefix. Trailing zero decimals are dropped, so 1024 is `1Ki` and 1536 is `1.5Ki`.
/// Otherwise the exact count is printed with comma thousands separators.
pub fn format_size(bytes: u64, human_readable: bool) -> String {
    if !human_readable {
        return group_thousands(bytes);
    }

    let mut exponent = 0;
    let mut divisor: u128 = 1;
    while exponent < UNITS.len() - 1 && u128::from(bytes) >= divisor * 1024 {
        divisor *= 1024;
        exponent += 1;
    }

    let hundredths = round_half_even(u128::from(bytes) * 100, divisor);
    let whole = hundredths / 100;
    let frac = hundredths % 100;

    let number = if frac == 0 {
        whole.to_string()
    } else if frac % 10 == 0 {
        format!("{}.{}", whole, frac / 10)
    } else {
        format!("{}.{:02}", whole, frac)
    };

    format!("{}{}", number, UNITS[exponent])
}

/// Insert a comma between every group of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// Integer division with banker's rounding, exact for every u64 input.
fn round_half_even(numerator: u128, divisor: u128) -> u128 {
    let quotient = numerator / divisor;
    let twice_rem = (numerator % divisor) * 2;
    if twice_rem > divisor || (twice_rem == divisor && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_345), "12,345");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_plain_mode_ignores_magnitudes() {
        assert_eq!(format_size(1_234_567, false), "1,234,567");
        assert_eq!(format_size(1024, false), "1,024");
        assert_eq!(format_size(0, false), "0");
    }

    #[test]
    fn test_human_below_one_kibi() {
        assert_eq!(format_size(0, true), "0");
        assert_eq!(format_size(100, true), "100");
        assert_eq!(format_size(1023, true), "1023");
    }

    #[test]
    fn test_human_scaled() {
        assert_eq!(format_size(1024, true), "1Ki");
        assert_eq!(format_size(1536, true), "1.5Ki");
        assert_eq!(format_size(1024 * 1024, true), "1Mi");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024 + 256 * 1024 * 1024, true), "5.25Gi");
        assert_eq!(format_size(1024_u64.pow(6), true), "1Ei");
        assert_eq!(format_size(u64::MAX, true), "16Ei");
    }

    #[test]
    fn test_human_ties_round_to_even() {
        // 1.125Ki and 1.625Ki round down, 1.375Ki and 1.875Ki round up
        assert_eq!(format_size(1152, true), "1.12Ki");
        assert_eq!(format_size(1664, true), "1.62Ki");
        assert_eq!(format_size(1408, true), "1.38Ki");
        assert_eq!(format_size(1920, true), "1.88Ki");
    }

    #[test]
    fn test_human_non_tie_rounding() {
        // 1100 / 1024 = 1.07421875
        assert_eq!(format_size(1100, true), "1.07Ki");
        // just under 1Mi stays in Ki and rounds up to 1024
        assert_eq!(format_size(1024 * 1024 - 1, true), "1024Ki");
    }
}
