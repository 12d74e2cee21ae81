//! Tolerance defaults for the vector kernel.
//!
//! Policy
//! - Values are fixed constants tied to the accuracy of the upstream
//!   plane-intersection step; they are not meant to be tuned per call site.
//! - Shape enumeration has its own small `ShapeCfg` for the solver epsilon.

/// Maximum distance for two vectors to count as equal, after rounding.
pub const EQ_TOL: f64 = 0.01;
/// Decimal digits the distance is rounded to before comparing with `EQ_TOL`.
pub const EQ_DECIMALS: usize = 2;
/// A side rejects a point when `facing · normal` drops below `-LEGAL_EPS`.
pub const LEGAL_EPS: f64 = 0.01;
/// Decimal digits kept by the textual representation.
pub const TEXT_DECIMALS: usize = 6;
/// Default determinant threshold for three-plane intersections.
pub const DET_EPS: f64 = 1e-9;

/// Fixed-point text of the exact value of `x` with `digits` decimals.
///
/// Exact decimal ties round away from zero (`0.125` → `"0.13"`); everything
/// else is correctly rounded from the exact binary value, so the double
/// `0.015` (just below 0.015) gives `"0.01"`.
pub(crate) fn to_fixed(x: f64, digits: usize) -> String {
    if !is_decimal_tie(x, digits) {
        return format!("{x:.digits$}");
    }
    // exact with one more digit, which is a 5
    let mut s = format!("{x:.prec$}", prec = digits + 1);
    s.pop();
    if s.ends_with('.') {
        s.pop();
    }
    let mut out = s.into_bytes();
    let mut i = out.len();
    loop {
        if i == 0 || out[i - 1] == b'-' {
            out.insert(i, b'1');
            break;
        }
        i -= 1;
        match out[i] {
            b'.' => {}
            b'9' => out[i] = b'0',
            d => {
                out[i] = d + 1;
                break;
            }
        }
    }
    out.into_iter().map(char::from).collect()
}

/// Is `x` exactly halfway between two multiples of `10^-digits`?
fn is_decimal_tie(x: f64, digits: usize) -> bool {
    if !x.is_finite() || x == 0.0 {
        return false;
    }
    let bits = x.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let frac = bits & ((1u64 << 52) - 1);
    let (m, e) = if biased == 0 {
        (frac, -1074)
    } else {
        (frac | (1u64 << 52), biased - 1075)
    };
    // |x| * 2 * 10^digits = m * 5^digits * 2^shift must be an odd integer
    let shift = e + 1 + digits as i64;
    shift <= 0 && i64::from(m.trailing_zeros()) == -shift
}

/// Round `x` to `digits` decimal places on its exact decimal value.
#[inline]
pub(crate) fn round_to(x: f64, digits: usize) -> f64 {
    to_fixed(x, digits).parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_two_digits() {
        assert_eq!(round_to(0.009, EQ_DECIMALS), 0.01);
        assert_eq!(round_to(0.014, EQ_DECIMALS), 0.01);
        assert_eq!(round_to(0.016, EQ_DECIMALS), 0.02);
        assert_eq!(round_to(0.0, EQ_DECIMALS), 0.0);
        assert!(round_to(f64::NAN, EQ_DECIMALS).is_nan());
        // the double nearest 0.015 lies below it
        assert_eq!(round_to(0.015, EQ_DECIMALS), 0.01);
        assert_eq!(round_to(0.115 - 0.1, EQ_DECIMALS), 0.01);
        assert_eq!(round_to(0.125, EQ_DECIMALS), 0.13);
    }

    #[test]
    fn to_fixed_breaks_exact_ties_away_from_zero() {
        assert_eq!(to_fixed(0.0078125, 6), "0.007813");
        assert_eq!(to_fixed(-0.0234375, 6), "-0.023438");
        assert_eq!(to_fixed(2.5000005, 6), "2.500001");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-0.5, 0), "-1");
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(1.0, 6), "1.000000");
        assert_eq!(to_fixed(f64::NAN, 6), "NaN");
    }
}
