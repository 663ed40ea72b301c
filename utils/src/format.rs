//! Display formatting for verification figures.

/// Score with four decimals: `0.97` → `"0.9700"`.
pub fn format_score(score: f64) -> String {
    to_fixed(score, 4)
}

/// Threshold with two decimals: `0.8` → `"0.80"`.
pub fn format_threshold(threshold: f64) -> String {
    to_fixed(threshold, 2)
}

/// Latency as reported, followed by the unit.
///
/// Whole numbers print without a fraction (`42 ms`), fractional values keep
/// theirs (`123.4 ms`).
pub fn format_latency(timing_ms: f64) -> String {
    format!("{timing_ms} ms")
}

/// Fixed-point rendering that resolves exact ties away from zero.
///
/// `{:.N}` rounds an exact tie to even (`0.125` → `0.12`); web clients
/// showing the same verdict round it up (`0.13`). Only values whose exact
/// binary expansion ends on the tie differ, everything else is left to `{:.N}`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || !is_exact_tie(value, digits) {
        return format!("{value:.digits$}");
    }

    // A tie has exactly `digits + 1` fractional digits, the last one a 5,
    // so this expansion is exact.
    let exact = format!("{:.*}", digits + 1, value.abs());
    let mut out: Vec<u8> = exact.as_bytes()[..exact.len() - 1].to_vec();
    if out.last() == Some(&b'.') {
        out.pop();
    }

    let mut i = out.len();
    loop {
        if i == 0 {
            out.insert(0, b'1');
            break;
        }
        i -= 1;
        match out[i] {
            b'.' => continue,
            b'9' => out[i] = b'0',
            d => {
                out[i] = d + 1;
                break;
            }
        }
    }

    let magnitude = String::from_utf8(out).unwrap_or_default();
    if value.is_sign_negative() {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

/// Whether `value` sits exactly halfway between two `digits`-decimal numbers.
///
/// With `value = m * 2^q`, `value * 10^digits` is a half-integer exactly when
/// the power of two in `value` is `2^-(digits + 1)`.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, q) = if exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exponent - 1075)
    };
    if mantissa == 0 {
        return false;
    }
    i64::from(mantissa.trailing_zeros()) + q == -(digits as i64 + 1)
}
