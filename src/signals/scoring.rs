//! Confidence normalization and rounding helpers

pub const MIN_CONFIDENCE: f64 = 0.0;
pub const MAX_CONFIDENCE: f64 = 100.0;

/// Clamp a confidence score to `[0, 100]`.
///
/// Non-numeric scores collapse to zero so that a degenerate indicator
/// never inflates the aggregate.
pub fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return MIN_CONFIDENCE;
    }
    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Percentage deviation of `value` from `reference`
pub fn percent_deviation(value: f64, reference: f64) -> f64 {
    (value - reference) / reference * 100.0
}

/// Position of `price` inside `[lower, upper]`: 0 at the lower band, 1 at the upper
pub fn band_position(price: f64, lower: f64, upper: f64) -> f64 {
    (price - lower) / (upper - lower)
}

/// Fractional digits needed to print any finite `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round the exact stored value to a fixed number of decimal places,
/// half away from zero.
///
/// Works on the full decimal expansion rather than `value * 10^n`, so a
/// stored `0.99499...` rounds to `0.99` even though the scaled product
/// lands on `99.5`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let places = decimals as usize;
    if !value.is_finite() || places >= EXACT_FRACTION_DIGITS {
        return value;
    }

    let expansion = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((whole, fraction)) = expansion.split_once('.') else {
        return value;
    };

    let mut digits = whole.as_bytes().to_vec();
    if places > 0 {
        digits.push(b'.');
        digits.extend_from_slice(&fraction.as_bytes()[..places]);
    }
    if fraction.as_bytes()[places] >= b'5' {
        increment_last_digit(&mut digits);
    }

    std::str::from_utf8(&digits)
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .map_or(value, |magnitude| magnitude.copysign(value))
}

/// Add one unit in the last place of an ASCII decimal, carrying leftwards
fn increment_last_digit(digits: &mut Vec<u8>) {
    for i in (0..digits.len()).rev() {
        match digits[i] {
            b'.' => continue,
            b'9' => digits[i] = b'0',
            _ => {
                digits[i] += 1;
                return;
            }
        }
    }
    digits.insert(0, b'1');
}

/// Arithmetic mean; `None` for an empty slice
pub fn mean(values: impl ExactSizeIterator<Item = f64>) -> Option<f64> {
    let count = values.len();
    if count == 0 {
        return None;
    }
    Some(values.sum::<f64>() / count as f64)
}
