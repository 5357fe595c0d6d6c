//! Coercion helpers. Every function here is total: bad input degrades to 0
//! (or to 1 for counts) instead of failing.

/// Finite values pass through; NaN and infinities collapse to 0.
pub fn to_number(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

pub fn to_non_negative(value: f64) -> f64 {
    to_number(value).max(0.0)
}

/// Lenient text-to-number coercion for raw user input. Surrounding whitespace
/// is ignored, blank text is 0, and anything unparseable or non-finite is 0.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().map(to_number).unwrap_or(0.0)
}

/// Customer and stop counts: floored, and any zero, negative or non-finite
/// count becomes exactly 1. Kept as `f64` so large counts reach the overhead
/// term unchanged.
pub fn to_count(value: f64) -> f64 {
    to_number(value).floor().max(1.0)
}

/// Informational counts (distinct SKUs) floor to a non-negative whole number.
pub fn to_tally(value: f64) -> f64 {
    to_non_negative(value).floor()
}

/// Division that never yields NaN or infinity: a non-positive or non-finite
/// denominator gives 0, and so does a quotient that overflows.
pub fn safe_div(numer: f64, denom: f64) -> f64 {
    let denom = to_number(denom);
    if denom > 0.0 {
        to_number(to_number(numer) / denom)
    } else {
        0.0
    }
}

/// Rounds half away from zero at `decimals` places, nudged by `f64::EPSILON`
/// so that values like 1.005 land on the expected side.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    to_number(((to_number(value) + f64::EPSILON) * scale).round() / scale)
}
