//! Coercion of raw form text into numbers. Never fails: anything that does not
//! parse to a finite number becomes 0.

/// Half-up rounding (`.5` rounds toward +inf), as used by every displayed metric.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to two decimal places with half-up semantics.
pub fn round_to_cents(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// Ceiling for any single form value. Keeps weighted sums and their integer
/// conversions finite.
pub const MAX_INPUT: f64 = 1_000_000_000.0;

/// Parse a non-negative real. Empty, malformed, non-finite and negative input
/// all yield 0; anything above [`MAX_INPUT`] is capped there.
pub fn parse_non_negative(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.min(MAX_INPUT),
        _ => 0.0,
    }
}

/// Parse a non-negative integer, truncating any fractional part.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_count(raw: &str) -> u64 {
    parse_non_negative(raw).trunc() as u64
}

/// Parse a percentage, rounding and clamping to `[0, 100]`.
pub fn parse_percent(raw: &str) -> u8 {
    clamp_percent(parse_non_negative(raw))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_percent(value: f64) -> u8 {
    round_half_up(value).clamp(0.0, 100.0) as u8
}
