//! Forgiving text → number conversion for lot fields.
//!
//! Anything that is not a finite number becomes `0.0`. No errors, no
//! warnings beyond a trace event: this is how the calculator treats
//! half-typed or blank inputs.

/// Coerce a raw field value to a number, defaulting to `0.0`.
///
/// Accepts surrounding whitespace, an optional sign, decimal and exponent
/// notation (`"12.5"`, `".5"`, `"1e3"`) and `0x` / `0o` / `0b` integer
/// literals. Blank text, garbage, NaN and infinities all map to zero.
#[must_use]
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let parsed = parse_radix_literal(trimmed).or_else(|| parse_decimal(trimmed));
    match parsed {
        Some(value) if value.is_finite() => value,
        _ => {
            tracing::trace!("Non-numeric lot field {raw:?} coerced to zero");
            0.0
        }
    }
}

/// Plain decimal / scientific notation. Rejects the textual special values
/// (`inf`, `nan`, `infinity`) that `f64::from_str` would otherwise accept.
fn parse_decimal(s: &str) -> Option<f64> {
    let digits = s.trim_start_matches(['+', '-']);
    if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Unsigned `0x`, `0o` and `0b` integer literals. Signs and separators
/// after the prefix are rejected.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let lower = s.to_ascii_lowercase();
    let (radix, body) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else {
        return None;
    };

    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // Accumulate in f64 so literals wider than 64 bits still yield a value.
    let value = body.chars().fold(0.0_f64, |acc, c| {
        acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
    });
    Some(value)
}
