//! Utility helpers shared across the WASM frontend.

/// Parse the leading decimal integer of `raw`, the way a browser's
/// `parseInt(raw, 10)` reads form input: leading whitespace and an optional
/// sign are accepted and anything after the digits is ignored.
///
/// Returns `None` when no digit follows the sign or the value overflows.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Trim trailing slashes so paths can be appended with a single `/`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
