/// Parse a raw answer string as a real number.
///
/// Accepts a comma as the decimal separator (Dutch keyboards) and trims
/// surrounding whitespace. Returns None for anything that is not a finite
/// number; the caller treats that as a wrong answer.
pub fn parse_answer(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Characters accepted into the answer buffer.
pub fn is_answer_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ',' || c == '-'
}
