/// Currency comparison epsilon. Two amounts closer than this are considered
/// equal.
pub(crate) const ALLOCATION_TOLERANCE: f64 = 0.01;

pub(crate) fn within_tolerance(a: f64, b: f64) -> bool {
    (a - b).abs() < ALLOCATION_TOLERANCE
}

/// Converts an amount to whole cents, rounding half away from zero.
pub(crate) fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub(crate) fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Parses an amount as typed by a person or exported by a spreadsheet.
/// Currency signs, thousands separators and surrounding whitespace are
/// ignored, and accounting-style parentheses mark a negative amount.
pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    let cleaned = cleaned.trim();
    let is_negative = cleaned.starts_with('(') && cleaned.ends_with(')');
    let numeric_part = cleaned.trim_matches(|c| c == '(' || c == ')').trim();
    let amount = numeric_part.parse::<f64>().ok().filter(|a| a.is_finite())?;
    Some(if is_negative { -amount } else { amount })
}
