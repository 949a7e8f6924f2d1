use serde_json::Value;

use crate::mapping::mapping_model::PricePeriod;

// ============================================================================
// Price formatting
// ============================================================================

/// Fixed currency symbol table. Unknown codes fall back to `$`.
pub fn currency_symbol(code: &str) -> &'static str {
    match code.to_ascii_uppercase().as_str() {
        "USD" => "$",
        "GBP" => "£",
        "EUR" => "€",
        "CAD" => "C$",
        "AUD" => "A$",
        "JPY" => "¥",
        "CHF" => "CHF",
        "CNY" => "¥",
        "INR" => "₹",
        _ => "$",
    }
}

/// Strip everything but digits and the decimal point from a raw amount.
/// Returns `None` when nothing numeric remains.
pub fn clean_amount(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.chars().any(|c| c.is_ascii_digit()) {
        Some(cleaned)
    } else {
        None
    }
}

/// Format a raw price value as `{symbol}{amount}{period suffix}`.
///
/// `"1200"` + `GBP` + `month` → `"£1200/month"`. Non-numeric input yields
/// `None` so the caller can fall back to the card placeholder.
pub fn format_price(raw: &Value, currency: &str, period: Option<PricePeriod>) -> Option<String> {
    let amount = match raw {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => clean_amount(s),
        _ => None,
    }?;

    let symbol = currency_symbol(currency);
    let suffix = period.map(|p| p.suffix()).unwrap_or("");
    Some(format!("{}{}{}", symbol, amount, suffix))
}
