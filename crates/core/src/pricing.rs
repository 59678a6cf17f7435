//! Price display rules.

/// Rupees in one lakh.
pub const LAKH: f64 = 100_000.0;

/// Format an on-road price in lakh with two decimals, e.g. `150000` -> `₹1.50L`.
pub fn format_lakh(price: f64) -> String {
    format!("₹{:.2}L", price / LAKH)
}
