use num_format::{Locale, ToFormattedString as _};

/// Whole amount with French thousands separators and the currency symbol
/// (ex. 1 200 €).
pub(crate) fn format_amount(amount: i64, currency_symbol: &str) -> String {
    format!("{} {}", amount.to_formatted_string(&Locale::fr), currency_symbol)
}
