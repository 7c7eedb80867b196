use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format cash amount with leading currency symbol, correct number of decimal
/// places, and thousands separators (ex. -$1,234.50).
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let factor = 10_i64.pow(decimal_places);
    let minor_units = (amount.abs() * factor as f64).round() as i64;
    let sign = if amount < 0.0 && minor_units != 0 { "-" } else { "" };
    let integer_part = (minor_units / factor).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{}{}", sign, currency.symbol(), integer_part)
    } else {
        format!(
            "{}{}{}.{:0width$}",
            sign,
            currency.symbol(),
            integer_part,
            minor_units % factor,
            width = decimal_places as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_amounts() {
        let usd = Currency::USD.symbol().to_string();
        assert_eq!(format_amount(100.0, Currency::USD), format!("{}100.00", usd));
        assert_eq!(format_amount(1234.5, Currency::USD), format!("{}1,234.50", usd));
        assert_eq!(format_amount(-0.05, Currency::USD), format!("-{}0.05", usd));
        assert_eq!(format_amount(-0.001, Currency::USD), format!("{}0.00", usd));
        assert_eq!(format_amount(99.999, Currency::USD), format!("{}100.00", usd));
    }

    #[test]
    fn formats_currencies_without_minor_units() {
        let jpy = Currency::JPY.symbol().to_string();
        assert_eq!(format_amount(1500.4, Currency::JPY), format!("{}1,500", jpy));
    }
}
