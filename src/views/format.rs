//! en-US display formatting

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as USD, e.g. `$124,000.00`
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    let fixed = format!("{:.2}", rounded);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// Integer with thousands separators, e.g. `1,247`
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&digits))
}

/// Short month date, e.g. `Nov 25, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format an ISO `YYYY-MM-DD` string; other input is returned unchanged
pub fn format_date_str(value: &str) -> String {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(format_date)
        .unwrap_or_else(|_| value.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Decimal::from(124_000)), "$124,000.00");
        assert_eq!(format_currency(Decimal::from_str("0.5").unwrap()), "$0.50");
        assert_eq!(format_currency(Decimal::from_str("1234567.005").unwrap()), "$1,234,567.01");
        assert_eq!(format_currency(Decimal::from_str("-42.1").unwrap()), "-$42.10");
        assert_eq!(format_currency(Decimal::from(999)), "$999.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1247), "1,247");
        assert_eq!(format_count(89), "89");
        assert_eq!(format_count(-1000), "-1,000");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
        assert_eq!(format_date(date), "Nov 5, 2024");
        assert_eq!(format_date_str("2024-11-25"), "Nov 25, 2024");
        assert_eq!(format_date_str("soon"), "soon");
    }
}
