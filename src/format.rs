//! display helpers for the calculator's outputs, Indian locale conventions

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal::{round_half_away, Money};

const CRORE: Decimal = dec!(10000000);
const LAKH: Decimal = dec!(100000);
const THOUSAND: Decimal = dec!(1000);

/// whole-unit currency with Indian digit grouping, e.g. `₹1,16,172`
pub fn format_currency(amount: Money, symbol: &str) -> String {
    let rounded = amount.round_to_unit().as_decimal();
    let digits = rounded.abs().normalize().to_string();
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    format!("{}{}{}", sign, symbol, group_indian(&digits))
}

/// short form used on scheme cards: `₹1.5Cr`, `₹10L`, `₹50K`, `₹500`
pub fn format_compact(amount: Money, symbol: &str) -> String {
    let value = amount.as_decimal().abs();
    let sign = if amount.is_negative() { "-" } else { "" };

    let figure = if value >= CRORE {
        format!("{}Cr", fixed(value / CRORE, 1))
    } else if value >= LAKH {
        format!("{}L", fixed(value / LAKH, 0))
    } else if value >= THOUSAND {
        format!("{}K", fixed(value / THOUSAND, 0))
    } else {
        value.normalize().to_string()
    };

    format!("{}{}{}", sign, symbol, figure)
}

/// `36 months (3.0 years)`
pub fn format_tenure(months: i64) -> String {
    let years = Decimal::from(months) / dec!(12);
    format!("{} months ({} years)", months, fixed(years, 1))
}

/// `86.1%`
pub fn format_percent(value: Decimal, decimals: u32) -> String {
    format!("{}%", fixed(value, decimals))
}

/// fixed number of decimals, ties away from zero
fn fixed(value: Decimal, decimals: u32) -> String {
    let mut rounded = round_half_away(value, decimals);
    rounded.rescale(decimals);
    rounded.to_string()
}

/// last three digits, then groups of two
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    groups.push(head);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(Money::from_major(116_172), "₹"), "₹1,16,172");
        assert_eq!(format_currency(Money::from_major(3_227), "₹"), "₹3,227");
        assert_eq!(format_currency(Money::from_major(10_000_000), "₹"), "₹1,00,00,000");
        assert_eq!(format_currency(Money::from_major(999), "₹"), "₹999");
        assert_eq!(format_currency(Money::ZERO, "₹"), "₹0");
    }

    #[test]
    fn test_currency_rounds_and_signs() {
        assert_eq!(format_currency(Money::from_decimal(dec!(3226.5)), "₹"), "₹3,227");
        assert_eq!(format_currency(Money::from_major(-16_172), "₹"), "-₹16,172");
        assert_eq!(format_currency(Money::from_decimal(dec!(-0.4)), "₹"), "₹0");
        assert_eq!(format_currency(Money::from_major(1_234_567), "$"), "$12,34,567");
    }

    #[test]
    fn test_compact_amounts() {
        assert_eq!(format_compact(Money::from_major(15_000_000), "₹"), "₹1.5Cr");
        assert_eq!(format_compact(Money::from_major(10_000_000), "₹"), "₹1.0Cr");
        assert_eq!(format_compact(Money::from_major(1_000_000), "₹"), "₹10L");
        assert_eq!(format_compact(Money::from_major(150_000), "₹"), "₹2L");
        assert_eq!(format_compact(Money::from_major(50_000), "₹"), "₹50K");
        assert_eq!(format_compact(Money::from_major(500), "₹"), "₹500");
    }

    #[test]
    fn test_compact_sign_precedes_symbol() {
        assert_eq!(format_compact(Money::from_major(-500), "₹"), "-₹500");
        assert_eq!(format_compact(Money::from_major(-150_000), "₹"), "-₹2L");
        assert_eq!(format_compact(Money::from_major(-15_000_000), "₹"), "-₹1.5Cr");
        assert_eq!(format_compact(Money::from_major(-16_172), "₹"), "-₹16K");
        assert_eq!(format_currency(Money::from_major(-16_172), "₹"), "-₹16,172");
    }

    #[test]
    fn test_tenure_and_percent() {
        assert_eq!(format_tenure(36), "36 months (3.0 years)");
        assert_eq!(format_tenure(6), "6 months (0.5 years)");
        assert_eq!(format_tenure(100), "100 months (8.3 years)");
        assert_eq!(format_percent(dec!(86.07925), 1), "86.1%");
        assert_eq!(format_percent(dec!(14), 1), "14.0%");
    }
}
