//! Formatting helpers for rendering layers

use bigdecimal::{BigDecimal, Signed};

use crate::types::round_money;

/// Format an amount with Indian digit grouping and two decimals: `1,23,45,678.90`
pub fn format_inr(amount: &BigDecimal) -> String {
    let rounded = round_money(amount);
    let digits = rounded.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if rounded.is_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, group_indian(integer), fraction)
}

/// Format a percentage rate without trailing zeros: `18%`, `2.5%`
pub fn format_rate(rate: &BigDecimal) -> String {
    let text = rate.with_scale_round(4, bigdecimal::RoundingMode::HalfUp).to_string();
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    format!("{}%", text)
}

/// Last three digits, then groups of two
fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }

    let (head, tail) = integer.split_at(integer.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
