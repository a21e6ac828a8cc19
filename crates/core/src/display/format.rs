//! Cell formatters for the dashboard and category tables.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fundlens_api_client::models::{FundAnalytics, RecoveryDays};

use crate::constants::{
    CURRENCY_SYMBOL, DISPLAY_DECIMAL_PRECISION, PLACEHOLDER, PLACEHOLDER_WIDE,
    XIRR_MIN_DAYS_INVESTED,
};

/// Formats a monetary value with Indian digit grouping: `₹12,34,567`.
/// Up to two decimal places, trailing zeros dropped.
pub fn format_inr(value: Decimal) -> String {
    let rounded = value.round_dp(2).normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let grouped = group_indian(int_part);
    match frac_part {
        Some(frac) => format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, grouped, frac),
        None => format!("{}{}{}", sign, CURRENCY_SYMBOL, grouped),
    }
}

/// Indian grouping: the last three digits form one group, everything above
/// groups in pairs (12,34,56,789).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Formats a percent-points value with a fixed number of decimals: `14.32%`.
pub fn format_pct(value: Decimal, decimals: u32) -> String {
    format!("{:.prec$}%", value, prec = decimals as usize)
}

/// Like [`format_pct`] but with an explicit `+` on non-negative values.
pub fn format_signed_pct(value: Decimal, decimals: u32) -> String {
    if value >= Decimal::ZERO {
        format!("+{}", format_pct(value, decimals))
    } else {
        format_pct(value, decimals)
    }
}

/// Plain fixed-decimals number, for unit-less ratios (beta, Sharpe, ...).
pub fn format_ratio(value: Decimal, decimals: u32) -> String {
    format!("{:.prec$}", value, prec = decimals as usize)
}

/// Cell for an optional fraction-valued metric, rendered in percent.
/// `None` renders the narrow placeholder.
pub fn fraction_pct_cell(value: Option<Decimal>, decimals: u32) -> String {
    match value {
        Some(fraction) => format_pct(fraction * dec!(100), decimals),
        None => PLACEHOLDER.to_string(),
    }
}

/// Cell for an optional unit-less metric. `None` renders the narrow placeholder.
pub fn ratio_cell(value: Option<Decimal>, decimals: u32) -> String {
    match value {
        Some(ratio) => format_ratio(ratio, decimals),
        None => PLACEHOLDER.to_string(),
    }
}

/// XIRR cell. Annualized return is suppressed for positions younger than a
/// year; an absent XIRR on an old-enough position reads as flat.
pub fn xirr_cell(xirr: Option<Decimal>, days_invested: Option<i64>) -> String {
    match days_invested {
        Some(days) if days > 0 && days < XIRR_MIN_DAYS_INVESTED => PLACEHOLDER_WIDE.to_string(),
        _ => match xirr {
            Some(rate) => format_pct(rate * dec!(100), DISPLAY_DECIMAL_PRECISION),
            None => format_pct(Decimal::ZERO, DISPLAY_DECIMAL_PRECISION),
        },
    }
}

/// Drawdown recovery cell: a day count, the explicit "Unrecovered" sentinel,
/// or the wide placeholder when the analytics block is missing entirely.
pub fn recovery_cell(analytics: Option<&FundAnalytics>) -> String {
    match analytics.and_then(|a| a.recovery_days) {
        Some(RecoveryDays::Days(days)) => format!("{}d", days),
        Some(RecoveryDays::Unrecovered) => "Unrecovered".to_string(),
        None => PLACEHOLDER_WIDE.to_string(),
    }
}
