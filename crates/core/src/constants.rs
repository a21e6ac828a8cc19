use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Placeholder for a metric the backend did not compute
pub const PLACEHOLDER: &str = "-";

/// Placeholder for a metric that is suppressed or has no analytics block
pub const PLACEHOLDER_WIDE: &str = "--";

/// Currency symbol for formatted monetary cells
pub const CURRENCY_SYMBOL: &str = "₹";

/// Decimal places for percent display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// XIRR is suppressed for positions younger than this (annualization is
/// meaningless on short windows)
pub const XIRR_MIN_DAYS_INVESTED: i64 = 365;

/// Quant score floor for the "strong" band
pub const SCORE_STRONG_FLOOR: Decimal = dec!(70);

/// Quant score floor for the "moderate" band in the dashboard table
pub const SCORE_TABLE_MODERATE_FLOOR: Decimal = dec!(40);

/// Quant score floor for the "moderate" band in the category view
pub const SCORE_CATEGORY_MODERATE_FLOOR: Decimal = dec!(50);
