//! Placeholder-aware cell formatting.
//!
//! Missing optional data is a first-class state: every formatter degrades to
//! a placeholder rather than failing.

mod format;
mod score;

pub use format::{
    format_inr, format_pct, format_ratio, format_signed_pct, fraction_pct_cell, ratio_cell,
    recovery_cell, xirr_cell,
};
pub use score::ScoreBand;
