//! Quant score banding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    SCORE_CATEGORY_MODERATE_FLOOR, SCORE_STRONG_FLOOR, SCORE_TABLE_MODERATE_FLOOR,
};

/// Color band for a fund's composite quant score.
///
/// The dashboard table and the category view draw the moderate line at
/// different floors (40 vs 50); both agree that 70 and up is strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
    /// The backend did not score this fund.
    Missing,
}

impl ScoreBand {
    fn classify(score: Option<Decimal>, moderate_floor: Decimal) -> Self {
        match score {
            None => ScoreBand::Missing,
            Some(s) if s >= SCORE_STRONG_FLOOR => ScoreBand::Strong,
            Some(s) if s >= moderate_floor => ScoreBand::Moderate,
            Some(_) => ScoreBand::Weak,
        }
    }

    /// Banding used by the dashboard holdings table.
    pub fn for_table(score: Option<Decimal>) -> Self {
        Self::classify(score, SCORE_TABLE_MODERATE_FLOOR)
    }

    /// Banding used by the category drill-down rows.
    pub fn for_category(score: Option<Decimal>) -> Self {
        Self::classify(score, SCORE_CATEGORY_MODERATE_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn table_bands() {
        assert_eq!(ScoreBand::for_table(Some(dec!(85))), ScoreBand::Strong);
        assert_eq!(ScoreBand::for_table(Some(dec!(70))), ScoreBand::Strong);
        assert_eq!(ScoreBand::for_table(Some(dec!(45))), ScoreBand::Moderate);
        assert_eq!(ScoreBand::for_table(Some(dec!(39.9))), ScoreBand::Weak);
        assert_eq!(ScoreBand::for_table(None), ScoreBand::Missing);
    }

    #[test]
    fn category_draws_the_moderate_line_higher() {
        assert_eq!(ScoreBand::for_category(Some(dec!(45))), ScoreBand::Weak);
        assert_eq!(ScoreBand::for_category(Some(dec!(55))), ScoreBand::Moderate);
    }
}
