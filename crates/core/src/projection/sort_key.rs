//! Strong types for the holdings sort state.
//!
//! The wire tokens are the column identifiers the UI sends; an unrecognized
//! token is a deserialization error rather than a silent fallthrough to some
//! field lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sortable column of the holdings table.
///
/// Spans both top-level holding fields and the nested analytics block;
/// [`SortKey::Return`] is a derived column with no stored counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Description,
    Amount,
    CurrentValue,
    Xirr,
    Score,
    Return,
    FundLife,
    Cagr,
    Alpha,
    Beta,
    InfoRatio,
    Sharpe,
    Sortino,
    MaxDrawdown,
    RecoveryDays,
    UpsideCapture,
    DownsideCapture,
    #[serde(rename = "rolling_3y_avg")]
    Rolling3yAvg,
    #[serde(rename = "rolling_3y_max")]
    Rolling3yMax,
    #[serde(rename = "rolling_3y_min")]
    Rolling3yMin,
    RollingPos,
}

impl SortKey {
    /// Wire token for this column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Description => "description",
            SortKey::Amount => "amount",
            SortKey::CurrentValue => "current_value",
            SortKey::Xirr => "xirr",
            SortKey::Score => "score",
            SortKey::Return => "return",
            SortKey::FundLife => "fund_life",
            SortKey::Cagr => "cagr",
            SortKey::Alpha => "alpha",
            SortKey::Beta => "beta",
            SortKey::InfoRatio => "info_ratio",
            SortKey::Sharpe => "sharpe",
            SortKey::Sortino => "sortino",
            SortKey::MaxDrawdown => "max_drawdown",
            SortKey::RecoveryDays => "recovery_days",
            SortKey::UpsideCapture => "upside_capture",
            SortKey::DownsideCapture => "downside_capture",
            SortKey::Rolling3yAvg => "rolling_3y_avg",
            SortKey::Rolling3yMax => "rolling_3y_max",
            SortKey::Rolling3yMin => "rolling_3y_min",
            SortKey::RollingPos => "rolling_pos",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort column and direction. Transient view-layer state; nothing
/// persists it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Column-click policy: clicking the currently-active ascending column
    /// flips it to descending; any other column (or no prior state) starts
    /// ascending.
    pub fn toggled(prior: Option<SortState>, key: SortKey) -> Self {
        match prior {
            Some(state) if state.key == key && state.direction == SortDirection::Ascending => {
                Self {
                    key,
                    direction: SortDirection::Descending,
                }
            }
            _ => Self::ascending(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_same_key_flips_then_resets() {
        let first = SortState::toggled(None, SortKey::Cagr);
        assert_eq!(first, SortState::ascending(SortKey::Cagr));

        let second = SortState::toggled(Some(first), SortKey::Cagr);
        assert_eq!(second.direction, SortDirection::Descending);

        // A third click on a descending column starts ascending again.
        let third = SortState::toggled(Some(second), SortKey::Cagr);
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn toggle_different_key_starts_ascending() {
        let descending = SortState {
            key: SortKey::Amount,
            direction: SortDirection::Descending,
        };
        let next = SortState::toggled(Some(descending), SortKey::Xirr);
        assert_eq!(next, SortState::ascending(SortKey::Xirr));
    }

    #[test]
    fn sort_key_wire_tokens() {
        assert_eq!(
            serde_json::to_string(&SortKey::CurrentValue).unwrap(),
            "\"current_value\""
        );
        assert_eq!(
            serde_json::to_string(&SortKey::Rolling3yAvg).unwrap(),
            "\"rolling_3y_avg\""
        );
        assert_eq!(serde_json::to_string(&SortKey::Return).unwrap(), "\"return\"");

        let key: SortKey = serde_json::from_str("\"info_ratio\"").unwrap();
        assert_eq!(key, SortKey::InfoRatio);

        // Unknown column tokens are rejected, not silently accepted.
        assert!(serde_json::from_str::<SortKey>("\"velocity\"").is_err());
    }

    #[test]
    fn display_matches_wire_token() {
        assert_eq!(SortKey::Rolling3yMin.to_string(), "rolling_3y_min");
        assert_eq!(SortKey::RollingPos.to_string(), "rolling_pos");
    }
}
