//! Tests for the category drill-down service.

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use fundlens_api_client::models::{FundAnalytics, Holding, PortfolioSnapshot};

    use crate::category::{CategoryService, CategoryServiceTrait};
    use crate::display::ScoreBand;

    fn tagged(description: &str, class: &str, amount: i64, value: i64) -> Holding {
        Holding {
            description: description.to_string(),
            asset_class: Some(class.to_string()),
            amount: amount.into(),
            current_value: value.into(),
            ..Default::default()
        }
    }

    fn snapshot() -> PortfolioSnapshot {
        PortfolioSnapshot {
            holdings: vec![
                Holding {
                    scheme_name: Some("Axis Bluechip Fund".to_string()),
                    isin: Some("INF846K01EW2".to_string()),
                    score: Some(dec!(72.5)),
                    analytics: Some(FundAnalytics {
                        fund_life: Some(dec!(9.4)),
                        ..Default::default()
                    }),
                    ..tagged("AXIS BLUECHIP", "Equity", 200000, 264000)
                },
                tagged("GILT FUND", "Debt", 100000, 104000),
                tagged("SMALL CAP", "Equity", 100000, 86000),
                // Unclassified holdings never appear in a category.
                Holding {
                    asset_class: None,
                    ..tagged("UNMAPPED", "x", 5000, 5100)
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn equity_view_keeps_only_equity_and_totals_match() {
        let service = CategoryService::new();
        let view = service.category_view(&snapshot(), "Equity");

        assert_eq!(view.summary.fund_count, 2);
        assert_eq!(view.summary.total_value, dec!(350000));
        assert_eq!(view.summary.total_invested, dec!(300000));
        // (350000 - 300000) / 300000 * 100
        assert_eq!(view.summary.overall_return_pct.round_dp(4), dec!(16.6667));
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn rows_render_names_returns_and_bands() {
        let service = CategoryService::new();
        let view = service.category_view(&snapshot(), "Equity");

        let axis = &view.rows[0];
        assert_eq!(axis.scheme_name, "Axis Bluechip Fund");
        assert_eq!(axis.isin.as_deref(), Some("INF846K01EW2"));
        assert_eq!(axis.current_value, "₹2,64,000");
        assert_eq!(axis.return_pct, "+32.00%");
        assert_eq!(axis.score, "72.5");
        assert_eq!(axis.score_band, ScoreBand::Strong);
        assert_eq!(axis.fund_life, "9.4 yrs");

        let small_cap = &view.rows[1];
        assert_eq!(small_cap.scheme_name, "N/A");
        assert_eq!(small_cap.return_pct, "-14.00%");
        assert_eq!(small_cap.score, "-");
        assert_eq!(small_cap.score_band, ScoreBand::Missing);
        assert_eq!(small_cap.fund_life, "-");
    }

    #[test]
    fn unknown_class_yields_an_empty_view() {
        let service = CategoryService::new();
        let view = service.category_view(&snapshot(), "Commodities");

        assert_eq!(view.summary.fund_count, 0);
        assert_eq!(view.summary.total_value, dec!(0));
        assert_eq!(view.summary.overall_return_pct, dec!(0));
        assert!(view.rows.is_empty());
    }

    #[test]
    fn class_match_is_case_sensitive() {
        let service = CategoryService::new();
        assert!(service.category_view(&snapshot(), "equity").rows.is_empty());
    }
}
