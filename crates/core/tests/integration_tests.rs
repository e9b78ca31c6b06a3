use share_average_core::errors::CoreError;
use share_average_core::models::aggregation::{AggregationResult, RoundingPolicy};
use share_average_core::models::ledger::PurchaseLedger;
use share_average_core::models::lot::{LotField, PurchaseLot};
use share_average_core::models::settings::Settings;
use share_average_core::ShareAverageCalculator;

fn reference_calculator() -> ShareAverageCalculator {
    let mut calc = ShareAverageCalculator::new();
    calc.set_lot(0, "100", "10").unwrap();
    calc.set_lot(1, "200", "5").unwrap();
    calc
}

// ═══════════════════════════════════════════════════════════════════
//  Fresh session
// ═══════════════════════════════════════════════════════════════════

mod fresh_session {
    use super::*;

    #[test]
    fn starts_with_two_empty_lots_and_zero_results() {
        let calc = ShareAverageCalculator::new();
        assert_eq!(calc.lot_count(), 2);
        assert!(calc.lots().iter().all(PurchaseLot::is_blank));
        assert_eq!(*calc.results(), AggregationResult::zero());
        assert!(calc.chart_rows().is_empty());
        assert!(!calc.has_chart());
        assert!(!calc.is_stale());
    }

    #[test]
    fn debug_impl_summarizes_state() {
        let calc = ShareAverageCalculator::new();
        let dbg = format!("{calc:?}");
        assert!(dbg.contains("ShareAverageCalculator"));
        assert!(dbg.contains("lots: 2"));
    }

    #[test]
    fn from_ledger_pads_short_ledgers() {
        let ledger = PurchaseLedger {
            entries: vec![PurchaseLot::new("5", "5")],
        };
        let calc = ShareAverageCalculator::from_ledger(ledger, Settings::default()).unwrap();
        assert_eq!(calc.lot_count(), 2);
        assert_eq!(calc.lots()[0].price, "5");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Calculate
// ═══════════════════════════════════════════════════════════════════

mod calculate {
    use super::*;

    #[test]
    fn reference_example_end_to_end() {
        let mut calc = reference_calculator();
        let result = *calc.calculate();
        assert_eq!(result.total_quantity, 15.0);
        assert_eq!(result.total_amount, 2000.0);
        assert!((result.average_price - 133.333_333).abs() < 1e-5);

        let summary = calc.summary();
        assert_eq!(summary.average_price, "133.33");
        assert_eq!(summary.total_quantity, "15");
        assert_eq!(summary.total_amount, "₹ 2000");
    }

    #[test]
    fn empty_session_calculates_zero_but_has_rows() {
        let mut calc = ShareAverageCalculator::new();
        let result = *calc.calculate();
        assert_eq!(result, AggregationResult::zero());
        assert_eq!(calc.chart_rows().len(), 2);
        assert!(calc.has_chart());
    }

    #[test]
    fn calculate_twice_is_identical() {
        let mut calc = reference_calculator();
        let first = *calc.calculate();
        let first_rows = calc.chart_rows().to_vec();
        let second = *calc.calculate();
        assert_eq!(first, second);
        assert_eq!(first_rows, calc.chart_rows());
    }

    #[test]
    fn results_replaced_wholesale() {
        let mut calc = reference_calculator();
        calc.add_purchase();
        calc.calculate();
        assert_eq!(calc.chart_rows().len(), 3);

        assert!(calc.remove_purchase(2));
        calc.calculate();
        assert_eq!(calc.chart_rows().len(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Staleness
// ═══════════════════════════════════════════════════════════════════

mod staleness {
    use super::*;

    #[test]
    fn edits_after_calculate_mark_stale_without_changing_results() {
        let mut calc = reference_calculator();
        calc.calculate();
        let before = *calc.results();
        assert!(!calc.is_stale());

        calc.set_field(0, LotField::Quantity, "1000").unwrap();
        assert!(calc.is_stale());
        assert_eq!(*calc.results(), before);

        calc.calculate();
        assert!(!calc.is_stale());
        assert_ne!(*calc.results(), before);
    }

    #[test]
    fn ignored_removal_does_not_mark_stale() {
        let mut calc = reference_calculator();
        calc.calculate();
        assert!(!calc.remove_purchase(0));
        assert!(!calc.remove_purchase(1));
        assert!(!calc.is_stale());
    }

    #[test]
    fn add_purchase_marks_stale() {
        let mut calc = reference_calculator();
        calc.calculate();
        assert_eq!(calc.add_purchase(), 2);
        assert!(calc.is_stale());
    }

    #[test]
    fn failed_update_does_not_mark_stale() {
        let mut calc = reference_calculator();
        calc.calculate();
        let err = calc.set_field(9, LotField::Price, "1").unwrap_err();
        assert!(matches!(err, CoreError::LotIndexOutOfBounds { index: 9, len: 2 }));
        assert!(!calc.is_stale());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Reset
// ═══════════════════════════════════════════════════════════════════

mod reset {
    use super::*;

    #[test]
    fn clears_ledger_results_and_charts() {
        let mut calc = reference_calculator();
        calc.add_purchase();
        calc.set_lot(2, "50", "50").unwrap();
        calc.calculate();

        calc.reset();
        assert_eq!(calc.lot_count(), 2);
        assert!(calc.lots().iter().all(PurchaseLot::is_blank));
        assert_eq!(*calc.results(), AggregationResult::zero());
        assert!(!calc.has_chart());
        assert!(calc.line_chart().categories.is_empty());
        assert!(calc.pie_chart().is_empty());
        assert!(!calc.is_stale());
    }

    #[test]
    fn reset_keeps_settings() {
        let settings = Settings {
            currency_symbol: "$".into(),
            ..Settings::default()
        };
        let mut calc = ShareAverageCalculator::with_settings(settings.clone()).unwrap();
        calc.reset();
        assert_eq!(*calc.settings(), settings);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Charts and report
// ═══════════════════════════════════════════════════════════════════

mod charts {
    use super::*;

    #[test]
    fn charts_follow_ledger_order() {
        let mut calc = reference_calculator();
        calc.add_purchase();
        calc.set_lot(2, "", "").unwrap();
        calc.calculate();

        let line = calc.line_chart();
        assert_eq!(line.categories, vec!["Purchase 1", "Purchase 2", "Purchase 3"]);
        assert_eq!(line.series("Price").unwrap().values, vec![100.0, 200.0, 0.0]);

        let pie = calc.pie_chart();
        assert_eq!(pie.len(), 3);
        assert_eq!(pie[2].amount, 0.0);
        assert_eq!(pie[2].caption, "Purchase 3 0%");
    }

    #[test]
    fn report_json_has_all_sections() {
        let mut calc = reference_calculator();
        calc.calculate();
        let v: serde_json::Value = serde_json::from_str(&calc.report_json().unwrap()).unwrap();
        assert_eq!(v["results"]["totalQuantity"], 15.0);
        assert_eq!(v["summary"]["averagePrice"], "133.33");
        assert_eq!(v["rows"].as_array().unwrap().len(), 2);
        assert_eq!(v["rows"][1]["label"], "Purchase 2");
        assert_eq!(v["lineChart"]["series"].as_array().unwrap().len(), 2);
        assert_eq!(v["pieChart"][0]["caption"], "Purchase 1 50%");
    }

    #[test]
    fn settings_change_formatting_only() {
        let mut calc = reference_calculator();
        calc.calculate();
        let results = *calc.results();
        calc.set_settings(Settings {
            rounding: RoundingPolicy::Integer,
            ..Settings::default()
        })
        .unwrap();
        assert_eq!(*calc.results(), results);
        assert_eq!(calc.summary().average_price, "133");
    }

    #[test]
    fn constructors_reject_invalid_settings() {
        let bad = Settings {
            palette: Vec::new(),
            ..Settings::default()
        };
        let err = ShareAverageCalculator::with_settings(bad.clone()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));

        let err = ShareAverageCalculator::from_ledger(PurchaseLedger::default(), bad).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }

    #[test]
    fn invalid_settings_rejected() {
        let mut calc = ShareAverageCalculator::new();
        let err = calc
            .set_settings(Settings {
                palette: Vec::new(),
                ..Settings::default()
            })
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
        assert_eq!(calc.settings().palette.len(), 5);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Snapshot interchange
// ═══════════════════════════════════════════════════════════════════

mod snapshots {
    use super::*;

    #[test]
    fn export_import_roundtrip() {
        let mut calc = reference_calculator();
        calc.add_purchase();
        calc.set_lot(2, "x", "3").unwrap();
        let json = calc.export_ledger_json().unwrap();

        let mut other = ShareAverageCalculator::new();
        assert_eq!(other.import_ledger_json(&json).unwrap(), 3);
        assert_eq!(other.lots(), calc.lots());
        assert!(other.is_stale());
    }

    #[test]
    fn import_pads_to_two_lots() {
        let mut calc = ShareAverageCalculator::new();
        assert_eq!(calc.import_ledger_json("[]").unwrap(), 2);
        assert_eq!(
            calc.import_ledger_json(r#"[{"price":"1","quantity":"1"}]"#).unwrap(),
            2
        );
        assert_eq!(calc.lots()[0].price, "1");
        assert!(calc.lots()[1].is_blank());
    }

    #[test]
    fn import_malformed_json_keeps_ledger() {
        let mut calc = reference_calculator();
        let err = calc.import_ledger_json("{\"price\": 1}").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
        assert_eq!(calc.lots()[0].price, "100");
    }

    #[test]
    fn imported_snapshot_computes() {
        let mut calc = ShareAverageCalculator::new();
        calc.import_ledger_json(
            r#"[{"price":"100","quantity":"10"},{"price":"200","quantity":"5"}]"#,
        )
        .unwrap();
        assert_eq!(calc.calculate().total_amount, 2000.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Slot titles
// ═══════════════════════════════════════════════════════════════════

mod slot_titles {
    use super::*;

    #[test]
    fn titles_match_form_headings() {
        let mut calc = ShareAverageCalculator::new();
        calc.add_purchase();
        let titles: Vec<String> = (0..calc.lot_count()).map(|i| calc.slot_title(i)).collect();
        assert_eq!(titles, vec!["First Purchase", "Second Purchase", "Purchase 3"]);
    }
}
