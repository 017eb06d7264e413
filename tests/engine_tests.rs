//! End-to-end tests for the matching engine: batch semantics, the
//! stopword/disambiguation scenarios that motivated the design, and the
//! price and unit-cost contracts.

use procure_match::matching::{apply_manual_link, match_offers, MasterIndex, MatchConfig};
use procure_match::model::{ConfidenceTier, MasterProduct, PriceMatchStatus, SupplierOffer};
use procure_match::pricing::{best_buy_order, validate_public_price};

fn catalog() -> Vec<MasterProduct> {
    vec![
        MasterProduct::new("PAN-10", "Panadol 500mg Tablet 10s", "BOX", Some(4.0)),
        MasterProduct::new("PAN-100", "Panadol 500mg Tablet 100s", "BOX", Some(32.0)),
        MasterProduct::new("ACT-01", "Actifed Expectorant Syrup", "BOTTLE", Some(9.0)),
        MasterProduct::new("LAN-01", "Lantus Solostar Pen 100IU/ml", "UNIT", Some(112.5)),
        MasterProduct::new("AMX-21", "Amoxil 500mg Capsule 21s", "BOX", None),
    ]
}

fn build_index(config: &MatchConfig) -> MasterIndex {
    MasterIndex::build(catalog(), config).unwrap()
}

mod batch_semantics {
    use super::*;

    #[test]
    fn test_output_is_order_preserving_and_length_preserving() {
        let config = MatchConfig::default();
        let index = build_index(&config);
        let offers = vec![
            SupplierOffer::new("A", "L1", "Panadol 500mg", 3.4, 10),
            SupplierOffer::new("B", "L1", "completely unrelated thing", 1.0, 1),
            SupplierOffer::new("C", "L1", "Amoxil 500mg caps", 7.0, 21),
            SupplierOffer::new("D", "L1", "", 1.0, 1),
        ];

        let results = match_offers(&offers, &index, &config).unwrap();
        assert_eq!(results.len(), 4);
        assert!(results[0].is_matched());
        assert!(!results[1].is_matched());
        assert_eq!(results[2].matched_item_code.as_deref(), Some("AMX-21"));
        assert!(results[3].skip_reason.is_some());
    }

    #[test]
    fn test_results_independent_of_batch_composition() {
        let config = MatchConfig::default();
        let index = build_index(&config);

        let probe = SupplierOffer::new("A", "L1", "Panadol 500mg", 3.4, 10)
            .with_declared_public_price(4.0);
        let filler = vec![
            SupplierOffer::new("B", "L1", "Amoxil 500mg", 7.0, 21),
            SupplierOffer::new("C", "L1", "Actifed Syrup", 8.5, 1),
        ];

        let alone = match_offers(std::slice::from_ref(&probe), &index, &config).unwrap();

        let mut padded_offers = filler.clone();
        padded_offers.push(probe.clone());
        let padded = match_offers(&padded_offers, &index, &config).unwrap();

        let mut reversed_offers = vec![probe.clone()];
        reversed_offers.extend(filler);
        let reversed = match_offers(&reversed_offers, &index, &config).unwrap();

        assert_eq!(alone[0], padded[2]);
        assert_eq!(alone[0], reversed[0]);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let config = MatchConfig::default();
        let index = build_index(&config);
        let offers = vec![
            SupplierOffer::new("A", "L1", "Panadol 500mg", 28.0, 24),
            SupplierOffer::new("B", "L1", "Amoxil 500mg", 7.0, 21),
        ];

        let first = match_offers(&offers, &index, &config).unwrap();
        for _ in 0..10 {
            let again = match_offers(&offers, &index, &config).unwrap();
            assert_eq!(first, again);
        }
    }
}

mod stopword_scenarios {
    use super::*;

    #[test]
    fn test_shared_dosage_form_never_matches() {
        // Both raw names end in "Syrup"; after stopword removal the offer is
        // "lantus" and the catalog entry is "actifed expectorant". Nothing
        // about those two should clear any cutoff.
        let config = MatchConfig::default();
        let index = MasterIndex::build(
            vec![MasterProduct::new(
                "ACT-01",
                "Actifed Expectorant Syrup",
                "BOTTLE",
                Some(9.0),
            )],
            &config,
        )
        .unwrap();

        let offer = SupplierOffer::new("A", "L1", "Lantus Syrup", 100.0, 1);
        let results = match_offers(&[offer], &index, &config).unwrap();

        assert_eq!(results[0].matched_item_code, None);
        assert_eq!(results[0].confidence_tier, ConfidenceTier::None);
        assert_eq!(results[0].similarity_score, 0);
    }

    #[test]
    fn test_stopword_only_name_still_gets_a_key() {
        // A name made entirely of stopwords keeps its pre-removal form and
        // is matched (or not) on that, rather than on an empty string.
        let config = MatchConfig::default();
        let index = build_index(&config);
        let offer = SupplierOffer::new("A", "L1", "Syrup Bottle", 2.0, 1);
        let results = match_offers(&[offer], &index, &config).unwrap();

        assert!(results[0].skip_reason.is_none());
        assert!(!results[0].is_matched());
    }
}

mod disambiguation {
    use super::*;

    #[test]
    fn test_pack_variants_resolved_by_pack_size() {
        let config = MatchConfig::default();
        let index = build_index(&config);

        let small = SupplierOffer::new("A", "L1", "Panadol 500mg", 3.4, 10);
        let large = SupplierOffer::new("A", "L1", "Panadol 500mg", 28.0, 100);
        let results = match_offers(&[small, large], &index, &config).unwrap();

        assert_eq!(results[0].matched_item_code.as_deref(), Some("PAN-10"));
        assert_eq!(results[1].matched_item_code.as_deref(), Some("PAN-100"));
        assert_eq!(results[0].confidence_tier, ConfidenceTier::High);
    }

    #[test]
    fn test_pack_variants_resolved_by_declared_price() {
        let config = MatchConfig::default();
        let index = build_index(&config);

        // Pack size 24 matches neither catalog pack count; the declared
        // public price is the remaining signal.
        let offer = SupplierOffer::new("A", "L1", "Panadol 500mg", 28.0, 24)
            .with_declared_public_price(31.5);
        let results = match_offers(&[offer], &index, &config).unwrap();

        assert_eq!(results[0].matched_item_code.as_deref(), Some("PAN-100"));
    }

    #[test]
    fn test_no_signal_falls_back_to_smallest_item_code() {
        let config = MatchConfig::default();
        let index = build_index(&config);

        let offer = SupplierOffer::new("A", "L1", "Panadol 500mg", 28.0, 24);
        for _ in 0..5 {
            let results = match_offers(std::slice::from_ref(&offer), &index, &config).unwrap();
            assert_eq!(results[0].matched_item_code.as_deref(), Some("PAN-10"));
        }
    }
}

mod price_validation {
    use super::*;

    #[test]
    fn test_tolerance_boundary() {
        assert_eq!(
            validate_public_price(Some(25.00), Some(25.01), 0.01),
            PriceMatchStatus::Match
        );
        assert_eq!(
            validate_public_price(Some(25.00), Some(25.02), 0.01),
            PriceMatchStatus::Mismatch
        );
    }

    #[test]
    fn test_high_confidence_match_can_still_mismatch_on_price() {
        let config = MatchConfig::default();
        let index = build_index(&config);

        let offer = SupplierOffer::new("A", "L1", "Panadol 500mg", 3.4, 10)
            .with_declared_public_price(5.5);
        let results = match_offers(&[offer], &index, &config).unwrap();

        assert_eq!(results[0].confidence_tier, ConfidenceTier::High);
        assert_eq!(results[0].price_match_status, PriceMatchStatus::Mismatch);
    }

    #[test]
    fn test_master_without_regulated_price_is_unknown() {
        let config = MatchConfig::default();
        let index = build_index(&config);

        let offer = SupplierOffer::new("A", "L1", "Amoxil 500mg", 7.0, 21)
            .with_declared_public_price(8.0);
        let results = match_offers(&[offer], &index, &config).unwrap();

        assert_eq!(results[0].matched_item_code.as_deref(), Some("AMX-21"));
        assert_eq!(results[0].price_match_status, PriceMatchStatus::Unknown);
    }
}

mod unit_cost_ranking {
    use super::*;

    #[test]
    fn test_bonus_deal_wins_best_buy() {
        let config = MatchConfig::default();
        let index = build_index(&config);

        let offers = vec![
            SupplierOffer::new("A", "L1", "Panadol 500mg", 3.4, 10),
            SupplierOffer::new("B", "L1", "Panadol 500mg", 3.0, 10).with_bonus(2),
            SupplierOffer::new("C", "L1", "Panadol 500mg", 3.1, 10),
        ];
        let results = match_offers(&offers, &index, &config).unwrap();

        // 100/(10+2) semantics: B pays 3.0 for 12 units
        assert!((results[1].effective_unit_cost.unwrap() - 0.25).abs() < 1e-9);
        assert_eq!(best_buy_order(&results), vec![1, 2, 0]);
    }
}

mod manual_links {
    use super::*;

    #[test]
    fn test_manual_link_supersedes_automatic_match() {
        let config = MatchConfig::default();
        let index = build_index(&config);
        let offer = SupplierOffer::new("A", "L1", "Panadol 500mg", 3.4, 10)
            .with_declared_public_price(9.0);

        let auto = match_offers(std::slice::from_ref(&offer), &index, &config).unwrap();
        assert_eq!(auto[0].matched_item_code.as_deref(), Some("PAN-10"));

        let manual = apply_manual_link(&offer, "ACT-01", &index, &config).unwrap();
        assert_eq!(manual.matched_item_code.as_deref(), Some("ACT-01"));
        assert_eq!(manual.confidence_tier, ConfidenceTier::Manual);
        assert_eq!(manual.similarity_score, 0);
        // Declared 9.0 against ACT-01's regulated 9.0
        assert_eq!(manual.price_match_status, PriceMatchStatus::Match);
        assert!((manual.effective_unit_cost.unwrap() - 0.34).abs() < 1e-9);
    }
}
