//! Draw property suite
//!
//! Covers totality, determinism and band boundaries of the cumulative walk
//! across every reference tier, plus catalog loading failures.

use sc_prize::{
    PROBABILITY_EPSILON, PriceTier, PrizeEngine, PrizeError, PrizeOutcome, SeededSource,
    TierCatalog,
};

// ═══════════════════════════════════════════════════════════════════════════════
// FIXTURES
// ═══════════════════════════════════════════════════════════════════════════════

fn cumulative_bounds(tier: &PriceTier) -> Vec<(f64, f64)> {
    let mut lower = 0.0;
    tier.payout_table()
        .iter()
        .map(|o| {
            let upper = lower + o.probability;
            let band = (lower, upper);
            lower = upper;
            band
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// TOTALITY & DETERMINISM
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn draw_is_total_over_unit_sweep() {
    let engine = PrizeEngine::standard();

    for tier in engine.tiers() {
        for step in 0..10_000 {
            let unit = step as f64 / 10_000.0;
            let outcome = engine.draw(tier, unit);
            assert!(tier.payout_table().outcomes().contains(&outcome));
        }
    }
}

#[test]
fn draw_is_deterministic_for_random_units() {
    let engine = PrizeEngine::standard();
    let mut source = SeededSource::from_seed(2024);

    for tier in engine.tiers() {
        for _ in 0..1_000 {
            let unit = sc_prize::RandomSource::next_unit(&mut source);
            assert_eq!(engine.draw(tier, unit), engine.draw(tier, unit));
        }
    }
}

#[test]
fn every_band_midpoint_selects_its_outcome() {
    let engine = PrizeEngine::standard();

    for tier in engine.tiers() {
        for (index, (lower, upper)) in cumulative_bounds(tier).into_iter().enumerate() {
            let mid = (lower + upper) / 2.0;
            assert_eq!(
                tier.payout_table().draw_index(mid),
                index,
                "tier {} unit {}",
                tier.value(),
                mid
            );
        }
    }
}

#[test]
fn unit_just_below_total_yields_last_entry() {
    let engine = PrizeEngine::standard();

    for tier in engine.tiers() {
        let total = tier.payout_table().total_probability();
        let outcome = engine.draw(tier, total - 1e-5);
        assert_eq!(outcome.message, "JACKPOT!");
        assert_eq!(outcome.amount, tier.max_prize());
    }
}

#[test]
fn zero_unit_yields_first_entry() {
    let engine = PrizeEngine::standard();

    for tier in engine.tiers() {
        let outcome = engine.draw(tier, 0.0);
        assert_eq!(outcome.amount, 0.0);
        assert_eq!(outcome.message, "Tente novamente!");
    }
}

#[test]
fn short_table_falls_back_to_last_entry() {
    let tier = PriceTier::new(
        5.0,
        "R$ 5,00",
        vec![
            PrizeOutcome::new(0.0, 0.75, "Tente novamente!"),
            PrizeOutcome::new(5.0, 0.15, "Recuperou o valor!"),
            PrizeOutcome::new(15.0, 0.08, "Triplicou!"),
            PrizeOutcome::new(50.0, 0.019, "Grande prêmio!"),
        ],
    )
    .unwrap();

    let engine = PrizeEngine::standard();
    let outcome = engine.draw(&tier, 0.9995);
    assert_eq!(outcome.amount, 50.0);
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn every_reference_tier_sums_within_epsilon() {
    for tier in TierCatalog::standard().iter() {
        assert!(tier.payout_table().total_probability() <= 1.0 + PROBABILITY_EPSILON);
    }
}

#[test]
fn catalog_with_oversubscribed_table_is_rejected() {
    let json = r#"{
        "tiers": [
            {
                "value": 5,
                "label": "R$ 5,00",
                "payout_table": [
                    { "amount": 0, "probability": 0.9, "message": "Tente novamente!" },
                    { "amount": 5, "probability": 0.2, "message": "Recuperou o valor!" }
                ]
            }
        ]
    }"#;

    match TierCatalog::from_json(json) {
        Err(PrizeError::InvalidConfiguration { tier, .. }) => assert_eq!(tier, "R$ 5,00"),
        other => panic!("expected InvalidConfiguration, got {other:?}"),
    }
}

#[test]
fn catalog_with_zero_probability_is_rejected() {
    let yaml = r#"
tiers:
  - value: 10
    payout_table:
      - { amount: 0, probability: 0.7, message: "Tente novamente!" }
      - { amount: 10, probability: 0.0, message: "Recuperou o valor!" }
"#;
    assert!(matches!(
        TierCatalog::from_yaml(yaml),
        Err(PrizeError::InvalidConfiguration { .. })
    ));
}

#[test]
fn yaml_export_reloads() {
    let catalog = TierCatalog::standard();
    let yaml = catalog.to_yaml().unwrap();
    let loaded = TierCatalog::from_yaml(&yaml).unwrap();

    assert_eq!(loaded.values(), catalog.values());
    let engine = PrizeEngine::new(loaded);
    assert_eq!(engine.draw_for(5.0, 0.80).unwrap().amount, 5.0);
}
