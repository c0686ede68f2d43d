//! Property sweeps over random batches and thresholds.
//!
//! Run with: cargo test --package tokenfilter-ranker --test scoring_properties

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokenfilter_common::{AssetRecord, ScoreThresholds};
use tokenfilter_ranker::{score, score_record, PointRule};
use tokenfilter_test_utils::{random_records, sample_records};

fn random_thresholds(rng: &mut StdRng) -> ScoreThresholds {
    ScoreThresholds {
        t5x: rng.gen_range(0.0..20.0),
        t10x: rng.gen_range(0.0..20.0),
        t50pct: rng.gen_range(0.0..3.0),
        t100pct: rng.gen_range(0.0..3.0),
        t200pct: rng.gen_range(0.0..3.0),
    }
}

#[test]
fn test_sample_batch_order() {
    let scored = score(&sample_records(), &ScoreThresholds::default()).unwrap();
    let names: Vec<&str> = scored.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["DOGE", "USDT", "USDC", "ADA", "SOL", "BTC", "ETH", "BNB", "XRP", "TON"]
    );
    let totals: Vec<u8> = scored.iter().map(|s| s.total_points).collect();
    assert_eq!(totals, vec![4, 2, 2, 2, 1, 0, 0, 0, 0, 0]);
}

#[test]
fn test_points_match_their_conditions() {
    let mut rng = StdRng::seed_from_u64(7);
    for seed in 0..20 {
        let thresholds = random_thresholds(&mut rng);
        for record in random_records(seed, 50) {
            let s = score_record(&record, &thresholds).unwrap();
            let mcap = s.market_cap_usd;

            let expected = [
                mcap != 0.0 && s.volume_usd > thresholds.t5x * mcap / 10.0,
                s.volume_usd > thresholds.t10x * mcap,
                s.volume_coin > thresholds.t50pct * mcap,
                s.volume_coin > thresholds.t100pct * mcap,
                s.volume_coin > thresholds.t200pct * mcap,
            ];
            let expected: Vec<u8> = expected.iter().map(|&b| u8::from(b)).collect();

            assert_eq!(s.points.as_array().to_vec(), expected, "record {:?}", record);
            assert!(s.points.as_array().iter().all(|&p| p <= 1));
            assert!(s.total_points <= 5);
            assert_eq!(s.total_points, s.points.as_array().iter().sum::<u8>());
        }
    }
}

#[test]
fn test_output_sorted_and_stable() {
    let mut rng = StdRng::seed_from_u64(11);
    for seed in 100..130 {
        let records = random_records(seed, 40);
        let thresholds = random_thresholds(&mut rng);
        let scored = score(&records, &thresholds).unwrap();

        assert_eq!(scored.len(), records.len());
        for pair in scored.windows(2) {
            assert!(pair[0].total_points >= pair[1].total_points);
        }

        // equal totals keep input order
        let position = |name: &str| records.iter().position(|r| r.name == name).unwrap();
        for pair in scored.windows(2) {
            if pair[0].total_points == pair[1].total_points {
                assert!(position(&pair[0].name) < position(&pair[1].name));
            }
        }
    }
}

#[test]
fn test_idempotent() {
    let records = random_records(42, 30);
    let thresholds = ScoreThresholds::default();
    let first = score(&records, &thresholds).unwrap();
    let second = score(&records, &thresholds).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_raising_a_threshold_never_adds_points() {
    let records = random_records(3, 60);
    let base = ScoreThresholds::default();

    for rule in PointRule::ALL {
        for bump in [0.1, 1.0, 5.0] {
            let mut raised = base;
            match rule {
                PointRule::Volume5x => raised.t5x += bump,
                PointRule::Volume10x => raised.t10x += bump,
                PointRule::Volume50Pct => raised.t50pct += bump,
                PointRule::Volume100Pct => raised.t100pct += bump,
                PointRule::Volume200Pct => raised.t200pct += bump,
            }
            for record in &records {
                let before = score_record(record, &base).unwrap().points.get(rule);
                let after = score_record(record, &raised).unwrap().points.get(rule);
                assert!(after <= before, "{:?} increased for {}", rule, record.name);
            }
        }
    }
}

#[test]
fn test_documented_scenarios() {
    let t = ScoreThresholds::default();

    let s = score_record(&AssetRecord::new("S1", 100.0, 60.0, 40.0), &t).unwrap();
    assert_eq!((s.points.as_array(), s.total_points), ([1, 0, 0, 0, 0], 1));

    let s = score_record(&AssetRecord::new("S2", 100.0, 1200.0, 250.0), &t).unwrap();
    assert_eq!((s.points.as_array(), s.total_points), ([1, 1, 1, 1, 1], 5));

    let s = score_record(&AssetRecord::new("S5", 0.0, 1.0, 0.0), &t).unwrap();
    assert_eq!(s.points.volume_5x_points, 0);

    assert!(score(&[], &t).unwrap().is_empty());
}
