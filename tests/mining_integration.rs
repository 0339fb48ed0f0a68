//! End-to-end library tests: loader → encoder → miner → rules
//!
//! Exercises the public API the way the CLI does, against small datasets
//! with hand-checked supports.

use canasta::encoder;
use canasta::loader;
use canasta::mining::{self, Metric};
use canasta::pipeline::{MinerConfig, MinerSession};

const BAKERY: &str = "\
Payment ID;Item
p1;bread
p1;butter
p2;bread
p2;butter
p2;jam
p3;bread
p4;butter
p4;jam
p5;bread
p5;butter
p5;jam
";

#[test]
fn test_loader_feeds_pipeline() {
    let transactions = loader::parse_transactions(BAKERY, ';', "Payment ID", "Item").unwrap();
    assert_eq!(transactions.len(), 5);

    let mut session = MinerSession::new(MinerConfig {
        min_support: 0.4,
        metric: Metric::Confidence,
        metric_threshold: 0.6,
        confidence_threshold: 0.6,
    });
    let results = session.run(&transactions).unwrap();

    // bread=0, butter=1, jam=2; bread in 4/5, butter in 4/5, jam in 3/5
    assert_eq!(results.matrix.n_rows(), 5);
    assert_eq!(results.frequent.support(&[0]), Some(0.8));
    assert_eq!(results.frequent.support(&[1]), Some(0.8));
    assert_eq!(results.frequent.support(&[2]), Some(0.6));
    // bread+butter in p1, p2, p5
    assert_eq!(results.frequent.support(&[0, 1]), Some(0.6));

    // jam → butter holds in all three jam baskets
    let jam_butter = results
        .rules
        .iter()
        .find(|r| r.antecedent == [2] && r.consequent == [1])
        .expect("jam → butter expected");
    assert_eq!(jam_butter.confidence, 1.0);
    assert!(jam_butter.conviction.is_infinite());
}

#[test]
fn test_all_returned_rules_satisfy_both_thresholds() {
    let transactions = loader::parse_transactions(BAKERY, ';', "Payment ID", "Item").unwrap();
    let mut session = MinerSession::new(MinerConfig {
        min_support: 0.2,
        metric: Metric::Lift,
        metric_threshold: 1.05,
        confidence_threshold: 0.5,
    });
    let results = session.run(&transactions).unwrap();
    for rule in &results.rules {
        assert!(rule.lift >= 1.05);
        assert!(rule.confidence >= 0.5);
        assert!(rule.support >= 0.2);
    }
}

#[test]
fn test_spec_example_scenario() {
    // transactions = [{A,B},{A,B,C},{A},{B,C},{A,B,C}], min_support = 0.4
    let transactions: Vec<Vec<String>> = [
        vec!["A", "B"],
        vec!["A", "B", "C"],
        vec!["A"],
        vec!["B", "C"],
        vec!["A", "B", "C"],
    ]
    .into_iter()
    .map(|t| t.into_iter().map(String::from).collect())
    .collect();

    let matrix = encoder::encode(&transactions).unwrap();
    let frequent = mining::mine(&matrix, 0.4).unwrap();
    let expected: &[(&[usize], f64)] = &[
        (&[0], 0.8),
        (&[1], 0.8),
        (&[2], 0.6),
        (&[0, 1], 0.6),
        (&[1, 2], 0.6),
        (&[0, 2], 0.4),
        (&[0, 1, 2], 0.4),
    ];
    assert_eq!(frequent.len(), expected.len());
    for &(itemset, support) in expected {
        assert_eq!(frequent.support(itemset), Some(support), "{itemset:?}");
    }

    let rules = mining::generate_rules(&frequent, Metric::Confidence, 0.6);
    let confidence_of = |a: &[usize], c: &[usize]| {
        rules
            .iter()
            .find(|r| r.antecedent == a && r.consequent == c)
            .map(|r| r.confidence)
    };
    assert_eq!(confidence_of(&[0], &[1]), Some(0.75));
    let c_to_a = confidence_of(&[2], &[0]).expect("{C}→{A} expected");
    assert!((c_to_a - 2.0 / 3.0).abs() < 1e-9);
    let ab_to_c = confidence_of(&[0, 1], &[2]).expect("{A,B}→{C} expected");
    assert!((ab_to_c - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_unsorted_input_items_get_canonical_columns() {
    // Same baskets, items listed in scrambled order per row
    let a: Vec<Vec<String>> = vec![
        vec!["z".into(), "m".into(), "a".into()],
        vec!["m".into(), "a".into()],
    ];
    let b: Vec<Vec<String>> = vec![
        vec!["a".into(), "m".into(), "z".into()],
        vec!["a".into(), "m".into()],
    ];
    let fa = mining::mine(&encoder::encode(&a).unwrap(), 0.5).unwrap();
    let fb = mining::mine(&encoder::encode(&b).unwrap(), 0.5).unwrap();
    assert_eq!(fa, fb);
}
