use engine::{evaluate, evaluate_strict, get_opening_bid};
use serde::Deserialize;
use std::fs;
use types::Bid;

#[derive(Debug, Deserialize)]
struct TestVector {
    name: String,
    hand: String,
    hcp: u32,
    dist: u32,
    shape: String,
    bid: Bid,
}

fn load_vectors() -> Vec<TestVector> {
    let yaml_content = fs::read_to_string("../../tests/opening/documented_hands.yaml")
        .expect("Failed to read test vectors");
    serde_yaml::from_str(&yaml_content).expect("Failed to parse test vectors")
}

#[test]
fn test_documented_hands() {
    let vectors = load_vectors();
    assert_eq!(vectors.len(), 8);

    for vector in vectors {
        let eval = evaluate_strict(&vector.hand)
            .unwrap_or_else(|e| panic!("{}: {}", vector.name, e));
        assert_eq!(eval.high_card_points, vector.hcp, "HCP mismatch for {}", vector.name);
        assert_eq!(
            eval.distribution_points, vector.dist,
            "Distribution mismatch for {}",
            vector.name
        );
        assert_eq!(
            eval.suit_counts.to_string(),
            vector.shape,
            "Shape mismatch for {}",
            vector.name
        );
        assert_eq!(eval.bid, vector.bid, "Bid mismatch for {}", vector.name);
        assert_eq!(get_opening_bid(&vector.hand), vector.bid.to_string());
    }
}

#[test]
fn test_documented_hands_lenient_matches_strict() {
    for vector in load_vectors() {
        let strict = evaluate_strict(&vector.hand).unwrap();
        assert_eq!(evaluate(&vector.hand), strict, "{}", vector.name);
    }
}

#[test]
fn test_documented_hands_traces() {
    for vector in load_vectors() {
        let eval = evaluate(&vector.hand);
        let trace = eval.trace(&Default::default());
        let deciding = trace
            .deciding_step()
            .unwrap_or_else(|| panic!("{}: no rule fired", vector.name));
        assert_eq!(deciding.bid, vector.bid, "{}", vector.name);
        assert_eq!(trace.selection_steps.last(), Some(deciding));
    }
}
