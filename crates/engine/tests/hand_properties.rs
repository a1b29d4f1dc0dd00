use engine::points::{distribution_points, MAX_DISTRIBUTION_POINTS, MAX_HCP};
use engine::{evaluate, evaluate_strict, random_encoded_hand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use types::{Bid, Hand, Suit};

const SAMPLES: usize = 2_000;

fn sample_hands(seed: u64) -> impl Iterator<Item = String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES).map(move |_| random_encoded_hand(&mut rng))
}

#[test]
fn test_suit_counts_sum_to_thirteen() {
    for encoded in sample_hands(1) {
        let eval = evaluate(&encoded);
        assert_eq!(eval.suit_counts.total(), 13, "{encoded}");
    }
}

#[test]
fn test_point_ranges() {
    for encoded in sample_hands(2) {
        let eval = evaluate(&encoded);
        assert!(eval.high_card_points <= MAX_HCP, "{encoded}");
        assert!(eval.distribution_points <= MAX_DISTRIBUTION_POINTS, "{encoded}");

        let hand = Hand::parse(&encoded).unwrap();
        let per_card: u32 = hand.cards.iter().map(|c| c.rank.hcp()).sum();
        assert_eq!(eval.high_card_points, per_card, "{encoded}");
        assert_eq!(
            eval.distribution_points,
            distribution_points(&eval.suit_counts),
            "{encoded}"
        );
    }
}

#[test]
fn test_evaluation_is_idempotent() {
    for encoded in sample_hands(3).take(200) {
        assert_eq!(evaluate(&encoded), evaluate(&encoded));
        assert_eq!(evaluate_strict(&encoded), evaluate_strict(&encoded));
    }
}

#[test]
fn test_bid_follows_decision_table() {
    for encoded in sample_hands(4) {
        let eval = evaluate(&encoded);
        let total = eval.total_points();
        match eval.bid {
            Bid::Pass => assert!(total < 14, "{encoded}"),
            Bid::NoTrump => {
                assert!(total >= 14, "{encoded}");
                assert!(eval.distribution_points <= 1, "{encoded}");
            }
            Bid::Suit(suit) => {
                assert!(total >= 14, "{encoded}");
                assert!(eval.distribution_points >= 2, "{encoded}");
                let counts = eval.suit_counts;
                for other in Suit::ALL {
                    if other.idx() < suit.idx() {
                        assert!(counts.length(other) < counts.length(suit), "{encoded}");
                    } else {
                        assert!(counts.length(other) <= counts.length(suit), "{encoded}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_threshold_boundary() {
    // 11 HCP + 2 distribution points
    assert_eq!(evaluate("QD4S3H6D4HKS8C7SACQH7H2H0S").total_points(), 13);
    assert_eq!(evaluate("QD4S3H6D4HKS8C7SACQH7H2H0S").bid, Bid::Pass);
    // 11 HCP + 3 distribution points
    let eval = evaluate("2D6DJS3S0C6CJDKC4CAS3DQC2S");
    assert_eq!(eval.total_points(), 14);
    assert!(eval.distribution_points >= 2);
    assert!(eval.bid.suit().is_some());
}
