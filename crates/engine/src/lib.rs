//! Opening-bid evaluation for a single bridge hand.
//!
//! A hand is scored with high-card points (A=4, K=3, Q=2, J=1) plus
//! distribution points (void=3, singleton=2, doubleton=1), and the total
//! picks one of six openings: pass, 1NT, or one of a suit.

pub mod bid_selector;
pub mod deal;
pub mod evaluation;
pub mod points;
pub mod rules;

pub use bid_selector::{longest_suit, BidSelector, BidTrace, SelectionInput, SelectionStep};
pub use deal::{random_encoded_hand, random_hand};
pub use evaluation::Evaluation;
pub use points::PointCount;
pub use rules::{OpeningRules, RulesError};

use types::io::hand_parser::split_tokens;
use types::{Bid, Hand, InvalidHandError};

/// Receives a hand in the two-character-per-card encoding
/// (e.g. `"ADQS4C3DJH9S3CQD3S7S5HKHJD"`) and returns the opening bid text.
///
/// Never fails: malformed slots are scored leniently, see [`evaluate`].
pub fn get_opening_bid(encoded: &str) -> String {
    bid(encoded).to_string()
}

pub fn bid(encoded: &str) -> Bid {
    evaluate(encoded).bid
}

/// Evaluates an encoded hand without validating it.
///
/// Unrecognized rank characters score no points, unrecognized suit
/// characters are counted as clubs, and a trailing odd character is ignored.
pub fn evaluate(encoded: &str) -> Evaluation {
    evaluate_with_rules(encoded, &OpeningRules::default())
}

pub fn evaluate_with_rules(encoded: &str, rules: &OpeningRules) -> Evaluation {
    log::debug!("evaluating {encoded}");
    Evaluation::from_tokens(split_tokens(encoded), rules)
}

/// Evaluates an encoded hand after checking it is exactly 13 distinct,
/// well-formed cards.
pub fn evaluate_strict(encoded: &str) -> Result<Evaluation, InvalidHandError> {
    evaluate_strict_with_rules(encoded, &OpeningRules::default())
}

pub fn evaluate_strict_with_rules(
    encoded: &str,
    rules: &OpeningRules,
) -> Result<Evaluation, InvalidHandError> {
    let hand = Hand::parse(encoded).inspect_err(|e| log::debug!("rejected {encoded}: {e}"))?;
    // Keep the caller's spelling of each card, `T` or `0` for ten.
    Ok(Evaluation {
        cards: split_tokens(encoded),
        ..Evaluation::from_hand(&hand, rules)
    })
}

pub fn bid_strict(encoded: &str) -> Result<Bid, InvalidHandError> {
    evaluate_strict(encoded).map(|e| e.bid)
}
