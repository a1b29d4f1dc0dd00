use rand::seq::SliceRandom;
use rand::Rng;
use types::hand::HAND_SIZE;
use types::{Card, Hand};

/// Deals 13 cards from a freshly shuffled deck.
///
/// The generator is passed in so callers choose between a seeded
/// `StdRng` for reproducible runs and `thread_rng` for ad-hoc ones.
pub fn random_hand(rng: &mut impl Rng) -> Hand {
    let mut deck = Card::deck();
    deck.shuffle(rng);
    deck.truncate(HAND_SIZE);
    Hand::new(deck)
}

pub fn random_encoded_hand(rng: &mut impl Rng) -> String {
    random_hand(rng).to_encoded()
}
