//! Point counting: high-card points from honors, distribution points from
//! short suits.
use serde::{Deserialize, Serialize};
use types::{CardToken, Hand, Suit, SuitCounts};

/// Highest possible high-card count: all four aces, kings, queens and jacks.
pub const MAX_HCP: u32 = 40;

/// Highest possible distribution count: four voids, which no 13-card hand can
/// actually hold.
pub const MAX_DISTRIBUTION_POINTS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointCount {
    pub high_card_points: u32,
    pub distribution_points: u32,
}

impl PointCount {
    pub fn new(high_card_points: u32, distribution_points: u32) -> Self {
        Self {
            high_card_points,
            distribution_points,
        }
    }

    /// Counts a validated hand.
    pub fn of_hand(hand: &Hand) -> Self {
        Self::new(hand.hcp(), distribution_points(&hand.suit_counts()))
    }

    pub fn total(&self) -> u32 {
        self.high_card_points + self.distribution_points
    }
}

pub fn high_card_points(tokens: &[CardToken]) -> u32 {
    tokens.iter().map(|t| t.hcp()).sum()
}

/// Suit tabulation over raw slots; unknown suit markers count as clubs.
pub fn tally_tokens(tokens: &[CardToken]) -> SuitCounts {
    SuitCounts::tally(tokens.iter().map(|t| t.suit_bucket()))
}

/// Void = 3, singleton = 2, doubleton = 1.
pub fn shortness_points(length: u32) -> u32 {
    match length {
        0 => 3,
        1 => 2,
        2 => 1,
        _ => 0,
    }
}

pub fn distribution_points(counts: &SuitCounts) -> u32 {
    Suit::ALL
        .iter()
        .map(|&suit| shortness_points(counts.length(suit)))
        .sum()
}
