use crate::card::Card;
use crate::suit_counts::SuitCounts;
use serde::{Deserialize, Serialize};

pub const HAND_SIZE: usize = 13;

/// A validated hand: cards are kept in the order they were dealt or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse a 26-character encoded hand, rejecting anything malformed.
    pub fn parse(s: &str) -> Result<Self, crate::error::InvalidHandError> {
        crate::io::hand_parser::parse_hand(s)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn hcp(&self) -> u32 {
        self.cards.iter().map(|c| c.rank.hcp()).sum()
    }

    pub fn suit_counts(&self) -> SuitCounts {
        SuitCounts::tally(self.cards.iter().map(|c| c.suit))
    }

    pub fn to_encoded(&self) -> String {
        crate::io::hand_parser::encode_hand(self)
    }
}
