use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cards held in each suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SuitCounts {
    pub spades: u32,
    pub hearts: u32,
    pub diamonds: u32,
    pub clubs: u32,
}

impl SuitCounts {
    pub fn new(spades: u32, hearts: u32, diamonds: u32, clubs: u32) -> Self {
        Self {
            spades,
            hearts,
            diamonds,
            clubs,
        }
    }

    /// Buckets each suit once.
    pub fn tally<I>(suits: I) -> Self
    where
        I: IntoIterator<Item = Suit>,
    {
        let mut counts = Self::default();
        for suit in suits {
            counts.increment(suit);
        }
        counts
    }

    pub fn length(&self, suit: Suit) -> u32 {
        match suit {
            Suit::Spades => self.spades,
            Suit::Hearts => self.hearts,
            Suit::Diamonds => self.diamonds,
            Suit::Clubs => self.clubs,
        }
    }

    pub fn increment(&mut self, suit: Suit) {
        match suit {
            Suit::Spades => self.spades += 1,
            Suit::Hearts => self.hearts += 1,
            Suit::Diamonds => self.diamonds += 1,
            Suit::Clubs => self.clubs += 1,
        }
    }

    /// Counts in canonical order: spades, hearts, diamonds, clubs.
    pub fn as_array(&self) -> [u32; 4] {
        [self.spades, self.hearts, self.diamonds, self.clubs]
    }

    pub fn total(&self) -> u32 {
        self.as_array().iter().sum()
    }
}

impl From<[u32; 4]> for SuitCounts {
    fn from(counts: [u32; 4]) -> Self {
        Self::new(counts[0], counts[1], counts[2], counts[3])
    }
}

impl fmt::Display for SuitCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.spades, self.hearts, self.diamonds, self.clubs
        )
    }
}
