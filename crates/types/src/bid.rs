use crate::error::ParseBidError;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opening call. Only one-level bids exist in this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Bid {
    Pass,
    NoTrump,
    Suit(Suit),
}

impl Bid {
    pub const ALL: [Bid; 6] = [
        Bid::Pass,
        Bid::NoTrump,
        Bid::Suit(Suit::Spades),
        Bid::Suit(Suit::Hearts),
        Bid::Suit(Suit::Diamonds),
        Bid::Suit(Suit::Clubs),
    ];

    /// Compact call notation: `P`, `1N`, `1S`, `1H`, `1D`, `1C`.
    pub fn render(self) -> String {
        match self {
            Bid::Pass => "P".to_string(),
            Bid::NoTrump => "1N".to_string(),
            Bid::Suit(suit) => format!("1{}", suit.to_char()),
        }
    }

    pub fn suit(self) -> Option<Suit> {
        match self {
            Bid::Suit(suit) => Some(suit),
            _ => None,
        }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bid::Pass => write!(f, "pass"),
            Bid::NoTrump => write!(f, "1 notrump"),
            Bid::Suit(suit) => write!(f, "1 {}", suit.name()),
        }
    }
}

impl FromStr for Bid {
    type Err = ParseBidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "p" | "pass" => return Ok(Bid::Pass),
            "1n" | "1nt" | "1 notrump" => return Ok(Bid::NoTrump),
            _ => {}
        }
        Bid::ALL
            .into_iter()
            .filter_map(|bid| bid.suit().map(|suit| (bid, suit)))
            .find(|(bid, suit)| {
                normalized == bid.to_string()
                    || normalized == format!("1{}", suit.to_char().to_ascii_lowercase())
            })
            .map(|(bid, _)| bid)
            .ok_or_else(|| ParseBidError(s.to_string()))
    }
}

impl From<Bid> for String {
    fn from(bid: Bid) -> Self {
        bid.to_string()
    }
}

impl TryFrom<String> for Bid {
    type Error = ParseBidError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
