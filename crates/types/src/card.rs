use crate::rank::Rank;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The 52-card deck, suit-major (S, H, D, C) and rank-minor (2 up to A).
    pub fn deck() -> Vec<Card> {
        let mut deck = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.push(Card::new(suit, rank));
            }
        }
        deck
    }

    pub fn token(self) -> CardToken {
        CardToken {
            rank: self.rank.to_char(),
            suit: self.suit.to_char(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

/// One two-character slot of an encoded hand, exactly as it appeared in the
/// input. Nothing about it is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardToken {
    pub rank: char,
    pub suit: char,
}

impl CardToken {
    pub fn new(rank: char, suit: char) -> Self {
        Self { rank, suit }
    }

    /// The rank, if the rank character is exactly one of the rank tokens
    /// (`2`-`9`, `T` or `0`, `J`, `Q`, `K`, `A`).
    pub fn rank(self) -> Option<Rank> {
        if self.rank.is_ascii_lowercase() {
            return None;
        }
        Rank::from_char(self.rank)
    }

    /// The suit, if the suit character is exactly `S`, `H`, `D` or `C`.
    pub fn suit(self) -> Option<Suit> {
        if self.suit.is_ascii_lowercase() {
            return None;
        }
        Suit::from_char(self.suit)
    }

    /// High-card points under the legacy count, which only recognizes the
    /// exact honor markers; everything else scores zero.
    pub fn hcp(self) -> u32 {
        match self.rank {
            'A' => 4,
            'K' => 3,
            'Q' => 2,
            'J' => 1,
            _ => 0,
        }
    }

    /// Suit bucket under the legacy tabulation rules.
    pub fn suit_bucket(self) -> Suit {
        Suit::from_char_or_clubs(self.suit)
    }

    /// Strict conversion; `None` if either character is not a valid token.
    pub fn to_card(self) -> Option<Card> {
        Some(Card::new(self.suit()?, self.rank()?))
    }
}

impl From<Card> for CardToken {
    fn from(card: Card) -> Self {
        card.token()
    }
}

impl fmt::Display for CardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deck_is_complete() {
        let deck = Card::deck();
        assert_eq!(deck.len(), 52);
        let unique: HashSet<_> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 52);
        assert_eq!(deck[0], Card::new(Suit::Spades, Rank::Two));
        assert_eq!(deck[51], Card::new(Suit::Clubs, Rank::Ace));
    }

    #[test]
    fn test_card_display_uses_zero_for_ten() {
        assert_eq!(Card::new(Suit::Diamonds, Rank::Ten).to_string(), "0D");
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "AS");
    }

    #[test]
    fn test_token_conversion() {
        assert_eq!(
            CardToken::new('Q', 'H').to_card(),
            Some(Card::new(Suit::Hearts, Rank::Queen))
        );
        assert_eq!(CardToken::new('1', 'H').to_card(), None);
        assert_eq!(CardToken::new('Q', 'X').to_card(), None);
        assert_eq!(CardToken::new('q', 'H').to_card(), None);
        assert_eq!(CardToken::new('Q', 'h').to_card(), None);
    }

    #[test]
    fn test_malformed_token_scoring() {
        let token = CardToken::new('X', 'Z');
        assert_eq!(token.hcp(), 0);
        assert_eq!(token.suit_bucket(), Suit::Clubs);
        assert_eq!(CardToken::new('A', 'Z').hcp(), 4);
        assert_eq!(CardToken::new('a', 'S').hcp(), 0);
    }
}
