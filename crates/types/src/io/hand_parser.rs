use crate::card::{Card, CardToken};
use crate::error::InvalidHandError;
use crate::hand::{Hand, HAND_SIZE};
use std::collections::HashSet;

/// Characters per encoded card: one for the rank, one for the suit.
pub const TOKEN_WIDTH: usize = 2;

/// Length of a well-formed encoded hand.
pub const ENCODED_LEN: usize = HAND_SIZE * TOKEN_WIDTH;

/// Splits an encoded hand such as `"7CJH9H5H7S2DJS5C8C4DJD6H2H"` into its
/// two-character card slots, in input order.
///
/// Nothing is validated: the characters of each slot are kept as they were.
/// A dangling final character that does not fill a slot is dropped.
pub fn split_tokens(s: &str) -> Vec<CardToken> {
    let chars: Vec<char> = s.chars().collect();
    chars
        .chunks_exact(TOKEN_WIDTH)
        .map(|slot| CardToken::new(slot[0], slot[1]))
        .collect()
}

/// Parses an encoded hand into a validated [`Hand`].
///
/// Fails on a length other than 26 characters, on a rank or suit character
/// that is not a card token, and on a card that appears twice.
pub fn parse_hand(s: &str) -> Result<Hand, InvalidHandError> {
    let actual = s.chars().count();
    if actual != ENCODED_LEN {
        return Err(InvalidHandError::WrongLength {
            expected: ENCODED_LEN,
            actual,
        });
    }

    let mut seen = HashSet::with_capacity(HAND_SIZE);
    let mut cards = Vec::with_capacity(HAND_SIZE);
    for (slot, token) in split_tokens(s).into_iter().enumerate() {
        let card = parse_token(slot, token)?;
        if !seen.insert(card) {
            return Err(InvalidHandError::DuplicateCard { slot, card });
        }
        cards.push(card);
    }
    Ok(Hand::new(cards))
}

fn parse_token(slot: usize, token: CardToken) -> Result<Card, InvalidHandError> {
    let rank = token.rank().ok_or(InvalidHandError::InvalidRank {
        slot,
        token: token.rank,
    })?;
    let suit = token.suit().ok_or(InvalidHandError::InvalidSuit {
        slot,
        token: token.suit,
    })?;
    Ok(Card::new(suit, rank))
}

/// Writes a hand back out in the two-character-per-card encoding, with `0`
/// standing in for ten.
pub fn encode_hand(hand: &Hand) -> String {
    let mut encoded = String::with_capacity(hand.len() * TOKEN_WIDTH);
    for card in &hand.cards {
        encoded.push(card.rank.to_char());
        encoded.push(card.suit.to_char());
    }
    encoded
}
