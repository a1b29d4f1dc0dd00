use crate::card::Card;
use thiserror::Error;

/// Why an encoded hand was rejected by the strict parser.
///
/// `slot` is the zero-based card position within the encoding, so slot 3
/// covers characters 6 and 7.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidHandError {
    #[error("encoded hand must be {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("card {slot}: '{token}' is not a rank (expected one of 23456789T0JQKA)")]
    InvalidRank { slot: usize, token: char },

    #[error("card {slot}: '{token}' is not a suit (expected one of SHDC)")]
    InvalidSuit { slot: usize, token: char },

    #[error("card {slot}: {card} appears more than once")]
    DuplicateCard { slot: usize, card: Card },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized bid: {0:?}")]
pub struct ParseBidError(pub String);
