use crate::bid_selector::{BidSelector, BidTrace, SelectionInput};
use crate::points::{self, PointCount};
use crate::rules::OpeningRules;
use serde::{Deserialize, Serialize};
use types::{Bid, CardToken, Hand, SuitCounts};

/// Everything computed for one hand on the way to its opening bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub cards: Vec<CardToken>,
    pub high_card_points: u32,
    pub distribution_points: u32,
    pub suit_counts: SuitCounts,
    pub bid: Bid,
}

impl Evaluation {
    /// Evaluates raw card slots with the legacy leniency: unknown ranks score
    /// nothing and unknown suits count as clubs.
    pub fn from_tokens(tokens: Vec<CardToken>, rules: &OpeningRules) -> Self {
        let suit_counts = points::tally_tokens(&tokens);
        let points = PointCount::new(
            points::high_card_points(&tokens),
            points::distribution_points(&suit_counts),
        );
        Self::decide(tokens, points, suit_counts, rules)
    }

    /// Evaluates a validated hand. Tens are recorded as `0`.
    pub fn from_hand(hand: &Hand, rules: &OpeningRules) -> Self {
        let tokens = hand.cards.iter().map(|c| c.token()).collect();
        Self::decide(tokens, PointCount::of_hand(hand), hand.suit_counts(), rules)
    }

    fn decide(
        cards: Vec<CardToken>,
        points: PointCount,
        suit_counts: SuitCounts,
        rules: &OpeningRules,
    ) -> Self {
        let input = SelectionInput {
            points,
            suit_counts,
        };
        Self {
            cards,
            high_card_points: points.high_card_points,
            distribution_points: points.distribution_points,
            suit_counts,
            bid: BidSelector::select_bid(rules, &input),
        }
    }

    pub fn points(&self) -> PointCount {
        PointCount::new(self.high_card_points, self.distribution_points)
    }

    pub fn total_points(&self) -> u32 {
        self.points().total()
    }

    /// Re-runs the decision with a full trace of the rules consulted.
    pub fn trace(&self, rules: &OpeningRules) -> BidTrace {
        BidSelector::select_bid_with_trace(
            rules,
            &SelectionInput {
                points: self.points(),
                suit_counts: self.suit_counts,
            },
        )
    }

    /// The hand in its two-character-per-card encoding.
    pub fn encoded(&self) -> String {
        self.cards.iter().map(|c| c.to_string()).collect()
    }
}
