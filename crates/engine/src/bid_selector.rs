use crate::points::PointCount;
use crate::rules::OpeningRules;
use serde::{Deserialize, Serialize};
use types::{Bid, Suit, SuitCounts};

/// What the selector looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInput {
    pub points: PointCount,
    pub suit_counts: SuitCounts,
}

/// A detailed trace of the opening decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidTrace {
    pub input: SelectionInput,
    /// Every rule consulted, in order, up to and including the one that fired
    pub selection_steps: Vec<SelectionStep>,
    pub selected_bid: Bid,
}

impl BidTrace {
    /// The step that produced the selected bid.
    pub fn deciding_step(&self) -> Option<&SelectionStep> {
        self.selection_steps.iter().find(|s| s.satisfied)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStep {
    pub rule_name: String,
    pub description: String,
    pub bid: Bid,
    pub satisfied: bool,
}

/// One row of the decision table. Rules are consulted in priority order and
/// the first that applies wins.
trait OpeningRule {
    fn name(&self) -> String;
    fn description(&self, rules: &OpeningRules) -> String;
    fn bid(&self) -> Bid;
    fn applies(&self, rules: &OpeningRules, input: &SelectionInput) -> bool;
}

struct BelowOpeningStrength;

impl OpeningRule for BelowOpeningStrength {
    fn name(&self) -> String {
        "Pass (Below Opening Strength)".to_string()
    }

    fn description(&self, rules: &OpeningRules) -> String {
        format!("fewer than {} total points", rules.opening_threshold)
    }

    fn bid(&self) -> Bid {
        Bid::Pass
    }

    fn applies(&self, rules: &OpeningRules, input: &SelectionInput) -> bool {
        input.points.total() < rules.opening_threshold
    }
}

struct BalancedNoTrump;

impl OpeningRule for BalancedNoTrump {
    fn name(&self) -> String {
        "1NT Opening (Balanced)".to_string()
    }

    fn description(&self, rules: &OpeningRules) -> String {
        format!(
            "at most {} distribution point{}",
            rules.balanced_max_distribution,
            if rules.balanced_max_distribution == 1 { "" } else { "s" }
        )
    }

    fn bid(&self) -> Bid {
        Bid::NoTrump
    }

    fn applies(&self, rules: &OpeningRules, input: &SelectionInput) -> bool {
        input.points.distribution_points <= rules.balanced_max_distribution
    }
}

/// Open the suit when it is the longest, ties going to the higher-priority
/// suit.
struct LongestSuit(Suit);

impl OpeningRule for LongestSuit {
    fn name(&self) -> String {
        format!("1{} Opening (Longest Suit)", self.0.to_char())
    }

    fn description(&self, _rules: &OpeningRules) -> String {
        match lower_priority_suits(self.0) {
            [] => format!("no suit longer than {}s", self.0.name()),
            lower => {
                let names: Vec<_> = lower.iter().map(|s| format!("{}s", s.name())).collect();
                format!("{}s at least as long as {}", self.0.name(), names.join(" and "))
            }
        }
    }

    fn bid(&self) -> Bid {
        Bid::Suit(self.0)
    }

    fn applies(&self, _rules: &OpeningRules, input: &SelectionInput) -> bool {
        longest_suit(&input.suit_counts) == self.0
    }
}

static SUIT_PRIORITY: [Suit; 4] = Suit::ALL;

fn lower_priority_suits(suit: Suit) -> &'static [Suit] {
    &SUIT_PRIORITY[suit.idx() + 1..]
}

const DECISION_TABLE: [&dyn OpeningRule; 6] = [
    &BelowOpeningStrength,
    &BalancedNoTrump,
    &LongestSuit(Suit::Spades),
    &LongestSuit(Suit::Hearts),
    &LongestSuit(Suit::Diamonds),
    &LongestSuit(Suit::Clubs),
];

pub struct BidSelector;

impl BidSelector {
    pub fn select_bid(rules: &OpeningRules, input: &SelectionInput) -> Bid {
        Self::select_bid_with_trace(rules, input).selected_bid
    }

    pub fn select_bid_with_trace(rules: &OpeningRules, input: &SelectionInput) -> BidTrace {
        let mut selection_steps = Vec::new();
        // Never kept: the clubs row always applies.
        let mut selected_bid = Bid::Pass;

        for rule in DECISION_TABLE {
            let satisfied = rule.applies(rules, input);
            log::trace!("{:<36}{}", rule.name(), satisfied);
            selection_steps.push(SelectionStep {
                rule_name: rule.name(),
                description: rule.description(rules),
                bid: rule.bid(),
                satisfied,
            });
            if satisfied {
                selected_bid = rule.bid();
                break;
            }
        }

        log::debug!(
            "total {} (hcp {}, dist {}), shape {} -> {}",
            input.points.total(),
            input.points.high_card_points,
            input.points.distribution_points,
            input.suit_counts,
            selected_bid
        );

        BidTrace {
            input: *input,
            selection_steps,
            selected_bid,
        }
    }
}

/// The longest suit, ties going to the higher-priority suit
/// (spades, hearts, diamonds, clubs).
pub fn longest_suit(counts: &SuitCounts) -> Suit {
    let mut longest = Suit::Spades;
    for suit in Suit::ALL {
        if counts.length(suit) > counts.length(longest) {
            longest = suit;
        }
    }
    longest
}
