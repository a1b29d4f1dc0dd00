use engine::{BidTrace, Evaluation};
use serde::Serialize;
use types::{CardToken, Suit};

/// One line per suit, spades first, highest rank first (e.g. `S: AQ43`).
/// Slots with an unreadable rank are listed after the real cards.
pub fn get_hand_suits(cards: &[CardToken]) -> Vec<String> {
    let mut suits = Vec::new();
    for suit in Suit::ALL {
        let mut holding: Vec<&CardToken> =
            cards.iter().filter(|c| c.suit_bucket() == suit).collect();
        holding.sort_by(|a, b| b.rank().cmp(&a.rank()));
        let ranks: String = holding.iter().map(|c| c.rank).collect();
        suits.push(format!(
            "{}: {}",
            suit.to_char(),
            if ranks.is_empty() { "-" } else { &ranks }
        ));
    }
    suits
}

pub fn format_row(idx: usize, hand: &str, hcp: u32, dist: u32, total: u32, bid: &str) -> String {
    format!(
        "{:<3} | {:<26} | {:>3} | {:>4} | {:>5} | {}",
        idx, hand, hcp, dist, total, bid
    )
}

pub fn format_table_header() -> String {
    let mut out = format!(
        "{:<3} | {:<26} | {:>3} | {:>4} | {:>5} | Bid\n",
        "Idx", "Hand", "HCP", "Dist", "Total"
    );
    out.push_str(&format!(
        "{:-<3}-+-{:-<26}-+-{:-<3}-+-{:-<4}-+-{:-<5}-+-----------\n",
        "", "", "", "", ""
    ));
    out
}

pub fn format_evaluation_row(idx: usize, eval: &Evaluation) -> String {
    format_row(
        idx,
        &eval.encoded(),
        eval.high_card_points,
        eval.distribution_points,
        eval.total_points(),
        &eval.bid.to_string(),
    )
}

pub fn format_full_trace(idx: usize, eval: &Evaluation, trace: &BidTrace) -> String {
    let mut out = format!("\nFull Trace for Hand {}:\n", idx);
    out.push_str("=======================\n");
    for line in get_hand_suits(&eval.cards) {
        out.push_str(&format!("  {}\n", line));
    }
    out.push_str(&format!(
        "\n  HCP: {}  Distribution: {}  Total: {}  Shape: {}\n",
        trace.input.points.high_card_points,
        trace.input.points.distribution_points,
        trace.input.points.total(),
        trace.input.suit_counts,
    ));

    out.push_str("\nSelection Process:\n");
    for step in &trace.selection_steps {
        let status = if step.satisfied { "MATCHED" } else { "FAILED " };
        out.push_str(&format!(
            "[{}] {:<4} {} ({})\n",
            status,
            step.bid.render(),
            step.rule_name,
            step.description
        ));
    }
    out.push_str(&format!("\nSelected: {}\n", trace.selected_bid));
    out.push_str("=======================\n");
    out
}

/// JSON shape for `--json`: the evaluation plus its total.
#[derive(Serialize)]
pub struct EvaluationReport<'a> {
    #[serde(flatten)]
    pub evaluation: &'a Evaluation,
    pub total_points: u32,
}

impl<'a> From<&'a Evaluation> for EvaluationReport<'a> {
    fn from(evaluation: &'a Evaluation) -> Self {
        Self {
            evaluation,
            total_points: evaluation.total_points(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::io::hand_parser::split_tokens;

    #[test]
    fn test_get_hand_suits() {
        let suits = get_hand_suits(&split_tokens("4SASJSJC2C9HAD0DQS3S7D5S4D"));
        assert_eq!(
            suits,
            vec!["S: AQJ543", "H: 9", "D: A074", "C: J2"]
        );
    }

    #[test]
    fn test_get_hand_suits_with_void_and_junk() {
        let suits = get_hand_suits(&split_tokens("ASXZ"));
        assert_eq!(suits, vec!["S: A", "H: -", "D: -", "C: X"]);
    }

    #[test]
    fn test_evaluation_row() {
        let eval = engine::evaluate("KH6S8H0HJCKD4HASAD5HQS7H6C");
        let row = format_evaluation_row(1, &eval);
        assert!(row.starts_with("1   | KH6S8H0HJCKD4HASAD5HQS7H6C |"));
        assert!(row.ends_with("| 1 heart"));
        assert!(row.contains("|  17 |"));
    }

    #[test]
    fn test_header_matches_row_width() {
        let header = format_table_header();
        let mut lines = header.lines();
        let title = lines.next().unwrap();
        let rule = lines.next().unwrap();
        let eval = engine::evaluate("7CJH9H5H7S2DJS5C8C4DJD6H2H");
        let row = format_evaluation_row(1, &eval);
        assert_eq!(title.find("| Bid"), row.find("| pass"));
        assert_eq!(rule.find("-+-"), row.find(" | "));
    }

    #[test]
    fn test_full_trace() {
        let eval = engine::evaluate("2D6DJS3S0C6CJDKC4CAS3DQC2S");
        let trace = eval.trace(&Default::default());
        let out = format_full_trace(1, &eval, &trace);
        assert!(out.contains("[MATCHED] 1C"));
        assert!(out.contains("[FAILED ] P"));
        assert!(out.contains("Selected: 1 club"));
        assert!(out.contains("Shape: 4-0-4-5"));
    }

    #[test]
    fn test_report_includes_total() {
        let eval = engine::evaluate("ADQS4C3DJH9S3CQD3S7S5HKHJD");
        let json = serde_json::to_value(EvaluationReport::from(&eval)).unwrap();
        assert_eq!(json["total_points"], 14);
        assert_eq!(json["bid"], "1 notrump");
    }
}
