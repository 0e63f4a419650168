//! Plain-text rendering of a bracket report: one line per set, grouped under round headers.

use crate::models::{BracketReport, SetReport};

const HEADER_WIDTH: usize = 38;

/// `---------------SEMI FINAL---------------` style header.
pub fn round_header(label: &str) -> String {
    let pad = HEADER_WIDTH.saturating_sub(label.len());
    let left = pad / 2;
    format!("{}{}{}", "-".repeat(left), label, "-".repeat(pad - left))
}

/// `P1(2) VS P2(1) | Winner: P1`
pub fn set_line(set: &SetReport) -> String {
    format!(
        "{}({}) VS {}({}) | Winner: {}",
        set.competitor_a, set.score_a, set.competitor_b, set.score_b, set.winner
    )
}

pub fn render_text(report: &BracketReport) -> String {
    let mut out = String::new();
    for round in &report.rounds {
        out.push_str(&round_header(&round.label.to_string()));
        out.push('\n');
        for set in &round.sets {
            out.push_str(&set_line(set));
            out.push('\n');
        }
    }
    if let Some(champion) = &report.champion {
        out.push_str(&format!("Champion: {}\n", champion));
    }
    out
}
