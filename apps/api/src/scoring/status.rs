use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    NeedsWork,
    GettingThere,
    Strong,
}

/// Display status for a readiness score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreStatus {
    pub tier: ScoreTier,
    pub label: &'static str,
    pub color: &'static str,
}

pub fn score_status(score: u32) -> ScoreStatus {
    let tier = match score {
        0..=40 => ScoreTier::NeedsWork,
        41..=70 => ScoreTier::GettingThere,
        _ => ScoreTier::Strong,
    };
    let (label, color) = match tier {
        ScoreTier::NeedsWork => ("Needs Work", "#dc2626"),
        ScoreTier::GettingThere => ("Getting There", "#d97706"),
        ScoreTier::Strong => ("Strong Resume", "#16a34a"),
    };
    ScoreStatus { tier, label, color }
}
