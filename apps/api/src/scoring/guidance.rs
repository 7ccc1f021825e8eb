//! Inline guidance for a single bullet or description: does it open with an
//! action verb, and does it carry a measurable number.

use serde::Serialize;

pub const GUIDANCE_ACTION_VERBS: &[&str] = &[
    "Built",
    "Developed",
    "Designed",
    "Implemented",
    "Led",
    "Improved",
    "Created",
    "Optimized",
    "Automated",
];

const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '~', '(',
    ')', '-',
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletGuidance {
    pub starts_with_action_verb: bool,
    pub has_metric: bool,
    pub hints: Vec<String>,
}

pub fn review_bullet(text: &str) -> BulletGuidance {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return BulletGuidance {
            starts_with_action_verb: false,
            has_metric: false,
            hints: vec![],
        };
    }

    let first_word: String = trimmed
        .split(' ')
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect();
    let starts_with_action_verb = GUIDANCE_ACTION_VERBS
        .iter()
        .any(|v| v.eq_ignore_ascii_case(&first_word));
    let has_metric = trimmed.chars().any(|c| c.is_ascii_digit());

    let mut hints = Vec::new();
    if !starts_with_action_verb {
        hints.push("Start with a strong action verb (e.g. Led, Built, Optimized).".to_string());
    }
    if !has_metric {
        hints.push("Add measurable impact (numbers, %, metrics).".to_string());
    }

    BulletGuidance {
        starts_with_action_verb,
        has_metric,
        hints,
    }
}
