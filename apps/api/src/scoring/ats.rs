//! ATS readiness scoring: eleven weighted rules evaluated in a fixed order.
//!
//! Each satisfied rule adds its weight; each unsatisfied rule appends one
//! suggestion naming its point value. The weights sum to exactly
//! [`MAX_SCORE`]; the total is still clamped to it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::normalize::renormalize;
use crate::models::resume::{non_blank, ResumeDocument};

pub const MAX_SCORE: u32 = 100;

/// Verbs that count as action language in the summary (whole word, any case).
pub const ATS_ACTION_VERBS: &[&str] = &[
    "built",
    "led",
    "designed",
    "improved",
    "developed",
    "implemented",
    "created",
    "optimized",
    "managed",
    "launched",
    "delivered",
    "increased",
    "reduced",
];

static BULLET_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*[-*•]\s+\S+").expect("valid bullet line regex"));

static ACTION_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", ATS_ACTION_VERBS.join("|")))
        .expect("valid action verb regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsScore {
    pub score: u32,
    pub suggestions: Vec<String>,
}

struct Rule {
    weight: u32,
    missing: &'static str,
    check: fn(&ResumeDocument) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        weight: 10,
        missing: "Add your full name",
        check: |d| non_blank(&d.personal_info.name).is_some(),
    },
    Rule {
        weight: 10,
        missing: "Add your email address",
        check: |d| non_blank(&d.personal_info.email).is_some(),
    },
    Rule {
        weight: 10,
        missing: "Add a professional summary",
        // Length in UTF-16 code units, so astral characters count twice.
        check: |d| d.summary.trim().encode_utf16().count() > 50,
    },
    Rule {
        weight: 15,
        missing: "Add experience with bullet-style achievements",
        check: |d| {
            d.experience
                .iter()
                .any(|e| non_blank(&e.company).is_some() && has_bullet_points(&e.description))
        },
    },
    Rule {
        weight: 10,
        missing: "Add at least one education entry",
        check: |d| d.education.iter().any(|e| !e.institution_or_school().is_empty()),
    },
    Rule {
        weight: 10,
        missing: "Add at least five skills",
        check: |d| d.skills.iter_all().filter(|s| non_blank(s).is_some()).count() >= 5,
    },
    Rule {
        weight: 10,
        missing: "Add at least one project",
        check: |d| d.projects.iter().any(|p| non_blank(&p.name).is_some()),
    },
    Rule {
        weight: 5,
        missing: "Add your phone number",
        check: |d| non_blank(&d.personal_info.phone).is_some(),
    },
    Rule {
        weight: 5,
        missing: "Add your LinkedIn profile",
        check: |d| non_blank(&d.links.linkedin).is_some(),
    },
    Rule {
        weight: 5,
        missing: "Add your GitHub profile",
        check: |d| non_blank(&d.links.github).is_some(),
    },
    Rule {
        weight: 10,
        missing: "Use action verbs in your summary",
        check: |d| summary_has_action_verb(&d.summary),
    },
];

/// A description reads as bullet-formatted when some line starts with a
/// `-`, `*` or `•` marker, or when it spans at least two non-blank lines.
pub fn has_bullet_points(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    if BULLET_LINE_RE.is_match(trimmed) {
        return true;
    }
    trimmed.lines().filter(|l| !l.trim().is_empty()).count() >= 2
}

pub fn summary_has_action_verb(summary: &str) -> bool {
    ACTION_VERB_RE.is_match(summary)
}

pub fn score(doc: &ResumeDocument) -> AtsScore {
    let doc = renormalize(doc);
    let mut total = 0;
    let mut suggestions = Vec::new();

    for rule in RULES {
        if (rule.check)(&doc) {
            total += rule.weight;
        } else {
            suggestions.push(format!("{} (+{} points)", rule.missing, rule.weight));
        }
    }

    AtsScore {
        score: total.min(MAX_SCORE),
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry};

    fn complete_document() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.personal_info.name = "Alex".to_string();
        doc.personal_info.email = "a@b.com".to_string();
        doc.personal_info.phone = "555-0100".to_string();
        doc.summary = "Built distributed systems and data tooling for fintech teams.".to_string();
        doc.experience = vec![ExperienceEntry {
            company: "Acme".to_string(),
            description: "• did X\n• did Y".to_string(),
            ..Default::default()
        }];
        doc.education = vec![EducationEntry {
            institution: "MIT".to_string(),
            ..Default::default()
        }];
        doc.skills.technical = ["Rust", "Go", "SQL"].map(String::from).to_vec();
        doc.skills.tools = ["Git", "Docker"].map(String::from).to_vec();
        doc.projects = vec![ProjectEntry {
            name: "X".to_string(),
            ..Default::default()
        }];
        doc.links.linkedin = "linkedin.com/in/alex".to_string();
        doc.links.github = "github.com/alex".to_string();
        doc
    }

    #[test]
    fn test_empty_document_scores_zero() {
        let result = score(&ResumeDocument::default());
        assert_eq!(result.score, 0);
        assert_eq!(
            result.suggestions,
            vec![
                "Add your full name (+10 points)",
                "Add your email address (+10 points)",
                "Add a professional summary (+10 points)",
                "Add experience with bullet-style achievements (+15 points)",
                "Add at least one education entry (+10 points)",
                "Add at least five skills (+10 points)",
                "Add at least one project (+10 points)",
                "Add your phone number (+5 points)",
                "Add your LinkedIn profile (+5 points)",
                "Add your GitHub profile (+5 points)",
                "Use action verbs in your summary (+10 points)",
            ]
        );
    }

    #[test]
    fn test_complete_document_scores_max() {
        let doc = complete_document();
        assert!(doc.summary.len() > 50);
        let result = score(&doc);
        assert_eq!(result.score, 100);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_weights_sum_to_max_score() {
        assert_eq!(RULES.iter().map(|r| r.weight).sum::<u32>(), MAX_SCORE);
    }

    #[test]
    fn test_score_is_deterministic() {
        let doc = complete_document();
        assert_eq!(score(&doc), score(&doc.clone()));
    }

    #[test]
    fn test_each_rule_is_monotonic() {
        let satisfy: [fn(&mut ResumeDocument); 11] = [
            |d| d.personal_info.name = "Alex".to_string(),
            |d| d.personal_info.email = "a@b.com".to_string(),
            |d| d.summary = "x".repeat(51),
            |d| {
                d.experience[0].company = "Acme".to_string();
                d.experience[0].description = "• shipped".to_string();
            },
            |d| d.education[0].institution = "MIT".to_string(),
            |d| d.skills.technical = ["a", "b", "c", "d", "e"].map(String::from).to_vec(),
            |d| d.projects[0].name = "X".to_string(),
            |d| d.personal_info.phone = "555-0100".to_string(),
            |d| d.links.linkedin = "linkedin.com/in/alex".to_string(),
            |d| d.links.github = "github.com/alex".to_string(),
            |d| d.summary = "Led teams".to_string(),
        ];
        assert_eq!(satisfy.len(), RULES.len());

        let before = score(&ResumeDocument::default());
        for (rule, mutate) in RULES.iter().zip(satisfy) {
            let mut doc = ResumeDocument::default();
            mutate(&mut doc);
            let after = score(&doc);
            let suggestion = format!("{} (+{} points)", rule.missing, rule.weight);

            assert_eq!(after.score, before.score + rule.weight, "{suggestion}");
            let mut expected = before.suggestions.clone();
            expected.retain(|s| s != &suggestion);
            assert_eq!(after.suggestions, expected);
        }
    }

    #[test]
    fn test_experience_requires_company_and_bullets() {
        let mut doc = ResumeDocument::default();
        doc.experience[0].description = "• shipped".to_string();
        assert_eq!(score(&doc).score, 0);

        doc.experience[0].company = "Acme".to_string();
        assert_eq!(score(&doc).score, 15);

        doc.experience[0].description = "one line only".to_string();
        assert_eq!(score(&doc).score, 0);
    }

    #[test]
    fn test_bullet_heuristic() {
        assert!(has_bullet_points("- item"));
        assert!(has_bullet_points("* item"));
        assert!(has_bullet_points("• item"));
        assert!(has_bullet_points("first\nsecond"));
        assert!(!has_bullet_points("first\n\n"));
        assert!(!has_bullet_points("-item"));
        assert!(!has_bullet_points("   "));
    }

    #[test]
    fn test_legacy_school_counts_as_education() {
        let mut doc = ResumeDocument::default();
        doc.education[0].school = "Old U".to_string();
        assert_eq!(score(&doc).score, 10);
    }

    #[test]
    fn test_blank_skills_not_counted() {
        let mut doc = ResumeDocument::default();
        doc.skills.technical = ["a", "b", "c", "d", " "].map(String::from).to_vec();
        assert_eq!(score(&doc).score, 0);
        doc.skills.soft.push("e".to_string());
        assert_eq!(score(&doc).score, 10);
    }

    #[test]
    fn test_action_verb_whole_word_case_insensitive() {
        assert!(summary_has_action_verb("I LED the platform team"));
        assert!(summary_has_action_verb("Designed, built and shipped."));
        assert!(!summary_has_action_verb("Rebuilding legacy systems"));
        assert!(!summary_has_action_verb("misled nobody"));
    }

    #[test]
    fn test_summary_length_counts_utf16_units() {
        let mut doc = ResumeDocument::default();
        doc.summary = "🚀".repeat(25);
        assert_eq!(score(&doc).score, 0);
        doc.summary = "🚀".repeat(26);
        assert_eq!(score(&doc).score, 10);
    }

    #[test]
    fn test_summary_length_threshold() {
        let mut doc = ResumeDocument::default();
        doc.summary = "x".repeat(50);
        assert_eq!(score(&doc).score, 0);
        doc.summary = "x".repeat(51);
        assert_eq!(score(&doc).score, 10);
    }

    #[test]
    fn test_empty_sequences_score_without_panicking() {
        let mut doc = ResumeDocument::default();
        doc.education.clear();
        doc.experience.clear();
        doc.projects.clear();
        assert_eq!(score(&doc).score, 0);
    }
}
