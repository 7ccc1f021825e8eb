//! Education title resolution shared by every layout and the text export.

use serde::Serialize;

use crate::models::resume::{non_blank, EducationEntry, EducationLevel};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EducationTitle {
    pub title: String,
    pub subtitle: String,
}

/// Derives the (title, subtitle) pair from level, qualification and
/// specialization. Qualification reads through the legacy `degree` fallback.
pub fn resolve_title(entry: &EducationEntry) -> EducationTitle {
    let qualification = non_blank(entry.qualification_or_degree()).map(str::to_string);
    let specialization = non_blank(&entry.specialization).map(|s| s.trim().to_string());
    let board = non_blank(&entry.board_or_university).map(|s| s.trim().to_string());

    let (title, subtitle) = match entry.level() {
        EducationLevel::SecondarySchool => (
            qualification.unwrap_or_else(|| EducationLevel::SecondarySchool.as_str().to_string()),
            board,
        ),
        EducationLevel::HigherSecondary => (
            qualification.unwrap_or_else(|| EducationLevel::HigherSecondary.as_str().to_string()),
            specialization,
        ),
        EducationLevel::Diploma => (
            qualification.unwrap_or_else(|| EducationLevel::Diploma.as_str().to_string()),
            specialization,
        ),
        EducationLevel::Undergraduate | EducationLevel::Postgraduate => {
            let title = match (qualification, specialization) {
                (Some(q), Some(s)) => format!("{q} in {s}"),
                (Some(q), None) => q,
                (None, Some(s)) => s,
                (None, None) => String::new(),
            };
            (title, None)
        }
        EducationLevel::Unspecified | EducationLevel::Other => {
            (qualification.unwrap_or_default(), specialization)
        }
    };

    EducationTitle {
        title,
        subtitle: subtitle.unwrap_or_default(),
    }
}
