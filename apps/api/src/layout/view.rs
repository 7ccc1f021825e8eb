//! Presentation structures shared by all layouts, and the filtering and
//! derivation rules every layout (and the text export) must agree on.

use serde::Serialize;

use crate::layout::bullets::{format_description, Block};
use crate::layout::education::resolve_title;
use crate::models::resume::{
    non_blank, EducationEntry, EducationLevel, ExperienceEntry, PersonalInfo, ProjectEntry,
    ResumeDocument, SkillCategory, Skills,
};

pub const NAME_PLACEHOLDER: &str = "YOUR NAME";
pub const ROLE_PLACEHOLDER: &str = "Title";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceView {
    pub role: String,
    pub period: String,
    pub company: String,
    pub description: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub name: String,
    pub tech_stack: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationView {
    pub heading: String,
    pub subheading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub years: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub label: &'static str,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Summary {
        heading: &'static str,
        text: String,
    },
    Experience {
        heading: &'static str,
        items: Vec<ExperienceView>,
    },
    Projects {
        heading: &'static str,
        items: Vec<ProjectView>,
    },
    Skills {
        heading: &'static str,
        groups: Vec<SkillGroup>,
    },
    Education {
        heading: &'static str,
        items: Vec<EducationView>,
    },
}

/// How much per-entry education detail a layout shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationDetail {
    /// Title, institution and years only.
    Terse,
    /// Adds the board/university line and the grade line.
    Full,
}

pub fn renders_experience(entry: &ExperienceEntry) -> bool {
    non_blank(&entry.company).is_some()
}

pub fn renders_project(entry: &ProjectEntry) -> bool {
    non_blank(&entry.name).is_some()
}

pub fn renders_education(entry: &EducationEntry) -> bool {
    !entry.institution_or_school().is_empty()
}

pub fn display_name(info: &PersonalInfo) -> String {
    non_blank(&info.name)
        .map(|n| n.trim().to_string())
        .unwrap_or_else(|| NAME_PLACEHOLDER.to_string())
}

/// Location, phone and email, in that order, skipping blanks.
pub fn contact_parts(info: &PersonalInfo) -> Vec<String> {
    [&info.location, &info.phone, &info.email]
        .into_iter()
        .filter_map(|s| non_blank(s))
        .map(|s| s.trim().to_string())
        .collect()
}

pub fn summary_section(doc: &ResumeDocument, heading: &'static str) -> Option<Section> {
    non_blank(&doc.summary).map(|s| Section::Summary {
        heading,
        text: s.trim().to_string(),
    })
}

pub fn experience_views(doc: &ResumeDocument) -> Vec<ExperienceView> {
    doc.experience
        .iter()
        .filter(|e| renders_experience(e))
        .map(|e| ExperienceView {
            role: non_blank(&e.role)
                .map(|r| r.trim().to_string())
                .unwrap_or_else(|| ROLE_PLACEHOLDER.to_string()),
            period: e.period.trim().to_string(),
            company: e.company.trim().to_string(),
            description: format_description(&e.description),
        })
        .collect()
}

pub fn project_views(doc: &ResumeDocument) -> Vec<ProjectView> {
    doc.projects
        .iter()
        .filter(|p| renders_project(p))
        .map(|p| ProjectView {
            name: p.name.trim().to_string(),
            tech_stack: p
                .tech_stack
                .iter()
                .filter_map(|t| non_blank(t))
                .map(|t| t.trim().to_string())
                .collect(),
            description: p.description.trim().to_string(),
        })
        .collect()
}

pub fn education_view(entry: &EducationEntry, detail: EducationDetail) -> EducationView {
    let resolved = resolve_title(entry);
    let institution = entry.institution_or_school().to_string();
    let has_title = !resolved.title.is_empty();
    let has_subtitle = !resolved.subtitle.is_empty();

    let (board, grade) = match detail {
        EducationDetail::Terse => (None, None),
        EducationDetail::Full => {
            // Secondary school already shows the board as its subtitle.
            let board = match entry.level() {
                EducationLevel::SecondarySchool => None,
                _ => non_blank(&entry.board_or_university).map(|b| b.trim().to_string()),
            };
            (board, entry.grade_line())
        }
    };

    EducationView {
        heading: if has_title {
            resolved.title.clone()
        } else {
            institution.clone()
        },
        subheading: if has_title {
            institution
        } else {
            resolved.subtitle.clone()
        },
        detail: (has_title && has_subtitle).then(|| resolved.subtitle),
        board,
        grade,
        years: entry.years(),
    }
}

pub fn education_views(doc: &ResumeDocument, detail: EducationDetail) -> Vec<EducationView> {
    doc.education
        .iter()
        .filter(|e| renders_education(e))
        .map(|e| education_view(e, detail))
        .collect()
}

/// Non-empty skill categories with blank items dropped.
pub fn skill_groups(skills: &Skills) -> Vec<SkillGroup> {
    SkillCategory::ALL
        .iter()
        .filter_map(|&category| {
            let items: Vec<String> = skills
                .get(category)
                .iter()
                .filter_map(|s| non_blank(s))
                .map(|s| s.trim().to_string())
                .collect();
            (!items.is_empty()).then(|| SkillGroup {
                category,
                label: category.label(),
                items,
            })
        })
        .collect()
}
