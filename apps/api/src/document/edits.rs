//! Document edits. Every edit takes the current document by value and
//! returns the next one; invalid targets leave the document unchanged.

use serde::Deserialize;
use tracing::debug;

use crate::document::sample::sample_document;
use crate::models::resume::{
    EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument, SkillCategory,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntrySection {
    Education,
    Experience,
    Projects,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EditOp {
    /// `section` is `personalInfo`, `links`, `summary`, or an entry section
    /// (which requires `index`). `field` uses the wire name.
    SetField {
        section: String,
        #[serde(default)]
        field: String,
        value: String,
        #[serde(default)]
        index: Option<usize>,
    },
    AddEntry {
        section: EntrySection,
    },
    RemoveEntry {
        section: EntrySection,
        index: usize,
    },
    AddSkill {
        category: SkillCategory,
        value: String,
    },
    RemoveSkill {
        category: SkillCategory,
        value: String,
    },
    SetTechStack {
        index: usize,
        tech_stack: Vec<String>,
    },
    SuggestSkills,
    LoadSample,
    Reset,
}

const SUGGESTED_TECHNICAL: &[&str] = &["TypeScript", "React", "Node.js", "PostgreSQL", "GraphQL"];
const SUGGESTED_SOFT: &[&str] = &["Team Leadership", "Problem Solving"];
const SUGGESTED_TOOLS: &[&str] = &["Git", "Docker", "AWS"];

impl EditOp {
    /// Wire tag of the operation, without its payload.
    pub fn kind(&self) -> &'static str {
        match self {
            EditOp::SetField { .. } => "setField",
            EditOp::AddEntry { .. } => "addEntry",
            EditOp::RemoveEntry { .. } => "removeEntry",
            EditOp::AddSkill { .. } => "addSkill",
            EditOp::RemoveSkill { .. } => "removeSkill",
            EditOp::SetTechStack { .. } => "setTechStack",
            EditOp::SuggestSkills => "suggestSkills",
            EditOp::LoadSample => "loadSample",
            EditOp::Reset => "reset",
        }
    }
}

pub fn apply_edit(mut doc: ResumeDocument, op: &EditOp) -> ResumeDocument {
    match op {
        EditOp::SetField {
            section,
            field,
            value,
            index,
        } => {
            if let Some(slot) = field_slot(&mut doc, section, field, *index) {
                *slot = value.clone();
            } else {
                debug!(%section, %field, ?index, "set_field: no such field");
            }
        }
        EditOp::AddEntry { section } => match section {
            EntrySection::Education => doc.education.push(EducationEntry::default()),
            EntrySection::Experience => doc.experience.push(ExperienceEntry::default()),
            EntrySection::Projects => doc.projects.push(ProjectEntry::default()),
        },
        EditOp::RemoveEntry { section, index } => match section {
            EntrySection::Education => remove_at(&mut doc.education, *index),
            EntrySection::Experience => remove_at(&mut doc.experience, *index),
            EntrySection::Projects => remove_at(&mut doc.projects, *index),
        },
        EditOp::AddSkill { category, value } => {
            let value = value.trim();
            let list = doc.skills.get_mut(*category);
            if !value.is_empty() && !list.iter().any(|s| s == value) {
                list.push(value.to_string());
            }
        }
        EditOp::RemoveSkill { category, value } => {
            doc.skills.get_mut(*category).retain(|s| s != value);
        }
        EditOp::SetTechStack { index, tech_stack } => {
            if let Some(project) = doc.projects.get_mut(*index) {
                project.tech_stack = tech_stack.clone();
            }
        }
        EditOp::SuggestSkills => {
            merge_unique(&mut doc.skills.technical, SUGGESTED_TECHNICAL);
            merge_unique(&mut doc.skills.soft, SUGGESTED_SOFT);
            merge_unique(&mut doc.skills.tools, SUGGESTED_TOOLS);
        }
        EditOp::LoadSample => doc = sample_document(),
        EditOp::Reset => doc = ResumeDocument::default(),
    }
    doc
}

fn field_slot<'a>(
    doc: &'a mut ResumeDocument,
    section: &str,
    field: &str,
    index: Option<usize>,
) -> Option<&'a mut String> {
    match (section, index) {
        ("summary", None) => Some(&mut doc.summary),
        ("personalInfo", None) => doc.personal_info.field_mut(field),
        ("links", None) => doc.links.field_mut(field),
        ("education", Some(i)) => doc.education.get_mut(i)?.field_mut(field),
        ("experience", Some(i)) => doc.experience.get_mut(i)?.field_mut(field),
        ("projects", Some(i)) => doc.projects.get_mut(i)?.field_mut(field),
        _ => None,
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

/// Appends `additions`, then drops repeats keeping first occurrences.
fn merge_unique(list: &mut Vec<String>, additions: &[&str]) {
    let mut merged: Vec<String> = Vec::with_capacity(list.len() + additions.len());
    for item in list.drain(..).chain(additions.iter().map(|s| s.to_string())) {
        if !merged.contains(&item) {
            merged.push(item);
        }
    }
    *list = merged;
}
