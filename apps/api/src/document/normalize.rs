//! Normalizer: reconciles legacy and current persisted shapes into one
//! fully populated [`ResumeDocument`].
//!
//! Total by construction: anything that is not a JSON object degrades to the
//! default document, and every malformed field degrades to its default.
//!
//! # Rules
//! - `skills` given as a comma-delimited string becomes `skills.technical`.
//! - `skills` objects are merged over the default field by field.
//! - Project `techStack` falls back to the legacy singular `link`.
//! - Education entries keep their legacy `school`/`degree` and have blank
//!   `institution`/`qualification` backfilled from them.
//! - Missing or empty entry sequences become one blank placeholder entry.
//! - Non-object entries are kept as blank entries so position is preserved.

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::resume::{
    non_blank, EducationEntry, ExperienceEntry, Links, PersonalInfo, ProjectEntry,
    ResumeDocument, Skills,
};

pub fn normalize(raw: &Value) -> ResumeDocument {
    let Some(obj) = raw.as_object() else {
        debug!("normalize: non-object input, substituting default document");
        return ResumeDocument::default();
    };

    ResumeDocument {
        personal_info: normalize_personal_info(obj.get("personalInfo")),
        summary: text(obj.get("summary")),
        education: normalize_entries(obj.get("education"), normalize_education),
        experience: normalize_entries(obj.get("experience"), normalize_experience),
        projects: normalize_entries(obj.get("projects"), normalize_project),
        skills: normalize_skills(obj.get("skills")),
        links: normalize_links(obj.get("links")),
    }
}

/// Re-runs a typed document through the normalizer.
pub fn renormalize(doc: &ResumeDocument) -> ResumeDocument {
    match serde_json::to_value(doc) {
        Ok(value) => normalize(&value),
        Err(_) => ResumeDocument::default(),
    }
}

/// Coerces a scalar into display text: strings as-is, numbers and booleans
/// stringified, anything else blank.
fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn field(obj: &Map<String, Value>, key: &str) -> String {
    text(obj.get(key))
}

fn split_delimited(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Arrays keep every element (blank ones included); a delimited string is
/// split; anything else is absent.
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    match value {
        Some(Value::Array(items)) => Some(items.iter().map(|v| text(Some(v))).collect()),
        Some(Value::String(s)) => Some(split_delimited(s)),
        _ => None,
    }
}

fn normalize_entries<T: Default>(value: Option<&Value>, map: fn(&Map<String, Value>) -> T) -> Vec<T> {
    match value {
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|item| match item.as_object() {
                Some(obj) => map(obj),
                None => T::default(),
            })
            .collect(),
        _ => vec![T::default()],
    }
}

fn normalize_personal_info(value: Option<&Value>) -> PersonalInfo {
    let Some(obj) = value.and_then(Value::as_object) else {
        return PersonalInfo::default();
    };
    PersonalInfo {
        name: field(obj, "name"),
        email: field(obj, "email"),
        phone: field(obj, "phone"),
        location: field(obj, "location"),
    }
}

fn normalize_links(value: Option<&Value>) -> Links {
    let Some(obj) = value.and_then(Value::as_object) else {
        return Links::default();
    };
    Links {
        github: field(obj, "github"),
        linkedin: field(obj, "linkedin"),
    }
}

fn normalize_skills(value: Option<&Value>) -> Skills {
    match value {
        Some(Value::String(raw)) => Skills {
            technical: split_delimited(raw),
            soft: Vec::new(),
            tools: Vec::new(),
        },
        Some(Value::Object(obj)) => Skills {
            technical: string_list(obj.get("technical")).unwrap_or_default(),
            soft: string_list(obj.get("soft")).unwrap_or_default(),
            tools: string_list(obj.get("tools")).unwrap_or_default(),
        },
        _ => Skills::default(),
    }
}

fn normalize_project(obj: &Map<String, Value>) -> ProjectEntry {
    let tech_stack = match obj.get("techStack") {
        // Absent, null or empty string: derive from the legacy `link`.
        None | Some(Value::Null) => legacy_link_stack(obj),
        Some(Value::String(s)) if s.is_empty() => legacy_link_stack(obj),
        other => string_list(other).unwrap_or_default(),
    };
    ProjectEntry {
        name: field(obj, "name"),
        description: field(obj, "description"),
        tech_stack,
        live_url: field(obj, "liveUrl"),
        github_url: field(obj, "githubUrl"),
    }
}

fn legacy_link_stack(obj: &Map<String, Value>) -> Vec<String> {
    let link = field(obj, "link");
    if link.is_empty() {
        Vec::new()
    } else {
        vec![link]
    }
}

fn normalize_experience(obj: &Map<String, Value>) -> ExperienceEntry {
    ExperienceEntry {
        company: field(obj, "company"),
        role: field(obj, "role"),
        period: field(obj, "period"),
        description: field(obj, "description"),
    }
}

fn normalize_education(obj: &Map<String, Value>) -> EducationEntry {
    let mut entry = EducationEntry {
        level: field(obj, "level"),
        institution: field(obj, "institution"),
        qualification: field(obj, "qualification"),
        specialization: field(obj, "specialization"),
        board_or_university: field(obj, "boardOrUniversity"),
        start_year: field(obj, "startYear"),
        end_year: field(obj, "endYear"),
        year: field(obj, "year"),
        grade_type: field(obj, "gradeType"),
        grade_value: field(obj, "gradeValue"),
        location: field(obj, "location"),
        school: field(obj, "school"),
        degree: field(obj, "degree"),
    };
    alias_legacy_fields(&mut entry);
    entry
}

/// Current-shape fields win; legacy values only fill blanks. The legacy
/// fields themselves are left in place for older readers.
fn alias_legacy_fields(entry: &mut EducationEntry) {
    if non_blank(&entry.institution).is_none() && non_blank(&entry.school).is_some() {
        entry.institution = entry.school.clone();
    }
    if non_blank(&entry.qualification).is_none() && non_blank(&entry.degree).is_some() {
        entry.qualification = entry.degree.clone();
    }
}
