use serde::{Deserialize, Serialize};

/// Returns `Some(value)` when the value has visible content.
pub fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl PersonalInfo {
    pub fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "phone" => Some(&mut self.phone),
            "location" => Some(&mut self.location),
            _ => None,
        }
    }
}

/// Parsed view of `EducationEntry::level`; the wire value stays a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    Unspecified,
    SecondarySchool,
    HigherSecondary,
    Diploma,
    Undergraduate,
    Postgraduate,
    Other,
}

impl EducationLevel {
    /// Unknown labels fall through to `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" => EducationLevel::Unspecified,
            "Secondary School Education" => EducationLevel::SecondarySchool,
            "Higher Secondary Education" => EducationLevel::HigherSecondary,
            "Diploma" => EducationLevel::Diploma,
            "Undergraduate" => EducationLevel::Undergraduate,
            "Postgraduate" => EducationLevel::Postgraduate,
            _ => EducationLevel::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Unspecified => "",
            EducationLevel::SecondarySchool => "Secondary School Education",
            EducationLevel::HigherSecondary => "Higher Secondary Education",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Postgraduate => "Postgraduate",
            EducationLevel::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeType {
    Unset,
    Cgpa,
    Percentage,
}

impl GradeType {
    /// Any non-blank label other than `CGPA` reads as a percentage.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" => GradeType::Unset,
            "CGPA" => GradeType::Cgpa,
            _ => GradeType::Percentage,
        }
    }
}

/// Education entry in its current shape, still carrying the legacy
/// `school`/`degree` fields so older documents stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub level: String,
    pub institution: String,
    pub qualification: String,
    pub specialization: String,
    pub board_or_university: String,
    pub start_year: String,
    pub end_year: String,
    pub year: String,
    pub grade_type: String,
    pub grade_value: String,
    pub location: String,
    pub school: String,
    pub degree: String,
}

impl EducationEntry {
    pub fn level(&self) -> EducationLevel {
        EducationLevel::parse(&self.level)
    }

    pub fn grade_type(&self) -> GradeType {
        GradeType::parse(&self.grade_type)
    }

    pub fn institution_or_school(&self) -> &str {
        non_blank(&self.institution)
            .or_else(|| non_blank(&self.school))
            .unwrap_or("")
            .trim()
    }

    pub fn qualification_or_degree(&self) -> &str {
        non_blank(&self.qualification)
            .or_else(|| non_blank(&self.degree))
            .unwrap_or("")
            .trim()
    }

    /// `year` wins; otherwise `start - end`, otherwise whichever bound exists.
    pub fn years(&self) -> String {
        if let Some(year) = non_blank(&self.year) {
            return year.trim().to_string();
        }
        match (non_blank(&self.start_year), non_blank(&self.end_year)) {
            (Some(start), Some(end)) => format!("{} - {}", start.trim(), end.trim()),
            (Some(start), None) => start.trim().to_string(),
            (None, Some(end)) => end.trim().to_string(),
            (None, None) => String::new(),
        }
    }

    /// `CGPA: 8.5` / `Percentage: 91%`, only when both type and value are set.
    pub fn grade_line(&self) -> Option<String> {
        let value = non_blank(&self.grade_value)?.trim();
        match self.grade_type() {
            GradeType::Unset => None,
            GradeType::Cgpa => Some(format!("CGPA: {value}")),
            GradeType::Percentage => Some(format!("Percentage: {value}")),
        }
    }

    pub fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "level" => Some(&mut self.level),
            "institution" => Some(&mut self.institution),
            "qualification" => Some(&mut self.qualification),
            "specialization" => Some(&mut self.specialization),
            "boardOrUniversity" => Some(&mut self.board_or_university),
            "startYear" => Some(&mut self.start_year),
            "endYear" => Some(&mut self.end_year),
            "year" => Some(&mut self.year),
            "gradeType" => Some(&mut self.grade_type),
            "gradeValue" => Some(&mut self.grade_value),
            "location" => Some(&mut self.location),
            "school" => Some(&mut self.school),
            "degree" => Some(&mut self.degree),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    /// Freeform text; lines starting with `•` are bullets.
    pub description: String,
}

impl ExperienceEntry {
    pub fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "company" => Some(&mut self.company),
            "role" => Some(&mut self.role),
            "period" => Some(&mut self.period),
            "description" => Some(&mut self.description),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

impl ProjectEntry {
    pub fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "name" => Some(&mut self.name),
            "description" => Some(&mut self.description),
            "liveUrl" => Some(&mut self.live_url),
            "githubUrl" => Some(&mut self.github_url),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Tools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Tools => "Tools",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

impl Skills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Tools => &self.tools,
        }
    }

    pub fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    pub fn iter_all(&self) -> impl Iterator<Item = &String> {
        self.technical
            .iter()
            .chain(self.soft.iter())
            .chain(self.tools.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
}

impl Links {
    pub fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "github" => Some(&mut self.github),
            "linkedin" => Some(&mut self.linkedin),
            _ => None,
        }
    }
}

/// The fully populated resume every scorer and layout consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Skills,
    pub links: Links,
}

impl Default for ResumeDocument {
    /// One blank placeholder entry per sequence.
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            education: vec![EducationEntry::default()],
            experience: vec![ExperienceEntry::default()],
            projects: vec![ProjectEntry::default()],
            skills: Skills::default(),
            links: Links::default(),
        }
    }
}
