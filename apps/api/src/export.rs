//! Plain-text export. Uses the same filters and fallbacks as the layouts so
//! the text and the visual render never disagree on derived fields.

use crate::layout::view::{
    contact_parts, display_name, renders_education, renders_experience, renders_project,
    skill_groups,
};
use crate::models::resume::{non_blank, ResumeDocument};

pub fn to_plain_text(doc: &ResumeDocument) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(display_name(&doc.personal_info).to_uppercase());

    let contact = contact_parts(&doc.personal_info).join(" | ");
    if !contact.is_empty() {
        sections.push(contact);
    }

    if let Some(summary) = non_blank(&doc.summary) {
        sections.push("\nSUMMARY".to_string());
        sections.push(summary.trim().to_string());
    }

    let education: Vec<_> = doc.education.iter().filter(|e| renders_education(e)).collect();
    if !education.is_empty() {
        sections.push("\nEDUCATION".to_string());
        for e in education {
            sections.push(format!(
                "{}, {} ({})",
                e.qualification_or_degree(),
                e.institution_or_school(),
                e.years()
            ));
        }
    }

    let experience: Vec<_> = doc.experience.iter().filter(|e| renders_experience(e)).collect();
    if !experience.is_empty() {
        sections.push("\nEXPERIENCE".to_string());
        for e in experience {
            sections.push(format!(
                "{}, {} ({})\n{}",
                e.role, e.company, e.period, e.description
            ));
        }
    }

    let projects: Vec<_> = doc.projects.iter().filter(|p| renders_project(p)).collect();
    if !projects.is_empty() {
        sections.push("\nPROJECTS".to_string());
        for p in projects {
            let mut entry = p.name.clone();
            if !p.tech_stack.is_empty() {
                entry.push_str(&format!(" [{}]", p.tech_stack.join(", ")));
            }
            entry.push('\n');
            entry.push_str(&p.description);
            if let Some(url) = non_blank(&p.live_url) {
                entry.push_str(&format!("\nLive: {url}"));
            }
            if let Some(url) = non_blank(&p.github_url) {
                entry.push_str(&format!("\nGitHub: {url}"));
            }
            sections.push(entry);
        }
    }

    let skills: Vec<String> = skill_groups(&doc.skills)
        .into_iter()
        .map(|g| format!("{}: {}", g.label, g.items.join(", ")))
        .collect();
    if !skills.is_empty() {
        sections.push("\nSKILLS".to_string());
        sections.push(skills.join("\n"));
    }

    let mut links = Vec::new();
    if let Some(github) = non_blank(&doc.links.github) {
        links.push(format!("GitHub: {github}"));
    }
    if let Some(linkedin) = non_blank(&doc.links.linkedin) {
        links.push(format!("LinkedIn: {linkedin}"));
    }
    if !links.is_empty() {
        sections.push("\nLINKS".to_string());
        sections.push(links.join("\n"));
    }

    sections.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry};

    #[test]
    fn test_default_document_exports_placeholder_name() {
        assert_eq!(to_plain_text(&ResumeDocument::default()), "YOUR NAME");
    }

    #[test]
    fn test_full_export_layout() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.name = "Alex Johnson".to_string();
        doc.personal_info.email = "alex@example.com".to_string();
        doc.personal_info.location = "Bengaluru".to_string();
        doc.summary = "  Backend engineer.  ".to_string();
        doc.education = vec![EducationEntry {
            school: "IIT Bombay".to_string(),
            degree: "B.Tech".to_string(),
            start_year: "2017".to_string(),
            end_year: "2021".to_string(),
            ..Default::default()
        }];
        doc.experience = vec![
            ExperienceEntry {
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                period: "2021 - Present".to_string(),
                description: "• Built APIs".to_string(),
            },
            ExperienceEntry::default(),
        ];
        doc.projects = vec![ProjectEntry {
            name: "Resume Builder".to_string(),
            description: "Generator".to_string(),
            tech_stack: vec!["Rust".to_string(), "Axum".to_string()],
            live_url: "https://demo".to_string(),
            github_url: String::new(),
        }];
        doc.skills.technical = vec!["Rust".to_string()];
        doc.skills.tools = vec!["Git".to_string()];
        doc.links.linkedin = "linkedin.com/in/alex".to_string();

        let expected = "ALEX JOHNSON\n\
            Bengaluru | alex@example.com\n\
            \nSUMMARY\n\
            Backend engineer.\n\
            \nEDUCATION\n\
            B.Tech, IIT Bombay (2017 - 2021)\n\
            \nEXPERIENCE\n\
            Engineer, Acme (2021 - Present)\n\
            • Built APIs\n\
            \nPROJECTS\n\
            Resume Builder [Rust, Axum]\n\
            Generator\n\
            Live: https://demo\n\
            \nSKILLS\n\
            Technical: Rust\n\
            Tools: Git\n\
            \nLINKS\n\
            LinkedIn: linkedin.com/in/alex";
        assert_eq!(to_plain_text(&doc), expected);
    }

    #[test]
    fn test_export_matches_layout_education_fallbacks() {
        let mut doc = ResumeDocument::default();
        doc.education = vec![EducationEntry {
            institution: "New U".to_string(),
            school: "Old U".to_string(),
            qualification: "M.Sc".to_string(),
            degree: "B.Sc".to_string(),
            year: "2020".to_string(),
            ..Default::default()
        }];
        assert!(to_plain_text(&doc).contains("M.Sc, New U (2020)"));
    }
}
