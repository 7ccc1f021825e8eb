//! Classic and Minimal: a header followed by stacked sections in one column.
//! Both show the full education detail (board/university and grade lines).

use crate::layout::view::{
    contact_parts, display_name, education_views, experience_views, project_views, skill_groups,
    summary_section, EducationDetail, Section,
};
use crate::layout::{AccentTarget, FontFamily, Header, HeaderAlign, LayoutBody, LayoutStyle};
use crate::models::resume::ResumeDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Serif, centered header, accent on company and institution lines.
    Classic,
    /// Sans, left-aligned header, accent on the name and section headings.
    Minimal,
}

pub fn render(doc: &ResumeDocument, variant: Variant) -> (LayoutStyle, LayoutBody) {
    let style = match variant {
        Variant::Classic => LayoutStyle {
            font: FontFamily::Serif,
            accent_targets: vec![AccentTarget::CompanyLine],
        },
        Variant::Minimal => LayoutStyle {
            font: FontFamily::Sans,
            accent_targets: vec![AccentTarget::Name, AccentTarget::SectionHeading],
        },
    };

    let header = Header {
        name: display_name(&doc.personal_info),
        contact: contact_parts(&doc.personal_info),
        align: match variant {
            Variant::Classic => HeaderAlign::Center,
            Variant::Minimal => HeaderAlign::Left,
        },
    };

    let mut sections = Vec::new();
    sections.extend(summary_section(doc, "Professional Summary"));

    let experience = experience_views(doc);
    if !experience.is_empty() {
        sections.push(Section::Experience {
            heading: "Experience",
            items: experience,
        });
    }

    let projects = project_views(doc);
    if !projects.is_empty() {
        sections.push(Section::Projects {
            heading: "Projects",
            items: projects,
        });
    }

    let groups = skill_groups(&doc.skills);
    if !groups.is_empty() {
        sections.push(Section::Skills {
            heading: "Skills & Expertise",
            groups,
        });
    }

    let education = education_views(doc, EducationDetail::Full);
    if !education.is_empty() {
        sections.push(Section::Education {
            heading: "Education",
            items: education,
        });
    }

    (style, LayoutBody::SingleColumn { header, sections })
}
