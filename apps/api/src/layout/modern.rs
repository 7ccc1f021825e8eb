//! Modern: an accent-colored sidebar (identity, contact, skills, links) beside
//! a main column (summary, experience, projects, education). Education stays
//! terse here: no board/university or grade lines.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::layout::view::{
    contact_parts, display_name, education_views, experience_views, project_views, skill_groups,
    summary_section, EducationDetail, Section,
};
use crate::layout::{AccentTarget, FontFamily, LayoutBody, LayoutStyle, Sidebar};
use crate::models::resume::{non_blank, ResumeDocument};

static URL_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://").expect("valid url scheme regex"));

pub fn render(doc: &ResumeDocument) -> (LayoutStyle, LayoutBody) {
    let style = LayoutStyle {
        font: FontFamily::Sans,
        accent_targets: vec![
            AccentTarget::SidebarBackground,
            AccentTarget::SectionRule,
            AccentTarget::EntryTitle,
        ],
    };

    let links = [&doc.links.github, &doc.links.linkedin]
        .into_iter()
        .filter_map(|l| non_blank(l))
        .map(|l| strip_scheme(l.trim()))
        .collect();

    let sidebar = Sidebar {
        name: display_name(&doc.personal_info),
        contact: contact_parts(&doc.personal_info),
        skills_heading: "Expertise",
        skills: skill_groups(&doc.skills),
        links_heading: "Connections",
        links,
    };

    let mut main = Vec::new();
    main.extend(summary_section(doc, "Summary"));

    let experience = experience_views(doc);
    if !experience.is_empty() {
        main.push(Section::Experience {
            heading: "Experience",
            items: experience,
        });
    }

    let projects = project_views(doc);
    if !projects.is_empty() {
        main.push(Section::Projects {
            heading: "Selected Projects",
            items: projects,
        });
    }

    let education = education_views(doc, EducationDetail::Terse);
    if !education.is_empty() {
        main.push(Section::Education {
            heading: "Education",
            items: education,
        });
    }

    (style, LayoutBody::Sidebar { sidebar, main })
}

/// Drops the first `http://` or `https://` occurrence.
fn strip_scheme(url: &str) -> String {
    URL_SCHEME_RE.replace(url, "").into_owned()
}
