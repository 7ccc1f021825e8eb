// Layout rendering: one canonical document, three fixed presentations.
// Each strategy is a pure function of the document; bullet formatting and
// education titles come from the shared helpers, never per-layout copies.

pub mod bullets;
pub mod education;
pub mod modern;
pub mod single_column;
pub mod themes;
pub mod view;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::themes::{resolve_accent, DEFAULT_ACCENT_COLOR};
use crate::layout::view::{Section, SkillGroup};
use crate::models::resume::ResumeDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    Classic,
    Modern,
    Minimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layout '{0}' (expected Classic, Modern or Minimal)")]
pub struct UnknownLayout(pub String);

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Classic, Layout::Modern, Layout::Minimal];

    pub fn name(&self) -> &'static str {
        match self {
            Layout::Classic => "Classic",
            Layout::Modern => "Modern",
            Layout::Minimal => "Minimal",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Layout::Classic => "Traditional & Professional",
            Layout::Modern => "Contemporary & Bold",
            Layout::Minimal => "Clean & Spacious",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLayout(s.to_string()))
    }
}

/// Catalog entry describing a layout.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutInfo {
    pub id: Layout,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn layout_catalog() -> Vec<LayoutInfo> {
    Layout::ALL
        .into_iter()
        .map(|id| LayoutInfo {
            id,
            name: id.name(),
            description: id.description(),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Presentation structure
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    Serif,
    Sans,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderAlign {
    Center,
    Left,
}

/// Elements the accent color is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentTarget {
    SidebarBackground,
    SectionRule,
    EntryTitle,
    CompanyLine,
    Name,
    SectionHeading,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStyle {
    pub font: FontFamily,
    pub accent_targets: Vec<AccentTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub name: String,
    pub contact: Vec<String>,
    pub align: HeaderAlign,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar {
    pub name: String,
    pub contact: Vec<String>,
    pub skills_heading: &'static str,
    pub skills: Vec<SkillGroup>,
    pub links_heading: &'static str,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "arrangement", rename_all = "snake_case")]
pub enum LayoutBody {
    SingleColumn { header: Header, sections: Vec<Section> },
    Sidebar { sidebar: Sidebar, main: Vec<Section> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResume {
    pub layout: Layout,
    pub accent_color: String,
    pub style: LayoutStyle,
    pub body: LayoutBody,
}

/// Renders `doc` with `layout`. A blank accent falls back to the default.
pub fn render(doc: &ResumeDocument, layout: Layout, accent_color: &str) -> RenderedResume {
    let accent_color = resolve_accent(Some(accent_color), DEFAULT_ACCENT_COLOR);
    let (style, body) = match layout {
        Layout::Classic => single_column::render(doc, single_column::Variant::Classic),
        Layout::Minimal => single_column::render(doc, single_column::Variant::Minimal),
        Layout::Modern => modern::render(doc),
    };
    RenderedResume {
        layout,
        accent_color,
        style,
        body,
    }
}
