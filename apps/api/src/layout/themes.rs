use serde::Serialize;

pub const DEFAULT_ACCENT_COLOR: &str = "hsl(168, 60%, 40%)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColor {
    pub name: &'static str,
    pub hsl: &'static str,
}

pub const THEME_COLORS: &[ThemeColor] = &[
    ThemeColor {
        name: "Teal",
        hsl: DEFAULT_ACCENT_COLOR,
    },
    ThemeColor {
        name: "Navy",
        hsl: "hsl(220, 60%, 35%)",
    },
    ThemeColor {
        name: "Burgundy",
        hsl: "hsl(345, 60%, 35%)",
    },
    ThemeColor {
        name: "Forest",
        hsl: "hsl(150, 50%, 30%)",
    },
    ThemeColor {
        name: "Charcoal",
        hsl: "hsl(0, 0%, 25%)",
    },
];

/// Blank accents fall back to `fallback`; anything else is passed through.
pub fn resolve_accent(requested: Option<&str>, fallback: &str) -> String {
    match requested.map(str::trim) {
        Some(accent) if !accent.is_empty() => accent.to_string(),
        _ => fallback.to_string(),
    }
}
