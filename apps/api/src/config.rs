use anyhow::{Context, Result};

use crate::layout::themes::DEFAULT_ACCENT_COLOR;
use crate::layout::Layout;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Layout used by `POST /api/v1/resume/render`.
    pub default_layout: Layout,
    pub default_accent_color: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            default_layout: match optional_env("DEFAULT_LAYOUT") {
                Some(name) => name
                    .parse::<Layout>()
                    .context("DEFAULT_LAYOUT must be Classic, Modern or Minimal")?,
                None => Layout::Modern,
            },
            default_accent_color: optional_env("DEFAULT_ACCENT_COLOR")
                .unwrap_or_else(|| DEFAULT_ACCENT_COLOR.to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            default_layout: Layout::Modern,
            default_accent_color: DEFAULT_ACCENT_COLOR.to_string(),
        }
    }
}

/// Unset and blank variables are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
