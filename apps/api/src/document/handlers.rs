//! Axum route handlers for the Resume API. Every handler is stateless: the
//! caller sends the whole current document and gets fresh derived values.

use axum::{extract::Path, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::document::{apply_edit, normalize, renormalize, sample_document, EditOp};
use crate::errors::AppError;
use crate::export::to_plain_text;
use crate::layout::themes::{resolve_accent, ThemeColor, THEME_COLORS};
use crate::layout::{layout_catalog, render, Layout, LayoutInfo, RenderedResume};
use crate::models::resume::ResumeDocument;
use crate::scoring::{review_bullet, score, score_status, BulletGuidance, ScoreStatus};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: u32,
    pub suggestions: Vec<String>,
    pub status: ScoreStatus,
}

impl ScoreResponse {
    fn for_document(doc: &ResumeDocument) -> Self {
        let result = score(doc);
        let status = score_status(result.score);
        Self {
            score: result.score,
            suggestions: result.suggestions,
            status,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    #[serde(default)]
    pub document: Value,
    #[serde(default)]
    pub accent_color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextExportResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    #[serde(default)]
    pub document: Value,
    pub edit: EditOp,
}

#[derive(Debug, Serialize)]
pub struct EditResponse {
    pub document: ResumeDocument,
    pub score: ScoreResponse,
}

#[derive(Debug, Deserialize)]
pub struct GuidanceRequest {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/normalize
pub async fn handle_normalize(Json(raw): Json<Value>) -> Json<ResumeDocument> {
    Json(normalize(&raw))
}

/// POST /api/v1/resume/score
pub async fn handle_score(Json(raw): Json<Value>) -> Json<ScoreResponse> {
    Json(ScoreResponse::for_document(&normalize(&raw)))
}

/// POST /api/v1/resume/render/:layout
pub async fn handle_render(
    State(state): State<AppState>,
    Path(layout): Path<String>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderedResume>, AppError> {
    let layout = layout.parse::<Layout>().map_err(|e| {
        debug!(%layout, "render: unknown layout");
        AppError::Validation(e.to_string())
    })?;
    let accent = resolve_accent(req.accent_color.as_deref(), &state.config.default_accent_color);
    let doc = normalize(&req.document);
    Ok(Json(render(&doc, layout, &accent)))
}

/// POST /api/v1/resume/render
/// Renders with the configured default layout.
pub async fn handle_render_default(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Json<RenderedResume> {
    let accent = resolve_accent(req.accent_color.as_deref(), &state.config.default_accent_color);
    let doc = normalize(&req.document);
    Json(render(&doc, state.config.default_layout, &accent))
}

/// POST /api/v1/resume/export/text
pub async fn handle_export_text(Json(raw): Json<Value>) -> Json<TextExportResponse> {
    Json(TextExportResponse {
        text: to_plain_text(&normalize(&raw)),
    })
}

/// POST /api/v1/resume/edit
pub async fn handle_edit(Json(req): Json<EditRequest>) -> Json<EditResponse> {
    info!(op = req.edit.kind(), "applying resume edit");
    debug!(edit = ?req.edit, "edit payload");
    let document = renormalize(&apply_edit(normalize(&req.document), &req.edit));
    let score = ScoreResponse::for_document(&document);
    Json(EditResponse { document, score })
}

/// POST /api/v1/resume/guidance
pub async fn handle_guidance(Json(req): Json<GuidanceRequest>) -> Json<BulletGuidance> {
    Json(review_bullet(&req.text))
}

/// GET /api/v1/resume/sample
pub async fn handle_sample() -> Json<ResumeDocument> {
    Json(sample_document())
}

/// GET /api/v1/layouts
pub async fn handle_layouts() -> Json<Vec<LayoutInfo>> {
    Json(layout_catalog())
}

/// GET /api/v1/themes
pub async fn handle_themes() -> Json<&'static [ThemeColor]> {
    Json(THEME_COLORS)
}
