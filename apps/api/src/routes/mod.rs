pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::document::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document
        .route("/api/v1/resume/normalize", post(handlers::handle_normalize))
        .route("/api/v1/resume/edit", post(handlers::handle_edit))
        .route("/api/v1/resume/sample", get(handlers::handle_sample))
        // Scoring
        .route("/api/v1/resume/score", post(handlers::handle_score))
        .route("/api/v1/resume/guidance", post(handlers::handle_guidance))
        // Rendering
        .route("/api/v1/resume/render", post(handlers::handle_render_default))
        .route("/api/v1/resume/render/:layout", post(handlers::handle_render))
        .route(
            "/api/v1/resume/export/text",
            post(handlers::handle_export_text),
        )
        .route("/api/v1/layouts", get(handlers::handle_layouts))
        .route("/api/v1/themes", get(handlers::handle_themes))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::layout::Layout;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState {
            config: Config::default(),
        })
    }

    async fn call(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        let body = match body {
            Some(v) => Body::from(v.to_string()),
            None => Body::empty(),
        };
        let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = call(app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-api");
    }

    #[tokio::test]
    async fn test_normalize_legacy_education() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/api/v1/resume/normalize",
            Some(json!({ "education": [{ "school": "X", "degree": "Y" }] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["education"][0]["institution"], "X");
        assert_eq!(body["education"][0]["qualification"], "Y");
        assert_eq!(body["experience"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_score_empty_document() {
        let (status, body) =
            call(app(), Method::POST, "/api/v1/resume/score", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["suggestions"].as_array().map(Vec::len), Some(11));
        assert_eq!(body["status"]["label"], "Needs Work");
    }

    #[tokio::test]
    async fn test_render_known_and_unknown_layouts() {
        let request = json!({ "document": { "personalInfo": { "name": "Alex" } } });
        let (status, body) = call(
            app(),
            Method::POST,
            "/api/v1/resume/render/classic",
            Some(request.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["layout"], "Classic");
        assert_eq!(body["body"]["arrangement"], "single_column");
        assert_eq!(body["body"]["header"]["name"], "Alex");

        let (status, body) = call(
            app(),
            Method::POST,
            "/api/v1/resume/render/fancy",
            Some(request),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_render_uses_configured_defaults() {
        let app = build_router(AppState {
            config: Config {
                default_layout: Layout::Minimal,
                default_accent_color: "navy".to_string(),
                ..Config::default()
            },
        });
        let (status, body) = call(
            app,
            Method::POST,
            "/api/v1/resume/render",
            Some(json!({ "document": {} })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["layout"], "Minimal");
        assert_eq!(body["accentColor"], "navy");
    }

    #[tokio::test]
    async fn test_edit_returns_document_and_score() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/api/v1/resume/edit",
            Some(json!({
                "document": {},
                "edit": { "op": "setField", "section": "personalInfo", "field": "name", "value": "Alex" }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["document"]["personalInfo"]["name"], "Alex");
        assert_eq!(body["score"]["score"], 10);
    }

    #[tokio::test]
    async fn test_edit_remove_last_entry_restores_placeholder() {
        let (_, body) = call(
            app(),
            Method::POST,
            "/api/v1/resume/edit",
            Some(json!({
                "document": {},
                "edit": { "op": "removeEntry", "section": "projects", "index": 0 }
            })),
        )
        .await;
        assert_eq!(body["document"]["projects"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_export_text() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/api/v1/resume/export/text",
            Some(json!({ "personalInfo": { "name": "Alex" } })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "ALEX");
    }

    #[tokio::test]
    async fn test_catalog_endpoints() {
        let (_, layouts) = call(app(), Method::GET, "/api/v1/layouts", None).await;
        assert_eq!(layouts.as_array().map(Vec::len), Some(3));
        let (_, themes) = call(app(), Method::GET, "/api/v1/themes", None).await;
        assert_eq!(themes[0]["name"], "Teal");
        let (_, sample) = call(app(), Method::GET, "/api/v1/resume/sample", None).await;
        assert_eq!(sample["personalInfo"]["name"], "Alex Johnson");
    }

    #[tokio::test]
    async fn test_guidance() {
        let (_, body) = call(
            app(),
            Method::POST,
            "/api/v1/resume/guidance",
            Some(json!({ "text": "Led migration cutting costs by 30%" })),
        )
        .await;
        assert_eq!(body["startsWithActionVerb"], true);
        assert_eq!(body["hasMetric"], true);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = call(app(), Method::GET, "/api/v1/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
