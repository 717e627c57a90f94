pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::generation::handlers as generation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route(
            "/api/v1/posts/generate",
            post(generation_handlers::handle_generate),
        )
        .route(
            "/api/v1/posts/blocks",
            post(generation_handlers::handle_build_blocks),
        )
        .route("/api/v1/posts/audit", post(generation_handlers::handle_audit))
        // Render / export API
        .route("/api/v1/posts/render", post(export_handlers::handle_render))
        .route("/api/v1/posts/export", post(export_handlers::handle_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Json,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::export::WebhookClient;
    use crate::generation::generator::tests::{sample_post, StubGenerator};

    fn state_with_webhook(url: Option<String>) -> AppState {
        AppState {
            generator: Arc::new(StubGenerator(sample_post())),
            webhook: WebhookClient::new(url).unwrap(),
        }
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    /// Starts a local webhook receiver that records every payload it gets.
    async fn spawn_webhook_receiver() -> (String, Arc<Mutex<Vec<Value>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let app = Router::new().route(
            "/hook",
            post(move |Json(payload): Json<Value>| {
                let sink = sink.clone();
                async move {
                    sink.lock().unwrap().push(payload);
                    StatusCode::OK
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/hook"), received)
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(state_with_webhook(None));
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["export_enabled"], false);
    }

    #[tokio::test]
    async fn test_generate_returns_post_blocks_and_audit() {
        let app = build_router(state_with_webhook(None));
        let (status, body) = post_json(
            app,
            "/api/v1/posts/generate",
            json!({"topic": "Budgets", "keyword": "care home finance"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["post"]["title"], "Care Home Finance: A UK Guide");
        assert_eq!(body["blocks"][0]["type"], "hero");
        assert_eq!(body["blocks"][0]["id"], "block-0");
        assert!(!body["audit"]["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_topic() {
        let app = build_router(state_with_webhook(None));
        let (status, body) = post_json(
            app,
            "/api/v1/posts/generate",
            json!({"topic": "", "keyword": "care"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_blocks_endpoint_builds_sequence() {
        let app = build_router(state_with_webhook(None));
        let post = serde_json::to_value(sample_post()).unwrap();
        let (status, body) =
            post_json(app, "/api/v1/posts/blocks", json!({"post": post, "keyword": "care"})).await;

        assert_eq!(status, StatusCode::OK);
        let types: Vec<&str> = body["blocks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["type"].as_str().unwrap())
            .collect();
        assert_eq!(types.iter().filter(|t| **t == "section").count(), 4);
        assert_eq!(types.last(), Some(&"conclusion"));
    }

    #[tokio::test]
    async fn test_render_roundtrips_editor_blocks_with_hidden_section() {
        let app = build_router(state_with_webhook(None));
        let post = serde_json::to_value(sample_post()).unwrap();
        let (_, built) = post_json(
            app.clone(),
            "/api/v1/posts/blocks",
            json!({"post": post, "keyword": "care"}),
        )
        .await;

        let mut blocks = built["blocks"].as_array().unwrap().clone();
        let first_section = blocks.iter().position(|b| b["type"] == "section").unwrap();
        blocks[first_section]["isVisible"] = json!(false);

        let (status, body) = post_json(
            app,
            "/api/v1/posts/render",
            json!({"blocks": blocks, "mode": "standard"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "standard");
        let html = body["html"].as_str().unwrap();
        assert!(!html.contains("Body 0"));
        assert!(html.contains("<h2 id=\"section-0\">  section number 1 </h2>"));
        assert_eq!(html.matches("href=\"#section-").count(), 3);
    }

    #[tokio::test]
    async fn test_render_defaults_to_standard_and_skips_unknown_blocks() {
        let app = build_router(state_with_webhook(None));
        let (status, body) = post_json(
            app,
            "/api/v1/posts/render",
            json!({"blocks": [
                {"id": "block-0", "type": "cta_book"},
                {"id": "block-1", "type": "carousel", "slides": 3}
            ]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "standard");
        assert!(body["html"].as_str().unwrap().contains("https://regicare.uk/book-a-call"));
    }

    #[tokio::test]
    async fn test_audit_endpoint() {
        let app = build_router(state_with_webhook(None));
        let post = serde_json::to_value(sample_post()).unwrap();
        let (status, body) = post_json(
            app,
            "/api/v1/posts/audit",
            json!({"post": post, "keyword": "care home finance"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["audit"]["items"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_export_without_webhook_is_unavailable() {
        let app = build_router(state_with_webhook(None));
        let (status, body) = post_json(
            app,
            "/api/v1/posts/export",
            json!({"blocks": [], "title": "Hello"}),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
        assert!(body["error"]["message"].as_str().unwrap().contains("WEBHOOK_URL"));
    }

    #[tokio::test]
    async fn test_export_requires_title() {
        let app = build_router(state_with_webhook(Some("http://127.0.0.1:9/hook".to_string())));
        let (status, _) = post_json(
            app,
            "/api/v1/posts/export",
            json!({"blocks": [], "title": " "}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_pushes_rendered_html_to_webhook() {
        let (url, received) = spawn_webhook_receiver().await;
        let app = build_router(state_with_webhook(Some(url)));
        let (status, body) = post_json(
            app,
            "/api/v1/posts/export",
            json!({
                "blocks": [{"id": "block-0", "type": "cta_services"}],
                "mode": "modern",
                "title": "Care Home Finance: A UK Guide",
                "metaDescription": "Meta",
                "keyword": "care home finance"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slug"], "care-home-finance-a-uk-guide");

        let payloads = received.lock().unwrap();
        assert_eq!(payloads.len(), 1);
        let payload = &payloads[0];
        assert_eq!(payload["layout"], "modern");
        assert_eq!(payload["excerpt"], "Meta");
        assert_eq!(payload["exportId"], body["exportId"]);
        let content = payload["content"].as_str().unwrap();
        assert!(content.starts_with("<!DOCTYPE html>"));
        assert!(content.contains("https://regicare.uk/services"));
        assert_eq!(body["bytes"].as_u64().unwrap() as usize, content.len());
    }
}
