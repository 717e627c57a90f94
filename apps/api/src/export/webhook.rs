//! Webhook client: posts the finished export to the configured publishing endpoint.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::render::LayoutMode;

const WEBHOOK_TIMEOUT_SECS: u64 = 30;
/// Exports always land as drafts; publishing happens in the CMS.
const EXPORT_STATUS: &str = "draft";

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("No webhook URL configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Webhook rejected export (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Body sent to the webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub export_id: Uuid,
    pub exported_at: DateTime<Utc>,
    pub title: String,
    pub slug: String,
    /// Rendered HTML.
    pub content: String,
    /// Meta description.
    pub excerpt: String,
    pub keyword: String,
    pub layout: LayoutMode,
    pub status: String,
}

impl ExportPayload {
    pub fn new(
        title: String,
        content: String,
        excerpt: String,
        keyword: String,
        layout: LayoutMode,
    ) -> Self {
        Self {
            export_id: Uuid::new_v4(),
            exported_at: Utc::now(),
            slug: slugify(&title),
            title,
            content,
            excerpt,
            keyword,
            layout,
            status: EXPORT_STATUS.to_string(),
        }
    }
}

/// URL slug: lowercase ASCII alphanumerics, every other run collapsed to one `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    url: Option<String>,
}

impl WebhookClient {
    pub fn new(url: Option<String>) -> Result<Self, WebhookError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(WEBHOOK_TIMEOUT_SECS))
                .build()?,
            url: url.filter(|u| !u.trim().is_empty()),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Sends one export. A non-2xx answer is an error; nothing is retried.
    pub async fn push(&self, payload: &ExportPayload) -> Result<(), WebhookError> {
        let url = self.url.as_deref().ok_or(WebhookError::NotConfigured)?;

        let response = self.client.post(url).json(payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Webhook returned {} for export {}", status, payload.export_id);
            return Err(WebhookError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(
            "Pushed export {} ({:?}, {} bytes) to webhook",
            payload.export_id,
            payload.slug,
            payload.content.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("Care Home Finance: A UK Guide"), "care-home-finance-a-uk-guide");
        assert_eq!(slugify("  --Hello,   World!--  "), "hello-world");
        assert_eq!(slugify("Café & Co"), "caf-co");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let payload = ExportPayload::new(
            "Care Home Finance".to_string(),
            "<div></div>".to_string(),
            "Excerpt".to_string(),
            "care".to_string(),
            LayoutMode::Modern,
        );
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["slug"], "care-home-finance");
        assert_eq!(value["layout"], "modern");
        assert_eq!(value["status"], "draft");
        assert!(value.get("exportId").is_some());
        assert!(value.get("exportedAt").is_some());
    }

    #[test]
    fn test_blank_url_counts_as_unconfigured() {
        assert!(!WebhookClient::new(Some("  ".to_string())).unwrap().is_configured());
        assert!(!WebhookClient::new(None).unwrap().is_configured());
        assert!(WebhookClient::new(Some("https://hooks.example.com/x".to_string()))
            .unwrap()
            .is_configured());
    }

    #[tokio::test]
    async fn test_push_without_url_fails_fast() {
        let client = WebhookClient::new(None).unwrap();
        let payload = ExportPayload::new(
            "T".to_string(),
            String::new(),
            String::new(),
            String::new(),
            LayoutMode::Standard,
        );
        assert!(matches!(
            client.push(&payload).await,
            Err(WebhookError::NotConfigured)
        ));
    }
}
