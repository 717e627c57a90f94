use std::sync::Arc;

use crate::export::WebhookClient;
use crate::generation::generator::PostGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable post source. Default: `LlmPostGenerator` over Gemini.
    pub generator: Arc<dyn PostGenerator>,
    pub webhook: WebhookClient,
}
