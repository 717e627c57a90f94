// Export: renders the editor's blocks and pushes the result to the publishing webhook.
// Fire-and-forget from the render pipeline's point of view; nothing is retried here.

pub mod handlers;
pub mod webhook;

pub use webhook::{ExportPayload, WebhookClient, WebhookError};
