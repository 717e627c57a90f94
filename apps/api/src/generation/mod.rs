// Blog Generation: prompts the text model for a post, normalises it, then hands
// it to the block builder and the audit.
// All model calls go through llm_client; nothing here talks HTTP directly.

pub mod generator;
pub mod handlers;
pub mod prompts;
