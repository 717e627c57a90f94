//! Blog Generation: turns a topic/keyword/tone request into a `GeneratedPostData`.
//!
//! Flow: validate config → prompt the text model (JSON mode) → reject unusable
//! output and retry → normalise headings → build blocks → audit.
//!
//! The model sits behind the `PostGenerator` trait so handlers and tests never
//! depend on the network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::audit::{run_audit, AuditReport};
use crate::blocks::{build_blocks, ContentBlock, GeneratedPostData};
use crate::errors::AppError;
use crate::generation::prompts::{BLOG_PROMPT_TEMPLATE, BLOG_SYSTEM};
use crate::llm_client::prompts::{HTML_STYLE_INSTRUCTION, UK_ENGLISH_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::render::formatter::to_title_case;

/// Max LLM retries when the returned post has no title or no sections.
const MAX_GENERATION_RETRIES: u32 = 2;
const DEFAULT_TONE: &str = "Professional";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

/// What to write about. Request body for generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogConfig {
    pub topic: String,
    pub keyword: String,
    #[serde(default = "default_tone")]
    pub tone: String,
}

impl BlogConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.topic.trim().is_empty() {
            return Err(AppError::Validation("topic cannot be empty".to_string()));
        }
        if self.keyword.trim().is_empty() {
            return Err(AppError::Validation("keyword cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Result of the generation pipeline: the raw post, its blocks and the audit.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPost {
    pub post: GeneratedPostData,
    pub blocks: Vec<ContentBlock>,
    pub audit: AuditReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Source of generated posts. Carried in `AppState` as `Arc<dyn PostGenerator>`.
#[async_trait]
pub trait PostGenerator: Send + Sync {
    async fn generate(&self, config: &BlogConfig) -> Result<GeneratedPostData, AppError>;
}

/// Default generator backed by the Gemini client.
pub struct LlmPostGenerator(pub LlmClient);

#[async_trait]
impl PostGenerator for LlmPostGenerator {
    async fn generate(&self, config: &BlogConfig) -> Result<GeneratedPostData, AppError> {
        let prompt = build_generation_prompt(config);

        for attempt in 0..=MAX_GENERATION_RETRIES {
            let post: GeneratedPostData = self
                .0
                .call_json(&prompt, BLOG_SYSTEM)
                .await
                .map_err(|e| AppError::Llm(format!("Blog generation LLM call failed: {e}")))?;

            match rejection_reason(&post) {
                None => return Ok(post),
                Some(reason) => warn!(
                    "Generation attempt {}/{}: {}; retrying",
                    attempt + 1,
                    MAX_GENERATION_RETRIES + 1,
                    reason
                ),
            }
        }

        Err(AppError::Llm(format!(
            "Generation failed after {} attempts: the model kept returning posts without a title or sections",
            MAX_GENERATION_RETRIES + 1
        )))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full pipeline: generate → normalise → build blocks → audit.
pub async fn generate_post(
    generator: &dyn PostGenerator,
    config: &BlogConfig,
) -> Result<GeneratedPost, AppError> {
    config.validate()?;

    info!(
        "Generating post: topic={:?} keyword={:?} tone={:?}",
        config.topic, config.keyword, config.tone
    );
    let post = normalise_post(generator.generate(config).await?);

    let blocks = build_blocks(&post, &config.keyword);
    debug!(
        "Block sequence: {}",
        blocks
            .iter()
            .map(|b| b.kind.type_name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    let audit = run_audit(&post, &config.keyword);
    info!(
        "Generated {:?}: {} sections, {} blocks, audit score {}%",
        post.title,
        post.sections.len(),
        blocks.len(),
        audit.score
    );

    Ok(GeneratedPost {
        post,
        blocks,
        audit,
    })
}

/// Why a model response cannot be used, if it cannot.
fn rejection_reason(post: &GeneratedPostData) -> Option<&'static str> {
    if post.title.trim().is_empty() {
        Some("post has no title")
    } else if post.sections.is_empty() {
        Some("post has no sections")
    } else {
        None
    }
}

/// Title-cases the title and section headings and trims stray whitespace.
/// HTML content is left untouched; the formatter styles it at render time.
pub fn normalise_post(mut post: GeneratedPostData) -> GeneratedPostData {
    post.title = to_title_case(post.title.trim());
    post.meta_description = post.meta_description.trim().to_string();
    for section in &mut post.sections {
        section.heading = to_title_case(section.heading.trim());
    }
    post
}

/// Fills the prompt template for a config.
fn build_generation_prompt(config: &BlogConfig) -> String {
    BLOG_PROMPT_TEMPLATE
        .replace("{uk_instruction}", UK_ENGLISH_INSTRUCTION)
        .replace("{html_instruction}", HTML_STYLE_INSTRUCTION)
        .replace("{topic}", config.topic.trim())
        .replace("{keyword}", config.keyword.trim())
        .replace("{tone}", config.tone.trim())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
