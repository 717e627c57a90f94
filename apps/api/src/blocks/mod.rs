//! Content block model: a blog post as an ordered list of typed, hideable blocks.
//!
//! The sequence is built once from a `GeneratedPostData` snapshot. After that only
//! `is_visible` and block order change (from the editor). Anything derived from the
//! live list (TOC entries, section anchor numbers) is recomputed on every render.

pub mod builder;

use serde::{Deserialize, Serialize};

use crate::render::cta::CtaKind;

pub use builder::build_blocks;

// ────────────────────────────────────────────────────────────────────────────
// Generated post (input)
// ────────────────────────────────────────────────────────────────────────────

/// One H2 section of a generated post. Order defines document and TOC order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub heading: String,
    /// HTML paragraph content.
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

/// A generated blog post as returned by the text model. Immutable input to the builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPostData {
    #[serde(default)]
    pub title: String,
    /// HTML string.
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub hero_image_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_base64: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// HTML string.
    #[serde(default)]
    pub conclusion: String,
    #[serde(default)]
    pub meta_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

/// Per-type payload of a block. Each variant carries only the fields it renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum BlockKind {
    Hero {
        #[serde(default)]
        src: String,
        #[serde(default)]
        alt: String,
        #[serde(default)]
        post_title: String,
    },
    Intro {
        #[serde(default)]
        content: String,
        #[serde(default)]
        post_title: String,
    },
    Toc,
    Section {
        #[serde(default)]
        heading: String,
        #[serde(default)]
        content: String,
    },
    Image {
        #[serde(default)]
        src: String,
        #[serde(default)]
        alt: String,
    },
    CtaServices,
    CtaCopilot,
    CtaForecast,
    CtaBook,
    Conclusion {
        #[serde(default)]
        content: String,
    },
    /// A block type this service does not know about. Kept so editor payloads
    /// from newer clients still deserialize; it renders nothing.
    #[serde(other)]
    Unknown,
}

impl BlockKind {
    /// Wire name of the block type (`"hero"`, `"cta_book"`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockKind::Hero { .. } => "hero",
            BlockKind::Intro { .. } => "intro",
            BlockKind::Toc => "toc",
            BlockKind::Section { .. } => "section",
            BlockKind::Image { .. } => "image",
            BlockKind::CtaServices => "cta_services",
            BlockKind::CtaCopilot => "cta_copilot",
            BlockKind::CtaForecast => "cta_forecast",
            BlockKind::CtaBook => "cta_book",
            BlockKind::Conclusion { .. } => "conclusion",
            BlockKind::Unknown => "unknown",
        }
    }

    /// The CTA this block renders, if it is a CTA block.
    pub fn cta(&self) -> Option<CtaKind> {
        match self {
            BlockKind::CtaServices => Some(CtaKind::Services),
            BlockKind::CtaCopilot => Some(CtaKind::Copilot),
            BlockKind::CtaForecast => Some(CtaKind::Forecast),
            BlockKind::CtaBook => Some(CtaKind::Book),
            _ => None,
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self, BlockKind::Section { .. })
    }
}

impl From<CtaKind> for BlockKind {
    fn from(cta: CtaKind) -> Self {
        match cta {
            CtaKind::Services => BlockKind::CtaServices,
            CtaKind::Copilot => BlockKind::CtaCopilot,
            CtaKind::Forecast => BlockKind::CtaForecast,
            CtaKind::Book => BlockKind::CtaBook,
        }
    }
}

fn default_visible() -> bool {
    true
}

/// One orderable, independently hideable unit of the rendered post.
///
/// Hiding a block never deletes it: its data stays intact and it comes back
/// unchanged when `is_visible` is flipped again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: String,
    /// Editor label. Never rendered into the export.
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl ContentBlock {
    pub fn new(id: String, label: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id,
            label: label.into(),
            is_visible: true,
            kind,
        }
    }
}

/// Visible `section` blocks in document order. Position in the returned list is
/// the block's anchor number (`section-{n}`) and TOC entry number.
pub fn visible_sections(blocks: &[ContentBlock]) -> Vec<&ContentBlock> {
    blocks
        .iter()
        .filter(|b| b.is_visible && b.kind.is_section())
        .collect()
}
