//! Block Constructor: turns a generated post into the ordered block sequence.
//!
//! Order: hero → intro → toc → (section → image? → cta?)* → cta_book → conclusion.
//! CTAs are injected after fixed section indices (see `CtaKind::after_section`).
//! Never fails: missing optional fields fall back to placeholders or empty strings.

use crate::blocks::{BlockKind, ContentBlock, GeneratedPostData};
use crate::render::cta::CtaKind;

const PLACEHOLDER_BASE: &str = "https://placehold.co";
const PLACEHOLDER_COLOURS: &str = "f8fafc/334155";
/// Placeholder query text is truncated to this many characters.
const PLACEHOLDER_TEXT_MAX: usize = 50;

const HERO_WIDTH: u32 = 1200;
const HERO_HEIGHT: u32 = 600;
const SECTION_IMAGE_WIDTH: u32 = 800;
const SECTION_IMAGE_HEIGHT: u32 = 400;

/// Characters `urlencoding` escapes that URI-component encoding keeps literal.
const URI_COMPONENT_UNRESERVED: &[(&str, &str)] = &[
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encodes `text` as a URI component: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
fn encode_uri_component(text: &str) -> String {
    URI_COMPONENT_UNRESERVED
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |acc, (escaped, literal)| {
            acc.replace(escaped, literal)
        })
}

/// Builds a placeholder image URL carrying `text` (URI-encoded, first 50 chars).
pub fn placeholder_image(text: &str, width: u32, height: u32) -> String {
    let truncated: String = text.chars().take(PLACEHOLDER_TEXT_MAX).collect();
    format!(
        "{PLACEHOLDER_BASE}/{width}x{height}/{PLACEHOLDER_COLOURS}.png?text={}",
        encode_uri_component(&truncated)
    )
}

/// Sequential `block-N` id source. One per build.
struct BlockIds(usize);

impl BlockIds {
    fn next(&mut self) -> String {
        let id = format!("block-{}", self.0);
        self.0 += 1;
        id
    }
}

/// Returns the base64 image when present and non-empty.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Converts a generated post into the ordered block sequence. Deterministic.
pub fn build_blocks(data: &GeneratedPostData, keyword: &str) -> Vec<ContentBlock> {
    let mut ids = BlockIds(0);
    let mut blocks = Vec::with_capacity(data.sections.len() * 3 + 6);

    let hero_src = non_empty(data.hero_image_base64.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| placeholder_image(keyword, HERO_WIDTH, HERO_HEIGHT));
    let hero_alt = if data.hero_image_description.is_empty() {
        keyword.to_string()
    } else {
        data.hero_image_description.clone()
    };
    blocks.push(ContentBlock::new(
        ids.next(),
        "Hero Image",
        BlockKind::Hero {
            src: hero_src,
            alt: hero_alt,
            post_title: data.title.clone(),
        },
    ));

    blocks.push(ContentBlock::new(
        ids.next(),
        "Introduction",
        BlockKind::Intro {
            content: data.intro.clone(),
            post_title: data.title.clone(),
        },
    ));

    // Entries are computed at render time from the visible sections.
    blocks.push(ContentBlock::new(ids.next(), "Table of Contents", BlockKind::Toc));

    for (index, section) in data.sections.iter().enumerate() {
        blocks.push(ContentBlock::new(
            ids.next(),
            format!("H2: {}", section.heading),
            BlockKind::Section {
                heading: section.heading.clone(),
                content: section.content.clone(),
            },
        ));

        if let Some(description) = non_empty(section.image_description.as_deref()) {
            let src = non_empty(section.image_base64.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| {
                    placeholder_image(description, SECTION_IMAGE_WIDTH, SECTION_IMAGE_HEIGHT)
                });
            blocks.push(ContentBlock::new(
                ids.next(),
                format!("Image: {}", section.heading),
                BlockKind::Image {
                    src,
                    alt: description.to_string(),
                },
            ));
        }

        if let Some(cta) = CtaKind::after_section(index) {
            blocks.push(ContentBlock::new(ids.next(), cta.label(), cta.into()));
        }
    }

    blocks.push(ContentBlock::new(
        ids.next(),
        CtaKind::Book.label(),
        CtaKind::Book.into(),
    ));

    blocks.push(ContentBlock::new(
        ids.next(),
        "Conclusion",
        BlockKind::Conclusion {
            content: data.conclusion.clone(),
        },
    ));

    blocks
}
