//! HTML Renderer: walks the visible blocks in order and emits the export.
//!
//! Section anchors and TOC numbers are derived from the visible `section` blocks on
//! every call, so hiding a section renumbers everything after it.

use serde::{Deserialize, Serialize};

use crate::blocks::{visible_sections, BlockKind, ContentBlock};
use crate::render::formatter::format_content;

/// Export layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Bare fragment that inherits the host site's stylesheet.
    #[default]
    Standard,
    /// Standalone, fully styled HTML document.
    Modern,
}

impl LayoutMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Standard => "standard",
            LayoutMode::Modern => "modern",
        }
    }

    /// Inline style for section and conclusion headings.
    fn heading_style(self) -> Option<&'static str> {
        match self {
            LayoutMode::Standard => None,
            LayoutMode::Modern => Some(
                "color: #1e293b; font-weight: 700; margin-top: 50px; margin-bottom: 30px; font-size: 28px;",
            ),
        }
    }

    fn container_style(self) -> Option<&'static str> {
        match self {
            LayoutMode::Standard => None,
            LayoutMode::Modern => Some(
                "font-family: 'Inter', sans-serif; line-height: 1.8; color: #334155; max-width: 800px; margin: 0 auto;",
            ),
        }
    }
}

/// Marker identifying generated exports in the host CMS.
pub const EXPORT_MARKER: &str = "<!-- RegiCare Blog Export -->";
const CONTAINER_CLASS: &str = "entry-content is-layout-constrained";
const FALLBACK_DOCUMENT_TITLE: &str = "Preview";

const HERO_IMG_STYLE: &str = "width:100%; height:auto; margin-bottom:40px; border-radius:8px;";
const TOC_BOX_STYLE: &str = "background: #f8fafc; padding: 30px; border-radius: 12px; margin-bottom: 40px; border: 1px solid #e2e8f0;";
const TOC_HEADING_STYLE: &str = "font-weight:bold; font-size:20px; margin-bottom:15px; color:#0f172a;";
const TOC_LINK_STYLE: &str = "display: block; color: #E6399B; text-decoration: none; margin-bottom: 8px; font-weight: bold;";
const FIGURE_STYLE: &str = "margin: 40px 0;";
const FIGURE_IMG_STYLE: &str = "width:100%; height:auto; border-radius:8px;";
const FIGCAPTION_STYLE: &str = "text-align:center; color:#64748b; font-size:0.9em; margin-top:10px;";

const MODERN_HEAD: &str = r#"<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;600;700&display=swap" rel="stylesheet">
<style>
  body { margin: 0; padding: 40px; background-color: #f8fafc; display: flex; justify-content: center; min-height: 100vh; }
  h1, h2, h3 { color: #0f172a; }
  p { margin-bottom: 50px; }
</style>
"#;
const MODERN_CARD_STYLE: &str = "background: white; padding: 60px; border-radius: 8px; box-shadow: 0 4px 20px rgba(0,0,0,0.05); width: 100%; max-width: 900px;";
const MODERN_H1_STYLE: &str = "margin-bottom:30px; font-size: 2.5rem; font-weight: 800;";

/// ` style="..."` when a style applies, nothing otherwise.
fn style_attr(style: Option<&str>) -> String {
    style.map(|s| format!(r#" style="{s}""#)).unwrap_or_default()
}

/// Heading shown for a section in the TOC: its heading, or the editor label
/// without the `H2: ` prefix when the heading is empty.
fn toc_heading(block: &ContentBlock) -> &str {
    match &block.kind {
        BlockKind::Section { heading, .. } if !heading.is_empty() => heading.as_str(),
        _ => block
            .label
            .strip_prefix("H2:")
            .map(str::trim_start)
            .unwrap_or(block.label.as_str()),
    }
}

fn render_toc(sections: &[&ContentBlock], out: &mut String) {
    if sections.is_empty() {
        return;
    }
    out.push_str(&format!(r#"<div style="{TOC_BOX_STYLE}">"#));
    out.push('\n');
    out.push_str(&format!(
        r#"<div style="{TOC_HEADING_STYLE}">Table of Contents</div>"#
    ));
    out.push('\n');
    for (index, section) in sections.iter().enumerate() {
        out.push_str(&format!(
            r##"<a href="#section-{index}" style="{TOC_LINK_STYLE}">{}. {}</a>"##,
            index + 1,
            toc_heading(section)
        ));
        out.push('\n');
    }
    out.push_str("</div>\n");
}

fn render_content_section(heading_tag: &str, content: &str, out: &mut String) {
    out.push_str("<section>\n");
    out.push_str(heading_tag);
    out.push('\n');
    out.push_str(&format_content(content));
    out.push_str("\n</section>\n");
}

/// Renders the visible blocks into the inner fragment (without the container).
fn render_inner(visible: &[&ContentBlock], sections: &[&ContentBlock], mode: LayoutMode) -> String {
    let heading_style = style_attr(mode.heading_style());
    let mut out = String::new();
    let mut section_index = 0usize;

    for block in visible {
        match &block.kind {
            BlockKind::Hero { src, alt, .. } => {
                out.push_str(&format!(
                    r#"<img src="{src}" alt="{alt}" style="{HERO_IMG_STYLE}" />"#
                ));
                out.push('\n');
            }
            BlockKind::Intro { content, .. } => {
                out.push_str("<section>\n");
                out.push_str(&format_content(content));
                out.push_str("\n</section>\n");
            }
            BlockKind::Toc => render_toc(sections, &mut out),
            BlockKind::Section { heading, content } => {
                let tag = format!(r#"<h2 id="section-{section_index}"{heading_style}>{heading}</h2>"#);
                render_content_section(&tag, content, &mut out);
                section_index += 1;
            }
            BlockKind::Image { src, alt } => {
                out.push_str(&format!(r#"<figure style="{FIGURE_STYLE}">"#));
                out.push('\n');
                out.push_str(&format!(
                    r#"<img src="{src}" alt="{alt}" style="{FIGURE_IMG_STYLE}" />"#
                ));
                out.push('\n');
                if !alt.is_empty() {
                    out.push_str(&format!(
                        r#"<figcaption style="{FIGCAPTION_STYLE}">{alt}</figcaption>"#
                    ));
                    out.push('\n');
                }
                out.push_str("</figure>\n");
            }
            BlockKind::CtaServices
            | BlockKind::CtaCopilot
            | BlockKind::CtaForecast
            | BlockKind::CtaBook => {
                if let Some(cta) = block.kind.cta() {
                    out.push_str(&cta.html());
                    out.push('\n');
                }
            }
            BlockKind::Conclusion { content } => {
                let tag = format!("<h2{heading_style}>Conclusion</h2>");
                render_content_section(&tag, content, &mut out);
            }
            BlockKind::Unknown => {}
        }
    }

    out
}

/// Title for the standalone document: the first visible intro's post title, else "Preview".
fn document_title<'a>(visible: &[&'a ContentBlock]) -> &'a str {
    let intro = visible
        .iter()
        .copied()
        .find(|b| matches!(b.kind, BlockKind::Intro { .. }));
    match intro.map(|b| &b.kind) {
        Some(BlockKind::Intro { post_title, .. }) if !post_title.is_empty() => post_title.as_str(),
        _ => FALLBACK_DOCUMENT_TITLE,
    }
}

/// Renders blocks to HTML. Hidden blocks are skipped; unknown blocks render nothing.
///
/// `Standard` returns the marked, unstyled container fragment. `Modern` returns a
/// complete `<!DOCTYPE html>` document wrapping the styled container.
pub fn render_blocks(blocks: &[ContentBlock], mode: LayoutMode) -> String {
    let visible: Vec<&ContentBlock> = blocks.iter().filter(|b| b.is_visible).collect();
    let sections = visible_sections(blocks);

    let inner = render_inner(&visible, &sections, mode);
    let entry_content = format!(
        "{EXPORT_MARKER}\n<div class=\"{CONTAINER_CLASS}\"{}>\n{inner}</div>",
        style_attr(mode.container_style())
    );

    match mode {
        LayoutMode::Standard => entry_content,
        LayoutMode::Modern => {
            let title = document_title(&visible);
            let mut doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
            doc.push_str(MODERN_HEAD);
            doc.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n"));
            doc.push_str(&format!(r#"<div style="{MODERN_CARD_STYLE}">"#));
            doc.push('\n');
            doc.push_str(&format!(r#"<h1 style="{MODERN_H1_STYLE}">{title}</h1>"#));
            doc.push('\n');
            doc.push_str(&entry_content);
            doc.push_str("\n</div>\n</body>\n</html>\n");
            doc
        }
    }
}
