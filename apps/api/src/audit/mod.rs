//! Pre-publish audit of a generated post: SEO basics, structure and spelling.
//!
//! Every check produces an `AuditItem`; nothing here blocks export. The editor
//! shows the report and the user decides.

use serde::{Deserialize, Serialize};

use crate::blocks::GeneratedPostData;
use crate::render::formatter::american_spellings;

/// Titles longer than this get truncated in search results.
pub const MAX_TITLE_CHARS: usize = 60;
pub const MIN_META_CHARS: usize = 120;
pub const MAX_META_CHARS: usize = 160;
/// Sections needed before every injected CTA slot is filled.
pub const MIN_SECTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditItem {
    pub label: String,
    pub status: bool,
    pub detail: String,
}

impl AuditItem {
    fn new(label: &str, status: bool, detail: String) -> Self {
        Self {
            label: label.to_string(),
            status,
            detail,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub items: Vec<AuditItem>,
    /// True when every item passed.
    pub passed: bool,
    /// Percentage of passing items, 0 – 100.
    pub score: u32,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn check_keyword_in_title(post: &GeneratedPostData, keyword: &str) -> AuditItem {
    let ok = contains_ignore_case(&post.title, keyword.trim());
    let detail = if ok {
        format!("Title contains '{}'", keyword.trim())
    } else {
        format!("Add '{}' to the title", keyword.trim())
    };
    AuditItem::new("Keyword in title", ok, detail)
}

fn check_title_length(post: &GeneratedPostData) -> AuditItem {
    let len = post.title.chars().count();
    AuditItem::new(
        "Title length",
        len > 0 && len <= MAX_TITLE_CHARS,
        format!("{len} characters (max {MAX_TITLE_CHARS})"),
    )
}

fn check_meta_length(post: &GeneratedPostData) -> AuditItem {
    let len = post.meta_description.chars().count();
    AuditItem::new(
        "Meta description length",
        (MIN_META_CHARS..=MAX_META_CHARS).contains(&len),
        format!("{len} characters (target {MIN_META_CHARS}-{MAX_META_CHARS})"),
    )
}

fn check_keyword_in_meta(post: &GeneratedPostData, keyword: &str) -> AuditItem {
    let ok = contains_ignore_case(&post.meta_description, keyword.trim());
    let detail = if ok {
        "Meta description contains the keyword".to_string()
    } else {
        format!("Add '{}' to the meta description", keyword.trim())
    };
    AuditItem::new("Keyword in meta description", ok, detail)
}

fn check_section_count(post: &GeneratedPostData) -> AuditItem {
    let n = post.sections.len();
    AuditItem::new(
        "Section count",
        n >= MIN_SECTIONS,
        format!("{n} sections (at least {MIN_SECTIONS} to place every call to action)"),
    )
}

fn check_section_images(post: &GeneratedPostData) -> AuditItem {
    let missing: Vec<&str> = post
        .sections
        .iter()
        .filter(|s| s.image_description.as_deref().map_or(true, str::is_empty))
        .map(|s| s.heading.as_str())
        .collect();
    let detail = if missing.is_empty() {
        "Every section has an image".to_string()
    } else {
        format!("No image for: {}", missing.join(", "))
    };
    AuditItem::new("Section images", missing.is_empty(), detail)
}

fn check_intro_and_conclusion(post: &GeneratedPostData) -> AuditItem {
    let intro = !post.intro.trim().is_empty();
    let conclusion = !post.conclusion.trim().is_empty();
    let detail = match (intro, conclusion) {
        (true, true) => "Intro and conclusion present".to_string(),
        (false, true) => "Intro is empty".to_string(),
        (true, false) => "Conclusion is empty".to_string(),
        (false, false) => "Intro and conclusion are empty".to_string(),
    };
    AuditItem::new("Intro and conclusion", intro && conclusion, detail)
}

fn check_uk_spelling(post: &GeneratedPostData) -> AuditItem {
    let mut found: Vec<&'static str> = Vec::new();
    let bodies = std::iter::once(post.intro.as_str())
        .chain(post.sections.iter().map(|s| s.content.as_str()))
        .chain(std::iter::once(post.conclusion.as_str()));
    for body in bodies {
        for word in american_spellings(body) {
            if !found.contains(&word) {
                found.push(word);
            }
        }
    }
    let detail = if found.is_empty() {
        "No American spellings found".to_string()
    } else {
        format!("Will be converted on export: {}", found.join(", "))
    };
    AuditItem::new("UK spelling", found.is_empty(), detail)
}

/// Runs every audit check against a generated post.
pub fn run_audit(post: &GeneratedPostData, keyword: &str) -> AuditReport {
    let items = vec![
        check_keyword_in_title(post, keyword),
        check_title_length(post),
        check_meta_length(post),
        check_keyword_in_meta(post, keyword),
        check_section_count(post),
        check_section_images(post),
        check_intro_and_conclusion(post),
        check_uk_spelling(post),
    ];

    let passing = items.iter().filter(|i| i.status).count();
    let score = (passing * 100 / items.len()) as u32;

    AuditReport {
        passed: passing == items.len(),
        score,
        items,
    }
}
