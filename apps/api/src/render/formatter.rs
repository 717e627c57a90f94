//! Content formatter: UK spelling plus inline house styling for generated HTML.
//!
//! Applied to intro, section and conclusion content only. Single-pass: running the
//! formatter over its own output restyles tags again and re-applies substitutions
//! (`programme` → `programmeme`). Callers format raw model output exactly once.

use std::sync::OnceLock;

use regex::Regex;

/// American → British substitutions, applied case-insensitively in this order.
/// The replacement is inserted literally; the matched casing is not preserved.
pub const UK_SPELLINGS: &[(&str, &str)] = &[
    ("optimize", "optimise"),
    ("optimization", "optimisation"),
    ("color", "colour"),
    ("center", "centre"),
    ("program", "programme"),
    ("behavior", "behaviour"),
    ("analyze", "analyse"),
    ("modeling", "modelling"),
];

/// Words kept fully upper-case by `to_title_case`.
const ACRONYMS: &[&str] = &["ai", "seo", "roi", "uk", "usa", "api", "crm", "llm", "cqc", "nhs"];

const PARAGRAPH_STYLED: &str = r#"<p style="margin-bottom: 50px;">"#;
const LINK_STYLED: &str = r#"<a style="color:#E6399B; font-weight:bold;" href"#;
const BOLD_STYLED: &str = r#"<strong style="color:#E6399B;">"#;

static UK_PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn uk_patterns() -> &'static [(Regex, &'static str)] {
    UK_PATTERNS.get_or_init(|| {
        UK_SPELLINGS
            .iter()
            .map(|(us, uk)| {
                let re = Regex::new(&format!("(?i){}", regex::escape(us)))
                    .expect("Invalid UK spelling regex");
                (re, *uk)
            })
            .collect()
    })
}

/// Replaces American spellings with British ones (case-insensitive find/replace).
pub fn uk_enforce(text: &str) -> String {
    let mut out = text.to_string();
    for (re, uk) in uk_patterns() {
        if re.is_match(&out) {
            out = re.replace_all(&out, regex::NoExpand(uk)).into_owned();
        }
    }
    out
}

/// American spellings from the substitution table present in `text`, in table order.
///
/// An occurrence that already reads as the British form (`programme`) is not counted.
pub fn american_spellings(text: &str) -> Vec<&'static str> {
    uk_patterns()
        .iter()
        .zip(UK_SPELLINGS)
        .filter(|((re, uk), _)| {
            re.find_iter(text).any(|m| {
                !text[m.start()..]
                    .get(..uk.len())
                    .is_some_and(|s| s.eq_ignore_ascii_case(uk))
            })
        })
        .map(|(_, (us, _))| *us)
        .collect()
}

/// Formats a generated HTML fragment for export.
///
/// Steps, in order: UK spelling, `<p>` bottom margin, pink bold links,
/// `<b>` → pink `<strong>`.
pub fn format_content(html: &str) -> String {
    uk_enforce(html)
        .replace("<p>", PARAGRAPH_STYLED)
        .replace("<a href", LINK_STYLED)
        .replace("<b>", BOLD_STYLED)
        .replace("</b>", "</strong>")
}

/// Title-cases every word, keeping known acronyms upper-case.
pub fn to_title_case(text: &str) -> String {
    let re = WORD_RE.get_or_init(|| Regex::new(r"\w\S*").expect("Invalid word regex"));
    re.replace_all(text, |caps: &regex::Captures| {
        let word = &caps[0];
        let lower = word.to_lowercase();
        if ACRONYMS.contains(&lower.as_str()) {
            return word.to_uppercase();
        }
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => {
                let mut out: String = first.to_uppercase().collect();
                out.push_str(&chars.as_str().to_lowercase());
                out
            }
            None => String::new(),
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_paragraph_and_spelling() {
        let out = format_content("<p>We optimize color</p>");
        assert_eq!(out, r#"<p style="margin-bottom: 50px;">We optimise colour</p>"#);
    }

    #[test]
    fn test_uk_enforce_is_case_insensitive_not_case_preserving() {
        assert_eq!(uk_enforce("Color CENTER Behavior"), "colour centre behaviour");
    }

    #[test]
    fn test_uk_enforce_full_table() {
        assert_eq!(
            uk_enforce("optimize optimization program analyze modeling"),
            "optimise optimisation programme analyse modelling"
        );
    }

    #[test]
    fn test_uk_enforce_matches_inside_words() {
        assert_eq!(uk_enforce("colorful recenter"), "colourful recentre");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let input = "<div><h3>Staff rotas</h3><em>Plan ahead</em> for winter.</div>";
        assert_eq!(format_content(input), input);
    }

    #[test]
    fn test_link_styling_is_inserted_before_href() {
        let out = format_content(r#"<a href="https://regicare.uk">RegiCare</a>"#);
        assert_eq!(
            out,
            r#"<a style="color:#E6399B; font-weight:bold;" href="https://regicare.uk">RegiCare</a>"#
        );
    }

    #[test]
    fn test_bold_is_rewritten_to_pink_strong() {
        let out = format_content("<b>Key point</b>");
        assert_eq!(out, r#"<strong style="color:#E6399B;">Key point</strong>"#);
    }

    #[test]
    fn test_existing_strong_and_styled_paragraphs_are_left_alone() {
        let input = r#"<p class="x">a</p><strong>b</strong>"#;
        assert_eq!(format_content(input), input);
    }

    #[test]
    fn test_second_pass_is_not_idempotent_for_programme() {
        let once = format_content("<p>program</p>");
        let twice = format_content(&once);
        assert!(once.contains("programme"));
        assert!(twice.contains("programmeme"));
    }

    #[test]
    fn test_american_spellings_lists_matches_in_table_order() {
        assert_eq!(
            american_spellings("The Color of the Program"),
            vec!["color", "program"]
        );
        assert!(american_spellings("colour and programme").is_empty());
        assert_eq!(american_spellings("programme or program"), vec!["program"]);
    }

    #[test]
    fn test_title_case_words_and_acronyms() {
        assert_eq!(
            to_title_case("how AI and seo help uk care homes"),
            "How AI And SEO Help UK Care Homes"
        );
        assert_eq!(to_title_case("CQC inspection GUIDE"), "CQC Inspection Guide");
    }

    #[test]
    fn test_title_case_keeps_punctuation_attached() {
        assert_eq!(to_title_case("what's next? roi-driven"), "What's Next? Roi-driven");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(to_title_case(""), "");
    }
}
