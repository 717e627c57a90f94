//! Call-to-action templates. Fixed, pre-styled fragments; never run through the formatter.

/// The four call-to-action variants a post can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaKind {
    Services,
    Copilot,
    Forecast,
    Book,
}

/// Per-CTA presentation. The link target comes from `CtaKind::href`.
struct CtaStyle {
    /// `id="..."` or `class="..."` on the wrapper div.
    marker: &'static str,
    background: &'static str,
    border: &'static str,
    link_colour: &'static str,
    text: &'static str,
}

impl CtaKind {
    fn style(self) -> CtaStyle {
        match self {
            CtaKind::Services => CtaStyle {
                marker: r#"id="explore-services-cta""#,
                background: "#f9fafb",
                border: "1px solid #e5e7eb",
                link_colour: "#E6399B",
                text: "Take a look at all the services we offer →",
            },
            CtaKind::Copilot => CtaStyle {
                marker: r#"class="co-pilot-cta""#,
                background: "#fdf2f8",
                border: "2px solid #fce7f3",
                link_colour: "#E6399B",
                text: "Feeling stuck? Try our Care Co-Pilot advisory service for free →",
            },
            CtaKind::Forecast => CtaStyle {
                marker: r#"id="forecast-cta""#,
                background: "#eff6ff",
                border: "1px solid #dbeafe",
                link_colour: "#2563eb",
                text: "Plan your financial future with our Forecast Builder →",
            },
            CtaKind::Book => CtaStyle {
                marker: r#"id="book-call-cta""#,
                background: "#f0fdf4",
                border: "1px solid #dcfce7",
                link_colour: "#E6399B",
                text: "Ready to move forward? Book a call with us today →",
            },
        }
    }

    /// The fixed HTML fragment for this CTA. Identical for every instance.
    pub fn html(self) -> String {
        let CtaStyle {
            marker,
            background,
            border,
            link_colour,
            text,
        } = self.style();
        format!(
            r#"<div {marker} style="margin: 50px 0; padding: 20px; background: {background}; text-align: center; border: {border};"><a href="{}" style="color:{link_colour}; font-weight:bold; text-decoration:none;">{text}</a></div>"#,
            self.href()
        )
    }

    /// Destination the CTA links to.
    pub fn href(self) -> &'static str {
        match self {
            CtaKind::Services => "https://regicare.uk/services",
            CtaKind::Copilot => "https://regicare.uk/care-co-pilot/",
            CtaKind::Forecast => "https://regicare.uk/forecast-builder/",
            CtaKind::Book => "https://regicare.uk/book-a-call",
        }
    }

    /// Editor label for blocks of this CTA.
    pub fn label(self) -> &'static str {
        match self {
            CtaKind::Services => "CTA: See Services",
            CtaKind::Copilot => "CTA: Care Co-Pilot",
            CtaKind::Forecast => "CTA: Forecast Builder",
            CtaKind::Book => "CTA: Book Call",
        }
    }

    /// CTA injected after the section at zero-based `index`, if any.
    /// Book is never injected here; it always follows the last section.
    pub fn after_section(index: usize) -> Option<CtaKind> {
        match index {
            0 => Some(CtaKind::Services),
            1 => Some(CtaKind::Forecast),
            2 => Some(CtaKind::Copilot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CtaKind; 4] = [
        CtaKind::Services,
        CtaKind::Copilot,
        CtaKind::Forecast,
        CtaKind::Book,
    ];

    #[test]
    fn test_each_template_links_to_its_destination() {
        for cta in ALL {
            assert!(
                cta.html().contains(&format!(r#"href="{}""#, cta.href())),
                "{cta:?} template must link to {}",
                cta.href()
            );
        }
    }

    #[test]
    fn test_templates_match_house_markup() {
        assert_eq!(
            CtaKind::Services.html(),
            r#"<div id="explore-services-cta" style="margin: 50px 0; padding: 20px; background: #f9fafb; text-align: center; border: 1px solid #e5e7eb;"><a href="https://regicare.uk/services" style="color:#E6399B; font-weight:bold; text-decoration:none;">Take a look at all the services we offer →</a></div>"#
        );
        assert_eq!(
            CtaKind::Copilot.html(),
            r#"<div class="co-pilot-cta" style="margin: 50px 0; padding: 20px; background: #fdf2f8; text-align: center; border: 2px solid #fce7f3;"><a href="https://regicare.uk/care-co-pilot/" style="color:#E6399B; font-weight:bold; text-decoration:none;">Feeling stuck? Try our Care Co-Pilot advisory service for free →</a></div>"#
        );
        assert_eq!(
            CtaKind::Forecast.html(),
            r#"<div id="forecast-cta" style="margin: 50px 0; padding: 20px; background: #eff6ff; text-align: center; border: 1px solid #dbeafe;"><a href="https://regicare.uk/forecast-builder/" style="color:#2563eb; font-weight:bold; text-decoration:none;">Plan your financial future with our Forecast Builder →</a></div>"#
        );
        assert_eq!(
            CtaKind::Book.html(),
            r#"<div id="book-call-cta" style="margin: 50px 0; padding: 20px; background: #f0fdf4; text-align: center; border: 1px solid #dcfce7;"><a href="https://regicare.uk/book-a-call" style="color:#E6399B; font-weight:bold; text-decoration:none;">Ready to move forward? Book a call with us today →</a></div>"#
        );
    }

    #[test]
    fn test_templates_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.html(), b.html());
            }
        }
    }

    #[test]
    fn test_injection_table() {
        assert_eq!(CtaKind::after_section(0), Some(CtaKind::Services));
        assert_eq!(CtaKind::after_section(1), Some(CtaKind::Forecast));
        assert_eq!(CtaKind::after_section(2), Some(CtaKind::Copilot));
        assert_eq!(CtaKind::after_section(3), None);
        assert_eq!(CtaKind::after_section(100), None);
    }
}
