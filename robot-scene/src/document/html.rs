use std::fmt::Write;

use constants::document::SECTION_ATTRIBUTE;

use super::content::{ContentDocument, Section};

/// Render the content column: header, call to action, section grid and footer.
///
/// Every section element carries the section attribute. Unnumbered sections
/// carry an empty value so they never match a hotspot.
pub fn render_content_html(document: &ContentDocument) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"content-column\">");

    let _ = write!(
        html,
        "<header class=\"content-header\"><h1>{}</h1><p class=\"lede\">{} <span class=\"lede-emphasis\">{}</span></p></header>",
        escape_html(document.heading),
        escape_html(document.lede),
        escape_html(document.lede_emphasis),
    );

    let _ = write!(
        html,
        "<a class=\"call-to-action\" href=\"{}\"><span>{}</span><span class=\"call-to-action-arrow\" aria-hidden=\"true\">&rarr;</span></a>",
        escape_html(document.call_to_action.href),
        escape_html(document.call_to_action.label),
    );

    html.push_str("<div class=\"toc-grid\">");
    for section in &document.sections {
        render_section(&mut html, section);
    }
    html.push_str("</div>");

    let _ = write!(
        html,
        "<footer class=\"content-footer\"><p>{}</p></footer>",
        escape_html(document.footer)
    );

    html.push_str("</div>");
    html
}

fn render_section(html: &mut String, section: &Section) {
    let id = section.id();
    let id_value = id.as_ref().map_or("", |id| id.as_str());

    let _ = write!(
        html,
        "<div class=\"toc-section\" {}=\"{}\"><div class=\"toc-section-heading\"><h2>{}</h2><span class=\"toc-duration\">{}</span></div><div class=\"toc-items\">",
        SECTION_ATTRIBUTE,
        escape_html(id_value),
        escape_html(section.title),
        escape_html(section.duration.unwrap_or("")),
    );

    for item in &section.items {
        let _ = write!(
            html,
            "<a class=\"toc-item\" href=\"#\"><span class=\"toc-item-index\">{}.</span><span>{}</span></a>",
            escape_html(item.index_label),
            escape_html(item.display_label),
        );
    }

    html.push_str("</div></div>");
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::content::ContentDocument;
    use scraper::{Html, Selector};

    fn rendered() -> Html {
        Html::parse_fragment(&render_content_html(&ContentDocument::authored()))
    }

    #[test]
    fn power_section_is_addressable_by_attribute() {
        let html = rendered();
        let selector = Selector::parse("[data-section=\"6\"]").unwrap();
        let matches: Vec<_> = html.select(&selector).collect();

        assert_eq!(matches.len(), 1);
        let text: String = matches[0].text().collect();
        assert!(text.contains("6. Power"));
        assert!(text.contains("Batteries"));
    }

    #[test]
    fn every_section_carries_the_attribute() {
        let html = rendered();
        let sections = Selector::parse(".toc-section").unwrap();
        let with_attribute = Selector::parse(".toc-section[data-section]").unwrap();

        assert_eq!(html.select(&sections).count(), 9);
        assert_eq!(html.select(&with_attribute).count(), 9);
    }

    #[test]
    fn introduction_has_empty_identifier() {
        let html = rendered();
        let selector = Selector::parse("[data-section=\"\"]").unwrap();
        let text: String = html.select(&selector).next().unwrap().text().collect();
        assert!(text.contains("Introduction"));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(
            escape_html("Force/Torque <&> \"'"),
            "Force/Torque &lt;&amp;&gt; &quot;&#39;"
        );
        let html = render_content_html(&ContentDocument::authored());
        assert!(html.contains("Humanity&#39;s Last Machine"));
    }
}
