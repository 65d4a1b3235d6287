//! Check for hyperlinks that are hard to understand out of context.
//!
//! # Rationale
//!
//! Screen reader users often jump from link to link. A link read as a raw
//! address, as "here", or with no name at all tells them nothing about the
//! target. Links in headers and footers are repeated on every page and are
//! unreachable from the reading order.
//!
//! # Detected Patterns
//!
//! - Link text that is the link address itself
//! - Link text of `short_text_length` characters or fewer
//! - Links without an accessible name
//! - Links, cross-references and citations in headers and footers
//!
//! # Configuration
//!
//! - `short_text_length`: maximum length of "too short" link text (default: 5)

use a11y_check_core::document::{FieldKind, Hyperlink as Link, Paragraph};
use a11y_check_core::utils::char_len;
use a11y_check_core::{
    CheckConfig, CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};
use url::Url;

/// Check name for hyperlink.
pub const NAME: &str = "hyperlink";

/// Default maximum length of link text considered too short.
pub const DEFAULT_SHORT_TEXT_LENGTH: usize = 5;

/// Whether the visible text is just the link target written out.
fn text_is_url(text: &str, url: &str) -> bool {
    if text == url {
        return true;
    }
    match (Url::parse(text), Url::parse(url)) {
        (Ok(text), Ok(url)) => text == url,
        _ => false,
    }
}

/// Flags unclear hyperlink text, unnamed links and links in headers or footers.
#[derive(Debug, Clone)]
pub struct Hyperlink {
    /// Link texts up to this many characters are reported as too short.
    pub short_text_length: usize,
}

impl Default for Hyperlink {
    fn default() -> Self {
        Self::new()
    }
}

impl Hyperlink {
    /// Creates a new check with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            short_text_length: DEFAULT_SHORT_TEXT_LENGTH,
        }
    }

    /// Creates a check from its configuration table.
    #[must_use]
    pub fn from_config(config: &CheckConfig) -> Self {
        let default = i64::try_from(DEFAULT_SHORT_TEXT_LENGTH).unwrap_or(i64::MAX);
        let length = config.get_int("short_text_length", default);
        Self::new().short_text_length(usize::try_from(length).unwrap_or(0))
    }

    /// Sets the maximum length of too-short link text.
    #[must_use]
    pub fn short_text_length(mut self, length: usize) -> Self {
        self.short_text_length = length;
        self
    }

    fn check_link(
        &self,
        ctx: &NodeContext<'_>,
        paragraph: &Paragraph,
        link: &Link,
        sink: &mut IssueSink<'_>,
    ) {
        let text = paragraph.slice(link.start, link.end).trim();

        if text_is_url(text, &link.url) {
            sink.add_issue(
                format!("Hyperlink text is the same as the link address \"{}\".", link.url),
                IssueKind::HyperlinkIsText,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_range(link.start, link.end)
            .set_object(IssueObject::Link);
        } else if char_len(text) <= self.short_text_length {
            sink.add_issue(
                format!("Hyperlink text \"{text}\" is too short."),
                IssueKind::HyperlinkShort,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_range(link.start, link.end)
            .set_object(IssueObject::Link);
        }

        if link.name.as_deref().map_or(true, |name| name.trim().is_empty()) {
            sink.add_issue(
                format!("Hyperlink \"{}\" has no name.", link.url),
                IssueKind::HyperlinkNoName,
                Severity::Error,
            )
            .set_node(ctx.id())
            .set_range(link.start, link.end)
            .set_object(IssueObject::Link);
        }

        if ctx.in_header_footer() {
            sink.add_issue(
                "Avoid hyperlinks in headers and footers.",
                IssueKind::LinkInHeaderFooter,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_range(link.start, link.end)
            .set_object(IssueObject::Link);
        }
    }
}

impl NodeCheck for Hyperlink {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Hyperlink text should describe the target"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };

        for link in &paragraph.hyperlinks {
            self.check_link(ctx, paragraph, link, sink);
        }

        if ctx.in_header_footer() {
            for field in paragraph
                .fields
                .iter()
                .filter(|f| matches!(f.kind, FieldKind::Reference | FieldKind::Bibliography))
            {
                sink.add_issue(
                    "Avoid cross-references and citations in headers and footers.",
                    IssueKind::LinkInHeaderFooter,
                    Severity::Warning,
                )
                .set_node(ctx.id())
                .set_range(field.start, field.end)
                .set_object(IssueObject::Text);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{kinds, run_node_check};
    use a11y_check_core::document::{Block, Document, Field, HeaderFooter, HeaderFooterKind};

    fn linked(text: &str, start: usize, end: usize, url: &str, name: Option<&str>) -> Paragraph {
        Paragraph {
            hyperlinks: vec![Link {
                start,
                end,
                url: url.into(),
                name: name.map(Into::into),
            }],
            ..Paragraph::new(text)
        }
    }

    fn doc(paragraphs: Vec<Paragraph>) -> Document {
        Document {
            body: paragraphs.into_iter().map(Block::Paragraph).collect(),
            ..Document::default()
        }
    }

    #[test]
    fn test_raw_url_text() {
        let d = doc(vec![linked(
            "See https://example.org/",
            4,
            24,
            "https://example.org",
            Some("Example"),
        )]);
        let issues = run_node_check(&mut Hyperlink::new(), &d);
        assert_eq!(kinds(&issues), vec![IssueKind::HyperlinkIsText]);
        assert_eq!(issues.iter().next().unwrap().location.start, Some(4));
    }

    #[test]
    fn test_short_text_and_missing_name() {
        let d = doc(vec![linked("Click here", 6, 10, "https://example.org", None)]);
        let issues = run_node_check(&mut Hyperlink::new(), &d);
        assert_eq!(
            kinds(&issues),
            vec![IssueKind::HyperlinkShort, IssueKind::HyperlinkNoName]
        );
        let severities: Vec<Severity> = issues.iter().map(|i| i.severity).collect();
        assert_eq!(severities, vec![Severity::Warning, Severity::Error]);
    }

    #[test]
    fn test_descriptive_link_passes() {
        let d = doc(vec![linked(
            "Read the annual report",
            9,
            22,
            "https://example.org/report",
            Some("Annual report"),
        )]);
        assert!(run_node_check(&mut Hyperlink::new(), &d).is_empty());
        let mut strict = Hyperlink::new().short_text_length(20);
        assert_eq!(
            kinds(&run_node_check(&mut strict, &d)),
            vec![IssueKind::HyperlinkShort]
        );
    }

    #[test]
    fn test_links_in_footer() {
        let mut footer = linked(
            "Contact us online",
            0,
            17,
            "https://example.org/contact",
            Some("Contact"),
        );
        footer.fields = vec![Field {
            start: 0,
            end: 7,
            kind: FieldKind::Reference,
        }];
        let d = Document {
            headers_footers: vec![HeaderFooter {
                kind: HeaderFooterKind::Footer,
                page_style: "Default".into(),
                blocks: vec![Block::Paragraph(footer)],
            }],
            ..Document::default()
        };
        let issues = run_node_check(&mut Hyperlink::new(), &d);
        assert_eq!(
            kinds(&issues),
            vec![IssueKind::LinkInHeaderFooter, IssueKind::LinkInHeaderFooter]
        );
    }

    #[test]
    fn test_from_config() {
        let config: CheckConfig = toml_config("short_text_length = 2");
        assert_eq!(Hyperlink::from_config(&config).short_text_length, 2);
    }

    fn toml_config(body: &str) -> CheckConfig {
        let config = a11y_check_core::Config::parse(&format!("[checks.hyperlink]\n{body}\n"))
            .unwrap();
        config.check_config(NAME).cloned().unwrap()
    }
}
