//! Check for a missing document language.
//!
//! # Rationale
//!
//! Screen readers pick pronunciation rules from the text language. Without
//! a document language every word is read with the reader's own defaults.
//!
//! # Detected Patterns
//!
//! - Default language unset, or set to "no language" (`zxx`, `none`)
//! - Paragraph styles that explicitly set "no language"
//!
//! Style languages are only checked once the document language is set.

use a11y_check_core::document::style::is_no_language;
use a11y_check_core::{
    CheckError, DocumentCheck, DocumentContext, IssueKind, IssueObject, IssueSink, Severity,
};

/// Check name for document-language.
pub const NAME: &str = "document-language";

/// Flags a missing default language and styles without a language.
#[derive(Debug, Clone, Default)]
pub struct DocumentLanguage;

impl DocumentLanguage {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentCheck for DocumentLanguage {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Documents and styles should declare a language"
    }

    fn check_document(
        &mut self,
        ctx: &DocumentContext<'_>,
        sink: &mut IssueSink<'_>,
    ) -> Result<(), CheckError> {
        let styles = ctx.styles();
        if is_no_language(styles.default_language()) {
            sink.add_issue(
                "Document default language is not set.",
                IssueKind::DocumentLanguage,
                Severity::Error,
            )
            .set_object(IssueObject::Document);
            return Ok(());
        }

        for style in &styles.paragraph_styles {
            let Some(language) = style.char_format.language.as_deref() else {
                continue;
            };
            if is_no_language(Some(language)) {
                sink.add_issue(
                    format!("Style \"{}\" has no language set.", style.name),
                    IssueKind::StyleLanguage,
                    Severity::Warning,
                )
                .set_object(IssueObject::ParagraphStyle)
                .set_object_id(&style.name);
            }
        }
        Ok(())
    }
}
