//! Check for footnotes and endnotes.

use a11y_check_core::document::NoteKind;
use a11y_check_core::{
    CheckError, DocumentCheck, DocumentContext, IssueKind, IssueObject, IssueSink, Severity,
};

/// Check name for footnote-endnote.
pub const NAME: &str = "footnote-endnote";

/// Reports every footnote and endnote; they are hard to reach with a screen
/// reader.
#[derive(Debug, Clone, Default)]
pub struct FootnoteEndnote;

impl FootnoteEndnote {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentCheck for FootnoteEndnote {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Footnotes and endnotes should be avoided"
    }

    fn check_document(
        &mut self,
        ctx: &DocumentContext<'_>,
        sink: &mut IssueSink<'_>,
    ) -> Result<(), CheckError> {
        for note in &ctx.document().notes {
            let (message, kind, object) = match note.kind {
                NoteKind::Footnote => (
                    "Avoid footnotes.",
                    IssueKind::AvoidFootnotes,
                    IssueObject::Footnote,
                ),
                NoteKind::Endnote => (
                    "Avoid endnotes.",
                    IssueKind::AvoidEndnotes,
                    IssueObject::Endnote,
                ),
            };
            sink.add_issue(message, kind, Severity::Warning)
                .set_object(object);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{kinds, run_document_check};
    use a11y_check_core::document::{Document, Note};

    #[test]
    fn test_one_issue_per_note() {
        let note = |kind| Note {
            kind,
            blocks: Vec::new(),
        };
        let doc = Document {
            notes: vec![
                note(NoteKind::Footnote),
                note(NoteKind::Endnote),
                note(NoteKind::Footnote),
            ],
            ..Document::default()
        };
        let issues = run_document_check(&mut FootnoteEndnote::new(), &doc);
        assert_eq!(
            kinds(&issues),
            vec![
                IssueKind::AvoidFootnotes,
                IssueKind::AvoidEndnotes,
                IssueKind::AvoidFootnotes
            ]
        );
    }
}
