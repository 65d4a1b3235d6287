//! Check for blinking text.

use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for blinking-text.
pub const NAME: &str = "blinking-text";

/// Flags every text portion whose effective format blinks.
#[derive(Debug, Clone, Default)]
pub struct BlinkingText;

impl BlinkingText {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for BlinkingText {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Text should not blink"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };
        for portion in paragraph.portions() {
            let format = ctx.styles().resolve_portion(paragraph, &portion)?;
            if format.blinking == Some(true) {
                sink.add_issue(
                    "Avoid blinking text.",
                    IssueKind::TextBlinking,
                    Severity::Warning,
                )
                .set_node(ctx.id())
                .set_range(portion.start, portion.end)
                .set_object(IssueObject::Text);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{kinds, ranges, run_node_check};
    use a11y_check_core::document::{
        Block, CharFormat, CharacterStyle, Document, Paragraph, TextRun,
    };

    #[test]
    fn test_blinking_from_character_style() {
        let mut doc = Document {
            body: vec![Block::Paragraph(Paragraph {
                runs: vec![TextRun {
                    start: 4,
                    end: 8,
                    char_style: Some("Flash".into()),
                    format: CharFormat::default(),
                }],
                ..Paragraph::new("New sale today")
            })],
            ..Document::default()
        };
        doc.styles.character_styles = vec![CharacterStyle {
            name: "Flash".into(),
            parent: None,
            format: CharFormat {
                blinking: Some(true),
                ..CharFormat::default()
            },
        }];
        let issues = run_node_check(&mut BlinkingText::new(), &doc);
        assert_eq!(kinds(&issues), vec![IssueKind::TextBlinking]);
        assert_eq!(ranges(&issues), vec![(Some(4), Some(8))]);
    }

    #[test]
    fn test_direct_off_overrides_style() {
        let mut doc = Document {
            body: vec![Block::Paragraph(Paragraph {
                char_format: CharFormat {
                    blinking: Some(false),
                    ..CharFormat::default()
                },
                ..Paragraph::new("Calm")
            })],
            ..Document::default()
        };
        doc.styles.defaults.blinking = Some(true);
        assert!(run_node_check(&mut BlinkingText::new(), &doc).is_empty());
    }
}
