//! Check for text in floating frames.

use a11y_check_core::document::{Anchor, Block, Paragraph};
use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for floating-text.
pub const NAME: &str = "floating-text";

/// First non-empty paragraph of a frame's own text, in scan order.
fn first_text(blocks: &[Block]) -> Option<&Paragraph> {
    blocks.iter().find_map(|block| match block {
        Block::Paragraph(p) => (!p.is_empty()).then_some(p),
        Block::Table(table) => table.cells().find_map(|cell| first_text(&cell.blocks)),
        Block::Section(section) => first_text(&section.blocks),
    })
}

/// Flags text frames that are not anchored as characters; screen readers
/// may read them out of order.
///
/// A frame is reported once, at its first non-empty paragraph.
#[derive(Debug, Clone, Default)]
pub struct FloatingText;

impl FloatingText {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for FloatingText {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Text should stay in the reading order"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };
        let Some(frame) = ctx.node().frame else {
            return Ok(());
        };
        if frame.anchor == Anchor::AsCharacter
            || !first_text(&frame.blocks).is_some_and(|first| std::ptr::eq(first, paragraph))
        {
            return Ok(());
        }
        sink.add_issue(
            "Avoid floating text.",
            IssueKind::FloatingText,
            Severity::Warning,
        )
        .set_node(ctx.id())
        .set_object(IssueObject::Text)
        .set_object_id(&frame.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{body, kinds, para, run_node_check};
    use a11y_check_core::document::{AnchoredObject, TextFrame};

    fn framed(anchor: Anchor, blocks: Vec<Block>) -> Block {
        Block::Paragraph(Paragraph {
            anchored: vec![AnchoredObject::Frame(TextFrame {
                name: "Frame1".into(),
                anchor,
                blocks,
            })],
            ..Paragraph::new("Body text")
        })
    }

    #[test]
    fn test_floating_frame_reported_once() {
        let doc = body(vec![framed(
            Anchor::Page,
            vec![para(""), para("Side note"), para("More"), para("Even more")],
        )]);
        let issues = run_node_check(&mut FloatingText::new(), &doc);
        assert_eq!(kinds(&issues), vec![IssueKind::FloatingText]);
        let issue = issues.iter().next().unwrap();
        assert_eq!(issue.location.object_id.as_deref(), Some("Frame1"));
        // body text, empty line, then "Side note"
        assert_eq!(issue.location.node.map(|n| n.0), Some(2));
    }

    #[test]
    fn test_empty_floating_frame_passes() {
        let doc = body(vec![framed(Anchor::Page, vec![para("")])]);
        assert!(run_node_check(&mut FloatingText::new(), &doc).is_empty());
    }

    #[test]
    fn test_inline_frame_passes() {
        let doc = body(vec![framed(Anchor::AsCharacter, vec![para("Inline")])]);
        assert!(run_node_check(&mut FloatingText::new(), &doc).is_empty());
    }
}
