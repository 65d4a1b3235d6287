//! Check for captions typed as plain paragraphs.
//!
//! A real caption is tied to its image or table and can be listed in an
//! index of figures. A paragraph that only looks like one is not.
//!
//! Reported when a paragraph starts with a caption label and it, or the
//! paragraph right before or after it, anchors exactly one object. Text in
//! a floating frame is left alone: that is where real captions live.

use a11y_check_core::document::{Anchor, AnchoredObject, Paragraph};
use a11y_check_core::utils::char_len;
use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for fake-caption.
pub const NAME: &str = "fake-caption";

const CAPTION_LABELS: &[&str] = &[
    "Caption",
    "Illustration",
    "Table",
    "Text",
    "Drawing",
    "Figure",
];

fn anchors_one_object(paragraph: &Paragraph) -> bool {
    paragraph
        .anchored
        .iter()
        .filter(|object| !matches!(object, AnchoredObject::Frame(_)))
        .count()
        == 1
}

/// Flags paragraphs that imitate a caption next to an object.
#[derive(Debug, Clone, Default)]
pub struct FakeCaption;

impl FakeCaption {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for FakeCaption {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Captions should use the caption feature"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };
        if paragraph.is_empty() {
            return Ok(());
        }
        if ctx
            .node()
            .frame
            .is_some_and(|frame| frame.anchor != Anchor::AsCharacter)
        {
            return Ok(());
        }
        let Some(label) = CAPTION_LABELS
            .iter()
            .find(|label| paragraph.text.starts_with(*label))
        else {
            return Ok(());
        };

        let near_object = anchors_one_object(paragraph)
            || ctx.previous_paragraph().is_some_and(anchors_one_object)
            || ctx.next_paragraph().is_some_and(anchors_one_object);
        if near_object {
            sink.add_issue(
                "Avoid fake captions.",
                IssueKind::FakeCaption,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_range(0, char_len(label))
            .set_object(IssueObject::Text);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{body, kinds, para, run_node_check};
    use a11y_check_core::document::{Block, Graphic, TextFrame};

    fn image_paragraph(count: usize) -> Block {
        Block::Paragraph(Paragraph {
            anchored: (0..count)
                .map(|i| {
                    AnchoredObject::Graphic(Graphic {
                        name: format!("Image{i}"),
                        ..Graphic::default()
                    })
                })
                .collect(),
            ..Paragraph::new("")
        })
    }

    #[test]
    fn test_caption_below_image() {
        let doc = body(vec![image_paragraph(1), para("Figure 1: Sales by region")]);
        let issues = run_node_check(&mut FakeCaption::new(), &doc);
        assert_eq!(kinds(&issues), vec![IssueKind::FakeCaption]);
        let issue = issues.iter().next().unwrap();
        assert_eq!((issue.location.start, issue.location.end), (Some(0), Some(6)));
    }

    #[test]
    fn test_no_single_object_nearby() {
        let doc = body(vec![
            image_paragraph(2),
            para("Figure 1: Two images"),
            para("Table of results"),
        ]);
        assert!(run_node_check(&mut FakeCaption::new(), &doc).is_empty());
    }

    #[test]
    fn test_floating_frame_is_skipped() {
        let mut anchor = Paragraph::new("");
        anchor.anchored = vec![
            AnchoredObject::Graphic(Graphic::default()),
            AnchoredObject::Frame(TextFrame {
                name: "Caption frame".into(),
                anchor: Anchor::Paragraph,
                blocks: vec![para("Figure 2: Inside a frame")],
            }),
        ];
        let doc = body(vec![Block::Paragraph(anchor)]);
        assert!(run_node_check(&mut FakeCaption::new(), &doc).is_empty());
    }
}
