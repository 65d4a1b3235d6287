//! Checks for drawing objects anchored at paragraphs.
//!
//! Shapes are not scan nodes; the scanner hands the shapes anchored at a
//! paragraph to [`check_shape`] right after that paragraph's node checks.

use crate::context::AnchoredShape;
use crate::document::{Anchor, Shape, ShapeKind};
use crate::types::{IssueKind, IssueObject, IssueSink, Severity};

/// Name under which the drawing-object path is configured.
pub const DRAWING_OBJECTS: &str = "drawing-objects";

const FONTWORK_PREFIX: &str = "fontwork-";

fn needs_alt_text(shape: &Shape) -> bool {
    matches!(
        shape.kind,
        ShapeKind::CustomShape
            | ShapeKind::Text
            | ShapeKind::Media
            | ShapeKind::Group
            | ShapeKind::Graphic
            | ShapeKind::Form
    ) && !shape.decorative
        && shape.title.trim().is_empty()
        && shape.description.trim().is_empty()
}

fn is_fontwork(shape: &Shape) -> bool {
    shape.kind == ShapeKind::CustomShape
        && shape
            .geometry_type
            .as_deref()
            .is_some_and(|g| g.starts_with(FONTWORK_PREFIX))
}

/// Runs every drawing-object rule against one shape.
pub fn check_shape(anchored: &AnchoredShape<'_>, sink: &mut IssueSink<'_>) {
    let shape = anchored.shape;

    if is_fontwork(shape) {
        sink.add_issue(
            format!("Avoid Fontwork object \"{}\".", shape.name),
            IssueKind::Fontworks,
            Severity::Warning,
        )
        .set_node(anchored.anchor)
        .set_object(IssueObject::Shape)
        .set_object_id(&shape.name);
    }

    if shape.has_text() && shape.anchor != Anchor::AsCharacter {
        sink.add_issue(
            format!("Avoid floating text in shape \"{}\".", shape.name),
            IssueKind::FloatingText,
            Severity::Warning,
        )
        .set_node(anchored.anchor)
        .set_object(IssueObject::Shape)
        .set_object_id(&shape.name);
    }

    if needs_alt_text(shape) {
        sink.add_issue(
            format!("{} - No alternative text.", shape.name),
            IssueKind::NoAltShape,
            Severity::Error,
        )
        .set_node(anchored.anchor)
        .set_object(IssueObject::Shape)
        .set_object_id(&shape.name);
    }

    for link in &shape.hyperlinks {
        if link.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            sink.add_issue(
                format!("Hyperlink \"{}\" in shape has no name.", link.url),
                IssueKind::HyperlinkNoName,
                Severity::Error,
            )
            .set_node(anchored.anchor)
            .set_object(IssueObject::Shape)
            .set_object_id(&shape.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Area, NodeId};
    use crate::document::ShapeHyperlink;
    use crate::types::{IssueCollection, IssueOptions};

    fn run(shape: &Shape) -> IssueCollection {
        let options = IssueOptions::default();
        let mut issues = IssueCollection::new();
        let mut sink = IssueSink::new(&mut issues, &options);
        check_shape(
            &AnchoredShape {
                anchor: NodeId(2),
                area: Area::Body,
                shape,
            },
            &mut sink,
        );
        issues
    }

    fn kinds(issues: &IssueCollection) -> Vec<IssueKind> {
        issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn fontwork_without_alt_text() {
        let shape = Shape {
            name: "Fontwork 1".into(),
            kind: ShapeKind::CustomShape,
            geometry_type: Some("fontwork-wave".into()),
            text: Some("Wavy".into()),
            anchor: Anchor::AsCharacter,
            ..Shape::default()
        };
        let issues = run(&shape);
        assert_eq!(kinds(&issues), vec![IssueKind::Fontworks, IssueKind::NoAltShape]);
        assert_eq!(issues.iter().next().unwrap().location.node, Some(NodeId(2)));
    }

    #[test]
    fn floating_text_box() {
        let shape = Shape {
            name: "Text Box".into(),
            kind: ShapeKind::Text,
            description: "Sidebar".into(),
            text: Some("Side note".into()),
            anchor: Anchor::Paragraph,
            ..Shape::default()
        };
        assert_eq!(kinds(&run(&shape)), vec![IssueKind::FloatingText]);
    }

    #[test]
    fn decorative_and_lines_need_no_alt_text() {
        let decorative = Shape {
            kind: ShapeKind::CustomShape,
            decorative: true,
            ..Shape::default()
        };
        let line = Shape {
            kind: ShapeKind::Line,
            ..Shape::default()
        };
        assert!(run(&decorative).is_empty());
        assert!(run(&line).is_empty());
    }

    #[test]
    fn unnamed_shape_hyperlinks() {
        let shape = Shape {
            kind: ShapeKind::Line,
            hyperlinks: vec![
                ShapeHyperlink {
                    url: "https://example.org".into(),
                    name: None,
                },
                ShapeHyperlink {
                    url: "https://example.com".into(),
                    name: Some("Example".into()),
                },
            ],
            ..Shape::default()
        };
        let issues = run(&shape);
        assert_eq!(kinds(&issues), vec![IssueKind::HyperlinkNoName]);
        assert_eq!(issues.iter().next().unwrap().severity, Severity::Error);
    }
}
