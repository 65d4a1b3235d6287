//! Context types for check execution.
//!
//! A [`DocumentContext`] flattens the document tree into scan nodes once per
//! scan. Checks then see one [`NodeContext`] at a time, with enough of the
//! surroundings (area, enclosing sections and tables, neighbours) to make
//! context-aware decisions.

use serde::{Deserialize, Serialize};

use crate::document::{
    AnchoredObject, Block, Document, Graphic, HeaderFooterKind, NoteKind, OleObject, PageStyle,
    Paragraph, SectionKind, Shape, StyleSheet, Table, TextFrame,
};

/// Position of a node in scan order; stable for one document snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The text flow a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    /// Main text.
    Body,
    /// Page header.
    Header,
    /// Page footer.
    Footer,
    /// Footnote text.
    Footnote,
    /// Endnote text.
    Endnote,
}

/// What a scan node is.
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    /// A paragraph.
    Paragraph(&'a Paragraph),
    /// A table, visited before its cells.
    Table(&'a Table),
    /// An image.
    Graphic(&'a Graphic),
    /// An embedded object.
    Ole(&'a OleObject),
}

/// One element of the flattened document.
#[derive(Debug, Clone)]
pub struct ScanNode<'a> {
    /// Position in scan order.
    pub id: NodeId,
    /// The element itself.
    pub kind: NodeKind<'a>,
    /// Text flow the element lives in.
    pub area: Area,
    /// Kinds of the enclosing sections, outermost first.
    pub sections: Vec<SectionKind>,
    /// Innermost table whose cell contains this element.
    pub table: Option<&'a Table>,
    /// Innermost text frame containing this element.
    pub frame: Option<&'a TextFrame>,
    /// Name of the page style in effect.
    pub page_style: Option<&'a str>,
}

impl ScanNode<'_> {
    fn same_flow(&self, other: &Self) -> bool {
        self.area == other.area
            && opt_ptr_eq(self.table, other.table)
            && opt_ptr_eq(self.frame, other.frame)
    }
}

fn opt_ptr_eq<T>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => std::ptr::eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// A drawing shape and the paragraph node it is anchored at.
#[derive(Debug, Clone, Copy)]
pub struct AnchoredShape<'a> {
    /// Node of the anchoring paragraph.
    pub anchor: NodeId,
    /// Text flow of the anchoring paragraph.
    pub area: Area,
    /// The shape.
    pub shape: &'a Shape,
}

#[derive(Clone)]
struct Scope<'a> {
    area: Area,
    sections: Vec<SectionKind>,
    table: Option<&'a Table>,
    frame: Option<&'a TextFrame>,
    page_style: Option<&'a str>,
}

impl<'a> Scope<'a> {
    fn new(area: Area, page_style: Option<&'a str>) -> Self {
        Self {
            area,
            sections: Vec::new(),
            table: None,
            frame: None,
            page_style,
        }
    }
}

#[derive(Default)]
struct Flattener<'a> {
    nodes: Vec<ScanNode<'a>>,
    shapes: Vec<AnchoredShape<'a>>,
    body_page_style: Option<&'a str>,
}

impl<'a> Flattener<'a> {
    fn push(&mut self, kind: NodeKind<'a>, scope: &Scope<'a>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let page_style = if scope.area == Area::Body {
            self.body_page_style
        } else {
            scope.page_style
        };
        self.nodes.push(ScanNode {
            id,
            kind,
            area: scope.area,
            sections: scope.sections.clone(),
            table: scope.table,
            frame: scope.frame,
            page_style,
        });
        id
    }

    fn blocks(&mut self, blocks: &'a [Block], scope: &Scope<'a>) {
        for block in blocks {
            match block {
                Block::Paragraph(paragraph) => self.paragraph(paragraph, scope),
                Block::Table(table) => {
                    self.push(NodeKind::Table(table), scope);
                    let inner = Scope {
                        table: Some(table),
                        ..scope.clone()
                    };
                    for cell in table.cells() {
                        self.blocks(&cell.blocks, &inner);
                    }
                }
                Block::Section(section) => {
                    let mut inner = scope.clone();
                    inner.sections.push(section.kind);
                    self.blocks(&section.blocks, &inner);
                }
            }
        }
    }

    fn paragraph(&mut self, paragraph: &'a Paragraph, scope: &Scope<'a>) {
        if scope.area == Area::Body {
            if let Some(page_style) = paragraph.page_style.as_deref() {
                self.body_page_style = Some(page_style);
            }
        }
        let id = self.push(NodeKind::Paragraph(paragraph), scope);

        for object in &paragraph.anchored {
            match object {
                AnchoredObject::Graphic(graphic) => {
                    self.push(NodeKind::Graphic(graphic), scope);
                }
                AnchoredObject::Ole(ole) => {
                    self.push(NodeKind::Ole(ole), scope);
                }
                AnchoredObject::Shape(shape) => self.shapes.push(AnchoredShape {
                    anchor: id,
                    area: scope.area,
                    shape,
                }),
                AnchoredObject::Frame(_) => {}
            }
        }
        for object in &paragraph.anchored {
            if let AnchoredObject::Frame(frame) = object {
                let inner = Scope {
                    frame: Some(frame),
                    ..scope.clone()
                };
                self.blocks(&frame.blocks, &inner);
            }
        }
    }
}

/// The flattened view of one document, shared by all checks of a scan.
#[derive(Debug)]
pub struct DocumentContext<'a> {
    document: &'a Document,
    nodes: Vec<ScanNode<'a>>,
    shapes: Vec<AnchoredShape<'a>>,
}

impl<'a> DocumentContext<'a> {
    /// Flattens `document`: body first, then headers and footers, then notes.
    #[must_use]
    pub fn new(document: &'a Document) -> Self {
        let mut flat = Flattener {
            body_page_style: document.default_page_style(),
            ..Flattener::default()
        };
        flat.blocks(&document.body, &Scope::new(Area::Body, None));

        for region in &document.headers_footers {
            let area = match region.kind {
                HeaderFooterKind::Header => Area::Header,
                HeaderFooterKind::Footer => Area::Footer,
            };
            flat.blocks(
                &region.blocks,
                &Scope::new(area, Some(region.page_style.as_str())),
            );
        }

        let default_page = document.default_page_style();
        for note in &document.notes {
            let area = match note.kind {
                NoteKind::Footnote => Area::Footnote,
                NoteKind::Endnote => Area::Endnote,
            };
            flat.blocks(&note.blocks, &Scope::new(area, default_page));
        }

        Self {
            document,
            nodes: flat.nodes,
            shapes: flat.shapes,
        }
    }

    /// The underlying document.
    #[must_use]
    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// The document's styles.
    #[must_use]
    pub fn styles(&self) -> &'a StyleSheet {
        &self.document.styles
    }

    /// All nodes in scan order.
    #[must_use]
    pub fn nodes(&self) -> &[ScanNode<'a>] {
        &self.nodes
    }

    /// Drawing shapes anchored at paragraphs, in scan order.
    #[must_use]
    pub fn shapes(&self) -> &[AnchoredShape<'a>] {
        &self.shapes
    }

    /// Drawing shapes anchored at the paragraph `id`.
    #[must_use]
    pub fn shapes_at(&self, id: NodeId) -> &[AnchoredShape<'a>] {
        // Shapes are collected in scan order, so anchors never decrease.
        let start = self.shapes.partition_point(|shape| shape.anchor < id);
        let end = self.shapes.partition_point(|shape| shape.anchor <= id);
        &self.shapes[start..end]
    }

    /// Nearest later paragraph in scan order, in any text flow.
    ///
    /// Tables and anchored objects in between are skipped.
    #[must_use]
    pub fn following_paragraph(&self, id: NodeId) -> Option<&'a Paragraph> {
        self.nodes
            .get(id.0 + 1..)?
            .iter()
            .find_map(|other| match other.kind {
                NodeKind::Paragraph(p) => Some(p),
                _ => None,
            })
    }

    /// Looks up a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&ScanNode<'a>> {
        self.nodes.get(id.0)
    }

    /// The node right after `id` in scan order.
    #[must_use]
    pub fn next(&self, id: NodeId) -> Option<&ScanNode<'a>> {
        self.nodes.get(id.0 + 1)
    }

    /// Nearest earlier paragraph in the same text flow.
    #[must_use]
    pub fn previous_paragraph(&self, id: NodeId) -> Option<&'a Paragraph> {
        let node = self.node(id)?;
        self.nodes[..id.0]
            .iter()
            .rev()
            .filter(|other| other.same_flow(node))
            .find_map(|other| match other.kind {
                NodeKind::Paragraph(p) => Some(p),
                _ => None,
            })
    }

    /// Nearest later paragraph in the same text flow.
    #[must_use]
    pub fn next_paragraph(&self, id: NodeId) -> Option<&'a Paragraph> {
        let node = self.node(id)?;
        self.nodes[id.0 + 1..]
            .iter()
            .filter(|other| other.same_flow(node))
            .find_map(|other| match other.kind {
                NodeKind::Paragraph(p) => Some(p),
                _ => None,
            })
    }

    /// Context for one node.
    #[must_use]
    pub fn node_context(&self, id: NodeId) -> Option<NodeContext<'_>> {
        self.node(id).map(|node| NodeContext {
            document: self,
            node,
        })
    }

    /// Contexts for all nodes in scan order.
    pub fn contexts(&self) -> impl Iterator<Item = NodeContext<'_>> {
        self.nodes.iter().map(move |node| NodeContext {
            document: self,
            node,
        })
    }
}

/// Context provided to node checks.
#[derive(Debug, Clone, Copy)]
pub struct NodeContext<'a> {
    document: &'a DocumentContext<'a>,
    node: &'a ScanNode<'a>,
}

impl<'a> NodeContext<'a> {
    /// The node's id.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.node.id
    }

    /// The node itself.
    #[must_use]
    pub fn node(&self) -> &'a ScanNode<'a> {
        self.node
    }

    /// What the node is.
    #[must_use]
    pub fn kind(&self) -> NodeKind<'a> {
        self.node.kind
    }

    /// The whole-document view.
    #[must_use]
    pub fn document_context(&self) -> &'a DocumentContext<'a> {
        self.document
    }

    /// The underlying document.
    #[must_use]
    pub fn document(&self) -> &'a Document {
        self.document.document
    }

    /// The document's styles.
    #[must_use]
    pub fn styles(&self) -> &'a StyleSheet {
        &self.document.document.styles
    }

    /// The node as a paragraph.
    #[must_use]
    pub fn paragraph(&self) -> Option<&'a Paragraph> {
        match self.node.kind {
            NodeKind::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// The node as a table.
    #[must_use]
    pub fn table(&self) -> Option<&'a Table> {
        match self.node.kind {
            NodeKind::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Text flow of the node.
    #[must_use]
    pub fn area(&self) -> Area {
        self.node.area
    }

    /// Whether any enclosing section is a table of contents.
    #[must_use]
    pub fn in_table_of_contents(&self) -> bool {
        self.node.sections.contains(&SectionKind::TableOfContents)
    }

    /// Whether the node sits in a page header or footer.
    #[must_use]
    pub fn in_header_footer(&self) -> bool {
        matches!(self.node.area, Area::Header | Area::Footer)
    }

    /// Whether the node sits inside a table cell.
    #[must_use]
    pub fn in_table(&self) -> bool {
        self.node.table.is_some()
    }

    /// The page style in effect at the node.
    #[must_use]
    pub fn page_style(&self) -> Option<&'a PageStyle> {
        self.node
            .page_style
            .and_then(|name| self.styles().page_style(name))
    }

    /// Next paragraph in scan order, skipping tables and anchored objects.
    #[must_use]
    pub fn following_paragraph(&self) -> Option<&'a Paragraph> {
        self.document.following_paragraph(self.node.id)
    }

    /// Nearest earlier paragraph in the same text flow.
    #[must_use]
    pub fn previous_paragraph(&self) -> Option<&'a Paragraph> {
        self.document.previous_paragraph(self.node.id)
    }

    /// Nearest later paragraph in the same text flow.
    #[must_use]
    pub fn next_paragraph(&self) -> Option<&'a Paragraph> {
        self.document.next_paragraph(self.node.id)
    }
}
