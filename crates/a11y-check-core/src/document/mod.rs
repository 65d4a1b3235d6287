//! Read-only snapshot of a host document.
//!
//! The scanner never owns or mutates the host document. Hosts export the
//! parts the checks query (text, runs, styles, tables, anchored objects and
//! document properties) into this model, usually as JSON.

pub mod format;
pub mod style;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use format::{
    CharFormat, CharProperty, Color, Escapement, FontWeight, LineStyle, ParagraphFormat,
    ParseColorError, Relief,
};
pub use style::{CharacterStyle, PageFill, PageStyle, ParagraphStyle, StyleError, StyleSheet};

use crate::utils::text;

/// Errors raised while loading a document snapshot.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The snapshot file could not be read.
    #[error("Failed to read document {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON for this model.
    #[error("Failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Document-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    /// Document title property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A document snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Document properties.
    pub metadata: DocumentMetadata,
    /// Where the document lives; relative graphic links resolve against it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<PathBuf>,
    /// Style pools and defaults.
    pub styles: StyleSheet,
    /// Page style in effect at the start of the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_page_style: Option<String>,
    /// Main text flow.
    pub body: Vec<Block>,
    /// Header and footer regions of page styles.
    pub headers_footers: Vec<HeaderFooter>,
    /// Footnotes and endnotes.
    pub notes: Vec<Note>,
}

impl Document {
    /// Loads a JSON snapshot from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut document = Self::from_json(&content)?;
        if document.location.is_none() {
            document.location = Some(path.to_path_buf());
        }
        Ok(document)
    }

    /// Parses a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the document model.
    pub fn from_json(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Directory that relative links are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.location.as_deref().and_then(Path::parent)
    }

    /// Name of the first page style, used when nothing else applies.
    #[must_use]
    pub fn default_page_style(&self) -> Option<&str> {
        self.initial_page_style
            .as_deref()
            .or_else(|| self.styles.page_styles.first().map(|p| p.name.as_str()))
    }
}

/// A block-level element of a text flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph.
    Paragraph(Paragraph),
    /// A table.
    Table(Table),
    /// A section grouping other blocks.
    Section(Section),
}

/// Kind of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// An ordinary user section.
    #[default]
    Regular,
    /// Generated table of contents.
    TableOfContents,
    /// Generated alphabetical or other index.
    Index,
}

/// A named section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    /// Section name.
    pub name: String,
    /// Section kind.
    pub kind: SectionKind,
    /// Section content.
    pub blocks: Vec<Block>,
}

/// A character range within a paragraph's text (character indices, end exclusive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    /// First character.
    pub start: usize,
    /// One past the last character.
    pub end: usize,
}

/// A span of text with its own character attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRun {
    /// First character.
    pub start: usize,
    /// One past the last character.
    pub end: usize,
    /// Applied character style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_style: Option<String>,
    /// Directly applied attributes.
    pub format: CharFormat,
}

/// A hyperlink over a span of paragraph text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperlink {
    /// First character.
    pub start: usize,
    /// One past the last character.
    pub end: usize,
    /// Link target.
    pub url: String,
    /// Accessible name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Kind of a text field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Cross-reference to another place in the document.
    Reference,
    /// Bibliography citation.
    Bibliography,
    /// Page number.
    PageNumber,
    /// Date or time.
    Date,
    /// Anything else.
    #[default]
    Other,
}

/// A field embedded in paragraph text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    /// First character.
    pub start: usize,
    /// One past the last character.
    pub end: usize,
    /// Field kind.
    pub kind: FieldKind,
}

/// A paragraph of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paragraph {
    /// Paragraph text.
    pub text: String,
    /// Applied paragraph style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Outline level; `None` for body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_level: Option<u8>,
    /// Whether list numbering applies to this paragraph.
    pub numbered: bool,
    /// Page style switched to at this paragraph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_style: Option<String>,
    /// Directly applied paragraph attributes.
    pub format: ParagraphFormat,
    /// Directly applied character attributes covering the whole paragraph.
    pub char_format: CharFormat,
    /// Attribute runs, sorted and non-overlapping.
    pub runs: Vec<TextRun>,
    /// Hyperlinks.
    pub hyperlinks: Vec<Hyperlink>,
    /// Fields.
    pub fields: Vec<Field>,
    /// Content controls.
    pub content_controls: Vec<TextRange>,
    /// Objects anchored at this paragraph.
    pub anchored: Vec<AnchoredObject>,
}

impl Paragraph {
    /// Creates a plain paragraph.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        text::char_len(&self.text)
    }

    /// Whether the paragraph has no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text of a character range.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &str {
        text::char_slice(&self.text, start, end)
    }

    /// Splits the text into contiguous portions.
    ///
    /// Explicit runs are returned as-is (clamped to the text); gaps between
    /// them become portions without a character style or direct format.
    #[must_use]
    pub fn portions(&self) -> Vec<Portion<'_>> {
        static PLAIN: CharFormat = CharFormat {
            weight: None,
            italic: None,
            shadowed: None,
            color: None,
            size: None,
            font_family: None,
            emphasis_mark: None,
            underline: None,
            overline: None,
            strikethrough: None,
            relief: None,
            contour: None,
            no_hyphenation: None,
            background: None,
            escapement: None,
            blinking: None,
            language: None,
        };

        let len = self.len();
        let mut portions = Vec::new();
        let mut cursor = 0;
        for run in &self.runs {
            let start = run.start.clamp(cursor, len);
            let end = run.end.clamp(start, len);
            if start > cursor {
                portions.push(Portion {
                    start: cursor,
                    end: start,
                    char_style: None,
                    format: &PLAIN,
                });
            }
            if end > start {
                portions.push(Portion {
                    start,
                    end,
                    char_style: run.char_style.as_deref(),
                    format: &run.format,
                });
            }
            cursor = cursor.max(end);
        }
        if cursor < len {
            portions.push(Portion {
                start: cursor,
                end: len,
                char_style: None,
                format: &PLAIN,
            });
        }
        portions
    }
}

/// A contiguous piece of paragraph text with uniform attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portion<'a> {
    /// First character.
    pub start: usize,
    /// One past the last character.
    pub end: usize,
    /// Applied character style.
    pub char_style: Option<&'a str>,
    /// Directly applied attributes.
    pub format: &'a CharFormat,
}

/// A table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Set by the host when the table layout cannot be expressed as a grid.
    pub complex: bool,
    /// Rows, top to bottom.
    pub rows: Vec<Row>,
}

impl Table {
    /// Iterates over all cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    /// Cells, left to right.
    pub cells: Vec<Cell>,
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    /// Number of rows this cell spans.
    pub row_span: u32,
    /// Cell content.
    pub blocks: Vec<Block>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            row_span: 1,
            blocks: Vec::new(),
        }
    }
}

impl Cell {
    /// A cell holding nothing but empty paragraphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|block| match block {
            Block::Paragraph(p) => p.is_empty() && p.anchored.is_empty(),
            Block::Table(_) | Block::Section(_) => false,
        })
    }
}

/// How an object is anchored in the text flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Anchored to a paragraph, floating.
    #[default]
    Paragraph,
    /// Anchored to a character position, floating.
    Character,
    /// Placed inline as if it were a character.
    AsCharacter,
    /// Anchored to a page.
    Page,
    /// Anchored inside another frame.
    Frame,
}

/// Object anchored at a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnchoredObject {
    /// Embedded or linked image.
    Graphic(Graphic),
    /// Embedded OLE object.
    Ole(OleObject),
    /// Text frame with its own content.
    Frame(TextFrame),
    /// Drawing shape.
    Shape(Shape),
}

/// An image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Graphic {
    /// Object name.
    pub name: String,
    /// Alternative text title.
    pub title: String,
    /// Alternative text description.
    pub description: String,
    /// Marked as decorative.
    pub decorative: bool,
    /// Linked file (path or `file://` URL); `None` when embedded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Anchoring.
    pub anchor: Anchor,
}

/// An embedded OLE object (chart, formula, spreadsheet...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OleObject {
    /// Object name.
    pub name: String,
    /// Alternative text title.
    pub title: String,
    /// Alternative text description.
    pub description: String,
    /// Marked as decorative.
    pub decorative: bool,
    /// Anchoring.
    pub anchor: Anchor,
}

/// A text frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFrame {
    /// Frame name.
    pub name: String,
    /// Anchoring.
    pub anchor: Anchor,
    /// Frame content.
    pub blocks: Vec<Block>,
}

/// Kind of a drawing shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Custom (preset geometry) shape, including Fontwork.
    CustomShape,
    /// Text box shape.
    Text,
    /// Audio or video.
    Media,
    /// Group of shapes.
    Group,
    /// Image placed as a drawing object.
    Graphic,
    /// Form control.
    Form,
    /// Line or connector.
    Line,
    /// Anything else.
    #[default]
    Other,
}

/// A hyperlink inside a shape's text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeHyperlink {
    /// Link target.
    pub url: String,
    /// Accessible name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A drawing object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shape {
    /// Object name.
    pub name: String,
    /// Shape kind.
    pub kind: ShapeKind,
    /// Preset geometry of custom shapes (e.g. `fontwork-wave`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry_type: Option<String>,
    /// Alternative text title.
    pub title: String,
    /// Alternative text description.
    pub description: String,
    /// Marked as decorative.
    pub decorative: bool,
    /// Text inside the shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Anchoring.
    pub anchor: Anchor,
    /// Hyperlinks in the shape text.
    pub hyperlinks: Vec<ShapeHyperlink>,
}

impl Shape {
    /// Whether the shape carries any text.
    #[must_use]
    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Header or footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderFooterKind {
    /// Page header.
    #[default]
    Header,
    /// Page footer.
    Footer,
}

/// The header or footer of one page style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderFooter {
    /// Header or footer.
    pub kind: HeaderFooterKind,
    /// Owning page style.
    pub page_style: String,
    /// Content.
    pub blocks: Vec<Block>,
}

/// Footnote or endnote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    /// Footnote at the bottom of the page.
    #[default]
    Footnote,
    /// Endnote at the end of the document.
    Endnote,
}

/// A footnote or endnote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    /// Footnote or endnote.
    pub kind: NoteKind,
    /// Note content.
    pub blocks: Vec<Block>,
}
