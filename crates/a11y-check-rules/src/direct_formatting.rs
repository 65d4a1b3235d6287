//! Check for direct formatting used to convey meaning.
//!
//! # Rationale
//!
//! Bold, color or size applied by hand is invisible to assistive
//! technology. Styles carry the same look plus a name the reader can query.
//!
//! # Detected Patterns
//!
//! - A run attribute that differs both from its character style and from
//!   the paragraph's resolved value
//! - A paragraph-wide character attribute that differs from the paragraph style
//! - Non-zero spacing above or below set directly on the paragraph
//!
//! One issue per paragraph; the offending attribute names are listed in
//! the issue's additional info.

use a11y_check_core::document::{CharFormat, CharProperty, Paragraph, StyleSheet};
use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for direct-formatting.
pub const NAME: &str = "direct-formatting";

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

fn spacing_differs(direct: Option<f32>, style: Option<f32>) -> bool {
    direct.is_some_and(|value| value != 0.0 && Some(value) != style)
}

/// Collects names of attributes that are set directly on `paragraph`.
fn direct_attributes(
    styles: &StyleSheet,
    paragraph: &Paragraph,
) -> Result<Vec<String>, CheckError> {
    let style_chars = styles.resolve_paragraph_chars(paragraph.style.as_deref())?;
    let mut paragraph_chars = paragraph.char_format.clone();
    paragraph_chars.inherit_from(&style_chars);

    let mut names = Vec::new();
    for property in CharProperty::ALL {
        if paragraph.char_format.is_set(property)
            && !paragraph.char_format.same_value(&style_chars, property)
        {
            push_unique(&mut names, property.label());
        }
    }

    for portion in paragraph.portions() {
        let char_style = match portion.char_style {
            Some(name) => styles.resolve_character_style(name)?,
            None => CharFormat::default(),
        };
        for property in CharProperty::ALL {
            if portion.format.is_set(property)
                && !portion.format.same_value(&char_style, property)
                && !portion.format.same_value(&paragraph_chars, property)
            {
                push_unique(&mut names, property.label());
            }
        }
    }

    let style_format = styles.resolve_paragraph_format(paragraph.style.as_deref())?;
    if spacing_differs(paragraph.format.upper_spacing, style_format.upper_spacing) {
        push_unique(&mut names, "Spacing Above");
    }
    if spacing_differs(paragraph.format.lower_spacing, style_format.lower_spacing) {
        push_unique(&mut names, "Spacing Below");
    }
    Ok(names)
}

/// Flags paragraphs carrying direct character or spacing formatting.
#[derive(Debug, Clone, Default)]
pub struct DirectFormatting;

impl DirectFormatting {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for DirectFormatting {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Use styles instead of direct formatting"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };
        let names = direct_attributes(ctx.styles(), paragraph)?;
        if !names.is_empty() {
            sink.add_issue(
                "Avoid direct formatting. Use styles instead.",
                IssueKind::DirectFormatting,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_range(0, paragraph.len())
            .set_object(IssueObject::TextFormatting)
            .set_additional_info(names);
        }
        Ok(())
    }
}
