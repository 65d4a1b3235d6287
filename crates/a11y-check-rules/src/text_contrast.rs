//! Check for text with too little contrast against its background.
//!
//! # Rationale
//!
//! WCAG 2.1 success criterion 1.4.3 asks for a contrast ratio of at least
//! 4.5:1 for normal text and 3:1 for large text (18pt, or 14pt bold).
//!
//! # Background Resolution
//!
//! The first color found wins: the text's own background, the paragraph
//! background (direct, then style), the solid fill of the page style in
//! effect, then white. Text with an automatic font color adapts to the
//! background and is never reported.
//!
//! # Configuration
//!
//! - `normal_text_ratio`: minimum ratio for normal text (default: 4.5)
//! - `large_text_ratio`: minimum ratio for large text (default: 3.0)

use a11y_check_core::document::{Color, Paragraph, Portion};
use a11y_check_core::utils::contrast::{is_large_text, LARGE_TEXT_RATIO, NORMAL_TEXT_RATIO};
use a11y_check_core::utils::contrast_ratio;
use a11y_check_core::{
    CheckConfig, CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for text-contrast.
pub const NAME: &str = "text-contrast";

/// Font size assumed when no level sets one.
const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Flags text portions whose contrast ratio is below the WCAG minimum.
#[derive(Debug, Clone)]
pub struct TextContrast {
    /// Minimum ratio for normal text.
    pub normal_text_ratio: f64,
    /// Minimum ratio for large text.
    pub large_text_ratio: f64,
}

impl Default for TextContrast {
    fn default() -> Self {
        Self::new()
    }
}

impl TextContrast {
    /// Creates a new check with the WCAG AA thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            normal_text_ratio: NORMAL_TEXT_RATIO,
            large_text_ratio: LARGE_TEXT_RATIO,
        }
    }

    /// Creates a check from its configuration table.
    #[must_use]
    pub fn from_config(config: &CheckConfig) -> Self {
        Self {
            normal_text_ratio: config.get_float("normal_text_ratio", NORMAL_TEXT_RATIO),
            large_text_ratio: config.get_float("large_text_ratio", LARGE_TEXT_RATIO),
        }
    }

    fn minimum(&self, size: f32, bold: bool) -> f64 {
        if is_large_text(size, bold) {
            self.large_text_ratio
        } else {
            self.normal_text_ratio
        }
    }

    fn check_portion(
        &self,
        ctx: &NodeContext<'_>,
        paragraph: &Paragraph,
        portion: &Portion<'_>,
        sink: &mut IssueSink<'_>,
    ) -> Result<(), CheckError> {
        let styles = ctx.styles();

        if let Some(direct) = portion.format.background {
            let style_background = match portion.char_style {
                Some(name) => styles.resolve_character_style(name)?.background,
                None => None,
            };
            if style_background != Some(direct) {
                sink.add_issue(
                    "Avoid direct formatting of the text background.",
                    IssueKind::DirectFormatting,
                    Severity::Warning,
                )
                .set_node(ctx.id())
                .set_range(portion.start, portion.end)
                .set_object(IssueObject::TextFormatting);
            }
        }

        let effective = styles.resolve_portion(paragraph, portion)?;
        let Some(foreground) = effective.color else {
            return Ok(());
        };
        let background = match effective.background {
            Some(color) => color,
            None => styles
                .resolve_paragraph_background(paragraph)?
                .or_else(|| ctx.page_style().and_then(|page| page.background()))
                .unwrap_or(Color::WHITE),
        };

        let ratio = contrast_ratio(foreground, background);
        let size = effective.size.unwrap_or(DEFAULT_FONT_SIZE);
        let bold = effective.weight.is_some_and(|w| w.is_bold());
        let minimum = self.minimum(size, bold);
        if ratio < minimum {
            sink.add_issue(
                "The text contrast is too low.",
                IssueKind::TextContrast,
                Severity::Error,
            )
            .set_node(ctx.id())
            .set_range(portion.start, portion.end)
            .set_object(IssueObject::Text)
            .set_additional_info(vec![
                format!("{foreground} on {background}"),
                format!("{ratio:.2}:1, needs {minimum:.1}:1"),
            ]);
        }
        Ok(())
    }
}

impl NodeCheck for TextContrast {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Text needs enough contrast against its background"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };
        for portion in paragraph.portions() {
            if paragraph.slice(portion.start, portion.end).trim().is_empty() {
                continue;
            }
            self.check_portion(ctx, paragraph, &portion, sink)?;
        }
        Ok(())
    }
}
