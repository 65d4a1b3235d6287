//! Check presets and scanner assembly.

use crate::{
    BlinkingText, ContentControl, DirectFormatting, DocumentBackground, DocumentLanguage,
    DocumentTitle, EmptyNumberedLine, FakeCaption, FakeFootnote, FloatingText, FootnoteEndnote,
    HeadingOrder, Hyperlink, ManualNumbering, NewlineSpacing, NoAltText, NonInteractiveForm,
    SpaceSpacing, TableFormatting, TableHeading, TableMergeSplit, TextContrast,
};
use a11y_check_core::{Config, DocumentCheckBox, NodeCheckBox, Scanner, DRAWING_OBJECTS};

/// Preset check selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// Every built-in check.
    #[default]
    Full,
    /// The checks behind the most common blockers: alternative text, link
    /// quality, contrast, table and heading structure, document language
    /// and title. Style advice such as spacing or direct formatting is left
    /// out.
    Essential,
}

impl Preset {
    /// Looks up a preset by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "full" => Some(Self::Full),
            "essential" => Some(Self::Essential),
            _ => None,
        }
    }

    /// Configuration name of the preset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Essential => "essential",
        }
    }

    /// The preset named in `config`, or [`Preset::Full`].
    ///
    /// Unknown names fall back to the full preset.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        config
            .preset
            .as_deref()
            .and_then(Self::from_name)
            .unwrap_or_default()
    }

    /// Node checks of this preset in registration order.
    #[must_use]
    pub fn node_checks(self, config: &Config) -> Vec<NodeCheckBox> {
        match self {
            Self::Full => all_node_checks(config),
            Self::Essential => vec![
                Box::new(NoAltText::new()),
                Box::new(hyperlink(config)),
                Box::new(text_contrast(config)),
                Box::new(TableHeading::new()),
                Box::new(HeadingOrder::new()),
            ],
        }
    }

    /// Document checks of this preset in registration order.
    #[must_use]
    pub fn document_checks(self, _config: &Config) -> Vec<DocumentCheckBox> {
        match self {
            Self::Full => all_document_checks(),
            Self::Essential => vec![Box::new(DocumentLanguage::new()), Box::new(DocumentTitle::new())],
        }
    }

    /// Builds a scanner running this preset under `config`.
    #[must_use]
    pub fn scanner(self, config: &Config) -> Scanner {
        let mut builder = Scanner::builder();
        for check in self.document_checks(config) {
            builder = builder.document_check_box(check);
        }
        for check in self.node_checks(config) {
            builder = builder.node_check_box(check);
        }
        builder.config(config.clone()).build()
    }
}

fn hyperlink(config: &Config) -> Hyperlink {
    config
        .check_config(crate::hyperlink::NAME)
        .map_or_else(Hyperlink::new, Hyperlink::from_config)
}

fn text_contrast(config: &Config) -> TextContrast {
    config
        .check_config(crate::text_contrast::NAME)
        .map_or_else(TextContrast::new, TextContrast::from_config)
}

/// Every node check in registration order, configured from `config`.
#[must_use]
pub fn all_node_checks(config: &Config) -> Vec<NodeCheckBox> {
    vec![
        Box::new(NoAltText::new()),
        Box::new(TableMergeSplit::new()),
        Box::new(TableFormatting::new()),
        Box::new(ManualNumbering::new()),
        Box::new(hyperlink(config)),
        Box::new(text_contrast(config)),
        Box::new(DirectFormatting::new()),
        Box::new(NewlineSpacing::new()),
        Box::new(SpaceSpacing::new()),
        Box::new(FakeFootnote::new()),
        Box::new(FakeCaption::new()),
        Box::new(BlinkingText::new()),
        Box::new(NonInteractiveForm::new()),
        Box::new(FloatingText::new()),
        Box::new(TableHeading::new()),
        Box::new(HeadingOrder::new()),
        Box::new(ContentControl::new()),
        Box::new(EmptyNumberedLine::new()),
    ]
}

/// Every document check in registration order.
#[must_use]
pub fn all_document_checks() -> Vec<DocumentCheckBox> {
    vec![
        Box::new(DocumentLanguage::new()),
        Box::new(DocumentTitle::new()),
        Box::new(FootnoteEndnote::new()),
        Box::new(DocumentBackground::new()),
    ]
}

/// Names and descriptions of every check, including the drawing-object
/// pass built into the scanner.
#[must_use]
pub fn check_catalog() -> Vec<(&'static str, &'static str)> {
    let config = Config::default();
    let mut catalog: Vec<_> = all_document_checks()
        .iter()
        .map(|check| (check.name(), check.description()))
        .collect();
    catalog.extend(
        all_node_checks(&config)
            .iter()
            .map(|check| (check.name(), check.description())),
    );
    catalog.push((DRAWING_OBJECTS, "Drawing objects should be accessible"));
    catalog
}
