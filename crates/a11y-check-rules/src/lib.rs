//! # a11y-check-rules
//!
//! Built-in accessibility checks for a11y-check.
//!
//! ## Node Checks
//!
//! Run once per scan node, in this order:
//!
//! | Name | Issue kinds |
//! |------|-------------|
//! | `no-alt-text` | `no-alt-graphic`, `no-alt-ole`, `linked-graphic` |
//! | `table-merge-split` | `table-merge-split` |
//! | `table-formatting` | `table-formatting` |
//! | `manual-numbering` | `manual-numbering` |
//! | `hyperlink` | `hyperlink-is-text`, `hyperlink-short`, `hyperlink-no-name`, `link-in-header-footer` |
//! | `text-contrast` | `text-contrast`, `direct-formatting` |
//! | `direct-formatting` | `direct-formatting` |
//! | `newline-spacing` | `text-new-lines` |
//! | `space-spacing` | `text-spaces`, `text-tabs` |
//! | `fake-footnote` | `fake-footnote` |
//! | `fake-caption` | `fake-caption` |
//! | `blinking-text` | `text-blinking` |
//! | `non-interactive-forms` | `non-interactive-forms` |
//! | `floating-text` | `floating-text` |
//! | `table-heading` | `table-headings` |
//! | `heading-order` | `heading-order`, `heading-start` |
//! | `content-control` | `content-control` |
//! | `empty-numbered-line` | `text-empty-numbered-paragraph` |
//!
//! ## Document Checks
//!
//! | Name | Issue kinds |
//! |------|-------------|
//! | `document-language` | `document-language`, `style-language` |
//! | `document-title` | `document-title` |
//! | `footnote-endnote` | `avoid-footnotes`, `avoid-endnotes` |
//! | `document-background` | `document-background` |
//!
//! ## Usage
//!
//! ```ignore
//! use a11y_check_core::{Config, Scanner};
//! use a11y_check_rules::{HeadingOrder, Hyperlink, Preset};
//!
//! let mut scanner = Scanner::builder()
//!     .node_check(Hyperlink::new().short_text_length(3))
//!     .node_check(HeadingOrder::new())
//!     .build();
//!
//! // Or everything at once:
//! let mut scanner = Preset::Full.scanner(&Config::default());
//! let issues = scanner.scan(&document);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod blinking_text;
pub mod content_control;
pub mod direct_formatting;
pub mod document_background;
pub mod document_language;
pub mod document_title;
pub mod empty_numbered_line;
pub mod fake_caption;
pub mod fake_footnote;
pub mod floating_text;
pub mod footnote_endnote;
pub mod heading_order;
pub mod hyperlink;
pub mod manual_numbering;
pub mod newline_spacing;
pub mod no_alt_text;
pub mod non_interactive_form;
mod presets;
pub mod space_spacing;
pub mod table_formatting;
pub mod table_heading;
pub mod table_merge_split;
pub mod text_contrast;

#[cfg(test)]
mod testing;

pub use blinking_text::BlinkingText;
pub use content_control::ContentControl;
pub use direct_formatting::DirectFormatting;
pub use document_background::DocumentBackground;
pub use document_language::DocumentLanguage;
pub use document_title::DocumentTitle;
pub use empty_numbered_line::EmptyNumberedLine;
pub use fake_caption::FakeCaption;
pub use fake_footnote::FakeFootnote;
pub use floating_text::FloatingText;
pub use footnote_endnote::FootnoteEndnote;
pub use heading_order::HeadingOrder;
pub use hyperlink::Hyperlink;
pub use manual_numbering::ManualNumbering;
pub use newline_spacing::NewlineSpacing;
pub use no_alt_text::NoAltText;
pub use non_interactive_form::NonInteractiveForm;
pub use presets::{all_document_checks, all_node_checks, check_catalog, Preset};
pub use space_spacing::SpaceSpacing;
pub use table_formatting::TableFormatting;
pub use table_heading::TableHeading;
pub use table_merge_split::TableMergeSplit;
pub use text_contrast::TextContrast;

/// Re-export core types for convenience.
pub use a11y_check_core::{DocumentCheck, Issue, IssueKind, NodeCheck, Severity};
