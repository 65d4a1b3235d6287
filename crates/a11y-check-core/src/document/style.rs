//! Style pools and inherited attribute resolution.

use super::format::{CharFormat, Color, ParagraphFormat};
use super::{Paragraph, Portion};
use serde::{Deserialize, Serialize};

/// Parent chains longer than this are treated as cycles.
const MAX_STYLE_DEPTH: usize = 64;

/// Language tags meaning "no language".
const NO_LANGUAGE_TAGS: &[&str] = &["zxx", "none"];

/// Returns true if `language` is unset, blank, or explicitly "no language".
#[must_use]
pub fn is_no_language(language: Option<&str>) -> bool {
    language.map_or(true, |tag| {
        let tag = tag.trim();
        tag.is_empty() || NO_LANGUAGE_TAGS.iter().any(|n| tag.eq_ignore_ascii_case(n))
    })
}

/// Errors raised while resolving styles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// A style name that is not defined in its family.
    #[error("unknown {family} style `{name}`")]
    Unknown {
        /// Style family ("paragraph", "character", "page").
        family: &'static str,
        /// The missing style name.
        name: String,
    },

    /// A parent chain that loops back on itself.
    #[error("{family} style `{name}` has a cyclic parent chain")]
    Cycle {
        /// Style family.
        family: &'static str,
        /// Style where the cycle was detected.
        name: String,
    },
}

/// A named paragraph style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    /// Style name.
    pub name: String,
    /// Parent style, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Character attributes set by this style.
    pub char_format: CharFormat,
    /// Paragraph attributes set by this style.
    pub format: ParagraphFormat,
}

/// A named character style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterStyle {
    /// Style name.
    pub name: String,
    /// Parent style, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Character attributes set by this style.
    pub format: CharFormat,
}

/// How a page is filled behind the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageFill {
    /// No fill; the page is white.
    #[default]
    None,
    /// A single color.
    Solid {
        /// Fill color.
        color: Color,
    },
    /// A color gradient.
    Gradient,
    /// A hatch pattern.
    Hatch,
    /// A bitmap image.
    Bitmap,
}

/// A named page style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageStyle {
    /// Style name.
    pub name: String,
    /// Page background.
    pub fill: PageFill,
}

impl PageStyle {
    /// The solid background color of this page, if it has one.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        match self.fill {
            PageFill::Solid { color } => Some(color),
            _ => None,
        }
    }
}

/// All style families of a document plus the document defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    /// Document-default character attributes.
    pub defaults: CharFormat,
    /// Paragraph styles.
    pub paragraph_styles: Vec<ParagraphStyle>,
    /// Character styles.
    pub character_styles: Vec<CharacterStyle>,
    /// Page styles.
    pub page_styles: Vec<PageStyle>,
}

impl StyleSheet {
    /// Looks up a paragraph style by name.
    #[must_use]
    pub fn paragraph_style(&self, name: &str) -> Option<&ParagraphStyle> {
        self.paragraph_styles.iter().find(|s| s.name == name)
    }

    /// Looks up a character style by name.
    #[must_use]
    pub fn character_style(&self, name: &str) -> Option<&CharacterStyle> {
        self.character_styles.iter().find(|s| s.name == name)
    }

    /// Looks up a page style by name.
    #[must_use]
    pub fn page_style(&self, name: &str) -> Option<&PageStyle> {
        self.page_styles.iter().find(|s| s.name == name)
    }

    /// The document's default language, if one is set.
    #[must_use]
    pub fn default_language(&self) -> Option<&str> {
        self.defaults.language.as_deref()
    }

    /// Character attributes of a paragraph style chain, falling back to the
    /// document defaults. `None` resolves the defaults alone.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown styles or cyclic parent chains.
    pub fn resolve_paragraph_chars(&self, name: Option<&str>) -> Result<CharFormat, StyleError> {
        let mut resolved = CharFormat::default();
        for style in self.paragraph_chain(name)? {
            resolved.inherit_from(&style.char_format);
        }
        resolved.inherit_from(&self.defaults);
        Ok(resolved)
    }

    /// Paragraph attributes of a paragraph style chain.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown styles or cyclic parent chains.
    pub fn resolve_paragraph_format(
        &self,
        name: Option<&str>,
    ) -> Result<ParagraphFormat, StyleError> {
        let mut resolved = ParagraphFormat::default();
        for style in self.paragraph_chain(name)? {
            resolved.inherit_from(&style.format);
        }
        Ok(resolved)
    }

    /// Character attributes declared by a character style chain only.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown styles or cyclic parent chains.
    pub fn resolve_character_style(&self, name: &str) -> Result<CharFormat, StyleError> {
        let mut resolved = CharFormat::default();
        let mut current = Some(name);
        let mut depth = 0;
        while let Some(style_name) = current {
            depth += 1;
            if depth > MAX_STYLE_DEPTH {
                return Err(StyleError::Cycle {
                    family: "character",
                    name: name.to_string(),
                });
            }
            let style = self
                .character_style(style_name)
                .ok_or_else(|| StyleError::Unknown {
                    family: "character",
                    name: style_name.to_string(),
                })?;
            resolved.inherit_from(&style.format);
            current = style.parent.as_deref();
        }
        Ok(resolved)
    }

    /// Effective character attributes of one portion of `paragraph`.
    ///
    /// Nearest level wins: direct run format, character style chain,
    /// paragraph direct format, paragraph style chain, document defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown styles or cyclic parent chains.
    pub fn resolve_portion(
        &self,
        paragraph: &Paragraph,
        portion: &Portion<'_>,
    ) -> Result<CharFormat, StyleError> {
        let mut resolved = portion.format.clone();
        if let Some(name) = portion.char_style {
            resolved.inherit_from(&self.resolve_character_style(name)?);
        }
        resolved.inherit_from(&paragraph.char_format);
        resolved.inherit_from(&self.resolve_paragraph_chars(paragraph.style.as_deref())?);
        Ok(resolved)
    }

    /// Background of a paragraph, direct first, then from its style chain.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown styles or cyclic parent chains.
    pub fn resolve_paragraph_background(
        &self,
        paragraph: &Paragraph,
    ) -> Result<Option<Color>, StyleError> {
        match paragraph.format.background {
            Some(color) => Ok(Some(color)),
            None => Ok(self
                .resolve_paragraph_format(paragraph.style.as_deref())?
                .background),
        }
    }

    /// Paragraph styles from `name` up to the root, nearest first.
    fn paragraph_chain(&self, name: Option<&str>) -> Result<Vec<&ParagraphStyle>, StyleError> {
        let mut chain = Vec::new();
        let mut current = name;
        while let Some(style_name) = current {
            if chain.len() >= MAX_STYLE_DEPTH {
                return Err(StyleError::Cycle {
                    family: "paragraph",
                    name: name.unwrap_or_default().to_string(),
                });
            }
            let style = self
                .paragraph_style(style_name)
                .ok_or_else(|| StyleError::Unknown {
                    family: "paragraph",
                    name: style_name.to_string(),
                })?;
            chain.push(style);
            current = style.parent.as_deref();
        }
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::format::FontWeight;

    fn sheet() -> StyleSheet {
        StyleSheet {
            defaults: CharFormat {
                size: Some(12.0),
                language: Some("en-US".into()),
                ..CharFormat::default()
            },
            paragraph_styles: vec![
                ParagraphStyle {
                    name: "Standard".into(),
                    ..ParagraphStyle::default()
                },
                ParagraphStyle {
                    name: "Heading".into(),
                    parent: Some("Standard".into()),
                    char_format: CharFormat {
                        weight: Some(FontWeight::BOLD),
                        size: Some(14.0),
                        ..CharFormat::default()
                    },
                    format: ParagraphFormat {
                        upper_spacing: Some(6.0),
                        ..ParagraphFormat::default()
                    },
                },
                ParagraphStyle {
                    name: "Loop".into(),
                    parent: Some("Loop".into()),
                    ..ParagraphStyle::default()
                },
            ],
            character_styles: vec![CharacterStyle {
                name: "Emphasis".into(),
                parent: None,
                format: CharFormat {
                    italic: Some(true),
                    ..CharFormat::default()
                },
            }],
            page_styles: vec![PageStyle {
                name: "Default".into(),
                fill: PageFill::Solid {
                    color: Color::rgb(10, 10, 10),
                },
            }],
        }
    }

    #[test]
    fn paragraph_chain_inherits_and_falls_back_to_defaults() {
        let resolved = sheet().resolve_paragraph_chars(Some("Heading")).unwrap();
        assert_eq!(resolved.weight, Some(FontWeight::BOLD));
        assert_eq!(resolved.size, Some(14.0));
        assert_eq!(resolved.language.as_deref(), Some("en-US"));
    }

    #[test]
    fn unknown_style_is_an_error() {
        let err = sheet().resolve_paragraph_chars(Some("Missing")).unwrap_err();
        assert!(matches!(err, StyleError::Unknown { family: "paragraph", .. }));
    }

    #[test]
    fn cyclic_parent_is_detected() {
        let err = sheet().resolve_paragraph_format(Some("Loop")).unwrap_err();
        assert!(matches!(err, StyleError::Cycle { .. }));
    }

    #[test]
    fn character_style_resolves_only_its_chain() {
        let resolved = sheet().resolve_character_style("Emphasis").unwrap();
        assert_eq!(resolved.italic, Some(true));
        assert_eq!(resolved.size, None);
    }

    #[test]
    fn page_background_only_for_solid_fill() {
        let sheet = sheet();
        let page = sheet.page_style("Default").unwrap();
        assert_eq!(page.background(), Some(Color::rgb(10, 10, 10)));
        assert_eq!(PageStyle::default().background(), None);
    }

    #[test]
    fn portion_resolution_order() {
        let sheet = sheet();
        let paragraph = Paragraph {
            style: Some("Heading".into()),
            char_format: CharFormat {
                size: Some(16.0),
                ..CharFormat::default()
            },
            runs: vec![crate::document::TextRun {
                start: 0,
                end: 4,
                char_style: Some("Emphasis".into()),
                format: CharFormat {
                    color: Some(Color::rgb(200, 0, 0)),
                    ..CharFormat::default()
                },
            }],
            ..Paragraph::new("Bold text")
        };
        let portions = paragraph.portions();
        let first = sheet.resolve_portion(&paragraph, &portions[0]).unwrap();
        assert_eq!(first.color, Some(Color::rgb(200, 0, 0)));
        assert_eq!(first.italic, Some(true));
        assert_eq!(first.size, Some(16.0));
        assert_eq!(first.weight, Some(FontWeight::BOLD));

        let rest = sheet.resolve_portion(&paragraph, &portions[1]).unwrap();
        assert_eq!(rest.italic, None);
        assert_eq!(rest.language.as_deref(), Some("en-US"));
    }

    #[test]
    fn no_language_tags() {
        assert!(is_no_language(None));
        assert!(is_no_language(Some(" ")));
        assert!(is_no_language(Some("ZXX")));
        assert!(!is_no_language(Some("de-DE")));
    }
}
