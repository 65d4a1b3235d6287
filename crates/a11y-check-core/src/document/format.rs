//! Character and paragraph formatting attributes.
//!
//! Every attribute is optional: `None` means "not set at this level" and the
//! effective value is inherited from the next level of the style hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB color, written as `#rrggbb` (or `#rgb`) in snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates a color from its components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color `{0}`: expected #rgb or #rrggbb")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() {
            return Err(err());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| err());
        match hex.len() {
            3 => Ok(Self::rgb(
                channel(&hex[0..1].repeat(2))?,
                channel(&hex[1..2].repeat(2))?,
                channel(&hex[2..3].repeat(2))?,
            )),
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Font weight on the usual 100..=900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Regular text.
    pub const NORMAL: Self = Self(400);
    /// Bold text.
    pub const BOLD: Self = Self(700);

    /// Whether this weight renders as bold.
    #[must_use]
    pub fn is_bold(self) -> bool {
        self >= Self::BOLD
    }
}

/// Line decoration used for underline, overline and strikethrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// No line.
    None,
    /// A single solid line.
    Single,
    /// Two solid lines.
    Double,
    /// Dotted line.
    Dotted,
    /// Dashed line.
    Dashed,
    /// Wavy line.
    Wave,
}

/// Embossing effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relief {
    /// Flat text.
    None,
    /// Raised text.
    Embossed,
    /// Sunken text.
    Engraved,
}

/// Vertical text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Escapement {
    /// Baseline text.
    Normal,
    /// Raised and smaller.
    Superscript,
    /// Lowered and smaller.
    Subscript,
}

/// Character attributes that can be applied by a style or directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharFormat {
    /// Font weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    /// Italic posture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// Text shadow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadowed: Option<bool>,
    /// Foreground color; unset everywhere means automatic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Font size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    /// Font family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// East Asian emphasis mark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis_mark: Option<bool>,
    /// Underline style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<LineStyle>,
    /// Overline style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overline: Option<LineStyle>,
    /// Strikethrough style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<LineStyle>,
    /// Relief effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relief: Option<Relief>,
    /// Outlined (contour) glyphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contour: Option<bool>,
    /// Hyphenation suppressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_hyphenation: Option<bool>,
    /// Character background (highlighting).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Superscript / subscript.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escapement: Option<Escapement>,
    /// Blinking text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blinking: Option<bool>,
    /// Language tag (BCP 47); `zxx` or `none` mark "no language".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl CharFormat {
    /// Fills every unset attribute from `fallback`.
    ///
    /// Attributes already set on `self` win, so applying fallbacks from the
    /// nearest to the farthest level yields the effective format.
    pub fn inherit_from(&mut self, fallback: &Self) {
        fn fill<T: Clone>(slot: &mut Option<T>, fallback: &Option<T>) {
            if slot.is_none() {
                slot.clone_from(fallback);
            }
        }

        fill(&mut self.weight, &fallback.weight);
        fill(&mut self.italic, &fallback.italic);
        fill(&mut self.shadowed, &fallback.shadowed);
        fill(&mut self.color, &fallback.color);
        fill(&mut self.size, &fallback.size);
        fill(&mut self.font_family, &fallback.font_family);
        fill(&mut self.emphasis_mark, &fallback.emphasis_mark);
        fill(&mut self.underline, &fallback.underline);
        fill(&mut self.overline, &fallback.overline);
        fill(&mut self.strikethrough, &fallback.strikethrough);
        fill(&mut self.relief, &fallback.relief);
        fill(&mut self.contour, &fallback.contour);
        fill(&mut self.no_hyphenation, &fallback.no_hyphenation);
        fill(&mut self.background, &fallback.background);
        fill(&mut self.escapement, &fallback.escapement);
        fill(&mut self.blinking, &fallback.blinking);
        fill(&mut self.language, &fallback.language);
    }

    /// Whether `property` is set at this level.
    #[must_use]
    pub fn is_set(&self, property: CharProperty) -> bool {
        match property {
            CharProperty::Weight => self.weight.is_some(),
            CharProperty::Posture => self.italic.is_some(),
            CharProperty::Shadowed => self.shadowed.is_some(),
            CharProperty::Color => self.color.is_some(),
            CharProperty::Size => self.size.is_some(),
            CharProperty::Font => self.font_family.is_some(),
            CharProperty::EmphasisMark => self.emphasis_mark.is_some(),
            CharProperty::Underline => self.underline.is_some(),
            CharProperty::Overline => self.overline.is_some(),
            CharProperty::Strikethrough => self.strikethrough.is_some(),
            CharProperty::Relief => self.relief.is_some(),
            CharProperty::Contour => self.contour.is_some(),
            CharProperty::NoHyphenation => self.no_hyphenation.is_some(),
        }
    }

    /// Whether `property` holds the same value (set or unset) in both formats.
    #[must_use]
    pub fn same_value(&self, other: &Self, property: CharProperty) -> bool {
        match property {
            CharProperty::Weight => self.weight == other.weight,
            CharProperty::Posture => self.italic == other.italic,
            CharProperty::Shadowed => self.shadowed == other.shadowed,
            CharProperty::Color => self.color == other.color,
            CharProperty::Size => self.size == other.size,
            CharProperty::Font => self.font_family == other.font_family,
            CharProperty::EmphasisMark => self.emphasis_mark == other.emphasis_mark,
            CharProperty::Underline => self.underline == other.underline,
            CharProperty::Overline => self.overline == other.overline,
            CharProperty::Strikethrough => self.strikethrough == other.strikethrough,
            CharProperty::Relief => self.relief == other.relief,
            CharProperty::Contour => self.contour == other.contour,
            CharProperty::NoHyphenation => self.no_hyphenation == other.no_hyphenation,
        }
    }
}

/// Character properties whose direct application tends to carry meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharProperty {
    /// Font weight.
    Weight,
    /// Italic posture.
    Posture,
    /// Text shadow.
    Shadowed,
    /// Font color.
    Color,
    /// Font size.
    Size,
    /// Font family.
    Font,
    /// Emphasis mark.
    EmphasisMark,
    /// Underline.
    Underline,
    /// Overline.
    Overline,
    /// Strikethrough.
    Strikethrough,
    /// Relief.
    Relief,
    /// Outline glyphs.
    Contour,
    /// Hyphenation suppression.
    NoHyphenation,
}

impl CharProperty {
    /// All properties, in reporting order.
    pub const ALL: [Self; 13] = [
        Self::Weight,
        Self::Posture,
        Self::Shadowed,
        Self::Color,
        Self::Size,
        Self::Font,
        Self::EmphasisMark,
        Self::Underline,
        Self::Overline,
        Self::Strikethrough,
        Self::Relief,
        Self::Contour,
        Self::NoHyphenation,
    ];

    /// User-facing name of the formatting type.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::Posture => "Posture",
            Self::Shadowed => "Shadowed",
            Self::Color => "Font Color",
            Self::Size => "Font Size",
            Self::Font => "Font",
            Self::EmphasisMark => "Emphasis Mark",
            Self::Underline => "Underline",
            Self::Overline => "Overline",
            Self::Strikethrough => "Strikethrough",
            Self::Relief => "Relief",
            Self::Contour => "Outline",
            Self::NoHyphenation => "No Hyphenation",
        }
    }
}

/// Paragraph attributes that can be applied by a style or directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphFormat {
    /// Space above the paragraph, in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_spacing: Option<f32>,
    /// Space below the paragraph, in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_spacing: Option<f32>,
    /// Paragraph background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl ParagraphFormat {
    /// Fills every unset attribute from `fallback`.
    pub fn inherit_from(&mut self, fallback: &Self) {
        self.upper_spacing = self.upper_spacing.or(fallback.upper_spacing);
        self.lower_spacing = self.lower_spacing.or(fallback.lower_spacing);
        self.background = self.background.or(fallback.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#ff8000".parse::<Color>(), Ok(Color::rgb(255, 128, 0)));
        assert_eq!("#fff".parse::<Color>(), Ok(Color::WHITE));
        assert!("ff8000".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
    }

    #[test]
    fn color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 255)).unwrap();
        assert_eq!(json, "\"#0102ff\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(1, 2, 255));
    }

    #[test]
    fn inherit_keeps_nearest_value() {
        let mut near = CharFormat {
            weight: Some(FontWeight::BOLD),
            ..CharFormat::default()
        };
        let far = CharFormat {
            weight: Some(FontWeight::NORMAL),
            size: Some(12.0),
            ..CharFormat::default()
        };
        near.inherit_from(&far);
        assert_eq!(near.weight, Some(FontWeight::BOLD));
        assert_eq!(near.size, Some(12.0));
    }

    #[test]
    fn same_value_compares_single_property() {
        let a = CharFormat {
            italic: Some(true),
            ..CharFormat::default()
        };
        let b = CharFormat::default();
        assert!(!a.same_value(&b, CharProperty::Posture));
        assert!(a.same_value(&b, CharProperty::Weight));
        assert!(a.is_set(CharProperty::Posture));
    }
}
