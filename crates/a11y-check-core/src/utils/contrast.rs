//! WCAG 2.x luminance and contrast math.
//!
//! <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>

use crate::document::Color;

/// Minimum ratio for normal text (WCAG AA).
pub const NORMAL_TEXT_RATIO: f64 = 4.5;

/// Minimum ratio for large text (WCAG AA).
pub const LARGE_TEXT_RATIO: f64 = 3.0;

/// Relative luminance of an sRGB color, in `0.0..=1.0`.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let linear = [color.r, color.g, color.b].map(|c| {
        let v = f64::from(c) / 255.0;
        if v <= 0.040_45 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * linear[0] + 0.7152 * linear[1] + 0.0722 * linear[2]
}

/// Contrast ratio between two colors, in `1.0..=21.0`.
///
/// The lighter color always goes on top, so argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether text of this size and weight counts as large text.
#[must_use]
pub fn is_large_text(size_pt: f32, bold: bool) -> bool {
    size_pt >= 18.0 || (size_pt >= 14.0 && bold)
}

/// Required minimum contrast for text of this size and weight.
#[must_use]
pub fn minimum_contrast(size_pt: f32, bold: bool) -> f64 {
    if is_large_text(size_pt, bold) {
        LARGE_TEXT_RATIO
    } else {
        NORMAL_TEXT_RATIO
    }
}
