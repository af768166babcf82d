//! Auto-fit size computation
//!
//! Derives a label footprint from the measured extents of its text lines
//! plus a padding ring, instead of taking width/height as input.

use crate::measure::{FontSpec, TextMeasurer};
use crate::settings::TextLine;
use crate::units::{mm_to_px, pt_to_px, px_to_mm};

/// A derived label footprint, always strictly positive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoFitSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Compute the footprint that fits the given line stack
///
/// Block height sums the per-line font sizes with spacing between lines.
/// Block width is the widest measured line; the measurer does not account
/// for letter spacing, so `letter_spacing * (chars - 1)` is added on top of
/// the measured advance. A blank line contributes a placeholder width of
/// 0.6 em so an all-blank block keeps a usable footprint.
pub fn compute_auto_size(
    lines: &[TextLine],
    line_spacing_mm: f64,
    letter_spacing_mm: f64,
    padding_mm: f64,
    measurer: &dyn TextMeasurer,
) -> AutoFitSize {
    let line_spacing_px = mm_to_px(line_spacing_mm);
    let letter_spacing_px = mm_to_px(letter_spacing_mm);
    let padding_px = mm_to_px(padding_mm);

    let mut max_line_width_px: f64 = 0.0;
    let mut total_height_px: f64 = 0.0;

    for (index, line) in lines.iter().enumerate() {
        let font_size_px = pt_to_px(line.font_size_pt);
        total_height_px += font_size_px;
        if index > 0 {
            total_height_px += line_spacing_px;
        }

        let text = line.text.trim();
        if !text.is_empty() {
            let font = FontSpec::new(line.font_family.clone(), line.font_weight, font_size_px);
            let mut line_width = measurer.measure(&font, text);
            if letter_spacing_px > 0.0 {
                line_width += letter_spacing_px * text.chars().count().saturating_sub(1) as f64;
            }
            max_line_width_px = max_line_width_px.max(line_width);
        } else {
            max_line_width_px = max_line_width_px.max(font_size_px * 0.6);
        }
    }

    if lines.is_empty() {
        let default_font_size_px = pt_to_px(18.0);
        total_height_px = default_font_size_px;
        max_line_width_px = default_font_size_px * 4.0;
    }

    if total_height_px <= 0.0 {
        total_height_px = pt_to_px(10.0);
    }

    if max_line_width_px <= 0.0 {
        max_line_width_px = pt_to_px(10.0) * 4.0;
    }

    let width_px = max_line_width_px + padding_px * 2.0;
    let height_px = total_height_px + padding_px * 2.0;

    AutoFitSize {
        width_mm: px_to_mm(width_px.max(padding_px * 2.0)),
        height_mm: px_to_mm(height_px.max(padding_px * 2.0)),
    }
}
