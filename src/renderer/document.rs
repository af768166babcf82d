//! Building the label document tree from resolved settings

use crate::layout::baseline_positions;
use crate::settings::{Color, LabelSettings};
use crate::units::{mm_to_px, pt_to_px};
use crate::RenderError;

use crate::catalog::FontWeight;

/// The rendered label: one canvas, one rounded rectangle, text nodes
///
/// Physical size attributes are in millimeters (including the canvas
/// margin), the internal coordinate system in 96-DPI pixels with the origin
/// offset so the label rectangle sits inset by the margin.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDocument {
    /// Canvas width in millimeters, footprint plus margins
    pub width_mm: f64,
    /// Canvas height in millimeters, footprint plus margins
    pub height_mm: f64,
    /// Canvas width in pixel units (viewBox extent)
    pub view_width_px: f64,
    /// Canvas height in pixel units (viewBox extent)
    pub view_height_px: f64,
    pub rect: RoundedRect,
    /// Visible text nodes in line order; blank lines emit none
    pub texts: Vec<TextSpan>,
}

/// The background rectangle, already inset for its stroke
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Stroke width in pixel units
    pub width: f64,
}

/// One centered line of text at its computed baseline
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// Horizontal anchor point (the label's center line)
    pub x: f64,
    /// Baseline y-position
    pub y: f64,
    pub content: String,
    pub family: String,
    pub weight: FontWeight,
    pub size_px: f64,
    pub fill: Color,
    /// Present only when letter spacing is strictly positive
    pub letter_spacing_px: Option<f64>,
}

/// Build the vector document for fully-resolved settings
///
/// Auto-fit must already be applied; this function only validates that the
/// footprint is finite and positive. A failing check is the expected
/// mid-edit state, not a fault.
pub fn build_document(settings: &LabelSettings) -> Result<LabelDocument, RenderError> {
    let width_mm = settings.width_mm;
    let height_mm = settings.height_mm;
    if !width_mm.is_finite() || width_mm <= 0.0 || !height_mm.is_finite() || height_mm <= 0.0 {
        return Err(RenderError::InvalidDimensions {
            width_mm,
            height_mm,
        });
    }

    let width_px = mm_to_px(width_mm);
    let height_px = mm_to_px(height_mm);
    let corner_radius_px = mm_to_px(settings.corner_radius_mm);
    let border_px = mm_to_px(settings.border_thickness_mm);
    let line_spacing_px = mm_to_px(settings.line_spacing_mm);
    let letter_spacing_px = mm_to_px(settings.letter_spacing_mm);
    let margin_mm = settings.canvas_margin_mm.max(0.0);
    let margin_px = mm_to_px(margin_mm);
    let origin_x = margin_px;
    let origin_y = margin_px;

    // The stroke is centered on the path, so inset the rectangle by half the
    // thickness on every side to keep the stroke's outer edge on the nominal
    // label boundary. The corner radius shrinks by the same inset.
    let stroke_inset_px = if border_px > 0.0 { border_px / 2.0 } else { 0.0 };
    let rect = RoundedRect {
        x: origin_x + stroke_inset_px,
        y: origin_y + stroke_inset_px,
        width: (width_px - border_px).max(0.0),
        height: (height_px - border_px).max(0.0),
        radius: (corner_radius_px - stroke_inset_px).max(0.0),
        fill: settings.background_color.clone(),
        stroke: (border_px > 0.0).then(|| Stroke {
            color: settings.text_color.clone(),
            width: border_px,
        }),
    };

    let font_sizes_px: Vec<f64> = settings
        .lines
        .iter()
        .map(|line| pt_to_px(line.font_size_pt))
        .collect();
    let baselines = baseline_positions(&font_sizes_px, line_spacing_px, origin_y, height_px);

    let mut texts = Vec::new();
    for (index, line) in settings.lines.iter().enumerate() {
        let content = line.text.trim();
        if content.is_empty() {
            continue;
        }
        texts.push(TextSpan {
            x: origin_x + width_px / 2.0,
            y: baselines[index],
            content: content.to_string(),
            family: line.font_family.clone(),
            weight: line.font_weight,
            size_px: font_sizes_px[index],
            fill: settings.text_color.clone(),
            letter_spacing_px: (letter_spacing_px > 0.0).then_some(letter_spacing_px),
        });
    }

    Ok(LabelDocument {
        width_mm: width_mm + margin_mm * 2.0,
        height_mm: height_mm + margin_mm * 2.0,
        view_width_px: width_px + margin_px * 2.0,
        view_height_px: height_px + margin_px * 2.0,
        rect,
        texts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::TextLine;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_invalid_dimensions_refuse_to_render() {
        let mut settings = LabelSettings::default();
        settings.width_mm = 0.0;
        assert!(matches!(
            build_document(&settings),
            Err(RenderError::InvalidDimensions { .. })
        ));

        settings.width_mm = f64::NAN;
        assert!(build_document(&settings).is_err());

        settings.width_mm = 100.0;
        settings.height_mm = -3.0;
        assert!(build_document(&settings).is_err());
    }

    #[test]
    fn test_canvas_includes_margin() {
        let settings = LabelSettings::default();
        let doc = build_document(&settings).unwrap();
        assert!((doc.width_mm - 100.4).abs() < EPS);
        assert!((doc.height_mm - 50.4).abs() < EPS);
        let expected_view_w = mm_to_px(100.0) + mm_to_px(0.2) * 2.0;
        assert!((doc.view_width_px - expected_view_w).abs() < EPS);
    }

    #[test]
    fn test_rect_inset_by_half_stroke() {
        let settings = LabelSettings::default();
        let doc = build_document(&settings).unwrap();
        let border_px = mm_to_px(0.5);
        let margin_px = mm_to_px(0.2);
        assert!((doc.rect.x - (margin_px + border_px / 2.0)).abs() < EPS);
        assert!((doc.rect.width - (mm_to_px(100.0) - border_px)).abs() < EPS);
        assert!((doc.rect.radius - (mm_to_px(4.0) - border_px / 2.0)).abs() < EPS);
        let stroke = doc.rect.stroke.as_ref().unwrap();
        assert!((stroke.width - border_px).abs() < EPS);
        assert_eq!(stroke.color.as_str(), "#000000");
    }

    #[test]
    fn test_zero_border_has_no_stroke_and_no_inset() {
        let mut settings = LabelSettings::default();
        settings.border_thickness_mm = 0.0;
        let doc = build_document(&settings).unwrap();
        assert!(doc.rect.stroke.is_none());
        assert!((doc.rect.x - mm_to_px(0.2)).abs() < EPS);
        assert!((doc.rect.radius - mm_to_px(4.0)).abs() < EPS);
    }

    #[test]
    fn test_thick_border_floors_rect_at_zero() {
        let mut settings = LabelSettings::default();
        settings.width_mm = 1.0;
        settings.height_mm = 1.0;
        settings.border_thickness_mm = 2.0;
        let doc = build_document(&settings).unwrap();
        assert_eq!(doc.rect.width, 0.0);
        assert_eq!(doc.rect.height, 0.0);
    }

    #[test]
    fn test_blank_lines_reserve_space_but_emit_nothing() {
        let mut settings = LabelSettings::default();
        settings.canvas_margin_mm = 0.0;
        let family = settings.lines[0].font_family.clone();
        settings.lines = ["TOP", "   ", "BOTTOM"]
            .iter()
            .map(|text| TextLine {
                text: text.to_string(),
                font_family: family.clone(),
                font_size_pt: 18.0,
                font_weight: FontWeight::Bold,
            })
            .collect();
        let doc = build_document(&settings).unwrap();
        assert_eq!(doc.texts.len(), 2);
        // The surviving nodes keep the blank line's gap between them.
        let spacing_px = mm_to_px(settings.line_spacing_mm);
        let line_px = pt_to_px(18.0);
        let gap = doc.texts[1].y - doc.texts[0].y;
        assert!((gap - 2.0 * (line_px + spacing_px)).abs() < EPS);
    }

    #[test]
    fn test_text_centered_horizontally() {
        let settings = LabelSettings::default();
        let doc = build_document(&settings).unwrap();
        let expected_x = mm_to_px(0.2) + mm_to_px(100.0) / 2.0;
        for text in &doc.texts {
            assert!((text.x - expected_x).abs() < EPS);
        }
    }

    #[test]
    fn test_letter_spacing_attribute_gating() {
        let mut settings = LabelSettings::default();
        settings.letter_spacing_mm = 0.0;
        let doc = build_document(&settings).unwrap();
        assert!(doc.texts.iter().all(|t| t.letter_spacing_px.is_none()));

        settings.letter_spacing_mm = 0.8;
        let doc = build_document(&settings).unwrap();
        for text in &doc.texts {
            let spacing = text.letter_spacing_px.unwrap();
            assert!((spacing - mm_to_px(0.8)).abs() < EPS);
        }
    }
}
