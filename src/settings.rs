//! Label settings value types and sanitization
//!
//! A [`LabelSettings`] is constructed fresh for each render or measurement
//! call, either programmatically or by sanitizing a persisted document.
//! Sanitization is total: every field clamps or falls back to a documented
//! default, it never fails.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{FontCatalog, FontWeight};

/// A validated 6-hex-digit RGB color, stored lowercased (e.g. `#f2f2f2`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a `#rrggbb` color; anything else returns None
    pub fn parse(value: &str) -> Option<Color> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('#')?;
        if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Color(trimmed.to_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value).ok_or_else(|| format!("invalid color '{value}'"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.0
    }
}

/// One line of label text with its own font, size and weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLine {
    /// Line content; a blank line still occupies vertical space
    pub text: String,
    /// Font stack, resolved against the catalog at sanitize time
    pub font_family: String,
    /// Font size in points, at least 4
    pub font_size_pt: f64,
    pub font_weight: FontWeight,
}

/// The full description of one label, immutable per render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSettings {
    /// Label footprint width in millimeters
    pub width_mm: f64,
    /// Label footprint height in millimeters
    pub height_mm: f64,
    pub corner_radius_mm: f64,
    /// Stroke thickness; 0 draws no border
    pub border_thickness_mm: f64,
    /// Transparent padding around the footprint in the output document
    pub canvas_margin_mm: f64,
    /// When true, width/height are derived from measured text
    pub auto_border: bool,
    pub auto_border_padding_mm: f64,
    pub background_color: Color,
    pub text_color: Color,
    pub line_spacing_mm: f64,
    pub letter_spacing_mm: f64,
    /// Ordered line stack; never empty after sanitization
    pub lines: Vec<TextLine>,
}

impl Default for LabelSettings {
    fn default() -> Self {
        let catalog = FontCatalog::default();
        LabelSettings {
            width_mm: 100.0,
            height_mm: 50.0,
            corner_radius_mm: 4.0,
            border_thickness_mm: 0.5,
            canvas_margin_mm: 0.2,
            auto_border: false,
            auto_border_padding_mm: 2.0,
            background_color: Color("#f2f2f2".to_string()),
            text_color: Color("#000000".to_string()),
            line_spacing_mm: 3.0,
            letter_spacing_mm: 0.0,
            lines: vec![
                TextLine {
                    text: "SAMPLE".to_string(),
                    font_family: catalog.fonts[0].stack.clone(),
                    font_size_pt: 26.0,
                    font_weight: FontWeight::Bold,
                },
                TextLine {
                    text: "IDENTIFICATION".to_string(),
                    font_family: catalog.fonts[3].stack.clone(),
                    font_size_pt: 18.0,
                    font_weight: FontWeight::SemiBold,
                },
            ],
        }
    }
}

/// Coerce a raw JSON value to a finite number, clamped to an optional minimum
///
/// Numbers pass through; numeric strings are parsed. Anything else yields
/// the fallback.
pub(crate) fn sanitize_number(raw: Option<&Value>, fallback: f64, min: Option<f64>) -> f64 {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    let mut result = match parsed {
        Some(n) if n.is_finite() => n,
        _ => fallback,
    };
    if let Some(min) = min {
        if result < min {
            result = min;
        }
    }
    result
}

pub(crate) fn sanitize_bool(raw: Option<&Value>, fallback: bool) -> bool {
    match raw {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => true,
            "false" | "0" | "no" | "off" => false,
            _ => fallback,
        },
        _ => fallback,
    }
}

pub(crate) fn sanitize_color(raw: Option<&Value>, fallback: &Color) -> Color {
    match raw {
        Some(Value::String(s)) => Color::parse(s).unwrap_or_else(|| fallback.clone()),
        _ => fallback.clone(),
    }
}

impl TextLine {
    /// Sanitize a raw persisted line, resolving the font against the catalog
    pub fn sanitized(raw: &Value, catalog: &FontCatalog) -> TextLine {
        let text = match raw.get("text") {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        };

        let font_family = match raw.get("fontFamily") {
            Some(Value::String(s)) if catalog.resolve(s).is_some() => s.clone(),
            _ => catalog.first().stack.clone(),
        };

        let font_weight = match raw.get("fontWeight") {
            Some(Value::String(s)) => FontWeight::from_token(s),
            Some(Value::Number(n)) => FontWeight::from_token(&n.to_string()),
            _ => None,
        }
        .unwrap_or_default();

        TextLine {
            text,
            font_family,
            font_size_pt: sanitize_number(raw.get("fontSizePt"), 18.0, Some(4.0)),
            font_weight,
        }
    }
}

impl LabelSettings {
    /// Sanitize raw persisted settings field by field
    ///
    /// Missing or invalid fields fall back to the documented defaults; the
    /// result always carries at least one line.
    pub fn sanitized(raw: &Value, catalog: &FontCatalog) -> LabelSettings {
        let defaults = LabelSettings::default();

        let lines = match raw.get("lines") {
            Some(Value::Array(raw_lines)) if !raw_lines.is_empty() => raw_lines
                .iter()
                .map(|line| TextLine::sanitized(line, catalog))
                .collect(),
            _ => defaults.lines.clone(),
        };

        LabelSettings {
            width_mm: sanitize_number(raw.get("widthMm"), defaults.width_mm, Some(1.0)),
            height_mm: sanitize_number(raw.get("heightMm"), defaults.height_mm, Some(1.0)),
            corner_radius_mm: sanitize_number(
                raw.get("cornerRadiusMm"),
                defaults.corner_radius_mm,
                Some(0.0),
            ),
            border_thickness_mm: sanitize_number(
                raw.get("borderThicknessMm"),
                defaults.border_thickness_mm,
                Some(0.0),
            ),
            canvas_margin_mm: sanitize_number(
                raw.get("canvasMarginMm"),
                defaults.canvas_margin_mm,
                Some(0.0),
            ),
            auto_border: sanitize_bool(raw.get("autoBorder"), defaults.auto_border),
            auto_border_padding_mm: sanitize_number(
                raw.get("autoBorderPaddingMm"),
                defaults.auto_border_padding_mm,
                Some(0.0),
            ),
            background_color: sanitize_color(
                raw.get("backgroundColor"),
                &defaults.background_color,
            ),
            text_color: sanitize_color(raw.get("textColor"), &defaults.text_color),
            line_spacing_mm: sanitize_number(
                raw.get("lineSpacingMm"),
                defaults.line_spacing_mm,
                Some(0.0),
            ),
            letter_spacing_mm: sanitize_number(
                raw.get("letterSpacingMm"),
                defaults.letter_spacing_mm,
                Some(0.0),
            ),
            lines,
        }
    }
}
