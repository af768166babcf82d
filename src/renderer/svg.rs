//! SVG serialization of the label document

use super::document::LabelDocument;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Format a numeric geometry attribute with stable precision
///
/// Renders at a fixed number of decimal places, then strips trailing zeros
/// and a trailing decimal point, keeping the serialized document compact and
/// identical across re-renders. Non-finite values render as "0".
pub fn format_number(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{value:.digits$}");
    let stripped = fixed.trim_end_matches('0').trim_end_matches('.');
    if stripped == "-0" || stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Serialize the document to SVG text
///
/// Byte-for-byte reproducible for identical documents.
pub fn render_svg(doc: &LabelDocument) -> String {
    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="{}" width="{}mm" height="{}mm" viewBox="0 0 {} {}" style="overflow: visible" role="img">"#,
        SVG_NS,
        doc.width_mm,
        doc.height_mm,
        format_number(doc.view_width_px, 4),
        format_number(doc.view_height_px, 4)
    ));
    svg.push('\n');

    let rect = &doc.rect;
    svg.push_str(&format!(
        r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" fill="{}""#,
        format_number(rect.x, 4),
        format_number(rect.y, 4),
        format_number(rect.width, 4),
        format_number(rect.height, 4),
        format_number(rect.radius, 4),
        format_number(rect.radius, 4),
        rect.fill.as_str()
    ));
    match &rect.stroke {
        Some(stroke) => svg.push_str(&format!(
            r#" stroke="{}" stroke-width="{}"/>"#,
            stroke.color.as_str(),
            format_number(stroke.width, 4)
        )),
        None => svg.push_str(r#" stroke="none"/>"#),
    }
    svg.push('\n');

    for text in &doc.texts {
        svg.push_str(&format!(
            r#"  <text x="{}" y="{}" fill="{}" font-size="{}" font-family="{}" font-weight="{}" text-anchor="middle" dominant-baseline="alphabetic""#,
            format_number(text.x, 4),
            format_number(text.y, 4),
            text.fill.as_str(),
            format_number(text.size_px, 4),
            escape_xml(&text.family),
            text.weight.as_css()
        ));
        if let Some(spacing) = text.letter_spacing_px {
            svg.push_str(&format!(r#" letter-spacing="{}""#, format_number(spacing, 4)));
        }
        svg.push('>');
        svg.push_str(&escape_xml(&text.content));
        svg.push_str("</text>");
        svg.push('\n');
    }

    svg.push_str("</svg>");
    svg
}

/// Serialize as a standalone SVG file with an XML declaration
pub fn render_standalone_svg(doc: &LabelDocument) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}",
        render_svg(doc)
    )
}
