//! Nameplate - layout engine and SVG renderer for printable labels
//!
//! This library turns a [`LabelSettings`] value (label geometry plus an
//! ordered stack of text lines) into a deterministic vector document and
//! its SVG serialization. Text measurement is injected through the
//! [`TextMeasurer`] trait, so the whole pipeline is a pure function of its
//! inputs.
//!
//! # Example
//!
//! ```rust
//! use nameplate::{render, HeuristicMeasurer, LabelSettings};
//!
//! let svg = render(&LabelSettings::default(), &HeuristicMeasurer::default()).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod catalog;
pub mod layout;
pub mod measure;
pub mod project;
pub mod renderer;
pub mod settings;
pub mod units;

pub use catalog::{CatalogError, FontCatalog, FontEntry, FontWeight};
pub use layout::{baseline_positions, compute_auto_size, AutoFitSize};
pub use measure::{FixedAdvanceMeasurer, FontSpec, HeuristicMeasurer, TextMeasurer};
pub use project::{
    fallback_label_name, slugify, Label, Project, ProjectError, ProjectFile, PROJECT_FILE_VERSION,
};
pub use renderer::{
    build_document, format_number, render_standalone_svg, render_svg, LabelDocument,
};
pub use settings::{Color, LabelSettings, TextLine};

use thiserror::Error;

/// Errors that can occur during rendering
#[derive(Debug, Error)]
pub enum RenderError {
    /// The footprint is not a positive finite size; the expected state
    /// while input is mid-edit, surfaced as "no preview available"
    #[error("no preview available: label dimensions must be positive finite numbers (got {width_mm} x {height_mm} mm)")]
    InvalidDimensions { width_mm: f64, height_mm: f64 },
}

/// Compute the auto-fit footprint for the settings' line stack
///
/// Uses the settings' own spacing and auto-border padding, regardless of
/// whether auto-border is enabled.
pub fn auto_size(settings: &LabelSettings, measurer: &dyn TextMeasurer) -> AutoFitSize {
    compute_auto_size(
        &settings.lines,
        settings.line_spacing_mm,
        settings.letter_spacing_mm,
        settings.auto_border_padding_mm,
        measurer,
    )
}

/// Apply auto-fit sizing when the settings request it
///
/// With auto-border enabled, width and height are replaced by the measured
/// footprint; the stored values are kept if the computed ones are not
/// usable. Without auto-border the settings pass through unchanged.
pub fn resolve_settings(settings: &LabelSettings, measurer: &dyn TextMeasurer) -> LabelSettings {
    let mut resolved = settings.clone();
    if resolved.auto_border {
        let size = auto_size(settings, measurer);
        tracing::debug!(
            width_mm = size.width_mm,
            height_mm = size.height_mm,
            "auto-fit footprint computed"
        );
        if size.width_mm.is_finite() && size.width_mm > 0.0 {
            resolved.width_mm = size.width_mm;
        }
        if size.height_mm.is_finite() && size.height_mm > 0.0 {
            resolved.height_mm = size.height_mm;
        }
    }
    resolved
}

/// Render settings to SVG text
///
/// This is the main entry point for the library: it applies auto-fit when
/// requested, builds the vector document, and serializes it.
pub fn render(
    settings: &LabelSettings,
    measurer: &dyn TextMeasurer,
) -> Result<String, RenderError> {
    let resolved = resolve_settings(settings, measurer);
    let doc = build_document(&resolved)?;
    Ok(render_svg(&doc))
}
