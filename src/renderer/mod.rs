//! Vector document construction and SVG serialization
//!
//! The document is an immutable tree of records built functionally from
//! resolved settings; turning it into SVG text is a separate pure
//! formatting pass, so identical input always serializes byte-for-byte
//! identically.

pub mod document;
pub mod svg;

pub use document::{build_document, LabelDocument, RoundedRect, Stroke, TextSpan};
pub use svg::{format_number, render_standalone_svg, render_svg};
