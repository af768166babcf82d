//! Physical-unit conversion for the 96-DPI virtual canvas
//!
//! All geometry inside the engine is computed in pixel units at a fixed
//! 96-DPI resolution. Millimeters only appear in document sizing metadata
//! and in user-facing settings.

/// Pixels per millimeter at 96 DPI.
pub const MM_TO_PX: f64 = 96.0 / 25.4;

/// Pixels per typographic point at 96 DPI.
pub const PT_TO_PX: f64 = 96.0 / 72.0;

/// Convert millimeters to device pixels.
pub fn mm_to_px(mm: f64) -> f64 {
    mm * MM_TO_PX
}

/// Convert typographic points to device pixels.
pub fn pt_to_px(pt: f64) -> f64 {
    pt * PT_TO_PX
}

/// Convert device pixels back to millimeters.
pub fn px_to_mm(px: f64) -> f64 {
    px / MM_TO_PX
}
