//! Layout engine for label text blocks
//!
//! Two concerns live here: deriving a label's footprint from measured text
//! (auto-fit), and placing each line's baseline so the whole stack sits
//! optically centered in the label.

pub mod autofit;
pub mod baseline;

pub use autofit::{compute_auto_size, AutoFitSize};
pub use baseline::{baseline_positions, block_height};
