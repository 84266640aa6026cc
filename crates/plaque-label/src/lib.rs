//! plaque-label: a text label cached as an exactly-sized bitmap.
//!
//! [`Label`] renders a string into an owned [`plaque_raster::Pixmap`] sized
//! to the measured text plus padding, ready to composite into a larger
//! surface (a HUD nameplate, an overlay badge). Every style change redraws
//! the bitmap synchronously; rendering at a supersampling scale and blitting
//! back at logical size keeps text crisp on scaled displays.

mod label;
mod padding;

pub use label::Label;
pub use padding::Padding;

// Re-export the support crates so downstream users need only one dependency.
pub use plaque_raster as raster;
pub use plaque_text as text;
