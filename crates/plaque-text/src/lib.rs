//! plaque-text: font loading, measurement and glyph rasterization.
//!
//! The label cache consumes fonts through the [`TextProvider`] trait:
//! - [`OutlineTextProvider`]: harfrust shaping + swash rasterization with
//!   tight bounding-box metrics, resolving family names through a
//!   fontdb-backed [`FontLibrary`]
//! - [`FontdueTextProvider`]: a single-font provider with advance-width
//!   metrics only (no tight bounds), the simple fallback path

pub mod face;
pub mod library;
pub mod metrics;
pub mod provider;
pub mod shape;

pub use face::FontFace;
pub use library::FontLibrary;
pub use metrics::{FontMetrics, ScaledFontMetrics};
pub use provider::{
    FontdueTextProvider, OutlineTextProvider, TextBounds, TextMetrics, TextProvider,
};

use thiserror::Error;

/// Errors that can occur while working with fonts.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("font I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid or unsupported font data")]
    InvalidFont,
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;
