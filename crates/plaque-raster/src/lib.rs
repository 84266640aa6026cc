//! plaque-raster: CPU pixel surfaces for label rendering.
//!
//! Provides the drawing primitives the label cache composes:
//! - [`Rgba`]: premultiplied linear-space color with sRGB conversions
//! - [`parse_color`]: CSS-style color string parsing
//! - [`Pixmap`]: an owned RGBA8 surface with resize/fill/blit operations
//! - [`CoverageMask`] / [`RasterGlyph`]: grayscale glyph coverage for tinted
//!   compositing

mod color;
mod css;
mod mask;
mod pixmap;

pub use color::Rgba;
pub use css::parse_color;
pub use mask::{CoverageMask, RasterGlyph};
pub use pixmap::{Pixmap, PixmapError};
