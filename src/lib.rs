//! plaque: text labels cached as exactly-sized bitmaps.
//!
//! Facade over the workspace crates. Typical use:
//!
//! ```no_run
//! use std::sync::Arc;
//! use plaque::{Label, OutlineTextProvider, Pixmap, TextProvider};
//!
//! fn main() -> anyhow::Result<()> {
//!     let provider: Arc<dyn TextProvider> =
//!         Arc::new(OutlineTextProvider::from_system_fonts());
//!     let mut label = Label::new(provider, "sans-serif");
//!     label.set_font_size(24.0);
//!     label.set_scale(2.0);
//!     label.set_color("white");
//!     label.set_text("Player One");
//!
//!     let mut hud = Pixmap::new(640, 480);
//!     label.draw(&mut hud, 16.0, 16.0);
//!     Ok(())
//! }
//! ```

pub use plaque_label::{Label, Padding};
pub use plaque_label::raster::{CoverageMask, Pixmap, RasterGlyph, Rgba, parse_color};
pub use plaque_label::text::{
    FontFace, FontLibrary, FontdueTextProvider, OutlineTextProvider, TextBounds, TextMetrics,
    TextProvider,
};
