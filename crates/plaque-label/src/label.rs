use std::sync::Arc;

use plaque_raster::{Pixmap, Rgba, parse_color};
use plaque_text::{TextProvider, TextMetrics};

use crate::Padding;

/// A text label cached as an exactly-sized bitmap.
///
/// Owns a style record (font family, size, colors, scale, padding, text)
/// and a backing [`Pixmap`] sized to the measured text plus padding. Every
/// effective style change redraws the bitmap synchronously, so callers
/// always observe an up-to-date image; setting a property to its current
/// value is a complete no-op.
///
/// The bitmap is rendered at `font_size * scale` pixels and blitted back at
/// logical size by [`draw`](Label::draw), so a scale above 1 supersamples
/// the text without changing its on-screen size.
///
/// Missing or invalid style never raises an error: the bitmap just ends up
/// empty (0×0) until the required fields (family, size, color, scale, text)
/// are all set. Single-threaded by design; wrap in external synchronization
/// if shared across threads.
pub struct Label {
    provider: Arc<dyn TextProvider>,
    font_family: String,
    color: String,
    background: Option<String>,
    font_size: Option<f32>,
    scale: f32,
    padding: Padding,
    text: Option<String>,
    bitmap: Pixmap,
    revision: u64,
}

impl Label {
    /// Create a label drawing with the given font family. All other style
    /// starts at its default: color "black", scale 1, zero padding, no
    /// size, background or text.
    pub fn new(provider: Arc<dyn TextProvider>, font_family: impl Into<String>) -> Self {
        Self {
            provider,
            font_family: font_family.into(),
            color: "black".to_string(),
            background: None,
            font_size: None,
            scale: 1.0,
            padding: Padding::ZERO,
            text: None,
            bitmap: Pixmap::new(10, 10),
            revision: 0,
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The backing bitmap, at pixel (scaled) dimensions.
    pub fn pixmap(&self) -> &Pixmap {
        &self.bitmap
    }

    /// Number of redraws so far. Bumps once per effective style change, so
    /// hosts can re-upload the bitmap only when this moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Logical width: bitmap pixel width divided by the scale factor.
    pub fn width(&self) -> f32 {
        if self.bitmap.is_empty() || self.scale <= 0.0 {
            0.0
        } else {
            self.bitmap.width() as f32 / self.scale
        }
    }

    /// Logical height: bitmap pixel height divided by the scale factor.
    pub fn height(&self) -> f32 {
        if self.bitmap.is_empty() || self.scale <= 0.0 {
            0.0
        } else {
            self.bitmap.height() as f32 / self.scale
        }
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        let family = family.into();
        if self.font_family != family {
            self.font_family = family;
            self.redraw();
        }
    }

    pub fn set_font_size(&mut self, size: f32) {
        if self.font_size != Some(size) {
            self.font_size = Some(size);
            self.redraw();
        }
    }

    pub fn set_scale(&mut self, scale: f32) {
        if self.scale != scale {
            self.scale = scale;
            self.redraw();
        }
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        if self.color != color {
            self.color = color;
            self.redraw();
        }
    }

    pub fn set_background(&mut self, background: Option<&str>) {
        let background = background.map(str::to_string);
        if self.background != background {
            self.background = background;
            self.redraw();
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = Some(text.into());
        if self.text != text {
            self.text = text;
            self.redraw();
        }
    }

    pub fn clear_text(&mut self) {
        if self.text.is_some() {
            self.text = None;
            self.redraw();
        }
    }

    pub fn set_padding(&mut self, padding: impl Into<Padding>) {
        let padding = padding.into();
        if self.padding != padding {
            self.padding = padding;
            self.redraw();
        }
    }

    /// Set padding from CSS-style shorthand (1, 2 or 4 values). Any other
    /// length keeps the previous padding; a warning is logged so hosts can
    /// surface the mistake.
    pub fn set_padding_values(&mut self, values: &[f32]) {
        match Padding::from_values(values) {
            Some(padding) => self.set_padding(padding),
            None => log::warn!(
                "ignoring padding shorthand with {} values (expected 1, 2 or 4)",
                values.len()
            ),
        }
    }

    /// Blit the label into `dest` at (x, y), stretched to its logical size.
    /// No-op while the bitmap is empty.
    pub fn draw(&self, dest: &mut Pixmap, x: f32, y: f32) {
        if self.bitmap.is_empty() {
            return;
        }
        dest.draw_pixmap(&self.bitmap, x, y, self.width(), self.height());
    }

    fn redraw(&mut self) {
        self.revision += 1;
        self.bitmap.clear();

        let ready = !self.font_family.is_empty()
            && !self.color.is_empty()
            && self.scale > 0.0
            && self.font_size.is_some_and(|s| s > 0.0)
            && self.text.as_deref().is_some_and(|t| !t.is_empty());
        if !ready {
            self.bitmap.resize(0, 0);
            return;
        }

        let font_px = self.font_size.unwrap_or_default() * self.scale;
        let text = self.text.clone().unwrap_or_default();

        let Some(metrics) = self.provider.measure(&self.font_family, font_px, &text) else {
            log::warn!("no usable font for family {:?}", self.font_family);
            self.bitmap.resize(0, 0);
            return;
        };

        // Tight bounds when the provider has them; otherwise advance width
        // and nominal font height with the pen at the top of the line.
        let (baseline, text_w, text_h) = match metrics {
            TextMetrics {
                bounds: Some(b), ..
            } => (b.ascent, b.width(), b.height()),
            TextMetrics { advance, .. } => (0.0, advance, font_px),
        };

        let dx = self.padding.left;
        let dy = baseline + self.padding.top;
        let width = text_w + self.padding.horizontal();
        let height = text_h + self.padding.vertical();
        if width <= 0.0 || height <= 0.0 {
            self.bitmap.resize(0, 0);
            return;
        }

        self.bitmap.resize(width.ceil() as u32, height.ceil() as u32);

        if let Some(background) = &self.background {
            match parse_color(background) {
                Some(c) => self.bitmap.fill(c),
                None => {
                    log::warn!("unparsable background color {background:?}; leaving transparent")
                }
            }
        }

        let fg = parse_color(&self.color).unwrap_or_else(|| {
            log::warn!("unparsable color {:?}; falling back to black", self.color);
            Rgba::BLACK
        });

        for glyph in self.provider.rasterize(&self.font_family, font_px, &text) {
            self.bitmap
                .composite_mask(&glyph.mask, dx + glyph.offset[0], dy + glyph.offset[1], fg);
        }

        log::debug!(
            "label redrawn: {}x{} px, revision {}",
            self.bitmap.width(),
            self.bitmap.height(),
            self.revision
        );
    }
}
