use std::sync::Arc;

use plaque_raster::{CoverageMask, RasterGlyph};

use crate::shape::shape_line;
use crate::{FontFace, FontLibrary, Result, ScaledFontMetrics};

/// Tight bounding box of a measured line, relative to the pen origin on the
/// baseline. `left` can be negative (left bearing); `ascent`/`descent` are
/// positive distances above/below the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    pub left: f32,
    pub right: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl TextBounds {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Result of measuring a single line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Total advance width in pixels.
    pub advance: f32,
    /// Tight bounds when the provider can compute them; `None` means the
    /// caller must fall back to advance width and the nominal font height.
    pub bounds: Option<TextBounds>,
}

/// Measurement and rasterization seam consumed by the label cache.
///
/// Offset convention for [`rasterize`](TextProvider::rasterize): when
/// [`measure`](TextProvider::measure) reports `bounds`, glyph offsets are
/// relative to a pen at (0, 0) on the baseline; when it reports `None`,
/// offsets are relative to the top-left of the line box instead. The label
/// positions the run accordingly.
pub trait TextProvider: Send + Sync {
    /// Measure a single line at the given pixel size. `None` when the
    /// family cannot be resolved to any usable face.
    fn measure(&self, family: &str, font_px: f32, text: &str) -> Option<TextMetrics>;

    /// Rasterize a single line to grayscale coverage masks.
    fn rasterize(&self, family: &str, font_px: f32, text: &str) -> Vec<RasterGlyph>;
}

/// Provider backed by harfrust shaping and swash outline rasterization,
/// resolving family names through a [`FontLibrary`]. Reports tight
/// bounding-box metrics derived from the rasterized glyphs; runs with no
/// ink (all whitespace) report a line box from the face's scaled metrics.
pub struct OutlineTextProvider {
    library: FontLibrary,
}

impl OutlineTextProvider {
    pub fn new(library: FontLibrary) -> Self {
        Self { library }
    }

    /// Convenience constructor over the system font directories.
    pub fn from_system_fonts() -> Self {
        Self::new(FontLibrary::from_system())
    }

    pub fn library(&self) -> &FontLibrary {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut FontLibrary {
        &mut self.library
    }

    fn raster_line(face: &FontFace, font_px: f32, text: &str) -> Vec<RasterGlyph> {
        use swash::scale::image::Content;
        use swash::scale::{Render, ScaleContext, Source, StrikeWith};

        let shaped = shape_line(text, face, font_px.max(1.0));

        let mut ctx = ScaleContext::new();
        let mut scaler = ctx
            .builder(face.as_swash_ref())
            .size(font_px.max(1.0))
            .hint(true)
            .build();
        let renderer = Render::new(&[
            // Prefer scalable outlines; fall back to embedded bitmaps.
            Source::Outline,
            Source::Bitmap(StrikeWith::BestFit),
            Source::ColorBitmap(StrikeWith::BestFit),
        ]);

        let mut out = Vec::new();
        for (gid, pos) in shaped.glyphs.iter().zip(shaped.positions.iter()) {
            let Some(img) = renderer.render(&mut scaler, *gid) else {
                continue;
            };
            let w = img.placement.width;
            let h = img.placement.height;
            if w == 0 || h == 0 {
                continue;
            }

            let gray = match img.content {
                Content::Mask => img.data.clone(),
                // Derive coverage from the alpha channel of color bitmaps.
                Content::Color => {
                    let mut gray = Vec::with_capacity((w * h) as usize);
                    let mut i = 0usize;
                    while i + 3 < img.data.len() {
                        gray.push(img.data[i + 3]);
                        i += 4;
                    }
                    gray
                }
                // Subpixel coverage lives in the RGB channels (alpha is
                // unused); the green channel is the center sample.
                Content::SubpixelMask => {
                    let mut gray = Vec::with_capacity((w * h) as usize);
                    let mut i = 1usize;
                    while i < img.data.len() {
                        gray.push(img.data[i]);
                        i += 4;
                    }
                    gray
                }
            };
            if gray.len() != (w * h) as usize {
                continue;
            }

            let ox = pos[0] + img.placement.left as f32;
            let oy = pos[1] - img.placement.top as f32;
            out.push(RasterGlyph {
                offset: [ox, oy],
                mask: CoverageMask::new(w, h, gray),
            });
        }
        out
    }

    fn bounds_of(glyphs: &[RasterGlyph]) -> Option<TextBounds> {
        let mut left = f32::MAX;
        let mut right = f32::MIN;
        let mut top = f32::MAX;
        let mut bottom = f32::MIN;
        for g in glyphs {
            left = left.min(g.offset[0]);
            right = right.max(g.offset[0] + g.mask.width as f32);
            top = top.min(g.offset[1]);
            bottom = bottom.max(g.offset[1] + g.mask.height as f32);
        }
        if left > right || top > bottom {
            return None;
        }
        Some(TextBounds {
            left,
            right,
            // Offsets are baseline-relative and y-down, so the glyph top
            // above the baseline is negative.
            ascent: -top,
            descent: bottom,
        })
    }

    /// Line box for a run with no ink (e.g. all spaces): the advance wide,
    /// the face's scaled ascent/descent tall.
    fn line_box(metrics: ScaledFontMetrics, advance: f32) -> TextBounds {
        TextBounds {
            left: 0.0,
            right: advance,
            ascent: metrics.ascent,
            descent: metrics.descent,
        }
    }
}

impl TextProvider for OutlineTextProvider {
    fn measure(&self, family: &str, font_px: f32, text: &str) -> Option<TextMetrics> {
        let face = self.library.resolve(family)?;
        let px = font_px.max(1.0);
        let shaped = shape_line(text, &face, px);
        let glyphs = Self::raster_line(&face, font_px, text);
        let bounds = Self::bounds_of(&glyphs).or_else(|| {
            (shaped.advance > 0.0).then(|| Self::line_box(face.scaled_metrics(px), shaped.advance))
        });
        Some(TextMetrics {
            advance: shaped.advance,
            bounds,
        })
    }

    fn rasterize(&self, family: &str, font_px: f32, text: &str) -> Vec<RasterGlyph> {
        let Some(face) = self.library.resolve(family) else {
            return Vec::new();
        };
        Self::raster_line(&face, font_px, text)
    }
}

/// Simple single-font provider built on fontdue.
///
/// Ignores the requested family (it always draws with its one font) and
/// never reports tight bounds, exercising the advance-width/font-height
/// fallback path in the label. Kept for hosts that bundle a single font and
/// want to avoid the shaping stack.
pub struct FontdueTextProvider {
    font: fontdue::Font,
}

impl FontdueTextProvider {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|_| crate::FontError::InvalidFont)?;
        Ok(Self { font })
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

impl TextProvider for FontdueTextProvider {
    fn measure(&self, _family: &str, font_px: f32, text: &str) -> Option<TextMetrics> {
        let px = font_px.max(1.0);
        let advance = text
            .chars()
            .map(|c| self.font.metrics(c, px).advance_width)
            .sum();
        Some(TextMetrics {
            advance,
            bounds: None,
        })
    }

    fn rasterize(&self, _family: &str, font_px: f32, text: &str) -> Vec<RasterGlyph> {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: 0.0,
            y: 0.0,
            ..LayoutSettings::default()
        });
        layout.append(
            &[&self.font],
            &TextStyle::new(text, font_px.max(1.0), 0),
        );

        let mut out = Vec::new();
        for g in layout.glyphs() {
            let (metrics, bitmap) = self.font.rasterize_indexed(g.key.glyph_index, g.key.px);
            if metrics.width == 0 || metrics.height == 0 {
                continue;
            }
            // Layout already provides the glyph's top-left relative to the
            // top of the line for PositiveYDown.
            out.push(RasterGlyph {
                offset: [g.x, g.y],
                mask: CoverageMask::new(metrics.width as u32, metrics.height as u32, bitmap),
            });
        }
        out
    }
}

impl<T: TextProvider + ?Sized> TextProvider for Arc<T> {
    fn measure(&self, family: &str, font_px: f32, text: &str) -> Option<TextMetrics> {
        (**self).measure(family, font_px, text)
    }

    fn rasterize(&self, family: &str, font_px: f32, text: &str) -> Vec<RasterGlyph> {
        (**self).rasterize(family, font_px, text)
    }
}
