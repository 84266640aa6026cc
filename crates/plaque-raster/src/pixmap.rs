use std::path::Path;

use crate::{CoverageMask, Rgba};

/// Error raised when encoding or saving a pixmap as PNG.
#[derive(Debug)]
pub enum PixmapError {
    Io(std::io::Error),
    Encode(image::ImageError),
}

impl std::fmt::Display for PixmapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixmapError::Io(err) => write!(f, "pixmap I/O error: {err}"),
            PixmapError::Encode(err) => write!(f, "pixmap encode error: {err}"),
        }
    }
}

impl std::error::Error for PixmapError {}

/// An owned offscreen RGBA8 surface.
///
/// Pixels are stored row-major as sRGB-encoded, alpha-premultiplied RGBA.
/// Resizing reallocates and clears the surface, matching offscreen-canvas
/// semantics; a 0×0 pixmap is valid and draws nothing.
#[derive(Debug, Clone, Default)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Allocate a transparent pixmap of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; byte_len(width, height)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw premultiplied RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Resize the surface. Contents are cleared even when the dimensions
    /// are unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.resize(byte_len(width, height), 0);
    }

    /// Clear the whole surface to transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Fill the whole surface with a color.
    pub fn fill(&mut self, color: Rgba) {
        let px = color.to_premul_srgba_u8();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Fill a rectangle, clamped to the surface bounds.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        let px = color.to_premul_srgba_u8();
        self.for_rect(x, y, w, h, |chunk| chunk.copy_from_slice(&px));
    }

    /// Clear a rectangle to transparent, clamped to the surface bounds.
    pub fn clear_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        self.for_rect(x, y, w, h, |chunk| chunk.fill(0));
    }

    fn for_rect(&mut self, x: i32, y: i32, w: u32, h: u32, mut f: impl FnMut(&mut [u8])) {
        let x0 = x.max(0) as u32;
        let y0 = y.max(0) as u32;
        let x1 = (x.saturating_add(w as i32)).clamp(0, self.width as i32) as u32;
        let y1 = (y.saturating_add(h as i32)).clamp(0, self.height as i32) as u32;
        for row in y0..y1 {
            let start = (row as usize * self.width as usize + x0 as usize) * 4;
            let end = (row as usize * self.width as usize + x1 as usize) * 4;
            for chunk in self.data[start..end].chunks_exact_mut(4) {
                f(chunk);
            }
        }
    }

    /// Read one pixel as premultiplied sRGB RGBA. Out of bounds returns
    /// transparent.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Composite a grayscale coverage mask tinted with `color` at (x, y),
    /// source-over. The offset is rounded to whole pixels.
    pub fn composite_mask(&mut self, mask: &CoverageMask, x: f32, y: f32, color: Rgba) {
        if mask.is_empty() {
            return;
        }
        let ox = x.round() as i64;
        let oy = y.round() as i64;
        for my in 0..mask.height as i64 {
            let py = oy + my;
            if py < 0 || py >= self.height as i64 {
                continue;
            }
            for mx in 0..mask.width as i64 {
                let px = ox + mx;
                if px < 0 || px >= self.width as i64 {
                    continue;
                }
                let cov = mask.data[(my as u32 * mask.width + mx as u32) as usize];
                if cov == 0 {
                    continue;
                }
                let src = color
                    .mul_coverage(cov as f32 / 255.0)
                    .to_premul_srgba_u8();
                let i = (py as usize * self.width as usize + px as usize) * 4;
                blend_over(&mut self.data[i..i + 4], src);
            }
        }
    }

    /// Blit `src` into this pixmap at (x, y), scaled to `dst_w` × `dst_h`
    /// logical pixels, with bilinear sampling and source-over blending.
    ///
    /// A supersampled source lands at its logical size, so the visible
    /// result is independent of the source's internal scale factor.
    pub fn draw_pixmap(&mut self, src: &Pixmap, x: f32, y: f32, dst_w: f32, dst_h: f32) {
        if src.is_empty() || dst_w <= 0.0 || dst_h <= 0.0 {
            return;
        }
        let x0 = x.floor().max(0.0) as i64;
        let y0 = y.floor().max(0.0) as i64;
        let x1 = ((x + dst_w).ceil() as i64).min(self.width as i64);
        let y1 = ((y + dst_h).ceil() as i64).min(self.height as i64);

        for py in y0..y1 {
            for px in x0..x1 {
                // Center of the destination pixel, mapped back into source space.
                let u = ((px as f32 + 0.5 - x) / dst_w) * src.width as f32 - 0.5;
                let v = ((py as f32 + 0.5 - y) / dst_h) * src.height as f32 - 0.5;
                let s = src.sample_bilinear(u, v);
                if s[3] == 0 && s[0] == 0 && s[1] == 0 && s[2] == 0 {
                    continue;
                }
                let i = (py as usize * self.width as usize + px as usize) * 4;
                blend_over(&mut self.data[i..i + 4], s);
            }
        }
    }

    fn sample_bilinear(&self, u: f32, v: f32) -> [u8; 4] {
        let max_x = self.width as i64 - 1;
        let max_y = self.height as i64 - 1;
        let fx = u.floor();
        let fy = v.floor();
        let tx = u - fx;
        let ty = v - fy;

        let x0 = (fx as i64).clamp(0, max_x) as u32;
        let x1 = (fx as i64 + 1).clamp(0, max_x) as u32;
        let y0 = (fy as i64).clamp(0, max_y) as u32;
        let y1 = (fy as i64 + 1).clamp(0, max_y) as u32;

        let p00 = self.pixel(x0, y0);
        let p10 = self.pixel(x1, y0);
        let p01 = self.pixel(x0, y1);
        let p11 = self.pixel(x1, y1);

        let mut out = [0u8; 4];
        for c in 0..4 {
            let top = p00[c] as f32 * (1.0 - tx) + p10[c] as f32 * tx;
            let bottom = p01[c] as f32 * (1.0 - tx) + p11[c] as f32 * tx;
            out[c] = (top * (1.0 - ty) + bottom * ty).round().clamp(0.0, 255.0) as u8;
        }
        out
    }

    /// Encode as PNG bytes (alpha unpremultiplied on the way out).
    pub fn encode_png(&self) -> Result<Vec<u8>, PixmapError> {
        let mut rgba = Vec::with_capacity(self.data.len());
        for chunk in self.data.chunks_exact(4) {
            let a = chunk[3] as u32;
            if a == 0 {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                rgba.push(((chunk[0] as u32 * 255 + a / 2) / a).min(255) as u8);
                rgba.push(((chunk[1] as u32 * 255 + a / 2) / a).min(255) as u8);
                rgba.push(((chunk[2] as u32 * 255 + a / 2) / a).min(255) as u8);
                rgba.push(a as u8);
            }
        }
        let Some(img) = image::RgbaImage::from_raw(self.width, self.height, rgba) else {
            return Err(PixmapError::Io(std::io::Error::other(
                "pixel buffer size mismatch",
            )));
        };
        let mut out = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut out),
            image::ImageFormat::Png,
        )
        .map_err(PixmapError::Encode)?;
        Ok(out)
    }

    /// Write the pixmap to a PNG file. Debug aid for examples and tests.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), PixmapError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).map_err(PixmapError::Io)
    }
}

/// Byte length of a `width` × `height` RGBA8 buffer, computed in `usize`
/// so pathological dimensions cannot overflow `u32`.
#[inline]
fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

/// Premultiplied source-over: dst = src + dst * (1 - src.a).
#[inline]
fn blend_over(dst: &mut [u8], src: [u8; 4]) {
    let inv = 255 - src[3] as u32;
    for c in 0..4 {
        dst[c] = (src[c] as u32 + (dst[c] as u32 * inv + 127) / 255).min(255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_clears_contents() {
        let mut pm = Pixmap::new(4, 4);
        pm.fill(Rgba::WHITE);
        pm.resize(4, 4);
        assert_eq!(pm.pixel(1, 1), [0, 0, 0, 0]);

        pm.fill(Rgba::WHITE);
        pm.resize(2, 8);
        assert_eq!(pm.width(), 2);
        assert_eq!(pm.height(), 8);
        assert!(pm.data().iter().all(|b| *b == 0));
    }

    #[test]
    fn fill_rect_clamps_to_bounds() {
        let mut pm = Pixmap::new(4, 4);
        pm.fill_rect(-2, -2, 4, 4, Rgba::WHITE);
        assert_eq!(pm.pixel(0, 0), [255, 255, 255, 255]);
        assert_eq!(pm.pixel(2, 2), [0, 0, 0, 0]);

        pm.clear();
        pm.fill_rect(3, 3, 10, 10, Rgba::WHITE);
        assert_eq!(pm.pixel(3, 3), [255, 255, 255, 255]);
        assert_eq!(pm.pixel(2, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn clear_rect_punches_hole() {
        let mut pm = Pixmap::new(3, 3);
        pm.fill(Rgba::WHITE);
        pm.clear_rect(1, 1, 1, 1);
        assert_eq!(pm.pixel(1, 1), [0, 0, 0, 0]);
        assert_eq!(pm.pixel(0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn composite_mask_covers_and_blends() {
        let mut pm = Pixmap::new(4, 4);
        let mask = CoverageMask::solid(2, 2);
        pm.composite_mask(&mask, 1.0, 1.0, Rgba::WHITE);
        assert_eq!(pm.pixel(1, 1), [255, 255, 255, 255]);
        assert_eq!(pm.pixel(0, 0), [0, 0, 0, 0]);

        // Half coverage over an opaque background keeps full alpha.
        let mut pm = Pixmap::new(1, 1);
        pm.fill(Rgba::BLACK);
        let half = CoverageMask::new(1, 1, vec![128]);
        pm.composite_mask(&half, 0.0, 0.0, Rgba::WHITE);
        assert_eq!(pm.pixel(0, 0)[3], 255);
        assert!(pm.pixel(0, 0)[0] > 0);
    }

    #[test]
    fn draw_pixmap_scales_to_destination_size() {
        let mut src = Pixmap::new(4, 4);
        src.fill(Rgba::WHITE);

        let mut dst = Pixmap::new(8, 8);
        dst.draw_pixmap(&src, 0.0, 0.0, 2.0, 2.0);
        assert_eq!(dst.pixel(0, 0), [255, 255, 255, 255]);
        assert_eq!(dst.pixel(1, 1), [255, 255, 255, 255]);
        assert_eq!(dst.pixel(3, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn draw_pixmap_empty_source_is_noop() {
        let src = Pixmap::new(0, 0);
        let mut dst = Pixmap::new(2, 2);
        dst.fill(Rgba::BLACK);
        let before = dst.data().to_vec();
        dst.draw_pixmap(&src, 0.0, 0.0, 2.0, 2.0);
        assert_eq!(dst.data(), &before[..]);
    }

    #[test]
    fn byte_len_is_computed_in_usize() {
        // 2^17 * 2^16 pixels overflows a u32 byte count.
        assert_eq!(byte_len(1 << 17, 1 << 16), 4usize << 33);
        assert_eq!(byte_len(0, 1 << 31), 0);
    }

    #[test]
    fn png_round_trips_dimensions() {
        let mut pm = Pixmap::new(3, 2);
        pm.fill(Rgba::rgba(10, 20, 30, 255));
        let png = pm.encode_png().unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
    }
}
