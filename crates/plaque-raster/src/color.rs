use palette::{FromColor, LinSrgba, Srgba};

/// Premultiplied linear-space RGBA color.
///
/// Compositing math happens in linear space; conversions to and from the
/// sRGB u8 values used by pixmaps and color strings go through `palette`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Convenience alias matching `rgba(...)` usage in UI code.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_srgba_u8([r, g, b, a])
    }

    /// Create from sRGB u8 RGBA (premultiplied in linear space).
    #[inline]
    pub fn from_srgba_u8(c: [u8; 4]) -> Self {
        let s = Srgba::new(
            c[0] as f32 / 255.0,
            c[1] as f32 / 255.0,
            c[2] as f32 / 255.0,
            c[3] as f32 / 255.0,
        );
        let lin: LinSrgba = LinSrgba::from_color(s);
        Self {
            r: lin.red * lin.alpha,
            g: lin.green * lin.alpha,
            b: lin.blue * lin.alpha,
            a: lin.alpha,
        }
    }

    /// Convert back to sRGB u8 RGBA (unpremultiplied).
    #[inline]
    pub fn to_srgba_u8(&self) -> [u8; 4] {
        let (r, g, b) = if self.a > 0.0001 {
            (self.r / self.a, self.g / self.a, self.b / self.a)
        } else {
            (0.0, 0.0, 0.0)
        };

        let lin = LinSrgba::new(r, g, b, self.a);
        let srgb: Srgba = Srgba::from_color(lin);

        [
            (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.alpha * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// sRGB u8 RGBA with the color channels premultiplied by alpha.
    /// This is the storage format of [`crate::Pixmap`].
    #[inline]
    pub fn to_premul_srgba_u8(&self) -> [u8; 4] {
        let [r, g, b, a] = self.to_srgba_u8();
        let af = a as u32;
        [
            ((r as u32 * af + 127) / 255) as u8,
            ((g as u32 * af + 127) / 255) as u8,
            ((b as u32 * af + 127) / 255) as u8,
            a,
        ]
    }

    /// Scale all channels by a coverage value in [0, 1].
    ///
    /// Because the color is premultiplied, coverage-weighted tinting of a
    /// glyph mask is a uniform multiply.
    #[inline]
    pub fn mul_coverage(self, coverage: f32) -> Self {
        let c = coverage.clamp(0.0, 1.0);
        Self {
            r: self.r * c,
            g: self.g * c,
            b: self.b * c,
            a: self.a * c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_u8_round_trip() {
        for c in [[0u8, 0, 0, 255], [255, 255, 255, 255], [200, 60, 10, 255]] {
            assert_eq!(Rgba::from_srgba_u8(c).to_srgba_u8(), c);
        }
    }

    #[test]
    fn premul_storage_of_opaque_equals_straight() {
        let c = Rgba::rgba(12, 200, 77, 255);
        assert_eq!(c.to_premul_srgba_u8(), c.to_srgba_u8());
    }

    #[test]
    fn transparent_premultiplies_to_zero() {
        let c = Rgba::rgba(255, 128, 0, 0);
        assert_eq!(c.to_premul_srgba_u8(), [0, 0, 0, 0]);
    }

    #[test]
    fn coverage_scales_alpha() {
        let c = Rgba::BLACK.mul_coverage(0.5);
        assert!((c.a - 0.5).abs() < 1e-6);
    }
}
