/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Units per em.
    pub units_per_em: u16,
}

impl FontMetrics {
    /// Line height (ascent + descent + line_gap).
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }

    /// Scale metrics to a pixel size (px per em).
    pub fn scale_to_pixels(&self, font_size: f32) -> ScaledFontMetrics {
        let scale = if self.units_per_em != 0 {
            font_size / self.units_per_em as f32
        } else {
            1.0
        };
        ScaledFontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            line_gap: self.line_gap * scale,
            font_size,
        }
    }
}

/// Scaled font metrics in pixels.
#[derive(Debug, Clone, Copy)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub font_size: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_by_units_per_em() {
        let m = FontMetrics {
            ascent: 1600.0,
            descent: 400.0,
            line_gap: 0.0,
            units_per_em: 2000,
        };
        let s = m.scale_to_pixels(20.0);
        assert!((s.ascent - 16.0).abs() < 1e-6);
        assert!((s.descent - 4.0).abs() < 1e-6);
        assert!((s.font_size - 20.0).abs() < 1e-6);
    }

    #[test]
    fn zero_upem_leaves_values_unscaled() {
        let m = FontMetrics {
            ascent: 10.0,
            descent: 2.0,
            line_gap: 1.0,
            units_per_em: 0,
        };
        let s = m.scale_to_pixels(16.0);
        assert!((s.ascent - 10.0).abs() < 1e-6);
        assert!((m.line_height() - 13.0).abs() < 1e-6);
    }
}
