use harfrust::{
    Direction as HbDirection, FontRef as HbFontRef, ShaperData, ShaperInstance,
    UnicodeBuffer as HbUnicodeBuffer,
};
use swash::GlyphId;

use crate::FontFace;

/// A single shaped line of text.
#[derive(Debug, Clone)]
pub struct ShapedLine {
    /// Glyph IDs in visual order.
    pub glyphs: Vec<GlyphId>,
    /// Pen positions per glyph (x, y offsets from the line origin), pixels.
    pub positions: Vec<[f32; 2]>,
    /// Total advance width of the line in pixels.
    pub advance: f32,
}

/// Shape a single-line UTF-8 string with harfrust, assuming left-to-right
/// directionality. Kerning and ligatures follow HarfBuzz semantics.
pub fn shape_line(text: &str, font: &FontFace, font_size: f32) -> ShapedLine {
    let font_data = font.as_bytes();
    let font_ref = match HbFontRef::from_index(&font_data, 0) {
        Ok(f) => f,
        Err(_) => {
            return ShapedLine {
                glyphs: Vec::new(),
                positions: Vec::new(),
                advance: 0.0,
            };
        }
    };

    let data = ShaperData::new(&font_ref);
    let instance =
        ShaperInstance::from_variations(&font_ref, core::iter::empty::<harfrust::Variation>());
    let shaper = data
        .shaper(&font_ref)
        .instance(Some(&instance))
        .point_size(None)
        .build();

    let mut buffer = HbUnicodeBuffer::new();
    buffer.push_str(text);
    buffer.set_direction(HbDirection::LeftToRight);
    buffer.guess_segment_properties();

    let glyph_buffer = shaper.shape(buffer, &[]);
    let infos = glyph_buffer.glyph_infos();
    let positions = glyph_buffer.glyph_positions();

    // harfrust reports design units; convert to pixels via units-per-em.
    let metrics = font.metrics();
    let scale = if metrics.units_per_em != 0 {
        font_size / metrics.units_per_em as f32
    } else {
        1.0
    };

    let mut glyphs = Vec::with_capacity(infos.len());
    let mut glyph_positions = Vec::with_capacity(infos.len());
    let mut pen_x: f32 = 0.0;

    for (info, pos) in infos.iter().zip(positions.iter()) {
        let x_offset = pos.x_offset as f32 * scale;
        let y_offset = -(pos.y_offset as f32) * scale;

        glyphs.push(info.glyph_id as GlyphId);
        glyph_positions.push([pen_x + x_offset, y_offset]);
        pen_x += pos.x_advance as f32 * scale;
    }

    ShapedLine {
        glyphs,
        positions: glyph_positions,
        advance: pen_x,
    }
}
