/// Grayscale coverage mask produced by a glyph rasterizer.
///
/// One byte per pixel, row-major: 0 is no coverage, 255 full coverage.
#[derive(Debug, Clone)]
pub struct CoverageMask {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl CoverageMask {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height) as usize);
        Self {
            width,
            height,
            data,
        }
    }

    /// A fully covered mask, handy for tests.
    pub fn solid(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![255; (width * height) as usize],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rasterized glyph: a coverage mask plus its offset from the pen origin.
#[derive(Debug, Clone)]
pub struct RasterGlyph {
    /// Top-left of the mask relative to the run origin, in pixels.
    pub offset: [f32; 2],
    pub mask: CoverageMask,
}
