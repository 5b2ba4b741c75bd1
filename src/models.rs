use image::DynamicImage;

/// Connected foreground region in a binarized row band.
/// All coordinates are band-local.
#[derive(Debug, Clone)]
pub struct Contour {
    pub label: u32,
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
    pub pixel_count: u32,
}

impl Contour {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    pub fn area(&self) -> u32 {
        self.pixel_count
    }

    /// True when either dimension is at or below `min_size` — anti-aliasing
    /// specks and stray marks rather than glyphs.
    pub fn is_noise(&self, min_size: u32) -> bool {
        self.width() <= min_size || self.height() <= min_size
    }

    /// Crop this region out of its row band with `margin` pixels of padding
    /// on every side, clamped to the band's own extent.
    pub fn extract_glyph(&self, band: &DynamicImage, margin: u32) -> DynamicImage {
        let x1 = self.min_x.saturating_sub(margin);
        let y1 = self.min_y.saturating_sub(margin);
        let x2 = (self.max_x + 1 + margin).min(band.width());
        let y2 = (self.max_y + 1 + margin).min(band.height());
        band.crop_imm(x1, y1, x2 - x1, y2 - y1)
    }
}

/// Where an extracted glyph belongs in the output tree.
/// `font_index` is 0-based; output folders are `font_{font_index + 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSlot {
    pub letter: char,
    pub font_index: usize,
}

/// One cropped glyph together with its assigned slot and where in the
/// sheet it came from.
#[derive(Debug, Clone)]
pub struct GlyphCrop {
    pub slot: GlyphSlot,
    pub row: usize,
    pub column: usize,
    pub image: DynamicImage,
}
