//! Output tree handling: one folder per font variant, one PNG per letter.

use crate::models::GlyphSlot;
use anyhow::Result;
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Create `font_1` .. `font_N` under the output root. Idempotent.
pub fn ensure_font_dirs(output_dir: &Path, font_variants: usize) -> Result<()> {
    for i in 0..font_variants {
        let dir = output_dir.join(format!("font_{}", i + 1));
        fs::create_dir_all(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", dir.display(), e))?;
    }
    Ok(())
}

/// Path a glyph is written to: `<output_dir>/font_<i+1>/<LETTER>.png`
pub fn glyph_path(output_dir: &Path, slot: &GlyphSlot) -> PathBuf {
    output_dir
        .join(format!("font_{}", slot.font_index + 1))
        .join(format!("{}.png", slot.letter))
}

/// Write one glyph crop as PNG (lossless), replacing any file already at
/// that path.
pub fn save_glyph(output_dir: &Path, slot: &GlyphSlot, image: &DynamicImage) -> Result<()> {
    let path = glyph_path(output_dir, slot);
    image
        .save(&path)
        .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", path.display(), e))?;
    Ok(())
}
