pub mod contours;
pub mod preprocessing;
pub mod rows;
pub mod steps;

use crate::models::{GlyphCrop, GlyphSlot};
use image::DynamicImage;
use std::path::Path;

/// Sheet geometry and detection parameters.
///
/// `Default` reproduces the production sheet: 13 letter-pair rows, 12
/// glyphs per row (2 letters x 6 font variants), dark glyphs on a light
/// background.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Number of horizontal letter-pair bands in the sheet
    pub rows: u32,
    /// Expected glyph boxes per band
    pub slots_per_row: usize,
    /// Font variants per letter within a band
    pub font_variants: usize,
    /// Intensity above which a pixel counts as background
    pub threshold: u8,
    /// Padding added around each detected box before cropping
    pub margin: u32,
    /// Boxes with width or height at or below this are discarded as noise
    pub min_box_size: u32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            rows: 13,
            slots_per_row: 12,
            font_variants: 6,
            threshold: 200,
            margin: 2,
            min_box_size: 5,
        }
    }
}

/// Main splitter: partitions the sheet into row bands, detects glyph boxes
/// per band, and assigns each box to a (letter, font variant) slot.
pub struct SheetSplitter {
    pub config: SplitConfig,
    pub verbose: bool,
}

impl SheetSplitter {
    pub fn new(config: SplitConfig) -> Self {
        Self {
            config,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run detection over every row band and return the cropped glyphs.
    ///
    /// Rows yielding fewer boxes than `slots_per_row` emit a warning and
    /// contribute what they have; rows yielding more are truncated to the
    /// leftmost `slots_per_row`.
    pub fn extract(&self, sheet: &DynamicImage) -> Vec<GlyphCrop> {
        let cfg = &self.config;
        let mut crops = Vec::new();

        for row in 0..cfg.rows as usize {
            // Past 'Z' there is nothing left to label
            let Some((letter1, letter2)) = rows::letters_for_row(row) else {
                break;
            };

            let (y1, y2) = rows::band_span(sheet.height(), cfg.rows, row as u32);
            let band = sheet.crop_imm(0, y1, sheet.width(), y2 - y1);

            if self.verbose {
                println!("Row {} ({}/{}): band y {}..{}", row, letter1, letter2, y1, y2);
            }

            let gray = preprocessing::to_grayscale(&band);
            let binary = preprocessing::binarize(&gray, cfg.threshold);
            let mut boxes = contours::find_contours(&binary, cfg.min_box_size);
            boxes.sort_by_key(|c| c.min_x);

            if boxes.len() < cfg.slots_per_row {
                eprintln!(
                    "Row {}: found {} glyph boxes, expected {}. Some letters may be missing or merged.",
                    row,
                    boxes.len(),
                    cfg.slots_per_row
                );
            }
            boxes.truncate(cfg.slots_per_row);

            for (column, contour) in boxes.iter().enumerate() {
                let letter = if column < cfg.font_variants {
                    letter1
                } else {
                    letter2
                };
                let font_index = column % cfg.font_variants;

                if self.verbose {
                    println!(
                        "  box {}: x={} {}x{} ({} px) → {} font {}",
                        column,
                        contour.min_x,
                        contour.width(),
                        contour.height(),
                        contour.area(),
                        letter,
                        font_index + 1
                    );
                }

                crops.push(GlyphCrop {
                    slot: GlyphSlot { letter, font_index },
                    row,
                    column,
                    image: contour.extract_glyph(&band, cfg.margin),
                });
            }
        }

        crops
    }

    /// Extract every glyph and write it into `output_dir/font_<i>/<LETTER>.png`.
    /// Returns the number of files written.
    pub fn split_to_dir(&self, sheet: &DynamicImage, output_dir: &Path) -> anyhow::Result<usize> {
        crate::output::ensure_font_dirs(output_dir, self.config.font_variants)?;

        let crops = self.extract(sheet);
        for crop in &crops {
            crate::output::save_glyph(output_dir, &crop.slot, &crop.image)?;
        }

        Ok(crops.len())
    }
}

impl Default for SheetSplitter {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}

/// Build the standard split pipeline using the composable pipeline system
pub fn build_standard_pipeline(config: &SplitConfig, verbose: bool) -> crate::pipeline::Pipeline {
    use crate::detection::steps::*;
    use crate::pipeline::Pipeline;
    use std::sync::Arc;

    Pipeline::new()
        .with_verbose(verbose)
        .add_step(Arc::new(RowSplitStep { rows: config.rows }))
        .add_step(Arc::new(BinarizeStep {
            threshold: config.threshold,
        }))
        .add_step(Arc::new(GlyphDetectionStep {
            slots_per_row: config.slots_per_row,
            font_variants: config.font_variants,
            margin: config.margin,
            min_box_size: config.min_box_size,
        }))
}
