use crate::detection::{contours, preprocessing, rows};
use crate::pipeline::{BoundingBox, MetadataValue, PipelineContext, PipelineData, PipelineStep};
use anyhow::Result;

/// Split the sheet into its horizontal letter-pair bands - one image
/// becomes up to `rows` band items
pub struct RowSplitStep {
    pub rows: u32,
}

impl PipelineStep for RowSplitStep {
    fn process(
        &self,
        data: Vec<PipelineData>,
        _context: &PipelineContext,
    ) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();

        for item in data {
            let width = item.image.width();
            let height = item.image.height();

            for row in 0..self.rows as usize {
                let Some((letter1, letter2)) = rows::letters_for_row(row) else {
                    break;
                };

                let (y1, y2) = rows::band_span(height, self.rows, row as u32);
                let band = item.image.crop_imm(0, y1, width, y2 - y1);
                let bbox = BoundingBox {
                    x: 0,
                    y: y1,
                    width,
                    height: y2 - y1,
                };

                let mut band_item = PipelineData::from_region(band, item.original.clone(), bbox);
                band_item
                    .metadata
                    .insert("row".to_string(), MetadataValue::Int(row as i32));
                band_item.metadata.insert(
                    "letters".to_string(),
                    MetadataValue::String(format!("{}{}", letter1, letter2)),
                );
                result.push(band_item);
            }
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Row Split"
    }
}

/// Binarize each band: grayscale, then inverted fixed threshold so dark
/// glyph strokes become foreground
pub struct BinarizeStep {
    pub threshold: u8,
}

impl PipelineStep for BinarizeStep {
    fn process(
        &self,
        data: Vec<PipelineData>,
        _context: &PipelineContext,
    ) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();
        for item in data {
            let gray = preprocessing::to_grayscale(&item.image);
            let binary = preprocessing::binarize(&gray, self.threshold);
            let new_item = PipelineData {
                image: image::DynamicImage::ImageLuma8(binary),
                original: item.original.clone(),
                bbox: item.bbox.clone(),
                metadata: item.metadata.clone(),
            };
            result.push(new_item);
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Binarize"
    }
}

/// Detect glyph boxes in each binarized band and crop them from the color
/// sheet - each band splits into up to `slots_per_row` glyph items tagged
/// with their letter and font variant
pub struct GlyphDetectionStep {
    pub slots_per_row: usize,
    pub font_variants: usize,
    pub margin: u32,
    pub min_box_size: u32,
}

impl PipelineStep for GlyphDetectionStep {
    fn process(
        &self,
        data: Vec<PipelineData>,
        _context: &PipelineContext,
    ) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();

        for item in data {
            let row = item
                .get_int("row")
                .ok_or_else(|| anyhow::anyhow!("Missing row"))?;
            let letters = item
                .get_string("letters")
                .ok_or_else(|| anyhow::anyhow!("Missing letters"))?;
            let mut letter_pair = letters.chars();
            let (Some(letter1), Some(letter2)) = (letter_pair.next(), letter_pair.next()) else {
                return Err(anyhow::anyhow!("Malformed letter pair: {:?}", letters));
            };
            let band = item
                .bbox
                .clone()
                .ok_or_else(|| anyhow::anyhow!("Missing band bounding box"))?;

            let binary = item.image.to_luma8();
            let mut boxes = contours::find_contours(&binary, self.min_box_size);
            boxes.sort_by_key(|c| c.min_x);

            if boxes.len() < self.slots_per_row {
                eprintln!(
                    "Row {}: found {} glyph boxes, expected {}. Some letters may be missing or merged.",
                    row,
                    boxes.len(),
                    self.slots_per_row
                );
            }
            boxes.truncate(self.slots_per_row);

            for (column, contour) in boxes.iter().enumerate() {
                let letter = if column < self.font_variants {
                    letter1
                } else {
                    letter2
                };
                let font_index = column % self.font_variants;

                // Margin-expanded crop rect, clamped to the band's own extent
                let x1 = contour.min_x.saturating_sub(self.margin);
                let y1 = contour.min_y.saturating_sub(self.margin);
                let x2 = (contour.max_x + 1 + self.margin).min(band.width);
                let y2 = (contour.max_y + 1 + self.margin).min(band.height);

                let bbox = BoundingBox {
                    x: band.x + x1,
                    y: band.y + y1,
                    width: x2 - x1,
                    height: y2 - y1,
                };
                let cropped = item
                    .original
                    .crop_imm(bbox.x, bbox.y, bbox.width, bbox.height);

                let mut glyph_item =
                    PipelineData::from_region(cropped, item.original.clone(), bbox);
                glyph_item.metadata = item.metadata.clone();
                glyph_item
                    .metadata
                    .insert("column".to_string(), MetadataValue::Int(column as i32));
                glyph_item.metadata.insert(
                    "letter".to_string(),
                    MetadataValue::String(letter.to_string()),
                );
                glyph_item
                    .metadata
                    .insert("font".to_string(), MetadataValue::Int(font_index as i32));
                result.push(glyph_item);
            }
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Glyph Detection"
    }
}
