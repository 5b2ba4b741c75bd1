use crate::models::Contour;
use image::{GrayImage, Luma};
use imageproc::region_labelling::{Connectivity, connected_components};
use std::collections::HashMap;

/// Find glyph regions in a binarized band using connected components.
///
/// Labelling runs over foreground pixels only, so nested holes (counters
/// inside letters like O or A) never yield separate regions. Regions whose
/// bounding box has width or height at or below `min_box_size` are dropped
/// as noise. The returned order is unspecified; callers sort.
pub fn find_contours(binary: &GrayImage, min_box_size: u32) -> Vec<Contour> {
    let labeled = connected_components(binary, Connectivity::Eight, Luma([0]));

    // Accumulate each label's bounding extent and pixel count
    let mut regions: HashMap<u32, (u32, u32, u32, u32, u32)> = HashMap::new();

    for (x, y, label) in labeled.enumerate_pixels() {
        let label_val = label[0];
        if label_val == 0 {
            continue; // Skip background
        }

        regions
            .entry(label_val)
            .and_modify(|(min_x, min_y, max_x, max_y, count)| {
                *min_x = (*min_x).min(x);
                *min_y = (*min_y).min(y);
                *max_x = (*max_x).max(x);
                *max_y = (*max_y).max(y);
                *count += 1;
            })
            .or_insert((x, y, x, y, 1));
    }

    regions
        .into_iter()
        .map(|(label, (min_x, min_y, max_x, max_y, count))| Contour {
            label,
            min_x,
            min_y,
            max_x,
            max_y,
            pixel_count: count,
        })
        .filter(|c| !c.is_noise(min_box_size))
        .collect()
}
