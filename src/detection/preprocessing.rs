use image::{DynamicImage, GrayImage};
use imageproc::contrast::{ThresholdType, threshold};

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Binarize so that pixels at or below `thresh` (the dark glyph strokes)
/// become foreground (255) and brighter pixels become background (0).
pub fn binarize(img: &GrayImage, thresh: u8) -> GrayImage {
    threshold(img, thresh, ThresholdType::BinaryInverted)
}
