use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// White sheet with one band per entry in `row_counts`. Band `i` carries
/// `row_counts[i]` well-separated dark marks sitting in the leftmost cells
/// of a `grid_cols`-cell grid, so detection order matches cell order.
pub fn synthetic_sheet(width: u32, height: u32, grid_cols: u32, row_counts: &[u32]) -> DynamicImage {
    assert!(!row_counts.is_empty(), "sheet needs at least one row");

    let rows = row_counts.len() as u32;
    let mut img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));

    let row_height = height / rows;
    let cell_width = width / grid_cols;
    for (row, &count) in row_counts.iter().enumerate() {
        for col in 0..count {
            let x = (col * cell_width + 8) as i32;
            let y = (row as u32 * row_height + 8) as i32;
            let rect = Rect::at(x, y).of_size(cell_width - 16, row_height - 16);
            draw_filled_rect_mut(&mut img, rect, Rgb([0, 0, 0]));
        }
    }

    DynamicImage::ImageRgb8(img)
}

/// Full production-shaped sheet: `rows` bands of `cols` marks each.
pub fn uniform_sheet(width: u32, height: u32, rows: u32, cols: u32) -> DynamicImage {
    synthetic_sheet(width, height, cols, &vec![cols; rows as usize])
}

/// Blank white canvas for tests that place marks at exact coordinates.
pub fn blank_sheet(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))
}

/// Draw one dark rectangular mark.
pub fn draw_mark(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32) {
    let rect = Rect::at(x as i32, y as i32).of_size(w, h);
    draw_filled_rect_mut(img, rect, Rgb([0, 0, 0]));
}
