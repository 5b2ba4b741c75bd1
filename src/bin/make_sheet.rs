//! Renders a synthetic letter sheet for manual runs: 13 rows of 12
//! well-separated dark rectangles on a white background.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

fn main() {
    let width = 600u32;
    let height = 520u32;
    let rows = 13u32;
    let cols = 12u32;

    let mut img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));

    let row_height = height / rows;
    let cell_width = width / cols;
    for row in 0..rows {
        for col in 0..cols {
            let x = (col * cell_width + 8) as i32;
            let y = (row * row_height + 8) as i32;
            let rect = Rect::at(x, y).of_size(cell_width - 16, row_height - 16);
            draw_filled_rect_mut(&mut img, rect, Rgb([0, 0, 0]));
        }
    }

    img.save("sheet.png").unwrap();
    println!("Created sheet.png ({}x{}, {} rows x {} marks)", width, height, rows, cols);
}
