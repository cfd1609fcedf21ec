use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::models::Square;

/// RGB copy of `img` with every square outlined in `color`.
pub fn draw_squares<'a, I>(img: &DynamicImage, squares: I, color: Rgb<u8>) -> RgbImage
where
    I: IntoIterator<Item = &'a Square>,
{
    let mut canvas = img.to_rgb8();
    for square in squares {
        let points = square.polygon().points();
        for (i, start) in points.iter().enumerate() {
            let end = points[(i + 1) % points.len()];
            draw_line_segment_mut(
                &mut canvas,
                (start.x as f32, start.y as f32),
                (end.x as f32, end.y as f32),
                color,
            );
        }
    }
    canvas
}
