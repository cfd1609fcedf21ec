#![allow(dead_code)]

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::draw_polygon_mut;
use squarescan::detection::classifier;
use squarescan::{Polygon, Square, SquareParams};
use tempfile::NamedTempFile;

pub const SCENE_WIDTH: u32 = 400;
pub const SCENE_HEIGHT: u32 = 300;
pub const BACKGROUND: u8 = 200;
pub const INK: u8 = 40;

/// The four known regions of the reference scene: two axis-aligned
/// rectangles, a rotated square, and the image frame.
pub fn reference_regions() -> Vec<Polygon> {
    vec![
        Polygon::from_coords(&[(43, 25), (43, 129), (232, 129), (232, 25)]),
        Polygon::from_coords(&[(252, 87), (324, 40), (387, 137), (315, 184)]),
        Polygon::from_coords(&[(154, 178), (196, 180), (198, 278), (154, 278)]),
        Polygon::from_coords(&[(0, 0), (400, 0), (400, 300), (0, 300)]),
    ]
}

/// Dark quadrilaterals on a light background; the frame needs no drawing.
pub fn reference_scene() -> GrayImage {
    let mut img = GrayImage::from_pixel(SCENE_WIDTH, SCENE_HEIGHT, Luma([BACKGROUND]));
    for region in &reference_regions()[..3] {
        draw_polygon_mut(&mut img, region.points(), Luma([INK]));
    }
    img
}

/// The reference shapes painted in distinct colors.
pub fn colored_scene() -> RgbImage {
    let colors = [Rgb([30u8, 60, 160]), Rgb([170, 40, 40]), Rgb([40, 150, 60])];
    let mut img = RgbImage::from_pixel(SCENE_WIDTH, SCENE_HEIGHT, Rgb([210, 210, 210]));
    for (region, color) in reference_regions()[..3].iter().zip(colors) {
        draw_polygon_mut(&mut img, region.points(), color);
    }
    img
}

/// Grayscale image copied into all three RGB channels.
pub fn replicate_channels(gray: &GrayImage) -> DynamicImage {
    DynamicImage::ImageRgb8(DynamicImage::ImageLuma8(gray.clone()).to_rgb8())
}

pub fn uniform_image(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

/// Classify a hand-made polygon that is known to pass.
pub fn square(coords: &[(i32, i32)]) -> Square {
    classifier::classify(&Polygon::from_coords(coords), &SquareParams::default())
        .expect("fixture polygon should classify as a square")
}

/// Axis-aligned square with its top-left corner at (x, y).
pub fn axis_square(x: i32, y: i32, side: i32) -> Square {
    square(&[(x, y), (x + side, y), (x + side, y + side), (x, y + side)])
}

/// Saves an image to a temporary PNG file.
/// The file will be automatically cleaned up when dropped.
pub fn save_png(img: &DynamicImage) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Corners sorted for order-independent comparison.
pub fn sorted_corners(polygon: &Polygon) -> Vec<(i32, i32)> {
    let mut corners: Vec<(i32, i32)> = polygon.points().iter().map(|p| (p.x, p.y)).collect();
    corners.sort();
    corners
}
