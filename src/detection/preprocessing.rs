use image::{DynamicImage, GrayImage};
use imageproc::contrast::{ThresholdType, threshold};
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::morphology::dilate;

/// Split an image into its color planes.
///
/// Images with color give three planes (R, G, B); grayscale images give one.
/// Alpha never takes part in the sweep.
pub fn split_channels(img: &DynamicImage) -> Vec<GrayImage> {
    if !img.color().has_color() {
        return vec![img.to_luma8()];
    }

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    (0..3)
        .map(|c| GrayImage::from_fn(width, height, |x, y| image::Luma([rgb.get_pixel(x, y)[c]])))
        .collect()
}

/// Apply Gaussian blur to reduce noise
pub fn apply_blur(img: &GrayImage, sigma: f32) -> GrayImage {
    gaussian_blur_f32(img, sigma)
}

/// Canny edge detection.
///
/// `imageproc` keeps weak pixels whose strength is `>= low`, which with a
/// zero low threshold admits every suppressed pixel and floods the mask.
/// The floor keeps the "strictly above low" reading.
pub fn detect_edges(img: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(img, low_threshold.max(f32::EPSILON), high_threshold)
}

/// One dilation with a 3x3 square structuring element.
pub fn dilate_mask(mask: &GrayImage) -> GrayImage {
    dilate(mask, Norm::LInf, 1)
}

/// Pixels strictly brighter than `level` become 255, the rest 0.
pub fn binarize(img: &GrayImage, level: u8) -> GrayImage {
    threshold(img, level, ThresholdType::Binary)
}
