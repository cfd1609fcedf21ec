//! Image-processing collaborators of the detector.
//!
//! The sweep only needs masks, traced borders and simplified polygons. The
//! [`VisionBackend`] trait names those capabilities so that any library
//! honouring the same numeric contracts can stand in for `imageproc`.

use image::GrayImage;
use imageproc::point::Point;

use crate::detection::{contours, preprocessing};

pub trait VisionBackend: Send + Sync {
    /// Gaussian smoothing of one channel.
    fn blur(&self, channel: &GrayImage, sigma: f32) -> GrayImage;

    /// Binary edge map (0/255).
    fn edges(&self, channel: &GrayImage, low: f32, high: f32) -> GrayImage;

    /// One dilation with the default 3x3 structuring element.
    fn dilate(&self, mask: &GrayImage) -> GrayImage;

    /// Pixels strictly above `level` become foreground.
    fn threshold(&self, channel: &GrayImage, level: u8) -> GrayImage;

    /// Every border of the mask foreground, nesting ignored.
    fn contours(&self, mask: &GrayImage) -> Vec<Vec<Point<i32>>>;

    /// Closed polygon within `epsilon` of the curve.
    fn approximate(&self, curve: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>>;
}

/// Backend built on `imageproc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageprocBackend;

impl VisionBackend for ImageprocBackend {
    fn blur(&self, channel: &GrayImage, sigma: f32) -> GrayImage {
        preprocessing::apply_blur(channel, sigma)
    }

    fn edges(&self, channel: &GrayImage, low: f32, high: f32) -> GrayImage {
        preprocessing::detect_edges(channel, low, high)
    }

    fn dilate(&self, mask: &GrayImage) -> GrayImage {
        preprocessing::dilate_mask(mask)
    }

    fn threshold(&self, channel: &GrayImage, level: u8) -> GrayImage {
        preprocessing::binarize(channel, level)
    }

    fn contours(&self, mask: &GrayImage) -> Vec<Vec<Point<i32>>> {
        contours::find_contours(mask)
    }

    fn approximate(&self, curve: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
        contours::approximate_closed(curve, epsilon)
    }
}
