use image::GrayImage;

use crate::detection::backend::VisionBackend;
use crate::detection::params::SquareParams;
use crate::models::SweepStep;

/// Every sweep pass for an image with `channels` planes, channel-major and
/// level ascending.
pub fn sweep_steps(channels: usize, params: &SquareParams) -> Vec<SweepStep> {
    let levels = params.levels();
    (0..channels)
        .flat_map(|channel| levels.iter().map(move |&level| SweepStep::new(channel, level)))
        .collect()
}

/// Binary mask for one sweep pass over an already smoothed channel.
pub fn build_mask<B: VisionBackend + ?Sized>(
    backend: &B,
    channel: &GrayImage,
    step: SweepStep,
    params: &SquareParams,
) -> GrayImage {
    if step.uses_edges() {
        let edges = backend.edges(channel, params.canny_low, params.canny_high);
        // Close one-pixel gaps so the edge rings trace as closed borders.
        backend.dilate(&edges)
    } else {
        backend.threshold(channel, step.level)
    }
}

/// True when every pixel of the mask has the same value.
pub fn is_uniform(mask: &GrayImage) -> bool {
    let mut pixels = mask.pixels();
    match pixels.next() {
        Some(first) => pixels.all(|p| p == first),
        None => true,
    }
}
