pub mod backend;
pub mod classifier;
pub mod contours;
pub mod dedup;
pub mod evaluation;
pub mod params;
pub mod preprocessing;
pub mod sweep;

use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage, ImageReader};
use log::{debug, info, trace};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub use backend::{ImageprocBackend, VisionBackend};
pub use dedup::Deduplicator;
pub use params::SquareParams;

use crate::debug::DebugConfig;
use crate::geometry;
use crate::models::{CandidateSet, Polygon, Square, SweepStep};

/// Open and decode an image file.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let img = ImageReader::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode image {}", path.display()))?;
    debug!("loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

/// Main square detection orchestrator
///
/// Runs the channel/threshold sweep, classifies every simplified contour,
/// and folds the accepted squares through a [`Deduplicator`]. The sweep
/// order (channel-major, level ascending) fixes the order of the result.
pub struct SquareDetector<B: VisionBackend = ImageprocBackend> {
    params: SquareParams,
    backend: B,
    debug: Option<DebugConfig>,
}

impl SquareDetector {
    pub fn new() -> Self {
        Self::with_backend(ImageprocBackend)
    }
}

impl Default for SquareDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: VisionBackend> SquareDetector<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            params: SquareParams::default(),
            backend,
            debug: None,
        }
    }

    pub fn with_params(mut self, params: SquareParams) -> Self {
        self.params = params;
        self
    }

    /// Dump every sweep mask into `output_dir`.
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: impl Into<PathBuf>) -> Result<Self> {
        self.debug = Some(DebugConfig::new(output_dir)?);
        Ok(self)
    }

    pub fn params(&self) -> &SquareParams {
        &self.params
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load and decode an image, then detect. A file that cannot be read or
    /// decoded fails the whole run.
    pub fn detect_path(&self, path: impl AsRef<Path>) -> Result<CandidateSet> {
        let img = load_image(path)?;
        self.detect(&img)
    }

    /// Run the full sweep on an image
    pub fn detect(&self, img: &DynamicImage) -> Result<CandidateSet> {
        self.params.validate()?;

        let channels = self.smoothed_channels(img);
        let steps = sweep::sweep_steps(channels.len(), &self.params);
        debug!(
            "sweeping {} pass(es) over {} channel(s) of a {}x{} image",
            steps.len(),
            channels.len(),
            img.width(),
            img.height()
        );

        let dedup = Deduplicator::new(self.params.overlap_threshold);
        let dedup = if self.params.parallel {
            // Scan in parallel, then reduce in sweep order so the result
            // matches the sequential run.
            let per_step: Vec<Vec<Square>> = steps
                .par_iter()
                .map(|&step| self.scan_step(&channels[step.channel], step))
                .collect::<Result<_>>()?;
            dedup.extend(per_step.into_iter().flatten())
        } else {
            steps.iter().try_fold(dedup, |dedup, &step| {
                let found = self.scan_step(&channels[step.channel], step)?;
                Ok::<_, anyhow::Error>(dedup.extend(found))
            })?
        };

        let squares = dedup.into_set();
        info!("found {} square(s)", squares.len());
        Ok(squares)
    }

    /// Every sweep mask of an image (for debugging)
    pub fn masks(&self, img: &DynamicImage) -> Result<Vec<(SweepStep, GrayImage)>> {
        self.params.validate()?;
        let channels = self.smoothed_channels(img);
        Ok(sweep::sweep_steps(channels.len(), &self.params)
            .into_iter()
            .map(|step| {
                let mask = sweep::build_mask(&self.backend, &channels[step.channel], step, &self.params);
                (step, mask)
            })
            .collect())
    }

    /// Every simplified contour of every sweep mask (for debugging)
    pub fn polygons(&self, img: &DynamicImage) -> Result<Vec<(SweepStep, Polygon)>> {
        Ok(self
            .masks(img)?
            .into_iter()
            .flat_map(|(step, mask)| {
                self.polygons_in(&mask)
                    .into_iter()
                    .map(move |polygon| (step, polygon))
            })
            .collect())
    }

    /// Every classified square before deduplication (for debugging)
    pub fn candidates(&self, img: &DynamicImage) -> Result<Vec<Square>> {
        Ok(self
            .polygons(img)?
            .into_iter()
            .filter_map(|(step, polygon)| {
                classifier::classify(&polygon, &self.params).map(|square| square.found_at(step))
            })
            .collect())
    }

    fn smoothed_channels(&self, img: &DynamicImage) -> Vec<GrayImage> {
        preprocessing::split_channels(img)
            .iter()
            .map(|channel| self.backend.blur(channel, self.params.blur_sigma))
            .collect()
    }

    fn scan_step(&self, channel: &GrayImage, step: SweepStep) -> Result<Vec<Square>> {
        let mask = sweep::build_mask(&self.backend, channel, step, &self.params);
        if let Some(debug) = &self.debug {
            debug.save_mask(step, &mask)?;
        }

        let polygons = self.polygons_in(&mask);
        let mut squares = Vec::new();
        for polygon in &polygons {
            match classifier::check(polygon, &self.params) {
                Ok(square) => squares.push(square.found_at(step)),
                Err(classifier::Rejection::VertexCount(_)) => {}
                Err(reason) => trace!("channel {} level {}: {:?}", step.channel, step.level, reason),
            }
        }

        debug!(
            "channel {} level {:>3}: {} polygon(s), {} square candidate(s)",
            step.channel,
            step.level,
            polygons.len(),
            squares.len()
        );
        Ok(squares)
    }

    fn polygons_in(&self, mask: &GrayImage) -> Vec<Polygon> {
        // A constant mask only traces the image frame; there is nothing in it.
        if sweep::is_uniform(mask) {
            return Vec::new();
        }
        self.backend
            .contours(mask)
            .into_iter()
            .filter_map(|curve| {
                if curve.len() < 3 {
                    return None;
                }
                let perimeter = geometry::arc_length(&curve);
                if perimeter <= 0.0 {
                    return None;
                }
                let epsilon = self.params.approx_epsilon_ratio * perimeter;
                Some(Polygon::new(self.backend.approximate(&curve, epsilon)))
            })
            .collect()
    }
}
