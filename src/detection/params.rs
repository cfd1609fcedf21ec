use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Tunable constants of the square detector.
///
/// The defaults reproduce the classic square-finding sweep: a 5-tap
/// Gaussian, Canny at (0, 50), ten levels in steps of 26, a 2% polygon
/// tolerance, and the 1000 px² / 0.1 / 0.95 acceptance bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareParams {
    /// Gaussian sigma applied to every channel before the sweep.
    pub blur_sigma: f32,
    pub canny_low: f32,
    pub canny_high: f32,
    /// Distance between threshold levels; level 0 is always the edge pass.
    pub threshold_step: u8,
    /// Polygon tolerance as a fraction of the contour perimeter.
    pub approx_epsilon_ratio: f64,
    /// Minimum enclosed area in pixels², exclusive.
    pub min_area: f64,
    /// Upper bound on the absolute corner cosine, exclusive.
    pub max_cosine: f64,
    /// Candidates overlapping an accepted square above this rate are dropped.
    pub overlap_threshold: f64,
    /// Scan the sweep passes on the rayon pool.
    pub parallel: bool,
}

impl Default for SquareParams {
    fn default() -> Self {
        Self {
            blur_sigma: 1.1,
            canny_low: 0.0,
            canny_high: 50.0,
            threshold_step: 26,
            approx_epsilon_ratio: 0.02,
            min_area: 1000.0,
            max_cosine: 0.1,
            overlap_threshold: 0.95,
            parallel: false,
        }
    }
}

impl SquareParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    pub fn with_max_cosine(mut self, max_cosine: f64) -> Self {
        self.max_cosine = max_cosine;
        self
    }

    pub fn with_overlap_threshold(mut self, overlap_threshold: f64) -> Self {
        self.overlap_threshold = overlap_threshold;
        self
    }

    pub fn with_threshold_step(mut self, threshold_step: u8) -> Self {
        self.threshold_step = threshold_step;
        self
    }

    pub fn with_blur_sigma(mut self, blur_sigma: f32) -> Self {
        self.blur_sigma = blur_sigma;
        self
    }

    pub fn with_canny(mut self, low: f32, high: f32) -> Self {
        self.canny_low = low;
        self.canny_high = high;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Threshold levels of one channel, ascending and below 255.
    pub fn levels(&self) -> Vec<u8> {
        (0..255u16)
            .step_by(self.threshold_step.max(1) as usize)
            .map(|level| level as u8)
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold_step == 0 {
            bail!("threshold_step must be at least 1");
        }
        if !(self.blur_sigma.is_finite() && self.blur_sigma > 0.0) {
            bail!("blur_sigma must be positive, got {}", self.blur_sigma);
        }
        if !(self.canny_low.is_finite() && self.canny_high.is_finite()) || self.canny_low > self.canny_high {
            bail!(
                "canny thresholds must satisfy low <= high, got ({}, {})",
                self.canny_low,
                self.canny_high
            );
        }
        if !(self.approx_epsilon_ratio.is_finite() && self.approx_epsilon_ratio > 0.0) {
            bail!("approx_epsilon_ratio must be positive, got {}", self.approx_epsilon_ratio);
        }
        if !self.min_area.is_finite() || self.min_area < 0.0 {
            bail!("min_area must be non-negative, got {}", self.min_area);
        }
        if !(self.max_cosine > 0.0 && self.max_cosine <= 1.0) {
            bail!("max_cosine must be in (0, 1], got {}", self.max_cosine);
        }
        if !(self.overlap_threshold > 0.0 && self.overlap_threshold <= 1.0) {
            bail!("overlap_threshold must be in (0, 1], got {}", self.overlap_threshold);
        }
        Ok(())
    }
}
