use serde::Serialize;

use crate::models::Polygon;

/// Agreement between detections and known reference regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchReport {
    /// (detection, reference) pairs overlapping above the bound.
    pub matches: usize,
    /// References hit by at least one detection.
    pub matched_references: usize,
    pub detections: usize,
    pub references: usize,
}

impl MatchReport {
    /// Matches per reference region. May exceed 1 when several detections
    /// land on the same region.
    pub fn match_rate(&self) -> f64 {
        if self.references == 0 {
            return 0.0;
        }
        self.matches as f64 / self.references as f64
    }

    /// Share of detections not accounted for by a match.
    pub fn extra_rate(&self) -> f64 {
        if self.detections == 0 {
            return 0.0;
        }
        (self.detections as f64 - self.matches as f64) / self.detections as f64
    }

    pub fn all_references_found(&self) -> bool {
        self.matched_references == self.references
    }
}

/// Score detections against reference regions using the overlap rate.
pub fn evaluate(detections: &[Polygon], references: &[Polygon], min_overlap: f64) -> MatchReport {
    let mut matches = 0;
    let mut hit = vec![false; references.len()];

    for detection in detections {
        for (j, reference) in references.iter().enumerate() {
            if detection.overlap_rate(reference) > min_overlap {
                matches += 1;
                hit[j] = true;
            }
        }
    }

    MatchReport {
        matches,
        matched_references: hit.iter().filter(|&&h| h).count(),
        detections: detections.len(),
        references: references.len(),
    }
}
