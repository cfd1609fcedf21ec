use log::trace;

use crate::models::{CandidateSet, Square};

/// Greedy first-seen-wins filter over the squares of one image.
///
/// A candidate is admitted only if its overlap rate with every square
/// admitted before it is at most the threshold. The result depends on
/// arrival order.
#[derive(Debug, Clone)]
pub struct Deduplicator {
    threshold: f64,
    accepted: CandidateSet,
}

impl Deduplicator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            accepted: CandidateSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Append `candidate` unless it duplicates an accepted square.
    pub fn admit(&mut self, candidate: Square) -> bool {
        if let Some(existing) = self
            .accepted
            .iter()
            .position(|s| s.overlap_rate(&candidate) > self.threshold)
        {
            trace!(
                "rejected duplicate {:?} (overlaps #{} above {})",
                candidate.corners(),
                existing,
                self.threshold
            );
            return false;
        }

        trace!("accepted {:?} as #{}", candidate.corners(), self.accepted.len());
        self.accepted.push(candidate);
        true
    }

    /// Admit every candidate in iteration order.
    pub fn extend<I: IntoIterator<Item = Square>>(mut self, candidates: I) -> Self {
        for candidate in candidates {
            self.admit(candidate);
        }
        self
    }

    pub fn accepted(&self) -> &CandidateSet {
        &self.accepted
    }

    pub fn into_set(self) -> CandidateSet {
        self.accepted
    }
}

/// Deduplicate a candidate list in one pass.
pub fn filter_duplicates<I: IntoIterator<Item = Square>>(candidates: I, threshold: f64) -> CandidateSet {
    Deduplicator::new(threshold).extend(candidates).into_set()
}
