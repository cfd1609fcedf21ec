mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from squarescan for tests
pub use squarescan::{
    CandidateSet, Deduplicator, MatchReport, Polygon, Square, SquareDetector, SquareParams, SweepStep,
    evaluate,
};
