pub mod debug;
pub mod detection;
pub mod geometry;
pub mod models;
pub mod render;

pub use detection::evaluation::{MatchReport, evaluate};
pub use detection::{Deduplicator, ImageprocBackend, SquareDetector, SquareParams, VisionBackend, load_image};
pub use models::{CandidateSet, Polygon, Square, SweepStep};
