// Model exports
pub mod domain;

pub use domain::{BoundingBox, Coordinate, ScoredCandidate, SimilarityWeights, UserProfile};
