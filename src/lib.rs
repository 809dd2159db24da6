//! Alia Proximity - proximity and compatibility engine for the Alia social discovery app
//!
//! This library provides the geospatial and scoring logic behind Alia's
//! nearby-user discovery: great-circle distance, radius filtering, display
//! formatting, a multi-factor similarity score, and a ranking pipeline over
//! candidate profiles. Everything is a pure in-process computation; fetching
//! candidates and persisting results stay with the caller.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used items
pub use crate::core::{
    distance::haversine_distance,
    filters::is_within_radius,
    format::format_distance,
    scoring::similarity_score,
    Matcher,
};
pub use error::EngineError;
pub use models::{Coordinate, ScoredCandidate, SimilarityWeights, UserProfile};
