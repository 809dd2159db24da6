// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod format;
pub mod matcher;
pub mod scoring;

pub use distance::{bearing, bounding_box, cardinal_direction, haversine_distance, is_within_bounding_box};
pub use filters::is_within_radius;
pub use format::format_distance;
pub use matcher::{MatchResult, Matcher};
pub use scoring::{jaccard_index, shared_tags, similarity_score};
