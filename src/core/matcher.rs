use tracing::debug;

use crate::core::{
    distance::{bounding_box, haversine_distance, is_within_bounding_box},
    filters::is_within_radius,
    scoring::{shared_tags, similarity_score},
};
use crate::models::{ScoredCandidate, SimilarityWeights, UserProfile};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Nearby-user matching pipeline
///
/// # Pipeline Stages
/// 1. Geospatial bounding box pre-filter
/// 2. Self-exclusion and exact radius filter
/// 3. Distance and similarity scoring
/// 4. Ranking by similarity, ties broken by distance
///
/// The matcher holds only the scoring weights: every call operates on its
/// own arguments, so a single matcher can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: SimilarityWeights,
}

impl Matcher {
    pub fn new(weights: SimilarityWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: SimilarityWeights::default(),
        }
    }

    /// Find candidates within `radius_km` of the viewer, ranked by similarity
    ///
    /// The radius boundary is inclusive. The viewer's own profile is
    /// excluded from the results by id.
    ///
    /// # Arguments
    /// * `viewer` - The user looking for nearby matches
    /// * `candidates` - All potential candidates the caller already fetched
    /// * `radius_km` - Maximum distance from the viewer
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult containing scored and ranked matches
    pub fn find_nearby(
        &self,
        viewer: &UserProfile,
        candidates: Vec<UserProfile>,
        radius_km: f64,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let bbox = bounding_box(viewer.location.latitude, viewer.location.longitude, radius_km);

        let mut matches: Vec<ScoredCandidate> = candidates
            .into_iter()
            // Stage 1: cheap rectangular pre-filter
            .filter(|profile| {
                is_within_bounding_box(
                    profile.location.latitude,
                    profile.location.longitude,
                    &bbox,
                )
            })
            // Stage 2: exclude self, then exact radius check
            .filter(|profile| profile.id != viewer.id)
            .filter(|profile| {
                is_within_radius(
                    viewer.location.latitude,
                    viewer.location.longitude,
                    profile.location.latitude,
                    profile.location.longitude,
                    radius_km,
                )
            })
            // Stage 3: score survivors
            .map(|profile| {
                let distance_km = haversine_distance(
                    viewer.location.latitude,
                    viewer.location.longitude,
                    profile.location.latitude,
                    profile.location.longitude,
                );
                let similarity = similarity_score(viewer, &profile, &self.weights);

                ScoredCandidate {
                    shared_interests: shared_tags(&viewer.interests, &profile.interests),
                    shared_activities: shared_tags(&viewer.activities, &profile.activities),
                    id: profile.id,
                    name: profile.name,
                    age: profile.age,
                    distance_km,
                    similarity,
                }
            })
            .collect();

        // Stage 4: sort by similarity (descending), ties by distance (ascending)
        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.distance_km
                        .partial_cmp(&b.distance_km)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });

        matches.truncate(limit);

        debug!(
            total_candidates,
            matched = matches.len(),
            radius_km,
            "nearby matching complete"
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
