use std::collections::HashSet;

use crate::core::distance::haversine_distance;
use crate::models::{SimilarityWeights, UserProfile};

/// Calculate a similarity score in [0, 1] for a pair of users
///
/// Scoring formula (default weights):
/// score = (
///     interests_jaccard * 0.30 +   # Shared interests, proportional
///     activities_jaccard * 0.30 +  # Shared activities, proportional
///     age_score * 0.20 +           # Linear decay, zero at a 10-year gap
///     location_score * 0.20        # Linear decay, zero at 5 km
/// )
///
/// Each sub-score lands in [0, weight] before summing, so the total is in
/// [0, 1] whenever the weights sum to 1. The formula is symmetric in the
/// two users.
pub fn similarity_score(a: &UserProfile, b: &UserProfile, weights: &SimilarityWeights) -> f64 {
    let interest_score = jaccard_index(&a.interests, &b.interests) * weights.interests;
    let activity_score = jaccard_index(&a.activities, &b.activities) * weights.activities;

    let age_gap = a.age.abs_diff(b.age) as f64;
    let age_score = (1.0 - age_gap / weights.age_gap_years).max(0.0) * weights.age;

    let distance_km = haversine_distance(
        a.location.latitude,
        a.location.longitude,
        b.location.latitude,
        b.location.longitude,
    );
    let location_score = (1.0 - distance_km / weights.location_cutoff_km).max(0.0) * weights.location;

    interest_score + activity_score + age_score + location_score
}

/// Jaccard index of two tag lists: |intersection| / |union|
///
/// Duplicate tags are collapsed. An empty union (no tags on either side)
/// scores 0 rather than dividing by zero.
#[inline]
pub fn jaccard_index(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

/// Tags from `a` that also appear in `b`, in `a`'s order without duplicates
pub fn shared_tags(a: &[String], b: &[String]) -> Vec<String> {
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    a.iter()
        .filter(|tag| set_b.contains(tag.as_str()) && seen.insert(tag.as_str()))
        .cloned()
        .collect()
}
