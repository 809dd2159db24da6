use crate::core::distance::haversine_distance;

/// Check if the second location lies within `radius_km` of the first
///
/// The boundary is inclusive: a point at exactly `radius_km` counts as
/// within. A negative radius is never within since distance is non-negative.
#[inline]
pub fn is_within_radius(lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius_km: f64) -> bool {
    haversine_distance(lat1, lon1, lat2, lon2) <= radius_km
}
