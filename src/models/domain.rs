use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees
///
/// Latitude is expected in [-90, 90], longitude in [-180, 180]. The engine
/// does not validate ranges; out-of-range or NaN values propagate through
/// the distance math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// User profile with the attributes consumed by scoring and matching
///
/// `age` and `location` are required: a profile without them cannot be
/// scored, so the type does not allow constructing one. `interests` and
/// `activities` default to empty when absent from the source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    pub location: Coordinate,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "lastActive", default)]
    pub last_active: Option<chrono::DateTime<chrono::Utc>>,
}

/// A candidate that survived filtering, with computed distance and similarity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub id: String,
    pub name: String,
    pub age: u8,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    pub similarity: f64,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
    #[serde(rename = "sharedActivities")]
    pub shared_activities: Vec<String>,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Weights for the four similarity factors
///
/// The weights must sum to 1.0 so the combined score stays in [0, 1];
/// `Settings::load` rejects configurations that break this. The decay
/// cutoffs control where the age and location sub-scores reach zero.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityWeights {
    pub interests: f64,
    pub activities: f64,
    pub age: f64,
    pub location: f64,
    /// Age gap (years) at which the age sub-score reaches zero
    pub age_gap_years: f64,
    /// Distance (km) at which the location sub-score reaches zero
    pub location_cutoff_km: f64,
}

impl SimilarityWeights {
    /// Sum of the four factor weights
    pub fn total(&self) -> f64 {
        self.interests + self.activities + self.age + self.location
    }
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            interests: 0.30,
            activities: 0.30,
            age: 0.20,
            location: 0.20,
            age_gap_years: 10.0,
            location_cutoff_km: 5.0,
        }
    }
}
