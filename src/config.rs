use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::EngineError;
use crate::models::SimilarityWeights;

/// Engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_radius_km: default_radius_km(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_radius_km() -> f64 { 5.0 }
fn default_limit() -> usize { 20 }
fn default_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_age_gap_years")]
    pub age_gap_years: f64,
    #[serde(default = "default_location_cutoff_km")]
    pub location_cutoff_km: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            age_gap_years: default_age_gap_years(),
            location_cutoff_km: default_location_cutoff_km(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_activities_weight")]
    pub activities: f64,
    #[serde(default = "default_age_weight")]
    pub age: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            interests: default_interests_weight(),
            activities: default_activities_weight(),
            age: default_age_weight(),
            location: default_location_weight(),
        }
    }
}

fn default_interests_weight() -> f64 { 0.30 }
fn default_activities_weight() -> f64 { 0.30 }
fn default_age_weight() -> f64 { 0.20 }
fn default_location_weight() -> f64 { 0.20 }
fn default_age_gap_years() -> f64 { 10.0 }
fn default_location_cutoff_km() -> f64 { 5.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ALIA_)
    pub fn load() -> Result<Self, EngineError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ALIA_)
            // e.g., ALIA_MATCHING__DEFAULT_RADIUS_KM -> matching.default_radius_km
            .add_source(
                Environment::with_prefix("ALIA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize().map_err(EngineError::Config)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ALIA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize().map_err(EngineError::Config)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject weights that would push the combined score outside [0, 1]
    fn validate(&self) -> Result<(), EngineError> {
        let sum = self.scoring.weights.interests
            + self.scoring.weights.activities
            + self.scoring.weights.age
            + self.scoring.weights.location;

        if (sum - 1.0).abs() > 1e-9 {
            return Err(EngineError::InvalidWeights { sum });
        }

        Ok(())
    }

    /// Similarity weights from this configuration
    pub fn similarity_weights(&self) -> SimilarityWeights {
        SimilarityWeights {
            interests: self.scoring.weights.interests,
            activities: self.scoring.weights.activities,
            age: self.scoring.weights.age,
            location: self.scoring.weights.location,
            age_gap_years: self.scoring.age_gap_years,
            location_cutoff_km: self.scoring.location_cutoff_km,
        }
    }
}
