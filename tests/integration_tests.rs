// Integration tests for Alia Proximity

use alia_proximity::config::Settings;
use alia_proximity::core::{format::format_distance, Matcher};
use alia_proximity::models::{Coordinate, UserProfile};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn create_test_profile(
    id: &str,
    age: u8,
    interests: &[&str],
    activities: &[&str],
    lat: f64,
    lon: f64,
) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: format!("User {}", id),
        age,
        interests: interests.iter().map(|s| s.to_string()).collect(),
        activities: activities.iter().map(|s| s.to_string()).collect(),
        location: Coordinate::new(lat, lon),
        bio: Some("Hiking enthusiast and amateur photographer".to_string()),
        last_active: Some(chrono::Utc::now()),
    }
}

#[test]
fn test_integration_end_to_end_matching() {
    init_tracing();

    let matcher = Matcher::with_default_weights();
    let viewer = create_test_profile(
        "viewer",
        28,
        &["photography", "hiking", "coffee"],
        &["running", "yoga"],
        37.7749, // San Francisco
        -122.4194,
    );

    // Create diverse candidates
    let candidates = vec![
        create_test_profile("1", 28, &["photography", "hiking"], &["running"], 37.7760, -122.4180), // strong match
        create_test_profile("2", 30, &["coffee"], &["yoga"], 37.7800, -122.4150),                   // decent match
        create_test_profile("3", 27, &["chess"], &["swimming"], 37.7790, -122.4160),                // nearby stranger
        create_test_profile("4", 29, &["hiking"], &["running"], 37.8715, -122.2730),                // ~16 km away
        create_test_profile("viewer", 28, &["photography"], &["running"], 37.7749, -122.4194),      // self
    ];

    let result = matcher.find_nearby(&viewer, candidates, 5.0, 10);

    // Self and the far candidate are excluded
    assert_eq!(result.total_candidates, 5);
    assert_eq!(result.matches.len(), 3);
    assert!(result.matches.iter().all(|m| m.id != "viewer"));
    assert!(result.matches.iter().all(|m| m.distance_km <= 5.0));

    // Strongest match first
    assert_eq!(result.matches[0].id, "1");
    assert_eq!(result.matches[0].shared_interests, vec!["photography", "hiking"]);

    // Scores descend
    for pair in result.matches.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
}

#[test]
fn test_integration_results_serialize_for_clients() {
    let matcher = Matcher::with_default_weights();
    let viewer = create_test_profile("viewer", 25, &["hiking"], &["running"], 37.7749, -122.4194);
    let candidates = vec![create_test_profile("1", 26, &["hiking"], &["running"], 37.7760, -122.4180)];

    let result = matcher.find_nearby(&viewer, candidates, 5.0, 10);
    let json = serde_json::to_value(&result.matches).unwrap();

    let first = &json[0];
    assert_eq!(first["id"], "1");
    assert!(first["distanceKm"].is_number());
    assert!(first["similarity"].is_number());
    assert_eq!(first["sharedInterests"][0], "hiking");
}

#[test]
fn test_integration_distance_strings_for_matches() {
    let matcher = Matcher::with_default_weights();
    let viewer = create_test_profile("viewer", 25, &[], &[], 37.7749, -122.4194);
    let candidates = vec![
        create_test_profile("near", 25, &[], &[], 37.7755, -122.4190),  // under 1 km
        create_test_profile("far", 25, &[], &[], 37.7849, -122.4094),   // 1.4 km
    ];

    let result = matcher.find_nearby(&viewer, candidates, 5.0, 10);

    let near = result.matches.iter().find(|m| m.id == "near").unwrap();
    let far = result.matches.iter().find(|m| m.id == "far").unwrap();

    assert_eq!(format_distance(near.distance_km), "100m away");
    assert_eq!(format_distance(far.distance_km), "1.4km away");
}

#[test]
fn test_integration_configured_weights_drive_matcher() {
    let settings = Settings::default();
    let matcher = Matcher::new(settings.similarity_weights());

    let viewer = create_test_profile("viewer", 28, &["hiking"], &["running"], 37.7749, -122.4194);
    let candidates = vec![create_test_profile("1", 28, &["hiking"], &["running"], 37.7749, -122.4194)];

    let result = matcher.find_nearby(
        &viewer,
        candidates,
        settings.matching.default_radius_km,
        settings.matching.default_limit,
    );

    assert_eq!(result.matches.len(), 1);
    // Identical attributes and location: full score
    assert!((result.matches[0].similarity - 1.0).abs() < 1e-12);
}
