/// Format a distance in kilometers as a user-facing string
///
/// Distances under a kilometer are shown in meters, everything else in
/// kilometers with one decimal place. No localization.
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{}m away", (distance_km * 1000.0).round() as i64)
    } else {
        format!("{:.1}km away", distance_km)
    }
}
