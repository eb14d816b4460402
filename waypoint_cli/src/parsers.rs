use waypoint_core::geopoint::GeoPoint;

/// Parses `"lat,lng"` in decimal degrees.
pub fn parse_coordinates(input: &str) -> Result<GeoPoint, String> {
    let Some((lat, lng)) = input.split_once(',') else {
        return Err(format!("expected 'lat,lng', got '{input}'"));
    };

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lng.trim()))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("latitude {lat} is out of range"));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(format!("longitude {lng} is out of range"));
    }

    Ok(GeoPoint::new(lat, lng))
}
