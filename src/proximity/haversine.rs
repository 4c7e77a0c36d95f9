use crate::domain::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the great-circle distance between `from` and `to` in kilometers using the
/// Haversine formula on a spherical earth.
///
/// Coordinates are not validated, points outside the valid ranges still produce a
/// number, it is just meaningless.
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    // Rounding near antipodes can push `a` slightly past 1
    let a = ((d_lat / 2.0).sin().powi(2) + from.latitude.to_radians().cos() * to.latitude.to_radians().cos() * (d_lng / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Same as [`distance_km`] rounded to the nearest whole kilometer, halves round up.
pub fn rounded_distance_km(from: GeoPoint, to: GeoPoint) -> u32 {
    round_km(distance_km(from, to))
}

/// Rounds a distance to whole kilometers, half away from zero.
pub(crate) fn round_km(distance: f64) -> u32 {
    distance.round() as u32
}
