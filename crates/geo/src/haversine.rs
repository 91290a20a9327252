//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Converts degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Calculates the great-circle distance between two coordinates in whole meters.
///
/// The result is truncated, not rounded: the spherical model is not accurate
/// below a meter. Exactly opposite points give half the circumference. No
/// range checks happen here, callers validate first; a NaN coordinate yields 0
/// because the float-to-integer cast saturates NaN to zero.
///
/// # Example
/// ```
/// use greatcircle_geo::{haversine_distance_meters, Coordinate};
///
/// let google_hq = Coordinate::new(37.4203139, -122.0839101);
/// let one_market = Coordinate::new(37.791574, -122.404912);
///
/// assert_eq!(haversine_distance_meters(&google_hq, &one_market), 50038);
/// ```
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> u64 {
    (EARTH_RADIUS_M * central_angle(from, to)).trunc() as u64
}

/// Central angle between two coordinates in radians.
#[inline]
fn central_angle(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1 = to_radians(from.latitude);
    let lat2 = to_radians(to.latitude);

    let d_lat = to_radians(to.latitude - from.latitude);
    let d_lon = to_radians(to.longitude - from.longitude);

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can leave `a` just outside [0, 1] for antipodal points or
    // latitudes beyond ±90, which would turn the square roots into NaN.
    let a = a.clamp(0.0, 1.0);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
