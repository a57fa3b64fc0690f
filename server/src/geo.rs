/// Kilometers spanned by one degree of latitude, taken as constant everywhere.
pub const KM_PER_DEG_LAT: f64 = 111.0;

/// Kilometers spanned by one degree of longitude at the equator.
pub const KM_PER_DEG_LON_EQUATOR: f64 = 111.320;

/// Keeps the longitude conversion finite where `cos(lat)` reaches zero.
const POLE_EPSILON: f64 = 1e-9;

/// Converts a north/south distance to degrees of latitude.
///
/// Coarse on purpose: good enough to draw on a map, not for surveying.
pub fn km_to_deg_lat(km: f64) -> f64 {
    km / KM_PER_DEG_LAT
}

/// Converts an east/west distance to degrees of longitude at the given latitude.
///
/// Longitude lines converge toward the poles, so the same distance covers more
/// degrees the further the latitude is from the equator. At exactly ±90 the
/// result is very large but finite.
pub fn km_to_deg_lon(km: f64, lat_deg: f64) -> f64 {
    km / (KM_PER_DEG_LON_EQUATOR * lat_deg.to_radians().cos() + POLE_EPSILON)
}
