use crate::Point;

/// Mean earth radius in kilometers
pub const EARTH_RADIUS: f64 = 6371.;

pub fn haversine_distance(fix1: &dyn Point, fix2: &dyn Point) -> f64 {
    haversine_distance_with_radius(fix1, fix2, EARTH_RADIUS)
}

/// Great-circle distance in kilometers on a sphere of radius `radius` (km)
///
/// The inner square root is clamped to 1 so that rounding noise for nearly
/// antipodal points can't push `asin` out of its domain.
///
pub fn haversine_distance_with_radius(fix1: &dyn Point, fix2: &dyn Point, radius: f64) -> f64 {
    let phi1 = fix1.latitude().to_radians();
    let phi2 = fix2.latitude().to_radians();
    let delta_phi = (fix2.latitude() - fix1.latitude()).to_radians();
    let delta_rho = (fix2.longitude() - fix1.longitude()).to_radians();

    let a = (delta_phi / 2.).sin() * (delta_phi / 2.).sin() +
        phi1.cos() * phi2.cos() *
            (delta_rho / 2.).sin() * (delta_rho / 2.).sin();

    let c = 2. * a.sqrt().min(1.).asin();

    radius * c
}
