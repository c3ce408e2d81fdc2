use crate::Point;

/// Initial great-circle bearing from `fix1` towards `fix2` in degrees,
/// normalized to `[0, 360)`
pub fn bearing(fix1: &dyn Point, fix2: &dyn Point) -> f64 {
    let phi1 = fix1.latitude().to_radians();
    let phi2 = fix2.latitude().to_radians();
    let delta_rho = (fix2.longitude() - fix1.longitude()).to_radians();

    let y = delta_rho.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_rho.cos();

    let degrees = y.atan2(x).to_degrees().rem_euclid(360.);

    // rem_euclid() of a tiny negative value rounds up to exactly 360
    if degrees >= 360. { 0. } else { degrees }
}

/// Absolute difference between two bearings in degrees, in `[0, 180]`
pub fn angle_diff(bearing1: f64, bearing2: f64) -> f64 {
    let diff = (bearing1 - bearing2).abs() % 360.;
    if diff > 180. { 360. - diff } else { diff }
}
