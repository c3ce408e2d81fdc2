use crate::Point;
use crate::config::TurnpointConfig;
use crate::error::{Error, Result};
use crate::haversine::haversine_distance_with_radius;
use crate::turnpoints::find_turnpoints;

pub type Path = Vec<usize>;

#[derive(Debug)]
pub struct OptimizationResult {
    pub path: Path,
    pub distance: f64,
}

/// Scores a route by the length of the leg chain through its turnpoints.
pub fn optimize<T: Point>(route: &[T], config: &TurnpointConfig, radius: f64) -> Result<OptimizationResult> {
    if route.len() < 2 {
        return Err(Error::InsufficientTrackData { fixes: route.len() });
    }

    debug!("Searching turnpoints in {} points (stride {}, threshold {}°)",
           route.len(), config.stride, config.threshold_degrees);
    let path = find_turnpoints(route, config);
    debug!("{} turnpoints found: {:?}", path.len(), path);

    let distance = calculate_distance(route, &path, radius);
    debug!("Solution: {:.3} km", distance);

    Ok(OptimizationResult { path, distance })
}

/// Calculates the total distance (via haversine algorithm) from
/// the original `route` and the array of indices
///
pub fn calculate_distance<T: Point>(route: &[T], path: &[usize], radius: f64) -> f64 {
    path.iter().zip(path.iter().skip(1))
        .map(|(i1, i2)| (&route[*i1], &route[*i2]))
        .map(|(fix1, fix2)| haversine_distance_with_radius(fix1, fix2, radius))
        .sum()
}
