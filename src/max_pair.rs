use crate::Point;
use crate::error::{Error, Result};
use crate::haversine::haversine_distance_with_radius;
use crate::parallel::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationResult {
    pub start_index: usize,
    pub end_index: usize,
    pub distance: f64,
}

/// Finds the two fixes of the route that are farthest apart.
///
/// Every pair `(i, j)` with `i < j` is checked. On equal distances the pair
/// that comes first in `(i, j)` order wins, so the result doesn't depend on
/// how the rows are scheduled.
///
pub fn optimize<T: Point>(route: &[T], radius: f64) -> Result<OptimizationResult> {
    if route.len() < 2 {
        return Err(Error::InsufficientTrackData { fixes: route.len() });
    }

    debug!("Calculating best end point for each of {} start points", route.len());
    let rows: Vec<OptimizationResult> = opt_par_range(route.len())
        .filter_map(|i| best_in_row(route, i, radius))
        .collect();

    let mut best = rows[0];
    for candidate in &rows[1..] {
        if candidate.distance > best.distance {
            best = *candidate;
        }
    }

    debug!("Solution: {} -> {} ({:.3} km)", best.start_index, best.end_index, best.distance);

    Ok(best)
}

/// Farthest fix after `start_index`, `None` for the last fix
fn best_in_row<T: Point>(route: &[T], start_index: usize, radius: f64) -> Option<OptimizationResult> {
    let start = &route[start_index];

    let mut best: Option<OptimizationResult> = None;
    for (end_index, end) in route.iter().enumerate().skip(start_index + 1) {
        let distance = haversine_distance_with_radius(start, end, radius);
        if best.map_or(true, |it| distance > it.distance) {
            best = Some(OptimizationResult { start_index, end_index, distance });
        }
    }

    best
}
