use serde::{Deserialize, Serialize};

use crate::bonus::calculate_points;
use crate::chain_sum;
use crate::config::ScoringConfig;
use crate::error::Result;
use crate::max_pair;
use crate::point::GeoPoint;
use crate::track::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Sum of the legs between detected turnpoints
    ChainSum,
    /// Largest distance between any two fixes (free distance)
    MaxPair,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Scored distance in kilometers, rounded to 3 decimals
    pub distance: f64,
    pub points: f64,
    pub start_index: usize,
    pub end_index: usize,
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub strategy: Strategy,
}

impl ScoreResult {
    pub(crate) fn new(track: &Track, strategy: Strategy, distance: f64, points: f64, start_index: usize, end_index: usize) -> ScoreResult {
        let fixes = track.as_slice();

        ScoreResult {
            distance: round3(distance),
            points: round3(points),
            start_index,
            end_index,
            start: fixes[start_index],
            end: fixes[end_index],
            strategy,
        }
    }
}

/// Scores a track with the strategy selected in `config`
pub fn score(track: &Track, config: &ScoringConfig) -> Result<ScoreResult> {
    let route = track.as_slice();
    let radius = config.earth_radius_km;

    let (distance, start_index, end_index) = match config.strategy {
        Strategy::ChainSum => {
            let result = chain_sum::optimize(route, &config.turnpoints, radius)?;
            (result.distance, 0, route.len() - 1)
        }
        Strategy::MaxPair => {
            let result = max_pair::optimize(route, radius)?;
            (result.distance, result.start_index, result.end_index)
        }
    };

    // points are derived from the rounded distance, like the stored value
    let distance = round3(distance);
    let points = calculate_points(route, distance, config.points_factor, &config.bonus_zones, radius);

    Ok(ScoreResult::new(track, config.strategy, distance, points, start_index, end_index))
}

pub fn round3(value: f64) -> f64 {
    (value * 1000.).round() / 1000.
}
