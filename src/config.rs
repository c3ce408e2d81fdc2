use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bonus::BonusZone;
use crate::error::{Error, Result};
use crate::haversine::EARTH_RADIUS;
use crate::score::Strategy;

pub const DEFAULT_STRIDE: usize = 40;
pub const DEFAULT_THRESHOLD: f64 = 25.;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnpointConfig {
    /// Number of fixes between two heading checks
    pub stride: usize,
    /// Minimum heading change in degrees for a turnpoint
    pub threshold_degrees: f64,
}

impl Default for TurnpointConfig {
    fn default() -> Self {
        TurnpointConfig {
            stride: DEFAULT_STRIDE,
            threshold_degrees: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub strategy: Strategy,
    pub earth_radius_km: f64,
    pub turnpoints: TurnpointConfig,
    /// Base multiplier from scored kilometers to points
    pub points_factor: f64,
    pub bonus_zones: Vec<BonusZone>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            strategy: Strategy::MaxPair,
            earth_radius_km: EARTH_RADIUS,
            turnpoints: TurnpointConfig::default(),
            points_factor: 1.,
            bonus_zones: Vec::new(),
        }
    }
}

impl ScoringConfig {
    pub fn with_strategy(strategy: Strategy) -> ScoringConfig {
        ScoringConfig { strategy, ..ScoringConfig::default() }
    }

    /// Loads a config from a JSON file, missing keys keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<ScoringConfig> {
        let path = path.as_ref();
        let invalid = |reason: String| Error::InvalidConfig { path: path.to_path_buf(), reason };

        let file = File::open(path).map_err(|err| invalid(err.to_string()))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|err| invalid(err.to_string()))
    }
}
