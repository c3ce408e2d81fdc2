//! Bonus zones add points or raise the points multiplier when the track
//! passes through them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::{Error, Result};
use crate::haversine::haversine_distance_with_radius;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    /// Adds `amount` kilometers to the scored distance
    #[serde(rename = "P")]
    Points,
    /// Adds `amount` to the points multiplier
    #[serde(rename = "M")]
    Multiplier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusZone {
    pub kind: BonusKind,
    pub amount: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

impl Point for BonusZone {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
    fn altitude(&self) -> i32 {
        0
    }
}

impl BonusZone {
    pub fn is_reached<T: Point>(&self, route: &[T], earth_radius: f64) -> bool {
        route.iter().any(|fix| haversine_distance_with_radius(fix, self, earth_radius) <= self.radius_km)
    }
}

/// Converts a distance into points:
/// `(distance + point bonuses) * (factor + multiplier bonuses)`
pub fn calculate_points<T: Point>(
    route: &[T],
    distance: f64,
    factor: f64,
    zones: &[BonusZone],
    earth_radius: f64,
) -> f64 {
    let mut bonus = 0.;
    let mut multiplier = factor;

    for zone in zones.iter().filter(|zone| zone.is_reached(route, earth_radius)) {
        debug!("Bonus zone reached: {:?}", zone);
        match zone.kind {
            BonusKind::Points => bonus += zone.amount,
            BonusKind::Multiplier => multiplier += zone.amount,
        }
    }

    (distance + bonus) * multiplier
}

/// Reads a headerless `kind,amount,lat,lon,radius` CSV file
pub fn read_zones<P: AsRef<Path>>(path: P) -> Result<Vec<BonusZone>> {
    let path = path.as_ref();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|err| Error::InvalidBonusZone { line: 0, reason: err.to_string() })?;

    let mut zones = Vec::new();
    for result in reader.deserialize() {
        let zone: BonusZone = result.map_err(|err| Error::InvalidBonusZone {
            line: err.position().map_or(0, |pos| pos.line()),
            reason: err.to_string(),
        })?;
        zones.push(zone);
    }

    debug!("Read {} bonus zones from {:?}", zones.len(), path);
    Ok(zones)
}
