use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::config::ScoringConfig;
use crate::error::{Error, Result};
use crate::export::{export_snapshot, snapshot_path};
use crate::score::{score, ScoreResult};
use crate::track::{read_track, FlightMetadata, Track};

/// Per-flight values handed to storage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummary {
    pub max_altitude: i32,
    pub distance: f64,
    pub points: f64,
    pub takeoff_time: NaiveDateTime,
    pub landing_time: NaiveDateTime,
    pub aircraft_type: Option<String>,
}

impl FlightSummary {
    /// Combines track, headers and score.
    ///
    /// The header date takes precedence over `fallback_date`. A landing time
    /// of day before the takeoff time of day is put on the following day.
    ///
    pub fn new(
        track: &Track,
        metadata: &FlightMetadata,
        score: &ScoreResult,
        fallback_date: Option<NaiveDate>,
    ) -> Result<FlightSummary> {
        let date = metadata.flight_date.or(fallback_date).ok_or(Error::MissingFlightDate)?;

        let takeoff_time = date.and_time(track.first().time);
        let mut landing_time = date.and_time(track.last().time);
        if landing_time < takeoff_time {
            landing_time = landing_time + Duration::days(1);
        }

        Ok(FlightSummary {
            max_altitude: track.max_altitude(),
            distance: score.distance,
            points: score.points,
            takeoff_time,
            landing_time,
            aircraft_type: metadata.aircraft_type.clone(),
        })
    }
}

/// Everything derived from one IGC file
#[derive(Debug, Clone)]
pub struct Analysis {
    pub track: Track,
    pub metadata: FlightMetadata,
    pub score: ScoreResult,
    pub summary: FlightSummary,
}

impl Analysis {
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        config: &ScoringConfig,
        fallback_date: Option<NaiveDate>,
    ) -> Result<Analysis> {
        let (track, metadata) = read_track(path)?;
        Analysis::from_track(track, metadata, config, fallback_date)
    }

    pub fn from_track(
        track: Track,
        metadata: FlightMetadata,
        config: &ScoringConfig,
        fallback_date: Option<NaiveDate>,
    ) -> Result<Analysis> {
        debug!("Scoring {} fixes with {:?}", track.len(), config.strategy);
        let score = score(&track, config)?;
        let summary = FlightSummary::new(&track, &metadata, &score, fallback_date)?;

        Ok(Analysis { track, metadata, score, summary })
    }

    /// Writes the track snapshot to `<dir>/<base_id>.csv`.
    ///
    /// A failed export leaves the analysis untouched, a partially written
    /// file must not be trusted.
    ///
    pub fn export<P: AsRef<Path>>(&self, dir: P, base_id: &str) -> Result<PathBuf> {
        let path = snapshot_path(dir, base_id);
        export_snapshot(&path, &self.track, &self.score)?;
        Ok(path)
    }
}
