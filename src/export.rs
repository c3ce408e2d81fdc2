//! CSV snapshots of a scored track.
//!
//! A snapshot has the columns `time,lat,lon,altitude`. The first data row is
//! the scoring start point and the last one the scoring end point, both
//! without altitude. All raw fixes are written in between.

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::point::GeoPoint;
use crate::score::ScoreResult;
use crate::track::Track;

pub const EXTENSION: &str = "csv";

const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Serialize, Deserialize)]
struct Row {
    time: String,
    lat: f64,
    lon: f64,
    altitude: Option<i32>,
}

impl Row {
    fn fix(point: &GeoPoint) -> Row {
        Row { altitude: Some(point.altitude), ..Row::position(point) }
    }

    fn position(point: &GeoPoint) -> Row {
        Row {
            time: point.time.format(TIME_FORMAT).to_string(),
            lat: point.latitude,
            lon: point.longitude,
            altitude: None,
        }
    }
}

/// `<dir>/<base_id>.csv`
pub fn snapshot_path<P: AsRef<Path>>(dir: P, base_id: &str) -> PathBuf {
    dir.as_ref().join(format!("{}.{}", base_id, EXTENSION))
}

/// Writes only the raw fixes, one row per fix
pub fn write_track<W: io::Write>(writer: W, track: &Track) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for fix in track.as_slice() {
        writer.serialize(Row::fix(fix))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_snapshot<W: io::Write>(writer: W, track: &Track, score: &ScoreResult) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.serialize(Row::position(&score.start))?;
    for fix in track.as_slice() {
        writer.serialize(Row::fix(fix))?;
    }
    writer.serialize(Row::position(&score.end))?;

    writer.flush()?;
    Ok(())
}

pub fn export_snapshot<P: AsRef<Path>>(path: P, track: &Track, score: &ScoreResult) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing track snapshot to {:?}", path);

    let file = std::fs::File::create(path).map_err(|err| Error::export_write(path, err))?;
    write_snapshot(io::BufWriter::new(file), track, score).map_err(|err| Error::export_write(path, err))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub start: GeoPoint,
    pub fixes: Vec<GeoPoint>,
    pub end: GeoPoint,
}

pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    let path = path.as_ref();
    let failure = |reason: String| Error::ExportReadFailure { path: path.to_path_buf(), reason };

    let mut reader = csv::Reader::from_path(path).map_err(|err| failure(err.to_string()))?;

    let mut points = Vec::new();
    for result in reader.deserialize() {
        let row: Row = result.map_err(|err| failure(err.to_string()))?;
        let time = NaiveTime::parse_from_str(&row.time, TIME_FORMAT)
            .map_err(|err| failure(format!("invalid time {:?}: {}", row.time, err)))?;

        points.push(GeoPoint::new(time, row.lat, row.lon, row.altitude.unwrap_or_default()));
    }

    if points.len() < 2 {
        return Err(failure(format!("expected start and end rows, found {} rows", points.len())));
    }

    let end = points.remove(points.len() - 1);
    let start = points.remove(0);

    Ok(Snapshot { start, fixes: points, end })
}
