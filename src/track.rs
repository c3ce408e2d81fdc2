use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::point::GeoPoint;
use crate::record::{decode_line, Record};

/// Position fixes in the order they appear in the IGC file
///
/// A `Track` always holds at least two fixes.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    fixes: Vec<GeoPoint>,
}

impl Track {
    pub fn new(fixes: Vec<GeoPoint>) -> Result<Track> {
        if fixes.len() < 2 {
            return Err(Error::InsufficientTrackData { fixes: fixes.len() });
        }

        Ok(Track { fixes })
    }

    pub fn as_slice(&self) -> &[GeoPoint] {
        &self.fixes
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn first(&self) -> &GeoPoint {
        &self.fixes[0]
    }

    pub fn last(&self) -> &GeoPoint {
        &self.fixes[self.fixes.len() - 1]
    }

    pub fn max_altitude(&self) -> i32 {
        self.fixes.iter().map(|fix| fix.altitude).max().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightMetadata {
    pub flight_date: Option<NaiveDate>,
    pub aircraft_type: Option<String>,
}

/// Accumulates decoded records in a single pass over a file.
///
/// Later date and aircraft type headers replace earlier ones.
#[derive(Debug, Default)]
pub struct TrackBuilder {
    metadata: FlightMetadata,
    fixes: Vec<GeoPoint>,
}

impl TrackBuilder {
    pub fn new() -> TrackBuilder {
        TrackBuilder::default()
    }

    pub fn push(&mut self, record: Record) {
        match record {
            Record::DateHeader(date) => self.metadata.flight_date = Some(date),
            Record::AircraftTypeHeader(value) => self.metadata.aircraft_type = Some(value),
            Record::PositionFix(fix) => self.fixes.push(fix),
            Record::Ignored => {}
        }
    }

    /// Decodes and accumulates every line, aborting on the first decode error
    pub fn push_lines<'a, I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            self.push(decode_line(line)?);
        }
        Ok(())
    }

    pub fn finish(self) -> Result<(Track, FlightMetadata)> {
        debug!("Collected {} position fixes", self.fixes.len());
        let track = Track::new(self.fixes)?;
        Ok((track, self.metadata))
    }
}

pub fn parse_str(content: &str) -> Result<(Track, FlightMetadata)> {
    let mut builder = TrackBuilder::new();
    builder.push_lines(content.lines())?;
    builder.finish()
}

/// Reads and decodes a complete IGC file
pub fn read_track<P: AsRef<Path>>(path: P) -> Result<(Track, FlightMetadata)> {
    let path = path.as_ref();
    debug!("Reading IGC file {:?}", path);

    let bytes = fs::read(path)
        .map_err(|cause| Error::UnreadableSource { path: path.to_path_buf(), cause })?;

    parse_str(&String::from_utf8_lossy(&bytes))
}
