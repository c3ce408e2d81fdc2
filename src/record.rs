//! Decoding of single IGC lines.
//!
//! Only the records needed for scoring are interpreted: the flight date
//! header, the glider type header and the `B` position fixes. Every other
//! line decodes to [`Record::Ignored`].

use chrono::{NaiveDate, NaiveTime};

use crate::error::{Error, Result};
use crate::point::GeoPoint;

const DATE_TAG: &str = "HFDTEDATE";
const LEGACY_DATE_TAG: &str = "HFDTE";
const GLIDER_TYPE_TAG: &str = "HFGTY";
const GLIDER_TYPE_KEYWORD: &str = "GLIDERTYPE";

/// Shortest `B` record that still carries the GPS altitude
pub const MIN_FIX_LENGTH: usize = 35;

#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    DateHeader(NaiveDate),
    AircraftTypeHeader(String),
    PositionFix(GeoPoint),
    Ignored,
}

/// Decodes one line of an IGC file.
///
/// Fails only for a date header whose digits don't form a calendar date.
/// Short or garbled `B` records are `Ignored`.
///
pub fn decode_line(line: &str) -> Result<Record> {
    if line.starts_with('B') {
        return Ok(decode_fix(line).map_or(Record::Ignored, Record::PositionFix));
    }

    if line.starts_with(DATE_TAG) {
        let rest = &line[DATE_TAG.len()..];
        return decode_date(line, rest.strip_prefix(':').unwrap_or(rest)).map(Record::DateHeader);
    }

    // other `HFDTE...` headers only count as a date if six digits follow
    if line.starts_with(LEGACY_DATE_TAG) {
        let rest = &line[LEGACY_DATE_TAG.len()..];
        if rest.get(..6).map_or(false, |digits| digits.bytes().all(|b| b.is_ascii_digit())) {
            return decode_date(line, rest).map(Record::DateHeader);
        }
        return Ok(Record::Ignored);
    }

    if line.starts_with(GLIDER_TYPE_TAG) || line.to_ascii_uppercase().contains(GLIDER_TYPE_KEYWORD) {
        return Ok(match aircraft_type(line) {
            Some(value) => Record::AircraftTypeHeader(value),
            None => Record::Ignored,
        });
    }

    Ok(Record::Ignored)
}

/// `HFDTEDATE:ddmmyy,nn`, `HFDTEDATEddmmyy` or the pre-2016 `HFDTEddmmyy`
fn decode_date(line: &str, rest: &str) -> Result<NaiveDate> {
    let malformed = || Error::MalformedDateHeader { value: line.to_string() };

    let digits = rest.get(..6).ok_or_else(malformed)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let day = digits[0..2].parse::<u32>().map_err(|_| malformed())?;
    let month = digits[2..4].parse::<u32>().map_err(|_| malformed())?;
    let yy = digits[4..6].parse::<i32>().map_err(|_| malformed())?;
    let year = if yy < 70 { 2000 + yy } else { 1900 + yy };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Text after the first run of `:` or whitespace, e.g. `ASK-21` in
/// `HFGTYGLIDERTYPE:ASK-21`
fn aircraft_type(line: &str) -> Option<String> {
    let is_separator = |c: char| c == ':' || c.is_whitespace();

    let start = line.find(is_separator)?;
    let value = line[start..].trim_start_matches(is_separator).trim();

    if value.is_empty() { None } else { Some(value.to_string()) }
}

/// `B HHMMSS DDMMmmmN DDDMMmmmE V PPPPP GGGGG`
fn decode_fix(line: &str) -> Option<GeoPoint> {
    if line.len() < MIN_FIX_LENGTH {
        trace!("Ignoring short B record ({} bytes): {:?}", line.len(), line);
        return None;
    }

    let point = parse_fix(line);
    if point.is_none() {
        warn!("Ignoring malformed B record: {:?}", line);
    }

    point
}

fn parse_fix(line: &str) -> Option<GeoPoint> {
    let field = |start: usize, end: usize| line.get(start..end);
    let number = |start: usize, end: usize| field(start, end)?.parse::<u32>().ok();

    let time = NaiveTime::from_hms_opt(number(1, 3)?, number(3, 5)?, number(5, 7)?)?;

    let latitude = coordinate(field(7, 9)?, field(9, 14)?, field(14, 15)? == "S")?;
    let longitude = coordinate(field(15, 18)?, field(18, 23)?, field(23, 24)? == "W")?;

    if latitude.abs() > 90. || longitude.abs() > 180. {
        return None;
    }

    // some loggers pad the altitude with spaces instead of zeros
    let altitude = field(30, 35)?.trim().parse::<i32>().ok()?;

    Some(GeoPoint { time, latitude, longitude, altitude })
}

/// Degrees plus `MMmmm` thousandths of minutes
fn coordinate(degrees: &str, minutes: &str, negative: bool) -> Option<f64> {
    if !degrees.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let degrees = degrees.parse::<f64>().ok()?;
    let minutes = format!("{}.{}", &minutes[..2], &minutes[2..]).parse::<f64>().ok()?;

    let value = degrees + minutes / 60.;
    Some(if negative { -value } else { value })
}
