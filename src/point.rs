use chrono::NaiveTime;

pub trait Point: Sync {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
    fn altitude(&self) -> i32;
}

/// A single decoded position fix.
///
/// Latitude and longitude are signed degrees (south and west negative),
/// the altitude is the GPS altitude in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub time: NaiveTime,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: i32,
}

impl GeoPoint {
    pub fn new(time: NaiveTime, latitude: f64, longitude: f64, altitude: i32) -> GeoPoint {
        GeoPoint { time, latitude, longitude, altitude }
    }
}

impl Point for GeoPoint {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
    fn altitude(&self) -> i32 {
        self.altitude
    }
}
