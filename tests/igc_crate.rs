#[macro_use]
extern crate assert_approx_eq;

extern crate igc;
extern crate xcscore;

use xcscore::{decode_line, Record};

/// Compares the fix decoder against the `igc` crate on the fixture flight
#[test]
fn fixes_match_igc_crate() {
    let mut count = 0;

    for line in include_str!("fixtures/flight.igc").lines().filter(|l| l.starts_with('B')) {
        let reference = match igc::records::BRecord::parse(line) {
            Ok(record) => record,
            Err(_) => {
                assert_eq!(decode_line(line).unwrap(), Record::Ignored, "{}", line);
                continue;
            }
        };

        let point = match decode_line(line).unwrap() {
            Record::PositionFix(point) => point,
            other => panic!("{}: expected position fix, got {:?}", line, other),
        };

        let latitude: f64 = reference.pos.lat.into();
        let longitude: f64 = reference.pos.lon.into();
        assert_approx_eq!(point.latitude, latitude, 1e-9);
        assert_approx_eq!(point.longitude, longitude, 1e-9);
        assert_eq!(point.altitude, i32::from(reference.gps_alt));

        count += 1;
    }

    assert_eq!(count, 241);
}
