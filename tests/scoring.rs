#[macro_use]
extern crate assert_approx_eq;

extern crate chrono;
extern crate xcscore;

use chrono::NaiveTime;
use xcscore::bonus::{BonusKind, BonusZone};
use xcscore::chain_sum::calculate_distance;
use xcscore::haversine::haversine_distance;
use xcscore::max_pair;
use xcscore::turnpoints::find_turnpoints;
use xcscore::{score, Error, GeoPoint, ScoringConfig, Strategy, Track, TurnpointConfig};

fn point(seconds: u32, latitude: f64, longitude: f64) -> GeoPoint {
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap();
    GeoPoint::new(time, latitude, longitude, 1000)
}

fn track(points: &[(f64, f64)]) -> Track {
    let fixes = points.iter()
        .enumerate()
        .map(|(i, &(lat, lon))| point(36000 + i as u32 * 10, lat, lon))
        .collect();

    Track::new(fixes).unwrap()
}

/// Five fixes heading east, then turning north at index 2
fn l_shape() -> Track {
    track(&[(0., 0.), (0., 0.1), (0., 0.2), (0.1, 0.2), (0.2, 0.2)])
}

fn config(strategy: Strategy, stride: usize) -> ScoringConfig {
    ScoringConfig {
        turnpoints: TurnpointConfig { stride, ..TurnpointConfig::default() },
        ..ScoringConfig::with_strategy(strategy)
    }
}

#[test]
fn default_config() {
    let config = ScoringConfig::default();
    assert_eq!(config.strategy, Strategy::MaxPair);
    assert_eq!(config.earth_radius_km, 6371.);
    assert_eq!(config.turnpoints.stride, 40);
    assert_eq!(config.turnpoints.threshold_degrees, 25.);
    assert_eq!(config.points_factor, 1.);
}

#[test]
fn turnpoints_with_every_fix_checked() {
    let track = l_shape();
    let turnpoints = find_turnpoints(track.as_slice(), &TurnpointConfig { stride: 1, threshold_degrees: 25. });
    assert_eq!(turnpoints, vec![0, 2, 4]);
}

#[test]
fn turnpoints_depend_on_stride() {
    let track = l_shape();

    // only index 1 is checked, the turn at index 2 is skipped
    let turnpoints = find_turnpoints(track.as_slice(), &TurnpointConfig { stride: 40, threshold_degrees: 25. });
    assert_eq!(turnpoints, vec![0, 4]);

    // zero stride behaves like one
    let turnpoints = find_turnpoints(track.as_slice(), &TurnpointConfig { stride: 0, threshold_degrees: 25. });
    assert_eq!(turnpoints, vec![0, 2, 4]);
}

#[test]
fn turnpoints_depend_on_threshold() {
    let track = l_shape();
    let turnpoints = find_turnpoints(track.as_slice(), &TurnpointConfig { stride: 1, threshold_degrees: 100. });
    assert_eq!(turnpoints, vec![0, 4]);
}

#[test]
fn two_point_track_has_only_endpoints() {
    let track = track(&[(0., 0.), (1., 1.)]);
    assert_eq!(find_turnpoints(track.as_slice(), &TurnpointConfig::default()), vec![0, 1]);
}

#[test]
fn chain_sum_follows_turnpoints() {
    let track = l_shape();
    let fixes = track.as_slice();

    let result = score(&track, &config(Strategy::ChainSum, 1)).unwrap();
    let expected = haversine_distance(&fixes[0], &fixes[2]) + haversine_distance(&fixes[2], &fixes[4]);
    assert_approx_eq!(result.distance, expected, 0.0005);
    assert_eq!(result.points, result.distance);
    assert_eq!(result.strategy, Strategy::ChainSum);
    assert_eq!(result.start, fixes[0]);
    assert_eq!(result.end, fixes[4]);

    let result = score(&track, &config(Strategy::ChainSum, 40)).unwrap();
    assert_approx_eq!(result.distance, haversine_distance(&fixes[0], &fixes[4]), 0.0005);
}

#[test]
fn chain_sum_never_exceeds_full_track_length() {
    let track = track(&[
        (46., 7.), (46.01, 7.02), (46.03, 7.01), (46.02, 6.98), (46.05, 6.97),
        (46.06, 7.03), (46.04, 7.05), (46.08, 7.06), (46.1, 7.02), (46.07, 7.),
    ]);
    let full = calculate_distance(track.as_slice(), &(0..track.len()).collect::<Vec<_>>(), 6371.);

    for &stride in &[1, 2, 3, 40] {
        let result = score(&track, &config(Strategy::ChainSum, stride)).unwrap();
        assert!(result.distance <= full + 0.0005, "stride {}: {} > {}", stride, result.distance, full);
    }
}

#[test]
fn max_pair_of_two_points() {
    // later fix is further south-west, order in time doesn't matter
    let track = track(&[(46.5, 7.5), (46., 7.)]);
    let result = score(&track, &ScoringConfig::default()).unwrap();

    let fixes = track.as_slice();
    assert_approx_eq!(result.distance, haversine_distance(&fixes[0], &fixes[1]), 0.0005);
    assert_eq!((result.start_index, result.end_index), (0, 1));
    assert_eq!(result.start, fixes[0]);
    assert_eq!(result.end, fixes[1]);
    assert_eq!(result.strategy, Strategy::MaxPair);
}

#[test]
fn max_pair_finds_global_maximum() {
    let track = track(&[(46., 7.), (46.2, 7.1), (46.9, 7.3), (46.1, 8.4), (46.4, 7.2)]);
    let result = max_pair::optimize(track.as_slice(), 6371.).unwrap();

    let fixes = track.as_slice();
    let mut best = (0, 0, 0.);
    for i in 0..fixes.len() {
        for j in i + 1..fixes.len() {
            let distance = haversine_distance(&fixes[i], &fixes[j]);
            if distance > best.2 {
                best = (i, j, distance);
            }
        }
    }

    assert_eq!((result.start_index, result.end_index, result.distance), best);
    assert_eq!((result.start_index, result.end_index), (2, 3));
}

#[test]
fn max_pair_tie_takes_earliest_pair() {
    // diagonals of a rectangle centered on the equator are equal
    let track = track(&[(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)]);
    let fixes = track.as_slice();
    assert_eq!(haversine_distance(&fixes[0], &fixes[2]), haversine_distance(&fixes[1], &fixes[3]));

    let result = max_pair::optimize(fixes, 6371.).unwrap();
    assert_eq!((result.start_index, result.end_index), (0, 2));

    // same diagonals, listed the other way round
    let track = track_from(&[fixes[1], fixes[0], fixes[3], fixes[2]]);
    let result = max_pair::optimize(track.as_slice(), 6371.).unwrap();
    assert_eq!((result.start_index, result.end_index), (0, 2));
}

fn track_from(fixes: &[GeoPoint]) -> Track {
    Track::new(fixes.to_vec()).unwrap()
}

#[test]
fn max_pair_never_decreases_when_points_are_added() {
    let all = [
        (46., 7.), (46.05, 7.1), (45.9, 7.2), (46.3, 6.9), (46.1, 7.4),
        (45.7, 7.0), (46.2, 7.6), (46.0, 6.5),
    ];

    let mut previous = 0.;
    for n in 2..=all.len() {
        let result = score(&track(&all[..n]), &ScoringConfig::default()).unwrap();
        assert!(result.distance >= previous);
        previous = result.distance;
    }
}

#[test]
fn distance_and_points_are_rounded() {
    let track = track(&[(46., 7.), (46.123456, 7.654321)]);
    let result = score(&track, &ScoringConfig::default()).unwrap();

    assert_eq!(result.distance, (result.distance * 1000.).round() / 1000.);
    assert_eq!(result.points, result.distance);
}

#[test]
fn points_factor_and_bonus_zones() {
    let track = l_shape();
    let base = score(&track, &ScoringConfig::default()).unwrap();

    let zone = |kind, amount, latitude, longitude| BonusZone { kind, amount, latitude, longitude, radius_km: 1. };
    let config = ScoringConfig {
        points_factor: 1.5,
        bonus_zones: vec![
            zone(BonusKind::Points, 10., 0.2, 0.2),
            zone(BonusKind::Multiplier, 0.5, 0., 0.1),
            // not reached
            zone(BonusKind::Points, 100., 10., 10.),
        ],
        ..ScoringConfig::default()
    };

    let result = score(&track, &config).unwrap();
    assert_eq!(result.distance, base.distance);
    assert_approx_eq!(result.points, (base.distance + 10.) * 2., 0.001);
}

#[test]
fn radius_changes_distance() {
    let track = l_shape();
    let config = ScoringConfig { earth_radius_km: 6357., ..ScoringConfig::default() };

    let default = score(&track, &ScoringConfig::default()).unwrap();
    let small = score(&track, &config).unwrap();
    assert_approx_eq!(small.distance / default.distance, 6357. / 6371., 1e-4);
}

#[test]
fn too_short_routes_are_rejected() {
    let single = [point(36000, 46., 7.)];

    match max_pair::optimize(&single, 6371.) {
        Err(Error::InsufficientTrackData { fixes: 1 }) => {}
        other => panic!("unexpected result {:?}", other),
    }

    match xcscore::chain_sum::optimize(&single[..0], &TurnpointConfig::default(), 6371.) {
        Err(Error::InsufficientTrackData { fixes: 0 }) => {}
        other => panic!("unexpected result {:?}", other),
    }

    match Track::new(single.to_vec()) {
        Err(Error::InsufficientTrackData { fixes: 1 }) => {}
        other => panic!("unexpected result {:?}", other),
    }
}
