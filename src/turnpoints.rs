use crate::Point;
use crate::bearing::{angle_diff, bearing};
use crate::config::TurnpointConfig;

/// Finds the indices where the flight path turns by more than
/// `threshold_degrees`.
///
/// The heading change is only checked at every `stride`-th fix, starting at
/// index 1, comparing the leg arriving at the fix with the leg leaving it.
/// The first and last index are always part of the result, which is sorted
/// in ascending order.
///
pub fn find_turnpoints<T: Point>(route: &[T], config: &TurnpointConfig) -> Vec<usize> {
    if route.is_empty() {
        return Vec::new();
    }

    let last = route.len() - 1;
    let stride = config.stride.max(1);

    let mut turnpoints = vec![0];

    for i in (1..last).step_by(stride) {
        let incoming = bearing(&route[i - 1], &route[i]);
        let outgoing = bearing(&route[i], &route[i + 1]);

        let diff = angle_diff(incoming, outgoing);
        if diff > config.threshold_degrees {
            trace!("Turnpoint at index {} ({:.1}° heading change)", i, diff);
            turnpoints.push(i);
        }
    }

    if last > 0 {
        turnpoints.push(last);
    }

    turnpoints
}
