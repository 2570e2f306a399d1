//! Rank-based estimators for complete (uncensored) data.
//!
//! Censored events are ignored. For the i-th smallest of `n` failure times the
//! survival estimate is `1 - rank(i, n)` where `rank` is:
//!
//! ```text
//! DM   i / n
//! IDM  i / (n + 1)
//! MRM  (i - 0.3) / (n + 0.4)
//! ```

use super::{validate_events, with_origin_sorted};
use crate::domain::{Event, Point};
use crate::error::FitError;

/// Direct Method.
pub fn estimate_dm(events: &[Event]) -> Result<Vec<Point>, FitError> {
    estimate_complete_data(events, |i, n| i / n)
}

/// Improved Direct Method.
pub fn estimate_idm(events: &[Event]) -> Result<Vec<Point>, FitError> {
    estimate_complete_data(events, |i, n| i / (n + 1.0))
}

/// Median Rank Method.
pub fn estimate_mrm(events: &[Event]) -> Result<Vec<Point>, FitError> {
    estimate_complete_data(events, |i, n| (i - 0.3) / (n + 0.4))
}

/// Shared algorithm: `rank(i, n)` gives the unreliability of the i-th failure.
fn estimate_complete_data(
    events: &[Event],
    rank: impl Fn(f64, f64) -> f64,
) -> Result<Vec<Point>, FitError> {
    let n = validate_events(events)?;

    let sorted = with_origin_sorted(events.iter().copied().filter(Event::is_failure));
    let n_f = n as f64;

    let points = sorted
        .iter()
        .enumerate()
        .map(|(i, e)| {
            if i == 0 {
                Point::new(0.0, 1.0)
            } else {
                Point::new(e.time, 1.0 - rank(i as f64, n_f))
            }
        })
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_failures() -> Vec<Event> {
        // Deliberately unsorted.
        vec![
            Event::failure(3.0),
            Event::failure(1.0),
            Event::failure(4.0),
            Event::failure(2.0),
        ]
    }

    fn assert_points(actual: &[Point], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len());
        for (p, &(x, y)) in actual.iter().zip(expected) {
            assert_eq!(p.x, x);
            assert!((p.y - y).abs() < 1e-12, "at x={x}: got {}, want {y}", p.y);
        }
    }

    #[test]
    fn direct_method_four_failures() {
        let points = estimate_dm(&four_failures()).unwrap();
        assert_points(
            &points,
            &[(0.0, 1.0), (1.0, 0.75), (2.0, 0.5), (3.0, 0.25), (4.0, 0.0)],
        );
    }

    #[test]
    fn improved_direct_method_four_failures() {
        let points = estimate_idm(&four_failures()).unwrap();
        assert_points(
            &points,
            &[(0.0, 1.0), (1.0, 0.8), (2.0, 0.6), (3.0, 0.4), (4.0, 0.2)],
        );
    }

    #[test]
    fn median_rank_four_failures() {
        let points = estimate_mrm(&four_failures()).unwrap();
        let expected: Vec<(f64, f64)> = std::iter::once((0.0, 1.0))
            .chain((1..=4).map(|i| (i as f64, 1.0 - (i as f64 - 0.3) / 4.4)))
            .collect();
        assert_points(&points, &expected);
    }

    #[test]
    fn censored_events_are_dropped() {
        let mut events = four_failures();
        events.push(Event::censored(2.5));
        events.push(Event::censored(10.0));
        let points = estimate_idm(&events).unwrap();
        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|p| p.x != 2.5 && p.x != 10.0));
        assert!((points[4].y - 0.2).abs() < 1e-12);
    }
}
