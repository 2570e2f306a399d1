//! Product-Limit (Kaplan-Meier) estimator.
//!
//! With all `n` events sorted (origin at index 0), the running survival is
//!
//! ```text
//! S_i = S_{i-1} * (n + 1 - i) / (n + 2 - i)   if event i is a failure
//! S_i = S_{i-1}                               if event i is censored
//! ```
//!
//! Only the origin and failures produce output points; censoring shows up as
//! a smaller drop at the next failure.

use tracing::debug;

use super::{validate_events, with_origin_sorted};
use crate::domain::{Event, Point};
use crate::error::FitError;

/// Product-Limit Estimator.
pub fn estimate_ple(events: &[Event]) -> Result<Vec<Point>, FitError> {
    let failures = validate_events(events)?;
    let n = events.len();
    debug!(n, failures, censored = n - failures, "product-limit estimate");

    let sorted = with_origin_sorted(events.iter().copied());

    let mut survival = 1.0;
    let mut points = Vec::with_capacity(failures + 1);
    points.push(Point::new(0.0, 1.0));

    for (i, e) in sorted.iter().enumerate().skip(1) {
        if e.is_failure() {
            survival *= (n + 1 - i) as f64 / (n + 2 - i) as f64;
            points.push(Point::new(e.time, survival));
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_censoring_matches_improved_direct_method() {
        let events: Vec<Event> = [5.0, 1.0, 3.0, 2.0, 4.0]
            .iter()
            .map(|&t| Event::failure(t))
            .collect();
        let ple = estimate_ple(&events).unwrap();
        let idm = crate::estimate::estimate_idm(&events).unwrap();
        assert_eq!(ple.len(), idm.len());
        for (a, b) in ple.iter().zip(&idm) {
            assert_eq!(a.x, b.x);
            assert!((a.y - b.y).abs() < 1e-12);
        }
    }

    #[test]
    fn censoring_shrinks_later_steps() {
        // n = 4: F(1), C(2), F(3), F(4)
        let events = vec![
            Event::failure(3.0),
            Event::censored(2.0),
            Event::failure(1.0),
            Event::failure(4.0),
        ];
        let points = estimate_ple(&events).unwrap();
        assert_eq!(points.len(), 4);

        let s1 = 4.0 / 5.0;
        let s3 = s1 * 2.0 / 3.0;
        let s4 = s3 * 1.0 / 2.0;
        let expected = [(0.0, 1.0), (1.0, s1), (3.0, s3), (4.0, s4)];
        for (p, &(x, y)) in points.iter().zip(&expected) {
            assert_eq!(p.x, x);
            assert!((p.y - y).abs() < 1e-12);
        }
    }

    #[test]
    fn running_estimate_is_non_increasing() {
        let events = vec![
            Event::failure(12.0),
            Event::censored(4.0),
            Event::failure(2.0),
            Event::censored(9.0),
            Event::failure(6.0),
            Event::failure(7.5),
            Event::censored(1.0),
            Event::failure(15.0),
        ];
        let points = estimate_ple(&events).unwrap();
        for w in points.windows(2) {
            assert!(w[1].y <= w[0].y);
            assert!(w[1].x > w[0].x);
        }
        // Censored events never produce points.
        assert_eq!(points.len(), 6);
    }

    #[test]
    fn ties_keep_input_order() {
        // A censoring listed before a failure at the same time is processed first.
        let events = vec![Event::censored(2.0), Event::failure(2.0), Event::failure(3.0)];
        let points = estimate_ple(&events).unwrap();
        // n = 3: C at i=1, F at i=2 -> 2/3, F at i=3 -> 1/2.
        assert!((points[1].y - 2.0 / 3.0).abs() < 1e-12);
        assert!((points[2].y - 1.0 / 3.0).abs() < 1e-12);
    }
}
