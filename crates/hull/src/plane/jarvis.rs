//! Jarvis march (gift wrapping).
//!
//! Start at the lexicographically smallest point and repeatedly pick the
//! candidate no other point lies clockwise of, until the start comes round
//! again. Collinear candidates resolve to the farthest one, so collinear
//! boundary points are skipped exactly as in the Graham scan.

use super::hull::{Hull, HullStep, StepPhase};
use super::orientation::{dist2, is_collinear, orientation, Orientation};
use super::types::{Coord, HullCfg, HullError, Point};
use super::util::{finish, lex_cmp, small_hull};

/// Jarvis march with default configuration and no observer.
pub fn jarvis_march_hull<T: Coord>(points: &[Point<T>]) -> Result<Hull<T>, HullError> {
    jarvis_march_hull_with(points, HullCfg::default(), |_| {})
}

/// Jarvis march reporting the accumulated hull after each selected vertex.
///
/// Each step is O(n); the whole march is O(n·h). The loop is bounded by `n`
/// selections and reports `WrapDidNotClose` rather than spinning.
pub fn jarvis_march_hull_with<T, F>(
    points: &[Point<T>],
    cfg: HullCfg,
    mut on_step: F,
) -> Result<Hull<T>, HullError>
where
    T: Coord,
    F: FnMut(HullStep<'_, T>),
{
    if let Some(hull) = small_hull(points)? {
        return Ok(hull);
    }
    let n = points.len();
    let Some(&start) = leftmost(points) else {
        return Err(HullError::InvalidInputSize {
            got: 0,
            required: 1,
        });
    };

    let mut hull: Vec<Point<T>> = vec![start];
    let mut current = start;
    for index in 0..n {
        let next = next_vertex(points, &current);
        if next == start {
            return Ok(finish(hull, points, cfg));
        }
        hull.push(next);
        on_step(HullStep {
            phase: StepPhase::Wrap,
            index,
            head: &hull,
            tail: &[],
        });
        current = next;
    }
    Err(HullError::WrapDidNotClose { steps: n })
}

/// Minimum x, then minimum y; the first occurrence wins among exact duplicates.
fn leftmost<T: Coord>(points: &[Point<T>]) -> Option<&Point<T>> {
    points.iter().min_by(|a, b| lex_cmp(a, b))
}

/// Most clockwise candidate seen from `current`; farthest among collinear ones.
fn next_vertex<T: Coord>(points: &[Point<T>], current: &Point<T>) -> Point<T> {
    let mut endpoint = points[0];
    for q in &points[1..] {
        if endpoint == *current {
            endpoint = *q;
            continue;
        }
        if q == current {
            continue;
        }
        let outward = orientation(q, current, &endpoint) == Orientation::LeftTurn;
        let farther_on_line = is_collinear(q, current, &endpoint)
            && dist2(current, q) > dist2(current, &endpoint);
        if outward || farther_on_line {
            endpoint = *q;
        }
    }
    endpoint
}
