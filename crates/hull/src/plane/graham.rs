//! Graham scan in its monotone-chain form.
//!
//! Sort a private copy lexicographically, sweep it forwards to build the upper
//! chain and backwards to build the lower chain, dropping the middle of any
//! trailing triple that is not a left turn. The chains share their end points,
//! so the lower chain is trimmed before concatenation.

use super::hull::{Hull, HullStep, StepPhase};
use super::orientation::{orientation, Orientation};
use super::types::{Coord, HullCfg, HullError, Point};
use super::util::{finish, small_hull, sorted_copy};

/// Graham scan with default configuration and no observer.
pub fn graham_scan_hull<T: Coord>(points: &[Point<T>]) -> Result<Hull<T>, HullError> {
    graham_scan_hull_with(points, HullCfg::default(), |_| {})
}

/// Graham scan reporting one `HullStep` per processed point.
///
/// Upper-phase steps show the upper chain; lower-phase steps show the upper
/// chain as `head` and the current lower chain as `tail`. Both are borrowed,
/// so the scan stays O(n log n) whether or not anything observes it.
pub fn graham_scan_hull_with<T, F>(
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
    let pts = sorted_copy(points);
    let n = pts.len();
    if pts[0] == pts[n - 1] {
        return Ok(Hull::from_vertices(vec![pts[0]]));
    }

    let mut index = 0usize;
    let mut upper: Vec<Point<T>> = Vec::with_capacity(n);
    upper.extend_from_slice(&pts[..2]);
    for p in &pts[2..] {
        push_keeping_left_turns(&mut upper, *p);
        on_step(HullStep {
            phase: StepPhase::Upper,
            index,
            head: &upper,
            tail: &[],
        });
        index += 1;
    }

    let mut lower: Vec<Point<T>> = Vec::with_capacity(n);
    lower.push(pts[n - 1]);
    lower.push(pts[n - 2]);
    for p in pts[..n - 2].iter().rev() {
        push_keeping_left_turns(&mut lower, *p);
        on_step(HullStep {
            phase: StepPhase::Lower,
            index,
            head: &upper,
            tail: &lower,
        });
        index += 1;
    }

    // lower = [last sorted, …, first sorted]; both ends are already in `upper`.
    upper.extend_from_slice(&lower[1..lower.len() - 1]);
    Ok(finish(upper, points, cfg))
}

/// Append `p`, then drop the second-to-last point while the last three are not a left turn.
fn push_keeping_left_turns<T: Coord>(chain: &mut Vec<Point<T>>, p: Point<T>) {
    chain.push(p);
    while chain.len() >= 3 {
        let k = chain.len();
        if orientation(&chain[k - 1], &chain[k - 2], &chain[k - 3]) == Orientation::LeftTurn {
            break;
        }
        chain.remove(k - 2);
    }
}
