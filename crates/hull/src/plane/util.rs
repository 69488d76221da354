use std::cmp::Ordering;

use super::hull::Hull;
use super::orientation::{cross, dist2, dot};
use super::types::{check_size, CollinearPolicy, Coord, HullCfg, HullError, Point};

/// Lexicographic order: x ascending, then y ascending.
#[inline]
pub(crate) fn lex_cmp<T: Coord>(a: &Point<T>, b: &Point<T>) -> Ordering {
    a.x.cmp(&b.x).then_with(|| a.y.cmp(&b.y))
}

/// Private, stably sorted copy of the caller's points (duplicates keep their order).
pub(crate) fn sorted_copy<T: Coord>(points: &[Point<T>]) -> Vec<Point<T>> {
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    pts
}

/// Defined answers for n ∈ {0, 1, 2}; `Ok(None)` means "run the builder".
pub(crate) fn small_hull<T: Coord>(points: &[Point<T>]) -> Result<Option<Hull<T>>, HullError> {
    check_size(points.len(), 1)?;
    match points {
        [p] => Ok(Some(Hull::from_vertices(vec![*p]))),
        [a, b] if a == b => Ok(Some(Hull::from_vertices(vec![*a]))),
        [a, b] => {
            let pair = if lex_cmp(a, b) == Ordering::Greater {
                vec![*b, *a]
            } else {
                vec![*a, *b]
            };
            Ok(Some(Hull::from_vertices(pair)))
        }
        _ => Ok(None),
    }
}

/// Apply the collinear policy to a strict hull and wrap it.
pub(crate) fn finish<T: Coord>(
    strict: Vec<Point<T>>,
    points: &[Point<T>],
    cfg: HullCfg,
) -> Hull<T> {
    match cfg.collinear {
        CollinearPolicy::Exclude => Hull::from_vertices(strict),
        CollinearPolicy::Include => Hull::from_vertices(with_collinear_boundary(strict, points)),
    }
}

/// Insert input points lying strictly inside a hull edge, ordered along the edge.
///
/// A segment hull `[a, b]` is walked once (a → b) so nothing is listed twice.
fn with_collinear_boundary<T: Coord>(strict: Vec<Point<T>>, points: &[Point<T>]) -> Vec<Point<T>> {
    let h = strict.len();
    if h < 2 {
        return strict;
    }
    let edge_count = if h == 2 { 1 } else { h };
    let mut out = Vec::with_capacity(points.len().min(2 * h));
    for k in 0..edge_count {
        let a = strict[k];
        let b = strict[(k + 1) % h];
        out.push(a);
        let mut inner: Vec<Point<T>> = points
            .iter()
            .filter(|&q| {
                cross(&a, &b, q) == T::WIDE_ZERO
                    && dot(&a, &b, q) > T::WIDE_ZERO
                    && dot(&b, &a, q) > T::WIDE_ZERO
            })
            .copied()
            .collect();
        inner.sort_by_key(|q| dist2(&a, q));
        inner.dedup();
        out.extend(inner);
    }
    if h == 2 {
        out.push(strict[1]);
    }
    out
}
