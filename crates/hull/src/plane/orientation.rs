//! Orientation predicate shared by both builders.
//!
//! The predicate is two-valued on purpose: exact collinearity is reported as
//! `RightTurnOrCollinear`, which is what makes both builders drop collinear
//! boundary points under `CollinearPolicy::Exclude`.

use super::types::{Coord, Point};

/// Turn classification of an ordered triple `(p1, p2, p3)`.
///
/// Names follow the raster convention (y axis pointing down), in which a
/// negative cross product is a visually counter-clockwise turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    LeftTurn,
    RightTurnOrCollinear,
}

/// Exact cross product `(p3.y − p1.y)(p2.x − p1.x) − (p2.y − p1.y)(p3.x − p1.x)`,
/// evaluated in `T::Wide`.
///
/// Equal to the usual `(p2 − p1) × (p3 − p1)`: positive when `p1 → p2 → p3`
/// turns counter-clockwise with the y axis pointing up.
#[inline]
pub fn cross<T: Coord>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> T::Wide {
    let (x1, y1) = (p1.x.widen(), p1.y.widen());
    let (x2, y2) = (p2.x.widen(), p2.y.widen());
    let (x3, y3) = (p3.x.widen(), p3.y.widen());
    (y3 - y1) * (x2 - x1) - (y2 - y1) * (x3 - x1)
}

/// Classify the turn from edge `p1 → p2` to edge `p2 → p3`.
#[inline]
pub fn orientation<T: Coord>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation {
    if cross(p1, p2, p3) < T::WIDE_ZERO {
        Orientation::LeftTurn
    } else {
        Orientation::RightTurnOrCollinear
    }
}

#[inline]
pub fn is_collinear<T: Coord>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> bool {
    cross(p1, p2, p3) == T::WIDE_ZERO
}

/// Squared distance in the wide type.
#[inline]
pub(crate) fn dist2<T: Coord>(a: &Point<T>, b: &Point<T>) -> T::Wide {
    let dx = b.x.widen() - a.x.widen();
    let dy = b.y.widen() - a.y.widen();
    dx * dx + dy * dy
}

/// `(b − a) · (c − a)` in the wide type.
#[inline]
pub(crate) fn dot<T: Coord>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T::Wide {
    let (ax, ay) = (a.x.widen(), a.y.widen());
    (b.x.widen() - ax) * (c.x.widen() - ax) + (b.y.widen() - ay) * (c.y.widen() - ay)
}
