//! Hull values and the construction snapshots handed to observers.
//!
//! Invariants of `Hull`:
//! - Every vertex is an input point (by value).
//! - Counter-clockwise with the y axis up, starting at the lexicographically
//!   smallest vertex; implicitly closed, no repeated vertex.
//! - No right turn between consecutive edges; strictly convex under
//!   `CollinearPolicy::Exclude`.

use super::orientation::{cross, dist2, dot, orientation, Orientation};
use super::types::{Coord, Point};

/// Ordered convex hull of a point set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hull<T: Coord> {
    vertices: Vec<Point<T>>,
}

/// Advisory degeneracy of a hull. Never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Degeneracy {
    /// All input points coincide.
    SinglePoint,
    /// All input points lie on one line; the hull is a segment.
    Collinear,
}

impl<T: Coord> Hull<T> {
    /// Wrap vertices that already satisfy the hull invariants.
    #[inline]
    pub(crate) fn from_vertices(vertices: Vec<Point<T>>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point<T>> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Closed edge iteration `(v0, v1), …, (v_{h-1}, v0)`.
    ///
    /// A segment hull yields both directions; a single point yields nothing.
    pub fn edges(&self) -> impl Iterator<Item = (&Point<T>, &Point<T>)> + '_ {
        let h = self.vertices.len();
        let count = if h < 2 { 0 } else { h };
        (0..count).map(move |k| (&self.vertices[k], &self.vertices[(k + 1) % h]))
    }

    /// `None` for a proper polygon (three or more non-collinear vertices).
    pub fn degeneracy(&self) -> Option<Degeneracy> {
        match self.vertices.len() {
            0 | 1 => Some(Degeneracy::SinglePoint),
            2 => Some(Degeneracy::Collinear),
            _ => {
                let a = &self.vertices[0];
                let b = &self.vertices[1];
                if self.vertices[2..]
                    .iter()
                    .all(|c| cross(a, b, c) == T::WIDE_ZERO)
                {
                    Some(Degeneracy::Collinear)
                } else {
                    None
                }
            }
        }
    }

    /// Whether `q` lies on or inside the closed hull polygon.
    pub fn encloses(&self, q: &Point<T>) -> bool {
        match self.vertices.len() {
            0 => false,
            1 => self.vertices[0] == *q,
            _ if self.degeneracy() == Some(Degeneracy::Collinear) => {
                // Segment between the first vertex and the farthest one along the line.
                let a = &self.vertices[0];
                let b = self
                    .vertices
                    .iter()
                    .max_by_key(|v| dist2(a, *v))
                    .unwrap_or(a);
                cross(a, b, q) == T::WIDE_ZERO
                    && dot(a, b, q) >= T::WIDE_ZERO
                    && dot(b, a, q) >= T::WIDE_ZERO
            }
            _ => self
                .edges()
                .all(|(a, b)| orientation(a, b, q) != Orientation::LeftTurn),
        }
    }

    /// No consecutive triple turns clockwise (y axis up).
    pub fn is_convex(&self) -> bool {
        let h = self.vertices.len();
        if h < 3 {
            return true;
        }
        (0..h).all(|k| {
            let a = &self.vertices[k];
            let b = &self.vertices[(k + 1) % h];
            let c = &self.vertices[(k + 2) % h];
            cross(a, b, c) >= T::WIDE_ZERO
        })
    }

    /// Twice the signed polygon area (shoelace), exact.
    ///
    /// Positive for a proper counter-clockwise hull, zero when degenerate.
    pub fn twice_area(&self) -> T::Wide {
        let Some(origin) = self.vertices.first() else {
            return T::WIDE_ZERO;
        };
        self.vertices
            .windows(2)
            .skip(1)
            .fold(T::WIDE_ZERO, |acc, w| acc + cross(origin, &w[0], &w[1]))
    }
}

/// Which part of a construction produced a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepPhase {
    /// Graham scan, chain swept in ascending sort order.
    Upper,
    /// Graham scan, chain swept in descending sort order (shown after the upper one).
    Lower,
    /// Jarvis march, hull accumulated so far.
    Wrap,
}

impl StepPhase {
    pub fn name(self) -> &'static str {
        match self {
            StepPhase::Upper => "upper",
            StepPhase::Lower => "lower",
            StepPhase::Wrap => "wrap",
        }
    }
}

/// Snapshot of a hull under construction. Purely informational.
///
/// The snapshot is `head` followed by `tail`. Builders lend their working
/// buffers directly, so observing a step costs nothing until it is copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullStep<'a, T: Coord> {
    pub phase: StepPhase,
    /// Position in the emitted sequence, starting at 0.
    pub index: usize,
    /// Upper chain (Graham) or the wrapped hull so far (Jarvis).
    pub head: &'a [Point<T>],
    /// Lower chain during `StepPhase::Lower`, empty otherwise.
    pub tail: &'a [Point<T>],
}

impl<'a, T: Coord> HullStep<'a, T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.tail.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Point<T>> + 'a {
        self.head.iter().chain(self.tail.iter())
    }

    /// Detach the snapshot from the builder's buffers.
    pub fn to_vec(&self) -> Vec<Point<T>> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(self.head);
        out.extend_from_slice(self.tail);
        out
    }
}
