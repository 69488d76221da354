//! Planar convex hulls over exact integer coordinates.
//!
//! Purpose
//! - One orientation predicate, two independent builders (Graham scan and
//!   Jarvis march) that agree on every input, and the `Hull` value they return.
//! - No epsilons: coordinates are exact integers and every product is taken in
//!   a wider integer type.
//!
//! Collinearity
//! - The predicate reports collinear triples as "not a left turn", so both
//!   builders drop points lying inside a hull edge. `CollinearPolicy::Include`
//!   puts them back, ordered along their edge.
//!
//! Small inputs
//! - n = 0 is `HullError::InvalidInputSize`, n = 1 is the point itself, n = 2
//!   is the (sorted) pair. Coincident or collinear inputs give degenerate hulls,
//!   reported by `Hull::degeneracy` and never treated as errors.

mod graham;
mod hull;
mod jarvis;
mod orientation;
pub mod rand;
mod types;
mod util;

pub use graham::{graham_scan_hull, graham_scan_hull_with};
pub use hull::{Degeneracy, Hull, HullStep, StepPhase};
pub use jarvis::{jarvis_march_hull, jarvis_march_hull_with};
pub use orientation::{cross, is_collinear, orientation, Orientation};
pub use types::{CollinearPolicy, Coord, HullCfg, HullError, Point};

#[cfg(test)]
mod tests;
