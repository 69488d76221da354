//! Planar convex hulls over exact integer coordinates.
//!
//! Two independent builders share one orientation predicate:
//! - Graham scan (sort + two monotone sweeps), O(n log n).
//! - Jarvis march (gift wrapping), O(n·h) with h the hull size.
//!
//! They exist side by side so each can cross-check the other.
//!
//! API Policy
//! - Prefer `api` or `prelude` imports from callers; module paths may move.
//! - Builders are pure: no I/O, no global state, no logging. Intermediate
//!   states are only exposed through the `on_step` callback.

pub mod api;
pub mod plane;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use plane::{Coord, Hull, HullCfg, HullError, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::plane::rand::{draw_points, Box2, PointCloudCfg, PointCount, ReplayToken};
    pub use crate::plane::{
        graham_scan_hull, graham_scan_hull_with, jarvis_march_hull, jarvis_march_hull_with,
        orientation, CollinearPolicy, Coord, Degeneracy, Hull, HullCfg, HullError, HullStep,
        Orientation, Point, StepPhase,
    };
    pub use nalgebra::Point2;
}
