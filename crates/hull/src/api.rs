//! Curated API surface.
//!
//! Important
//! - Convenience re-exports for the CLI, benches and demos. Prefer these over
//!   deep module paths so internal moves do not ripple outwards.

// Predicate
pub use crate::plane::{cross, orientation, Orientation};
// Builders
pub use crate::plane::{
    graham_scan_hull, graham_scan_hull_with, jarvis_march_hull, jarvis_march_hull_with,
};
// Values and configuration
pub use crate::plane::{
    CollinearPolicy, Coord, Degeneracy, Hull, HullCfg, HullError, HullStep, Point, StepPhase,
};
// Random point clouds
pub use crate::plane::rand::{
    draw_points, Box2 as CloudBounds, PointCloudCfg, PointCount, ReplayToken as CloudReplay,
};

/// Which builder to run; used by callers that pick the algorithm at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algo {
    Graham,
    Jarvis,
}

impl Algo {
    pub const ALL: [Algo; 2] = [Algo::Graham, Algo::Jarvis];

    pub fn name(self) -> &'static str {
        match self {
            Algo::Graham => "graham",
            Algo::Jarvis => "jarvis",
        }
    }

    /// Parse the names accepted on the command line.
    pub fn from_name(s: &str) -> Option<Algo> {
        match s.to_ascii_lowercase().as_str() {
            "graham" | "graham-scan" | "graham_scan" => Some(Algo::Graham),
            "jarvis" | "jarvis-march" | "jarvis_march" | "gift-wrapping" => Some(Algo::Jarvis),
            _ => None,
        }
    }

    /// Run the selected builder with an observer.
    pub fn run_with<T, F>(
        self,
        points: &[Point<T>],
        cfg: HullCfg,
        on_step: F,
    ) -> Result<Hull<T>, HullError>
    where
        T: Coord,
        F: FnMut(HullStep<'_, T>),
    {
        match self {
            Algo::Graham => graham_scan_hull_with(points, cfg, on_step),
            Algo::Jarvis => jarvis_march_hull_with(points, cfg, on_step),
        }
    }

    /// Run the selected builder without observing steps.
    pub fn run<T: Coord>(self, points: &[Point<T>], cfg: HullCfg) -> Result<Hull<T>, HullError> {
        self.run_with(points, cfg, |_| {})
    }
}
