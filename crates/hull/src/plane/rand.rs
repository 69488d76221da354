//! Random integer point clouds (uniform box + replay tokens).
//!
//! Purpose
//! - Feed the hull builders, the CLI and the benches with reproducible inputs.
//!   The defaults mirror the classic demo: 30 points in `[-300, 300)²`.
//!
//! Model
//! - Draw the point count, then each coordinate independently and uniformly
//!   from a half-open box. Duplicates are allowed and left in place.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Half-open sampling box `[x_min, x_max) × [y_min, y_max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Box2 {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}
impl Box2 {
    /// Square box `[lo, hi)²`.
    #[inline]
    pub fn square(lo: i32, hi: i32) -> Self {
        Self {
            x_min: lo,
            x_max: hi,
            y_min: lo,
            y_max: hi,
        }
    }
    #[inline]
    pub fn contains(&self, p: &Point2<i32>) -> bool {
        (self.x_min..self.x_max).contains(&p.x) && (self.y_min..self.y_max).contains(&p.y)
    }
    /// Empty or inverted ranges collapse onto their lower bound.
    fn sample<R: Rng>(&self, rng: &mut R) -> Point2<i32> {
        let pick = |rng: &mut R, lo: i32, hi: i32| {
            if hi > lo {
                rng.gen_range(lo..hi)
            } else {
                lo
            }
        };
        let x = pick(rng, self.x_min, self.x_max);
        let y = pick(rng, self.y_min, self.y_max);
        Point2::new(x, y)
    }
}
impl Default for Box2 {
    fn default() -> Self {
        Self::square(-300, 300)
    }
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointCloudCfg {
    pub count: PointCount,
    pub bounds: Box2,
}
impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(30),
            bounds: Box2::default(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud; the same `(cfg, tok)` always yields the same points in the same order.
pub fn draw_points(cfg: PointCloudCfg, tok: ReplayToken) -> Vec<Point2<i32>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    (0..n).map(|_| cfg.bounds.sample(&mut rng)).collect()
}
