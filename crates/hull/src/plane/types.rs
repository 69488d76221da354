//! Basic planar types: coordinates, points, builder configuration, errors.
//!
//! - `Coord`: exact coordinate types and the wider type their products live in.
//! - `HullCfg`: centralizes the collinear-point policy shared by both builders.
//! - `HullError`: the only failures a builder reports.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Mul, Sub};

use nalgebra::{Point2, Scalar};
use thiserror::Error;

/// A point in the plane. Equality is exact coordinate equality.
pub type Point<T> = Point2<T>;

/// Exact, totally ordered coordinate type.
///
/// `Wide` must hold `(a - b) * (c - d) ± (e - f) * (g - h)` for any coordinates
/// without overflow. A plain doubling of the width is not enough: differences
/// of two n-bit values take n+1 bits, so 32-bit inputs go to `i128`.
pub trait Coord: Scalar + Copy + Ord + Hash + Debug {
    type Wide: Copy
        + Ord
        + Debug
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>;

    /// Additive identity of `Wide`.
    const WIDE_ZERO: Self::Wide;

    fn widen(self) -> Self::Wide;
}

macro_rules! impl_coord {
    ($($t:ty => $w:ty),* $(,)?) => {
        $(
            impl Coord for $t {
                type Wide = $w;
                const WIDE_ZERO: $w = 0;
                #[inline]
                fn widen(self) -> $w {
                    <$w>::from(self)
                }
            }
        )*
    };
}

impl_coord! {
    i8 => i32,
    u8 => i32,
    i16 => i64,
    u16 => i64,
    i32 => i128,
    u32 => i128,
}

/// What to do with input points lying on a hull edge between two vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollinearPolicy {
    /// Drop them: collinearity counts as "not a left turn". Reference behaviour.
    #[default]
    Exclude,
    /// Keep them as hull vertices, ordered along their edge.
    Include,
}

/// Builder configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HullCfg {
    pub collinear: CollinearPolicy,
}

impl HullCfg {
    /// Boundary-inclusive configuration.
    #[inline]
    pub fn including_collinear() -> Self {
        Self {
            collinear: CollinearPolicy::Include,
        }
    }
}

/// Errors reported by the hull builders.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HullError {
    #[error("convex hull needs at least {required} point(s), got {got}")]
    InvalidInputSize { got: usize, required: usize },
    #[error("gift wrapping did not return to its start point after {steps} steps")]
    WrapDidNotClose { steps: usize },
}

/// Reject inputs that are too small for any hull.
#[inline]
pub(crate) fn check_size(got: usize, required: usize) -> Result<(), HullError> {
    if got < required {
        return Err(HullError::InvalidInputSize { got, required });
    }
    Ok(())
}
