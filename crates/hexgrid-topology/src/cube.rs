//! Cube and axial hexagonal coordinates.
//!
//! Cube coordinates use three axes (x, z, y) constrained to the plane
//! x + y + z = 0. Axial coordinates keep two of them, q = x and r = z, with
//! the third recovered as y = -q - r. Components are listed in (x, z, y)
//! order throughout the crate.

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{Error, Result};

/// A hex in cube coordinates.
///
/// Always satisfies `x + y + z == 0`. The derived `Ord` is lexicographic on
/// `(x, z, y)` and only exists so that edges and triples have a canonical
/// form; use [`crate::ordering`] for meaningful orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedCube"))]
pub struct CubeCoord {
    x: i64,
    z: i64,
    y: i64,
}

impl CubeCoord {
    /// Origin of the grid.
    pub const ORIGIN: Self = Self { x: 0, z: 0, y: 0 };

    /// Create a coordinate, checking the zero-sum constraint.
    pub fn new(x: i64, z: i64, y: i64) -> Result<Self> {
        // widened so that valid extremes such as (MAX, MIN, 1) are accepted
        if i128::from(x) + i128::from(y) + i128::from(z) != 0 {
            return Err(Error::invalid(format!(
                "cube coordinate ({x}, {z}, {y}) does not sum to zero"
            )));
        }
        Ok(Self { x, z, y })
    }

    /// Create a coordinate from two axes, deriving `y = -x - z`.
    pub const fn from_xz(x: i64, z: i64) -> Self {
        Self { x, z, y: -x - z }
    }

    pub const fn x(&self) -> i64 {
        self.x
    }

    pub const fn z(&self) -> i64 {
        self.z
    }

    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Components as an `(x, z, y)` tuple.
    pub const fn to_tuple(self) -> (i64, i64, i64) {
        (self.x, self.z, self.y)
    }
}

/// Wire form of [`CubeCoord`], checked on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedCube {
    x: i64,
    z: i64,
    y: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedCube> for CubeCoord {
    type Error = Error;

    fn try_from(c: UncheckedCube) -> Result<Self> {
        Self::new(c.x, c.z, c.y)
    }
}

impl Add for CubeCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            z: self.z + other.z,
            y: self.y + other.y,
        }
    }
}

impl Sub for CubeCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            z: self.z - other.z,
            y: self.y - other.y,
        }
    }
}

impl Neg for CubeCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            z: -self.z,
            y: -self.y,
        }
    }
}

impl Mul<i64> for CubeCoord {
    type Output = Self;

    #[inline]
    fn mul(self, k: i64) -> Self {
        Self {
            x: self.x * k,
            z: self.z * k,
            y: self.y * k,
        }
    }
}

impl std::fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.z, self.y)
    }
}

/// Component-wise sum of two coordinates.
pub fn add(a: CubeCoord, b: CubeCoord) -> CubeCoord {
    a + b
}

/// Component-wise multiplication by `k`.
pub fn scale(c: CubeCoord, k: i64) -> CubeCoord {
    c * k
}

/// A hex in axial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialCoord {
    pub q: i64,
    pub r: i64,
}

impl AxialCoord {
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }
}

impl From<CubeCoord> for AxialCoord {
    fn from(c: CubeCoord) -> Self {
        cube_to_axial(c)
    }
}

impl From<AxialCoord> for CubeCoord {
    fn from(h: AxialCoord) -> Self {
        axial_to_cube(h)
    }
}

pub const fn cube_to_axial(c: CubeCoord) -> AxialCoord {
    AxialCoord { q: c.x, r: c.z }
}

pub const fn axial_to_cube(h: AxialCoord) -> CubeCoord {
    CubeCoord::from_xz(h.q, h.r)
}

/// Largest component magnitude [`cube_round`] produces.
///
/// Half of `i64::MAX`, so the recomputed axis never overflows.
pub const ROUND_LIMIT: i64 = i64::MAX / 2;

/// Round fractional cube coordinates to the nearest hex.
///
/// Each axis is rounded on its own, then the axis with the largest rounding
/// residual is recomputed from the other two. Ties go to x first, then y,
/// then z; changing that order changes results on half-integer boundaries.
///
/// The two kept axes are clamped to `±ROUND_LIMIT` (NaN becomes 0) and the
/// third is derived in integers, so the result always sums to zero.
pub fn cube_round(x: f64, z: f64, y: f64) -> CubeCoord {
    let (rx, rz, ry) = (x.round(), z.round(), y.round());

    let x_diff = (rx - x).abs();
    let z_diff = (rz - z).abs();
    let y_diff = (ry - y).abs();

    let clamp = |v: f64| (v as i64).clamp(-ROUND_LIMIT, ROUND_LIMIT);
    if x_diff > y_diff && x_diff > z_diff {
        let (z, y) = (clamp(rz), clamp(ry));
        CubeCoord { x: -y - z, z, y }
    } else if y_diff > z_diff {
        let (x, z) = (clamp(rx), clamp(rz));
        CubeCoord { x, z, y: -x - z }
    } else {
        let (x, y) = (clamp(rx), clamp(ry));
        CubeCoord { x, z: -x - y, y }
    }
}

/// Round fractional axial coordinates through [`cube_round`].
pub fn axial_round(q: f64, r: f64) -> AxialCoord {
    cube_to_axial(cube_round(q, r, -q - r))
}

/// The six unit steps, in clockwise order as drawn by
/// [`crate::ordering::planar_position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl Direction {
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::NorthEast,
    ];

    /// Unit offset of this direction.
    pub const fn offset(self) -> CubeCoord {
        match self {
            Self::East => CubeCoord::from_xz(1, 0),
            Self::SouthEast => CubeCoord::from_xz(0, 1),
            Self::SouthWest => CubeCoord::from_xz(-1, 1),
            Self::West => CubeCoord::from_xz(-1, 0),
            Self::NorthWest => CubeCoord::from_xz(0, -1),
            Self::NorthEast => CubeCoord::from_xz(1, -1),
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    pub const fn rotate_cw(self) -> Self {
        Self::ALL[(self.index() + 1) % 6]
    }

    pub const fn rotate_ccw(self) -> Self {
        Self::ALL[(self.index() + 5) % 6]
    }

    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }
}

impl TryFrom<CubeCoord> for Direction {
    type Error = Error;

    fn try_from(offset: CubeCoord) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.offset() == offset)
            .ok_or_else(|| Error::invalid(format!("{offset} is not a unit direction")))
    }
}

/// One of the two sets of three directions spaced 120 degrees apart.
///
/// The edges towards a flow's three neighbours touch each of the six
/// vertices of a hex exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Clockwise,
    CounterClockwise,
}

impl Flow {
    pub const fn directions(self) -> [Direction; 3] {
        match self {
            Self::Clockwise => [Direction::NorthEast, Direction::SouthEast, Direction::West],
            Self::CounterClockwise => [Direction::East, Direction::SouthWest, Direction::NorthWest],
        }
    }
}
