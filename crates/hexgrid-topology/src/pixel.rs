//! Pointy-top layout transforms between pixels and hexes.
//!
//! A hex of `size` (centre-to-corner distance) at axial `(q, r)` has its
//! centre at `x = size * sqrt(3) * (q + r / 2)`, `y = size * 3/2 * r`. The
//! forward transform is exact; the inverse rounds through [`crate::cube::cube_round`].

use crate::cube::{axial_round, axial_to_cube, cube_to_axial, AxialCoord, CubeCoord};
use crate::error::{Error, Result};

pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for PixelPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// The hex containing `p`.
///
/// Fails with `InvalidArgument` unless `size` is finite and positive.
pub fn pixel_to_axial(p: PixelPoint, size: f64) -> Result<AxialCoord> {
    if !(size.is_finite() && size > 0.0) {
        return Err(Error::invalid(format!(
            "hex size must be finite and positive, got {size}"
        )));
    }
    let q = (p.x * SQRT_3 / 3.0 - p.y / 3.0) / size;
    let r = (2.0 * p.y / 3.0) / size;
    Ok(axial_round(q, r))
}

pub fn pixel_to_cube(p: PixelPoint, size: f64) -> Result<CubeCoord> {
    pixel_to_axial(p, size).map(axial_to_cube)
}

/// Centre of the hex `h`.
pub fn axial_to_pixel(h: AxialCoord, size: f64) -> PixelPoint {
    let (q, r) = (h.q as f64, h.r as f64);
    PixelPoint {
        x: size * SQRT_3 * (q + r / 2.0),
        y: size * 1.5 * r,
    }
}

pub fn cube_to_pixel(c: CubeCoord, size: f64) -> PixelPoint {
    axial_to_pixel(cube_to_axial(c), size)
}

/// Estimate a hex size from the spacing of hex centres.
///
/// Returns the smallest distance between any two points scaled by `factor`.
/// Fails with `DegenerateInput` for fewer than two points or when the
/// closest points coincide.
pub fn estimate_hex_size(points: &[PixelPoint], factor: f64) -> Result<f64> {
    if points.len() < 2 {
        return Err(Error::degenerate(format!(
            "need at least 2 points to estimate a hex size, got {}",
            points.len()
        )));
    }

    let min = points
        .iter()
        .enumerate()
        .flat_map(|(i, a)| points[i + 1..].iter().map(move |b| a.distance(b)))
        .fold(f64::INFINITY, f64::min);

    let size = min * factor;
    if !(size.is_finite() && size > 0.0) {
        return Err(Error::degenerate(format!(
            "estimated hex size {size} is not positive (closest points {min} apart)"
        )));
    }
    Ok(size)
}

/// Area of a pointy-top hexagon whose flat sides are `width` apart.
pub fn hexagon_area(width: f64) -> f64 {
    3.0 * width * width / (2.0 * SQRT_3)
}
