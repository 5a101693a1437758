//! Planar projection and deterministic orderings of hex collections.
//!
//! Hex sets are unordered; anything that needs a reproducible sequence
//! (drawing, listing, diffing) goes through one of the orderings here. All
//! sorts are stable, so equal keys keep their input order.

use std::cmp::Ordering;

use crate::cube::CubeCoord;
use crate::neighbors::distance_from_centre;
use crate::pixel::SQRT_3;

/// Planar radius at which neighbouring hexes are one unit apart vertically.
pub const DEFAULT_RADIUS: f64 = 2.0 / 3.0;

/// Project a hex onto the plane for a pointy-top layout.
///
/// `x` grows eastwards and `y` grows northwards, so increasing `z` moves
/// down the page.
pub fn planar_position(c: CubeCoord, radius: f64) -> (f64, f64) {
    let x = SQRT_3 / 2.0 * radius * (c.x() - c.y()) as f64;
    let y = 1.5 * radius * (-c.z()) as f64;
    (x, y)
}

pub fn planar_position_default(c: CubeCoord) -> (f64, f64) {
    planar_position(c, DEFAULT_RADIUS)
}

/// Signed angle from the downward vertical through the origin to `c`,
/// measured clockwise, in `(-pi, pi]`.
///
/// Only meant as a sort key.
pub fn clockwise_centre_angle(c: CubeCoord) -> f64 {
    let across = SQRT_3 / 2.0 * DEFAULT_RADIUS * (c.y() - c.x()) as f64;
    let down = 1.5 * DEFAULT_RADIUS * c.z() as f64;
    across.atan2(down)
}

/// Left to right, then bottom to top, by planar position.
pub fn planar_order<I>(coords: I) -> Vec<CubeCoord>
where
    I: IntoIterator<Item = CubeCoord>,
{
    let mut out: Vec<_> = coords.into_iter().collect();
    out.sort_by(|a, b| {
        let (ax, ay) = planar_position_default(*a);
        let (bx, by) = planar_position_default(*b);
        ax.total_cmp(&bx).then(ay.total_cmp(&by))
    });
    out
}

/// Outermost ring first, each ring in decreasing clockwise angle.
pub fn spiral_order<I>(coords: I) -> Vec<CubeCoord>
where
    I: IntoIterator<Item = CubeCoord>,
{
    let mut out: Vec<_> = coords.into_iter().collect();
    out.sort_by(|a, b| spiral_key_cmp(b, a));
    out
}

fn spiral_key_cmp(a: &CubeCoord, b: &CubeCoord) -> Ordering {
    distance_from_centre(*a)
        .cmp(&distance_from_centre(*b))
        .then(clockwise_centre_angle(*a).total_cmp(&clockwise_centre_angle(*b)))
}

/// Reading order: top row first (`z` ascending), then by `x`.
pub fn rows_order<I>(coords: I) -> Vec<CubeCoord>
where
    I: IntoIterator<Item = CubeCoord>,
{
    let mut out: Vec<_> = coords.into_iter().collect();
    out.sort_by_key(|c| (c.z(), c.x()));
    out
}
