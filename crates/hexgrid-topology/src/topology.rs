//! Edges and triples derived from adjacency.
//!
//! An edge is the boundary shared by two neighbouring hexes. A triple is the
//! three hexes meeting at one grid vertex. Every edge ends in two vertices,
//! so it borders exactly two triples, and [`triples_from_neighbours`] finds
//! the hexes that complete them. All other relationships here are built on
//! that primitive.

use std::collections::HashSet;

use itertools::Itertools;

use crate::cube::{CubeCoord, Flow};
use crate::error::{Error, Result};
use crate::neighbors::{disk, edges_on_ring, is_neighbor, neighbor, ring_from_centre};
use crate::pixel::{cube_to_pixel, PixelPoint};

/// The boundary between two neighbouring hexes.
///
/// Stored sorted, so `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[CubeCoord; 2]"))]
pub struct Edge([CubeCoord; 2]);

impl Edge {
    pub fn new(a: CubeCoord, b: CubeCoord) -> Result<Self> {
        if !is_neighbor(a, b) {
            return Err(Error::invalid(format!(
                "edge endpoints {a} and {b} are not neighbours"
            )));
        }
        Ok(Self::sorted(a, b))
    }

    fn sorted(a: CubeCoord, b: CubeCoord) -> Self {
        if a <= b {
            Self([a, b])
        } else {
            Self([b, a])
        }
    }

    pub const fn coords(&self) -> [CubeCoord; 2] {
        self.0
    }

    pub fn contains(&self, c: CubeCoord) -> bool {
        self.0.contains(&c)
    }

    /// Whether the two edges have exactly one hex in common.
    pub fn shares_one_hex(&self, other: &Self) -> bool {
        self.0.iter().filter(|c| other.contains(**c)).count() == 1
    }
}

impl TryFrom<[CubeCoord; 2]> for Edge {
    type Error = Error;

    fn try_from([a, b]: [CubeCoord; 2]) -> Result<Self> {
        Self::new(a, b)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}}}", self.0[0], self.0[1])
    }
}

/// Three pairwise neighbouring hexes, meeting at one grid vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[CubeCoord; 3]"))]
pub struct Triple([CubeCoord; 3]);

impl Triple {
    pub fn new(a: CubeCoord, b: CubeCoord, c: CubeCoord) -> Result<Self> {
        if !is_triple(a, b, c) {
            return Err(Error::invalid(format!(
                "{a}, {b} and {c} are not mutually neighbouring"
            )));
        }
        Ok(Self::sorted(a, b, c))
    }

    fn sorted(a: CubeCoord, b: CubeCoord, c: CubeCoord) -> Self {
        let mut coords = [a, b, c];
        coords.sort_unstable();
        Self(coords)
    }

    pub const fn coords(&self) -> [CubeCoord; 3] {
        self.0
    }

    pub fn contains(&self, c: CubeCoord) -> bool {
        self.0.contains(&c)
    }

    /// The three edges between members of the triple.
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.0;
        [Edge::sorted(a, b), Edge::sorted(a, c), Edge::sorted(b, c)]
    }

    /// Pixel position of the shared vertex for hexes of the given size.
    pub fn vertex(&self, size: f64) -> PixelPoint {
        let (x, y) = self.0.iter().fold((0.0, 0.0), |(x, y), c| {
            let p = cube_to_pixel(*c, size);
            (x + p.x, y + p.y)
        });
        PixelPoint::new(x / 3.0, y / 3.0)
    }
}

impl TryFrom<[CubeCoord; 3]> for Triple {
    type Error = Error;

    fn try_from([a, b, c]: [CubeCoord; 3]) -> Result<Self> {
        Self::new(a, b, c)
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.0[0], self.0[1], self.0[2])
    }
}

/// The two hexes that each form a triple with the neighbours `a` and `b`.
pub fn triples_from_neighbours(a: CubeCoord, b: CubeCoord) -> Result<(CubeCoord, CubeCoord)> {
    if !is_neighbor(a, b) {
        return Err(Error::invalid(format!("{a} and {b} are not neighbours")));
    }
    Ok(completions(a, b))
}

pub fn is_triple(a: CubeCoord, b: CubeCoord, c: CubeCoord) -> bool {
    is_neighbor(a, b) && is_neighbor(a, c) && is_neighbor(b, c)
}

/// The six triples containing `c`, one per corner of the hex.
pub fn triples(c: CubeCoord) -> HashSet<Triple> {
    triples_via(c, Flow::Clockwise)
}

/// The six triples containing `c`, found through the neighbours of `flow`.
///
/// Both flows produce the same set.
pub fn triples_via(c: CubeCoord, flow: Flow) -> HashSet<Triple> {
    flow.directions()
        .into_iter()
        .flat_map(|direction| {
            let n = neighbor(c, direction);
            let (t1, t2) = completions(c, n);
            [Triple::sorted(c, n, t1), Triple::sorted(c, n, t2)]
        })
        .collect()
}

/// The two triples on either side of `edge`.
pub fn edge_triples(edge: &Edge) -> [Triple; 2] {
    let [a, b] = edge.coords();
    let (t1, t2) = completions(a, b);
    [Triple::sorted(a, b, t1), Triple::sorted(a, b, t2)]
}

/// The four edges sharing exactly one hex with `edge`, taken from the two
/// triples that border it.
pub fn edge_neighbours(edge: &Edge) -> [Edge; 4] {
    let [a, b] = edge.coords();
    let (t1, t2) = completions(a, b);
    [
        Edge::sorted(a, t1),
        Edge::sorted(b, t1),
        Edge::sorted(a, t2),
        Edge::sorted(b, t2),
    ]
}

/// The three triples sharing exactly one edge with `triple`.
pub fn triple_neighbours(triple: &Triple) -> HashSet<Triple> {
    let [a, b, c] = triple.coords();
    [(a, b, c), (a, c, b), (b, c, a)]
        .into_iter()
        .map(|(u, v, opposite)| {
            let (t1, t2) = completions(u, v);
            let other = if t1 == opposite { t2 } else { t1 };
            Triple::sorted(u, v, other)
        })
        .collect()
}

/// Every edge between hexes of `coords`, by checking all pairs.
///
/// Quadratic in the number of hexes; prefer [`edges_from_centre`] for
/// large boards.
pub fn all_edges<'a, I>(coords: I) -> HashSet<Edge>
where
    I: IntoIterator<Item = &'a CubeCoord>,
{
    let hexes: Vec<CubeCoord> = coords.into_iter().copied().unique().collect();
    hexes
        .into_iter()
        .tuple_combinations()
        .filter(|&(a, b)| is_neighbor(a, b))
        .map(|(a, b)| Edge::sorted(a, b))
        .collect()
}

/// Every triple among hexes of `coords`, by checking all 3-combinations.
///
/// Cubic in the number of hexes; prefer [`triples_from_centre`] for large
/// boards.
pub fn all_triples<'a, I>(coords: I) -> HashSet<Triple>
where
    I: IntoIterator<Item = &'a CubeCoord>,
{
    let hexes: Vec<CubeCoord> = coords.into_iter().copied().unique().collect();
    hexes
        .into_iter()
        .tuple_combinations()
        .filter(|&(a, b, c)| is_triple(a, b, c))
        .map(|(a, b, c)| Triple::sorted(a, b, c))
        .collect()
}

/// Edges with both hexes within distance `k` of the origin.
///
/// With `exclude_outer_ring` the edges running along the ring of radius
/// `k` are left out, keeping only edges that touch the interior.
pub fn edges_from_centre(k: u64, exclude_outer_ring: bool) -> Result<HashSet<Edge>> {
    if k == 0 {
        return Ok(HashSet::new());
    }

    let hexes = disk(CubeCoord::ORIGIN, k);
    let mut edges: HashSet<Edge> = hexes
        .iter()
        .flat_map(|&c| {
            Flow::Clockwise
                .directions()
                .into_iter()
                .map(move |direction| (c, neighbor(c, direction)))
        })
        .filter(|(_, n)| hexes.contains(n))
        .map(|(c, n)| Edge::sorted(c, n))
        .collect();

    if exclude_outer_ring {
        let outer = edges_on_ring(&ring_from_centre(k)?)?;
        edges.retain(|e| !outer.contains(e));
    }
    Ok(edges)
}

/// Triples with all three hexes within distance `k` of the origin.
pub fn triples_from_centre(k: u64) -> HashSet<Triple> {
    let hexes = disk(CubeCoord::ORIGIN, k);
    hexes
        .iter()
        .flat_map(|&c| triples(c))
        .filter(|t| t.coords().iter().all(|h| hexes.contains(h)))
        .collect()
}

/// Completions of a pair already known to be adjacent.
///
/// The step `d = b - a` has exactly one zero component. Each completion
/// keeps one of the non-zero components of `d` and moves the other into the
/// zero slot.
fn completions(a: CubeCoord, b: CubeCoord) -> (CubeCoord, CubeCoord) {
    let (dx, dz, dy) = (b - a).to_tuple();
    let (first, second) = if dy == 0 {
        (CubeCoord::from_xz(dx, 0), CubeCoord::from_xz(0, dz))
    } else if dx == 0 {
        (CubeCoord::from_xz(dy, dz), CubeCoord::from_xz(dz, 0))
    } else {
        (CubeCoord::from_xz(dx, dy), CubeCoord::from_xz(0, dx))
    };
    (a + first, a + second)
}
