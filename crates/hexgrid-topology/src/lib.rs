//! Hexgrid Topology
//!
//! Coordinates and topology for pointy-top hexagonal grids.
//!
//! # Coordinates
//!
//! Hexes are addressed in cube coordinates `(x, z, y)` on the plane
//! `x + y + z = 0`. Axial coordinates `(q, r) = (x, z)` and pixel positions
//! are only used at the boundary and are converted straight back.
//!
//! # Layers
//!
//! - [`cube`]: coordinate values, arithmetic and rounding
//! - [`pixel`]: pixel <-> hex transforms and hex size estimation
//! - [`neighbors`]: distance, neighbours, disks and rings
//! - [`topology`]: edges and triples (three hexes meeting at a vertex)
//! - [`ordering`]: planar projection and reproducible orderings
//!
//! Every function is pure. Set-valued results are unordered; route them
//! through [`ordering`] when a stable sequence is needed.

pub mod cube;
pub mod error;
pub mod neighbors;
pub mod ordering;
pub mod pixel;
pub mod topology;

pub use cube::{
    add, axial_round, axial_to_cube, cube_round, cube_to_axial, scale, AxialCoord, CubeCoord,
    Direction, Flow, ROUND_LIMIT,
};
pub use error::{Error, Result};
pub use neighbors::{
    disk, disk_len, distance, distance_from_centre, edges_on_ring, is_neighbor, neighbor,
    neighbors, neighbors_from_centre, ring, ring_from_centre, ring_len, HexSet,
};
pub use ordering::{
    clockwise_centre_angle, planar_order, planar_position, planar_position_default, rows_order,
    spiral_order, DEFAULT_RADIUS,
};
pub use pixel::{
    axial_to_pixel, cube_to_pixel, estimate_hex_size, hexagon_area, pixel_to_axial,
    pixel_to_cube, PixelPoint,
};
pub use topology::{
    all_edges, all_triples, edge_neighbours, edge_triples, edges_from_centre, is_triple,
    triple_neighbours, triples, triples_from_centre, triples_from_neighbours, triples_via, Edge,
    Triple,
};

/// Hexes adjacent to any hex.
pub const NEIGHBORS_PER_HEX: usize = 6;

/// Triples (grid vertices) around any hex.
pub const TRIPLES_PER_HEX: usize = 6;

/// Edges touching an edge at one of its hexes.
pub const EDGE_NEIGHBOURS: usize = 4;

/// Triples bordering any edge.
pub const TRIPLES_PER_EDGE: usize = 2;

// Each bordering triple contributes its two other edges.
const _: () = assert!(EDGE_NEIGHBOURS == TRIPLES_PER_EDGE * 2);
