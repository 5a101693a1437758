//! Adjacency on the hex grid: distance, neighbours, disks and rings.
//!
//! A ring of radius k > 0 holds 6k hexes; the disk of radius k holds
//! 1 + 3k(k + 1) hexes, the centre included.

use std::collections::HashSet;

use crate::cube::{CubeCoord, Direction};
use crate::error::{Error, Result};
use crate::topology::Edge;

/// An unordered set of hexes. Iteration order carries no meaning.
pub type HexSet = HashSet<CubeCoord>;

/// Number of hexes on the ring of radius `k`.
#[inline]
pub const fn ring_len(k: u64) -> u64 {
    if k == 0 {
        1
    } else {
        6 * k
    }
}

/// Number of hexes within distance `k`, centre included.
#[inline]
pub const fn disk_len(k: u64) -> u64 {
    1 + 3 * k * (k + 1)
}

/// Grid distance: the fewest single steps from `a` to `b`.
pub fn distance(a: CubeCoord, b: CubeCoord) -> u64 {
    let d = a - b;
    (d.x().unsigned_abs() + d.z().unsigned_abs() + d.y().unsigned_abs()) / 2
}

pub fn distance_from_centre(c: CubeCoord) -> u64 {
    distance(c, CubeCoord::ORIGIN)
}

pub fn is_neighbor(a: CubeCoord, b: CubeCoord) -> bool {
    distance(a, b) == 1
}

pub fn neighbor(c: CubeCoord, direction: Direction) -> CubeCoord {
    c + direction.offset()
}

/// All hexes within distance `k` of `c`, excluding `c` itself.
///
/// For `k == 1` these are the six adjacent hexes. The result always has
/// `3k² + 3k` members.
pub fn neighbors(c: CubeCoord, k: u64) -> HexSet {
    match k {
        0 => HexSet::new(),
        1 => Direction::ALL.iter().map(|&d| neighbor(c, d)).collect(),
        _ => {
            let mut set = disk(c, k);
            set.remove(&c);
            set
        }
    }
}

pub fn neighbors_from_centre(k: u64) -> HexSet {
    neighbors(CubeCoord::ORIGIN, k)
}

/// All hexes within distance `k` of `c`, `c` included.
pub fn disk(c: CubeCoord, k: u64) -> HexSet {
    let k = k as i64;
    let mut set = HexSet::with_capacity(disk_len(k as u64) as usize);
    for dx in -k..=k {
        for dy in (-k).max(-dx - k)..=k.min(k - dx) {
            set.insert(CubeCoord::from_xz(c.x() + dx, c.z() - dx - dy));
        }
    }
    set
}

/// The hexes at exactly distance `k` from `centre`, walked clockwise.
///
/// The walk starts `k` steps north-west of `centre` and moves `k` steps in
/// each of [`Direction::ALL`] in turn, so it visits `6k` distinct hexes.
/// A radius of zero is rejected.
pub fn ring(centre: CubeCoord, k: u64) -> Result<Vec<CubeCoord>> {
    if k == 0 {
        return Err(Error::invalid("ring radius must be at least 1"));
    }

    let mut out = Vec::with_capacity(ring_len(k) as usize);
    let mut current = centre + Direction::NorthWest.offset() * k as i64;
    for direction in Direction::ALL {
        for _ in 0..k {
            out.push(current);
            current = neighbor(current, direction);
        }
    }
    Ok(out)
}

pub fn ring_from_centre(k: u64) -> Result<Vec<CubeCoord>> {
    ring(CubeCoord::ORIGIN, k)
}

/// Edges between consecutive hexes of a ring, closing the loop from the
/// last hex back to the first.
pub fn edges_on_ring(ring: &[CubeCoord]) -> Result<HashSet<Edge>> {
    let Some(&last) = ring.last() else {
        return Ok(HashSet::new());
    };
    std::iter::once(last)
        .chain(ring.iter().copied())
        .zip(ring.iter().copied())
        .map(|(a, b)| Edge::new(a, b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i64, z: i64) -> CubeCoord {
        CubeCoord::from_xz(x, z)
    }

    #[test]
    fn size_formulas() {
        assert_eq!(ring_len(0), 1);
        assert_eq!(ring_len(1), 6);
        assert_eq!(ring_len(10), 60);
        assert_eq!(disk_len(0), 1);
        assert_eq!(disk_len(1), 7);
        assert_eq!(disk_len(2), 19);
        assert_eq!(disk_len(10), 331);
    }

    #[test]
    fn distance_to_adjacent() {
        assert_eq!(distance(CubeCoord::ORIGIN, CubeCoord::new(1, -1, 0).unwrap()), 1);
        assert!(is_neighbor(CubeCoord::ORIGIN, c(0, 1)));
        assert!(!is_neighbor(CubeCoord::ORIGIN, CubeCoord::ORIGIN));
        assert!(!is_neighbor(CubeCoord::ORIGIN, c(1, 1)));
    }

    #[test]
    fn distance_known_values() {
        assert_eq!(distance_from_centre(c(2, 0)), 2);
        assert_eq!(distance_from_centre(c(1, 1)), 2);
        assert_eq!(distance(c(-3, 5), c(2, -1)), 6);
    }

    #[test]
    fn six_neighbors() {
        let n = neighbors(c(4, -7), 1);
        assert_eq!(n.len(), 6);
        for h in &n {
            assert_eq!(distance(*h, c(4, -7)), 1);
        }
    }

    #[test]
    fn neighbors_from_centre_two_excludes_centre() {
        let n = neighbors_from_centre(2);
        assert_eq!(n.len(), 3 * 2 * 2 + 3 * 2);
        assert!(!n.contains(&CubeCoord::ORIGIN));
        assert!(n.iter().all(|h| (1..=2).contains(&distance_from_centre(*h))));
    }

    #[test]
    fn neighbors_zero_is_empty() {
        assert!(neighbors(c(1, 1), 0).is_empty());
    }

    #[test]
    fn disk_includes_centre() {
        let d = disk(c(1, -2), 2);
        assert_eq!(d.len(), 19);
        assert!(d.contains(&c(1, -2)));
        assert_eq!(disk(c(1, -2), 0), HexSet::from([c(1, -2)]));
    }

    #[test]
    fn ring_zero_is_invalid() {
        assert!(matches!(ring(CubeCoord::ORIGIN, 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn ring_one_matches_neighbors() {
        let r = ring_from_centre(1).unwrap();
        assert_eq!(r.len(), 6);
        assert_eq!(r.iter().copied().collect::<HexSet>(), neighbors_from_centre(1));
    }

    #[test]
    fn ring_starts_north_west_and_turns_clockwise() {
        let r = ring_from_centre(1).unwrap();
        assert_eq!(
            r,
            vec![
                Direction::NorthWest.offset(),
                Direction::NorthEast.offset(),
                Direction::East.offset(),
                Direction::SouthEast.offset(),
                Direction::SouthWest.offset(),
                Direction::West.offset(),
            ]
        );
    }

    #[test]
    fn ring_steps_are_adjacent() {
        let r = ring(c(2, 3), 4).unwrap();
        for pair in r.windows(2) {
            assert!(is_neighbor(pair[0], pair[1]));
        }
        assert!(is_neighbor(r[r.len() - 1], r[0]));
    }

    #[test]
    fn edges_on_first_ring() {
        let edges = edges_on_ring(&ring_from_centre(1).unwrap()).unwrap();
        assert_eq!(edges.len(), 6);
        for e in &edges {
            let [a, b] = e.coords();
            assert!(is_neighbor(a, b));
        }
    }

    #[test]
    fn edges_on_ring_rejects_gaps() {
        assert!(matches!(
            edges_on_ring(&[CubeCoord::ORIGIN, c(2, 0)]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(edges_on_ring(&[]).unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn distance_is_metric(
            ax in -50i64..50, az in -50i64..50,
            bx in -50i64..50, bz in -50i64..50,
            cx in -50i64..50, cz in -50i64..50,
        ) {
            let (a, b, cc) = (c(ax, az), c(bx, bz), c(cx, cz));
            prop_assert_eq!(distance(a, a), 0);
            prop_assert_eq!(distance(a, b), distance(b, a));
            prop_assert!(distance(a, cc) <= distance(a, b) + distance(b, cc));
        }

        #[test]
        fn ring_cardinality(x in -20i64..20, z in -20i64..20, k in 1u64..12) {
            let centre = c(x, z);
            let r = ring(centre, k).unwrap();
            prop_assert_eq!(r.len() as u64, 6 * k);
            prop_assert_eq!(r.iter().collect::<HashSet<_>>().len(), r.len());
            for h in &r {
                prop_assert_eq!(distance(centre, *h), k);
                prop_assert_eq!(h.x() + h.y() + h.z(), 0);
            }
        }

        #[test]
        fn neighbors_fill_the_disk(x in -20i64..20, z in -20i64..20, k in 1u64..8) {
            let centre = c(x, z);
            let n = neighbors(centre, k);
            prop_assert_eq!(n.len() as u64, 3 * k * k + 3 * k);
            let mut rings = HexSet::new();
            for i in 1..=k {
                rings.extend(ring(centre, i).unwrap());
            }
            prop_assert_eq!(n, rings);
        }
    }
}
