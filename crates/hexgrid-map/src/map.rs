//! Land maps and their sea margins.

use hexgrid_topology::{
    estimate_hex_size, neighbors, neighbors_from_centre, pixel_to_cube, planar_order,
    planar_position, CubeCoord, HexSet, PixelPoint,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::MapConfig;
use crate::contour::{contour_area_window, filter_contours, DetectedContour};
use crate::error::{Error, Result};

/// Pixel dimensions of the image detections came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Shift an image pixel so the image centre becomes the origin.
    pub fn centred(&self, p: PixelPoint) -> PixelPoint {
        PixelPoint::new(p.x - self.width / 2.0, p.y - self.height / 2.0)
    }
}

/// What a patch depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Land,
    Sea,
}

/// One hexagon for a renderer to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexPatch {
    pub coord: CubeCoord,
    /// Planar centre of the hexagon.
    pub centre: (f64, f64),
    /// Centre-to-corner radius of the drawn hexagon.
    pub radius: f64,
    pub terrain: Terrain,
}

/// A set of land hexes.
///
/// The sea is every hex adjacent to land that is not land itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HexMap {
    land: HexSet,
    hex_size: Option<f64>,
}

impl HexMap {
    /// A full hexagonal board with `size` hexes along each side.
    ///
    /// Sizes below 2 are rejected. The origin is added to the rings around
    /// it, since `neighbors_from_centre` leaves the centre hex out.
    pub fn board(size: u64) -> Result<Self> {
        if size <= 1 {
            return Err(Error::invalid_argument(format!(
                "board size must be greater than 1, got {size}"
            )));
        }

        let mut land = neighbors_from_centre(size - 1);
        land.insert(CubeCoord::ORIGIN);
        debug!(size, hexes = land.len(), "built board");
        Ok(Self {
            land,
            hex_size: None,
        })
    }

    /// Map hex centroids found in an image onto the grid.
    ///
    /// Exact duplicates (nested contours of one hex) count once. The hex
    /// size comes from the closest pair of remaining centroids, scaled by
    /// `config.size_factor`, and the image centre becomes the origin.
    pub fn from_centroids(
        centroids: &[PixelPoint],
        frame: Frame,
        config: &MapConfig,
    ) -> Result<Self> {
        config.validate()?;
        let distinct: Vec<PixelPoint> = centroids
            .iter()
            .copied()
            .unique_by(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect();
        if distinct.len() < centroids.len() {
            debug!(
                centroids = centroids.len(),
                distinct = distinct.len(),
                "dropped duplicate centroids"
            );
        }

        let size = estimate_hex_size(&distinct, config.size_factor)?;
        let land: HexSet = distinct
            .iter()
            .map(|p| pixel_to_cube(frame.centred(*p), size))
            .collect::<hexgrid_topology::Result<_>>()?;

        if land.len() < distinct.len() {
            warn!(
                centroids = distinct.len(),
                hexes = land.len(),
                "several centroids fell into the same hex"
            );
        }
        debug!(centroids = distinct.len(), hexes = land.len(), size, "mapped centroids");
        Ok(Self {
            land,
            hex_size: Some(size),
        })
    }

    /// Map detected contours of a board `side_length` hexes across.
    ///
    /// Contours whose area does not fit a hex of that board are dropped
    /// before mapping.
    pub fn from_contours<I>(
        contours: I,
        frame: Frame,
        side_length: u64,
        config: &MapConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = DetectedContour>,
    {
        let window = contour_area_window(frame.width, side_length, config)?;
        let centroids: Vec<_> = filter_contours(contours, &window)
            .into_iter()
            .map(|c| c.centroid)
            .collect();
        Self::from_centroids(&centroids, frame, config)
    }

    pub fn land(&self) -> &HexSet {
        &self.land
    }

    /// Hexes next to land that are not land.
    pub fn sea(&self) -> HexSet {
        self.land
            .iter()
            .flat_map(|h| neighbors(*h, 1))
            .filter(|n| !self.land.contains(n))
            .collect()
    }

    pub fn contains(&self, c: CubeCoord) -> bool {
        self.land.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.land.len()
    }

    pub fn is_empty(&self) -> bool {
        self.land.is_empty()
    }

    /// Pixel size of a hex, for maps built from an image.
    pub fn hex_size(&self) -> Option<f64> {
        self.hex_size
    }

    /// Patches for every land hex, then every sea hex, each group in
    /// planar order.
    pub fn patches(&self, config: &MapConfig) -> Result<Vec<HexPatch>> {
        config.validate()?;
        let radius = config.patch_radius();
        let patch = |coord: CubeCoord, terrain: Terrain| HexPatch {
            coord,
            centre: planar_position(coord, config.layout_radius),
            radius,
            terrain,
        };

        let mut out: Vec<_> = planar_order(self.land.iter().copied())
            .into_iter()
            .map(|c| patch(c, Terrain::Land))
            .collect();
        if config.include_sea {
            out.extend(planar_order(self.sea()).into_iter().map(|c| patch(c, Terrain::Sea)));
        }
        trace!(patches = out.len(), "laid out map");
        Ok(out)
    }
}

impl FromIterator<CubeCoord> for HexMap {
    fn from_iter<T: IntoIterator<Item = CubeCoord>>(iter: T) -> Self {
        Self {
            land: iter.into_iter().collect(),
            hex_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexgrid_topology::{cube_to_pixel, disk, distance_from_centre, hexagon_area, Direction};

    fn c(x: i64, z: i64) -> CubeCoord {
        CubeCoord::from_xz(x, z)
    }

    #[test]
    fn board_sizes() {
        assert_eq!(HexMap::board(2).unwrap().len(), 7);
        assert_eq!(HexMap::board(3).unwrap().len(), 19);
        assert_eq!(HexMap::board(8).unwrap().land(), &disk(CubeCoord::ORIGIN, 7));
    }

    #[test]
    fn board_needs_size_above_one() {
        for size in [0, 1] {
            assert!(matches!(
                HexMap::board(size),
                Err(Error::Topology(hexgrid_topology::Error::InvalidArgument(_)))
            ));
        }
    }

    #[test]
    fn sea_surrounds_board() {
        let map = HexMap::board(3).unwrap();
        let sea = map.sea();
        assert_eq!(sea.len(), 18);
        assert!(sea.iter().all(|h| distance_from_centre(*h) == 3));
    }

    #[test]
    fn sea_of_single_hex() {
        let map: HexMap = [c(2, 2)].into_iter().collect();
        assert_eq!(map.sea(), neighbors(c(2, 2), 1));
        assert!(HexMap::default().sea().is_empty());
    }

    #[test]
    fn centroids_map_back_to_hexes() {
        let frame = Frame::new(400.0, 300.0);
        let expected = [c(0, 0), c(1, 0), c(0, 1), c(-1, 1), c(2, -1)];
        let size = 20.0;
        // centroids in image pixels, slightly off-centre
        let centroids: Vec<_> = expected
            .iter()
            .map(|h| {
                let p = cube_to_pixel(*h, size);
                PixelPoint::new(p.x + 200.0 + 0.5, p.y + 150.0 - 0.5)
            })
            .collect();

        // closest centres are sqrt(3) * size apart
        let config = MapConfig {
            size_factor: 1.0 / 3f64.sqrt(),
            ..Default::default()
        };
        let map = HexMap::from_centroids(&centroids, frame, &config).unwrap();
        assert_eq!(map.land(), &expected.into_iter().collect::<HexSet>());
        assert!((map.hex_size().unwrap() - size).abs() < 1e-6);
    }

    #[test]
    fn too_few_centroids() {
        let frame = Frame::new(100.0, 100.0);
        let centroids = [PixelPoint::new(1.0, 1.0)];
        let result = HexMap::from_centroids(&centroids, frame, &MapConfig::default());
        assert!(matches!(
            result,
            Err(Error::Topology(hexgrid_topology::Error::DegenerateInput(_)))
        ));
    }

    #[test]
    fn duplicate_centroids_count_once() {
        let frame = Frame::new(100.0, 100.0);
        let p = PixelPoint::new(50.0, 50.0);
        let east = PixelPoint::new(84.64, 50.0);
        let map = HexMap::from_centroids(&[p, p, east], frame, &MapConfig::default()).unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains(CubeCoord::ORIGIN));
        assert!((map.hex_size().unwrap() - 34.64 * 0.6).abs() < 1e-9);

        // only copies of a single centroid are still degenerate
        assert!(matches!(
            HexMap::from_centroids(&[p, p], frame, &MapConfig::default()),
            Err(Error::Topology(hexgrid_topology::Error::DegenerateInput(_)))
        ));
    }

    #[test]
    fn contours_are_filtered_before_mapping() {
        let frame = Frame::new(800.0, 800.0);
        let config = MapConfig::default();
        let hex_area = hexagon_area(90.0);
        let contours = [
            DetectedContour::new(PixelPoint::new(400.0, 400.0), hex_area),
            DetectedContour::new(PixelPoint::new(490.0, 400.0), hex_area),
            // speck of noise right next to the first hex
            DetectedContour::new(PixelPoint::new(401.0, 401.0), 3.0),
        ];

        let map = HexMap::from_contours(contours, frame, 4, &config).unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains(CubeCoord::ORIGIN));
        assert!((map.hex_size().unwrap() - 90.0 * 0.6).abs() < 1e-9);
    }

    #[test]
    fn patches_list_land_then_sea() {
        let map = HexMap::board(2).unwrap();
        let config = MapConfig::default();
        let patches = map.patches(&config).unwrap();
        assert_eq!(patches.len(), 7 + 12);
        assert!(patches[..7].iter().all(|p| p.terrain == Terrain::Land));
        assert!(patches[7..].iter().all(|p| p.terrain == Terrain::Sea));
        assert_eq!(patches[0].coord, Direction::West.offset());
        for p in &patches {
            assert_eq!(p.centre, planar_position(p.coord, config.layout_radius));
            assert!((p.radius - config.patch_radius()).abs() < 1e-12);
        }
    }

    #[test]
    fn patches_without_sea() {
        let map = HexMap::board(3).unwrap();
        let config = MapConfig {
            include_sea: false,
            ..Default::default()
        };
        assert_eq!(map.patches(&config).unwrap().len(), 19);
    }

    #[test]
    fn patch_coords_deserialise_on_plane() {
        let patch = |x: i64, z: i64, y: i64| {
            serde_json::json!({
                "coord": { "x": x, "z": z, "y": y },
                "centre": [0.0, 0.0],
                "radius": 0.5,
                "terrain": "sea",
            })
        };
        assert!(serde_json::from_value::<HexPatch>(patch(1, 1, 1)).is_err());

        let ok: HexPatch = serde_json::from_value(patch(1, 0, -1)).unwrap();
        assert_eq!(ok.coord, CubeCoord::from_xz(1, 0));
        assert_eq!(ok.terrain, Terrain::Sea);
    }

    #[test]
    fn patch_serialises_terrain_lowercase() {
        let map: HexMap = [CubeCoord::ORIGIN].into_iter().collect();
        let config = MapConfig {
            include_sea: false,
            ..Default::default()
        };
        let patches = map.patches(&config).unwrap();
        let json = serde_json::to_value(patches[0]).unwrap();
        assert_eq!(json["terrain"], "land");
        assert_eq!(json["coord"]["x"], 0);
    }
}
