//! Hexgrid Maps
//!
//! The boundary between the grid core and the tools around it. Image
//! detectors hand in contour centroids and areas, renderers take back
//! hexagon patches.
//!
//! # Building a map
//!
//! - [`HexMap::board`]: a full hexagonal board of a given side length
//! - [`HexMap::from_centroids`]: hex centres detected in an image
//! - [`HexMap::from_contours`]: detected contours, filtered by area first
//!
//! # Laying it out
//!
//! [`HexMap::patches`] lists one patch per land hex and, optionally, one
//! per surrounding sea hex, in planar order so output is reproducible.

mod config;
mod contour;
mod error;
mod map;

pub use config::MapConfig;
pub use contour::{contour_area_window, filter_contours, AreaWindow, DetectedContour};
pub use error::{Error, Result};
pub use map::{Frame, HexMap, HexPatch, Terrain};
