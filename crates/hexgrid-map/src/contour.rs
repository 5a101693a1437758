//! Filtering detected contours down to plausible hexes.
//!
//! Contour extraction happens outside this crate; it hands over each
//! contour's centroid and area. A board `side_length` hexes across an image
//! `width` pixels wide has hexes about `width / (2 * side_length)` across,
//! which bounds the area of a real hex from above. Contours smaller than
//! a hex shrunk by `min_area_ratio` are treated as noise.

use hexgrid_topology::{hexagon_area, PixelPoint};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MapConfig;
use crate::error::{Error, Result};

/// A closed contour found in an image, reduced to what mapping needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedContour {
    /// Centroid in image pixels.
    pub centroid: PixelPoint,
    /// Enclosed area in square pixels.
    pub area: f64,
}

impl DetectedContour {
    pub const fn new(centroid: PixelPoint, area: f64) -> Self {
        Self { centroid, area }
    }
}

/// Inclusive range of contour areas accepted as hexes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaWindow {
    pub lower: f64,
    pub upper: f64,
}

impl AreaWindow {
    pub fn contains(&self, area: f64) -> bool {
        self.lower <= area && area <= self.upper
    }
}

/// Area bounds for hexes on a board of `side_length` in an image
/// `image_width` pixels wide.
pub fn contour_area_window(
    image_width: f64,
    side_length: u64,
    config: &MapConfig,
) -> Result<AreaWindow> {
    config.validate()?;
    if side_length == 0 {
        return Err(Error::invalid_argument("side length must be at least 1"));
    }
    if !(image_width.is_finite() && image_width > 0.0) {
        return Err(Error::invalid_argument(format!(
            "image width must be positive, got {image_width}"
        )));
    }

    let hex_width = image_width / (2.0 * side_length as f64);
    Ok(AreaWindow {
        lower: hexagon_area(hex_width * config.min_area_ratio),
        upper: hexagon_area(hex_width),
    })
}

/// Keep the contours whose area falls inside `window`, in input order.
pub fn filter_contours<I>(contours: I, window: &AreaWindow) -> Vec<DetectedContour>
where
    I: IntoIterator<Item = DetectedContour>,
{
    let mut dropped = 0usize;
    let kept: Vec<_> = contours
        .into_iter()
        .filter(|c| {
            let keep = window.contains(c.area);
            dropped += usize::from(!keep);
            keep
        })
        .collect();
    debug!(
        kept = kept.len(),
        dropped,
        lower = window.lower,
        upper = window.upper,
        "filtered contours by area"
    );
    kept
}
