//! Map building and layout configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for turning detections into maps and maps into patches.
///
/// Missing fields fall back to [`MapConfig::default`] when deserialised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Hex size as a fraction of the closest centroid spacing.
    pub size_factor: f64,
    /// Smallest accepted contour, as a fraction of the full hex width.
    pub min_area_ratio: f64,
    /// Planar radius used to place patch centres.
    pub layout_radius: f64,
    /// Gap left between neighbouring patches.
    pub patch_margin: f64,
    /// Whether layouts include the sea ring around the land.
    pub include_sea: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            size_factor: 0.6,
            min_area_ratio: 0.6,
            layout_radius: hexgrid_topology::DEFAULT_RADIUS,
            patch_margin: 0.1,
            include_sea: true,
        }
    }
}

impl MapConfig {
    /// Check every field is in range.
    pub fn validate(&self) -> Result<()> {
        if !(self.size_factor.is_finite() && self.size_factor > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "size_factor must be positive, got {}",
                self.size_factor
            )));
        }
        if !(self.min_area_ratio > 0.0 && self.min_area_ratio <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "min_area_ratio must be in (0, 1], got {}",
                self.min_area_ratio
            )));
        }
        if !(self.layout_radius.is_finite() && self.layout_radius > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "layout_radius must be positive, got {}",
                self.layout_radius
            )));
        }
        if !(self.patch_margin >= 0.0 && self.patch_margin < self.layout_radius) {
            return Err(Error::InvalidConfig(format!(
                "patch_margin must be in [0, {}), got {}",
                self.layout_radius, self.patch_margin
            )));
        }
        Ok(())
    }

    /// Radius of a drawn patch.
    pub fn patch_radius(&self) -> f64 {
        self.layout_radius - self.patch_margin
    }
}
