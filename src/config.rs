//! Generation configuration.
//!
//! A [`TableConfig`] fully determines the output tables: identical
//! configurations produce bit-for-bit identical tables on every platform.
//! Validation is fail-fast; nothing is computed from an invalid config.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::basics::{PI_2, PI_4};
use crate::error::GenerateError;

// ============================================================================
// Wedge
// ============================================================================

/// The angular range over which trigonometric values are actually computed.
/// All other ranges derive from it by axis swap and sign flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Wedge {
    /// 45 degrees; eight-fold reflection covers the full circle.
    #[default]
    Octant,
    /// 90 degrees; four-fold reflection covers the full circle.
    Quadrant,
}

impl Wedge {
    /// Angular extent of the wedge in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        match self {
            Wedge::Octant => PI_4,
            Wedge::Quadrant => PI_2,
        }
    }

    /// Number of reflected copies that tile the full circle.
    #[inline]
    pub fn fold(self) -> u32 {
        match self {
            Wedge::Octant => 8,
            Wedge::Quadrant => 4,
        }
    }
}

// ============================================================================
// TableConfig
// ============================================================================

/// Input to one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableConfig {
    /// Number of discrete angles sampled across the wedge (K). Slice `i`
    /// has continuous angle `i * wedge / (K - 1)`, so the last slice lands
    /// exactly on the wedge boundary.
    pub angle_count: usize,
    /// Steps per directional path (N).
    pub steps_per_path: usize,
    /// Pixels advanced per animation step.
    pub unit_distance: u32,
    /// Circle radii, in pixels.
    pub radii: Vec<u32>,
    /// Wedge over which tables are computed.
    pub wedge: Wedge,
    /// Restrict circle y coordinates to even rows (platform sprite
    /// placement constraint).
    pub even_rows: bool,
}

impl Default for TableConfig {
    /// The production configuration: 64 angles over one octant, 32 steps of
    /// 2 pixels, radii 32..224 in increments of 32.
    fn default() -> Self {
        Self {
            angle_count: 64,
            steps_per_path: 32,
            unit_distance: 2,
            radii: (1..=7).map(|k| k * 32).collect(),
            wedge: Wedge::Octant,
            even_rows: true,
        }
    }
}

impl TableConfig {
    /// Validate the configuration. Called by `generate` before any
    /// computation; any violation aborts the run.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.angle_count < 2 {
            return Err(GenerateError::Config(format!(
                "angle count must be at least 2, got {}",
                self.angle_count
            )));
        }
        // Slice indices are stored as u8 in the degree map.
        if self.angle_count > 256 {
            return Err(GenerateError::Config(format!(
                "angle count must be at most 256, got {}",
                self.angle_count
            )));
        }
        if self.steps_per_path == 0 {
            return Err(GenerateError::Config(
                "steps per path must be at least 1".into(),
            ));
        }
        if self.unit_distance == 0 {
            return Err(GenerateError::Config(
                "unit distance must be positive".into(),
            ));
        }
        if self.radii.is_empty() {
            return Err(GenerateError::Config("radius list is empty".into()));
        }
        Ok(())
    }

    /// Continuous angle (radians) of slice `i`.
    #[inline]
    pub fn slice_angle(&self, i: usize) -> f64 {
        self.wedge.radians() * i as f64 / (self.angle_count - 1) as f64
    }
}

// ============================================================================
// Tests
// ============================================================================
