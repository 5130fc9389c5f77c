//! Directional path generator.
//!
//! For each of K discrete angles across the wedge, produces the sequence of
//! integer pixel deltas whose cumulative sum tracks the ideal ray from the
//! origin, advancing one full unit distance per step. Only the wedge is ever
//! computed; the caller mirrors tables into the other octants via
//! [`OctantTransform`](crate::octant::OctantTransform).

use crate::basics::StepDelta;
use crate::config::TableConfig;
use crate::dda_round::DdaRounder;

// ============================================================================
// PathTable
// ============================================================================

/// Immutable movement table for one angle slice.
///
/// Built once by [`generate_path_tables`]; consumers get a read-only view.
#[derive(Debug, Clone, PartialEq)]
pub struct PathTable {
    angle: f64,
    deltas: Vec<StepDelta>,
}

impl PathTable {
    /// Continuous angle of this slice, in radians.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The per-step deltas.
    #[inline]
    pub fn deltas(&self) -> &[StepDelta] {
        &self.deltas
    }

    /// Number of steps in the path.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.deltas.len()
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Build the K directional path tables for `config`.
///
/// The ideal position after step `s` (1-indexed) is
/// `(cos θ · u · s, sin θ · u · s)` — always `s` full unit steps from the
/// origin along the ray, never a diagonal shortcut. Each axis runs through
/// its own [`DdaRounder`], so the cumulative integer position stays within
/// one pixel of the ideal position on both axes for every `s`.
pub fn generate_path_tables(config: &TableConfig) -> Vec<PathTable> {
    let unit = config.unit_distance as f64;
    (0..config.angle_count)
        .map(|i| {
            let angle = config.slice_angle(i);
            let deltas = if i == 0 {
                // Wedge boundary: a pure axis-aligned path, exact by
                // construction rather than by trig evaluation.
                vec![StepDelta::new(config.unit_distance as i32, 0); config.steps_per_path]
            } else {
                wedge_path(angle, unit, config.steps_per_path)
            };
            PathTable { angle, deltas }
        })
        .collect()
}

fn wedge_path(angle: f64, unit: f64, steps: usize) -> Vec<StepDelta> {
    let (sin, cos) = angle.sin_cos();
    let mut x = DdaRounder::new();
    let mut y = DdaRounder::new();
    (1..=steps)
        .map(|s| {
            let distance = unit * s as f64;
            StepDelta::new(x.next(cos * distance), y.next(sin * distance))
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Wedge;

    fn production() -> TableConfig {
        TableConfig::default()
    }

    #[test]
    fn test_slice_zero_is_axis_aligned() {
        let tables = generate_path_tables(&production());
        for delta in tables[0].deltas() {
            assert_eq!(*delta, StepDelta::new(2, 0));
        }
    }

    #[test]
    fn test_table_count_and_length() {
        let config = production();
        let tables = generate_path_tables(&config);
        assert_eq!(tables.len(), 64);
        for table in &tables {
            assert_eq!(table.len(), 32);
        }
    }

    #[test]
    fn test_cumulative_position_tracks_ray() {
        // Cumulative sum after step s stays within one pixel of the ideal
        // continuous position, per axis, for every slice and every s.
        let config = production();
        let unit = config.unit_distance as f64;
        for (i, table) in generate_path_tables(&config).iter().enumerate() {
            let (sin, cos) = table.angle().sin_cos();
            let mut x = 0i32;
            let mut y = 0i32;
            for (s, delta) in table.deltas().iter().enumerate() {
                x += delta.dx;
                y += delta.dy;
                let d = unit * (s + 1) as f64;
                assert!(
                    (x as f64 - cos * d).abs() <= 1.0,
                    "slice {i} step {s}: x={x} ideal={}",
                    cos * d
                );
                assert!(
                    (y as f64 - sin * d).abs() <= 1.0,
                    "slice {i} step {s}: y={y} ideal={}",
                    sin * d
                );
            }
        }
    }

    #[test]
    fn test_component_magnitude_bounded_by_unit_distance() {
        let config = production();
        let bound = config.unit_distance as i32;
        for table in generate_path_tables(&config) {
            for delta in table.deltas() {
                assert!(delta.dx.abs() <= bound);
                assert!(delta.dy.abs() <= bound);
            }
        }
    }

    #[test]
    fn test_last_slice_near_wedge_boundary() {
        // Slice 63 of a 64-slice octant wedge sits at 45 degrees exactly;
        // after 32 steps of 2 pixels both axes should be near cos(45)*64.
        let tables = generate_path_tables(&production());
        let table = tables.last().unwrap();
        let ideal = (std::f64::consts::FRAC_PI_4).cos() * 64.0;
        let x: i32 = table.deltas().iter().map(|d| d.dx).sum();
        let y: i32 = table.deltas().iter().map(|d| d.dy).sum();
        assert!((x as f64 - ideal).abs() <= 1.0);
        assert!((y as f64 - ideal).abs() <= 1.0);
    }

    #[test]
    fn test_quadrant_wedge_reaches_vertical() {
        let config = TableConfig {
            angle_count: 120,
            steps_per_path: 16,
            wedge: Wedge::Quadrant,
            ..TableConfig::default()
        };
        let tables = generate_path_tables(&config);
        let table = tables.last().unwrap();
        // 90 degrees: all movement on y.
        let x: i32 = table.deltas().iter().map(|d| d.dx).sum();
        let y: i32 = table.deltas().iter().map(|d| d.dy).sum();
        assert_eq!(x, 0);
        assert_eq!(y, 32);
    }
}
