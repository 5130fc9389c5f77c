//! Batch table generation.
//!
//! The single entry point of the crate: one pure, deterministic pass that
//! turns a [`TableConfig`] into the complete table set. There is no global
//! state; every run allocates fresh output, so runs are independently
//! testable and repeatable.

use tracing::{debug, info};

use crate::circle_table::{generate_circle_tables, CirclePathTable};
use crate::config::TableConfig;
use crate::degree_map::DegreeMap;
use crate::error::GenerateError;
use crate::path_table::{generate_path_tables, PathTable};

// ============================================================================
// MotionTables
// ============================================================================

/// The complete output of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionTables {
    /// One directional table per angle slice, wedge-only.
    pub paths: Vec<PathTable>,
    /// Whole-degree lookup into `paths`.
    pub degree_map: DegreeMap,
    /// One table per configured radius, in configuration order.
    pub circles: Vec<CirclePathTable>,
}

// ============================================================================
// generate
// ============================================================================

/// Generate all movement tables for `config`.
///
/// Fails fast on an invalid configuration, a degree-map coverage gap, or a
/// degenerate radius; on any error nothing is emitted. Given an identical
/// configuration the output is bit-for-bit identical on every run and
/// platform (fixed round-half-away-from-zero rule, IEEE-754 double
/// precision trigonometry throughout).
pub fn generate(config: &TableConfig) -> Result<MotionTables, GenerateError> {
    config.validate()?;
    info!(
        angles = config.angle_count,
        steps = config.steps_per_path,
        unit = config.unit_distance,
        radii = config.radii.len(),
        "generating movement tables"
    );

    let paths = generate_path_tables(config);
    debug!(tables = paths.len(), "directional tables built");

    let angles: Vec<f64> = paths.iter().map(|t| t.angle()).collect();
    let degree_map = DegreeMap::build(&angles, config.wedge)?;
    debug!("degree map built");

    let circles = generate_circle_tables(config)?;
    debug!(tables = circles.len(), "circle tables built");

    Ok(MotionTables {
        paths,
        degree_map,
        circles,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::StepDelta;

    #[test]
    fn test_generate_production_config() {
        let tables = generate(&TableConfig::default()).unwrap();
        assert_eq!(tables.paths.len(), 64);
        assert_eq!(tables.circles.len(), 7);
        for degree in 0..360 {
            assert!(tables.degree_map.slice_for_degree(degree) < 64);
        }
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let config = TableConfig {
            angle_count: 1,
            ..TableConfig::default()
        };
        assert!(matches!(
            generate(&config),
            Err(GenerateError::Config(_))
        ));
    }

    #[test]
    fn test_generate_surfaces_coverage_gap() {
        // Too few angles to reach every whole degree of the wedge.
        let config = TableConfig {
            angle_count: 4,
            ..TableConfig::default()
        };
        assert!(matches!(
            generate(&config),
            Err(GenerateError::CoverageGap { .. })
        ));
    }

    #[test]
    fn test_generate_surfaces_degenerate_radius() {
        let config = TableConfig {
            radii: vec![64, 0],
            ..TableConfig::default()
        };
        assert_eq!(
            generate(&config),
            Err(GenerateError::DegenerateRadius { radius: 0 })
        );
    }

    #[test]
    fn test_deterministic() {
        let config = TableConfig::default();
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_degree_map_selects_axis_aligned_table() {
        let tables = generate(&TableConfig::default()).unwrap();
        let slice = tables.degree_map.slice_for_degree(0);
        assert_eq!(slice, 0);
        for delta in tables.paths[slice].deltas() {
            assert_eq!(*delta, StepDelta::new(2, 0));
        }
    }
}
