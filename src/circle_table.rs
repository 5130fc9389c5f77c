//! Circular path generator.
//!
//! For each configured radius, produces the integer pixel deltas that carry
//! a sprite around the circle's circumference in fixed-size steps. Unlike
//! the directional generator there is no residual carry between steps: at
//! the chosen step density the geometric spacing is already sub-pixel
//! accurate, so each position is rounded independently.

use crate::basics::{iround, iround_even, StepDelta, PI};
use crate::config::TableConfig;
use crate::error::GenerateError;

// ============================================================================
// CirclePathTable
// ============================================================================

/// Immutable movement table for one radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CirclePathTable {
    radius: u32,
    deltas: Vec<StepDelta>,
}

impl CirclePathTable {
    /// The radius this table was computed for, in pixels.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// The per-step deltas. The path starts at `(radius, 0)`.
    #[inline]
    pub fn deltas(&self) -> &[StepDelta] {
        &self.deltas
    }

    /// Derived step count; always a multiple of 4.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.deltas.len()
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Build one [`CirclePathTable`] per configured radius.
pub fn generate_circle_tables(
    config: &TableConfig,
) -> Result<Vec<CirclePathTable>, GenerateError> {
    config
        .radii
        .iter()
        .map(|&radius| circle_path(radius, config.unit_distance, config.even_rows))
        .collect()
}

/// Step count for a radius: the circumference divided into unit-distance
/// steps, rounded half away from zero, then up to the next multiple of 4 so
/// the table divides evenly into quadrant/octant reflections downstream.
pub fn circle_step_count(radius: u32, unit_distance: u32) -> Result<usize, GenerateError> {
    let circumference = 2.0 * PI * radius as f64;
    let raw = iround(circumference / unit_distance as f64);
    if raw <= 0 {
        return Err(GenerateError::DegenerateRadius { radius });
    }
    Ok(((raw as usize) + 3) / 4 * 4)
}

fn circle_path(
    radius: u32,
    unit_distance: u32,
    even_rows: bool,
) -> Result<CirclePathTable, GenerateError> {
    let steps = circle_step_count(radius, unit_distance)?;
    let r = radius as f64;

    // Start point: angle 0, on the positive x axis.
    let mut prev_x = radius as i32;
    let mut prev_y = 0i32;

    let mut deltas = Vec::with_capacity(steps);
    for i in 0..steps {
        let angle = 2.0 * PI * (i + 1) as f64 / steps as f64;
        let (sin, cos) = angle.sin_cos();
        let x = iround(cos * r);
        // Vertical sprite placement is restricted to even rows.
        let y = if even_rows {
            iround_even(sin * r)
        } else {
            iround(sin * r)
        };
        deltas.push(StepDelta::new(x - prev_x, y - prev_y));
        prev_x = x;
        prev_y = y;
    }

    Ok(CirclePathTable { radius, deltas })
}

// ============================================================================
// Tests
// ============================================================================
