//! Foundation types and rounding primitives.
//!
//! Everything else in the crate depends on the fixed rounding rule defined
//! here: round half away from zero, evaluated in IEEE-754 double precision.
//! Using one rule everywhere is what makes generation bit-for-bit
//! reproducible across platforms.

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round a double to the nearest integer (round half away from zero).
/// Matches C `lround` for finite inputs in `i32` range.
#[inline]
pub fn iround(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

/// Round a double to the nearest even integer (round half away from zero at
/// half resolution). Used for the even-row sprite placement constraint.
#[inline]
pub fn iround_even(v: f64) -> i32 {
    2 * iround(v / 2.0)
}

/// Convert radians to whole degrees, rounded half away from zero.
#[inline]
pub fn to_degrees(radians: f64) -> i32 {
    iround(radians * 180.0 / PI)
}

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// One octant: 45 degrees.
pub const PI_4: f64 = std::f64::consts::FRAC_PI_4;

/// One quadrant: 90 degrees.
pub const PI_2: f64 = std::f64::consts::FRAC_PI_2;

// ============================================================================
// Step delta
// ============================================================================

/// Incremental pixel movement for one animation step.
///
/// The magnitude of each component is bounded by the configured per-step
/// travel distance; error diffusion may defer a sub-pixel movement, so a
/// component can stay 0 for consecutive steps before a compensating jump
/// up to the same bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepDelta {
    pub dx: i32,
    pub dy: i32,
}

impl StepDelta {
    #[inline]
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

// ============================================================================
// Tests
// ============================================================================
