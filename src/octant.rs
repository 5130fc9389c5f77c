//! Octant symmetry transforms.
//!
//! Movement tables are only ever computed for one wedge; the remaining
//! octants are derived by swapping axes and flipping signs. The transform
//! table lives here, at the boundary between the generators and their
//! consumers, so the generators themselves stay wedge-only.
//!
//! Octants are numbered counterclockwise from the positive x axis, 45
//! degrees each: octant 0 covers 0..45, octant 1 covers 45..90, and so on.

use crate::basics::StepDelta;

// ============================================================================
// OctantTransform
// ============================================================================

/// Axis swap and sign flips that map a wedge-computed delta into one octant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctantTransform {
    pub swap_axes: bool,
    pub sign_x: i32,
    pub sign_y: i32,
}

impl OctantTransform {
    /// Map a delta computed for the base wedge into this octant.
    #[inline]
    pub fn apply(&self, delta: StepDelta) -> StepDelta {
        let (x, y) = if self.swap_axes {
            (delta.dy, delta.dx)
        } else {
            (delta.dx, delta.dy)
        };
        StepDelta::new(x * self.sign_x, y * self.sign_y)
    }
}

/// Transform per octant, derived from the reflection identities:
///
/// | octant | degrees   | (x, y) from wedge value |
/// |--------|-----------|-------------------------|
/// | 0      | 0..45     | ( x,  y)                |
/// | 1      | 45..90    | ( y,  x)                |
/// | 2      | 90..135   | (-y,  x)                |
/// | 3      | 135..180  | (-x,  y)                |
/// | 4      | 180..225  | (-x, -y)                |
/// | 5      | 225..270  | (-y, -x)                |
/// | 6      | 270..315  | ( y, -x)                |
/// | 7      | 315..360  | ( x, -y)                |
pub const OCTANT_MAP: [OctantTransform; 8] = [
    OctantTransform { swap_axes: false, sign_x: 1, sign_y: 1 },
    OctantTransform { swap_axes: true, sign_x: 1, sign_y: 1 },
    OctantTransform { swap_axes: true, sign_x: -1, sign_y: 1 },
    OctantTransform { swap_axes: false, sign_x: -1, sign_y: 1 },
    OctantTransform { swap_axes: false, sign_x: -1, sign_y: -1 },
    OctantTransform { swap_axes: true, sign_x: -1, sign_y: -1 },
    OctantTransform { swap_axes: true, sign_x: 1, sign_y: -1 },
    OctantTransform { swap_axes: false, sign_x: 1, sign_y: -1 },
];

/// Octant index (0..8) containing a whole degree. Degrees >= 360 wrap.
#[inline]
pub fn octant_of_degree(degree: u32) -> usize {
    (degree % 360) as usize / 45
}

// ============================================================================
// Tests
// ============================================================================
