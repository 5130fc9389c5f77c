//! Degree-to-slice classifier.
//!
//! Maps every whole degree 0–359 to the index of the nearest precomputed
//! wedge angle, so runtime callers can select a movement table without any
//! trigonometry. Only the wedge's own degrees are classified directly; the
//! rest of the circle is populated through reflection, which is what lets a
//! single 45° (or 90°) wedge of tables serve all 360 degrees.

use crate::basics::to_degrees;
use crate::config::Wedge;
use crate::error::GenerateError;

// ============================================================================
// DegreeMap
// ============================================================================

/// Fixed 360-entry lookup from whole degree to angle-slice index.
///
/// Built once by [`DegreeMap::build`]; guaranteed fully populated (a gap is
/// a fatal build error, never a silent default entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeMap {
    entries: [u8; 360],
}

impl DegreeMap {
    /// Build the map from the continuous slice angles (radians, ascending,
    /// all within the wedge).
    ///
    /// Walks the slices in increasing order; whenever the rounded degree
    /// value changes, the slice is registered at every degree position the
    /// wedge reflects onto. Degree collisions keep the earlier slice index
    /// (first writer wins).
    pub fn build(angles: &[f64], wedge: Wedge) -> Result<Self, GenerateError> {
        let mut entries = [None::<u8>; 360];
        let mut prev_degree = None;

        for (i, &angle) in angles.iter().enumerate() {
            let degree = to_degrees(angle) as u32;
            if prev_degree == Some(degree) {
                continue;
            }
            prev_degree = Some(degree);
            Self::register(&mut entries, degree, i as u8, wedge);
        }

        let mut map = [0u8; 360];
        for (degree, entry) in entries.iter().enumerate() {
            match entry {
                Some(slice) => map[degree] = *slice,
                None => {
                    return Err(GenerateError::CoverageGap {
                        degree: degree as u32,
                    })
                }
            }
        }
        Ok(Self { entries: map })
    }

    /// Write `slice` at every degree the wedge angle `degree` reflects onto,
    /// skipping entries that already have an owner.
    fn register(entries: &mut [Option<u8>; 360], degree: u32, slice: u8, wedge: Wedge) {
        let reflected: &[u32] = match wedge {
            Wedge::Octant => &[
                degree,
                90 - degree,
                90 + degree,
                180 - degree,
                180 + degree,
                270 - degree,
                270 + degree,
            ],
            Wedge::Quadrant => &[degree, 180 - degree, 180 + degree],
        };
        for &d in reflected {
            let slot = &mut entries[d as usize % 360];
            if slot.is_none() {
                *slot = Some(slice);
            }
        }
        if degree != 0 {
            let slot = &mut entries[(360 - degree) as usize];
            if slot.is_none() {
                *slot = Some(slice);
            }
        }
    }

    /// Slice index for a whole degree. Degrees >= 360 wrap around.
    #[inline]
    pub fn slice_for_degree(&self, degree: u32) -> usize {
        self.entries[degree as usize % 360] as usize
    }

    /// The raw 360-entry table.
    #[inline]
    pub fn entries(&self) -> &[u8; 360] {
        &self.entries
    }
}

// ============================================================================
// Tests
// ============================================================================
