//! # sprite-motion-lut
//!
//! Ahead-of-time generator for the discrete pixel-movement lookup tables
//! used to animate a sprite along straight directions and circular arcs at a
//! fixed per-step travel distance.
//!
//! The hard part is turning continuous trigonometric motion into integer
//! pixel deltas that:
//!
//! - never drift from the true continuous path by more than rounding
//!   tolerance (error-diffused DDA-style rounding),
//! - keep vertical sprite offsets on even rows where the target platform
//!   requires it, and
//! - exploit eight-fold octant symmetry, so only a single 45° wedge is ever
//!   computed and the rest of the circle derives by axis swap and sign flip.
//!
//! ## Pipeline
//!
//! 1. **Directional paths** — K angle slices across the wedge, N error-
//!    diffused steps each ([`path_table`]).
//! 2. **Degree classifier** — a 360-entry degree → slice map built by octant
//!    reflection ([`degree_map`]).
//! 3. **Circle paths** — per-radius tables with independently rounded
//!    positions and the even-row constraint ([`circle_table`]).
//! 4. **Octant unfolding** — applied by consumers at the boundary
//!    ([`octant`]).
//!
//! Everything runs in one deterministic batch through
//! [`generate`](generate::generate); identical configurations produce
//! bit-for-bit identical tables on every platform.

// Foundation types and the shared rounding rule
pub mod basics;
pub mod config;
pub mod error;

// The numeric engine
pub mod circle_table;
pub mod dda_round;
pub mod degree_map;
pub mod octant;
pub mod path_table;

// Batch entry point
pub mod generate;

pub use basics::StepDelta;
pub use circle_table::CirclePathTable;
pub use config::{TableConfig, Wedge};
pub use degree_map::DegreeMap;
pub use error::GenerateError;
pub use generate::{generate, MotionTables};
pub use octant::{octant_of_degree, OctantTransform, OCTANT_MAP};
pub use path_table::PathTable;
