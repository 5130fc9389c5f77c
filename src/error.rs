//! Error taxonomy for table generation.
//!
//! Generation is a pure batch computation: every error here is fatal to the
//! run and nothing is partially emitted. There is no retry semantics.

use thiserror::Error;

/// Fatal errors reported by [`generate`](crate::generate::generate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Invalid configuration, rejected before any computation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The degree-to-slice map was left with an unset entry after the
    /// classifier pass. Leaving a default index would silently make an
    /// unrelated slice authoritative for that degree, so this is fatal.
    #[error("degree-to-slice map has no slice for degree {degree}")]
    CoverageGap { degree: u32 },

    /// A radius so small its circle resolves to zero steps.
    #[error("radius {radius} yields a degenerate circle path (zero steps)")]
    DegenerateRadius { radius: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_value() {
        let e = GenerateError::CoverageGap { degree: 47 };
        assert!(e.to_string().contains("47"));

        let e = GenerateError::DegenerateRadius { radius: 0 };
        assert!(e.to_string().contains('0'));

        let e = GenerateError::Config("angle count must be at least 2".into());
        assert!(e.to_string().contains("angle count"));
    }
}
