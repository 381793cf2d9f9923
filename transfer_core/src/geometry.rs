//! # Beam Geometry
//!
//! Geometry of a simply-supported transfer beam carrying one concentrated
//! load: span, load position, rectangular section, and the widths of the two
//! supporting columns.
//!
//! Validation here is the pre-flight gate for the whole engine: every
//! degenerate division downstream (`l = 0`, `a = 0`, `a = l`) is rejected as
//! an `InvalidInput` error before any arithmetic runs.
//!
//! ## Units
//!
//! Span and load position are in feet (support-center to support-center);
//! section and column dimensions are in inches. This mixed convention matches
//! US practice for concrete transfer girders.

use serde::{Deserialize, Serialize};

use crate::criteria::DesignCriteria;
use crate::errors::{CalcError, CalcResult};

/// Geometry of a simply-supported transfer beam.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_ft": 20.0,
///   "load_position_ft": 8.0,
///   "depth_in": 60.0,
///   "width_in": 24.0,
///   "col1_width_in": 24.0,
///   "col2_width_in": 24.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamGeometry {
    /// Span in feet, column center to column center
    pub span_ft: f64,

    /// Position of the transfer load from the left support (ft).
    /// Must be strictly interior: 0 < a < span.
    pub load_position_ft: f64,

    /// Overall beam depth h (in)
    pub depth_in: f64,

    /// Beam width b (in)
    pub width_in: f64,

    /// Width of column 1 (left support) (in)
    pub col1_width_in: f64,

    /// Width of column 2 (right support) (in)
    pub col2_width_in: f64,
}

impl BeamGeometry {
    /// Construct with the common 24 in square columns.
    pub fn new(span_ft: f64, load_position_ft: f64, depth_in: f64, width_in: f64) -> Self {
        BeamGeometry {
            span_ft,
            load_position_ft,
            depth_in,
            width_in,
            col1_width_in: 24.0,
            col2_width_in: 24.0,
        }
    }

    /// Validate all geometric invariants.
    ///
    /// Every dimension must be strictly positive and the load position must
    /// be strictly interior to the span.
    pub fn validate(&self) -> CalcResult<()> {
        if self.span_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_ft",
                self.span_ft.to_string(),
                "Span must be positive",
            ));
        }
        if self.depth_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "depth_in",
                self.depth_in.to_string(),
                "Depth must be positive",
            ));
        }
        if self.width_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_in",
                self.width_in.to_string(),
                "Width must be positive",
            ));
        }
        if self.col1_width_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "col1_width_in",
                self.col1_width_in.to_string(),
                "Column width must be positive",
            ));
        }
        if self.col2_width_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "col2_width_in",
                self.col2_width_in.to_string(),
                "Column width must be positive",
            ));
        }
        if self.load_position_ft <= 0.0 || self.load_position_ft >= self.span_ft {
            return Err(CalcError::invalid_input(
                "load_position_ft",
                self.load_position_ft.to_string(),
                "Load position must be strictly inside the span (0 < a < l)",
            ));
        }
        Ok(())
    }

    /// Span in inches
    pub fn span_in(&self) -> f64 {
        self.span_ft * 12.0
    }

    /// Shear span a (in), left support to load
    pub fn shear_span_in(&self) -> f64 {
        self.load_position_ft * 12.0
    }

    /// Remainder of span b1 = l - a (ft)
    pub fn span_remainder_ft(&self) -> f64 {
        self.span_ft - self.load_position_ft
    }

    /// Remainder of span b1 = l - a (in)
    pub fn span_remainder_in(&self) -> f64 {
        self.span_remainder_ft() * 12.0
    }

    /// Effective depth to the tie centroid on the strut-and-tie path (in)
    pub fn effective_depth_in(&self, criteria: &DesignCriteria) -> f64 {
        self.depth_in - criteria.node_cover_in
    }

    /// Clear-span-to-depth ratio (span in inches over depth in inches)
    pub fn span_to_depth_ratio(&self) -> f64 {
        self.span_in() / self.depth_in
    }

    /// Deep-beam classification per ACI 9.9.1.1.
    ///
    /// A beam whose span-to-depth ratio is at or below the limit is designed
    /// with the strut-and-tie method; a ratio of exactly the limit classifies
    /// as deep.
    pub fn is_deep(&self, criteria: &DesignCriteria) -> bool {
        self.span_to_depth_ratio() <= criteria.deep_beam_ratio_limit
    }

    /// Beam self-weight as a single force (kip), treating the beam as a prism
    /// spanning half a column width past each support center:
    /// `density * (h/12) * (b/12) * (l + col1/24 + col2/24) / 1000`.
    pub fn self_weight_kip(&self, density_pcf: f64) -> f64 {
        density_pcf
            * (self.depth_in / 12.0)
            * (self.width_in / 12.0)
            * (self.span_ft + self.col1_width_in / 24.0 + self.col2_width_in / 24.0)
            / 1000.0
    }

    /// Beam self-weight as a uniform line load (klf):
    /// `density * (h/12) * (b/12) / 1000`.
    pub fn self_weight_klf(&self, density_pcf: f64) -> f64 {
        density_pcf * (self.depth_in / 12.0) * (self.width_in / 12.0) / 1000.0
    }

    /// Four-vertex rectangular elevation outline for rendering, traced
    /// counterclockwise from the origin. x in feet, y in inches.
    pub fn outline(&self) -> [(f64, f64); 4] {
        [
            (0.0, 0.0),
            (0.0, self.depth_in),
            (self.span_ft, self.depth_in),
            (self.span_ft, 0.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> BeamGeometry {
        BeamGeometry::new(20.0, 8.0, 60.0, 24.0)
    }

    #[test]
    fn test_validate_accepts_example() {
        assert!(example().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nonpositive_dimensions() {
        let mut g = example();
        g.span_ft = 0.0;
        assert_eq!(g.validate().unwrap_err().error_code(), "INVALID_INPUT");

        let mut g = example();
        g.depth_in = -60.0;
        assert!(g.validate().is_err());

        let mut g = example();
        g.width_in = 0.0;
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_load_position() {
        // a = 0 and a = l would divide by zero downstream; both must be
        // rejected up front.
        let mut g = example();
        g.load_position_ft = 0.0;
        assert!(g.validate().is_err());

        let mut g = example();
        g.load_position_ft = 20.0;
        assert!(g.validate().is_err());

        let mut g = example();
        g.load_position_ft = 25.0;
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_span_to_depth_classification() {
        let criteria = DesignCriteria::default();

        // 20 ft * 12 / 60 in = 4.0: exactly at the limit classifies deep
        let g = example();
        assert_eq!(g.span_to_depth_ratio(), 4.0);
        assert!(g.is_deep(&criteria));

        // Shallower beam is slender
        let g = BeamGeometry::new(20.0, 8.0, 24.0, 18.0);
        assert!(!g.is_deep(&criteria));
    }

    #[test]
    fn test_self_weight() {
        // 150 * (60/12) * (24/12) * (20 + 1 + 1) / 1000 = 33.0 kip
        let g = example();
        assert!((g.self_weight_kip(150.0) - 33.0).abs() < 1e-9);

        // Line load: 150 * 5 * 2 / 1000 = 1.5 klf
        assert!((g.self_weight_klf(150.0) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_effective_depth() {
        let criteria = DesignCriteria::default();
        assert_eq!(example().effective_depth_in(&criteria), 55.0);
    }

    #[test]
    fn test_outline() {
        let g = example();
        assert_eq!(
            g.outline(),
            [(0.0, 0.0), (0.0, 60.0), (20.0, 60.0), (20.0, 0.0)]
        );
    }
}
