//! # Design Criteria
//!
//! Code-edition constants gathered into a single immutable value that is
//! passed explicitly into every calculation entry point. Nothing in the
//! engine reads a hidden module constant; changing code editions later means
//! constructing a different `DesignCriteria`.
//!
//! The `Default` implementation carries the ACI 318-14 values used throughout
//! this engine.
//!
//! ## Example
//!
//! ```rust
//! use transfer_core::criteria::DesignCriteria;
//!
//! let criteria = DesignCriteria::default();
//! assert_eq!(criteria.min_strut_angle_deg, 25.0);
//! assert_eq!(criteria.beta_node_cct, 0.80);
//! ```

use serde::{Deserialize, Serialize};

/// Immutable design constants for a single code edition.
///
/// All strength-reduction and geometry constants consumed by the engine
/// live here so results can be tied to the exact constant set that
/// produced them (the struct serializes alongside results if desired).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignCriteria {
    /// Normal-weight concrete density for self-weight (pcf)
    pub concrete_density_pcf: f64,

    /// Depth from the compression face to the tie/node centroid line (in).
    /// Effective depth on the strut-and-tie path is `h - cover`.
    pub node_cover_in: f64,

    /// Effective-strength coefficient for bottle-shaped struts (ACI 23.4.3)
    pub beta_strut: f64,

    /// Effective-strength coefficient for CCC nodes (ACI 23.9.2)
    pub beta_node_ccc: f64,

    /// Effective-strength coefficient for CCT nodes (ACI 23.9.2)
    pub beta_node_cct: f64,

    /// Minimum angle between a strut and a tie entering one node (degrees,
    /// ACI 23.2.7). Violations are compliance findings, not errors.
    pub min_strut_angle_deg: f64,

    /// Strength reduction factor for strut-and-tie elements (ACI 21.2)
    pub phi_stm: f64,

    /// Strength reduction factor for tension-controlled flexure
    pub phi_flexure: f64,

    /// Strength reduction factor for shear
    pub phi_shear: f64,

    /// Clear-span-to-depth ratio at or below which a beam is designed as a
    /// deep beam (ACI 9.9.1.1)
    pub deep_beam_ratio_limit: f64,

    /// Minimum distributed web reinforcement ratio for deep beams, each way
    /// (ACI 9.9.3.1)
    pub web_reinforcement_ratio: f64,

    /// Absolute cap on deep-beam web bar spacing (in); the governing cap is
    /// `min(d/5, this)`
    pub max_web_bar_spacing_in: f64,
}

impl Default for DesignCriteria {
    fn default() -> Self {
        DesignCriteria {
            concrete_density_pcf: 150.0,
            node_cover_in: 5.0,
            beta_strut: 0.75,
            beta_node_ccc: 1.0,
            beta_node_cct: 0.80,
            min_strut_angle_deg: 25.0,
            phi_stm: 0.75,
            phi_flexure: 0.9,
            phi_shear: 0.75,
            deep_beam_ratio_limit: 4.0,
            web_reinforcement_ratio: 0.0025,
            max_web_bar_spacing_in: 12.0,
        }
    }
}

impl DesignCriteria {
    /// The ACI 318-14 constant set (same as `Default`)
    pub fn aci_318_14() -> Self {
        Self::default()
    }
}
