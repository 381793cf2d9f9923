//! Factored transfer load
//!
//! Converts the unfactored dead/live column loads plus beam self-weight into
//! the governing factored point load `Pu`. Two variants are produced because
//! the two design paths treat self-weight differently:
//!
//! - Deep (strut-and-tie) path: self-weight is folded into the dead point
//!   load before factoring (`pu_kip`).
//! - Slender (Bernoulli) path: self-weight stays out of the point load and is
//!   carried as a factored line load instead (`pu_slender_kip`).

use serde::{Deserialize, Serialize};

use super::combinations::{find_governing_combination, lrfd_gravity_combinations, LoadCase};
use super::load_types::LoadType;
use crate::criteria::DesignCriteria;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::BeamGeometry;

/// Factored point loads for both design paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactoredLoads {
    /// Beam self-weight as a single force (kip)
    pub self_weight_kip: f64,

    /// Total dead load with self-weight folded in (kip)
    pub total_dead_kip: f64,

    /// Governing factored point load with self-weight included (kip).
    /// Used on the deep-beam path.
    pub pu_kip: f64,

    /// Governing factored point load without self-weight (kip).
    /// Used on the slender path, where self-weight is a line load.
    pub pu_slender_kip: f64,

    /// Name and equation of the combination governing `pu_kip`
    pub governing_combination: String,

    /// Name and equation of the combination governing `pu_slender_kip`
    pub governing_combination_slender: String,
}

/// Factor the transfer loads for the given beam.
///
/// Fails with `InvalidInput` if the geometry is degenerate or either load is
/// negative. Pure and deterministic.
pub fn factor_loads(
    geometry: &BeamGeometry,
    dead_load_kip: f64,
    live_load_kip: f64,
    criteria: &DesignCriteria,
) -> CalcResult<FactoredLoads> {
    geometry.validate()?;
    if dead_load_kip < 0.0 {
        return Err(CalcError::invalid_input(
            "dead_load_kip",
            dead_load_kip.to_string(),
            "Dead load cannot be negative",
        ));
    }
    if live_load_kip < 0.0 {
        return Err(CalcError::invalid_input(
            "live_load_kip",
            live_load_kip.to_string(),
            "Live load cannot be negative",
        ));
    }

    let self_weight_kip = geometry.self_weight_kip(criteria.concrete_density_pcf);
    let total_dead_kip = dead_load_kip + self_weight_kip;

    let combos = lrfd_gravity_combinations();

    let deep_case = LoadCase::new("transfer + self weight")
        .with_load(LoadType::Dead, total_dead_kip)
        .with_load(LoadType::Live, live_load_kip);
    let (deep_combo, pu_kip) = find_governing_combination(&deep_case, &combos)
        .ok_or_else(|| CalcError::Internal {
            message: "no load combinations defined".to_string(),
        })?;

    let slender_case = LoadCase::new("transfer only")
        .with_load(LoadType::Dead, dead_load_kip)
        .with_load(LoadType::Live, live_load_kip);
    let (slender_combo, pu_slender_kip) = find_governing_combination(&slender_case, &combos)
        .ok_or_else(|| CalcError::Internal {
            message: "no load combinations defined".to_string(),
        })?;

    Ok(FactoredLoads {
        self_weight_kip,
        total_dead_kip,
        pu_kip,
        pu_slender_kip,
        governing_combination: format!("{}: {}", deep_combo.name, deep_combo.equation),
        governing_combination_slender: format!(
            "{}: {}",
            slender_combo.name, slender_combo.equation
        ),
    })
}

/// Support reactions for a single point load from statics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction at support A, near x = 0 (kip)
    pub r1_kip: f64,
    /// Reaction at support B, near x = l (kip)
    pub r2_kip: f64,
}

impl Reactions {
    /// `r1 = P(l-a)/l`, `r2 = P*a/l`; the two always sum to `P`.
    pub fn for_point_load(pu_kip: f64, geometry: &BeamGeometry) -> Self {
        Reactions {
            r1_kip: pu_kip * geometry.span_remainder_ft() / geometry.span_ft,
            r2_kip: pu_kip * geometry.load_position_ft / geometry.span_ft,
        }
    }

    /// Larger of the two reactions (the shear demand at the governing support)
    pub fn max_kip(&self) -> f64 {
        self.r1_kip.max(self.r2_kip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn example() -> BeamGeometry {
        BeamGeometry::new(20.0, 8.0, 60.0, 24.0)
    }

    #[test]
    fn test_factored_loads_example() {
        let criteria = DesignCriteria::default();
        let loads = factor_loads(&example(), 50.0, 30.0, &criteria).unwrap();

        // sw = 33.0; Pu = max(1.2*83 + 1.6*30, 1.4*83) = 147.6
        assert!((loads.self_weight_kip - 33.0).abs() < EPSILON);
        assert!((loads.total_dead_kip - 83.0).abs() < EPSILON);
        assert!((loads.pu_kip - 147.6).abs() < EPSILON);
        assert!(loads.governing_combination.starts_with("LRFD-2"));

        // Without self-weight: max(1.2*50 + 1.6*30, 1.4*50) = 108.0
        assert!((loads.pu_slender_kip - 108.0).abs() < EPSILON);
    }

    #[test]
    fn test_dead_only_governed_by_1_4d() {
        let criteria = DesignCriteria::default();
        let loads = factor_loads(&example(), 100.0, 0.0, &criteria).unwrap();
        // 1.4 * (100 + 33) = 186.2 > 1.2 * 133 = 159.6
        assert!((loads.pu_kip - 186.2).abs() < EPSILON);
        assert!(loads.governing_combination.starts_with("LRFD-1"));
    }

    #[test]
    fn test_negative_loads_rejected() {
        let criteria = DesignCriteria::default();
        assert!(factor_loads(&example(), -1.0, 30.0, &criteria).is_err());
        assert!(factor_loads(&example(), 50.0, -1.0, &criteria).is_err());
    }

    #[test]
    fn test_reactions_sum_to_load() {
        let r = Reactions::for_point_load(147.6, &example());
        assert!((r.r1_kip - 88.56).abs() < EPSILON);
        assert!((r.r2_kip - 59.04).abs() < EPSILON);
        assert!((r.r1_kip + r.r2_kip - 147.6).abs() < EPSILON);
    }

    #[test]
    fn test_reactions_symmetric_at_midspan() {
        let g = BeamGeometry::new(20.0, 10.0, 60.0, 24.0);
        let r = Reactions::for_point_load(100.0, &g);
        assert!((r.r1_kip - 50.0).abs() < EPSILON);
        assert!((r.r2_kip - 50.0).abs() < EPSILON);
    }
}
