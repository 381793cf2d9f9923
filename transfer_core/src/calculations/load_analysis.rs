//! # Load Analysis and Beam Classification
//!
//! The front door of the engine: factor the transfer loads, classify the beam
//! as deep or slender from its span-to-depth ratio, and produce the factored
//! demands and diagram samples for whichever design path applies.
//!
//! The two paths treat self-weight differently:
//! - **Deep**: self-weight is folded into the factored point load `Pu`; the
//!   diagrams are those of a bare point load.
//! - **Slender**: the point load stays unblended (`Pu_bb`) and self-weight is
//!   carried as a 1.2-factored uniform line load; the shear diagram steps at
//!   the load and slopes between, and the moment diagram is parabolic.
//!
//! ## Example
//!
//! ```rust
//! use transfer_core::calculations::load_analysis::{calculate, LoadAnalysisInput};
//! use transfer_core::criteria::DesignCriteria;
//! use transfer_core::geometry::BeamGeometry;
//!
//! let input = LoadAnalysisInput {
//!     label: "TB-1".to_string(),
//!     geometry: BeamGeometry::new(20.0, 8.0, 60.0, 24.0),
//!     dead_load_kip: 50.0,
//!     live_load_kip: 30.0,
//! };
//!
//! let result = calculate(&input, &DesignCriteria::default()).unwrap();
//! assert!(result.deep_beam);
//! println!("Pu = {:.1} kip", result.pu_kip);
//! ```

use serde::{Deserialize, Serialize};

use super::beam_statics::{BeamStatics, StaticLoad};
use crate::criteria::DesignCriteria;
use crate::diagnostics::CalcTrace;
use crate::errors::CalcResult;
use crate::geometry::BeamGeometry;
use crate::loads::factoring::factor_loads;

/// Dead-load factor applied to the self-weight line load on the slender path
const LINE_LOAD_FACTOR: f64 = 1.2;

/// Input parameters for load analysis and classification.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "TB-1",
///   "geometry": {
///     "span_ft": 20.0,
///     "load_position_ft": 8.0,
///     "depth_in": 60.0,
///     "width_in": 24.0,
///     "col1_width_in": 24.0,
///     "col2_width_in": 24.0
///   },
///   "dead_load_kip": 50.0,
///   "live_load_kip": 30.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadAnalysisInput {
    /// User label for this beam (e.g., "TB-1")
    pub label: String,

    /// Beam geometry
    pub geometry: BeamGeometry,

    /// Unfactored dead transfer force (kip), excluding beam self-weight
    pub dead_load_kip: f64,

    /// Unfactored live transfer force (kip)
    pub live_load_kip: f64,
}

/// Results from load analysis.
///
/// `pu_kip` is the factored point load for the governing path: with
/// self-weight folded in when the beam is deep, without it when slender.
/// `mu_kipft` is populated on the slender path only; the deep path designs
/// by the strut-and-tie model and never uses a design moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadAnalysisResult {
    /// Governing factored point load for the selected path (kip)
    pub pu_kip: f64,

    /// True when the strut-and-tie path applies
    pub deep_beam: bool,

    /// Clear-span-to-depth ratio used for classification
    pub span_to_depth_ratio: f64,

    /// Beam self-weight (kip) - shown separately for transparency
    pub self_weight_kip: f64,

    /// Name and equation of the governing load combination
    pub governing_combination: String,

    /// Reaction at support A (kip)
    pub r1_kip: f64,

    /// Reaction at support B (kip)
    pub r2_kip: f64,

    /// Governing shear demand, max(r1, r2) (kip)
    pub vu_kip: f64,

    /// Design moment (kip-ft); slender path only
    pub mu_kipft: Option<f64>,

    /// Sampled (position ft, shear kip) along the beam
    pub shear_diagram: Vec<(f64, f64)>,

    /// Sampled (position ft, moment kip-ft) along the beam
    pub moment_diagram: Vec<(f64, f64)>,

    /// Rectangular elevation outline for rendering (x ft, y in)
    pub beam_outline: [(f64, f64); 4],

    /// Intermediate quantities
    pub trace: CalcTrace,
}

/// Factor the loads, classify the beam, and build the factored demands and
/// diagrams for the governing path.
pub fn calculate(
    input: &LoadAnalysisInput,
    criteria: &DesignCriteria,
) -> CalcResult<LoadAnalysisResult> {
    let geometry = &input.geometry;
    let factored = factor_loads(geometry, input.dead_load_kip, input.live_load_kip, criteria)?;

    let deep_beam = geometry.is_deep(criteria);
    let mut trace = CalcTrace::new();
    trace.record("sw", factored.self_weight_kip, "kip");
    trace.record("Pu", factored.pu_kip, "kip");
    trace.record("Pu_bb", factored.pu_slender_kip, "kip");

    let mut statics = BeamStatics::new(geometry.span_ft);
    let (pu_kip, governing_combination, mu_kipft) = if deep_beam {
        // Self-weight rides in the point load; nothing else on the span.
        statics.add_load(StaticLoad::point(
            factored.pu_kip,
            geometry.load_position_ft,
        ));
        (factored.pu_kip, factored.governing_combination.clone(), None)
    } else {
        // Point load without self-weight plus the factored line load.
        let line_klf = geometry.self_weight_klf(criteria.concrete_density_pcf);
        statics.add_load(StaticLoad::point(
            factored.pu_slender_kip,
            geometry.load_position_ft,
        ));
        statics.add_load(StaticLoad::uniform(LINE_LOAD_FACTOR * line_klf));

        // Design moment: point-load peak plus the unfactored line-load peak
        let mu = factored.pu_slender_kip * geometry.load_position_ft * geometry.span_remainder_ft()
            / geometry.span_ft
            + line_klf * geometry.span_ft * geometry.span_ft / 8.0;
        trace.record("w", line_klf, "klf");
        trace.record("Mu", mu, "kip-ft");
        (
            factored.pu_slender_kip,
            factored.governing_combination_slender.clone(),
            Some(mu),
        )
    };

    let statics_results = statics.analyze();
    let r1_kip = statics_results.reaction_left_kip;
    let r2_kip = statics_results.reaction_right_kip;
    trace.record("r1", r1_kip, "kip");
    trace.record("r2", r2_kip, "kip");

    Ok(LoadAnalysisResult {
        pu_kip,
        deep_beam,
        span_to_depth_ratio: geometry.span_to_depth_ratio(),
        self_weight_kip: factored.self_weight_kip,
        governing_combination,
        r1_kip,
        r2_kip,
        vu_kip: r1_kip.max(r2_kip),
        mu_kipft,
        shear_diagram: statics_results.shear_diagram,
        moment_diagram: statics_results.moment_diagram,
        beam_outline: geometry.outline(),
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON * b.abs().max(1.0)
    }

    fn deep_input() -> LoadAnalysisInput {
        LoadAnalysisInput {
            label: "TB-1".to_string(),
            geometry: BeamGeometry::new(20.0, 8.0, 60.0, 24.0),
            dead_load_kip: 50.0,
            live_load_kip: 30.0,
        }
    }

    fn slender_input() -> LoadAnalysisInput {
        LoadAnalysisInput {
            label: "TB-2".to_string(),
            geometry: BeamGeometry::new(20.0, 8.0, 24.0, 18.0),
            dead_load_kip: 50.0,
            live_load_kip: 30.0,
        }
    }

    #[test]
    fn test_deep_beam_example() {
        let result = calculate(&deep_input(), &DesignCriteria::default()).unwrap();

        // sw = 33.0, Pu = 1.2*83 + 1.6*30 = 147.6
        assert!(approx_eq(result.self_weight_kip, 33.0));
        assert!(approx_eq(result.pu_kip, 147.6));

        // Ratio 20*12/60 = 4.0, the boundary, classifies deep
        assert!(approx_eq(result.span_to_depth_ratio, 4.0));
        assert!(result.deep_beam);

        // r1 = Pu*12/20, r2 = Pu*8/20, summing to Pu
        assert!(approx_eq(result.r1_kip, 88.56));
        assert!(approx_eq(result.r2_kip, 59.04));
        assert!(approx_eq(result.r1_kip + result.r2_kip, result.pu_kip));
        assert!(approx_eq(result.vu_kip, 88.56));

        // Deep path carries no design moment
        assert!(result.mu_kipft.is_none());
        assert_eq!(
            result.beam_outline,
            [(0.0, 0.0), (0.0, 60.0), (20.0, 60.0), (20.0, 0.0)]
        );
    }

    #[test]
    fn test_slender_beam_example() {
        let result = calculate(&slender_input(), &DesignCriteria::default()).unwrap();

        assert!(!result.deep_beam);

        // Pu_bb = 1.2*50 + 1.6*30 = 108 (self-weight not folded in)
        assert!(approx_eq(result.pu_kip, 108.0));

        // w = 150*(24/12)*(18/12)/1000 = 0.45 klf, factored to 0.54
        // r1 = 108*12/20 + 0.54*10 = 70.2; r2 = 43.2 + 5.4 = 48.6
        assert!(approx_eq(result.r1_kip, 70.2));
        assert!(approx_eq(result.r2_kip, 48.6));
        assert!(approx_eq(result.vu_kip, 70.2));

        // Mu = 108*8*12/20 + 0.45*20^2/8 = 518.4 + 22.5 = 540.9 kip-ft
        let mu = result.mu_kipft.unwrap();
        assert!(approx_eq(mu, 540.9));
    }

    #[test]
    fn test_symmetric_load_splits_reactions() {
        let mut input = deep_input();
        input.geometry.load_position_ft = 10.0;
        let result = calculate(&input, &DesignCriteria::default()).unwrap();
        assert!(approx_eq(result.r1_kip, result.r2_kip));
        assert!(approx_eq(result.r1_kip, result.pu_kip / 2.0));
    }

    #[test]
    fn test_shear_diagram_steps_at_load() {
        let result = calculate(&deep_input(), &DesignCriteria::default()).unwrap();

        // Just left of the load the shear is r1; just right it is r1 - Pu
        let before = result
            .shear_diagram
            .iter()
            .filter(|(x, _)| *x < 8.0)
            .last()
            .unwrap()
            .1;
        let after = result
            .shear_diagram
            .iter()
            .find(|(x, _)| *x > 8.0)
            .unwrap()
            .1;
        assert!(approx_eq(before, 88.56));
        assert!(approx_eq(after, 88.56 - 147.6));
    }

    #[test]
    fn test_idempotent() {
        let criteria = DesignCriteria::default();
        let a = calculate(&deep_input(), &criteria).unwrap();
        let b = calculate(&deep_input(), &criteria).unwrap();
        assert_eq!(a.shear_diagram, b.shear_diagram);
        assert_eq!(a.moment_diagram, b.moment_diagram);
        assert_eq!(a.pu_kip, b.pu_kip);
    }

    #[test]
    fn test_invalid_geometry_fails_fast() {
        let mut input = deep_input();
        input.geometry.load_position_ft = 0.0;
        let err = calculate(&input, &DesignCriteria::default()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }));
    }

    #[test]
    fn test_trace_records_factored_load() {
        let result = calculate(&deep_input(), &DesignCriteria::default()).unwrap();
        assert_eq!(result.trace.get("Pu"), Some(147.6));
        assert!(result.trace.get("r1").is_some());
    }
}
