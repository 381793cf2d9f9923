//! # Conventional Section Design
//!
//! Singly-reinforced rectangular-section flexure and shear design for the
//! slender (Bernoulli) path. Effective depth is taken as 0.9h rather than a
//! cover-based depth, matching common preliminary-design practice.
//!
//! The flexural steel comes from a single-pass closed form: the compression
//! block depth is estimated as `a = sqrt(Mu/(phi*0.85*fc*b))` and the steel
//! area as `As = Mu/(phi*fy*(d - a/2))`. This is an approximation of the
//! simultaneous two-unknown solve (the true `a` depends on `As`); it is kept
//! deliberately for compatibility with established results and is NOT a
//! rigorous section solution. Internal arithmetic is in lb/psi/in; the
//! boundary takes kip-ft and ksi.
//!
//! ## Example
//!
//! ```rust
//! use transfer_core::calculations::section_design::{calculate, SectionDesignInput};
//! use transfer_core::criteria::DesignCriteria;
//! use transfer_core::materials::{BarSize, Concrete, ReinforcingSteel};
//!
//! let input = SectionDesignInput {
//!     label: "B-2".to_string(),
//!     concrete: Concrete::new(4000.0),
//!     steel: ReinforcingSteel::new(60.0),
//!     width_in: 18.0,
//!     depth_in: 24.0,
//!     mu_kipft: 150.0,
//!     vu_kip: 40.0,
//!     tie_bar: BarSize(8),
//! };
//!
//! let result = calculate(&input, &DesignCriteria::default()).unwrap();
//! println!("As = {:.2} in^2 ({} bars)", result.as_required_in2, result.bar_count);
//! ```

use serde::{Deserialize, Serialize};

use crate::criteria::DesignCriteria;
use crate::diagnostics::CalcTrace;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BarSize, Concrete, ReinforcingSteel};

/// Input parameters for conventional flexure/shear design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-2",
///   "concrete": { "fc_psi": 4000.0 },
///   "steel": { "fy_ksi": 60.0 },
///   "width_in": 18.0,
///   "depth_in": 24.0,
///   "mu_kipft": 150.0,
///   "vu_kip": 40.0,
///   "tie_bar": 8
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDesignInput {
    /// User label for this section
    pub label: String,

    /// Concrete material
    pub concrete: Concrete,

    /// Reinforcing steel
    pub steel: ReinforcingSteel,

    /// Section width b (in)
    pub width_in: f64,

    /// Overall section depth h (in)
    pub depth_in: f64,

    /// Factored design moment (kip-ft)
    pub mu_kipft: f64,

    /// Factored design shear (kip)
    pub vu_kip: f64,

    /// Bar size for flexural reinforcement
    pub tie_bar: BarSize,
}

impl SectionDesignInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.concrete.validate()?;
        self.steel.validate()?;
        self.tie_bar.validate()?;

        if self.width_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_in",
                self.width_in.to_string(),
                "Width must be positive",
            ));
        }
        if self.depth_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "depth_in",
                self.depth_in.to_string(),
                "Depth must be positive",
            ));
        }
        if self.mu_kipft < 0.0 {
            return Err(CalcError::invalid_input(
                "mu_kipft",
                self.mu_kipft.to_string(),
                "Design moment cannot be negative",
            ));
        }
        if self.vu_kip < 0.0 {
            return Err(CalcError::invalid_input(
                "vu_kip",
                self.vu_kip.to_string(),
                "Design shear cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results from conventional section design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDesignResult {
    /// Effective depth 0.9h (in)
    pub effective_depth_in: f64,

    /// Equivalent stress-block factor, clamped to [0.65, 0.85]
    pub beta1: f64,

    /// Minimum reinforcement ratio
    pub rho_min: f64,
    /// Maximum reinforcement ratio
    pub rho_max: f64,
    /// Minimum steel area rho_min*b*d (in^2)
    pub as_min_in2: f64,
    /// Maximum steel area rho_max*b*d (in^2)
    pub as_max_in2: f64,

    /// Required steel area, clamped into [As_min, As_max] (in^2)
    pub as_required_in2: f64,

    /// Chosen bar size
    pub bar: BarSize,
    /// Number of bars to provide the required area
    pub bar_count: u32,
    /// Area provided (in^2)
    pub provided_area_in2: f64,

    /// Concrete shear capacity Vc = 2*sqrt(fc)*b*d (kip)
    pub vc_kip: f64,
    /// Design concrete shear capacity phi*Vc (kip)
    pub phi_vc_kip: f64,
    /// Required steel shear contribution (kip); `None` when concrete alone
    /// carries the demand
    pub vs_kip: Option<f64>,
    /// Required stirrup spacing (in); `None` when no stirrups are required
    pub stirrup_spacing_in: Option<f64>,

    /// Intermediate quantities
    pub trace: CalcTrace,
}

impl SectionDesignResult {
    /// Whether the shear demand requires stirrups
    pub fn stirrups_required(&self) -> bool {
        self.stirrup_spacing_in.is_some()
    }
}

/// Run the conventional flexure/shear design.
pub fn calculate(
    input: &SectionDesignInput,
    criteria: &DesignCriteria,
) -> CalcResult<SectionDesignResult> {
    input.validate()?;

    let fc = input.concrete.fc_psi;
    let fy = input.steel.fy_psi();
    let b = input.width_in;
    let d = 0.9 * input.depth_in;
    let phi_flexure = criteria.phi_flexure;
    let phi_shear = criteria.phi_shear;

    // Moment to lb-in for the psi-unit flexure expressions
    let mu = input.mu_kipft * 12_000.0;

    let mut trace = CalcTrace::new();
    trace.record("d", d, "in");
    trace.record("Mu", mu, "lb-in");

    // Stress-block factor and reinforcement-ratio limits
    let beta1 = (0.85 - 0.05 * (fc - 4000.0) / 1000.0).clamp(0.65, 0.85);
    let rho_min = (3.0 * fc.sqrt() / fy).max(200.0 / fy);
    let rho_max = 0.75 * beta1 * (fc / fy) * (60_000.0 / fy);
    let as_min = rho_min * b * d;
    let as_max = rho_max * b * d;

    // Single-pass estimate of the compression block, then the steel area
    let a_block = (mu / (phi_flexure * 0.85 * fc * b)).sqrt();
    let lever_arm = d - a_block / 2.0;
    if mu > 0.0 && lever_arm <= 0.0 {
        return Err(CalcError::calculation_failed(
            "section_design",
            "compression block exceeds the effective depth; increase the section",
        ));
    }
    let as_unclamped = if mu > 0.0 {
        mu / (phi_flexure * fy * lever_arm)
    } else {
        0.0
    };
    trace.record("a_block", a_block, "in");
    trace.record("As_unclamped", as_unclamped, "in^2");

    let as_required = as_unclamped.clamp(as_min, as_max);
    let bar_count = input.tie_bar.count_for_area(as_required);

    // Shear: concrete capacity, then steel contribution if demanded
    let vc_lb = 2.0 * fc.sqrt() * b * d;
    let phi_vc_lb = phi_shear * vc_lb;
    let vu_lb = input.vu_kip * 1000.0;

    let (vs_kip, stirrup_spacing_in) = if vu_lb > phi_vc_lb {
        let vs_lb = (vu_lb - phi_vc_lb) / phi_shear;
        let spacing = phi_shear * 0.75 * fy * b * d / vs_lb;
        (Some(vs_lb / 1000.0), Some(spacing))
    } else {
        (None, None)
    };

    Ok(SectionDesignResult {
        effective_depth_in: d,
        beta1,
        rho_min,
        rho_max,
        as_min_in2: as_min,
        as_max_in2: as_max,
        as_required_in2: as_required,
        bar: input.tie_bar,
        bar_count,
        provided_area_in2: f64::from(bar_count) * input.tie_bar.area_in2(),
        vc_kip: vc_lb / 1000.0,
        phi_vc_kip: phi_vc_lb / 1000.0,
        vs_kip,
        stirrup_spacing_in,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-3;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON * b.abs().max(1.0)
    }

    fn example() -> SectionDesignInput {
        SectionDesignInput {
            label: "B-2".to_string(),
            concrete: Concrete::new(4000.0),
            steel: ReinforcingSteel::new(60.0),
            width_in: 18.0,
            depth_in: 24.0,
            mu_kipft: 150.0,
            vu_kip: 40.0,
            tie_bar: BarSize(8),
        }
    }

    #[test]
    fn test_flexural_design_example() {
        let result = calculate(&example(), &DesignCriteria::default()).unwrap();

        // d = 21.6; beta1 = 0.85 at 4000 psi
        assert!(approx_eq(result.effective_depth_in, 21.6));
        assert!(approx_eq(result.beta1, 0.85));

        // rho_min = max(3*sqrt(4000)/60000, 200/60000) = 0.003333
        assert!(approx_eq(result.rho_min, 0.0033333));
        assert!(approx_eq(result.as_min_in2, 1.296));
        assert!(approx_eq(result.as_max_in2, 16.524));

        // a = sqrt(1.8e6/(0.9*0.85*4000*18)) = 5.7166;
        // As = 1.8e6/(0.9*60000*(21.6 - 2.8583)) = 1.7786 in^2, unclamped
        assert!(approx_eq(result.as_required_in2, 1.77857));

        // 3 #8 bars
        assert_eq!(result.bar_count, 3);
        assert!(approx_eq(result.provided_area_in2, 2.35619));
    }

    #[test]
    fn test_beta1_steps_down_with_strength() {
        let criteria = DesignCriteria::default();

        let mut input = example();
        input.concrete.fc_psi = 5000.0;
        assert!(approx_eq(
            calculate(&input, &criteria).unwrap().beta1,
            0.80
        ));

        // Very high strength clamps at 0.65
        input.concrete.fc_psi = 9000.0;
        assert!(approx_eq(
            calculate(&input, &criteria).unwrap().beta1,
            0.65
        ));

        // Low strength clamps at 0.85
        input.concrete.fc_psi = 3000.0;
        assert!(approx_eq(
            calculate(&input, &criteria).unwrap().beta1,
            0.85
        ));
    }

    #[test]
    fn test_small_moment_clamps_to_minimum_steel() {
        let mut input = example();
        input.mu_kipft = 10.0;
        let result = calculate(&input, &DesignCriteria::default()).unwrap();
        assert!(approx_eq(result.as_required_in2, result.as_min_in2));
    }

    #[test]
    fn test_raising_fc_never_raises_steel() {
        // Above As_min, As decreases (or holds) as fc grows
        let criteria = DesignCriteria::default();
        let mut previous = f64::INFINITY;
        for fc in [4000.0, 5000.0, 6000.0, 7000.0] {
            let mut input = example();
            input.concrete.fc_psi = fc;
            let result = calculate(&input, &criteria).unwrap();
            assert!(result.as_required_in2 <= previous);
            previous = result.as_required_in2;
        }
    }

    #[test]
    fn test_shear_design_requires_stirrups() {
        let result = calculate(&example(), &DesignCriteria::default()).unwrap();

        // Vc = 2*sqrt(4000)*18*21.6 = 49.18 kip; phi*Vc = 36.88 < Vu = 40
        assert!(approx_eq(result.vc_kip, 49.1798));
        assert!(approx_eq(result.phi_vc_kip, 36.8848));
        assert!(result.stirrups_required());

        // Vs = (40 - 36.8848)/0.75 = 4.1536 kip
        assert!(approx_eq(result.vs_kip.unwrap(), 4.1536));
        assert!(approx_eq(result.stirrup_spacing_in.unwrap(), 3159.19));
    }

    #[test]
    fn test_no_stirrups_when_concrete_carries_shear() {
        let mut input = example();
        input.vu_kip = 30.0;
        let result = calculate(&input, &DesignCriteria::default()).unwrap();
        assert!(!result.stirrups_required());
        assert!(result.vs_kip.is_none());
        assert!(result.stirrup_spacing_in.is_none());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let criteria = DesignCriteria::default();

        let mut input = example();
        input.width_in = 0.0;
        assert!(calculate(&input, &criteria).is_err());

        let mut input = example();
        input.mu_kipft = -1.0;
        assert!(calculate(&input, &criteria).is_err());

        let mut input = example();
        input.concrete.fc_psi = -4000.0;
        assert!(calculate(&input, &criteria).is_err());
    }

    #[test]
    fn test_idempotent() {
        let criteria = DesignCriteria::default();
        let a = calculate(&example(), &criteria).unwrap();
        let b = calculate(&example(), &criteria).unwrap();
        assert_eq!(a.as_required_in2, b.as_required_in2);
        assert_eq!(a.stirrup_spacing_in, b.stirrup_spacing_in);
    }
}
