//! # Strut-and-Tie Deep Beam Design
//!
//! Capacity of a simply-supported deep transfer beam with a single point
//! load per ACI 318-14 Chapter 23. The beam is idealized as a three-node
//! truss: CCT nodes A and B over the supports joined by the horizontal
//! tension tie, and a CCC node C under the load where the two diagonal
//! compression struts meet.
//!
//! Every step is closed-form; there is no iteration. The pipeline is:
//!
//! 1. Factor the loads and take reactions from statics
//! 2. Solve strut/tie lengths and forces from the truss geometry
//! 3. Check strut inclinations against the code minimum (finding, not error)
//! 4. Reduce concrete strengths per strut shape and node type
//! 5. Size the nodal zones from force over effective strength; node C's
//!    zone is a triangle solved by Heron's formula
//! 6. Take the governing node capacity as the beam's shear strength
//! 7. Size the tension tie and deep-beam web reinforcement
//!
//! ## Example
//!
//! ```rust
//! use transfer_core::calculations::strut_and_tie::{calculate, StrutTieInput};
//! use transfer_core::criteria::DesignCriteria;
//! use transfer_core::geometry::BeamGeometry;
//! use transfer_core::materials::{BarSize, Concrete, ReinforcingSteel};
//!
//! let input = StrutTieInput {
//!     label: "TB-1".to_string(),
//!     geometry: BeamGeometry::new(20.0, 8.0, 60.0, 24.0),
//!     concrete: Concrete::new(4000.0),
//!     steel: ReinforcingSteel::new(60.0),
//!     dead_load_kip: 50.0,
//!     live_load_kip: 30.0,
//!     tie_bar: BarSize(8),
//!     stirrup_bar: BarSize(5),
//!     stirrup_legs: 2,
//!     skin_bar: BarSize(5),
//! };
//!
//! let result = calculate(&input, &DesignCriteria::default()).unwrap();
//! println!("phi Vn = {:.1} kip, {} ties", result.phi_vn_kip, result.tie.bar_count);
//! ```

use serde::{Deserialize, Serialize};

use crate::criteria::DesignCriteria;
use crate::diagnostics::CalcTrace;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::BeamGeometry;
use crate::loads::factoring::{factor_loads, Reactions};
use crate::materials::{BarSize, Concrete, ReinforcingSteel};

/// Input parameters for strut-and-tie design of a deep transfer beam.
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
///   "concrete": { "fc_psi": 4000.0 },
///   "steel": { "fy_ksi": 60.0 },
///   "dead_load_kip": 50.0,
///   "live_load_kip": 30.0,
///   "tie_bar": 8,
///   "stirrup_bar": 5,
///   "stirrup_legs": 2,
///   "skin_bar": 5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrutTieInput {
    /// User label for this beam
    pub label: String,

    /// Beam geometry
    pub geometry: BeamGeometry,

    /// Concrete material
    pub concrete: Concrete,

    /// Reinforcing steel
    pub steel: ReinforcingSteel,

    /// Unfactored dead transfer force (kip), excluding self-weight
    pub dead_load_kip: f64,

    /// Unfactored live transfer force (kip)
    pub live_load_kip: f64,

    /// Bar size for the tension tie
    pub tie_bar: BarSize,

    /// Bar size for vertical stirrups
    pub stirrup_bar: BarSize,

    /// Legs per stirrup set (2, 4, or 6)
    pub stirrup_legs: u32,

    /// Bar size for horizontal skin reinforcement
    pub skin_bar: BarSize,
}

impl StrutTieInput {
    /// Validate input parameters.
    pub fn validate(&self, criteria: &DesignCriteria) -> CalcResult<()> {
        self.geometry.validate()?;
        self.concrete.validate()?;
        self.steel.validate()?;
        self.tie_bar.validate()?;
        self.stirrup_bar.validate()?;
        self.skin_bar.validate()?;

        if self.stirrup_legs < 2 || self.stirrup_legs % 2 != 0 {
            return Err(CalcError::invalid_input(
                "stirrup_legs",
                self.stirrup_legs.to_string(),
                "Stirrup legs must be an even count of at least 2",
            ));
        }
        if self.geometry.effective_depth_in(criteria) <= 0.0 {
            return Err(CalcError::invalid_input(
                "depth_in",
                self.geometry.depth_in.to_string(),
                "Depth must exceed the node cover",
            ));
        }
        Ok(())
    }
}

/// One diagonal compression strut of the truss idealization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Strut {
    /// Length between node centroids (in)
    pub length_in: f64,
    /// Compression force (kip)
    pub force_kip: f64,
    /// Inclination above the horizontal tie (degrees)
    pub angle_deg: f64,
    /// Effective concrete strength of the bottle-shaped strut (psi)
    pub fce_psi: f64,
}

/// Nodal zone at a support (CCT: two struts and the tie).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SupportNodeZone {
    /// Governing effective concrete strength at the node (psi)
    pub fce_psi: f64,
    /// Vertical face width resisting the tie force (in)
    pub tie_face_in: f64,
    /// Horizontal face width resisting the bearing reaction (in)
    pub bearing_face_in: f64,
    /// Diagonal face width resisting the strut (in)
    pub strut_face_in: f64,
    /// Nominal shear capacity contributed by this node (kip)
    pub capacity_kip: f64,
}

/// Nodal zone under the load point (CCC: bearing plus two struts).
///
/// The zone is a triangle whose sides are proportional to the bearing force
/// and the two strut forces; its height comes from Heron's formula.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoadNodeZone {
    /// Governing effective concrete strength at the node (psi)
    pub fce_psi: f64,
    /// Horizontal bearing face width (in)
    pub bearing_face_in: f64,
    /// Diagonal face width toward node A (in)
    pub strut_face_1_in: f64,
    /// Diagonal face width toward node B (in)
    pub strut_face_2_in: f64,
    /// Vertical extent of the triangular zone (in)
    pub height_in: f64,
    /// Centroid depth of the zone, height/3 (in)
    pub centroid_in: f64,
    /// Nominal shear capacity contributed by this node (kip)
    pub capacity_kip: f64,
}

/// Tension tie sizing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TieDesign {
    /// Tie force (kip)
    pub force_kip: f64,
    /// Required steel area (in^2)
    pub required_area_in2: f64,
    /// Chosen bar size
    pub bar: BarSize,
    /// Number of bars provided
    pub bar_count: u32,
    /// Area provided (in^2)
    pub provided_area_in2: f64,
}

/// Distributed web reinforcement across the struts (ACI 9.9.3.1).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WebReinforcement {
    /// Spacing cap, min(d/5, 12 in), rounded to the nearest inch
    pub max_spacing_in: f64,
    /// Vertical stirrup bar
    pub stirrup_bar: BarSize,
    /// Legs per stirrup set
    pub stirrup_legs: u32,
    /// Required vertical stirrup spacing (in)
    pub stirrup_spacing_in: f64,
    /// Horizontal skin bar (one each face per layer)
    pub skin_bar: BarSize,
    /// Required horizontal skin bar spacing (in)
    pub skin_spacing_in: f64,
}

/// A code-compliance problem that does not stop the computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum ComplianceFinding {
    /// A strut meets the tie at less than the code-minimum angle
    StrutAngleBelowMinimum {
        strut: String,
        angle_deg: f64,
        minimum_deg: f64,
    },
    /// The governing reaction exceeds the section's maximum-shear ceiling
    ShearExceedsCeiling { demand_kip: f64, ceiling_kip: f64 },
}

impl ComplianceFinding {
    /// Human-readable description of the finding
    pub fn message(&self) -> String {
        match self {
            ComplianceFinding::StrutAngleBelowMinimum {
                strut,
                angle_deg,
                minimum_deg,
            } => format!(
                "Strut {} meets the tie at {:.1} deg, below the {:.0} deg minimum",
                strut, angle_deg, minimum_deg
            ),
            ComplianceFinding::ShearExceedsCeiling {
                demand_kip,
                ceiling_kip,
            } => format!(
                "Shear demand {:.1} kip exceeds the section ceiling {:.1} kip",
                demand_kip, ceiling_kip
            ),
        }
    }
}

/// Results from strut-and-tie design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrutTieResult {
    /// Factored point load with self-weight folded in (kip)
    pub pu_kip: f64,
    /// Reaction at support A (kip)
    pub r1_kip: f64,
    /// Reaction at support B (kip)
    pub r2_kip: f64,
    /// Effective depth to the tie centroid, h - cover (in)
    pub effective_depth_in: f64,

    /// Diagonal strut from node A to node C
    pub strut_ac: Strut,
    /// Diagonal strut from node B to node C
    pub strut_bc: Strut,
    /// Horizontal tie length between support node centroids (in)
    pub tie_length_in: f64,

    /// Nodal zone at support A (CCT)
    pub node_a: SupportNodeZone,
    /// Nodal zone at support B (CCT)
    pub node_b: SupportNodeZone,
    /// Nodal zone at the load point (CCC)
    pub node_c: LoadNodeZone,

    /// Governing design shear capacity, phi * min node capacity (kip)
    pub phi_vn_kip: f64,
    /// Section maximum-shear ceiling, 0.75 * 10 * sqrt(fc) * b * d (kip)
    pub phi_vn_max_kip: f64,

    /// Tension tie sizing
    pub tie: TieDesign,
    /// Deep-beam web reinforcement
    pub web_reinforcement: WebReinforcement,

    /// Compliance findings (empty when fully compliant)
    pub findings: Vec<ComplianceFinding>,
    /// True when both strut angles meet the code minimum
    pub angle_compliance: bool,
    /// True when the governing reaction is within the shear ceiling
    pub shear_ceiling_compliance: bool,

    /// Intermediate quantities
    pub trace: CalcTrace,
}

/// Height of a nodal-zone triangle from its three side lengths.
///
/// Heron's formula on semi-perimeter `s`: `Area = sqrt(s(s-p)(s-q)(s-r))`,
/// `height = 2*Area/base`. The triangle inequality is checked first; strut
/// forces too disproportionate to close a triangle are a geometry error.
fn nodal_triangle_height(base_in: f64, side_1_in: f64, side_2_in: f64) -> CalcResult<f64> {
    if side_1_in + side_2_in <= base_in
        || base_in + side_1_in <= side_2_in
        || base_in + side_2_in <= side_1_in
    {
        return Err(CalcError::nodal_geometry(
            "C",
            format!(
                "sides {:.2}/{:.2}/{:.2} in violate the triangle inequality",
                base_in, side_1_in, side_2_in
            ),
        ));
    }
    let s = (base_in + side_1_in + side_2_in) / 2.0;
    let area = (s * (s - base_in) * (s - side_1_in) * (s - side_2_in)).sqrt();
    Ok(2.0 * area / base_in)
}

/// Run the strut-and-tie design.
pub fn calculate(input: &StrutTieInput, criteria: &DesignCriteria) -> CalcResult<StrutTieResult> {
    input.validate(criteria)?;

    let geometry = &input.geometry;
    let b = geometry.width_in;
    let phi = criteria.phi_stm;

    // Factored load and reactions
    let factored = factor_loads(geometry, input.dead_load_kip, input.live_load_kip, criteria)?;
    let pu = factored.pu_kip;
    let reactions = Reactions::for_point_load(pu, geometry);
    let (r1, r2) = (reactions.r1_kip, reactions.r2_kip);

    let mut trace = CalcTrace::new();
    trace.record("sw", factored.self_weight_kip, "kip");
    trace.record("Pu", pu, "kip");
    trace.record("r1", r1, "kip");
    trace.record("r2", r2, "kip");

    // Truss geometry between node centroids
    let d = geometry.effective_depth_in(criteria);
    let a_in = geometry.shear_span_in();
    let b1_in = geometry.span_remainder_in();

    let l_ac = (a_in * a_in + d * d).sqrt();
    let l_bc = (b1_in * b1_in + d * d).sqrt();
    let tie_length_in = a_in + b1_in;

    // Member forces from the truss idealization
    let f_ac = r1 * l_ac / d;
    let f_bc = r2 * l_bc / d;
    let f_ab = r1 * a_in / d;
    trace.record("F_ac", f_ac, "kip");
    trace.record("F_bc", f_bc, "kip");
    trace.record("F_ab", f_ab, "kip");

    // Strut inclinations above the tie
    let alpha_1 = (d / a_in).atan();
    let alpha_2 = (d / b1_in).atan();
    let alpha_1_deg = alpha_1.to_degrees();
    let alpha_2_deg = alpha_2.to_degrees();

    let mut findings = Vec::new();
    for (name, angle_deg) in [("A-C", alpha_1_deg), ("B-C", alpha_2_deg)] {
        if angle_deg < criteria.min_strut_angle_deg {
            findings.push(ComplianceFinding::StrutAngleBelowMinimum {
                strut: name.to_string(),
                angle_deg,
                minimum_deg: criteria.min_strut_angle_deg,
            });
        }
    }
    let angle_compliance = findings.is_empty();

    // Effective concrete strengths: bottle-shaped struts and node types,
    // each node governed by the weakest element framing into it
    let fce_strut = input.concrete.effective_strength(criteria.beta_strut);
    let fce_node_ccc = input.concrete.effective_strength(criteria.beta_node_ccc);
    let fce_node_cct = input.concrete.effective_strength(criteria.beta_node_cct);

    let fce_a = fce_node_cct.min(fce_strut);
    let fce_b = fce_node_cct.min(fce_strut);
    let fce_c = fce_node_ccc.min(fce_strut);
    trace.record("fce_a", fce_a, "psi");
    trace.record("fce_b", fce_b, "psi");
    trace.record("fce_c", fce_c, "psi");

    // Node C zone: triangle with the bearing face as base and the other two
    // sides proportional to the strut forces
    let bearing_face_c = pu * 1000.0 / (phi * fce_c * b);
    let strut_face_c1 = bearing_face_c * (f_ac / pu);
    let strut_face_c2 = bearing_face_c * (f_bc / pu);
    let height_c = nodal_triangle_height(bearing_face_c, strut_face_c1, strut_face_c2)?;
    trace.record("node_c_height", height_c, "in");

    // Nodes A and B: faces sized force over phi * fce * b, strut face by
    // Pythagorean combination
    let tie_face_a = f_ab * 1000.0 / (phi * fce_a * b);
    let bearing_face_a = r1 * 1000.0 / (phi * fce_a * b);
    let strut_face_a = (tie_face_a * tie_face_a + bearing_face_a * bearing_face_a).sqrt();

    let tie_face_b = f_ab * 1000.0 / (phi * fce_b * b);
    let bearing_face_b = r2 * 1000.0 / (phi * fce_b * b);
    let strut_face_b = (tie_face_b * tie_face_b + bearing_face_b * bearing_face_b).sqrt();

    // Nominal vertical capacities: strut-face area times effective strength,
    // resolved through the strut inclination
    let vn_a = strut_face_a * b * fce_a * alpha_1.sin() / 1000.0;
    let vn_b = strut_face_b * b * fce_b * alpha_2.sin() / 1000.0;
    let vn_c =
        strut_face_c1.min(strut_face_c2) * b * fce_c * alpha_1.min(alpha_2).sin() / 1000.0;
    trace.record("Vn_a", vn_a, "kip");
    trace.record("Vn_b", vn_b, "kip");
    trace.record("Vn_c", vn_c, "kip");

    let phi_vn_kip = phi * vn_a.min(vn_b).min(vn_c);

    // Beam-wide maximum shear per ACI Eq. 9.9.2.1
    let phi_vn_max_kip = phi * 10.0 * input.concrete.sqrt_fc() * b * d / 1000.0;
    let demand = reactions.max_kip();
    if demand > phi_vn_max_kip {
        findings.push(ComplianceFinding::ShearExceedsCeiling {
            demand_kip: demand,
            ceiling_kip: phi_vn_max_kip,
        });
    }
    let shear_ceiling_compliance = demand <= phi_vn_max_kip;

    // Tension tie
    let required_area_in2 = f_ab / (phi * input.steel.fy_ksi);
    let bar_count = input.tie_bar.count_for_area(required_area_in2);
    let tie = TieDesign {
        force_kip: f_ab,
        required_area_in2,
        bar: input.tie_bar,
        bar_count,
        provided_area_in2: f64::from(bar_count) * input.tie_bar.area_in2(),
    };

    // Distributed web reinforcement, 0.0025*b*s each way, spacing capped at
    // min(d/5, 12 in)
    let max_spacing_in = (d / 5.0).min(criteria.max_web_bar_spacing_in).round();
    let stirrup_area = f64::from(input.stirrup_legs) * input.stirrup_bar.area_in2();
    let stirrup_spacing_in =
        (stirrup_area / (criteria.web_reinforcement_ratio * b)).min(max_spacing_in);
    let skin_area = 2.0 * input.skin_bar.area_in2(); // one bar each face per layer
    let skin_spacing_in = (skin_area / (criteria.web_reinforcement_ratio * b)).min(max_spacing_in);

    let web_reinforcement = WebReinforcement {
        max_spacing_in,
        stirrup_bar: input.stirrup_bar,
        stirrup_legs: input.stirrup_legs,
        stirrup_spacing_in,
        skin_bar: input.skin_bar,
        skin_spacing_in,
    };

    Ok(StrutTieResult {
        pu_kip: pu,
        r1_kip: r1,
        r2_kip: r2,
        effective_depth_in: d,
        strut_ac: Strut {
            length_in: l_ac,
            force_kip: f_ac,
            angle_deg: alpha_1_deg,
            fce_psi: fce_strut,
        },
        strut_bc: Strut {
            length_in: l_bc,
            force_kip: f_bc,
            angle_deg: alpha_2_deg,
            fce_psi: fce_strut,
        },
        tie_length_in,
        node_a: SupportNodeZone {
            fce_psi: fce_a,
            tie_face_in: tie_face_a,
            bearing_face_in: bearing_face_a,
            strut_face_in: strut_face_a,
            capacity_kip: vn_a,
        },
        node_b: SupportNodeZone {
            fce_psi: fce_b,
            tie_face_in: tie_face_b,
            bearing_face_in: bearing_face_b,
            strut_face_in: strut_face_b,
            capacity_kip: vn_b,
        },
        node_c: LoadNodeZone {
            fce_psi: fce_c,
            bearing_face_in: bearing_face_c,
            strut_face_1_in: strut_face_c1,
            strut_face_2_in: strut_face_c2,
            height_in: height_c,
            centroid_in: height_c / 3.0,
            capacity_kip: vn_c,
        },
        phi_vn_kip,
        phi_vn_max_kip,
        tie,
        web_reinforcement,
        findings,
        angle_compliance,
        shear_ceiling_compliance,
        trace,
    })
}
