//! Simply-Supported Beam Statics
//!
//! Shear and moment functions for a simply-supported span under factored
//! loads, by superposition. The transfer-beam engine only ever needs a
//! single point load plus an optional uniform line load (self-weight on the
//! slender path), so those are the two load shapes modeled.
//!
//! ## Sign Convention
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//!
//! ## Example
//! ```rust
//! use transfer_core::calculations::beam_statics::{BeamStatics, StaticLoad};
//!
//! // 20 ft span, 108 kip point load at 8 ft, 1.8 klf line load
//! let mut statics = BeamStatics::new(20.0);
//! statics.add_load(StaticLoad::point(108.0, 8.0));
//! statics.add_load(StaticLoad::uniform(1.8));
//!
//! let results = statics.analyze();
//! println!("R1 = {:.2} kip", results.reaction_left_kip);
//! println!("Max moment: {:.1} kip-ft", results.max_moment_kipft);
//! ```

use serde::{Deserialize, Serialize};

/// A single factored load applied to the span
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StaticLoad {
    /// Point load (kip) at position (ft from left support)
    Point { magnitude_kip: f64, position_ft: f64 },

    /// Uniform load (klf) over the entire span
    Uniform { magnitude_klf: f64 },
}

impl StaticLoad {
    /// Create a point load
    pub fn point(magnitude_kip: f64, position_ft: f64) -> Self {
        StaticLoad::Point {
            magnitude_kip,
            position_ft,
        }
    }

    /// Create a full-span uniform load
    pub fn uniform(magnitude_klf: f64) -> Self {
        StaticLoad::Uniform { magnitude_klf }
    }

    /// Left reaction (R1) for this load
    pub fn reaction_left(&self, span_ft: f64) -> f64 {
        match self {
            StaticLoad::Point {
                magnitude_kip,
                position_ft,
            } => {
                // R1 = P(L-a)/L
                magnitude_kip * (span_ft - position_ft) / span_ft
            }
            StaticLoad::Uniform { magnitude_klf } => {
                // R1 = wL/2
                magnitude_klf * span_ft / 2.0
            }
        }
    }

    /// Right reaction (R2) for this load
    pub fn reaction_right(&self, span_ft: f64) -> f64 {
        match self {
            StaticLoad::Point {
                magnitude_kip,
                position_ft,
            } => {
                // R2 = Pa/L
                magnitude_kip * position_ft / span_ft
            }
            StaticLoad::Uniform { magnitude_klf } => magnitude_klf * span_ft / 2.0,
        }
    }

    /// Shear at position x (ft from left support)
    pub fn shear_at(&self, x_ft: f64, span_ft: f64) -> f64 {
        let r1 = self.reaction_left(span_ft);

        match self {
            StaticLoad::Point {
                magnitude_kip,
                position_ft,
            } => {
                if x_ft < *position_ft {
                    r1
                } else {
                    r1 - magnitude_kip
                }
            }
            StaticLoad::Uniform { magnitude_klf } => {
                // V(x) = R1 - wx
                r1 - magnitude_klf * x_ft
            }
        }
    }

    /// Moment at position x (ft from left support), in kip-ft
    pub fn moment_at(&self, x_ft: f64, span_ft: f64) -> f64 {
        let r1 = self.reaction_left(span_ft);

        match self {
            StaticLoad::Point {
                magnitude_kip,
                position_ft,
            } => {
                if x_ft < *position_ft {
                    // M(x) = R1 * x
                    r1 * x_ft
                } else {
                    // M(x) = R1 * x - P(x - a)
                    r1 * x_ft - magnitude_kip * (x_ft - position_ft)
                }
            }
            StaticLoad::Uniform { magnitude_klf } => {
                // M(x) = R1*x - w*x^2/2 = wx(L-x)/2
                r1 * x_ft - magnitude_klf * x_ft * x_ft / 2.0
            }
        }
    }
}

/// Results from the statics pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticsResults {
    /// Left support reaction (kip) - positive upward
    pub reaction_left_kip: f64,
    /// Right support reaction (kip) - positive upward
    pub reaction_right_kip: f64,

    /// Maximum positive moment (kip-ft)
    pub max_moment_kipft: f64,
    /// Position of maximum moment (ft from left)
    pub max_moment_position_ft: f64,

    /// Maximum shear magnitude (kip)
    pub max_shear_kip: f64,
    /// Position of maximum shear (ft from left)
    pub max_shear_position_ft: f64,

    /// Sampled shear values along the beam for plotting
    pub shear_diagram: Vec<(f64, f64)>,
    /// Sampled moment values along the beam for plotting
    pub moment_diagram: Vec<(f64, f64)>,
}

/// Beam statics with superposition of multiple loads
#[derive(Debug, Clone)]
pub struct BeamStatics {
    /// Span length (ft)
    pub span_ft: f64,
    /// Collection of loads to analyze
    pub loads: Vec<StaticLoad>,
    /// Number of sample points for diagrams
    pub sample_points: usize,
}

impl BeamStatics {
    /// Create a new statics pass
    pub fn new(span_ft: f64) -> Self {
        BeamStatics {
            span_ft,
            loads: Vec::new(),
            sample_points: 101, // Default: 101 points (every 1% of span)
        }
    }

    /// Add a load
    pub fn add_load(&mut self, load: StaticLoad) {
        self.loads.push(load);
    }

    /// Set the number of sample points for diagrams
    pub fn with_sample_points(mut self, points: usize) -> Self {
        self.sample_points = points.max(11); // Minimum 11 points
        self
    }

    /// Total left reaction
    pub fn total_reaction_left(&self) -> f64 {
        self.loads
            .iter()
            .map(|load| load.reaction_left(self.span_ft))
            .sum()
    }

    /// Total right reaction
    pub fn total_reaction_right(&self) -> f64 {
        self.loads
            .iter()
            .map(|load| load.reaction_right(self.span_ft))
            .sum()
    }

    /// Total shear at position x (superposition)
    pub fn shear_at(&self, x_ft: f64) -> f64 {
        self.loads
            .iter()
            .map(|load| load.shear_at(x_ft, self.span_ft))
            .sum()
    }

    /// Total moment at position x (superposition)
    pub fn moment_at(&self, x_ft: f64) -> f64 {
        self.loads
            .iter()
            .map(|load| load.moment_at(x_ft, self.span_ft))
            .sum()
    }

    /// Sample positions including points straddling each load discontinuity
    fn sample_positions(&self) -> Vec<f64> {
        let mut positions: Vec<f64> = Vec::new();

        for i in 0..self.sample_points {
            let x = self.span_ft * i as f64 / (self.sample_points - 1) as f64;
            positions.push(x);
        }

        // Straddle the shear step at each point load
        let epsilon = self.span_ft * 0.001;
        for load in &self.loads {
            if let StaticLoad::Point { position_ft, .. } = load {
                let pos = *position_ft;
                if pos > epsilon && pos < self.span_ft - epsilon {
                    positions.push(pos - epsilon);
                    positions.push(pos);
                    positions.push(pos + epsilon);
                }
            }
        }

        positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
        positions.dedup_by(|a, b| (*a - *b).abs() < epsilon / 2.0);

        positions
    }

    /// Perform the statics pass
    pub fn analyze(&self) -> StaticsResults {
        let positions = self.sample_positions();

        let mut shear_diagram: Vec<(f64, f64)> = Vec::new();
        let mut moment_diagram: Vec<(f64, f64)> = Vec::new();

        let mut max_shear = 0.0f64;
        let mut max_shear_pos = 0.0;
        let mut max_moment = 0.0f64;
        let mut max_moment_pos = 0.0;

        for &x in &positions {
            let v = self.shear_at(x);
            let m = self.moment_at(x);

            shear_diagram.push((x, v));
            moment_diagram.push((x, m));

            // Track maximums (absolute value for shear, positive for moment)
            if v.abs() > max_shear {
                max_shear = v.abs();
                max_shear_pos = x;
            }
            if m > max_moment {
                max_moment = m;
                max_moment_pos = x;
            }
        }

        StaticsResults {
            reaction_left_kip: self.total_reaction_left(),
            reaction_right_kip: self.total_reaction_right(),
            max_moment_kipft: max_moment,
            max_moment_position_ft: max_moment_pos,
            max_shear_kip: max_shear,
            max_shear_position_ft: max_shear_pos,
            shear_diagram,
            moment_diagram,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01; // 1% tolerance for tests

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    #[test]
    fn test_point_load_reactions() {
        // 20 ft beam, 147.6 kip at 8 ft
        let load = StaticLoad::point(147.6, 8.0);
        let r1 = load.reaction_left(20.0);
        let r2 = load.reaction_right(20.0);

        // R1 = P(L-a)/L = 147.6 * 12/20 = 88.56
        // R2 = Pa/L = 147.6 * 8/20 = 59.04
        assert!(approx_eq(r1, 88.56, EPSILON));
        assert!(approx_eq(r2, 59.04, EPSILON));
        assert!(approx_eq(r1 + r2, 147.6, EPSILON));
    }

    #[test]
    fn test_point_load_moment() {
        // 20 ft beam, 100 kip at midspan: M_max = PL/4 = 500 kip-ft
        let load = StaticLoad::point(100.0, 10.0);
        assert!(approx_eq(load.moment_at(10.0, 20.0), 500.0, EPSILON));
    }

    #[test]
    fn test_uniform_load_moment() {
        // 20 ft beam, 1.5 klf: M_max = wL^2/8 = 75 kip-ft
        let load = StaticLoad::uniform(1.5);
        assert!(approx_eq(load.moment_at(10.0, 20.0), 75.0, EPSILON));
    }

    #[test]
    fn test_uniform_load_shear() {
        // 20 ft beam, 1.5 klf
        let load = StaticLoad::uniform(1.5);
        assert!(approx_eq(load.shear_at(0.0, 20.0), 15.0, EPSILON));
        assert!(approx_eq(load.shear_at(10.0, 20.0), 0.0, 0.01));
        assert!(approx_eq(load.shear_at(20.0, 20.0), -15.0, EPSILON));
    }

    #[test]
    fn test_shear_steps_down_at_point_load() {
        let load = StaticLoad::point(108.0, 8.0);
        let before = load.shear_at(7.999, 20.0);
        let after = load.shear_at(8.0, 20.0);
        assert!(approx_eq(before - after, 108.0, EPSILON));
    }

    #[test]
    fn test_superposition() {
        // 20 ft beam: 108 kip point at 8 ft plus 1.8 klf line load
        let mut statics = BeamStatics::new(20.0);
        statics.add_load(StaticLoad::point(108.0, 8.0));
        statics.add_load(StaticLoad::uniform(1.8));

        // R1 = 108*12/20 + 1.8*20/2 = 64.8 + 18 = 82.8
        // R2 = 108*8/20 + 18 = 43.2 + 18 = 61.2
        assert!(approx_eq(statics.total_reaction_left(), 82.8, EPSILON));
        assert!(approx_eq(statics.total_reaction_right(), 61.2, EPSILON));

        // M at the load: R1*a - w*a^2/2 = 82.8*8 - 1.8*32 = 604.8
        assert!(approx_eq(statics.moment_at(8.0), 604.8, EPSILON));
    }

    #[test]
    fn test_analysis_results() {
        let mut statics = BeamStatics::new(20.0);
        statics.add_load(StaticLoad::point(108.0, 8.0));
        statics.add_load(StaticLoad::uniform(1.8));

        let results = statics.analyze();

        assert!(approx_eq(results.reaction_left_kip, 82.8, EPSILON));
        assert!(approx_eq(results.reaction_right_kip, 61.2, EPSILON));

        // Peak moment occurs at the point load for this configuration
        assert!(approx_eq(results.max_moment_kipft, 604.8, EPSILON));
        assert!(approx_eq(results.max_moment_position_ft, 8.0, 0.01));

        // Peak shear at the left support
        assert!(approx_eq(results.max_shear_kip, 82.8, EPSILON));

        assert!(!results.shear_diagram.is_empty());
        assert!(!results.moment_diagram.is_empty());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let mut statics = BeamStatics::new(20.0);
        statics.add_load(StaticLoad::point(147.6, 8.0));

        let a = statics.analyze();
        let b = statics.analyze();
        assert_eq!(a.shear_diagram, b.shear_diagram);
        assert_eq!(a.moment_diagram, b.moment_diagram);
    }
}
