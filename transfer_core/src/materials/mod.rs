//! # Materials
//!
//! Material definitions for reinforced-concrete design: concrete by
//! compressive strength, reinforcing steel by yield strength, and deformed
//! bar sizes by their eighth-inch designation.
//!
//! ## Example
//!
//! ```rust
//! use transfer_core::materials::{BarSize, Concrete, ReinforcingSteel};
//!
//! let concrete = Concrete { fc_psi: 4000.0 };
//! let steel = ReinforcingSteel { fy_ksi: 60.0 };
//! let tie = BarSize(8);
//!
//! // Effective strength of a bottle-shaped strut: 0.85 * 0.75 * fc
//! assert!((concrete.effective_strength(0.75) - 2550.0).abs() < 1e-9);
//! assert!((tie.area_in2() - 0.7853981633974483).abs() < 1e-12);
//! ```

pub mod rebar;

pub use rebar::{BarSize, SKIN_BAR_SIZES, STIRRUP_LEG_OPTIONS, STIRRUP_SIZES, TIE_BAR_SIZES};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete defined by its specified compressive strength.
///
/// In practice `fc` is drawn from the standard mix strengths (4000, 5000,
/// 6000, 7000 psi); the engine accepts any positive value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Concrete {
    /// Specified compressive strength f'c (psi)
    pub fc_psi: f64,
}

impl Concrete {
    pub fn new(fc_psi: f64) -> Self {
        Concrete { fc_psi }
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.fc_psi <= 0.0 {
            return Err(CalcError::invalid_input(
                "fc_psi",
                self.fc_psi.to_string(),
                "Concrete compressive strength must be positive",
            ));
        }
        Ok(())
    }

    /// Effective compressive strength `fce = 0.85 * beta * fc` (psi) for a
    /// strut or nodal zone with the given effectiveness coefficient.
    pub fn effective_strength(&self, beta: f64) -> f64 {
        0.85 * beta * self.fc_psi
    }

    /// `sqrt(f'c)` in psi, as it appears in shear-capacity expressions.
    pub fn sqrt_fc(&self) -> f64 {
        self.fc_psi.sqrt()
    }
}

/// Reinforcing steel defined by its yield strength.
///
/// Grade 60, 70, and 80 bars are the common choices; the engine accepts any
/// positive value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcingSteel {
    /// Yield strength fy (ksi)
    pub fy_ksi: f64,
}

impl ReinforcingSteel {
    pub fn new(fy_ksi: f64) -> Self {
        ReinforcingSteel { fy_ksi }
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.fy_ksi <= 0.0 {
            return Err(CalcError::invalid_input(
                "fy_ksi",
                self.fy_ksi.to_string(),
                "Reinforcement yield strength must be positive",
            ));
        }
        Ok(())
    }

    /// Yield strength in psi, for expressions written in lb/psi units.
    pub fn fy_psi(&self) -> f64 {
        self.fy_ksi * 1000.0
    }
}
