//! Deformed reinforcing bar sizes
//!
//! US bar designations are eighths of an inch of nominal diameter: a #8 bar
//! is 1 in across. Area follows directly from the designation,
//! `A = pi/4 * (n/8)^2`.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::errors::{CalcError, CalcResult};

/// Bar designations offered for tension-tie reinforcement
pub const TIE_BAR_SIZES: [u8; 9] = [4, 5, 6, 7, 8, 9, 10, 11, 14];

/// Bar designations offered for stirrups
pub const STIRRUP_SIZES: [u8; 3] = [4, 5, 6];

/// Bar designations offered for skin (side-face) reinforcement
pub const SKIN_BAR_SIZES: [u8; 5] = [4, 5, 6, 7, 8];

/// Stirrup leg counts offered
pub const STIRRUP_LEG_OPTIONS: [u32; 3] = [2, 4, 6];

/// A deformed bar size by its eighth-inch designation.
///
/// # Example
/// ```
/// use transfer_core::materials::BarSize;
///
/// let bar = BarSize(8);
/// assert_eq!(bar.diameter_in(), 1.0);
/// assert_eq!(bar.to_string(), "#8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarSize(pub u8);

impl BarSize {
    pub fn new(designation: u8) -> Self {
        BarSize(designation)
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.0 == 0 {
            return Err(CalcError::invalid_input(
                "bar_size",
                self.0.to_string(),
                "Bar designation must be positive",
            ));
        }
        Ok(())
    }

    /// Nominal diameter (in)
    pub fn diameter_in(&self) -> f64 {
        f64::from(self.0) / 8.0
    }

    /// Nominal cross-sectional area (in^2)
    pub fn area_in2(&self) -> f64 {
        let d = self.diameter_in();
        PI / 4.0 * d * d
    }

    /// Number of bars needed to provide the required area
    pub fn count_for_area(&self, required_in2: f64) -> u32 {
        (required_in2 / self.area_in2()).ceil() as u32
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_area() {
        // #8 bar: 1 in diameter, pi/4 in^2
        let bar = BarSize(8);
        assert!((bar.area_in2() - PI / 4.0).abs() < 1e-12);

        // #5 bar: 0.625 in diameter
        let bar = BarSize(5);
        assert!((bar.area_in2() - 0.3067961575771282).abs() < 1e-12);
    }

    #[test]
    fn test_count_for_area() {
        let bar = BarSize(8);
        // 3.4352 in^2 required / 0.7854 per bar = 4.37 -> 5 bars
        assert_eq!(bar.count_for_area(3.4352), 5);
        // Exact multiple stays exact
        assert_eq!(bar.count_for_area(bar.area_in2() * 3.0), 3);
    }

    #[test]
    fn test_validate() {
        assert!(BarSize(8).validate().is_ok());
        assert!(BarSize(0).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let bar = BarSize(11);
        let json = serde_json::to_string(&bar).unwrap();
        assert_eq!(json, "11");
        let roundtrip: BarSize = serde_json::from_str(&json).unwrap();
        assert_eq!(bar, roundtrip);
    }
}
