//! LRFD Load Combinations
//!
//! The transfer-beam engine evaluates exactly the two strength-design gravity
//! combinations that can govern a dead-plus-live point load:
//! `1.4D` and `1.2D + 1.6L`. Enumerating the remaining ASCE 7 combinations is
//! deliberately out of scope.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::load_types::LoadType;

/// A collection of unfactored load magnitudes for one scenario.
///
/// # Example
/// ```
/// use transfer_core::loads::{LoadCase, LoadType};
///
/// let case = LoadCase::new("Transfer column")
///     .with_load(LoadType::Dead, 83.0)
///     .with_load(LoadType::Live, 30.0);
///
/// assert_eq!(case.get(LoadType::Dead), 83.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCase {
    /// User label for this case
    pub label: String,

    /// Unfactored magnitudes keyed by load type (kip)
    pub loads: HashMap<LoadType, f64>,
}

impl LoadCase {
    /// Create an empty load case
    pub fn new(label: impl Into<String>) -> Self {
        LoadCase {
            label: label.into(),
            loads: HashMap::new(),
        }
    }

    /// Add a load magnitude (builder pattern)
    pub fn with_load(mut self, load_type: LoadType, magnitude: f64) -> Self {
        self.loads.insert(load_type, magnitude);
        self
    }

    /// Get the magnitude for a load type (0.0 if absent)
    pub fn get(&self, load_type: LoadType) -> f64 {
        self.loads.get(&load_type).copied().unwrap_or(0.0)
    }
}

/// A load combination with factors for each load type.
///
/// # Example
/// ```
/// use transfer_core::loads::{LoadCombination, LoadCase, LoadType};
///
/// let combo = LoadCombination::new("LRFD-2", "1.2D + 1.6L")
///     .with_factor(LoadType::Dead, 1.2)
///     .with_factor(LoadType::Live, 1.6);
///
/// let case = LoadCase::new("Transfer column")
///     .with_load(LoadType::Dead, 83.0)
///     .with_load(LoadType::Live, 30.0);
///
/// assert!((combo.apply(&case) - 147.6).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "LRFD-1")
    pub name: String,

    /// Human-readable equation for display (e.g., "1.2D + 1.6L")
    pub equation: String,

    /// Load factors keyed by load type
    pub factors: HashMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: HashMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Apply this combination to a LoadCase, returning the total factored load.
    ///
    /// Load types not in the combination are treated as having factor 0.
    /// Load types in the combination but not in the case are treated as 0 load.
    pub fn apply(&self, case: &LoadCase) -> f64 {
        self.factors
            .iter()
            .map(|(load_type, factor)| factor * case.get(*load_type))
            .sum()
    }

    /// Get the factor for a specific load type (0.0 if not in combination)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }
}

/// The two LRFD gravity combinations evaluated by the engine.
pub fn lrfd_gravity_combinations() -> Vec<LoadCombination> {
    vec![
        // 1. 1.4D
        LoadCombination::new("LRFD-1", "1.4D").with_factor(LoadType::Dead, 1.4),
        // 2. 1.2D + 1.6L
        LoadCombination::new("LRFD-2", "1.2D + 1.6L")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Live, 1.6),
    ]
}

/// Apply every combination to the case and return the one producing the
/// largest factored load, with that load.
pub fn find_governing_combination<'a>(
    case: &LoadCase,
    combinations: &'a [LoadCombination],
) -> Option<(&'a LoadCombination, f64)> {
    combinations
        .iter()
        .map(|combo| (combo, combo.apply(case)))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(dead: f64, live: f64) -> LoadCase {
        LoadCase::new("test")
            .with_load(LoadType::Dead, dead)
            .with_load(LoadType::Live, live)
    }

    #[test]
    fn test_live_heavy_case_governs_lrfd_2() {
        let combos = lrfd_gravity_combinations();
        let (combo, pu) = find_governing_combination(&case(83.0, 30.0), &combos).unwrap();
        assert_eq!(combo.name, "LRFD-2");
        assert!((pu - 147.6).abs() < 1e-9);
    }

    #[test]
    fn test_dead_only_case_governs_lrfd_1() {
        // With no live load, 1.4D > 1.2D
        let combos = lrfd_gravity_combinations();
        let (combo, pu) = find_governing_combination(&case(100.0, 0.0), &combos).unwrap();
        assert_eq!(combo.name, "LRFD-1");
        assert!((pu - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_crossover_at_live_equal_dead_over_eight() {
        // 1.4D == 1.2D + 1.6L exactly when L = D/8
        let combos = lrfd_gravity_combinations();
        let (_, pu) = find_governing_combination(&case(80.0, 10.0), &combos).unwrap();
        assert!((pu - 112.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_load_type_is_zero() {
        let combos = lrfd_gravity_combinations();
        let case = LoadCase::new("dead only").with_load(LoadType::Dead, 50.0);
        let (_, pu) = find_governing_combination(&case, &combos).unwrap();
        assert!((pu - 70.0).abs() < 1e-9);
    }
}
