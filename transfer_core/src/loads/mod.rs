//! Load factoring for the transfer point load
//!
//! This module converts the unfactored dead/live transfer forces plus beam
//! self-weight into the governing factored design load.
//!
//! # Overview
//!
//! - [`LoadType`] - Dead and live load categories
//! - [`LoadCase`] - Unfactored magnitudes for one scenario
//! - [`LoadCombination`] - Factors for a code load combination
//! - [`factor_loads`] - The factoring engine producing [`FactoredLoads`]
//! - [`Reactions`] - Point-load support reactions from statics
//!
//! # Example
//!
//! ```
//! use transfer_core::loads::{LoadType, LoadCase, lrfd_gravity_combinations,
//!     find_governing_combination};
//!
//! let case = LoadCase::new("Transfer column")
//!     .with_load(LoadType::Dead, 83.0)
//!     .with_load(LoadType::Live, 30.0);
//!
//! let combos = lrfd_gravity_combinations();
//! let (combo, pu) = find_governing_combination(&case, &combos).unwrap();
//! assert_eq!(combo.name, "LRFD-2");
//! assert!((pu - 147.6).abs() < 1e-9);
//! ```

pub mod combinations;
pub mod factoring;
pub mod load_types;

pub use combinations::{
    find_governing_combination, lrfd_gravity_combinations, LoadCase, LoadCombination,
};
pub use factoring::{factor_loads, FactoredLoads, Reactions};
pub use load_types::LoadType;
