//! # Structural Calculations
//!
//! This module contains all transfer-beam calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, criteria) -> Result<*Result, CalcError>` - Pure function
//!
//! ## Available Calculations
//!
//! - [`load_analysis`] - Load factoring, deep/slender classification, diagrams
//! - [`strut_and_tie`] - Deep-beam capacity by the strut-and-tie method
//! - [`section_design`] - Conventional flexure/shear design for slender beams
//! - [`beam_statics`] - Shear/moment functions shared by the analysis paths

pub mod beam_statics;
pub mod load_analysis;
pub mod section_design;
pub mod strut_and_tie;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use load_analysis::{LoadAnalysisInput, LoadAnalysisResult};
pub use section_design::{SectionDesignInput, SectionDesignResult};
pub use strut_and_tie::{ComplianceFinding, StrutTieInput, StrutTieResult};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Load factoring and classification
    LoadAnalysis(LoadAnalysisInput),
    /// Deep-beam strut-and-tie design
    StrutAndTie(StrutTieInput),
    /// Conventional section design
    SectionDesign(SectionDesignInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::LoadAnalysis(i) => &i.label,
            CalculationItem::StrutAndTie(i) => &i.label,
            CalculationItem::SectionDesign(i) => &i.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::LoadAnalysis(_) => "LoadAnalysis",
            CalculationItem::StrutAndTie(_) => "StrutAndTie",
            CalculationItem::SectionDesign(_) => "SectionDesign",
        }
    }
}
