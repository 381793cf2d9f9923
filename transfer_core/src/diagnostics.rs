//! # Calculation Trace
//!
//! Intermediate quantities worth surfacing (reactions, member forces, node
//! dimensions) are collected into an ordered, serializable trace that rides
//! along with each result instead of being printed from inside the engine.
//! The engine itself never writes to stdout or stderr; a front-end can render
//! the trace, ignore it, or ship it to a report generator.

use serde::{Deserialize, Serialize};

/// One named intermediate quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// What the number is (e.g., "r1", "F_ab")
    pub quantity: String,
    /// The value
    pub value: f64,
    /// Units the value carries (e.g., "kip", "in", "psi")
    pub units: String,
}

/// Ordered list of intermediate quantities from one calculation.
///
/// # Example
/// ```
/// use transfer_core::diagnostics::CalcTrace;
///
/// let mut trace = CalcTrace::new();
/// trace.record("r1", 88.56, "kip");
/// assert_eq!(trace.get("r1"), Some(88.56));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalcTrace {
    pub entries: Vec<TraceEntry>,
}

impl CalcTrace {
    pub fn new() -> Self {
        CalcTrace::default()
    }

    /// Append a quantity to the trace.
    pub fn record(&mut self, quantity: impl Into<String>, value: f64, units: impl Into<String>) {
        self.entries.push(TraceEntry {
            quantity: quantity.into(),
            value,
            units: units.into(),
        });
    }

    /// Look up the first entry with the given name.
    pub fn get(&self, quantity: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.quantity == quantity)
            .map(|e| e.value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
