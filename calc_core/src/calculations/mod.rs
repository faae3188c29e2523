//! # Mechanical Calculations
//!
//! This module contains all calculation types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, settings) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Inputs are built once from a form (GUI), from flags (CLI) or from a JSON
//! document, and passed by reference; nothing is kept between calls.
//!
//! ## Available Calculations
//!
//! - [`actuator`] - Linear actuator traversal time and motion curves
//! - [`cantilever`] - Cantilever beam deflection under uniform load

pub mod actuator;
pub mod cantilever;

use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::errors::CalcResult;
use crate::settings::CalcSettings;

// Re-export commonly used types
pub use actuator::{ActuatorInput, ActuatorResult, MotionProfile};
pub use cantilever::{CantileverInput, CantileverResult};

/// Enum wrapper for all calculation types.
///
/// Lets a single JSON document describe either calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "type": "Cantilever",
///   "label": "Shelf arm",
///   "distributed_load_n_m": 100.0,
///   "length_m": 5.0,
///   "elastic_modulus_pa": 200000000000.0,
///   "moment_of_inertia_m4": 0.0001
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Actuator traversal calculation
    Actuator(ActuatorInput),
    /// Cantilever beam deflection calculation
    Cantilever(CantileverInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Actuator(a) => &a.label,
            CalculationItem::Cantilever(c) => &c.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Actuator(_) => "Actuator",
            CalculationItem::Cantilever(_) => "Cantilever",
        }
    }

    /// Run the matching calculation.
    pub fn calculate(&self, settings: &CalcSettings) -> CalcResult<CalculationOutcome> {
        tracing::info!(calc_type = self.calc_type(), label = self.label(), "running calculation");

        match self {
            CalculationItem::Actuator(input) => {
                actuator::calculate(input, settings).map(CalculationOutcome::Actuator)
            }
            CalculationItem::Cantilever(input) => {
                cantilever::calculate(input, settings).map(CalculationOutcome::Cantilever)
            }
        }
    }
}

/// Result of a [`CalculationItem`], tagged the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    Actuator(ActuatorResult),
    Cantilever(CantileverResult),
}

impl CalculationOutcome {
    /// Headline line for this result
    pub fn headline(&self) -> String {
        match self {
            CalculationOutcome::Actuator(r) => r.traversal_time_message(),
            CalculationOutcome::Cantilever(r) => r.tip_deflection_message(),
        }
    }

    /// Formulas that produced this result
    pub fn equations_used(&self) -> &[Equation] {
        match self {
            CalculationOutcome::Actuator(r) => &r.equations_used,
            CalculationOutcome::Cantilever(r) => &r.equations_used,
        }
    }
}
