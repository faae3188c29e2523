//! # calc_core - Mechanical Estimate Calculation Engine
//!
//! `calc_core` is the computational heart of Mechcalc: two small estimating
//! calculators behind a clean, serializable API. All inputs and outputs are
//! JSON-serializable, so the same calls serve the desktop GUI, the CLI and
//! scripted JSON requests.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Formulas in one place**: Every formula is registered with its reference
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::cantilever::compute_tip_deflection;
//! use calc_core::calculations::actuator::compute_traversal;
//!
//! let traversal = compute_traversal(250.0, 1000.0, 50.0).unwrap();
//! assert_eq!(traversal.total_time_s, 2.0);
//!
//! let delta = compute_tip_deflection(100.0, 5.0, 200.0e9, 0.0001).unwrap();
//! assert!(delta > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Actuator traversal and cantilever deflection
//! - [`equations`] - Pure formulas and the equation registry
//! - [`settings`] - Sample count and acceleration model
//! - [`sampling`] - Uniform curve sampling
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod sampling;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutcome};
pub use errors::{CalcError, CalcResult};
pub use settings::CalcSettings;
