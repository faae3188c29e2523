//! # Cantilever Beam Calculation
//!
//! Deflection of a prismatic cantilever (fixed at x = 0, free at x = L)
//! under a uniformly distributed load.
//!
//! ## Assumptions
//!
//! - Linear elastic, small deflections (Euler-Bernoulli)
//! - Load over the full length, positive downward
//! - SI units throughout: N/m, m, Pa, m⁴
//!
//! The tip deflection and the sampled curve come from two different
//! formulas and disagree at the free end by a factor of 8/(3L). Both are
//! reported as-is; [`CantileverResult::curve_tip_deflection_m`] exposes the
//! curve's own end value. See [`crate::equations::cantilever`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::cantilever::{CantileverInput, calculate};
//! use calc_core::settings::CalcSettings;
//! use calc_core::units::Gigapascals;
//!
//! let input = CantileverInput::new("Shelf arm", 100.0, 5.0, Gigapascals(200.0), 0.0001);
//! let result = calculate(&input, &CalcSettings::default()).unwrap();
//!
//! assert!((result.tip_deflection_m - 0.000390625).abs() < 1e-12);
//! println!("{}", result.tip_deflection_message());
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::cantilever as formulas;
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{require_non_negative, require_positive, CalcResult};
use crate::sampling::sample;
use crate::settings::CalcSettings;
use crate::units::Pascals;

/// Input parameters for a cantilever beam.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Shelf arm",
///   "distributed_load_n_m": 100.0,
///   "length_m": 5.0,
///   "elastic_modulus_pa": 200000000000.0,
///   "moment_of_inertia_m4": 0.0001
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CantileverInput {
    /// User label for this beam
    pub label: String,

    /// Uniform load in newtons per metre (zero allowed)
    pub distributed_load_n_m: f64,

    /// Beam length in metres
    pub length_m: f64,

    /// Modulus of elasticity in pascals
    pub elastic_modulus_pa: f64,

    /// Moment of inertia in m⁴
    pub moment_of_inertia_m4: f64,
}

impl CantileverInput {
    /// Build an input, converting the modulus to pascals.
    ///
    /// Accepts `Gigapascals` (as the forms collect it) or `Pascals`.
    pub fn new(
        label: impl Into<String>,
        distributed_load_n_m: f64,
        length_m: f64,
        elastic_modulus: impl Into<Pascals>,
        moment_of_inertia_m4: f64,
    ) -> Self {
        Self {
            label: label.into(),
            distributed_load_n_m,
            length_m,
            elastic_modulus_pa: elastic_modulus.into().value(),
            moment_of_inertia_m4,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        check_beam_inputs(
            self.distributed_load_n_m,
            self.length_m,
            self.elastic_modulus_pa,
            self.moment_of_inertia_m4,
        )
    }
}

fn check_beam_inputs(load: f64, length: f64, modulus: f64, inertia: f64) -> CalcResult<()> {
    require_positive("elastic_modulus_pa", modulus, "Modulus of elasticity must be positive")?;
    require_positive("moment_of_inertia_m4", inertia, "Moment of inertia must be positive")?;
    require_positive("length_m", length, "Length must be positive")?;
    require_non_negative("distributed_load_n_m", load, "Load must be zero or positive")?;
    Ok(())
}

/// Deflection at the free end (m).
///
/// `δ = wL⁴ / (8EI)`. A zero load gives zero.
///
/// # Errors
///
/// A domain error when the modulus, inertia or length is not strictly
/// positive, or the load is negative.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::cantilever::compute_tip_deflection;
///
/// assert!(compute_tip_deflection(100.0, 5.0, 0.0, 0.0001).is_err());
/// assert_eq!(compute_tip_deflection(0.0, 5.0, 200.0e9, 0.0001).unwrap(), 0.0);
/// ```
pub fn compute_tip_deflection(load: f64, length: f64, modulus: f64, inertia: f64) -> CalcResult<f64> {
    check_beam_inputs(load, length, modulus, inertia)?;
    Ok(formulas::uniform_load_tip_deflection(load, length, modulus, inertia))
}

/// Deflection `(x, y)` samples over `[0, length]`.
///
/// `y = w·x²·(3L - x) / (6EI)`. Zero at the fixed end and non-decreasing
/// along the beam; the last value is `wL³/(3EI)`, not the tip formula.
pub fn sample_deflection_curve(
    load: f64,
    length: f64,
    modulus: f64,
    inertia: f64,
    n_samples: usize,
) -> CalcResult<Vec<(f64, f64)>> {
    check_beam_inputs(load, length, modulus, inertia)?;

    Ok(sample(0.0, length, n_samples, |x| {
        formulas::deflection_along_length(load, length, modulus, inertia, x)
    }))
}

/// Results from a cantilever calculation.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "tip_deflection_m": 0.000390625,
///   "deflection_curve": [[0.0, 0.0], "..."],
///   "curve_tip_deflection_m": 0.00020833333333333335,
///   "support_reaction_n": 500.0,
///   "fixed_end_moment_nm": 1250.0,
///   "equations_used": ["CantileverUniformReactions", "CantileverTipDeflection", "CantileverDeflectionCurve"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CantileverResult {
    /// Free-end deflection from wL⁴/(8EI) (m)
    pub tip_deflection_m: f64,

    /// `(position_m, deflection_m)` samples over `[0, length_m]`
    pub deflection_curve: Vec<(f64, f64)>,

    /// Last value of the sampled curve, wL³/(3EI) (m)
    pub curve_tip_deflection_m: f64,

    /// Vertical reaction at the fixed end, wL (N)
    pub support_reaction_n: f64,

    /// Fixed-end moment magnitude, wL²/2 (N·m)
    pub fixed_end_moment_nm: f64,

    /// Formulas that produced this result, in order of first use
    pub equations_used: Vec<Equation>,
}

impl CantileverResult {
    /// Headline line shown by both front ends
    pub fn tip_deflection_message(&self) -> String {
        format!(
            "The deflection at the end of the beam is {:.6} meters.",
            self.tip_deflection_m
        )
    }

    /// Ratio of the curve's end value to the tip formula.
    ///
    /// `8/(3L)` for any loaded beam; `None` when the load is zero.
    pub fn curve_to_tip_ratio(&self) -> Option<f64> {
        if self.tip_deflection_m > 0.0 {
            Some(self.curve_tip_deflection_m / self.tip_deflection_m)
        } else {
            None
        }
    }
}

/// Calculate tip deflection, deflection curve and support reactions.
///
/// # Returns
///
/// * `Ok(CantileverResult)` - All values, never partial
/// * `Err(CalcError)` - Structured error if inputs or settings are invalid
pub fn calculate(input: &CantileverInput, settings: &CalcSettings) -> CalcResult<CantileverResult> {
    input.validate()?;
    settings.validate()?;

    let w = input.distributed_load_n_m;
    let l = input.length_m;
    let e = input.elastic_modulus_pa;
    let i = input.moment_of_inertia_m4;

    let mut tracker = EquationTracker::new();

    let (support_reaction_n, fixed_end_moment_nm) = formulas::uniform_load_reactions(w, l);
    tracker.record(Equation::CantileverUniformReactions);

    let tip_deflection_m = compute_tip_deflection(w, l, e, i)?;
    tracker.record(Equation::CantileverTipDeflection);

    let deflection_curve = sample_deflection_curve(w, l, e, i, settings.sample_count)?;
    tracker.record(Equation::CantileverDeflectionCurve);

    let curve_tip_deflection_m = deflection_curve.last().map(|&(_, y)| y).unwrap_or(0.0);

    tracing::debug!(
        label = %input.label,
        tip_deflection_m,
        curve_tip_deflection_m,
        "cantilever calculation complete"
    );

    Ok(CantileverResult {
        tip_deflection_m,
        deflection_curve,
        curve_tip_deflection_m,
        support_reaction_n,
        fixed_end_moment_nm,
        equations_used: tracker.unique_equations(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::units::Gigapascals;

    fn test_beam() -> CantileverInput {
        CantileverInput::new("Test Beam", 100.0, 5.0, Gigapascals(200.0), 0.0001)
    }

    #[test]
    fn test_reference_tip_deflection() {
        // 100·5⁴ / (8·200e9·1e-4) = 62500 / 1.6e8
        let delta = compute_tip_deflection(100.0, 5.0, 200.0e9, 0.0001).unwrap();
        assert!((delta - 0.000390625).abs() < 1e-15);
    }

    #[test]
    fn test_zero_modulus_is_domain_error() {
        let err = compute_tip_deflection(100.0, 5.0, 0.0, 0.0001).unwrap_err();
        match err {
            CalcError::DomainError { field, .. } => assert_eq!(field, "elastic_modulus_pa"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_other_invalid_inputs() {
        assert!(compute_tip_deflection(100.0, 5.0, 200.0e9, 0.0).is_err());
        assert!(compute_tip_deflection(100.0, 0.0, 200.0e9, 0.0001).is_err());
        assert!(compute_tip_deflection(-1.0, 5.0, 200.0e9, 0.0001).is_err());
        assert!(sample_deflection_curve(100.0, 5.0, -1.0, 0.0001, 10).is_err());
    }

    #[test]
    fn test_zero_load() {
        assert_eq!(compute_tip_deflection(0.0, 5.0, 200.0e9, 0.0001).unwrap(), 0.0);
        let curve = sample_deflection_curve(0.0, 5.0, 200.0e9, 0.0001, 20).unwrap();
        assert!(curve.iter().all(|&(_, y)| y == 0.0));
    }

    #[test]
    fn test_curve_spans_length() {
        let curve = sample_deflection_curve(100.0, 5.0, 200.0e9, 0.0001, 500).unwrap();
        assert_eq!(curve.len(), 500);
        assert_eq!(curve[0], (0.0, 0.0));
        assert_eq!(curve[499].0, 5.0);
    }

    #[test]
    fn test_calculate_full_result() {
        let result = calculate(&test_beam(), &CalcSettings::default()).unwrap();

        assert!((result.tip_deflection_m - 0.000390625).abs() < 1e-15);
        assert_eq!(result.support_reaction_n, 500.0);
        assert_eq!(result.fixed_end_moment_nm, 1250.0);
        assert_eq!(result.deflection_curve.len(), 500);

        // wL³/(3EI) = 12500 / 6e7
        assert!((result.curve_tip_deflection_m - 12500.0 / 6.0e7).abs() < 1e-15);

        // 8/(3·5)
        let ratio = result.curve_to_tip_ratio().unwrap();
        assert!((ratio - 8.0 / 15.0).abs() < 1e-9);

        assert_eq!(
            result.tip_deflection_message(),
            "The deflection at the end of the beam is 0.000391 meters."
        );
    }

    #[test]
    fn test_ratio_none_for_unloaded_beam() {
        let mut input = test_beam();
        input.distributed_load_n_m = 0.0;
        let result = calculate(&input, &CalcSettings::default()).unwrap();
        assert_eq!(result.curve_to_tip_ratio(), None);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_beam();
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: CantileverInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
        assert_eq!(roundtrip.elastic_modulus_pa, 200.0e9);
    }
}
