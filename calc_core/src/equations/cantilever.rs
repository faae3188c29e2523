//! # Cantilever Beam Formulas
//!
//! Euler-Bernoulli formulas for a prismatic beam fixed at the left end
//! (x = 0) and free at the right end (x = L), under a uniformly distributed
//! load `w` over the full length.
//!
//! ```text
//!    ████  ↓  ↓  ↓  ↓  ↓  ↓  ↓  ↓   w
//!    ████══════════════════════════
//!    ████ ←──────────L────────────→
//!   fixed                        free
//! ```
//!
//! ## Notation
//!
//! - `w` = Uniform load intensity (force per unit length)
//! - `L` = Beam length
//! - `x` = Position from the fixed end
//! - `E` = Modulus of elasticity
//! - `I` = Moment of inertia
//! - `δ` = Deflection
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Deflection: Positive downward
//! - Reaction: Positive upward
//! - Fixed-end moment: magnitude only (hogging)
//!
//! ## Note on the two deflection formulas
//!
//! [`uniform_load_tip_deflection`] and [`deflection_along_length`] are kept
//! exactly as the calculator has always published them. They do **not** agree
//! at the free end: the curve gives `wL³/(3EI)` at `x = L` while the tip
//! formula gives `wL⁴/(8EI)`, a ratio of `8/(3L)` that is not even
//! dimensionless. The curve's `w·x²(3L - x)/(6EI)` is the point-load case
//! (`P·x²(3L - x)/(6EI)`) with `w` in place of `P`. Neither is altered here;
//! callers that show both should flag the mismatch.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 2a / 1a

/// Support reaction and fixed-end moment for a full-length uniform load
///
/// # Formulas (Roark's Table 8.1, Case 2a)
/// - R = wL
/// - M_fixed = wL²/2
///
/// # Returns
/// (R, M_fixed) - vertical reaction (positive upward) and fixed-end moment magnitude
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let reaction = w * l;
    let moment = w * l.powi(2) / 2.0;
    (reaction, moment)
}

/// Deflection at the free end of a cantilever under uniform load
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// δ_max = wL⁴ / (8EI)
///
/// # Example
/// ```rust
/// use calc_core::equations::cantilever::uniform_load_tip_deflection;
///
/// // 100 N/m over 5 m, E = 200 GPa, I = 1e-4 m⁴
/// let delta = uniform_load_tip_deflection(100.0, 5.0, 200.0e9, 0.0001);
/// assert!((delta - 0.000390625).abs() < 1e-15);
/// ```
#[inline]
pub fn uniform_load_tip_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    (w * l.powi(4)) / (8.0 * e * i)
}

/// Deflection at position `x` along the beam
///
/// # Formula
/// δ(x) = w·x²·(3L - x) / (6EI)
///
/// Zero at the fixed end, increasing monotonically to `wL³/(3EI)` at the
/// free end for `w ≥ 0`. See the module note on how this relates to
/// [`uniform_load_tip_deflection`].
#[inline]
pub fn deflection_along_length(w: f64, l: f64, e: f64, i: f64, x: f64) -> f64 {
    (w * x.powi(2)) * (3.0 * l - x) / (6.0 * e * i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reactions() {
        let (r, m) = uniform_load_reactions(100.0, 5.0);
        assert_eq!(r, 500.0);
        assert_eq!(m, 1250.0);
    }

    #[test]
    fn test_tip_deflection_reference_value() {
        // (100·625)/(8·200e9·1e-4) = 62500/1.6e8
        let delta = uniform_load_tip_deflection(100.0, 5.0, 200.0e9, 0.0001);
        assert!((delta - 0.000390625).abs() < 1e-15);
    }

    #[test]
    fn test_deflection_zero_at_fixed_end() {
        assert_eq!(deflection_along_length(100.0, 5.0, 200.0e9, 0.0001, 0.0), 0.0);
    }

    #[test]
    fn test_curve_end_disagrees_with_tip_formula() {
        let (w, l, e, i) = (100.0, 5.0, 200.0e9, 0.0001);
        let curve_end = deflection_along_length(w, l, e, i, l);
        let tip = uniform_load_tip_deflection(w, l, e, i);

        // wL³/(3EI) versus wL⁴/(8EI)
        assert!((curve_end - w * l.powi(3) / (3.0 * e * i)).abs() < 1e-15);
        assert!((curve_end / tip - 8.0 / (3.0 * l)).abs() < 1e-9);
    }
}
