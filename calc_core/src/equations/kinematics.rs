//! # Constant-Acceleration Kinematics
//!
//! Formulas for a single-axis point-to-point move that starts and ends at
//! rest, accelerating and decelerating at the same constant rate.
//!
//! ## Notation
//!
//! - `s` = Stroke length (total distance travelled)
//! - `v` = Peak (maximum) speed
//! - `a` = Acceleration magnitude (same for both ramps)
//! - `T` = Total traversal time
//! - `t` = Time since the start of the move
//!
//! ## Profiles
//!
//! ```text
//!  speed                           speed
//!    │    ┌──────────┐               │      /\
//!  v ┤   /            \              │     /  \
//!    │  /              \             │    /    \
//!    └─┴────────────────┴── t        └───┴──────┴── t
//!        trapezoidal                    triangular
//! ```
//!
//! ## Units
//!
//! Any consistent set; the actuator calculation uses mm, s, mm/s, mm/s².
//!
//! ## References
//!
//! - Hibbeler, Engineering Mechanics: Dynamics, Ch. 12 (rectilinear kinematics)

// =============================================================================
// TRAVERSAL TIME
// =============================================================================

/// Distance needed to reach speed `v` from rest at acceleration `a`
///
/// # Formula
/// d_accel = v² / (2a)
#[inline]
pub fn acceleration_distance(v: f64, a: f64) -> f64 {
    v.powi(2) / (2.0 * a)
}

/// Time to reach speed `v` from rest at acceleration `a`
///
/// # Formula
/// t_accel = v / a
#[inline]
pub fn acceleration_time(v: f64, a: f64) -> f64 {
    v / a
}

/// True when a move of length `s` reaches peak speed `v` and cruises
///
/// # Condition
/// 2 · d_accel < s
///
/// Exactly at `2 · d_accel == s` the move is treated as triangular.
#[inline]
pub fn reaches_peak_speed(s: f64, v: f64, a: f64) -> bool {
    2.0 * acceleration_distance(v, a) < s
}

/// Phase times `(t_accel, t_constant)` of a trapezoidal move
///
/// # Formulas
/// - t_accel = v / a
/// - d_constant = s - 2·v²/(2a)
/// - t_constant = d_constant / v
///
/// The deceleration phase mirrors the acceleration phase, so
/// `T = 2·t_accel + t_constant`.
#[inline]
pub fn trapezoidal_phase_times(s: f64, v: f64, a: f64) -> (f64, f64) {
    let t_accel = acceleration_time(v, a);
    let d_constant = s - 2.0 * acceleration_distance(v, a);
    let t_constant = d_constant / v;
    (t_accel, t_constant)
}

/// Acceleration-phase time of a triangular move
///
/// # Formula
/// t_accel = √(2s / a)
///
/// The move is symmetric, so `T = 2·t_accel`.
#[inline]
pub fn triangular_accel_time(s: f64, a: f64) -> f64 {
    (2.0 * s / a).sqrt()
}

// =============================================================================
// SAMPLED CURVES
// =============================================================================

/// Position at time `t` as the lower envelope of two parabolas
///
/// # Formula
/// d(t) = min( min(a·t²/2, s), s - a·(T - t)²/2 )
///
/// The backward parabola never lies above the forward one for a consistent
/// `(s, T, a)` (they touch at `T/2` of a triangular move), so the envelope
/// follows it: the curve starts at `s - a·T²/2`, below zero, and rises
/// monotonically to `s` at `t = T`. It is the estimator's reference curve,
/// not a piecewise reconstruction of the three phases.
#[inline]
pub fn envelope_position(s: f64, total_time: f64, a: f64, t: f64) -> f64 {
    let forward = (0.5 * a * t.powi(2)).min(s);
    let backward = s - 0.5 * a * (total_time - t).powi(2);
    forward.min(backward)
}

/// Speed at time `t` as an explicit three-phase piecewise function
///
/// # Formulas
/// With t_accel = v/a and t_decel_start = T - t_accel:
/// - v(t) = a·t                          for t < t_accel
/// - v(t) = v                            for t_accel ≤ t < t_decel_start
/// - v(t) = v - a·(t - t_decel_start)    otherwise
///
/// For a triangular move `t_decel_start < t_accel` and the first branch
/// covers every `t` below `t_accel`. When `v/a > T` that is the whole move,
/// so the curve never turns down and ends at `a·T`, above zero. Otherwise it
/// switches to the last branch at `t_accel` and drops from `a·t_accel`.
#[inline]
pub fn piecewise_speed(v: f64, total_time: f64, a: f64, t: f64) -> f64 {
    let t_accel = acceleration_time(v, a);
    let t_decel_start = total_time - t_accel;

    if t < t_accel {
        a * t
    } else if t < t_decel_start {
        v
    } else {
        v - a * (t - t_decel_start)
    }
}
