//! # Actuator Traversal Calculation
//!
//! Estimates how long a linear actuator takes to travel its stroke, starting
//! and ending at rest, and samples the position and speed over that time.
//!
//! ## Assumptions
//!
//! - Single axis, point-to-point move
//! - Constant acceleration, identical for the accelerate and decelerate ramps
//! - Acceleration derived from motor power through an [`AccelerationModel`]
//!   (a linear placeholder, not a torque model)
//! - Internal units: mm, s, mm/s, mm/s²
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::actuator::{ActuatorInput, MotionProfile, calculate};
//! use calc_core::settings::CalcSettings;
//! use calc_core::units::MetersPerSecond;
//!
//! // 250 mm stroke, 1 m/s top speed, 50 W motor
//! let input = ActuatorInput::new("Gantry X", 250.0, MetersPerSecond(1.0), 50.0);
//!
//! let result = calculate(&input, &CalcSettings::default()).unwrap();
//!
//! assert_eq!(result.acceleration_mm_s2, 500.0);
//! assert_eq!(result.profile, MotionProfile::Triangular);
//! assert_eq!(result.total_time_s, 2.0);
//! println!("{}", result.traversal_time_message());
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::kinematics;
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{require_non_negative, require_positive, CalcResult};
use crate::sampling::sample;
use crate::settings::CalcSettings;
use crate::units::MillimetersPerSecond;

/// Default acceleration per watt of motor power (mm/s² per W)
pub const DEFAULT_MM_S2_PER_WATT: f64 = 10.0;

// ============================================================================
// Acceleration Model
// ============================================================================

/// How motor power turns into acceleration.
///
/// The only model today is the linear placeholder `a = k·P`. It has no
/// physical basis (no torque, load mass or screw lead), which is why it sits
/// behind its own type: a real drive model can be added as a variant without
/// touching the traversal math.
///
/// ## JSON Example
///
/// ```json
/// { "type": "LinearPower", "mm_s2_per_watt": 10.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AccelerationModel {
    /// `a = mm_s2_per_watt · P`
    LinearPower { mm_s2_per_watt: f64 },
}

impl Default for AccelerationModel {
    fn default() -> Self {
        AccelerationModel::LinearPower {
            mm_s2_per_watt: DEFAULT_MM_S2_PER_WATT,
        }
    }
}

impl AccelerationModel {
    /// Acceleration (mm/s²) for the given motor power (W)
    pub fn acceleration_mm_s2(&self, motor_power_w: f64) -> f64 {
        match self {
            AccelerationModel::LinearPower { mm_s2_per_watt } => motor_power_w * mm_s2_per_watt,
        }
    }

    /// Check the model's own parameters.
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            AccelerationModel::LinearPower { mm_s2_per_watt } => require_positive(
                "mm_s2_per_watt",
                *mm_s2_per_watt,
                "Acceleration per watt must be positive",
            ),
        }
    }

    /// Short description for reports (e.g., "10 mm/s² per W")
    pub fn describe(&self) -> String {
        match self {
            AccelerationModel::LinearPower { mm_s2_per_watt } => {
                format!("{} mm/s² per W", mm_s2_per_watt)
            }
        }
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// Shape of the speed profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionProfile {
    /// Reaches the maximum speed and cruises before decelerating
    Trapezoidal,
    /// Starts decelerating before the maximum speed is reached
    Triangular,
}

impl MotionProfile {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MotionProfile::Trapezoidal => "Trapezoidal",
            MotionProfile::Triangular => "Triangular",
        }
    }
}

/// Timing of a single traversal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Traversal {
    /// Total time for the stroke (s)
    pub total_time_s: f64,

    /// Acceleration used for both ramps (mm/s²)
    pub acceleration_mm_s2: f64,

    /// Which profile the move follows
    pub profile: MotionProfile,

    /// Duration of the acceleration phase (s)
    ///
    /// Equal to the deceleration phase. For a triangular move this is half of
    /// the total time.
    pub accel_time_s: f64,

    /// Duration of the constant-speed phase (s), zero for a triangular move
    pub cruise_time_s: f64,

    /// Highest speed reached (mm/s)
    ///
    /// The configured maximum for a trapezoidal move. For a triangular move,
    /// the speed at the end of the acceleration phase, capped at the maximum.
    pub peak_speed_mm_s: f64,
}

/// Traversal time using the default acceleration model.
///
/// # Arguments
///
/// * `stroke_length_mm` - Distance to travel (mm)
/// * `max_speed_mm_s` - Speed ceiling (mm/s)
/// * `motor_power_w` - Motor power (W)
///
/// # Errors
///
/// A [`CalcError::DomainError`](crate::errors::CalcError::DomainError) when the acceleration, stroke or speed is
/// not strictly positive.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::actuator::{compute_traversal, MotionProfile};
///
/// let t = compute_traversal(5000.0, 1000.0, 50.0).unwrap();
/// assert_eq!(t.profile, MotionProfile::Trapezoidal);
/// assert_eq!(t.total_time_s, 7.0);
/// ```
pub fn compute_traversal(stroke_length_mm: f64, max_speed_mm_s: f64, motor_power_w: f64) -> CalcResult<Traversal> {
    compute_traversal_with(&AccelerationModel::default(), stroke_length_mm, max_speed_mm_s, motor_power_w)
}

/// Traversal time with an explicit acceleration model.
pub fn compute_traversal_with(
    model: &AccelerationModel,
    stroke_length_mm: f64,
    max_speed_mm_s: f64,
    motor_power_w: f64,
) -> CalcResult<Traversal> {
    let acceleration = model.acceleration_mm_s2(motor_power_w);

    require_positive(
        "acceleration_mm_s2",
        acceleration,
        "Acceleration must be positive (check motor power)",
    )?;
    require_positive("stroke_length_mm", stroke_length_mm, "Stroke length must be positive")?;
    require_positive("max_speed_mm_s", max_speed_mm_s, "Maximum speed must be positive")?;

    let traversal = if kinematics::reaches_peak_speed(stroke_length_mm, max_speed_mm_s, acceleration) {
        let (t_accel, t_constant) =
            kinematics::trapezoidal_phase_times(stroke_length_mm, max_speed_mm_s, acceleration);
        Traversal {
            total_time_s: t_accel + t_constant + t_accel,
            acceleration_mm_s2: acceleration,
            profile: MotionProfile::Trapezoidal,
            accel_time_s: t_accel,
            cruise_time_s: t_constant,
            peak_speed_mm_s: max_speed_mm_s,
        }
    } else {
        let t_accel = kinematics::triangular_accel_time(stroke_length_mm, acceleration);
        Traversal {
            total_time_s: 2.0 * t_accel,
            acceleration_mm_s2: acceleration,
            profile: MotionProfile::Triangular,
            accel_time_s: t_accel,
            cruise_time_s: 0.0,
            peak_speed_mm_s: (acceleration * t_accel).min(max_speed_mm_s),
        }
    };

    tracing::debug!(
        profile = traversal.profile.display_name(),
        total_time_s = traversal.total_time_s,
        acceleration_mm_s2 = acceleration,
        "traversal computed"
    );

    Ok(traversal)
}

// ============================================================================
// Sampled Curves
// ============================================================================

fn check_curve_inputs(total_time_s: f64, acceleration_mm_s2: f64) -> CalcResult<()> {
    require_positive("acceleration_mm_s2", acceleration_mm_s2, "Acceleration must be positive")?;
    require_non_negative("total_time_s", total_time_s, "Total time must be zero or positive")
}

/// Position `(t, d)` samples over `[0, total_time_s]`.
///
/// Uses the min-of-two-parabolas envelope
/// (see [`kinematics::envelope_position`]); the first sample lies below
/// zero and the last is exactly the stroke.
pub fn sample_position_curve(
    stroke_length_mm: f64,
    total_time_s: f64,
    acceleration_mm_s2: f64,
    n_samples: usize,
) -> CalcResult<Vec<(f64, f64)>> {
    check_curve_inputs(total_time_s, acceleration_mm_s2)?;

    Ok(sample(0.0, total_time_s, n_samples, |t| {
        kinematics::envelope_position(stroke_length_mm, total_time_s, acceleration_mm_s2, t)
    }))
}

/// Speed `(t, v)` samples over `[0, total_time_s]`.
///
/// Three-phase piecewise speed (see [`kinematics::piecewise_speed`]),
/// computed independently of the position curve. Starts at zero; ends at
/// zero (within rounding) for a trapezoidal move.
pub fn sample_speed_curve(
    max_speed_mm_s: f64,
    total_time_s: f64,
    acceleration_mm_s2: f64,
    n_samples: usize,
) -> CalcResult<Vec<(f64, f64)>> {
    check_curve_inputs(total_time_s, acceleration_mm_s2)?;
    require_positive("max_speed_mm_s", max_speed_mm_s, "Maximum speed must be positive")?;

    Ok(sample(0.0, total_time_s, n_samples, |t| {
        kinematics::piecewise_speed(max_speed_mm_s, total_time_s, acceleration_mm_s2, t)
    }))
}

// ============================================================================
// Input / Result
// ============================================================================

/// Input parameters for an actuator traversal.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Gantry X",
///   "stroke_length_mm": 250.0,
///   "max_speed_mm_s": 1000.0,
///   "motor_power_w": 50.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorInput {
    /// User label for this actuator (e.g., "Gantry X")
    pub label: String,

    /// Stroke length in millimetres
    pub stroke_length_mm: f64,

    /// Maximum speed in millimetres per second
    pub max_speed_mm_s: f64,

    /// Motor power in watts
    pub motor_power_w: f64,
}

impl ActuatorInput {
    /// Build an input, converting the speed to mm/s.
    ///
    /// Accepts either `MetersPerSecond` (as the forms collect it) or
    /// `MillimetersPerSecond`.
    pub fn new(
        label: impl Into<String>,
        stroke_length_mm: f64,
        max_speed: impl Into<MillimetersPerSecond>,
        motor_power_w: f64,
    ) -> Self {
        Self {
            label: label.into(),
            stroke_length_mm,
            max_speed_mm_s: max_speed.into().value(),
            motor_power_w,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("stroke_length_mm", self.stroke_length_mm, "Stroke length must be positive")?;
        require_positive("max_speed_mm_s", self.max_speed_mm_s, "Maximum speed must be positive")?;
        require_positive("motor_power_w", self.motor_power_w, "Motor power must be positive")?;
        Ok(())
    }
}

/// Results from an actuator traversal calculation.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "total_time_s": 2.0,
///   "acceleration_mm_s2": 500.0,
///   "profile": "Triangular",
///   "accel_time_s": 1.0,
///   "cruise_time_s": 0.0,
///   "peak_speed_mm_s": 500.0,
///   "position_samples": [[0.0, -750.0], "..."],
///   "speed_samples": [[0.0, 0.0], "..."],
///   "equations_used": ["AccelerationFromPower", "AccelerationDistance", "..."]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuatorResult {
    /// Total traversal time (s)
    pub total_time_s: f64,

    /// Acceleration used (mm/s²)
    pub acceleration_mm_s2: f64,

    /// Speed profile followed
    pub profile: MotionProfile,

    /// Acceleration phase duration (s)
    pub accel_time_s: f64,

    /// Constant-speed phase duration (s)
    pub cruise_time_s: f64,

    /// Highest speed reached (mm/s)
    pub peak_speed_mm_s: f64,

    /// `(time_s, position_mm)` samples over `[0, total_time_s]`
    pub position_samples: Vec<(f64, f64)>,

    /// `(time_s, speed_mm_s)` samples over `[0, total_time_s]`
    pub speed_samples: Vec<(f64, f64)>,

    /// Formulas that produced this result, in order of first use
    pub equations_used: Vec<Equation>,
}

impl ActuatorResult {
    /// Headline line shown by both front ends
    pub fn traversal_time_message(&self) -> String {
        format!("Traversal Time: {:.2} seconds", self.total_time_s)
    }
}

/// Calculate the traversal time and motion curves.
///
/// # Arguments
///
/// * `input` - Stroke, speed ceiling and motor power
/// * `settings` - Sample count and acceleration model
///
/// # Returns
///
/// * `Ok(ActuatorResult)` - Timing plus both sampled curves
/// * `Err(CalcError)` - Structured error if inputs or settings are invalid
pub fn calculate(input: &ActuatorInput, settings: &CalcSettings) -> CalcResult<ActuatorResult> {
    input.validate()?;
    settings.validate()?;

    let mut tracker = EquationTracker::new();

    let traversal = compute_traversal_with(
        &settings.acceleration_model,
        input.stroke_length_mm,
        input.max_speed_mm_s,
        input.motor_power_w,
    )?;

    tracker.record(Equation::AccelerationFromPower);
    tracker.record(Equation::AccelerationDistance);
    match traversal.profile {
        MotionProfile::Trapezoidal => tracker.record(Equation::TrapezoidalTraversalTime),
        MotionProfile::Triangular => tracker.record(Equation::TriangularTraversalTime),
    }

    let position_samples = sample_position_curve(
        input.stroke_length_mm,
        traversal.total_time_s,
        traversal.acceleration_mm_s2,
        settings.sample_count,
    )?;
    tracker.record(Equation::EnvelopePosition);

    let speed_samples = sample_speed_curve(
        input.max_speed_mm_s,
        traversal.total_time_s,
        traversal.acceleration_mm_s2,
        settings.sample_count,
    )?;
    tracker.record(Equation::PiecewiseSpeed);

    tracing::debug!(
        label = %input.label,
        total_time_s = traversal.total_time_s,
        samples = settings.sample_count,
        "actuator calculation complete"
    );

    Ok(ActuatorResult {
        total_time_s: traversal.total_time_s,
        acceleration_mm_s2: traversal.acceleration_mm_s2,
        profile: traversal.profile,
        accel_time_s: traversal.accel_time_s,
        cruise_time_s: traversal.cruise_time_s,
        peak_speed_mm_s: traversal.peak_speed_mm_s,
        position_samples,
        speed_samples,
        equations_used: tracker.unique_equations(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::units::MetersPerSecond;

    fn test_actuator() -> ActuatorInput {
        ActuatorInput::new("Test Actuator", 250.0, MetersPerSecond(1.0), 50.0)
    }

    #[test]
    fn test_triangular_reference_move() {
        // a = 500, d_accel = 1000, 2000 >= 250 -> triangular, sqrt(500/500) = 1
        let t = compute_traversal(250.0, 1000.0, 50.0).unwrap();
        assert_eq!(t.acceleration_mm_s2, 500.0);
        assert_eq!(t.profile, MotionProfile::Triangular);
        assert_eq!(t.accel_time_s, 1.0);
        assert_eq!(t.total_time_s, 2.0);
        assert_eq!(t.cruise_time_s, 0.0);
        assert_eq!(t.peak_speed_mm_s, 500.0);
    }

    #[test]
    fn test_trapezoidal_move() {
        // t_accel = 2, cruise = 3000/1000 = 3
        let t = compute_traversal(5000.0, 1000.0, 50.0).unwrap();
        assert_eq!(t.profile, MotionProfile::Trapezoidal);
        assert_eq!(t.accel_time_s, 2.0);
        assert_eq!(t.cruise_time_s, 3.0);
        assert_eq!(t.total_time_s, 7.0);
        assert_eq!(t.peak_speed_mm_s, 1000.0);
    }

    #[test]
    fn test_boundary_is_triangular() {
        // 2·d_accel == stroke exactly
        let t = compute_traversal(2000.0, 1000.0, 50.0).unwrap();
        assert_eq!(t.profile, MotionProfile::Triangular);
    }

    #[test]
    fn test_zero_power_is_domain_error() {
        let err = compute_traversal(250.0, 1000.0, 0.0).unwrap_err();
        assert!(err.is_domain_error());
        match err {
            CalcError::DomainError { field, .. } => assert_eq!(field, "acceleration_mm_s2"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(compute_traversal(-1.0, 1000.0, 50.0).is_err());
        assert!(compute_traversal(250.0, 0.0, 50.0).is_err());
        assert!(compute_traversal(250.0, 1000.0, -5.0).is_err());
        assert!(compute_traversal(f64::NAN, 1000.0, 50.0).is_err());
    }

    #[test]
    fn test_custom_acceleration_model() {
        let model = AccelerationModel::LinearPower { mm_s2_per_watt: 20.0 };
        let t = compute_traversal_with(&model, 250.0, 1000.0, 50.0).unwrap();
        assert_eq!(t.acceleration_mm_s2, 1000.0);
    }

    #[test]
    fn test_acceleration_model_validation() {
        assert!(AccelerationModel::default().validate().is_ok());
        let bad = AccelerationModel::LinearPower { mm_s2_per_watt: 0.0 };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_position_curve_shape() {
        let curve = sample_position_curve(250.0, 2.0, 500.0, 500).unwrap();
        assert_eq!(curve.len(), 500);
        assert_eq!(curve[0], (0.0, -750.0));
        assert_eq!(curve[499], (2.0, 250.0));
    }

    #[test]
    fn test_speed_curve_trapezoidal_ends() {
        let curve = sample_speed_curve(1000.0, 7.0, 500.0, 500).unwrap();
        assert_eq!(curve[0], (0.0, 0.0));
        let (t_end, v_end) = curve[499];
        assert_eq!(t_end, 7.0);
        assert!(v_end.abs() < 1e-9);

        let peak = curve.iter().map(|&(_, v)| v).fold(f64::MIN, f64::max);
        assert_eq!(peak, 1000.0);
    }

    #[test]
    fn test_speed_curve_triangular_drops_on_last_sample() {
        // v/a = 2 = T: the accelerate branch covers every sample but the last
        let curve = sample_speed_curve(1000.0, 2.0, 500.0, 500).unwrap();
        assert!(curve[498].1 > 990.0);
        assert_eq!(curve[499].1, 0.0);
    }

    #[test]
    fn test_samplers_reject_bad_inputs() {
        assert!(sample_position_curve(250.0, 2.0, 0.0, 10).is_err());
        assert!(sample_position_curve(250.0, -1.0, 500.0, 10).is_err());
        assert!(sample_speed_curve(0.0, 2.0, 500.0, 10).is_err());
        assert!(sample_speed_curve(1000.0, f64::INFINITY, 500.0, 10).is_err());
    }

    #[test]
    fn test_calculate_full_result() {
        let result = calculate(&test_actuator(), &CalcSettings::default()).unwrap();

        assert_eq!(result.total_time_s, 2.0);
        assert_eq!(result.position_samples.len(), 500);
        assert_eq!(result.speed_samples.len(), 500);
        assert_eq!(result.traversal_time_message(), "Traversal Time: 2.00 seconds");
        assert_eq!(
            result.equations_used,
            vec![
                Equation::AccelerationFromPower,
                Equation::AccelerationDistance,
                Equation::TriangularTraversalTime,
                Equation::EnvelopePosition,
                Equation::PiecewiseSpeed,
            ]
        );
    }

    #[test]
    fn test_calculate_respects_sample_count() {
        let settings = CalcSettings {
            sample_count: 11,
            ..CalcSettings::default()
        };
        let result = calculate(&test_actuator(), &settings).unwrap();
        assert_eq!(result.position_samples.len(), 11);
        assert_eq!(result.position_samples[5].0, 1.0);
    }

    #[test]
    fn test_invalid_power_rejected_by_calculate() {
        let mut input = test_actuator();
        input.motor_power_w = 0.0;
        assert!(calculate(&input, &CalcSettings::default()).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_actuator();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"max_speed_mm_s\":1000.0"));
        let roundtrip: ActuatorInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let model_json = serde_json::to_string(&AccelerationModel::default()).unwrap();
        assert_eq!(model_json, r#"{"type":"LinearPower","mm_s2_per_watt":10.0}"#);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn total_time_positive_and_acceleration_exact(
            stroke in 0.1_f64..10_000.0,
            speed in 0.1_f64..10_000.0,
            power in 0.01_f64..100.0,
        ) {
            let t = compute_traversal(stroke, speed, power).unwrap();
            prop_assert!(t.total_time_s > 0.0);
            prop_assert_eq!(t.acceleration_mm_s2, power * 10.0);
        }

        #[test]
        fn branch_matches_acceleration_distance(
            stroke in 0.1_f64..10_000.0,
            speed in 0.1_f64..10_000.0,
            power in 0.01_f64..100.0,
        ) {
            let t = compute_traversal(stroke, speed, power).unwrap();
            let a = power * 10.0;
            let expect_trapezoid = 2.0 * kinematics::acceleration_distance(speed, a) < stroke;
            prop_assert_eq!(t.profile == MotionProfile::Trapezoidal, expect_trapezoid);

            if t.profile == MotionProfile::Triangular {
                prop_assert_eq!(t.total_time_s, 2.0 * (2.0 * stroke / a).sqrt());
            }
        }

        #[test]
        fn position_curve_rises_to_stroke(
            stroke in 0.1_f64..10_000.0,
            speed in 0.1_f64..10_000.0,
            power in 0.01_f64..100.0,
        ) {
            let t = compute_traversal(stroke, speed, power).unwrap();
            let curve = sample_position_curve(stroke, t.total_time_s, t.acceleration_mm_s2, 64).unwrap();

            for pair in curve.windows(2) {
                prop_assert!(pair[1].1 >= pair[0].1, "dropped from {:?} to {:?}", pair[0], pair[1]);
            }
            prop_assert_eq!(curve[63], (t.total_time_s, stroke));
        }

        #[test]
        fn speed_curve_starts_at_rest(
            stroke in 0.1_f64..10_000.0,
            speed in 0.1_f64..10_000.0,
            power in 0.01_f64..100.0,
        ) {
            let t = compute_traversal(stroke, speed, power).unwrap();
            let curve = sample_speed_curve(speed, t.total_time_s, t.acceleration_mm_s2, 50).unwrap();
            prop_assert_eq!(curve[0].1, 0.0);

            if t.profile == MotionProfile::Trapezoidal {
                let v_end = curve[49].1;
                prop_assert!(v_end.abs() <= 1e-9 * (speed + t.acceleration_mm_s2 * t.total_time_s));
            }
        }
    }
}
