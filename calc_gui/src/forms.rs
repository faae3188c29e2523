//! Form state for the two calculators
//!
//! The GUI keeps raw text for typed fields so a half-typed number never
//! gets rewritten under the cursor. Conversion to calc_core inputs happens
//! in one place, with the same minimums the input widgets advertise.

use std::ops::RangeInclusive;

use calc_core::calculations::{ActuatorInput, CantileverInput};
use calc_core::errors::parse_field;
use calc_core::units::{Gigapascals, MetersPerSecond};
use calc_core::{CalcError, CalcResult};

/// Motor power slider range (W)
pub const MOTOR_POWER_RANGE_W: RangeInclusive<f64> = 1.0..=100.0;

/// Maximum speed slider range (m/s)
pub const MAX_SPEED_RANGE_M_S: RangeInclusive<f64> = 0.1..=10.0;

/// Smallest accepted beam length (m)
pub const LENGTH_MIN_M: f64 = 0.1;

/// Smallest accepted elastic modulus (GPa)
pub const MODULUS_MIN_GPA: f64 = 0.1;

/// Smallest accepted moment of inertia (m⁴)
pub const INERTIA_MIN_M4: f64 = 0.00001;

/// Actuator form: stroke is typed, power and speed come from sliders.
#[derive(Debug, Clone, PartialEq)]
pub struct ActuatorForm {
    pub stroke_mm: String,
    pub motor_power_w: f64,
    pub max_speed_m_s: f64,
}

impl Default for ActuatorForm {
    fn default() -> Self {
        Self {
            stroke_mm: "250".to_string(),
            motor_power_w: 50.0,
            max_speed_m_s: 1.0,
        }
    }
}

impl ActuatorForm {
    /// Build the calculation input from the current form values.
    pub fn to_input(&self) -> CalcResult<ActuatorInput> {
        let stroke_mm = parse_field("Stroke Length (mm)", &self.stroke_mm)?;

        Ok(ActuatorInput::new(
            "Actuator",
            stroke_mm,
            MetersPerSecond(self.max_speed_m_s),
            self.motor_power_w,
        ))
    }
}

/// Cantilever form, all fields typed.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamForm {
    pub load_n_m: String,
    pub length_m: String,
    pub modulus_gpa: String,
    pub inertia_m4: String,
}

impl Default for BeamForm {
    fn default() -> Self {
        Self {
            load_n_m: "100".to_string(),
            length_m: "5".to_string(),
            modulus_gpa: "200".to_string(),
            inertia_m4: "0.0001".to_string(),
        }
    }
}

impl BeamForm {
    /// Build the calculation input, enforcing the form minimums.
    pub fn to_input(&self) -> CalcResult<CantileverInput> {
        let load = at_least(
            "Distributed Load (N/m)",
            parse_field("Distributed Load (N/m)", &self.load_n_m)?,
            0.0,
        )?;
        let length = at_least(
            "Length of Beam (m)",
            parse_field("Length of Beam (m)", &self.length_m)?,
            LENGTH_MIN_M,
        )?;
        let modulus_gpa = at_least(
            "Elastic Modulus (GPa)",
            parse_field("Elastic Modulus (GPa)", &self.modulus_gpa)?,
            MODULUS_MIN_GPA,
        )?;
        let inertia = at_least(
            "Moment of Inertia (m^4)",
            parse_field("Moment of Inertia (m^4)", &self.inertia_m4)?,
            INERTIA_MIN_M4,
        )?;

        Ok(CantileverInput::new(
            "Cantilever",
            load,
            length,
            Gigapascals(modulus_gpa),
            inertia,
        ))
    }
}

fn at_least(field: &str, value: f64, min: f64) -> CalcResult<f64> {
    if value >= min {
        Ok(value)
    } else {
        Err(CalcError::domain(
            field,
            value.to_string(),
            format!("Must be at least {}", min),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actuator_defaults_convert_speed() {
        let input = ActuatorForm::default().to_input().unwrap();
        assert_eq!(input.stroke_length_mm, 250.0);
        assert_eq!(input.max_speed_mm_s, 1000.0);
        assert_eq!(input.motor_power_w, 50.0);
    }

    #[test]
    fn test_actuator_bad_stroke_text() {
        let form = ActuatorForm {
            stroke_mm: "two hundred".to_string(),
            ..ActuatorForm::default()
        };
        let err = form.to_input().unwrap_err();
        assert_eq!(err.error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_beam_defaults_convert_modulus() {
        let input = BeamForm::default().to_input().unwrap();
        assert_eq!(input.distributed_load_n_m, 100.0);
        assert_eq!(input.length_m, 5.0);
        assert_eq!(input.elastic_modulus_pa, 200.0e9);
        assert_eq!(input.moment_of_inertia_m4, 0.0001);
    }

    #[test]
    fn test_beam_minimums() {
        let short = BeamForm {
            length_m: "0.05".to_string(),
            ..BeamForm::default()
        };
        assert!(short.to_input().unwrap_err().is_domain_error());

        let soft = BeamForm {
            modulus_gpa: "0".to_string(),
            ..BeamForm::default()
        };
        assert!(soft.to_input().unwrap_err().is_domain_error());

        let negative_load = BeamForm {
            load_n_m: "-1".to_string(),
            ..BeamForm::default()
        };
        assert!(negative_load.to_input().unwrap_err().is_domain_error());

        let zero_load = BeamForm {
            load_n_m: "0".to_string(),
            ..BeamForm::default()
        };
        assert!(zero_load.to_input().is_ok());
    }
}
