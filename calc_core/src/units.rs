//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Each calculator uses one fixed unit system
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Unit Systems
//!
//! - Actuator model: millimetres, seconds, watts (mm, mm/s, mm/s²)
//! - Beam model: SI (m, N/m, Pa, m⁴)
//!
//! The calculation functions take plain `f64` in those units. The front ends
//! collect some values in friendlier units (speed in m/s, modulus in GPa) and
//! convert through these types before calling in.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Gigapascals, MetersPerSecond, MillimetersPerSecond, Pascals};
//!
//! let speed: MillimetersPerSecond = MetersPerSecond(1.0).into();
//! assert_eq!(speed.0, 1000.0);
//!
//! let modulus: Pascals = Gigapascals(200.0).into();
//! assert_eq!(modulus.0, 200.0e9);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Speed Units
// ============================================================================

/// Speed in metres per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSecond(pub f64);

/// Speed in millimetres per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MillimetersPerSecond(pub f64);

impl From<MetersPerSecond> for MillimetersPerSecond {
    fn from(v: MetersPerSecond) -> Self {
        MillimetersPerSecond(v.0 * 1000.0)
    }
}

impl From<MillimetersPerSecond> for MetersPerSecond {
    fn from(v: MillimetersPerSecond) -> Self {
        MetersPerSecond(v.0 / 1000.0)
    }
}

// ============================================================================
// Stiffness Units
// ============================================================================

/// Stress / elastic modulus in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress / elastic modulus in gigapascals (1 GPa = 1e9 Pa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

impl From<Gigapascals> for Pascals {
    fn from(gpa: Gigapascals) -> Self {
        Pascals(gpa.0 * 1e9)
    }
}

impl From<Pascals> for Gigapascals {
    fn from(pa: Pascals) -> Self {
        Gigapascals(pa.0 / 1e9)
    }
}

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(MetersPerSecond);
impl_value!(MillimetersPerSecond);
impl_value!(Pascals);
impl_value!(Gigapascals);
