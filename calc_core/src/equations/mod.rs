//! # Mechanical Equations
//!
//! This module contains the closed-form formulas used by the calculators.
//! Having equations in one place enables:
//! - Easy verification against references
//! - Documentation of assumptions and sign conventions
//! - A single registry for the formula listings shown by the front ends
//!
//! ## Modules
//!
//! - [`kinematics`] - Constant-acceleration move formulas (traversal time, motion curves)
//! - [`cantilever`] - Cantilever beam formulas (reactions, deflection)
//! - [`registry`] - Equation metadata and tracking
//!
//! ## Sign Conventions
//!
//! - **Position / speed**: Positive along the stroke
//! - **Loads**: Positive downward (gravity direction)
//! - **Deflection**: Positive downward
//! - **Reactions**: Positive upward (resisting gravity)
//!
//! ## References
//!
//! - Hibbeler, Engineering Mechanics: Dynamics, 14th Edition
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod cantilever;
pub mod kinematics;
pub mod registry;

// Re-export commonly used items
pub use kinematics::{
    acceleration_distance,
    acceleration_time,
    envelope_position,
    piecewise_speed,
    reaches_peak_speed,
    trapezoidal_phase_times,
    triangular_accel_time,
};

pub use cantilever::{
    deflection_along_length,
    uniform_load_reactions,
    uniform_load_tip_deflection,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    Variable,
    ALL_EQUATIONS,
    formulas_summary,
    generate_equations_markdown,
};
