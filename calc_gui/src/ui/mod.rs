//! UI module for Mechcalc GUI
//!
//! # Panel Structure
//! - `toolbar` - Title and theme toggle
//! - `items_panel` - Left sidebar: calculator list
//! - `input_panel` - Center panel: dispatches to input_* child modules
//! - `results_panel` - Right panel: dispatches to result_* child modules
//! - `status_bar` - Bottom status messages
//!
//! # Input Panel Children
//! - `input_actuator` - Stroke, motor power and speed
//! - `input_cantilever` - Load, length, modulus and inertia
//!
//! # Results Panel Children
//! - `result_actuator` - Traversal time, motion profile chart
//! - `result_cantilever` - Tip deflection, deflection chart
//!
//! # Shared Components
//! - `shared/charts` - Canvas line chart with hover readout
//! - `shared/fields` - Labeled form rows
//! - `shared/formulas` - Formulas section built from the equation registry

// Top-level panels
pub mod toolbar;
pub mod items_panel;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;

// Input panel children
pub mod input_actuator;
pub mod input_cantilever;

// Results panel children
pub mod result_actuator;
pub mod result_cantilever;

// Shared components
pub mod shared;
