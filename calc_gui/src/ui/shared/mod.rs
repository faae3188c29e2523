//! Shared UI components reusable across input/result modules
//!
//! Contains:
//! - `charts` - Canvas line chart with axes and hover readout
//! - `fields` - Labeled text inputs and sliders
//! - `formulas` - Formulas section for a result

pub mod charts;
pub mod fields;
pub mod formulas;
