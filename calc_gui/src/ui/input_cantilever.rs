//! Input view for the cantilever deflection calculator
//!
//! Results follow the form; every edit recalculates.

use iced::widget::{column, text, Column, Space};

use crate::forms::{BeamForm, INERTIA_MIN_M4, LENGTH_MIN_M, MODULUS_MIN_GPA};
use crate::Message;
use super::shared::fields::labeled_input;

/// Render the beam editor
pub fn view(form: &BeamForm) -> Column<'_, Message> {
    let minimums = format!(
        "Minimums: load 0 N/m, length {} m, modulus {} GPa, inertia {} m^4",
        LENGTH_MIN_M, MODULUS_MIN_GPA, INERTIA_MIN_M4
    );

    column![
        text("Beam Deflection").size(14),
        text("Cantilever I-beam under a uniformly distributed load.")
            .size(10)
            .color([0.5, 0.5, 0.5]),
        Space::new().height(8),
        labeled_input("Distributed Load (N/m):", &form.load_n_m, Message::LoadChanged),
        labeled_input("Length of Beam (m):", &form.length_m, Message::LengthChanged),
        labeled_input("Elastic Modulus (GPa):", &form.modulus_gpa, Message::ModulusChanged),
        labeled_input("Moment of Inertia (m^4):", &form.inertia_m4, Message::InertiaChanged),
        Space::new().height(4),
        text(minimums).size(9).color([0.5, 0.5, 0.5]),
    ]
    .spacing(6)
}
