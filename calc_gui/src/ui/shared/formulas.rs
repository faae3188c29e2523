//! Formulas section, listing what a result was computed with.

use iced::widget::{column, row, text, Column, Space};
use iced::{Length, Padding};

use calc_core::equations::Equation;

use crate::Message;

/// Name, plain formula and reference for each equation used
pub fn view<'a>(equations: &[Equation]) -> Column<'a, Message> {
    let mut section: Column<'a, Message> = column![text("Formulas").size(14), Space::new().height(4)]
        .spacing(4);

    for equation in equations {
        let meta = equation.metadata();
        section = section.push(
            column![
                row![
                    text(meta.name).size(11).width(Length::FillPortion(2)),
                    text(meta.formula_plain).size(11).width(Length::FillPortion(3)),
                ],
                text(meta.reference.citation()).size(9).color([0.5, 0.5, 0.5]),
            ]
            .spacing(1)
            .padding(Padding::from([2, 4])),
        );
    }

    section
}
