//! Input Panel (Center)
//!
//! Dispatches to the input editor of the selected calculator.

use iced::widget::{container, scrollable, Column};
use iced::{Element, Length};

use crate::{App, Calculator, Message};
use super::{input_actuator, input_cantilever};

/// Render the input panel based on current selection
///
/// The `ratio` parameter determines the relative size of this panel vs results panel.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let panel: Column<'_, Message> = match app.selection {
        Calculator::Actuator => input_actuator::view(&app.actuator_form),
        Calculator::Cantilever => input_cantilever::view(&app.beam_form),
    };

    // Convert ratio to fill portion (scale to 0-100 for better precision)
    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
