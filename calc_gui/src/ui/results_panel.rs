//! Results Panel (Right Side)
//!
//! Dispatches to the results view of the selected calculator, or shows the
//! error from the last attempt.

use iced::widget::{column, container, scrollable, text, Column, Space};
use iced::{Element, Length};

use calc_core::CalcError;

use crate::{App, Calculator, Message};
use super::{result_actuator, result_cantilever};

/// Render the results panel based on current selection and calculation state
///
/// Uses the complementary share of `input_ratio`.
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let content: Column<'_, Message> = match app.selection {
        Calculator::Actuator => match &app.actuator_outcome {
            Some(Ok(result)) => result_actuator::view(result),
            Some(Err(error)) => view_error(error),
            None => column![
                text("Press Calculate to estimate the traversal time").size(12).color([0.5, 0.5, 0.5])
            ],
        },
        Calculator::Cantilever => match &app.beam_outcome {
            Some(Ok(result)) => result_cantilever::view(result),
            Some(Err(error)) => view_error(error),
            None => column![],
        },
    };

    // Use complementary ratio (scale to 0-100 for better precision)
    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_error<'a>(error: &CalcError) -> Column<'a, Message> {
    column![
        text("Error").size(14),
        Space::new().height(8),
        text(error.to_string()).size(12).color([0.8, 0.2, 0.2]),
    ]
}
