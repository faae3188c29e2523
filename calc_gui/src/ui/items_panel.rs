//! Items Panel (Left Sidebar)
//!
//! Lists the calculators; the selected one is highlighted.

use iced::widget::{button, column, container, rule, text, Column};
use iced::{Element, Length, Padding};

use crate::{Calculator, Message};

/// Render the items panel (left sidebar)
pub fn view_items_panel(selection: Calculator, width: f32) -> Element<'static, Message> {
    let mut panel_content: Column<'_, Message> = column![
        text("Calculators").size(11).color([0.5, 0.5, 0.5]),
        rule::horizontal(1),
    ]
    .spacing(4);

    for calculator in Calculator::ALL {
        let style = if calculator == selection {
            button::primary
        } else {
            button::secondary
        };

        panel_content = panel_content.push(
            button(text(calculator.display_name()).size(11))
                .on_press(Message::SelectCalculator(calculator))
                .padding(Padding::from([4, 8]))
                .style(style)
                .width(Length::Fill),
        );
    }

    container(panel_content.padding(4))
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(4)
        .into()
}
