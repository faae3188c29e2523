//! Input view for the actuator sizing calculator
//!
//! Stroke is typed; motor power and maximum speed use sliders over the
//! ranges in [`crate::forms`]. Nothing is computed until Calculate.

use iced::widget::{button, column, rule, text, Column, Space};
use iced::{Length, Padding};

use crate::forms::{ActuatorForm, MAX_SPEED_RANGE_M_S, MOTOR_POWER_RANGE_W};
use crate::Message;
use super::shared::fields::{labeled_input, labeled_slider};

/// Render the actuator editor
pub fn view(form: &ActuatorForm) -> Column<'_, Message> {
    column![
        text("Actuator Sizing").size(14),
        text("Estimate how long a linear actuator takes to cover its stroke.")
            .size(10)
            .color([0.5, 0.5, 0.5]),
        Space::new().height(8),
        labeled_input("Stroke Length (mm):", &form.stroke_mm, Message::StrokeChanged),
        labeled_slider(
            "Motor Power (W):",
            MOTOR_POWER_RANGE_W,
            form.motor_power_w,
            1.0,
            0,
            Message::MotorPowerChanged,
        ),
        labeled_slider(
            "Maximum Speed (m/s):",
            MAX_SPEED_RANGE_M_S,
            form.max_speed_m_s,
            0.1,
            1,
            Message::MaxSpeedChanged,
        ),
        Space::new().height(8),
        rule::horizontal(1),
        Space::new().height(8),
        button(text("Calculate").size(12))
            .on_press(Message::CalculateActuator)
            .padding(Padding::from([6, 16]))
            .style(button::primary)
            .width(Length::Shrink),
    ]
    .spacing(6)
}
