//! Results view for actuator traversal
//!
//! Shows:
//! - Traversal time headline
//! - Profile breakdown (acceleration, cruise, peak speed)
//! - Motion profile and speed charts
//! - Formulas used

use iced::widget::{column, text, Canvas, Column, Space};
use iced::{Color, Element, Length};

use calc_core::calculations::{ActuatorResult, MotionProfile};

use crate::Message;
use super::shared::charts::LineChart;
use super::shared::formulas;

/// Render the actuator results
pub fn view(result: &ActuatorResult) -> Column<'_, Message> {
    let position_chart: Element<'_, Message> = Canvas::new(
        LineChart::new("Motion Profile", result.position_samples.clone())
            .x_axis("Time (s)", "s")
            .y_axis("Position (mm)", "mm"),
    )
    .width(Length::Fill)
    .height(Length::Fixed(280.0))
    .into();

    let speed_chart: Element<'_, Message> = Canvas::new(
        LineChart::new("Speed Profile", result.speed_samples.clone())
            .x_axis("Time (s)", "s")
            .y_axis("Speed (mm/s)", "mm/s")
            .color(Color::from_rgb(0.8, 0.4, 0.2)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(220.0))
    .into();

    view_summary(result)
        .push(Space::new().height(15))
        .push(position_chart)
        .push(Space::new().height(8))
        .push(speed_chart)
        .push(Space::new().height(15))
        .push(formulas::view(&result.equations_used))
}

fn view_summary(result: &ActuatorResult) -> Column<'_, Message> {
    let profile_note = match result.profile {
        MotionProfile::Trapezoidal => "Reaches maximum speed and cruises",
        MotionProfile::Triangular => "Stroke too short to reach maximum speed",
    };

    column![
        text(result.traversal_time_message()).size(16).color([0.2, 0.6, 0.2]),
        Space::new().height(8),
        text(format!("Profile: {} ({})", result.profile.display_name(), profile_note)).size(11),
        text(format!("Acceleration: {:.1} mm/s²", result.acceleration_mm_s2)).size(11),
        text(format!("Acceleration phase: {:.3} s (each end)", result.accel_time_s)).size(11),
        text(format!("Cruise phase: {:.3} s", result.cruise_time_s)).size(11),
        text(format!("Peak speed: {:.1} mm/s", result.peak_speed_mm_s)).size(11),
    ]
    .spacing(4)
}
