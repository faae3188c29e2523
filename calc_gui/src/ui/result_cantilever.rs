//! Results view for cantilever deflection
//!
//! Shows:
//! - Tip deflection headline
//! - Support reaction and fixed-end moment
//! - Deflection chart along the length
//! - Formulas used

use iced::widget::{column, text, Canvas, Column, Space};
use iced::{Color, Element, Length};

use calc_core::calculations::CantileverResult;

use crate::Message;
use super::shared::charts::LineChart;
use super::shared::formulas;

/// Render the cantilever results
pub fn view(result: &CantileverResult) -> Column<'_, Message> {
    let chart: Element<'_, Message> = Canvas::new(
        LineChart::new(
            "Deflection Along the Length of the I-Beam",
            result.deflection_curve.clone(),
        )
        .x_axis("Length Along the Beam (m)", "m")
        .y_axis("Deflection (m)", "m")
        .color(Color::from_rgb(0.2, 0.7, 0.3)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(300.0))
    .into();

    view_summary(result)
        .push(Space::new().height(15))
        .push(chart)
        .push(Space::new().height(15))
        .push(formulas::view(&result.equations_used))
}

fn view_summary(result: &CantileverResult) -> Column<'_, Message> {
    let mut summary = column![
        text(result.tip_deflection_message()).size(16).color([0.2, 0.6, 0.2]),
        Space::new().height(8),
        text(format!("Support reaction: {:.1} N", result.support_reaction_n)).size(11),
        text(format!("Fixed-end moment: {:.1} N·m", result.fixed_end_moment_nm)).size(11),
    ]
    .spacing(4);

    // The plotted curve and the tip formula disagree at x = L
    if let Some(ratio) = result.curve_to_tip_ratio() {
        summary = summary.push(
            text(format!(
                "The curve ends at {:.6} m ({:.3}x the tip deflection).",
                result.curve_tip_deflection_m, ratio
            ))
            .size(10)
            .color([0.6, 0.3, 0.0]),
        );
    }

    summary
}
