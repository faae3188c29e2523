//! Labeled form rows

use std::ops::RangeInclusive;

use iced::widget::{row, slider, text, text_input};
use iced::{Alignment, Element, Length};

use crate::Message;

const LABEL_WIDTH: f32 = 150.0;

/// Text input with a fixed-width label
pub fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Slider with a fixed-width label and the current value on the right
pub fn labeled_slider<'a>(
    label: &'a str,
    range: RangeInclusive<f64>,
    value: f64,
    step: f64,
    decimals: usize,
    on_change: impl Fn(f64) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        slider(range, value, on_change).step(step).width(Length::Fill),
        text(format!("{:.*}", decimals, value))
            .size(11)
            .width(Length::Fixed(48.0)),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
