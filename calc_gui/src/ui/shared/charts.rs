//! Canvas line chart
//!
//! Draws one sampled curve with gridlines, tick labels and axis titles.
//! Hovering the plot area snaps a crosshair to the nearest sample and
//! shows its coordinates.

use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use crate::Message;

const MARGIN_LEFT: f32 = 70.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 36.0;
const MARGIN_BOTTOM: f32 = 40.0;

const X_TICK_TARGET: usize = 6;
const Y_TICK_TARGET: usize = 5;

/// Data range covered by the axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extent {
    /// Bounding box of the finite points, widened where a span is zero.
    pub fn of(points: &[(f64, f64)]) -> Option<Self> {
        let mut finite = points.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = finite.next()?;

        let mut extent = Extent { x_min: x0, x_max: x0, y_min: y0, y_max: y0 };
        for &(x, y) in finite {
            extent.x_min = extent.x_min.min(x);
            extent.x_max = extent.x_max.max(x);
            extent.y_min = extent.y_min.min(y);
            extent.y_max = extent.y_max.max(y);
        }

        if extent.x_max <= extent.x_min {
            extent.x_max = extent.x_min + 1.0;
        }
        if extent.y_max <= extent.y_min {
            let pad = if extent.y_min == 0.0 { 1.0 } else { extent.y_min.abs() * 0.1 };
            extent.y_min -= pad;
            extent.y_max += pad;
        }

        Some(extent)
    }
}

/// Round a raw tick spacing up to 1, 2 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Evenly spaced round values inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if target == 0 || !span.is_finite() || span <= 0.0 {
        return vec![min];
    }

    let step = nice_step(span / target as f64);
    let first = (min / step).ceil() * step;
    let limit = max + step * 1e-9;

    // Rounding at large magnitudes can repeat values; the count stays bounded.
    let max_ticks = target * 4;
    let mut ticks = Vec::new();
    for index in 0..=max_ticks {
        let value = first + index as f64 * step;
        if value > limit {
            break;
        }
        // -0 prints as "-0"
        ticks.push(if value == 0.0 { 0.0 } else { value });
    }
    ticks
}

/// Tick label with just enough decimals for the tick spacing.
pub fn tick_label(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        ((-step.log10() - 1e-9).ceil().max(0.0) as usize).min(10)
    };
    format!("{:.*}", decimals, value)
}

/// Compact number for the hover readout.
pub fn readout_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e5).contains(&magnitude) {
        format!("{:.3e}", value)
    } else {
        format!("{:.3}", value)
    }
}

/// Sample whose x is closest to `x`. Points must be sorted by x.
pub fn nearest_sample(points: &[(f64, f64)], x: f64) -> Option<(f64, f64)> {
    let index = points.partition_point(|p| p.0 < x);
    let before = index.checked_sub(1).and_then(|i| points.get(i));
    let after = points.get(index);

    match (before, after) {
        (Some(b), Some(a)) => {
            if x - b.0 <= a.0 - x {
                Some(*b)
            } else {
                Some(*a)
            }
        }
        (Some(b), None) => Some(*b),
        (None, Some(a)) => Some(*a),
        (None, None) => None,
    }
}

/// Maps data coordinates onto the plot rectangle and back.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    rect: Rectangle,
    extent: Extent,
}

impl PlotArea {
    fn to_screen(&self, x: f64, y: f64) -> Point {
        let e = &self.extent;
        let fx = ((x - e.x_min) / (e.x_max - e.x_min)) as f32;
        let fy = ((y - e.y_min) / (e.y_max - e.y_min)) as f32;
        Point::new(
            self.rect.x + fx * self.rect.width,
            self.rect.y + self.rect.height - fy * self.rect.height,
        )
    }

    fn x_at(&self, px: f32) -> f64 {
        let e = &self.extent;
        let fraction = ((px - self.rect.x) / self.rect.width) as f64;
        e.x_min + fraction * (e.x_max - e.x_min)
    }
}

/// Canvas program for one labeled curve
pub struct LineChart {
    title: String,
    x_label: String,
    x_unit: String,
    y_label: String,
    y_unit: String,
    points: Vec<(f64, f64)>,
    color: Color,
}

impl LineChart {
    pub fn new(title: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            x_unit: String::new(),
            y_label: String::new(),
            y_unit: String::new(),
            points,
            color: Color::from_rgb(0.2, 0.5, 0.8),
        }
    }

    pub fn x_axis(mut self, label: impl Into<String>, unit: impl Into<String>) -> Self {
        self.x_label = label.into();
        self.x_unit = unit.into();
        self
    }

    pub fn y_axis(mut self, label: impl Into<String>, unit: impl Into<String>) -> Self {
        self.y_label = label.into();
        self.y_unit = unit.into();
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    fn readout(&self, x: f64, y: f64) -> String {
        format!(
            "{} {}, {} {}",
            readout_value(x),
            self.x_unit,
            readout_value(y),
            self.y_unit
        )
    }

    fn draw_grid(&self, frame: &mut Frame, plot: &PlotArea, text_color: Color) {
        let grid_color = Color { a: 0.15, ..text_color };
        let rect = plot.rect;
        let e = plot.extent;

        let x_ticks = nice_ticks(e.x_min, e.x_max, X_TICK_TARGET);
        let x_step = nice_step((e.x_max - e.x_min) / X_TICK_TARGET as f64);
        for value in x_ticks {
            let px = plot.to_screen(value, e.y_min).x;
            let line = Path::line(Point::new(px, rect.y), Point::new(px, rect.y + rect.height));
            frame.stroke(&line, Stroke::default().with_color(grid_color).with_width(1.0));

            frame.fill_text(Text {
                content: tick_label(value, x_step),
                position: Point::new(px, rect.y + rect.height + 4.0),
                color: text_color,
                size: iced::Pixels(9.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..Text::default()
            });
        }

        let y_ticks = nice_ticks(e.y_min, e.y_max, Y_TICK_TARGET);
        let y_step = nice_step((e.y_max - e.y_min) / Y_TICK_TARGET as f64);
        for value in y_ticks {
            let py = plot.to_screen(e.x_min, value).y;
            let line = Path::line(Point::new(rect.x, py), Point::new(rect.x + rect.width, py));
            frame.stroke(&line, Stroke::default().with_color(grid_color).with_width(1.0));

            frame.fill_text(Text {
                content: tick_label(value, y_step),
                position: Point::new(rect.x - 6.0, py - 5.0),
                color: text_color,
                size: iced::Pixels(9.0),
                align_x: iced::alignment::Horizontal::Right.into(),
                ..Text::default()
            });
        }

        // Axes
        let axis_color = Color { a: 0.7, ..text_color };
        let axes = Path::new(|builder| {
            builder.move_to(Point::new(rect.x, rect.y));
            builder.line_to(Point::new(rect.x, rect.y + rect.height));
            builder.line_to(Point::new(rect.x + rect.width, rect.y + rect.height));
        });
        frame.stroke(&axes, Stroke::default().with_color(axis_color).with_width(1.0));
    }

    fn draw_labels(&self, frame: &mut Frame, bounds: Rectangle, plot: &PlotArea, text_color: Color) {
        frame.fill_text(Text {
            content: self.title.clone(),
            position: Point::new(bounds.width / 2.0, 4.0),
            color: text_color,
            size: iced::Pixels(12.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });

        frame.fill_text(Text {
            content: self.y_label.clone(),
            position: Point::new(4.0, 20.0),
            color: text_color,
            size: iced::Pixels(10.0),
            ..Text::default()
        });

        frame.fill_text(Text {
            content: self.x_label.clone(),
            position: Point::new(plot.rect.x + plot.rect.width / 2.0, bounds.height - 16.0),
            color: text_color,
            size: iced::Pixels(10.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });
    }

    fn draw_curve(&self, frame: &mut Frame, plot: &PlotArea) {
        let curve = Path::new(|builder| {
            let mut started = false;
            for &(x, y) in &self.points {
                if !(x.is_finite() && y.is_finite()) {
                    continue;
                }
                let point = plot.to_screen(x, y);
                if started {
                    builder.line_to(point);
                } else {
                    builder.move_to(point);
                    started = true;
                }
            }
        });
        frame.stroke(&curve, Stroke::default().with_color(self.color).with_width(2.0));
    }

    fn draw_hover(&self, frame: &mut Frame, plot: &PlotArea, cursor: Point, text_color: Color) {
        if !plot.rect.contains(cursor) {
            return;
        }
        let Some((x, y)) = nearest_sample(&self.points, plot.x_at(cursor.x)) else {
            return;
        };
        let point = plot.to_screen(x, y);
        let rect = plot.rect;

        let crosshair = Path::line(Point::new(point.x, rect.y), Point::new(point.x, rect.y + rect.height));
        frame.stroke(
            &crosshair,
            Stroke::default().with_color(Color { a: 0.5, ..text_color }).with_width(1.0),
        );
        frame.fill(&Path::circle(point, 3.5), self.color);

        frame.fill_text(Text {
            content: self.readout(x, y),
            position: Point::new(rect.x + rect.width - 4.0, rect.y + 4.0),
            color: text_color,
            size: iced::Pixels(10.0),
            align_x: iced::alignment::Horizontal::Right.into(),
            ..Text::default()
        });
    }
}

impl canvas::Program<Message> for LineChart {
    /// Cursor position inside the canvas, if hovering
    type State = Option<Point>;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
            | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                let hovered = cursor.position_in(bounds);
                if hovered != *state {
                    *state = hovered;
                    Some(canvas::Action::request_redraw())
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let text_color = theme.palette().text;

        let plot_width = bounds.width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = bounds.height - MARGIN_TOP - MARGIN_BOTTOM;

        match Extent::of(&self.points) {
            Some(extent) if plot_width > 10.0 && plot_height > 10.0 => {
                let plot = PlotArea {
                    rect: Rectangle {
                        x: MARGIN_LEFT,
                        y: MARGIN_TOP,
                        width: plot_width,
                        height: plot_height,
                    },
                    extent,
                };

                self.draw_grid(&mut frame, &plot, text_color);
                self.draw_curve(&mut frame, &plot);
                self.draw_labels(&mut frame, bounds, &plot, text_color);
                if let Some(cursor) = state {
                    self.draw_hover(&mut frame, &plot, *cursor, text_color);
                }
            }
            _ => {
                frame.fill_text(Text {
                    content: "No data".to_string(),
                    position: Point::new(bounds.width / 2.0, bounds.height / 2.0),
                    color: text_color,
                    size: iced::Pixels(10.0),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    ..Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_of_points() {
        let extent = Extent::of(&[(0.0, -750.0), (1.0, 0.0), (2.0, 250.0)]).unwrap();
        assert_eq!(extent, Extent { x_min: 0.0, x_max: 2.0, y_min: -750.0, y_max: 250.0 });

        assert!(Extent::of(&[]).is_none());
        assert!(Extent::of(&[(f64::NAN, 1.0)]).is_none());
    }

    #[test]
    fn test_extent_widens_flat_curve() {
        let zero = Extent::of(&[(0.0, 0.0), (5.0, 0.0)]).unwrap();
        assert_eq!((zero.y_min, zero.y_max), (-1.0, 1.0));

        let flat = Extent::of(&[(0.0, 10.0), (5.0, 10.0)]).unwrap();
        assert_eq!((flat.y_min, flat.y_max), (9.0, 11.0));

        let single = Extent::of(&[(3.0, 1.0)]).unwrap();
        assert_eq!((single.x_min, single.x_max), (3.0, 4.0));
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(1.0), 1.0);
        assert_eq!(nice_step(250.0), 500.0);
        assert_eq!(nice_step(0.3), 0.5);
        assert_eq!(nice_step(7.0), 10.0);
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(0.0, 5.0, 5), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(nice_ticks(-750.0, 250.0, 4), vec![-500.0, 0.0]);
        assert_eq!(nice_ticks(2.0, 2.0, 5), vec![2.0]);
    }

    #[test]
    fn test_nice_ticks_bounded_for_tiny_span_at_large_magnitude() {
        // Span of one float spacing near 1e12; the step is smaller than that
        let ticks = nice_ticks(1.0e12, 1.0e12 + 1.0e-4, 5);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 21);
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(tick_label(500.0, 500.0), "500");
        assert_eq!(tick_label(0.5, 0.5), "0.5");
        assert_eq!(tick_label(0.0001, 0.00005), "0.00010");
    }

    #[test]
    fn test_readout_value() {
        assert_eq!(readout_value(0.0), "0");
        assert_eq!(readout_value(1.25), "1.250");
        assert_eq!(readout_value(0.00025), "2.500e-4");
        assert_eq!(readout_value(250000.0), "2.500e5");
    }

    #[test]
    fn test_nearest_sample() {
        let points = [(0.0, 0.0), (1.0, 10.0), (2.0, 20.0)];
        assert_eq!(nearest_sample(&points, -3.0), Some((0.0, 0.0)));
        assert_eq!(nearest_sample(&points, 0.4), Some((0.0, 0.0)));
        assert_eq!(nearest_sample(&points, 0.6), Some((1.0, 10.0)));
        assert_eq!(nearest_sample(&points, 9.0), Some((2.0, 20.0)));
        assert_eq!(nearest_sample(&[], 1.0), None);
    }

    #[test]
    fn test_plot_area_mapping() {
        let plot = PlotArea {
            rect: Rectangle { x: 10.0, y: 20.0, width: 100.0, height: 50.0 },
            extent: Extent { x_min: 0.0, x_max: 2.0, y_min: 0.0, y_max: 10.0 },
        };

        assert_eq!(plot.to_screen(0.0, 0.0), Point::new(10.0, 70.0));
        assert_eq!(plot.to_screen(2.0, 10.0), Point::new(110.0, 20.0));
        assert_eq!(plot.x_at(60.0), 1.0);
    }

    #[test]
    fn test_readout_uses_units() {
        let chart = LineChart::new("Motion Profile", vec![(0.0, 0.0)])
            .x_axis("Time (s)", "s")
            .y_axis("Position (mm)", "mm");
        assert_eq!(chart.readout(1.5, 125.0), "1.500 s, 125.000 mm");
    }
}
