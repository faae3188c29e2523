//! # Mechcalc GUI Application
//!
//! Desktop front end for the two estimating calculators, built with Iced.
//!
//! The actuator result is computed when the user presses Calculate. The
//! cantilever result follows the form and is recomputed on every edit,
//! including once at startup with the default values.

mod forms;
mod ui;

use iced::widget::{column, row};
use iced::{Element, Length, Theme};
use tracing_subscriber::EnvFilter;

use calc_core::calculations::{actuator, cantilever, ActuatorResult, CantileverResult};
use calc_core::{CalcResult, CalcSettings};

use forms::{ActuatorForm, BeamForm};

/// Input panel share of the space next to the results panel
const INPUT_PANEL_RATIO: f32 = 0.35;

fn main() -> iced::Result {
    init_tracing();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting Mechcalc GUI");

    iced::application(App::new, App::update, App::view)
        .title("Mechcalc")
        .theme(App::theme)
        .window_size((1200.0, 760.0))
        .run()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Calculator shown in the input and results panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculator {
    Actuator,
    Cantilever,
}

impl Calculator {
    pub const ALL: [Calculator; 2] = [Calculator::Actuator, Calculator::Cantilever];

    pub fn display_name(&self) -> &'static str {
        match self {
            Calculator::Actuator => "Actuator Sizing",
            Calculator::Cantilever => "Beam Deflection",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectCalculator(Calculator),
    ToggleDarkMode,

    // Actuator
    StrokeChanged(String),
    MotorPowerChanged(f64),
    MaxSpeedChanged(f64),
    CalculateActuator,

    // Cantilever
    LoadChanged(String),
    LengthChanged(String),
    ModulusChanged(String),
    InertiaChanged(String),
}

pub struct App {
    pub selection: Calculator,
    pub dark_mode: bool,
    pub status: String,
    pub settings: CalcSettings,

    pub actuator_form: ActuatorForm,
    /// None until Calculate is pressed
    pub actuator_outcome: Option<CalcResult<ActuatorResult>>,

    pub beam_form: BeamForm,
    pub beam_outcome: Option<CalcResult<CantileverResult>>,
}

impl App {
    fn new() -> Self {
        let mut app = App {
            selection: Calculator::Actuator,
            dark_mode: false,
            status: "Ready".to_string(),
            settings: CalcSettings::default(),
            actuator_form: ActuatorForm::default(),
            actuator_outcome: None,
            beam_form: BeamForm::default(),
            beam_outcome: None,
        };
        app.recalculate_beam();
        app.status = "Ready".to_string();
        app
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::SelectCalculator(calculator) => {
                self.selection = calculator;
                self.status = format!("{} selected", calculator.display_name());
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
            Message::StrokeChanged(value) => {
                self.actuator_form.stroke_mm = value;
            }
            Message::MotorPowerChanged(value) => {
                self.actuator_form.motor_power_w = value;
            }
            Message::MaxSpeedChanged(value) => {
                self.actuator_form.max_speed_m_s = value;
            }
            Message::CalculateActuator => {
                self.calculate_actuator();
            }
            Message::LoadChanged(value) => {
                self.beam_form.load_n_m = value;
                self.recalculate_beam();
            }
            Message::LengthChanged(value) => {
                self.beam_form.length_m = value;
                self.recalculate_beam();
            }
            Message::ModulusChanged(value) => {
                self.beam_form.modulus_gpa = value;
                self.recalculate_beam();
            }
            Message::InertiaChanged(value) => {
                self.beam_form.inertia_m4 = value;
                self.recalculate_beam();
            }
        }
    }

    fn calculate_actuator(&mut self) {
        let outcome = self
            .actuator_form
            .to_input()
            .and_then(|input| actuator::calculate(&input, &self.settings));

        self.status = match &outcome {
            Ok(result) => result.traversal_time_message(),
            Err(e) => {
                tracing::warn!(error = %e, "actuator calculation rejected");
                format!("Actuator: {}", e)
            }
        };
        self.actuator_outcome = Some(outcome);
    }

    fn recalculate_beam(&mut self) {
        let outcome = self
            .beam_form
            .to_input()
            .and_then(|input| cantilever::calculate(&input, &self.settings));

        self.status = match &outcome {
            Ok(result) => result.tip_deflection_message(),
            Err(e) => {
                tracing::debug!(error = %e, "cantilever form not computable");
                format!("Beam: {}", e)
            }
        };
        self.beam_outcome = Some(outcome);
    }

    fn view(&self) -> Element<'_, Message> {
        let panels = row![
            ui::items_panel::view_items_panel(self.selection, 170.0),
            ui::input_panel::view_input_panel(self, INPUT_PANEL_RATIO),
            ui::results_panel::view_results_panel(self, INPUT_PANEL_RATIO),
        ]
        .spacing(6)
        .height(Length::Fill);

        column![
            ui::toolbar::view_toolbar(self.dark_mode),
            panels,
            ui::status_bar::view_status_bar(&self.status),
        ]
        .spacing(4)
        .padding(8)
        .into()
    }
}
