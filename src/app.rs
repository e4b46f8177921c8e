//! Application state and core logic for the registration form.
//!
//! This module contains the `App` struct which holds the form controls,
//! indicator flags, the controller that owns the validation state, and
//! navigation state for the terminal UI.

use std::path::PathBuf;
use std::time::Instant;

use tracing::error;

use crate::download::FileDownload;
use crate::form::{FormController, FormInputs, ScreenIndicators};
use crate::input::FormAction;
use crate::models::{DownloadOutcome, Focus, RegistrationRecord};

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Failure,
}

/// Application state
pub struct App {
    pub inputs: FormInputs,
    pub indicators: ScreenIndicators,
    pub controller: FormController,
    pub focus: Focus,
    pub sink: FileDownload,
    // Last download result shown under the buttons
    pub status: Option<(StatusKind, String)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(output_dir: PathBuf, prefill: Option<&RegistrationRecord>) -> Self {
        let mut indicators = ScreenIndicators::default();
        let controller = FormController::new(&mut indicators);
        let mut inputs = FormInputs::new();
        if let Some(record) = prefill {
            inputs.prefill(record);
        }

        Self {
            inputs,
            indicators,
            controller,
            focus: Focus::default(),
            sink: FileDownload::new(output_dir),
            status: None,
            should_quit: false,
        }
    }

    /// Apply one key action
    pub fn handle_action(&mut self, action: FormAction, now: Instant) {
        match action {
            FormAction::Quit => self.should_quit = true,
            FormAction::FocusNext => self.focus = self.focus.next(),
            FormAction::FocusPrev => self.focus = self.focus.prev(),
            FormAction::Submit => self.submit(now),
            FormAction::Download => self.download(),
            FormAction::Activate => match self.focus {
                Focus::Field(_) => self.focus = self.focus.next(),
                Focus::Submit => self.submit(now),
                // A disabled button does not react to Enter
                Focus::Download if self.indicators.download_enabled => self.download(),
                Focus::Download => {}
            },
            FormAction::Insert(_)
            | FormAction::Backspace
            | FormAction::ClearField
            | FormAction::NextChoice
            | FormAction::PrevChoice => self.edit(action),
        }
    }

    /// Advance time-based state
    pub fn tick(&mut self, now: Instant) {
        self.controller.on_tick(&mut self.indicators, now);
    }

    fn edit(&mut self, action: FormAction) {
        let Some(field) = self.focus.field() else {
            return;
        };

        let changed = match action {
            FormAction::Insert(c) => self.inputs.insert_char(field, c),
            FormAction::Backspace => self.inputs.backspace(field),
            FormAction::ClearField => self.inputs.clear(field),
            FormAction::NextChoice if field.is_choice() => self.inputs.select_next_choice(),
            FormAction::PrevChoice if field.is_choice() => self.inputs.select_prev_choice(),
            _ => false,
        };

        if changed {
            self.controller.on_field_change(&mut self.indicators);
        }
    }

    fn submit(&mut self, now: Instant) {
        self.controller
            .on_submit(&self.inputs, &mut self.indicators, now);
    }

    fn download(&mut self) {
        match self.controller.on_download(&mut self.indicators, &mut self.sink) {
            Ok(DownloadOutcome::Offered(path)) => {
                self.status = Some((StatusKind::Info, format!("Saved {}", path.display())));
            }
            Ok(DownloadOutcome::NoValidRecord) => {}
            Err(e) => {
                error!(error = %e, "download failed");
                self.status = Some((StatusKind::Failure, e.to_string()));
            }
        }
    }
}
