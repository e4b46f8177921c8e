//! Seams between the form logic and whatever draws the form.

use crate::models::RegistrationRecord;

/// Reads the current values of the eight form controls
pub trait FormFieldSource {
    /// Snapshot of the controls. Blank values are legal here; no validation.
    fn read(&self) -> RegistrationRecord;
}

/// Shows the outcome of form actions to the user
pub trait Presenter {
    fn show_success(&mut self);
    fn show_error(&mut self);
    /// Hide both the success and error indicators
    fn hide_all(&mut self);
    fn set_download_enabled(&mut self, enabled: bool);
}
