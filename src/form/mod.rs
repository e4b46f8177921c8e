//! Form logic, independent of any terminal.
//!
//! This module encapsulates the capture/validate/export cycle:
//! - `capability`: traits for reading controls and presenting outcomes
//! - `state`: validation state and the auto-hide deadline
//! - `controller`: the transitions driven by submit, edit, download and time
//! - `inputs`: terminal-side implementations of the capabilities

mod capability;
mod controller;
mod inputs;
mod state;

pub use capability::{FormFieldSource, Presenter};
pub use controller::FormController;
pub use inputs::{FormInputs, ScreenIndicators};
