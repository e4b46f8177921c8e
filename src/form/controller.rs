//! Form controller: the only owner of the validation state.
//!
//! Transitions:
//! - submit: extract, validate, then either hold the record (success banner,
//!   download enabled, auto-hide scheduled) or clear it (error banner,
//!   download disabled)
//! - field change: clear the record, hide both banners, disable download
//! - download: encode and offer when a record is held, otherwise show the
//!   error banner
//! - tick: hide the success banner once its deadline passes

use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use super::capability::{FormFieldSource, Presenter};
use super::state::{AutoHide, ValidationState};
use crate::csv::encode_record;
use crate::download::DownloadSink;
use crate::error::AppError;
use crate::models::{blank_fields, is_valid, DownloadOutcome};

/// How long the success banner stays up after a valid submit
pub const SUCCESS_HIDE_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Default)]
pub struct FormController {
    state: ValidationState,
    auto_hide: AutoHide,
}

impl FormController {
    /// Start in the empty state with download disabled
    pub fn new<P: Presenter>(presenter: &mut P) -> Self {
        presenter.set_download_enabled(false);
        Self::default()
    }

    pub fn state(&self) -> &ValidationState {
        &self.state
    }

    #[cfg(test)]
    pub fn auto_hide_pending(&self) -> bool {
        self.auto_hide.is_pending()
    }

    pub fn on_submit<S, P>(&mut self, source: &S, presenter: &mut P, now: Instant)
    where
        S: FormFieldSource,
        P: Presenter,
    {
        presenter.hide_all();
        // A stale hide from an earlier submit must not cut this banner short
        self.auto_hide.cancel();

        let record = source.read();
        if is_valid(&record) {
            info!(roll_number = %record.roll_number, "submission accepted");
            self.state = ValidationState::Valid(record);
            presenter.show_success();
            presenter.set_download_enabled(true);
            self.auto_hide.schedule(now + SUCCESS_HIDE_DELAY);
        } else {
            let blank: Vec<&str> = blank_fields(&record).iter().map(|f| f.id()).collect();
            warn!(?blank, "submission rejected");
            self.state = ValidationState::Empty;
            presenter.show_error();
            presenter.set_download_enabled(false);
        }
    }

    pub fn on_field_change<P: Presenter>(&mut self, presenter: &mut P) {
        if self.state.is_valid() {
            debug!("field changed, discarding validated record");
        }
        self.state = ValidationState::Empty;
        self.auto_hide.cancel();
        presenter.hide_all();
        presenter.set_download_enabled(false);
    }

    pub fn on_download<P, D>(
        &mut self,
        presenter: &mut P,
        sink: &mut D,
    ) -> Result<DownloadOutcome, AppError>
    where
        P: Presenter,
        D: DownloadSink,
    {
        match &self.state {
            ValidationState::Valid(record) => {
                let content = encode_record(record);
                let path = sink.offer(&content)?;
                Ok(DownloadOutcome::Offered(path))
            }
            ValidationState::Empty => {
                error!("no valid data to download");
                presenter.show_error();
                Ok(DownloadOutcome::NoValidRecord)
            }
        }
    }

    pub fn on_tick<P: Presenter>(&mut self, presenter: &mut P, now: Instant) {
        if self.auto_hide.fire_if_due(now) {
            debug!("success banner expired");
            presenter.hide_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::CSV_HEADER;
    use crate::models::record::sample_record;
    use crate::models::RegistrationRecord;
    use std::path::PathBuf;

    #[derive(Debug, Default)]
    struct RecordingPresenter {
        success: bool,
        error: bool,
        download_enabled: bool,
    }

    impl Presenter for RecordingPresenter {
        fn show_success(&mut self) {
            self.success = true;
        }
        fn show_error(&mut self) {
            self.error = true;
        }
        fn hide_all(&mut self) {
            self.success = false;
            self.error = false;
        }
        fn set_download_enabled(&mut self, enabled: bool) {
            self.download_enabled = enabled;
        }
    }

    struct StaticSource(RegistrationRecord);

    impl FormFieldSource for StaticSource {
        fn read(&self) -> RegistrationRecord {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct MemorySink {
        offers: Vec<String>,
    }

    impl DownloadSink for MemorySink {
        fn offer(&mut self, content: &str) -> Result<PathBuf, AppError> {
            self.offers.push(content.to_string());
            Ok(PathBuf::from(format!("offer-{}.csv", self.offers.len())))
        }
    }

    struct FailingSink;

    impl DownloadSink for FailingSink {
        fn offer(&mut self, _content: &str) -> Result<PathBuf, AppError> {
            Err(AppError::Io(std::io::Error::other("disk full")))
        }
    }

    fn setup() -> (FormController, RecordingPresenter) {
        let mut presenter = RecordingPresenter {
            download_enabled: true,
            ..Default::default()
        };
        let controller = FormController::new(&mut presenter);
        (controller, presenter)
    }

    #[test]
    fn test_initial_state_is_empty_and_disabled() {
        let (controller, presenter) = setup();
        assert_eq!(controller.state(), &ValidationState::Empty);
        assert!(!presenter.download_enabled);
        assert!(!presenter.success && !presenter.error);
    }

    #[test]
    fn test_valid_submit_holds_record() {
        let (mut controller, mut presenter) = setup();
        let source = StaticSource(sample_record());

        controller.on_submit(&source, &mut presenter, Instant::now());

        assert_eq!(controller.state().record(), Some(&sample_record()));
        assert!(presenter.success);
        assert!(!presenter.error);
        assert!(presenter.download_enabled);
        assert!(controller.auto_hide_pending());
    }

    #[test]
    fn test_blank_name_submit_is_rejected() {
        let (mut controller, mut presenter) = setup();
        let mut record = sample_record();
        record.name = String::new();

        controller.on_submit(&StaticSource(record), &mut presenter, Instant::now());

        assert_eq!(controller.state(), &ValidationState::Empty);
        assert!(presenter.error);
        assert!(!presenter.success);
        assert!(!presenter.download_enabled);
    }

    #[test]
    fn test_invalid_submit_clears_previous_record() {
        let (mut controller, mut presenter) = setup();
        let now = Instant::now();
        controller.on_submit(&StaticSource(sample_record()), &mut presenter, now);

        controller.on_submit(&StaticSource(RegistrationRecord::default()), &mut presenter, now);

        assert_eq!(controller.state(), &ValidationState::Empty);
        assert!(presenter.error);
        assert!(!presenter.success);
        assert!(!presenter.download_enabled);
        assert!(!controller.auto_hide_pending());
    }

    #[test]
    fn test_download_after_valid_submit_offers_csv() {
        let (mut controller, mut presenter) = setup();
        let mut sink = MemorySink::default();
        controller.on_submit(&StaticSource(sample_record()), &mut presenter, Instant::now());

        let outcome = controller.on_download(&mut presenter, &mut sink).unwrap();

        assert_eq!(outcome, DownloadOutcome::Offered(PathBuf::from("offer-1.csv")));
        assert_eq!(
            sink.offers,
            vec![format!(
                "{}\nJane Doe,21CS045,ABC Inst,CS,jane@x.com,9999999999,Female,2",
                CSV_HEADER
            )]
        );
        assert!(controller.state().is_valid());
    }

    #[test]
    fn test_repeated_download_offers_each_time() {
        let (mut controller, mut presenter) = setup();
        let mut sink = MemorySink::default();
        controller.on_submit(&StaticSource(sample_record()), &mut presenter, Instant::now());

        controller.on_download(&mut presenter, &mut sink).unwrap();
        controller.on_download(&mut presenter, &mut sink).unwrap();

        assert_eq!(sink.offers.len(), 2);
        assert_eq!(sink.offers[0], sink.offers[1]);
    }

    #[test]
    fn test_field_change_after_success_blocks_download() {
        let (mut controller, mut presenter) = setup();
        let mut sink = MemorySink::default();
        controller.on_submit(&StaticSource(sample_record()), &mut presenter, Instant::now());

        controller.on_field_change(&mut presenter);
        assert_eq!(controller.state(), &ValidationState::Empty);
        assert!(!presenter.success && !presenter.error);
        assert!(!presenter.download_enabled);

        let outcome = controller.on_download(&mut presenter, &mut sink).unwrap();
        assert_eq!(outcome, DownloadOutcome::NoValidRecord);
        assert!(sink.offers.is_empty());
        assert!(presenter.error);
    }

    #[test]
    fn test_field_change_hides_error_banner() {
        let (mut controller, mut presenter) = setup();
        controller.on_submit(&StaticSource(RegistrationRecord::default()), &mut presenter, Instant::now());
        assert!(presenter.error);

        controller.on_field_change(&mut presenter);
        assert!(!presenter.error);
    }

    #[test]
    fn test_download_in_empty_state_shows_error() {
        let (mut controller, mut presenter) = setup();
        let mut sink = MemorySink::default();

        let outcome = controller.on_download(&mut presenter, &mut sink).unwrap();

        assert_eq!(outcome, DownloadOutcome::NoValidRecord);
        assert!(presenter.error);
        assert!(sink.offers.is_empty());
    }

    #[test]
    fn test_download_failure_keeps_state() {
        let (mut controller, mut presenter) = setup();
        controller.on_submit(&StaticSource(sample_record()), &mut presenter, Instant::now());

        let result = controller.on_download(&mut presenter, &mut FailingSink);

        assert!(result.is_err());
        assert!(controller.state().is_valid());
    }

    #[test]
    fn test_success_banner_hides_after_exactly_five_seconds() {
        let (mut controller, mut presenter) = setup();
        let start = Instant::now();
        controller.on_submit(&StaticSource(sample_record()), &mut presenter, start);

        controller.on_tick(&mut presenter, start + Duration::from_millis(4999));
        assert!(presenter.success);

        controller.on_tick(&mut presenter, start + Duration::from_millis(5000));
        assert!(!presenter.success);
        // Hiding the banner leaves the record and download alone
        assert!(controller.state().is_valid());
        assert!(presenter.download_enabled);
    }

    #[test]
    fn test_resubmit_cancels_stale_hide() {
        let (mut controller, mut presenter) = setup();
        let start = Instant::now();
        let source = StaticSource(sample_record());
        controller.on_submit(&source, &mut presenter, start);
        controller.on_submit(&source, &mut presenter, start + Duration::from_millis(3000));

        // First deadline would have been start + 5000
        controller.on_tick(&mut presenter, start + Duration::from_millis(5000));
        assert!(presenter.success);

        controller.on_tick(&mut presenter, start + Duration::from_millis(8000));
        assert!(!presenter.success);
    }

    #[test]
    fn test_field_change_cancels_pending_hide() {
        let (mut controller, mut presenter) = setup();
        let start = Instant::now();
        controller.on_submit(&StaticSource(sample_record()), &mut presenter, start);
        controller.on_field_change(&mut presenter);
        assert!(!controller.auto_hide_pending());

        // A later error banner survives the old deadline
        controller.on_submit(&StaticSource(RegistrationRecord::default()), &mut presenter, start);
        controller.on_tick(&mut presenter, start + Duration::from_millis(6000));
        assert!(presenter.error);
    }
}
