//! The verification form controller.

use std::cell::{Cell, RefCell};

use tracing::{debug, info, warn};

use mever_client::{interpret_response, ClientConfig, VerifyError, VerifyTransport};
use mever_types::{
    FileSelection, ImageUpload, SelectionError, VerificationResult, DEFAULT_MAX_UPLOAD_BYTES,
};

use crate::busy::BusyGuard;
use crate::preview::data_uri;
use crate::view::{FormView, ResultPanel};

/// Presentation and validation settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOptions {
    /// Largest accepted file, in bytes.
    pub max_upload_bytes: usize,
    /// Name shown in the result headline.
    pub subject: String,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            subject: "ME".to_string(),
        }
    }
}

impl From<&ClientConfig> for FormOptions {
    fn from(config: &ClientConfig) -> Self {
        Self {
            max_upload_bytes: config.max_upload_bytes(),
            subject: config.subject.clone(),
        }
    }
}

/// Why a submit did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    NothingSelected,
    Busy,
}

/// What a call to [`VerificationForm::submit`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The service answered with a verdict; it is now rendered.
    Verified(VerificationResult),
    /// The attempt failed; the error panel shows `user_message()`.
    Failed(VerifyError),
    /// No request was sent.
    Ignored(IgnoreReason),
}

/// Panels the controller writes; the enable/spinner flags are derived.
#[derive(Default)]
struct Panels {
    preview: Option<String>,
    error: Option<String>,
    result: Option<ResultPanel>,
}

pub struct VerificationForm<T> {
    transport: T,
    options: FormOptions,
    current: RefCell<Option<ImageUpload>>,
    busy: Cell<bool>,
    panels: RefCell<Panels>,
}

impl<T: VerifyTransport> VerificationForm<T> {
    pub fn new(transport: T, options: FormOptions) -> Self {
        Self {
            transport,
            options,
            current: RefCell::new(None),
            busy: Cell::new(false),
            panels: RefCell::new(Panels::default()),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Whether a submit would send a request right now.
    pub fn can_submit(&self) -> bool {
        !self.busy.get() && self.current.borrow().is_some()
    }

    /// The currently accepted upload, if any.
    pub fn selected(&self) -> Option<ImageUpload> {
        self.current.borrow().clone()
    }

    /// Snapshot of what the form shows.
    pub fn view(&self) -> FormView {
        let panels = self.panels.borrow();
        FormView {
            submit_enabled: self.can_submit(),
            spinner_visible: self.is_busy(),
            preview: panels.preview.clone(),
            error: panels.error.clone(),
            result: panels.result.clone(),
        }
    }

    /// Handle a file selection. `None` means the user cleared the picker.
    ///
    /// A rejected selection replaces any previous one: nothing stays
    /// selected and the error panel explains why. A request already in
    /// flight is not affected.
    pub fn select_file(&self, selection: Option<FileSelection>) -> Result<(), SelectionError> {
        {
            let mut panels = self.panels.borrow_mut();
            panels.error = None;
            panels.result = None;
        }

        let Some(selection) = selection else {
            debug!("selection cleared");
            self.clear_selection();
            return Ok(());
        };

        let file_name = selection.file_name.clone();
        match selection.accept(self.options.max_upload_bytes) {
            Ok(upload) => {
                debug!(
                    file = %upload.file_name,
                    media_type = %upload.media_type,
                    bytes = upload.len(),
                    "file selected"
                );
                self.panels.borrow_mut().preview = Some(data_uri(&upload));
                *self.current.borrow_mut() = Some(upload);
                Ok(())
            }
            Err(e) => {
                warn!(file = %file_name, "selection rejected: {e}");
                self.clear_selection();
                self.show_error(e.to_string());
                Err(e)
            }
        }
    }

    /// Upload the selected file and render the outcome.
    ///
    /// Ignored while a request is in flight or when nothing is selected.
    /// The busy flag is held exactly for the duration of the request and
    /// its handling.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(upload) = self.selected() else {
            return SubmitOutcome::Ignored(IgnoreReason::NothingSelected);
        };
        let Some(_busy) = BusyGuard::engage(&self.busy) else {
            debug!("submit ignored: request in flight");
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        };

        debug!(
            transport = self.transport.name(),
            file = %upload.file_name,
            "submitting"
        );
        let outcome = match self.transport.verify(&upload).await {
            Ok(raw) => interpret_response(&raw),
            Err(e) => Err(VerifyError::from(e)),
        };

        match outcome {
            Ok(result) => {
                info!(
                    is_me = result.is_me,
                    score = result.score,
                    threshold = result.threshold,
                    timing_ms = result.timing_ms,
                    "verification complete"
                );
                self.show_result(&result);
                SubmitOutcome::Verified(result)
            }
            Err(e) => {
                warn!("verification failed: {e}");
                self.show_error(e.user_message());
                SubmitOutcome::Failed(e)
            }
        }
    }

    fn clear_selection(&self) {
        *self.current.borrow_mut() = None;
        self.panels.borrow_mut().preview = None;
    }

    fn show_error(&self, message: String) {
        let mut panels = self.panels.borrow_mut();
        panels.result = None;
        panels.error = Some(message);
    }

    fn show_result(&self, result: &VerificationResult) {
        let mut panels = self.panels.borrow_mut();
        panels.error = None;
        panels.result = Some(ResultPanel::render(result, &self.options.subject));
    }
}
