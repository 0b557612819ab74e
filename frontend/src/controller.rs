//! Upload-and-download cycle behind the video form.
//!
//! [`UploadController`] owns a [`Transport`] and a [`View`] and runs one
//! submission at a time:
//!
//! ```text
//! submit ─► hide message, show progress (0%)
//!        ─► validate form ─► POST / ─► progress events
//!        ─► 2xx: success message, 100%, download link ─► anchor click
//!        ─► failure: error message
//!        ─► hide progress
//! ```

use std::cell::Cell;
use std::rc::Rc;

use crate::services::{validate, ProgressSink, Transport};
use crate::types::{
    FormSnapshot, Notice, SubmissionState, UploadError, UploadProgress, UploadResult,
};

/// The page elements a submission mutates.
pub trait View {
    fn hide_notice(&self);
    fn show_notice(&self, notice: Notice);
    fn show_progress(&self);
    fn set_progress(&self, progress: UploadProgress);
    fn hide_progress(&self);
    /// Hand `link` to the browser's download machinery.
    fn start_download(&self, link: &str) -> UploadResult<()>;
}

/// How a call to [`UploadController::handle_submit`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was still in flight; nothing was sent.
    Rejected,
    /// The server produced a file and its download was started.
    Downloaded(String),
    /// The cycle failed and the error was shown.
    Failed(UploadError),
}

pub struct UploadController<T, V> {
    transport: T,
    view: Rc<V>,
    state: Cell<SubmissionState>,
}

impl<T, V> UploadController<T, V>
where
    T: Transport,
    V: View + 'static,
{
    pub fn new(transport: T, view: V) -> Self {
        Self {
            transport,
            view: Rc::new(view),
            state: Cell::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Run one submission of the form.
    ///
    /// Never fails: every error ends up as an error notice. The progress
    /// bar is hidden and the controller back to idle on return, and also
    /// if the returned future is dropped early.
    pub async fn handle_submit(&self, snapshot: FormSnapshot, payload: T::Payload) -> SubmitOutcome {
        if self.state.get() == SubmissionState::Submitting {
            log::warn!("Submission ignored: an upload is already in progress");
            return SubmitOutcome::Rejected;
        }

        let _flight = InFlight::begin(&self.state, self.view.as_ref());

        match self.run(&snapshot, payload).await {
            Ok(link) => SubmitOutcome::Downloaded(link),
            Err(e) => {
                log::error!("Upload failed: {:?}", e);
                self.view.show_notice(Notice::from_error(&e));
                SubmitOutcome::Failed(e)
            }
        }
    }

    async fn run(&self, snapshot: &FormSnapshot, payload: T::Payload) -> UploadResult<String> {
        let params = validate(snapshot)?;
        log::info!(
            "Uploading {} (segments of {}s, removing {}s each)",
            snapshot.file_name.as_deref().unwrap_or_default(),
            params.segment_duration,
            params.removal_interval
        );

        let on_progress: ProgressSink = {
            let view = Rc::clone(&self.view);
            Rc::new(move |progress| view.set_progress(progress))
        };
        let response = self.transport.send(payload, on_progress).await?;
        let body = response.into_server_response()?;

        self.view
            .show_notice(Notice::success(body.message.clone().unwrap_or_default()));
        self.view.set_progress(UploadProgress::COMPLETE);

        let link = body.download_link().ok_or_else(|| {
            log::error!("Download link missing from response: {:?}", body);
            UploadError::MissingDownloadLink
        })?;
        self.view.start_download(link)?;
        Ok(link.to_string())
    }
}

/// Marks a submission as in flight until dropped.
struct InFlight<'a, V: View> {
    state: &'a Cell<SubmissionState>,
    view: &'a V,
}

impl<'a, V: View> InFlight<'a, V> {
    fn begin(state: &'a Cell<SubmissionState>, view: &'a V) -> Self {
        state.set(SubmissionState::Submitting);
        view.hide_notice();
        view.show_progress();
        view.set_progress(UploadProgress::START);
        Self { state, view }
    }
}

impl<V: View> Drop for InFlight<'_, V> {
    fn drop(&mut self) {
        self.view.hide_progress();
        self.state.set(SubmissionState::Idle);
    }
}
