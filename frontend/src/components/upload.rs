//! Video upload form.
//!
//! Renders the `videoForm` form, intercepts its submission and hands it
//! to an [`UploadController`] whose view is backed by this component's
//! signals.

use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, SubmitEvent};

use crate::components::{ProgressBar, StatusMessage};
use crate::controller::{UploadController, View};
use crate::services::{trigger_download, XhrTransport};
use crate::{
    FormSnapshot, Notice, UploadProgress, UploadResult, ACCEPTED_FILE_TYPES, FIELD_FILE,
    FIELD_REMOVAL_INTERVAL, FIELD_SEGMENT_DURATION, FORM_ID, UNEXPECTED_ERROR_MESSAGE,
};

/// [`View`] writing into the form's signals.
#[derive(Clone, Copy)]
struct SignalView {
    set_notice: WriteSignal<Option<Notice>>,
    set_uploading: WriteSignal<bool>,
    set_progress: WriteSignal<UploadProgress>,
}

impl View for SignalView {
    fn hide_notice(&self) {
        self.set_notice.set(None);
    }

    fn show_notice(&self, notice: Notice) {
        self.set_notice.set(Some(notice));
    }

    fn show_progress(&self) {
        self.set_uploading.set(true);
    }

    fn set_progress(&self, progress: UploadProgress) {
        self.set_progress.set(progress);
    }

    fn hide_progress(&self) {
        self.set_uploading.set(false);
    }

    fn start_download(&self, link: &str) -> UploadResult<()> {
        trigger_download(link)
    }
}

/// Copy the fields the controller validates out of the form data.
fn snapshot_of(form: &FormData) -> FormSnapshot {
    let text = |name: &str| form.get(name).as_string().unwrap_or_default();
    // An empty file input still submits a nameless File.
    let file_name = form
        .get(FIELD_FILE)
        .dyn_into::<File>()
        .ok()
        .map(|file| file.name())
        .filter(|name| !name.is_empty());

    FormSnapshot {
        file_name,
        segment_duration: text(FIELD_SEGMENT_DURATION),
        removal_interval: text(FIELD_REMOVAL_INTERVAL),
    }
}

#[component]
pub fn UploadForm() -> impl IntoView {
    let (notice, set_notice) = create_signal(None::<Notice>);
    let (uploading, set_uploading) = create_signal(false);
    let (progress, set_progress) = create_signal(UploadProgress::START);

    let view_handle = SignalView {
        set_notice,
        set_uploading,
        set_progress,
    };
    let controller = Rc::new(UploadController::new(XhrTransport::default(), view_handle));
    let form_ref = create_node_ref::<html::Form>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(form) = form_ref.get() else {
            log::error!("Upload form is not mounted");
            return;
        };
        let payload = match FormData::new_with_form(&form) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Failed to read form data: {:?}", e);
                view_handle.show_notice(Notice::error(UNEXPECTED_ERROR_MESSAGE));
                return;
            }
        };
        let snapshot = snapshot_of(&payload);

        log::info!("📤 Submitting {:?}", snapshot.file_name);
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            let outcome = controller.handle_submit(snapshot, payload).await;
            log::debug!("Submission ended: {:?}", outcome);
        });
    };

    view! {
        <form
            id=FORM_ID
            class="video-form"
            enctype="multipart/form-data"
            node_ref=form_ref
            on:submit=on_submit
        >
            <label for=FIELD_FILE>"Vídeo"</label>
            <input
                type="file"
                id=FIELD_FILE
                name=FIELD_FILE
                accept=ACCEPTED_FILE_TYPES
                required=true
            />

            <label for=FIELD_SEGMENT_DURATION>"Duração de cada segmento (segundos)"</label>
            <input
                type="number"
                id=FIELD_SEGMENT_DURATION
                name=FIELD_SEGMENT_DURATION
                min="1"
                step="1"
                required=true
            />

            <label for=FIELD_REMOVAL_INTERVAL>"Segundos removidos do fim de cada segmento"</label>
            <input
                type="number"
                id=FIELD_REMOVAL_INTERVAL
                name=FIELD_REMOVAL_INTERVAL
                min="0"
                step="1"
                required=true
            />

            <button type="submit" class="upload-button" disabled=move || uploading.get()>
                {move || if uploading.get() { "⏳ Enviando..." } else { "Cortar vídeo" }}
            </button>

            <ProgressBar visible=uploading progress=progress/>
        </form>

        <StatusMessage notice=notice/>
    }
}
