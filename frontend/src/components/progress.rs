use leptos::*;
use crate::UploadProgress;

/// Upload progress bar, shown only while a submission is in flight.
#[component]
pub fn ProgressBar(
    visible: ReadSignal<bool>,
    progress: ReadSignal<UploadProgress>,
) -> impl IntoView {
    view! {
        <div
            class="progress-bar"
            id="progressBar"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <div
                class="progress-fill"
                id="progressFill"
                style:width=move || progress.get().css_width()
            ></div>
        </div>
    }
}
