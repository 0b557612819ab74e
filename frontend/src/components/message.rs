//! Status message shown under the upload form.

use leptos::*;
use crate::{Notice, MESSAGE_ID};

#[component]
pub fn StatusMessage(notice: ReadSignal<Option<Notice>>) -> impl IntoView {
    view! {
        <div
            id=MESSAGE_ID
            class=move || notice.get().map(|n| n.kind.css_class()).unwrap_or("message")
            style:display=move || if notice.get().is_some() { "block" } else { "none" }
        >
            {move || notice.get().map(|n| n.text).unwrap_or_default()}
        </div>
    }
}
