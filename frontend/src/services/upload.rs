//! HTTP upload of the video form to the cutting server.
//!
//! Uses `XMLHttpRequest`: `fetch` exposes no upload progress events.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, EventTarget, FormData, ProgressEvent, XmlHttpRequest};

use crate::config::{status_error_message, ACCEPT_JSON, NETWORK_ERROR_MESSAGE, UPLOAD_ENDPOINT};
use crate::types::{ServerResponse, UploadError, UploadProgress, UploadResult};

/// Callback receiving upload progress while the body is transmitted.
pub type ProgressSink = Rc<dyn Fn(UploadProgress)>;

/// Status line and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body, turning error statuses into [`UploadError::Server`].
    ///
    /// Error bodies that are not JSON, or lack an `error` field, get a
    /// message naming the status code.
    pub fn into_server_response(self) -> UploadResult<ServerResponse> {
        if !self.is_success() {
            let message = serde_json::from_str::<ServerResponse>(&self.body)
                .ok()
                .and_then(|body| body.error_message().map(str::to_string))
                .unwrap_or_else(|| status_error_message(self.status));
            return Err(UploadError::Server {
                status: self.status,
                message,
            });
        }

        serde_json::from_str(&self.body).map_err(|e| UploadError::MalformedResponse(e.to_string()))
    }
}

/// Sends one upload and reports its progress.
///
/// The browser implementation is [`XhrTransport`]; tests substitute
/// in-memory ones.
pub trait Transport {
    /// Request body handed over by the caller.
    type Payload;

    fn send(
        &self,
        payload: Self::Payload,
        on_progress: ProgressSink,
    ) -> LocalBoxFuture<'_, UploadResult<RawResponse>>;
}

/// `XMLHttpRequest` based transport posting multipart form data.
#[derive(Clone, Debug)]
pub struct XhrTransport {
    endpoint: String,
}

impl XhrTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for XhrTransport {
    fn default() -> Self {
        Self::new(UPLOAD_ENDPOINT)
    }
}

impl Transport for XhrTransport {
    type Payload = FormData;

    fn send(
        &self,
        payload: FormData,
        on_progress: ProgressSink,
    ) -> LocalBoxFuture<'_, UploadResult<RawResponse>> {
        Box::pin(post_form(&self.endpoint, payload, on_progress))
    }
}

/// Event listener removed from its target when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> UploadResult<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(js_error("Failed to attach listener"))?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

fn js_error(context: &'static str) -> impl Fn(JsValue) -> UploadError {
    move |e| UploadError::Dom(format!("{}: {:?}", context, e))
}

async fn post_form(
    url: &str,
    form: FormData,
    on_progress: ProgressSink,
) -> UploadResult<RawResponse> {
    let xhr = XmlHttpRequest::new().map_err(js_error("Failed to create XMLHttpRequest"))?;
    xhr.open_with_async("POST", url, true)
        .map_err(js_error("Failed to open request"))?;
    xhr.set_request_header("Accept", ACCEPT_JSON)
        .map_err(js_error("Failed to set Accept header"))?;

    let upload = xhr.upload().map_err(js_error("Upload target unavailable"))?;
    let _progress = Listener::attach(&upload, "progress", move |event: Event| {
        let Some(event) = event.dyn_ref::<ProgressEvent>() else {
            return;
        };
        if !event.length_computable() {
            return;
        }
        if let Some(progress) = UploadProgress::from_bytes(event.loaded(), event.total()) {
            log::debug!("Upload progress: {}%", progress.percent());
            on_progress(progress);
        }
    })?;

    // The executor runs synchronously, so both handles are set before use.
    let mut settle = None;
    let finished = js_sys::Promise::new(&mut |resolve, reject| settle = Some((resolve, reject)));
    let (resolve, reject) = settle.ok_or_else(|| UploadError::Dom("Promise executor not run".into()))?;

    let _load = Listener::attach(&xhr, "load", move |_| {
        let _ = resolve.call0(&JsValue::NULL);
    })?;
    let on_failure = {
        let reject = reject.clone();
        move |_: Event| {
            let _ = reject.call0(&JsValue::NULL);
        }
    };
    let _error = Listener::attach(&xhr, "error", on_failure.clone())?;
    let _abort = Listener::attach(&xhr, "abort", on_failure)?;

    xhr.send_with_opt_form_data(Some(&form))
        .map_err(js_error("Failed to send request"))?;

    if JsFuture::from(finished).await.is_err() {
        return Err(UploadError::Network(NETWORK_ERROR_MESSAGE.to_string()));
    }

    let status = xhr.status().map_err(js_error("Failed to read status"))?;
    let body = xhr
        .response_text()
        .map_err(js_error("Failed to read response body"))?
        .unwrap_or_default();
    log::info!("Upload finished with HTTP {}", status);

    Ok(RawResponse::new(status, body))
}
