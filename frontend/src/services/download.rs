//! Browser-native download of the cut video.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use crate::types::{UploadError, UploadResult};

fn dom_error(context: &'static str) -> impl Fn(JsValue) -> UploadError {
    move |e| UploadError::Dom(format!("{}: {:?}", context, e))
}

/// Start downloading `link` through a temporary anchor.
///
/// The anchor carries an empty `download` attribute so the browser saves
/// the file under the name the server suggests, and is removed right
/// after the click.
pub fn trigger_download(link: &str) -> UploadResult<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| UploadError::Dom("No document available".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| UploadError::Dom("Document has no body".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(dom_error("Failed to create anchor"))?
        .dyn_into()
        .map_err(|_| UploadError::Dom("Created element is not an anchor".to_string()))?;
    anchor.set_href(link);
    anchor.set_download("");

    body.append_child(&anchor)
        .map_err(dom_error("Failed to insert anchor"))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(dom_error("Failed to remove anchor"))?;

    log::info!("Download started: {}", link);
    Ok(())
}
