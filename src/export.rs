/// Table-to-PNG export through the page-global html2canvas library, loaded
/// from index.html. A failed export only reaches the console; the user sees
/// the absence of a downloaded file, nothing else.
use leptos::logging::log;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

pub const EXPORT_FILE_NAME: &str = "result_table.png";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window, js_name = "html2canvas")]
    fn html2canvas(element: &web_sys::Element) -> js_sys::Promise;
}

/// Captures the element with the given id and triggers a PNG download.
pub async fn export_region_png(element_id: &str) {
    if let Err(err) = capture_and_download(element_id).await {
        log!("[EXPORT] export of #{} failed: {:?}", element_id, err);
    }
}

async fn capture_and_download(element_id: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let region = document
        .get_element_by_id(element_id)
        .ok_or_else(|| JsValue::from_str("export region not found"))?;

    let canvas: HtmlCanvasElement = JsFuture::from(html2canvas(&region)).await?.dyn_into()?;
    let data_url = canvas.to_data_url_with_type("image/png")?;

    // Synthetic anchor click is what actually starts the browser download.
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&data_url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();
    Ok(())
}
