//! Browser download of the raw table as CSV.
//!
//! The export runs entirely client side against the table already in
//! memory: serialize with [`hd_data::export`], wrap the bytes in a Blob,
//! and click a temporary anchor pointing at its object URL.

use hd_data::export::{self, EXPORT_FILENAME, EXPORT_MIME};
use hd_data::ObservationTable;
use wasm_bindgen::{JsCast, JsValue};

/// Offer `bytes` to the user as a file download.
pub fn download_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}

/// Export handler behind the dashboard's download button.
pub fn download_table_csv(table: &ObservationTable) -> anyhow::Result<()> {
    let bytes = export::to_csv_bytes(table)?;
    download_bytes(EXPORT_FILENAME, EXPORT_MIME, &bytes)
        .map_err(|e| anyhow::anyhow!("CSV download failed: {:?}", e))?;
    log::info!("[HD] download: Offered {} bytes as {}", bytes.len(), EXPORT_FILENAME);
    Ok(())
}
