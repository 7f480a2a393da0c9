//! Browser file-download glue for PDF blobs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The builder and enhancer pages receive PDF bytes over authenticated
//! requests, so a plain link cannot trigger the download; the bytes are
//! wrapped in an object URL and clicked through a transient anchor.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Build a safe lowercase `.pdf` filename from a resume title.
///
/// Every non-ASCII-alphanumeric character becomes an underscore.
pub fn download_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.pdf")
}

/// Offer `bytes` to the user as a PDF download named `filename`.
#[cfg(feature = "browser")]
pub fn save_pdf(bytes: &[u8], filename: &str) {
    use wasm_bindgen::JsCast as _;

    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes).into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options) else {
        leptos::logging::warn!("download: blob construction failed");
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        leptos::logging::warn!("download: object URL creation failed");
        return;
    };

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let anchor = document
            .create_element("a")
            .ok()
            .and_then(|element| element.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        if let Some(anchor) = anchor {
            anchor.set_href(&url);
            anchor.set_download(filename);
            if let Some(body) = document.body() {
                let _ = body.append_child(&anchor);
                anchor.click();
                anchor.remove();
            }
        }
    }

    let _ = web_sys::Url::revoke_object_url(&url);
}

#[cfg(not(feature = "browser"))]
pub fn save_pdf(bytes: &[u8], filename: &str) {
    let _ = (bytes, filename);
}
