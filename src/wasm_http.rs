//! Device requests through the browser `fetch` API.
//!
//! Requests are fire-and-forget: no timeout, no retry, no cancellation.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FormData, Request, RequestInit, Response};

use crate::error::PageError;
use crate::message::HttpReply;
use crate::upload::{UploadJob, UploadMode};

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Send a request and collect status and body text.
async fn send(request: &Request) -> Result<HttpReply, PageError> {
    let window = web_sys::window().ok_or_else(|| PageError::dom("no window"))?;

    let response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| PageError::network(js_error(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| PageError::network("fetch did not return a Response"))?;

    let status = response.status();
    let text_promise = response
        .text()
        .map_err(|e| PageError::network(js_error(e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| PageError::network(js_error(e)))?
        .as_string()
        .unwrap_or_default();

    Ok(HttpReply { status, body })
}

/// GET an endpoint.
pub async fn get(endpoint: &str) -> Result<HttpReply, PageError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(endpoint, &init)
        .map_err(|e| PageError::network(js_error(e)))?;

    log::debug!("📡 GET {}", endpoint);
    send(&request).await
}

/// Read a picked file fully into memory.
pub async fn read_bytes(file: &File) -> Result<Vec<u8>, PageError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| PageError::file_read(file.name(), js_error(e)))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Wrap bytes in a blob with the given content type.
fn binary_blob(bytes: &[u8], content_type: &str) -> Result<Blob, PageError> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| PageError::dom(format!("blob: {}", js_error(e))))
}

/// POST the selected image as described by `job`.
pub async fn upload(job: &UploadJob<File>) -> Result<HttpReply, PageError> {
    let init = RequestInit::new();
    init.set_method("POST");

    match job.mode {
        UploadMode::Binary => {
            let bytes = read_bytes(&job.file.handle).await?;
            log::debug!("⬆️ Read {} bytes from {}", bytes.len(), job.file.name);
            let content_type = job.content_type().unwrap_or_default();
            let blob = binary_blob(&bytes, content_type)?;
            init.set_body(&blob);
        }
        UploadMode::Multipart => {
            let form = FormData::new().map_err(|e| PageError::dom(js_error(e)))?;
            let field = job.form_field().unwrap_or_default();
            form.append_with_blob_and_filename(field, &job.file.handle, &job.file.name)
                .map_err(|e| PageError::dom(js_error(e)))?;
            init.set_body(&form);
        }
    }

    let request = Request::new_with_str_and_init(&job.endpoint, &init)
        .map_err(|e| PageError::network(js_error(e)))?;

    log::debug!("⬆️ POST {}", job.endpoint);
    send(&request).await
}
