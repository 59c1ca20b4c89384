//! Bug API Bindings
//!
//! Frontend bindings to the bug REST API over `fetch`.

mod bug;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use bug_list_core::config::API_BASE_URL;
use bug_list_core::endpoint::{is_success, status_error};
use bug_list_core::{ApiError, ApiResult, Endpoint};

// Re-export all public items
pub use bug::*;

/// Send a request to the bug API, failing on non-2xx responses
async fn request(endpoint: Endpoint<'_>, body: Option<String>) -> ApiResult<Response> {
    let opts = RequestInit::new();
    opts.set_method(endpoint.method());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let url = endpoint.url(API_BASE_URL);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    request.headers().set("Accept", "application/json").map_err(js_error)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json").map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    if !is_success(response.status()) {
        let body = read_text(&response).await.unwrap_or_default();
        return Err(status_error(response.status(), &body));
    }
    Ok(response)
}

async fn read_text(response: &Response) -> ApiResult<String> {
    let promise = response.text().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    Ok(value.as_string().unwrap_or_default())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let promise = response.json().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
