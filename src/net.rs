//! Fetch plumbing for the two backend calls.
//!
//! Mirrors the page's fetch usage: no timeout, no retry, no cancellation of
//! the underlying request. A completed response carries its HTTP status and
//! body; only transport-level failure is a network outcome.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response, Window};

use crate::error::FormError;
use crate::options::OptionsResponse;
use crate::outcome::FetchOutcome;

/// Human-readable message for a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

fn window() -> Result<Window, FormError> {
    web_sys::window().ok_or_else(|| FormError::Platform("no window".to_string()))
}

/// `GET /options`, decoded into [`OptionsResponse`].
pub async fn fetch_options(url: &str) -> Result<OptionsResponse, FormError> {
    let window = window()?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FormError::OptionsRequest(js_message(&e)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FormError::OptionsRequest(js_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| FormError::OptionsRequest("fetch returned a non-response".to_string()))?;

    let json = response
        .json()
        .map_err(|e| FormError::OptionsDecode(js_message(&e)))?;
    let json = JsFuture::from(json)
        .await
        .map_err(|e| FormError::OptionsDecode(js_message(&e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| FormError::OptionsDecode(e.to_string()))
}

/// `POST /predict` with a JSON body.
///
/// Every completed exchange is an `Http` outcome regardless of status; a
/// request that never completes (or whose body cannot be read) is `Network`,
/// carrying the failure's message.
pub async fn post_predict(url: &str, body: &str) -> FetchOutcome {
    match try_post(url, body).await {
        Ok(outcome) => outcome,
        Err(message) => FetchOutcome::Network(message),
    }
}

async fn try_post(url: &str, body: &str) -> Result<FetchOutcome, String> {
    let window = window().map_err(|e| e.to_string())?;

    let headers = Headers::new().map_err(|e| js_message(&e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| js_message(&e))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_headers(headers.as_ref());
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| js_message(&e))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_message(&e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch returned a non-response".to_string())?;

    let text = response.text().map_err(|e| js_message(&e))?;
    let text = JsFuture::from(text).await.map_err(|e| js_message(&e))?;

    Ok(FetchOutcome::Http {
        ok: response.ok(),
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    })
}
