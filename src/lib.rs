//! Crop yield prediction form frontend.
//!
//! WASM form controller for the prediction page: populates the crop, region
//! and soil menus from `GET /options`, submits the form as a JSON body to
//! `POST /predict`, and renders the returned yield (or error text) in the
//! result panel. A new-entry control hides the panel and clears the form.
//!
//! The core modules (`payload`, `options`, `outcome`, `controller`) carry no
//! DOM types and test on the host; `dom`, `net` and `events` bind them to
//! the browser.

pub mod config;
pub mod controller;
pub mod error;
pub mod options;
pub mod outcome;
pub mod payload;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod net;

// Re-export commonly used types
pub use config::Endpoints;
pub use controller::{
    apply_options, begin_submission, complete_submission, reset_form, Generations, Surface,
};
pub use error::FormError;
pub use options::{plan_select, OptionsResponse, SelectField, SelectOption};
pub use outcome::{interpret_prediction, FetchOutcome, ResultText};
pub use payload::{PayloadValue, PredictionPayload, NUMERIC_FIELDS};

/// Module entry point: wires the controller as soon as the page's WASM
/// module is instantiated (the document is already parsed at that point).
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    let _ = tracing_wasm::try_set_as_global_default();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document available"))?;

    events::attach(&document, Endpoints::default())
        .map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))
}
