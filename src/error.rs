//! Error types for the form controller.

use thiserror::Error;

/// Failures raised while binding to the page or talking to the backend.
///
/// Prediction failures are not errors in this sense: they are rendered into
/// the result panel as text and never propagate (see `outcome`).
#[derive(Debug, Error)]
pub enum FormError {
    /// The page does not carry one of the contract elements.
    #[error("missing element #{0}")]
    MissingElement(&'static str),

    /// A browser API was unavailable or threw.
    #[error("browser API failure: {0}")]
    Platform(String),

    /// `GET /options` failed at the network layer.
    #[error("options request failed: {0}")]
    OptionsRequest(String),

    /// `GET /options` returned a body that did not decode.
    #[error("options response unreadable: {0}")]
    OptionsDecode(String),
}
