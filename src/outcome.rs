//! Interpretation of `/predict` responses.
//!
//! Success and failure are told apart by HTTP status, never by body shape.
//! Every failure is terminal for that submission attempt; there is no retry.

use serde_json::Value;

/// Unit rendered after a successful prediction value.
pub const UNIT: &str = "tonnes/hectare";

/// Panel text while a submission is in flight.
pub const LOADING_TEXT: &str = "Predicting...";

/// What came back from a `/predict` attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The request completed with an HTTP status and a body.
    Http { ok: bool, status: u16, body: String },
    /// The request never completed.
    Network(String),
}

/// Text destined for the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultText {
    /// Inserted as markup. Only the server's JSON number is interpolated,
    /// so no foreign markup can reach the page.
    Markup(String),
    /// Inserted as plain text.
    Plain(String),
}

impl ResultText {
    pub fn as_str(&self) -> &str {
        match self {
            ResultText::Markup(s) | ResultText::Plain(s) => s,
        }
    }
}

/// Render a completed `/predict` attempt for the result panel.
pub fn interpret_prediction(outcome: &FetchOutcome) -> ResultText {
    match outcome {
        FetchOutcome::Http { ok: true, body, .. } => match prediction_number(body) {
            Ok(n) => ResultText::Markup(format!(r#"<span class="pred">{n} {UNIT}</span>"#)),
            Err(message) => ResultText::Plain(format!("Error: {message}")),
        },
        FetchOutcome::Http { ok: false, body, .. } => {
            ResultText::Plain(format!("Error: {}", error_message(body)))
        }
        FetchOutcome::Network(message) => ResultText::Plain(format!("Error: {message}")),
    }
}

/// The prediction value, kept as the raw JSON number so `4.2` renders as
/// `4.2` rather than a reformatted float.
fn prediction_number(body: &str) -> Result<serde_json::Number, String> {
    let value: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    match value.get("prediction_tonnes_per_hectare") {
        Some(Value::Number(n)) => Ok(n.clone()),
        _ => Err("prediction value missing from response".to_string()),
    }
}

/// Error text for a non-success status: the body's `error` field when it is
/// a string, otherwise the whole body serialized back out.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => match value.get("error").and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None => value.to_string(),
        },
        Err(err) => err.to_string(),
    }
}
