//! Prediction payload assembly.
//!
//! Turns raw form fields into the JSON body submitted to `/predict`: the
//! three climate fields are coerced to numbers, everything else stays text.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Form fields coerced to `f64` before submission.
pub const NUMERIC_FIELDS: [&str; 3] = ["temperature_c", "rainfall_mm", "humidity_percent"];

/// A single payload value: raw text, or a coerced number.
///
/// Numbers may be `NaN` when the field did not parse; the value is sent
/// anyway and the server rejects it (no client-side validation).
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
    Text(String),
    Number(f64),
}

impl PayloadValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PayloadValue::Number(n) => Some(*n),
            PayloadValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PayloadValue::Text(s) => Some(s),
            PayloadValue::Number(_) => None,
        }
    }
}

impl Serialize for PayloadValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PayloadValue::Text(s) => serializer.serialize_str(s),
            // serde_json writes non-finite floats as null, so an unparsed
            // field reaches the wire as null rather than failing here
            PayloadValue::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

/// JSON body for `POST /predict`, keyed by form input name.
///
/// Keys appear exactly once each, in document order; a duplicated input name
/// keeps the last value, per standard form serialization.
#[derive(Debug, Clone, Default)]
pub struct PredictionPayload {
    entries: Vec<(String, PayloadValue)>,
}

impl PredictionPayload {
    /// Build the payload from `(name, value)` pairs in document order.
    ///
    /// Fields named in [`NUMERIC_FIELDS`] are parsed as `f64`, falling back
    /// to `NaN` when the text is not a number.
    pub fn from_fields(fields: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut entries: Vec<(String, PayloadValue)> = Vec::new();

        for (name, raw) in fields {
            let value = if NUMERIC_FIELDS.contains(&name.as_str()) {
                PayloadValue::Number(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
            } else {
                PayloadValue::Text(raw)
            };

            match entries.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = value, // last value wins
                None => entries.push((name, value)),
            }
        }

        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&PayloadValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The request body string.
    pub fn to_json(&self) -> String {
        // A map of strings and floats cannot fail to serialize
        serde_json::to_string(self).expect("payload serialization is infallible")
    }
}

impl Serialize for PredictionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn field(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_numeric_fields_are_coerced() {
        let payload = PredictionPayload::from_fields(vec![
            field("crop_type", "wheat"),
            field("temperature_c", "23.5"),
            field("rainfall_mm", "100"),
            field("humidity_percent", "60"),
        ]);

        assert_relative_eq!(
            payload.get("temperature_c").unwrap().as_number().unwrap(),
            23.5
        );
        assert_relative_eq!(payload.get("rainfall_mm").unwrap().as_number().unwrap(), 100.0);
        assert_eq!(payload.get("crop_type").unwrap().as_text(), Some("wheat"));
    }

    #[test]
    fn test_non_numeric_input_becomes_nan() {
        let payload = PredictionPayload::from_fields(vec![field("temperature_c", "warm")]);

        // Sent as-is, not rejected client-side
        let value = payload.get("temperature_c").unwrap().as_number().unwrap();
        assert!(value.is_nan());
        assert_eq!(payload.to_json(), r#"{"temperature_c":null}"#);
    }

    #[test]
    fn test_empty_numeric_input_becomes_nan() {
        let payload = PredictionPayload::from_fields(vec![field("rainfall_mm", "")]);
        assert!(payload.get("rainfall_mm").unwrap().as_number().unwrap().is_nan());
    }

    #[test]
    fn test_duplicate_names_keep_last_value() {
        let payload = PredictionPayload::from_fields(vec![
            field("region", "north"),
            field("region", "south"),
        ]);

        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("region").unwrap().as_text(), Some("south"));
    }

    #[test]
    fn test_json_preserves_document_order() {
        let payload = PredictionPayload::from_fields(vec![
            field("crop_type", "rice"),
            field("region", "east"),
            field("temperature_c", "28"),
        ]);

        assert_eq!(
            payload.to_json(),
            r#"{"crop_type":"rice","region":"east","temperature_c":28.0}"#
        );
    }

    #[test]
    fn test_unknown_fields_stay_text() {
        let payload = PredictionPayload::from_fields(vec![field("notes", "42")]);
        assert_eq!(payload.get("notes").unwrap().as_text(), Some("42"));
    }
}
