//! Select-menu options.
//!
//! `GET /options` returns one list of entries per dropdown; a missing or
//! empty list falls back to a single placeholder so the menu stays usable.

use serde::Deserialize;

/// Placeholder shown when the server has no entries for a menu.
pub const PLACEHOLDER_LABEL: &str = "--select--";

/// Body of `GET /options`. Absent keys deserialize as empty lists; unknown
/// keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionsResponse {
    #[serde(default)]
    pub crop_type: Vec<String>,
    #[serde(default)]
    pub region: Vec<String>,
    #[serde(default)]
    pub soil_type: Vec<String>,
}

impl OptionsResponse {
    /// Entries for one dropdown.
    pub fn entries(&self, field: SelectField) -> &[String] {
        match field {
            SelectField::CropType => &self.crop_type,
            SelectField::Region => &self.region,
            SelectField::SoilType => &self.soil_type,
        }
    }
}

/// The three server-populated dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectField {
    CropType,
    Region,
    SoilType,
}

impl SelectField {
    pub const ALL: [SelectField; 3] = [
        SelectField::CropType,
        SelectField::Region,
        SelectField::SoilType,
    ];

    /// Element id and payload key for this dropdown.
    pub fn name(self) -> &'static str {
        match self {
            SelectField::CropType => "crop_type",
            SelectField::Region => "region",
            SelectField::SoilType => "soil_type",
        }
    }
}

/// One `<option>` in a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: PLACEHOLDER_LABEL.to_string(),
        }
    }
}

/// Plan the options for one dropdown: one option per entry, value and label
/// both equal to the entry, in server order. An empty list becomes a single
/// placeholder with an empty value.
pub fn plan_select(entries: &[String]) -> Vec<SelectOption> {
    if entries.is_empty() {
        return vec![SelectOption::placeholder()];
    }

    entries
        .iter()
        .map(|entry| SelectOption {
            value: entry.clone(),
            label: entry.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_select_preserves_order_and_mirrors_labels() {
        let entries = vec!["wheat".to_string(), "rice".to_string(), "maize".to_string()];
        let options = plan_select(&entries);

        assert_eq!(options.len(), 3);
        for (option, entry) in options.iter().zip(&entries) {
            assert_eq!(&option.value, entry);
            assert_eq!(&option.label, entry);
        }
    }

    #[test]
    fn test_plan_select_empty_yields_placeholder() {
        let options = plan_select(&[]);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, PLACEHOLDER_LABEL);
    }

    #[test]
    fn test_missing_keys_deserialize_empty() {
        let response: OptionsResponse = serde_json::from_str(r#"{"crop_type":["wheat"]}"#).unwrap();

        assert_eq!(response.crop_type, vec!["wheat"]);
        assert!(response.region.is_empty());
        assert!(response.soil_type.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let body = r#"{"crop_type":[],"irrigation":["drip"]}"#;
        let response: OptionsResponse = serde_json::from_str(body).unwrap();
        assert!(response.crop_type.is_empty());
    }

    #[test]
    fn test_field_names_match_form_contract() {
        assert_eq!(SelectField::CropType.name(), "crop_type");
        assert_eq!(SelectField::Region.name(), "region");
        assert_eq!(SelectField::SoilType.name(), "soil_type");
    }
}
