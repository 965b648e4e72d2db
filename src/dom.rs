//! DOM bindings for the form page.
//!
//! Resolves the page contract once at start and implements [`Surface`] on
//! top of the live elements.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, FormData, HtmlElement, HtmlFormElement, HtmlOptionElement, HtmlSelectElement,
};

use crate::controller::Surface;
use crate::error::FormError;
use crate::net::js_message;
use crate::options::{SelectField, SelectOption};
use crate::outcome::{ResultText, LOADING_TEXT};

/// Handles to the elements the controller drives.
pub struct Elements {
    pub form: HtmlFormElement,
    pub result: HtmlElement,
    pub prediction_text: HtmlElement,
    pub new_entry: HtmlElement,
    pub crop_type: HtmlSelectElement,
    pub region: HtmlSelectElement,
    pub soil_type: HtmlSelectElement,
}

impl Elements {
    /// Look up the page contract (`#predict-form`, `#result`,
    /// `#prediction-text`, `#new` and the three selects).
    pub fn bind(document: &Document) -> Result<Self, FormError> {
        Ok(Self {
            form: typed(document, "predict-form")?,
            result: typed(document, "result")?,
            prediction_text: typed(document, "prediction-text")?,
            new_entry: typed(document, "new")?,
            crop_type: typed(document, SelectField::CropType.name())?,
            region: typed(document, SelectField::Region.name())?,
            soil_type: typed(document, SelectField::SoilType.name())?,
        })
    }

    fn select(&self, field: SelectField) -> &HtmlSelectElement {
        match field {
            SelectField::CropType => &self.crop_type,
            SelectField::Region => &self.region,
            SelectField::SoilType => &self.soil_type,
        }
    }
}

fn typed<T: JsCast>(document: &Document, id: &'static str) -> Result<T, FormError> {
    document
        .get_element_by_id(id)
        .ok_or(FormError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| FormError::Platform(format!("element #{id} has an unexpected type")))
}

/// [`Surface`] implementation over the live page.
pub struct DomSurface {
    els: Rc<Elements>,
}

impl DomSurface {
    pub fn new(els: Rc<Elements>) -> Self {
        Self { els }
    }
}

impl Surface for DomSurface {
    fn set_select_options(&mut self, field: SelectField, options: &[SelectOption]) {
        let select = self.els.select(field);
        select.set_inner_html("");

        for option in options {
            match HtmlOptionElement::new_with_text_and_value(&option.label, &option.value) {
                Ok(element) => {
                    let _ = select.append_child(&element);
                }
                Err(err) => {
                    tracing::warn!(field = field.name(), error = %js_message(&err), "could not create option");
                }
            }
        }
    }

    fn show_loading(&mut self) {
        self.els.prediction_text.set_text_content(Some(LOADING_TEXT));
        self.els.result.set_hidden(false);
    }

    fn show_result(&mut self, text: &ResultText) {
        match text {
            ResultText::Markup(html) => self.els.prediction_text.set_inner_html(html),
            ResultText::Plain(plain) => self.els.prediction_text.set_text_content(Some(plain)),
        }
        self.els.result.set_hidden(false);
    }

    fn hide_result(&mut self) {
        self.els.result.set_hidden(true);
    }

    fn reset_fields(&mut self) {
        self.els.form.reset();
    }
}

/// Read every form field as `(name, value)` in document order.
pub fn read_form_fields(form: &HtmlFormElement) -> Result<Vec<(String, String)>, FormError> {
    let data = FormData::new_with_form(form).map_err(|e| FormError::Platform(js_message(&e)))?;
    let entries = js_sys::try_iter(&data)
        .map_err(|e| FormError::Platform(js_message(&e)))?
        .ok_or_else(|| FormError::Platform("form data is not iterable".to_string()))?;

    let mut fields = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FormError::Platform(js_message(&e)))?;
        let pair = js_sys::Array::from(&entry);
        let name = pair.get(0).as_string().unwrap_or_default();
        // non-string values (file inputs) have no place in this form
        let value = pair.get(1).as_string().unwrap_or_default();
        fields.push((name, value));
    }

    Ok(fields)
}
