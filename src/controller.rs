//! Form controller core.
//!
//! The options/submit/reset operations, expressed against a [`Surface`] so
//! the render layer stays swappable and the flow tests off-browser. The
//! browser wiring in `events` is a thin shell around these functions.

use std::cell::Cell;

use crate::options::{plan_select, OptionsResponse, SelectField, SelectOption};
use crate::outcome::{interpret_prediction, FetchOutcome};
use crate::payload::PredictionPayload;

/// Render layer for the form page.
///
/// The browser implementation drives the real DOM; tests record the calls.
pub trait Surface {
    /// Replace a dropdown's contents, discarding prior selection state.
    fn set_select_options(&mut self, field: SelectField, options: &[SelectOption]);
    /// Make the result panel visible with the loading indicator.
    fn show_loading(&mut self);
    /// Make the result panel visible with final text.
    fn show_result(&mut self, text: &crate::outcome::ResultText);
    /// Hide the result panel.
    fn hide_result(&mut self);
    /// Restore every form field to its default value.
    fn reset_fields(&mut self);
}

/// Monotonic request generations.
///
/// A `/predict` response is rendered only while its token is still the
/// newest; a later submit or a reset supersedes it, so a slow response
/// cannot overwrite the panel after the user has moved on.
#[derive(Debug, Default)]
pub struct Generations {
    current: Cell<u64>,
}

impl Generations {
    /// Start a new generation and return its token.
    pub fn begin(&self) -> u64 {
        let next = self.current.get() + 1;
        self.current.set(next);
        next
    }

    /// Supersede whatever is in flight without starting a request.
    pub fn invalidate(&self) {
        self.current.set(self.current.get() + 1);
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current.get() == token
    }
}

/// Populate the three dropdowns from a fresh `/options` body.
pub fn apply_options(surface: &mut impl Surface, options: &OptionsResponse) {
    for field in SelectField::ALL {
        surface.set_select_options(field, &plan_select(options.entries(field)));
    }
}

/// First half of a submission: build the body and show the loading state.
///
/// Returns the JSON body and the generation token that guards rendering of
/// the eventual response.
pub fn begin_submission(
    surface: &mut impl Surface,
    fields: Vec<(String, String)>,
    generations: &Generations,
) -> (String, u64) {
    let payload = PredictionPayload::from_fields(fields);
    surface.show_loading();
    (payload.to_json(), generations.begin())
}

/// Second half of a submission: render the outcome unless superseded.
pub fn complete_submission(
    surface: &mut impl Surface,
    generations: &Generations,
    token: u64,
    outcome: &FetchOutcome,
) {
    if !generations.is_current(token) {
        tracing::debug!(token, "dropping stale prediction response");
        return;
    }
    surface.show_result(&interpret_prediction(outcome));
}

/// New-entry action: hide the result panel and clear the form.
///
/// No network call; an in-flight response is left to expire against the
/// bumped generation.
pub fn reset_form(surface: &mut impl Surface, generations: &Generations) {
    generations.invalidate();
    surface.hide_result();
    surface.reset_fields();
}
