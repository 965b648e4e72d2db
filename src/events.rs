//! Event wiring for the form page.
//!
//! Listeners register once at module start and stay for the page lifetime;
//! the async halves of the handlers run on the browser event loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event};

use crate::config::Endpoints;
use crate::controller::{
    apply_options, begin_submission, complete_submission, reset_form, Generations,
};
use crate::dom::{read_form_fields, DomSurface, Elements};
use crate::error::FormError;
use crate::net::{fetch_options, js_message, post_predict};

/// Bind the controller to the page and fire the initial options load.
pub fn attach(document: &Document, endpoints: Endpoints) -> Result<(), FormError> {
    let els = Rc::new(Elements::bind(document)?);
    let surface = Rc::new(RefCell::new(DomSurface::new(els.clone())));
    let generations = Rc::new(Generations::default());

    wire_submit(
        els.clone(),
        surface.clone(),
        generations.clone(),
        endpoints.predict,
    )?;
    wire_reset(els, surface.clone(), generations)?;
    load_options(surface, endpoints.options);

    Ok(())
}

fn wire_submit(
    els: Rc<Elements>,
    surface: Rc<RefCell<DomSurface>>,
    generations: Rc<Generations>,
    predict_url: String,
) -> Result<(), FormError> {
    let form = els.form.clone();

    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();

        let fields = match read_form_fields(&els.form) {
            Ok(fields) => fields,
            Err(err) => {
                tracing::warn!(error = %err, "could not read form fields");
                return;
            }
        };

        let (body, token) =
            begin_submission(&mut *surface.borrow_mut(), fields, &generations);

        let surface = surface.clone();
        let generations = generations.clone();
        let url = predict_url.clone();
        spawn_local(async move {
            let outcome = post_predict(&url, &body).await;
            complete_submission(&mut *surface.borrow_mut(), &generations, token, &outcome);
        });
    });

    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())
        .map_err(|e| FormError::Platform(js_message(&e)))?;
    handler.forget();

    Ok(())
}

fn wire_reset(
    els: Rc<Elements>,
    surface: Rc<RefCell<DomSurface>>,
    generations: Rc<Generations>,
) -> Result<(), FormError> {
    let target = els.new_entry.clone();

    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        reset_form(&mut *surface.borrow_mut(), &generations);
    });

    target
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|e| FormError::Platform(js_message(&e)))?;
    handler.forget();

    Ok(())
}

fn load_options(surface: Rc<RefCell<DomSurface>>, url: String) {
    spawn_local(async move {
        match fetch_options(&url).await {
            Ok(options) => apply_options(&mut *surface.borrow_mut(), &options),
            // non-fatal: the form stays usable with whatever the menus hold
            Err(err) => tracing::warn!(error = %err, "could not load select options"),
        }
    });
}
