//! Browser bindings for the devbook forms, compiled to WASM.
//!
//! Load the module on the registration and login pages; `start` finds the
//! forms by id and binds a handler to each one it finds.

#[expect(clippy::missing_docs_in_private_items)]
mod utils;

/// Where to send requests.
mod config;
use config::Config;

/// `web-sys` implementations of the handlers' capabilities.
mod dom;
use dom::{Alert, InputFields, Location, Submit};

use devbook_core::handler::FormHandler;
use devbook_core::{Client, Context, LoginFormHandler, RegistrationFormHandler};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event};

#[wasm_bindgen]
extern "C" {
    fn alert(s: &str);
}

/// Bind the form handlers to whatever forms are on the current page.
///
/// # Errors
///
/// Fails if there's no window or document to work with, or if a listener
/// can't be attached.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    utils::set_panic_hook();
    tracing_wasm::set_as_global_default();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = Config::load(&window);
    tracing::info!(server = %config.server, "binding forms");

    // Bind the forms even if the server is unusable, so submitting shows the
    // failure notice instead of falling through to the browser's own submit.
    let client = Client::new(&config.server);
    if let Err(err) = client.base_url() {
        tracing::error!(?err, server = %config.server, "server is not a usable URL");
    }

    let ctx = Rc::new(Context::new(client, Alert, Location::new(window)));

    bind(&document, RegistrationFormHandler::new(Rc::clone(&ctx)))?;
    bind(&document, LoginFormHandler::new(ctx))?;

    Ok(())
}

/// Attach `handler` to the submit event of its form, if the form is on the
/// page.
fn bind<H: FormHandler + 'static>(document: &Document, handler: H) -> Result<(), JsValue> {
    let Some(form) = document.get_element_by_id(H::FORM_ID) else {
        tracing::debug!(form = H::FORM_ID, "form is not on this page");
        return Ok(());
    };

    let fields = InputFields::new(document.clone());

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(pending) = handler.on_submit(&Submit(&event), &fields) {
            spawn_local(pending);
        }
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;

    // The listener has to live as long as the page does.
    on_submit.forget();

    Ok(())
}
