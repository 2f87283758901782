use devbook_core::handler::{FieldSource, Navigator, Notifier, SubmitEvent};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, Window};

/// Blocking `alert()` dialogs.
#[derive(Debug, Clone, Copy)]
pub struct Alert;

impl Notifier for Alert {
    fn notify(&self, message: &str) {
        crate::alert(message);
    }
}

/// Full-page navigation through `window.location`.
#[derive(Debug, Clone)]
pub struct Location {
    /// The window whose location we change
    window: Window,
}

impl Location {
    /// Navigate `window`.
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for Location {
    fn navigate(&self, location: &str) {
        if let Err(err) = self.window.location().set_href(location) {
            tracing::error!(?err, %location, "could not navigate");
        }
    }
}

/// Reads `<input>` values out of the document by id.
#[derive(Debug, Clone)]
pub struct InputFields {
    /// The page the inputs live on
    document: Document,
}

impl InputFields {
    /// Read inputs from `document`.
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl FieldSource for InputFields {
    fn value(&self, id: &str) -> String {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }
}

/// A DOM `submit` event.
#[derive(Debug)]
pub struct Submit<'event>(pub &'event Event);

impl SubmitEvent for Submit<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}
