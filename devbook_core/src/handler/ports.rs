/// The event a form fires when the user submits it.
pub trait SubmitEvent {
    /// Stop the host from doing its own thing with the submission (in a
    /// browser, navigating to the form's `action`.)
    fn prevent_default(&self);
}

/// Read the current value of a form field.
pub trait FieldSource {
    /// The value of the field with the given `id`. A missing field reads as
    /// empty.
    fn value(&self, id: &str) -> String;
}

/// Show a message to the user.
pub trait Notifier {
    /// Show `message`. In the browser this blocks until the user dismisses it.
    fn notify(&self, message: &str);
}

/// Move the user somewhere else.
pub trait Navigator {
    /// Go to `location`, e.g. `/home`.
    fn navigate(&self, location: &str);
}
