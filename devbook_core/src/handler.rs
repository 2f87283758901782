//! The two form handlers. Each is split into a pure part, which turns field
//! values or a server response into a list of `Effect`s, and a small shell
//! (`RegistrationFormHandler`, `LoginFormHandler`) that runs those effects
//! against a `Context` of capabilities. Hosts that keep their own UI state
//! (like the TUI) can call the pure functions directly and run the effects
//! themselves.

/// Capabilities the handlers need from their host.
pub mod ports;
pub use ports::{FieldSource, Navigator, Notifier, SubmitEvent};

/// Side effects and what comes back from them
pub mod effect;
pub use effect::{Context, Effect, Outcome, Pending};

/// The registration form
pub mod registration;
pub use registration::{RegistrationFormHandler, ValidationError};

/// The login form
pub mod login;
pub use login::LoginFormHandler;

/// A handler that can be bound to a form's submit event.
pub trait FormHandler {
    /// The `id` of the form element this handler belongs to.
    const FORM_ID: &'static str;

    /// Handle a submit event. Everything that has to happen while the event is
    /// still being dispatched (suppressing the default navigation, reading the
    /// fields, local validation) happens before this returns. If a request
    /// needs to go out, the returned future sends it and reacts to the
    /// response; the caller is expected to spawn it on its event loop.
    fn on_submit<E, F>(&self, event: &E, fields: &F) -> Option<Pending>
    where
        E: SubmitEvent,
        F: FieldSource;
}
