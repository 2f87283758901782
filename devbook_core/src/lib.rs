//! Common code across all devbook clients (TUI, WASM in the browser)

/// Talk to the devbook web application over HTTP.
pub mod api;
pub use api::Client;

/// The registration and login form handlers, and the capabilities they run
/// against.
pub mod handler;
pub use handler::{Context, Effect, LoginFormHandler, Outcome, RegistrationFormHandler};

#[cfg(test)]
mod test;
