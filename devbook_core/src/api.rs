/// Things that can go wrong in the API
pub mod error;
pub use error::{Error, StatusCode};

/// Client for the web application's form endpoints
pub mod client;
pub use client::{Client, Transport};

/// Create a new user account
pub mod register;

/// Log into an existing account
pub mod login;
