use serde::{Deserialize, Serialize};

/// The request to create a new user. Field names on the wire are the ones
/// the web application reads out of the form body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Req {
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,

    /// Email to use for contact and login.
    pub email: String,

    /// Public handle.
    #[serde(rename = "nick")]
    pub nickname: String,

    /// Plaintext password to use for login.
    #[serde(rename = "senha")]
    pub password: String,
}

/// Where the user creation endpoint lives.
pub const PATH: &str = "/usuarios";
