use serde::{Deserialize, Serialize};

/// The request to log into the web application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Req {
    /// Email to use for login.
    pub email: String,

    /// Plaintext password to use for login.
    #[serde(rename = "senha")]
    pub password: String,
}

/// Where the login endpoint lives.
pub const PATH: &str = "/login";

/// Where to send the user once they're logged in.
pub const HOME: &str = "/home";
