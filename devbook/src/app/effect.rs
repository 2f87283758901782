use super::Action;
use devbook_core::{
    api::{login, register},
    Client, Outcome,
};

/// Connections to external services that effects use. We keep these around to
/// have some level of connection sharing for the app as a whole.
#[derive(Debug)]
pub struct EffectContext {
    /// The web application, over HTTP
    client: Client,
}

impl EffectContext {
    /// Get a new `EffectContext`
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Things that can happen as a result of user input. Side effects!
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Create a new user on the server
    Register(register::Req),

    /// Log in to an existing account
    LogIn(login::Req),
}

impl Effect {
    /// Perform the side-effectful portions of this effect, returning the next
    /// `Action` the application needs to handle. Failures are part of the
    /// outcome; the app decides what the user sees.
    pub async fn run(self, conn: &EffectContext) -> Action {
        match self {
            Self::Register(req) => {
                tracing::info!(email = %req.email, "registering");

                Action::Responded(Outcome::Registered(conn.client.register(&req).await))
            }

            Self::LogIn(req) => {
                tracing::info!(email = %req.email, "logging in");

                Action::Responded(Outcome::LoggedIn(conn.client.login(&req).await))
            }
        }
    }
}
