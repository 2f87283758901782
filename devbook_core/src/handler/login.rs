use super::effect::{Context, Effect, Pending};
use super::ports::{FieldSource, Navigator, Notifier, SubmitEvent};
use super::FormHandler;
use crate::api::{self, error, Transport};
use std::rc::Rc;

/// The `id` of the login form on the page.
pub const FORM_ID: &str = "login";

/// The `id`s of the login form's inputs.
pub mod fields {
    /// Email address
    pub const EMAIL: &str = "email";

    /// Password
    pub const PASSWORD: &str = "senha";
}

/// Shown right before we send the user home.
pub const LOGGED_IN: &str = "Login OK";

/// Shown for any kind of failure, so as not to tell anyone probing the login
/// whether it was the email or the password that was wrong.
pub const LOGIN_FAILED: &str = "Usuário ou senha inválidos!";

/// Decide what a submission of the login form should do. There's nothing to
/// check locally, so this always sends the credentials along.
pub fn submit<F: FieldSource>(fields: &F) -> Vec<Effect> {
    vec![Effect::LogIn(api::login::Req {
        email: fields.value(fields::EMAIL),
        password: fields.value(fields::PASSWORD),
    })]
}

/// Decide what to do once the server has answered a login.
pub fn on_response(result: error::Result<()>) -> Vec<Effect> {
    match result {
        Ok(()) => vec![
            Effect::Notify(LOGGED_IN.to_string()),
            Effect::Navigate(api::login::HOME.to_string()),
        ],
        Err(err) => {
            tracing::error!(?err, "problem logging in");
            vec![Effect::Notify(LOGIN_FAILED.to_string())]
        }
    }
}

/// Handles submissions of the login form.
#[derive(Debug)]
pub struct LoginFormHandler<T, N, V> {
    /// Where effects run
    ctx: Rc<Context<T, N, V>>,
}

impl<T, N, V> LoginFormHandler<T, N, V> {
    /// Make a handler that runs against `ctx`.
    pub fn new(ctx: Rc<Context<T, N, V>>) -> Self {
        Self { ctx }
    }
}

impl<T, N, V> FormHandler for LoginFormHandler<T, N, V>
where
    T: Transport + 'static,
    N: Notifier + 'static,
    V: Navigator + 'static,
{
    const FORM_ID: &'static str = FORM_ID;

    fn on_submit<E, F>(&self, event: &E, fields: &F) -> Option<Pending>
    where
        E: SubmitEvent,
        F: FieldSource,
    {
        event.prevent_default();

        self.ctx.dispatch(submit(fields))
    }
}
