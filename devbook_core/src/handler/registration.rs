use super::effect::{Context, Effect, Pending};
use super::ports::{FieldSource, Navigator, Notifier, SubmitEvent};
use super::FormHandler;
use crate::api::{error, register, Transport};
use std::rc::Rc;
use thiserror::Error;

/// The `id` of the registration form on the page.
pub const FORM_ID: &str = "formulario-cadastro";

/// The `id`s of the registration form's inputs.
pub mod fields {
    /// Display name
    pub const NAME: &str = "nome";

    /// Email address
    pub const EMAIL: &str = "email";

    /// Public handle
    pub const NICKNAME: &str = "nick";

    /// Password
    pub const PASSWORD: &str = "senha";

    /// Password, again
    pub const PASSWORD_CONFIRMATION: &str = "confirmar-senha";
}

/// Shown when the two password fields don't match.
pub const PASSWORDS_DIFFER: &str = "As senhas são diferentes!";

/// Shown when the server accepted the new user.
pub const REGISTERED: &str = "Usuário cadastrado com sucesso!";

/// Shown for any kind of failure talking to the server.
pub const REGISTRATION_FAILED: &str = "Erro ao tentar cadastrar usuário!";

/// Problems we can catch before bothering the server.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The password and its confirmation are not the same string.
    #[error("passwords differ")]
    PasswordMismatch,
}

impl ValidationError {
    /// What to tell the user about it.
    pub fn message(self) -> &'static str {
        match self {
            Self::PasswordMismatch => PASSWORDS_DIFFER,
        }
    }
}

/// Everything the user typed into the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Public handle
    pub nickname: String,

    /// Password
    pub password: String,

    /// Password, again
    pub password_confirmation: String,
}

impl Form {
    /// Read the current field values.
    pub fn read<F: FieldSource>(fields: &F) -> Self {
        Self {
            name: fields.value(fields::NAME),
            email: fields.value(fields::EMAIL),
            nickname: fields.value(fields::NICKNAME),
            password: fields.value(fields::PASSWORD),
            password_confirmation: fields.value(fields::PASSWORD_CONFIRMATION),
        }
    }

    /// Turn the form into a request, as long as the password was typed the
    /// same way twice. The comparison is exact: no trimming, no case folding.
    ///
    /// ## Errors
    ///
    /// `ValidationError::PasswordMismatch` if the passwords differ.
    pub fn validate(self) -> Result<register::Req, ValidationError> {
        if self.password != self.password_confirmation {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(register::Req {
            name: self.name,
            email: self.email,
            nickname: self.nickname,
            password: self.password,
        })
    }
}

/// Decide what a submission of the registration form should do.
pub fn submit<F: FieldSource>(fields: &F) -> Vec<Effect> {
    match Form::read(fields).validate() {
        Ok(req) => vec![Effect::Register(req)],
        Err(err) => {
            tracing::debug!(%err, "not sending registration");
            vec![Effect::Notify(err.message().to_string())]
        }
    }
}

/// Decide what to do once the server has answered a registration.
pub fn on_response(result: error::Result<()>) -> Vec<Effect> {
    match result {
        Ok(()) => {
            tracing::info!("registered");
            vec![Effect::Notify(REGISTERED.to_string())]
        }
        Err(err) => {
            tracing::error!(?err, "problem registering");
            vec![Effect::Notify(REGISTRATION_FAILED.to_string())]
        }
    }
}

/// Handles submissions of the registration form.
#[derive(Debug)]
pub struct RegistrationFormHandler<T, N, V> {
    /// Where effects run
    ctx: Rc<Context<T, N, V>>,
}

impl<T, N, V> RegistrationFormHandler<T, N, V> {
    /// Make a handler that runs against `ctx`.
    pub fn new(ctx: Rc<Context<T, N, V>>) -> Self {
        Self { ctx }
    }
}

impl<T, N, V> FormHandler for RegistrationFormHandler<T, N, V>
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
