use super::ports::{Navigator, Notifier};
use super::{login, registration};
use crate::api::{self, error, Transport};
use futures::future::LocalBoxFuture;
use std::{iter, rc::Rc};

/// A request in flight, plus whatever needs to happen once it comes back.
/// Spawn it on the host's event loop.
pub type Pending = LocalBoxFuture<'static, ()>;

/// Things that can happen as a result of a form submission. Side effects!
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Tell the user something
    Notify(String),

    /// Send the user somewhere else
    Navigate(String),

    /// Create a new user on the server
    Register(api::register::Req),

    /// Log in to an existing account
    LogIn(api::login::Req),
}

impl Effect {
    /// Does running this effect involve the network?
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Register(_) | Self::LogIn(_))
    }
}

/// What came back from a request effect.
#[derive(Debug)]
pub enum Outcome {
    /// The server answered a registration
    Registered(error::Result<()>),

    /// The server answered a login
    LoggedIn(error::Result<()>),
}

impl Outcome {
    /// The effects the owning form wants in response.
    pub fn effects(self) -> Vec<Effect> {
        match self {
            Self::Registered(result) => registration::on_response(result),
            Self::LoggedIn(result) => login::on_response(result),
        }
    }
}

/// The capabilities effects run against. Built once by whatever bootstraps the
/// page and shared between handlers.
#[derive(Debug)]
pub struct Context<T, N, V> {
    /// Sends requests
    pub transport: T,

    /// Shows messages
    pub notifier: N,

    /// Changes location
    pub navigator: V,
}

impl<T, N, V> Context<T, N, V> {
    /// Bundle up a set of capabilities
    pub fn new(transport: T, notifier: N, navigator: V) -> Self {
        Self {
            transport,
            notifier,
            navigator,
        }
    }
}

impl<T, N, V> Context<T, N, V>
where
    T: Transport,
    N: Notifier,
    V: Navigator,
{
    /// Perform the side-effectful portions of this effect, returning the
    /// outcome if it was a request.
    pub async fn run(&self, effect: Effect) -> Option<Outcome> {
        match effect {
            Effect::Notify(message) => {
                self.notifier.notify(&message);
                None
            }

            Effect::Navigate(location) => {
                tracing::debug!(%location, "navigating");
                self.navigator.navigate(&location);
                None
            }

            Effect::Register(req) => {
                tracing::info!(email = %req.email, "registering");

                let result = self.transport.post_form(api::register::PATH, &req).await;

                Some(Outcome::Registered(result))
            }

            Effect::LogIn(req) => {
                tracing::info!(email = %req.email, "logging in");

                let result = self.transport.post_form(api::login::PATH, &req).await;

                Some(Outcome::LoggedIn(result))
            }
        }
    }

    /// Run a handler's effects. Everything up to the first request happens
    /// before this returns; the request and everything after it (including
    /// the reaction to the response) is deferred into the returned future.
    pub fn dispatch(self: &Rc<Self>, effects: Vec<Effect>) -> Option<Pending>
    where
        T: 'static,
        N: 'static,
        V: 'static,
    {
        let mut effects = effects.into_iter();

        let first_request = loop {
            let effect = effects.next()?;

            if effect.is_request() {
                break effect;
            }

            match effect {
                Effect::Notify(message) => self.notifier.notify(&message),
                Effect::Navigate(location) => self.navigator.navigate(&location),
                Effect::Register(_) | Effect::LogIn(_) => {}
            }
        };

        let rest: Vec<Effect> = effects.collect();
        let ctx = Rc::clone(self);

        Some(Box::pin(async move {
            for effect in iter::once(first_request).chain(rest) {
                let Some(outcome) = ctx.run(effect).await else {
                    continue;
                };

                for follow_up in outcome.effects() {
                    if let Some(ignored) = ctx.run(follow_up).await {
                        tracing::warn!(?ignored, "dropping outcome of a follow-up request");
                    }
                }
            }
        }))
    }
}
