use crate::api::{error, Error, Transport};
use crate::handler::{registration, FieldSource, Navigator, Notifier, SubmitEvent};
use proptest::prelude::*;
use reqwest::StatusCode;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::{ready, Future};

/// Field values keyed by element id.
#[derive(Debug, Default, Clone)]
pub struct Fields(HashMap<String, String>);

impl<const N: usize> From<[(&str, &str); N]> for Fields {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(id, value)| (id.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl FieldSource for Fields {
    fn value(&self, id: &str) -> String {
        self.0.get(id).cloned().unwrap_or_default()
    }
}

/// A submit event that remembers whether its default was prevented.
#[derive(Debug, Default)]
pub struct Submit(Cell<bool>);

impl Submit {
    pub fn was_prevented(&self) -> bool {
        self.0.get()
    }
}

impl SubmitEvent for Submit {
    fn prevent_default(&self) {
        self.0.set(true);
    }
}

/// Records notifications or navigations, in order.
#[derive(Debug, Default)]
pub struct Recorder(RefCell<Vec<String>>);

impl Recorder {
    pub fn seen(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Notifier for Recorder {
    fn notify(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

impl Navigator for Recorder {
    fn navigate(&self, location: &str) {
        self.0.borrow_mut().push(location.to_string());
    }
}

/// How `StubTransport` answers every request.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// A bare status code
    Status(u16),

    /// A status code with an `erro` body
    Message(u16, &'static str),

    /// The server can't be reached at all
    Unreachable,
}

/// A transport that never touches the network. Bodies are recorded as JSON
/// so tests can compare them without caring about encoding.
#[derive(Debug)]
pub struct StubTransport {
    reply: Reply,
    sent: RefCell<Vec<(String, serde_json::Value)>>,
}

impl StubTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            sent: RefCell::default(),
        }
    }

    pub fn sent(&self) -> Vec<(String, serde_json::Value)> {
        self.sent.borrow().clone()
    }

    fn answer(&self) -> error::Result<()> {
        let (code, message) = match self.reply {
            Reply::Status(code) => (code, None),
            Reply::Message(code, message) => (code, Some(message.to_string())),
            // Stands in for a connection failure: no status, not our fault.
            Reply::Unreachable => {
                return Err(Error::UrlParse(url::ParseError::EmptyHost));
            }
        };

        let status = StatusCode::from_u16(code).expect("test status codes are valid");

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Status { status, message })
        }
    }
}

impl Transport for StubTransport {
    fn post_form<B: Serialize>(&self, path: &str, body: &B) -> impl Future<Output = error::Result<()>> {
        let body = serde_json::to_value(body).expect("request bodies serialize to JSON");
        self.sent.borrow_mut().push((path.to_string(), body));

        ready(self.answer())
    }
}

prop_compose! {
    /// A password and its confirmation, equal about half the time.
    pub fn passwords()(
        password in ".{0,12}",
        confirmation in ".{0,12}",
        same in any::<bool>(),
    ) -> (String, String) {
        if same {
            (password.clone(), password)
        } else {
            (password, confirmation)
        }
    }
}

prop_compose! {
    /// A filled-in registration form whose passwords match.
    pub fn registration_fields()(
        name in ".*",
        email in ".*",
        nickname in ".*",
        password in ".*",
    ) -> Fields {
        Fields::from([
            (registration::fields::NAME, name.as_str()),
            (registration::fields::EMAIL, email.as_str()),
            (registration::fields::NICKNAME, nickname.as_str()),
            (registration::fields::PASSWORD, password.as_str()),
            (registration::fields::PASSWORD_CONFIRMATION, password.as_str()),
        ])
    }
}
