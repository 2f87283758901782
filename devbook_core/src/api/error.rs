pub use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while processing requests
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We couldn't talk to the server at all, for example because it was down
    /// or the connection dropped halfway through.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but with something other than a 2xx. `message` is
    /// whatever the server put in its error body, if it sent one we could read.
    #[error("server returned {status}{}", suffix(.message.as_deref()))]
    Status {
        /// The status code the server sent
        status: StatusCode,

        /// The server's explanation
        message: Option<String>,
    },
}

impl Error {
    /// The status code, if the server got far enough to send one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status(),
            Self::UrlParse(_) => None,
        }
    }
}

/// Format an optional server message for display after the status.
fn suffix(message: Option<&str>) -> String {
    message
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}

/// The body the web application sends along with an error status.
#[derive(Debug, Deserialize)]
pub struct ErrorResp {
    /// What went wrong, in the server's words.
    pub erro: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display_includes_server_message() {
        let err = Error::Status {
            status: StatusCode::UNAUTHORIZED,
            message: Some("senha incorreta".to_string()),
        };

        assert_eq!(err.to_string(), "server returned 401 Unauthorized: senha incorreta");
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn status_error_display_without_message() {
        let err = Error::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };

        assert_eq!(err.to_string(), "server returned 500 Internal Server Error");
    }

    #[test]
    fn url_errors_have_no_status() {
        let err = Error::from(url::Url::parse("not a url").unwrap_err());

        assert_eq!(err.status(), None);
    }

    #[test]
    fn error_body_reads_the_erro_field() {
        let body: ErrorResp =
            serde_json::from_str(r#"{"erro": "email já cadastrado"}"#).unwrap();

        assert_eq!(body.erro, "email já cadastrado");
        assert_eq!(suffix(Some(body.erro.as_str())), ": email já cadastrado");
        assert_eq!(suffix(None), "");
    }
}
