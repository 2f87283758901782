use super::error::{self, Error, ErrorResp};
use super::{login, register};
use serde::Serialize;
use std::future::Future;
use url::Url;

/// Something that can send a form-encoded body to a path on the web
/// application. The form handlers are written against this rather than
/// `Client` so they can run without a network.
pub trait Transport {
    /// POST `body` as `application/x-www-form-urlencoded` to `path`,
    /// succeeding only on a 2xx response.
    fn post_form<B: Serialize>(&self, path: &str, body: &B) -> impl Future<Output = error::Result<()>>;
}

/// Client for the web application's form endpoints
#[derive(Debug, Clone)]
pub struct Client {
    /// The server to connect to. Should only be the protocol and domain, e.g.
    /// `https://devbook.your-domain.com`. Parsed on every request, so a bad
    /// value fails each submission instead of keeping the client from
    /// existing.
    server: String,

    /// Shared HTTP connection pool.
    http: reqwest::Client,
}

impl Client {
    /// Construct a new client
    pub fn new(server: &str) -> Self {
        Self::with_http(server, reqwest::Client::new())
    }

    /// Construct a new client sharing an existing HTTP client.
    pub fn with_http(server: &str, http: reqwest::Client) -> Self {
        Self {
            server: server.trim().to_string(),
            http,
        }
    }

    /// The server this client talks to, as configured.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// The server as an absolute URL.
    ///
    /// ## Errors
    ///
    /// Fails if the configured server is not an absolute URL (for example
    /// the `null` origin of a `file://` page.)
    pub fn base_url(&self) -> error::Result<Url> {
        Ok(Url::parse(&self.server)?)
    }

    /// Create a new user.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn register(&self, req: &register::Req) -> error::Result<()> {
        self.send_form(register::PATH, req).await
    }

    /// Log into the web application.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn login(&self, req: &login::Req) -> error::Result<()> {
        self.send_form(login::PATH, req).await
    }

    /// POST a form-encoded body to a path relative to the server.
    async fn send_form<B: Serialize>(&self, path: &str, body: &B) -> error::Result<()> {
        let url = self.base_url()?.join(path)?;
        tracing::debug!(%url, "posting form");

        Self::handle_response(self.http.post(url).form(body).send().await?).await
    }

    /// Convert an HTTP response into a result.
    ///
    /// ## Errors
    ///
    /// - `Ok(())` if the server returned a success (2xx.) The body is ignored.
    /// - `Error::Status` for anything else, carrying the server's `erro`
    ///   message if the body had one.
    async fn handle_response(resp: reqwest::Response) -> error::Result<()> {
        let status = resp.status();

        if status.is_success() {
            return Ok(());
        }

        // A body we can't read doesn't make the error any worse.
        let message = resp.json::<ErrorResp>().await.ok().map(|body| body.erro);

        Err(Error::Status { status, message })
    }
}

impl Transport for Client {
    fn post_form<B: Serialize>(&self, path: &str, body: &B) -> impl Future<Output = error::Result<()>> {
        self.send_form(path, body)
    }
}
