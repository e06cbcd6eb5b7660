use crate::{RpcTransport, TransportError};
use odoo_rpc::constants::XMLRPC_CONTENT_TYPE;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP transport backed by `reqwest`.
///
/// Each call to [`RpcTransport::post`] is one `POST` with a `text/xml` body.
/// Redirects follow the client's defaults; nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport with the default 30 second timeout.
    pub fn new() -> Result<Self, TransportError> {
        Self::builder().build()
    }

    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn map_send_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout)
        } else {
            TransportError::Connect(err.to_string())
        }
    }
}

impl RpcTransport for HttpTransport {
    fn post(&self, endpoint: &str, body: String) -> Result<String, TransportError> {
        let request_bytes = body.len();

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, XMLRPC_CONTENT_TYPE)
            .body(body)
            .send()
            .map_err(|err| {
                tracing::warn!(%endpoint, error = %err, "XML-RPC request failed");
                self.map_send_error(err)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%endpoint, status = status.as_u16(), "XML-RPC endpoint returned non-200");
            return Err(TransportError::Status(status.as_u16()));
        }

        let text = response.text().map_err(|err| {
            if err.is_timeout() {
                TransportError::Timeout(self.timeout)
            } else {
                TransportError::Body(err.to_string())
            }
        })?;

        tracing::debug!(
            %endpoint,
            request_bytes,
            response_bytes = text.len(),
            "XML-RPC exchange complete"
        );

        Ok(text)
    }
}

/// Configures an [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

impl HttpTransportBuilder {
    /// Total time allowed for connecting, sending and reading the response.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<HttpTransport, TransportError> {
        let mut builder = Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TransportError::Client(err.to_string()))?;

        Ok(HttpTransport {
            client,
            timeout: self.timeout,
        })
    }
}
