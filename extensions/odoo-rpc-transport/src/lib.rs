mod http_transport;
#[cfg(feature = "test-util")]
mod scripted_transport;
mod transport_error;

pub use http_transport::{DEFAULT_TIMEOUT, HttpTransport, HttpTransportBuilder};
#[cfg(feature = "test-util")]
pub use scripted_transport::{RecordedRequest, ScriptedTransport};
pub use transport_error::TransportError;

/// Performs a single request/response exchange with an XML-RPC endpoint.
///
/// Implementations issue exactly one POST per call: no retries, no caching.
/// Anything other than a `200` response with a readable body is an error.
pub trait RpcTransport {
    /// Sends `body` to the absolute `endpoint` URL and returns the response body.
    fn post(&self, endpoint: &str, body: String) -> Result<String, TransportError>;
}

impl<T: RpcTransport + ?Sized> RpcTransport for &T {
    fn post(&self, endpoint: &str, body: String) -> Result<String, TransportError> {
        (**self).post(endpoint, body)
    }
}

impl<T: RpcTransport + ?Sized> RpcTransport for Box<T> {
    fn post(&self, endpoint: &str, body: String) -> Result<String, TransportError> {
        (**self).post(endpoint, body)
    }
}

impl<T: RpcTransport + ?Sized> RpcTransport for std::sync::Arc<T> {
    fn post(&self, endpoint: &str, body: String) -> Result<String, TransportError> {
        (**self).post(endpoint, body)
    }
}
