use crate::{RpcTransport, TransportError};
use odoo_rpc::codec::{CodecError, XmlDecoder, XmlEncoder};
use odoo_rpc::rpc::{RpcFault, RpcRequest, RpcResponse};
use odoo_rpc::value::RpcValue;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A request captured by [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub body: String,
}

impl RecordedRequest {
    /// Decodes the captured body back into the call it encodes.
    pub fn decode(&self) -> Result<RpcRequest, CodecError> {
        XmlDecoder::decode_request(&self.body)
    }
}

/// An in-memory transport that replays queued replies in order.
///
/// Every call is recorded, so tests can assert on how many requests were sent
/// and what they contained. When the queue runs dry, `post` fails with a
/// connection error.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<String, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response body.
    pub fn push_body(&self, body: impl Into<String>) -> &Self {
        lock(&self.replies).push_back(Ok(body.into()));
        self
    }

    /// Queues a successful response returning `value`.
    pub fn push_value(&self, value: impl Into<RpcValue>) -> &Self {
        self.push_body(XmlEncoder::encode_response(&RpcResponse::Success(
            value.into(),
        )))
    }

    /// Queues a fault response.
    pub fn push_fault(&self, code: i64, message: &str) -> &Self {
        self.push_body(XmlEncoder::encode_response(&RpcResponse::Fault(
            RpcFault::new(Some(code), message),
        )))
    }

    /// Queues a transport-level failure.
    pub fn push_error(&self, err: TransportError) -> &Self {
        lock(&self.replies).push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Number of queued replies not yet consumed.
    pub fn pending_replies(&self) -> usize {
        lock(&self.replies).len()
    }
}

impl RpcTransport for ScriptedTransport {
    fn post(&self, endpoint: &str, body: String) -> Result<String, TransportError> {
        lock(&self.requests).push(RecordedRequest {
            endpoint: endpoint.to_owned(),
            body,
        });

        lock(&self.replies)
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connect("no scripted reply left".into())))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
