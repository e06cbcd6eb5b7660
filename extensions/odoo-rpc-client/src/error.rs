use odoo_rpc::codec::CodecError;
use odoo_rpc::rpc::RpcFault;
use odoo_rpc_transport::TransportError;
use thiserror::Error;

/// Every way an [`OdooClient`](crate::OdooClient) operation can fail.
///
/// The `Display` form of each variant is what ends up in the client's
/// last-error slot; for faults it is the server's message verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OdooError {
    /// A connection parameter is empty. Detected before any request is sent.
    #[error("Odoo configuration incomplete (missing {})", .missing.join(", "))]
    Configuration { missing: Vec<&'static str> },

    /// Connectivity failure, timeout, or a non-200 HTTP status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body is not a well-formed XML-RPC envelope.
    #[error(transparent)]
    Protocol(#[from] CodecError),

    /// The server answered with a fault envelope.
    #[error("{0}")]
    Fault(RpcFault),

    /// `authenticate` returned something other than a positive uid.
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// A mutation returned a result other than `true`.
    #[error("Odoo did not confirm {method} on {model}")]
    Rejected { model: String, method: String },

    /// A successful reply whose shape does not fit the operation.
    #[error("Unexpected result from {method}: expected {expected}, got {found}")]
    UnexpectedResult {
        method: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl OdooError {
    /// The fault carried by this error, if the server sent one.
    pub fn fault(&self) -> Option<&RpcFault> {
        match self {
            OdooError::Fault(fault) => Some(fault),
            _ => None,
        }
    }

    /// Whether the failure happened before or during the HTTP exchange.
    pub fn is_transport(&self) -> bool {
        matches!(self, OdooError::Transport(_))
    }
}
