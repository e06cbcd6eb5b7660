use crate::codec::{CodecError, XmlDecoder, XmlEncoder};
use crate::rpc::{RpcRequest, RpcResponse};

/// Provides the request/response pairing used by a client.
///
/// The `XmlRpcCodec` encodes outbound calls and decodes what comes back,
/// logging faults and malformed bodies on the way. It is a thin front for
/// [`XmlEncoder`] and [`XmlDecoder`], which remain usable on their own.
pub struct XmlRpcCodec;

impl XmlRpcCodec {
    /// Encodes a call to `method_name` with positional `params`.
    pub fn encode_call(request: &RpcRequest) -> String {
        let body = XmlEncoder::encode_request(request);
        tracing::trace!(
            method = %request.method_name,
            params = request.params.len(),
            bytes = body.len(),
            "Encoded XML-RPC request"
        );
        body
    }

    /// Decodes a response body.
    ///
    /// # Returns
    ///
    /// - `Ok(RpcResponse::Success(value))` for a returned value.
    /// - `Ok(RpcResponse::Fault(fault))` when the server sent a fault envelope.
    /// - `Err(CodecError)` when the body cannot be decoded.
    pub fn decode_reply(body: &str) -> Result<RpcResponse, CodecError> {
        match XmlDecoder::decode_response(body) {
            Ok(RpcResponse::Fault(fault)) => {
                tracing::debug!(code = ?fault.code, message = %fault.message, "XML-RPC fault");
                Ok(RpcResponse::Fault(fault))
            }
            Ok(response) => Ok(response),
            Err(err) => {
                if let CodecError::Malformed { detail } = &err {
                    tracing::warn!(%detail, "Malformed XML-RPC response");
                } else {
                    tracing::warn!(error = %err, "Undecodable XML-RPC response");
                }
                Err(err)
            }
        }
    }
}
