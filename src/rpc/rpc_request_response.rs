use crate::rpc::RpcFault;
use crate::value::RpcValue;

/// A method call ready to be encoded into a `<methodCall>` envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcRequest {
    pub method_name: String,

    /// Positional parameters, each wrapped in its own `<param>`.
    pub params: Vec<RpcValue>,
}

impl RpcRequest {
    pub fn new(method_name: impl Into<String>, params: Vec<RpcValue>) -> Self {
        Self {
            method_name: method_name.into(),
            params,
        }
    }
}

/// A decoded `<methodResponse>`: either the first returned parameter or a fault.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcResponse {
    Success(RpcValue),
    Fault(RpcFault),
}

impl RpcResponse {
    pub fn is_fault(&self) -> bool {
        matches!(self, RpcResponse::Fault(_))
    }

    /// Converts into a `Result`, splitting faults out as the error side.
    pub fn into_result(self) -> Result<RpcValue, RpcFault> {
        match self {
            RpcResponse::Success(value) => Ok(value),
            RpcResponse::Fault(fault) => Err(fault),
        }
    }
}
