mod rpc_fault;
mod rpc_request_response;

pub use rpc_fault::RpcFault;
pub use rpc_request_response::{RpcRequest, RpcResponse};
