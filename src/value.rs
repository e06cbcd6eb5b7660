mod rpc_value;
mod rpc_value_conversions;

pub use rpc_value::{RpcStruct, RpcValue};
