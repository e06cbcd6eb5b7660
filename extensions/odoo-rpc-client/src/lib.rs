//! Session facade over Odoo's `common` and `object` XML-RPC endpoints.
//!
//! [`OdooClient`] authenticates once, caches the returned uid, and exposes
//! the usual model operations (`search`, `read`, `create`, ...) on top of
//! `execute_kw`. Every operation returns a `Result` and also records the
//! failure message in a single last-error slot for callers that only want
//! a string to show.

mod config;
mod domain;
mod error;
mod odoo_client;
mod search_options;

pub use config::{ConfigLoadError, ConfigProvider, ConnectionParameters};
pub use connection_test::ConnectionTestOutcome;
pub use domain::{Domain, condition};
pub use error::OdooError;
pub use odoo_client::{DEFAULT_FIELD_ATTRIBUTES, OdooClient};
pub use search_options::SearchOptions;

// Re-exported so callers need only this crate for everyday use.
pub use odoo_rpc::rpc::RpcFault;
pub use odoo_rpc::value::{RpcStruct, RpcValue};
pub use odoo_rpc_transport::{HttpTransport, RpcTransport, TransportError};
