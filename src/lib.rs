//! Core building blocks for speaking Odoo's legacy XML-RPC dialect.
//!
//! This crate owns the [`value::RpcValue`] model and the wire codec that turns
//! method calls into request envelopes and response envelopes back into values
//! or faults. It performs no I/O; see the `odoo-rpc-transport` and
//! `odoo-rpc-client` extensions for the HTTP exchange and the session facade.

pub mod codec;
pub mod constants;
pub mod rpc;
pub mod value;
