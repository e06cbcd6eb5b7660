use crate::config::{ConfigProvider, ConnectionParameters};
use crate::connection_test::ConnectionTestOutcome;
use crate::error::OdooError;
use crate::search_options::SearchOptions;
use odoo_rpc::codec::XmlRpcCodec;
use odoo_rpc::constants::{
    METHOD_AUTHENTICATE, METHOD_EXECUTE_KW, METHOD_VERSION, XMLRPC_COMMON_PATH, XMLRPC_OBJECT_PATH,
};
use odoo_rpc::rpc::{RpcFault, RpcRequest, RpcResponse};
use odoo_rpc::value::{RpcStruct, RpcValue};
use odoo_rpc_transport::{HttpTransport, RpcTransport};

/// Field attributes requested by [`OdooClient::fields_get`] when the caller
/// has no preference.
pub const DEFAULT_FIELD_ATTRIBUTES: &[&str] = &["string", "type", "required"];

const AUTHENTICATION_FALLBACK: &str = "Authentication error.";
const EXECUTION_FALLBACK: &str = "Error during execution.";
const INCOMPLETE_SETTINGS: &str = "Please fill in all connection settings.";
const VERSION_UNAVAILABLE: &str = "Unable to retrieve the Odoo version.";

/// An authenticated session against one Odoo database.
///
/// The session holds two pieces of mutable state: the cached `uid` and the
/// last error message. Both are only touched through `&mut self`, so a
/// client is single-writer by construction; wrap it in a `Mutex` to share it
/// between threads.
///
/// Every fallible method returns `Result<_, OdooError>` and, on failure,
/// overwrites [`last_error`](Self::last_error) with the error's message.
pub struct OdooClient<T: RpcTransport = HttpTransport> {
    provider: Box<dyn ConfigProvider + Send + Sync>,
    params: ConnectionParameters,
    transport: T,
    uid: Option<i64>,
    last_error: String,
}

impl OdooClient<HttpTransport> {
    /// Creates a client that talks HTTP with the default timeout.
    pub fn connect(provider: impl ConfigProvider + Send + Sync + 'static) -> Result<Self, OdooError> {
        let transport = HttpTransport::new()?;
        Ok(Self::new(provider, transport))
    }
}

impl<T: RpcTransport> OdooClient<T> {
    pub fn new(provider: impl ConfigProvider + Send + Sync + 'static, transport: T) -> Self {
        let params = ConnectionParameters::from_provider(&provider);
        Self {
            provider: Box::new(provider),
            params,
            transport,
            uid: None,
            last_error: String::new(),
        }
    }

    /// The connection parameters currently in use.
    pub fn connection(&self) -> &ConnectionParameters {
        &self.params
    }

    /// Replaces the connection parameters.
    ///
    /// Any change drops the cached uid; the next operation re-authenticates.
    pub fn set_connection(&mut self, params: ConnectionParameters) {
        let params = ConnectionParameters::new(
            params.server_url,
            params.database,
            params.username,
            params.credential,
        );
        if params != self.params {
            if self.uid.take().is_some() {
                tracing::info!(url = %params.server_url, "Connection settings changed, session invalidated");
            }
            self.params = params;
        }
    }

    /// Re-reads the connection parameters from the configuration provider.
    pub fn refresh_connection(&mut self) {
        let params = ConnectionParameters::from_provider(self.provider.as_ref());
        self.set_connection(params);
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The authenticated user id, if a session is established.
    pub fn uid(&self) -> Option<i64> {
        self.uid
    }

    /// Message of the most recent failure, or empty if none since the last reset.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Forgets the uid and the last error.
    pub fn reset(&mut self) {
        self.uid = None;
        self.last_error.clear();
    }

    /// Logs in and caches the uid. Returns the cached uid without a request
    /// when already authenticated.
    pub fn authenticate(&mut self) -> Result<i64, OdooError> {
        let result = self.ensure_authenticated();
        self.record(result)
    }

    /// Calls the unauthenticated `version` method on the `common` endpoint.
    pub fn version(&mut self) -> Result<RpcValue, OdooError> {
        let result = self
            .call(XMLRPC_COMMON_PATH, METHOD_VERSION, Vec::new())
            .and_then(|response| into_value(response, EXECUTION_FALLBACK));
        self.record(result)
    }

    /// Runs `model.method(*args, **kwargs)` through `execute_kw` and returns
    /// the decoded result untouched.
    ///
    /// `kwargs` is left off the wire entirely when empty.
    pub fn execute(
        &mut self,
        model: &str,
        method: &str,
        args: Vec<RpcValue>,
        kwargs: RpcStruct,
    ) -> Result<RpcValue, OdooError> {
        let result = self.execute_kw(model, method, args, kwargs);
        self.record(result)
    }

    /// Ids of the records matching `domain`.
    pub fn search(
        &mut self,
        model: &str,
        domain: impl Into<RpcValue>,
        options: SearchOptions,
    ) -> Result<Vec<i64>, OdooError> {
        let result = self
            .execute_kw(model, "search", vec![domain.into()], options.into_kwargs())
            .and_then(|value| id_list("search", value));
        self.record(result)
    }

    /// Records matching `domain`, restricted to `fields` (all fields when empty).
    pub fn search_read(
        &mut self,
        model: &str,
        domain: impl Into<RpcValue>,
        fields: &[&str],
        options: SearchOptions,
    ) -> Result<Vec<RpcStruct>, OdooError> {
        let mut kwargs = options.into_kwargs();
        if !fields.is_empty() {
            kwargs.insert("fields".into(), RpcValue::from(fields));
        }
        let result = self
            .execute_kw(model, "search_read", vec![domain.into()], kwargs)
            .and_then(|value| record_list("search_read", value));
        self.record(result)
    }

    pub fn read(
        &mut self,
        model: &str,
        ids: &[i64],
        fields: &[&str],
    ) -> Result<Vec<RpcStruct>, OdooError> {
        let mut kwargs = RpcStruct::new();
        if !fields.is_empty() {
            kwargs.insert("fields".into(), RpcValue::from(fields));
        }
        let result = self
            .execute_kw(model, "read", vec![RpcValue::from(ids)], kwargs)
            .and_then(|value| record_list("read", value));
        self.record(result)
    }

    /// Creates one record and returns its id.
    pub fn create(&mut self, model: &str, values: RpcStruct) -> Result<i64, OdooError> {
        let result = self
            .execute_kw(model, "create", vec![RpcValue::Struct(values)], RpcStruct::new())
            .and_then(|value| match value {
                RpcValue::Int(id) => Ok(id),
                other => Err(unexpected("create", "int", &other)),
            });
        self.record(result)
    }

    /// Updates `ids` with `values`. Anything but a `true` reply is a failure.
    pub fn write(&mut self, model: &str, ids: &[i64], values: RpcStruct) -> Result<(), OdooError> {
        let result = self
            .execute_kw(
                model,
                "write",
                vec![RpcValue::from(ids), RpcValue::Struct(values)],
                RpcStruct::new(),
            )
            .and_then(|value| confirmed(model, "write", value));
        self.record(result)
    }

    /// Deletes `ids`. Anything but a `true` reply is a failure.
    pub fn unlink(&mut self, model: &str, ids: &[i64]) -> Result<(), OdooError> {
        let result = self
            .execute_kw(model, "unlink", vec![RpcValue::from(ids)], RpcStruct::new())
            .and_then(|value| confirmed(model, "unlink", value));
        self.record(result)
    }

    pub fn search_count(&mut self, model: &str, domain: impl Into<RpcValue>) -> Result<i64, OdooError> {
        let result = self
            .execute_kw(model, "search_count", vec![domain.into()], RpcStruct::new())
            .and_then(|value| match value {
                RpcValue::Int(count) => Ok(count),
                other => Err(unexpected("search_count", "int", &other)),
            });
        self.record(result)
    }

    /// Field definitions of `model`, keyed by field name.
    ///
    /// Pass [`DEFAULT_FIELD_ATTRIBUTES`] for the usual subset; an empty slice
    /// asks the server for every attribute.
    pub fn fields_get(&mut self, model: &str, attributes: &[&str]) -> Result<RpcStruct, OdooError> {
        let mut kwargs = RpcStruct::new();
        if !attributes.is_empty() {
            kwargs.insert("attributes".into(), RpcValue::from(attributes));
        }
        let result = self
            .execute_kw(model, "fields_get", Vec::new(), kwargs)
            .and_then(|value| {
                value
                    .into_struct()
                    .map_err(|other| unexpected("fields_get", "struct", &other))
            });
        self.record(result)
    }

    /// Checks reachability and credentials from scratch.
    ///
    /// Reloads the parameters from the provider, drops the cached uid, asks
    /// the server for its version and only then authenticates.
    pub fn test_connection(&mut self) -> ConnectionTestOutcome {
        self.refresh_connection();
        self.uid = None;

        if !self.params.missing_fields().is_empty() {
            return self.failed_test(INCOMPLETE_SETTINGS.to_owned());
        }

        let version = match self.call(XMLRPC_COMMON_PATH, METHOD_VERSION, Vec::new()) {
            Ok(RpcResponse::Success(version)) => version,
            Ok(RpcResponse::Fault(fault)) => {
                tracing::warn!(code = ?fault.code, message = %fault.message, "Version call faulted");
                return self.failed_test(VERSION_UNAVAILABLE.to_owned());
            }
            Err(err) => return self.failed_test(err.to_string()),
        };

        match self.ensure_authenticated() {
            Ok(uid) => ConnectionTestOutcome::succeeded(version, uid),
            Err(err) => self.failed_test(err.to_string()),
        }
    }

    fn failed_test(&mut self, message: String) -> ConnectionTestOutcome {
        self.last_error.clone_from(&message);
        ConnectionTestOutcome::failed(message)
    }

    fn ensure_authenticated(&mut self) -> Result<i64, OdooError> {
        if let Some(uid) = self.uid {
            return Ok(uid);
        }

        let missing = self.params.missing_fields();
        if !missing.is_empty() {
            return Err(OdooError::Configuration { missing });
        }

        let params = vec![
            RpcValue::from(&self.params.database),
            RpcValue::from(&self.params.username),
            RpcValue::from(&self.params.credential),
            RpcValue::empty_struct(),
        ];
        let value = into_value(
            self.call(XMLRPC_COMMON_PATH, METHOD_AUTHENTICATE, params)?,
            AUTHENTICATION_FALLBACK,
        )?;

        match value {
            RpcValue::Int(uid) if uid > 0 => {
                tracing::info!(uid, database = %self.params.database, "Authenticated");
                self.uid = Some(uid);
                Ok(uid)
            }
            other => {
                tracing::warn!(
                    username = %self.params.username,
                    result = other.kind_name(),
                    "Authentication rejected"
                );
                Err(OdooError::InvalidCredentials)
            }
        }
    }

    fn execute_kw(
        &mut self,
        model: &str,
        method: &str,
        args: Vec<RpcValue>,
        kwargs: RpcStruct,
    ) -> Result<RpcValue, OdooError> {
        let uid = self.ensure_authenticated()?;

        let mut params = vec![
            RpcValue::from(&self.params.database),
            RpcValue::Int(uid),
            RpcValue::from(&self.params.credential),
            RpcValue::from(model),
            RpcValue::from(method),
            RpcValue::Array(args),
        ];
        if !kwargs.is_empty() {
            params.push(RpcValue::Struct(kwargs));
        }

        tracing::debug!(model, method, "execute_kw");
        into_value(
            self.call(XMLRPC_OBJECT_PATH, METHOD_EXECUTE_KW, params)?,
            EXECUTION_FALLBACK,
        )
    }

    /// One encode, POST, decode cycle against `path`.
    fn call(&self, path: &str, method: &str, params: Vec<RpcValue>) -> Result<RpcResponse, OdooError> {
        let endpoint = format!("{}{}", self.params.server_url, path);
        let body = XmlRpcCodec::encode_call(&RpcRequest::new(method, params));

        let reply = self.transport.post(&endpoint, body).inspect_err(|err| {
            tracing::warn!(%endpoint, method, error = %err, "XML-RPC request failed");
        })?;

        Ok(XmlRpcCodec::decode_reply(&reply)?)
    }

    fn record<R>(&mut self, result: Result<R, OdooError>) -> Result<R, OdooError> {
        if let Err(err) = &result {
            self.last_error = err.to_string();
        }
        result
    }
}

fn into_value(response: RpcResponse, fallback: &str) -> Result<RpcValue, OdooError> {
    response.into_result().map_err(|fault| {
        if fault.message.is_empty() {
            OdooError::Fault(RpcFault::new(fault.code, fallback))
        } else {
            OdooError::Fault(fault)
        }
    })
}

fn unexpected(method: &str, expected: &'static str, found: &RpcValue) -> OdooError {
    OdooError::UnexpectedResult {
        method: method.to_owned(),
        expected,
        found: found.kind_name(),
    }
}

fn confirmed(model: &str, method: &str, value: RpcValue) -> Result<(), OdooError> {
    match value {
        RpcValue::Boolean(true) => Ok(()),
        _ => Err(OdooError::Rejected {
            model: model.to_owned(),
            method: method.to_owned(),
        }),
    }
}

fn id_list(method: &str, value: RpcValue) -> Result<Vec<i64>, OdooError> {
    let items = value
        .into_array()
        .map_err(|other| unexpected(method, "array of ids", &other))?;

    items
        .into_iter()
        .map(|item| match item {
            RpcValue::Int(id) => Ok(id),
            other => Err(unexpected(method, "int", &other)),
        })
        .collect()
}

fn record_list(method: &str, value: RpcValue) -> Result<Vec<RpcStruct>, OdooError> {
    let items = value
        .into_array()
        .map_err(|other| unexpected(method, "array of records", &other))?;

    items
        .into_iter()
        .map(|item| {
            item.into_struct()
                .map_err(|other| unexpected(method, "struct", &other))
        })
        .collect()
}
