use odoo_rpc::value::{RpcStruct, RpcValue};

/// Keyword arguments accepted by `search` and `search_read`.
///
/// Converted into the kwargs struct of `execute_kw`; keys are only emitted
/// when set, so the default options send nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Sort specification, e.g. `"create_date desc"`.
    pub order: Option<String>,
    pub context: Option<RpcStruct>,
    /// Any other keyword argument, passed through verbatim.
    pub extra: RpcStruct,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn context(mut self, context: RpcStruct) -> Self {
        self.context = Some(context);
        self
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<RpcValue>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    pub fn into_kwargs(self) -> RpcStruct {
        let mut kwargs = RpcStruct::new();
        if let Some(limit) = self.limit {
            kwargs.insert("limit".into(), RpcValue::Int(limit));
        }
        if let Some(offset) = self.offset {
            kwargs.insert("offset".into(), RpcValue::Int(offset));
        }
        if let Some(order) = self.order {
            kwargs.insert("order".into(), RpcValue::String(order));
        }
        if let Some(context) = self.context {
            kwargs.insert("context".into(), RpcValue::Struct(context));
        }
        kwargs.extend(self.extra);
        kwargs
    }
}

impl From<SearchOptions> for RpcStruct {
    fn from(options: SearchOptions) -> Self {
        options.into_kwargs()
    }
}
