use indexmap::IndexMap;
use std::fmt::Display;

/// Ordered mapping of member name to value, as carried by a `<struct>`.
///
/// Iteration follows insertion order, which for decoded values is the order
/// the server sent the members in.
pub type RpcStruct = IndexMap<String, RpcValue>;

/// The universal value type flowing into the encoder and out of the decoder.
///
/// Every variant maps to exactly one wire element, so the choice between
/// `Array` and `Struct` is always made by the caller and never guessed from
/// the contents (an empty `Struct` still encodes as `<struct></struct>`).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RpcValue {
    #[default]
    Nil,
    Boolean(bool),
    Int(i64),
    Double(f64),
    String(String),
    /// Raw bytes, carried as `<base64>` on the wire.
    Binary(Vec<u8>),
    Array(Vec<RpcValue>),
    Struct(RpcStruct),
}

impl RpcValue {
    /// Builds a string value from anything printable.
    ///
    /// This is the encoder's fallback for scalars that have no dedicated wire
    /// type: they are sent as their textual form rather than rejected.
    pub fn stringify<T: Display>(value: T) -> Self {
        RpcValue::String(value.to_string())
    }

    /// An empty `<struct>`, e.g. the options argument of `authenticate`.
    pub fn empty_struct() -> Self {
        RpcValue::Struct(RpcStruct::new())
    }

    /// Name of the wire element this value encodes to.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RpcValue::Nil => "nil",
            RpcValue::Boolean(_) => "boolean",
            RpcValue::Int(_) => "int",
            RpcValue::Double(_) => "double",
            RpcValue::String(_) => "string",
            RpcValue::Binary(_) => "base64",
            RpcValue::Array(_) => "array",
            RpcValue::Struct(_) => "struct",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, RpcValue::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RpcValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RpcValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RpcValue::Double(d) => Some(*d),
            RpcValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RpcValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RpcValue::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[RpcValue]> {
        match self {
            RpcValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&RpcStruct> {
        match self {
            RpcValue::Struct(members) => Some(members),
            _ => None,
        }
    }

    pub fn into_array(self) -> Result<Vec<RpcValue>, RpcValue> {
        match self {
            RpcValue::Array(items) => Ok(items),
            other => Err(other),
        }
    }

    pub fn into_struct(self) -> Result<RpcStruct, RpcValue> {
        match self {
            RpcValue::Struct(members) => Ok(members),
            other => Err(other),
        }
    }

    /// Looks up a struct member by name. Returns `None` for non-structs.
    pub fn get(&self, name: &str) -> Option<&RpcValue> {
        self.as_struct().and_then(|members| members.get(name))
    }

    /// Odoo reports unset fields as `false` rather than nil; this treats
    /// `false`, nil, zero, and empty strings/collections as "no value".
    pub fn is_truthy(&self) -> bool {
        match self {
            RpcValue::Nil => false,
            RpcValue::Boolean(b) => *b,
            RpcValue::Int(i) => *i != 0,
            RpcValue::Double(d) => *d != 0.0,
            RpcValue::String(s) => !s.is_empty(),
            RpcValue::Binary(b) => !b.is_empty(),
            RpcValue::Array(items) => !items.is_empty(),
            RpcValue::Struct(members) => !members.is_empty(),
        }
    }

    /// Reads a many2one field, which Odoo renders as `[id, display_name]`
    /// (or `false` when unset).
    pub fn as_many2one(&self) -> Option<(i64, &str)> {
        match self.as_array()? {
            [RpcValue::Int(id), RpcValue::String(name)] => Some((*id, name.as_str())),
            _ => None,
        }
    }
}
