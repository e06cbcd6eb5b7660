use super::{RpcStruct, RpcValue};

impl From<bool> for RpcValue {
    fn from(value: bool) -> Self {
        RpcValue::Boolean(value)
    }
}

impl From<i32> for RpcValue {
    fn from(value: i32) -> Self {
        RpcValue::Int(value as i64)
    }
}

impl From<i64> for RpcValue {
    fn from(value: i64) -> Self {
        RpcValue::Int(value)
    }
}

impl From<u32> for RpcValue {
    fn from(value: u32) -> Self {
        RpcValue::Int(value as i64)
    }
}

/// Values beyond `i64::MAX` have no integer encoding and fall back to their
/// decimal text.
impl From<u64> for RpcValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => RpcValue::Int(v),
            Err(_) => RpcValue::stringify(value),
        }
    }
}

impl From<usize> for RpcValue {
    fn from(value: usize) -> Self {
        RpcValue::from(value as u64)
    }
}

impl From<f64> for RpcValue {
    fn from(value: f64) -> Self {
        RpcValue::Double(value)
    }
}

impl From<&str> for RpcValue {
    fn from(value: &str) -> Self {
        RpcValue::String(value.to_owned())
    }
}

impl From<String> for RpcValue {
    fn from(value: String) -> Self {
        RpcValue::String(value)
    }
}

impl From<&String> for RpcValue {
    fn from(value: &String) -> Self {
        RpcValue::String(value.clone())
    }
}

impl From<RpcStruct> for RpcValue {
    fn from(value: RpcStruct) -> Self {
        RpcValue::Struct(value)
    }
}

impl<T: Into<RpcValue>> From<Option<T>> for RpcValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RpcValue::Nil, Into::into)
    }
}

impl<T: Into<RpcValue>> From<Vec<T>> for RpcValue {
    fn from(value: Vec<T>) -> Self {
        RpcValue::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RpcValue> + Clone> From<&[T]> for RpcValue {
    fn from(value: &[T]) -> Self {
        RpcValue::Array(value.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<RpcValue>> FromIterator<(K, V)> for RpcValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RpcValue::Struct(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
