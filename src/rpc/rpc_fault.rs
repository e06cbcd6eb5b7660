use crate::constants::{FAULT_CODE_MEMBER, FAULT_STRING_MEMBER};
use crate::value::RpcValue;
use std::fmt;

/// A structured error returned by the server in place of a return value.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcFault {
    /// `faultCode`, when the server sent an integer one.
    pub code: Option<i64>,

    /// `faultString`, or empty when the member was missing.
    pub message: String,
}

impl RpcFault {
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Builds a fault from the value carried inside a `<fault>` node.
    ///
    /// Missing or oddly-typed members are tolerated: Odoo sometimes sends a
    /// string `faultCode`, which is kept out of `code` rather than rejected.
    pub fn from_value(value: &RpcValue) -> Self {
        let code = value.get(FAULT_CODE_MEMBER).and_then(|c| match c {
            RpcValue::Int(i) => Some(*i),
            RpcValue::String(s) => s.trim().parse().ok(),
            _ => None,
        });
        let message = value
            .get(FAULT_STRING_MEMBER)
            .and_then(RpcValue::as_str)
            .unwrap_or_default()
            .to_owned();

        Self { code, message }
    }

    /// The value form, suitable for encoding back into a fault envelope.
    pub fn to_value(&self) -> RpcValue {
        let mut members = crate::value::RpcStruct::new();
        if let Some(code) = self.code {
            members.insert(FAULT_CODE_MEMBER.to_owned(), RpcValue::Int(code));
        }
        members.insert(
            FAULT_STRING_MEMBER.to_owned(),
            RpcValue::String(self.message.clone()),
        );
        RpcValue::Struct(members)
    }
}

impl fmt::Display for RpcFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
