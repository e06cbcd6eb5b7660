use crate::codec::CodecError;
use crate::codec::xml_tree::{XmlElement, parse_document};
use crate::rpc::{RpcFault, RpcRequest, RpcResponse};
use crate::value::{RpcStruct, RpcValue};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Parses XML-RPC envelopes back into requests, responses and values.
///
/// Decoding is permissive in the way the protocol is in practice: a
/// `<value>` with no typed child is a string, and an unknown type tag is
/// read as its text rather than rejected.
pub struct XmlDecoder;

impl XmlDecoder {
    /// Decodes a `<methodResponse>` into its returned value or fault.
    ///
    /// A response with neither a fault nor a returned parameter decodes to
    /// `Nil`.
    pub fn decode_response(xml: &str) -> Result<RpcResponse, CodecError> {
        let root = parse_document(xml)?;
        if root.name != "methodResponse" {
            return Err(CodecError::UnexpectedElement {
                expected: "methodResponse",
                found: root.name,
            });
        }

        if let Some(fault) = root.child("fault") {
            let fault = match fault.child("value") {
                Some(value) => RpcFault::from_value(&Self::decode_value_node(value)?),
                None => RpcFault::new(None, ""),
            };
            return Ok(RpcResponse::Fault(fault));
        }

        let value = root
            .child("params")
            .and_then(|params| params.child("param"))
            .and_then(|param| param.child("value"));

        match value {
            Some(value) => Ok(RpcResponse::Success(Self::decode_value_node(value)?)),
            None => Ok(RpcResponse::Success(RpcValue::Nil)),
        }
    }

    /// Decodes a `<methodCall>` envelope.
    pub fn decode_request(xml: &str) -> Result<RpcRequest, CodecError> {
        let root = parse_document(xml)?;
        if root.name != "methodCall" {
            return Err(CodecError::UnexpectedElement {
                expected: "methodCall",
                found: root.name,
            });
        }

        let method_name = root
            .child("methodName")
            .map(|name| name.text.trim().to_owned())
            .ok_or_else(|| CodecError::UnexpectedElement {
                expected: "methodName",
                found: String::new(),
            })?;

        let mut params = Vec::new();
        if let Some(list) = root.child("params") {
            for param in list.children_named("param") {
                match param.child("value") {
                    Some(value) => params.push(Self::decode_value_node(value)?),
                    None => params.push(RpcValue::Nil),
                }
            }
        }

        Ok(RpcRequest {
            method_name,
            params,
        })
    }

    /// Decodes a standalone `<value>...</value>` fragment.
    pub fn decode_value(xml: &str) -> Result<RpcValue, CodecError> {
        let node = parse_document(xml)?;
        if node.name != "value" {
            return Err(CodecError::UnexpectedElement {
                expected: "value",
                found: node.name,
            });
        }
        Self::decode_value_node(&node)
    }

    fn decode_value_node(node: &XmlElement) -> Result<RpcValue, CodecError> {
        // Untyped shorthand: `<value>text</value>` is a string
        let Some(typed) = node.children.first() else {
            return Ok(RpcValue::String(node.text.clone()));
        };

        let value = match typed.name.as_str() {
            "nil" => RpcValue::Nil,
            "boolean" => {
                let text = typed.text.trim();
                RpcValue::Boolean(text == "1" || text.eq_ignore_ascii_case("true"))
            }
            "int" | "i4" | "i8" => {
                let text = typed.text.trim();
                RpcValue::Int(text.parse().map_err(|_| CodecError::InvalidNumber {
                    element: "int",
                    text: text.to_owned(),
                })?)
            }
            "double" => {
                let text = typed.text.trim();
                RpcValue::Double(text.parse().map_err(|_| CodecError::InvalidNumber {
                    element: "double",
                    text: text.to_owned(),
                })?)
            }
            "string" => RpcValue::String(typed.text.clone()),
            "base64" => {
                // Encoders commonly wrap base64 lines, so drop all whitespace first
                let compact: String = typed
                    .text
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                let bytes = STANDARD
                    .decode(compact.as_bytes())
                    .map_err(|err| CodecError::InvalidBase64 {
                        detail: err.to_string(),
                    })?;
                RpcValue::Binary(bytes)
            }
            // Interpretation of timestamps is left to the caller
            "dateTime.iso8601" => RpcValue::String(typed.text.clone()),
            "array" => {
                let mut items = Vec::new();
                if let Some(data) = typed.child("data") {
                    for item in data.children_named("value") {
                        items.push(Self::decode_value_node(item)?);
                    }
                }
                RpcValue::Array(items)
            }
            "struct" => {
                let mut members = RpcStruct::new();
                for member in typed.children_named("member") {
                    let name = member
                        .child("name")
                        .map(|n| n.text.clone())
                        .unwrap_or_default();
                    let value = match member.child("value") {
                        Some(value) => Self::decode_value_node(value)?,
                        None => RpcValue::String(String::new()),
                    };
                    members.insert(name, value);
                }
                RpcValue::Struct(members)
            }
            _ => RpcValue::String(typed.text.clone()),
        };

        Ok(value)
    }
}
