use crate::constants::XML_DECLARATION;
use crate::rpc::{RpcRequest, RpcResponse};
use crate::value::RpcValue;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quick_xml::escape::escape;
use std::fmt::Write;

/// Serializes requests, responses and individual values into XML-RPC text.
///
/// Output is compact (no whitespace between elements) and always UTF-8.
pub struct XmlEncoder;

impl XmlEncoder {
    /// Encodes a `<methodCall>` envelope, declaration included.
    pub fn encode_request(request: &RpcRequest) -> String {
        let mut xml = String::with_capacity(128 + 64 * request.params.len());
        xml.push_str(XML_DECLARATION);
        xml.push_str("<methodCall><methodName>");
        xml.push_str(&escape(request.method_name.as_str()));
        xml.push_str("</methodName><params>");

        for param in &request.params {
            xml.push_str("<param><value>");
            Self::write_value(&mut xml, param);
            xml.push_str("</value></param>");
        }

        xml.push_str("</params></methodCall>");
        xml
    }

    /// Encodes a `<methodResponse>` envelope carrying either a value or a fault.
    pub fn encode_response(response: &RpcResponse) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str("<methodResponse>");

        match response {
            RpcResponse::Success(value) => {
                xml.push_str("<params><param><value>");
                Self::write_value(&mut xml, value);
                xml.push_str("</value></param></params>");
            }
            RpcResponse::Fault(fault) => {
                xml.push_str("<fault><value>");
                Self::write_value(&mut xml, &fault.to_value());
                xml.push_str("</value></fault>");
            }
        }

        xml.push_str("</methodResponse>");
        xml
    }

    /// Encodes the typed element for `value` (without the surrounding `<value>`).
    pub fn encode_value(value: &RpcValue) -> String {
        let mut xml = String::new();
        Self::write_value(&mut xml, value);
        xml
    }

    fn write_value(xml: &mut String, value: &RpcValue) {
        match value {
            RpcValue::Nil => xml.push_str("<nil/>"),
            RpcValue::Boolean(b) => {
                xml.push_str(if *b {
                    "<boolean>1</boolean>"
                } else {
                    "<boolean>0</boolean>"
                });
            }
            // Writing into a `String` cannot fail
            RpcValue::Int(i) => {
                let _ = write!(xml, "<int>{i}</int>");
            }
            RpcValue::Double(d) => {
                let _ = write!(xml, "<double>{d}</double>");
            }
            RpcValue::String(s) => {
                xml.push_str("<string>");
                xml.push_str(&escape(s.as_str()));
                xml.push_str("</string>");
            }
            RpcValue::Binary(bytes) => {
                xml.push_str("<base64>");
                xml.push_str(&STANDARD.encode(bytes));
                xml.push_str("</base64>");
            }
            RpcValue::Array(items) => {
                xml.push_str("<array><data>");
                for item in items {
                    xml.push_str("<value>");
                    Self::write_value(xml, item);
                    xml.push_str("</value>");
                }
                xml.push_str("</data></array>");
            }
            RpcValue::Struct(members) => {
                xml.push_str("<struct>");
                for (name, member) in members {
                    xml.push_str("<member><name>");
                    xml.push_str(&escape(name.as_str()));
                    xml.push_str("</name><value>");
                    Self::write_value(xml, member);
                    xml.push_str("</value></member>");
                }
                xml.push_str("</struct>");
            }
        }
    }
}
