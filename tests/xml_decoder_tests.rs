use odoo_rpc::codec::{CodecError, XmlDecoder, XmlEncoder};
use odoo_rpc::rpc::{RpcFault, RpcRequest, RpcResponse};
use odoo_rpc::value::{RpcStruct, RpcValue};

fn wrap_success(value_xml: &str) -> String {
    format!(
        "<?xml version=\"1.0\"?><methodResponse><params><param><value>{value_xml}</value></param></params></methodResponse>"
    )
}

fn decode_success(value_xml: &str) -> RpcValue {
    match XmlDecoder::decode_response(&wrap_success(value_xml)).unwrap() {
        RpcResponse::Success(value) => value,
        RpcResponse::Fault(fault) => panic!("unexpected fault: {fault:?}"),
    }
}

#[test]
fn test_decodes_helpdesk_team_listing() {
    let value = decode_success(concat!(
        "<array><data><value><struct>",
        "<member><name>id</name><value><int>3</int></value></member>",
        "<member><name>name</name><value><string>Support</string></value></member>",
        "</struct></value></data></array>"
    ));

    let mut team = RpcStruct::new();
    team.insert("id".into(), RpcValue::Int(3));
    team.insert("name".into(), RpcValue::String("Support".into()));

    assert_eq!(value, RpcValue::Array(vec![RpcValue::Struct(team)]));
}

#[test]
fn test_struct_member_order_is_preserved() {
    let value = decode_success(concat!(
        "<struct>",
        "<member><name>zeta</name><value><int>1</int></value></member>",
        "<member><name>alpha</name><value><int>2</int></value></member>",
        "<member><name>mid</name><value><int>3</int></value></member>",
        "</struct>"
    ));

    let keys: Vec<&str> = value
        .as_struct()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn test_fault_envelope_decodes_to_fault() {
    let xml = concat!(
        "<?xml version='1.0'?>\n<methodResponse>\n<fault>\n<value><struct>\n",
        "<member>\n<name>faultCode</name>\n<value><int>1</int></value>\n</member>\n",
        "<member>\n<name>faultString</name>\n<value><string>Access Denied</string></value>\n</member>\n",
        "</struct></value>\n</fault>\n</methodResponse>\n"
    );

    assert_eq!(
        XmlDecoder::decode_response(xml).unwrap(),
        RpcResponse::Fault(RpcFault::new(Some(1), "Access Denied"))
    );
}

#[test]
fn test_fault_with_missing_members_is_tolerated() {
    let xml = "<methodResponse><fault><value><struct></struct></value></fault></methodResponse>";
    assert_eq!(
        XmlDecoder::decode_response(xml).unwrap(),
        RpcResponse::Fault(RpcFault::new(None, ""))
    );
}

#[test]
fn test_malformed_body_is_xml_parsing_error() {
    let err = XmlDecoder::decode_response("<html><body>Bad Gateway").unwrap_err();
    assert!(matches!(err, CodecError::Malformed { .. }));
    assert_eq!(err.to_string(), "XML parsing error");
}

#[test]
fn test_non_response_root_is_rejected() {
    let err = XmlDecoder::decode_response("<html><body><p>Login</p></body></html>").unwrap_err();
    assert_eq!(
        err,
        CodecError::UnexpectedElement {
            expected: "methodResponse",
            found: "html".to_owned(),
        }
    );

    let echoed = XmlEncoder::encode_request(&RpcRequest::new("version", vec![]));
    assert!(matches!(
        XmlDecoder::decode_response(&echoed),
        Err(CodecError::UnexpectedElement { .. })
    ));
}

#[test]
fn test_untyped_value_is_string() {
    assert_eq!(decode_success("plain text"), RpcValue::String("plain text".into()));
    assert_eq!(decode_success(""), RpcValue::String(String::new()));
}

#[test]
fn test_unknown_type_tag_falls_back_to_string() {
    assert_eq!(
        decode_success("<ex:bigdecimal>1.50</ex:bigdecimal>"),
        RpcValue::String("1.50".into())
    );
}

#[test]
fn test_scalar_tags() {
    assert_eq!(decode_success("<nil/>"), RpcValue::Nil);
    assert_eq!(decode_success("<boolean>1</boolean>"), RpcValue::Boolean(true));
    assert_eq!(decode_success("<boolean>TRUE</boolean>"), RpcValue::Boolean(true));
    assert_eq!(decode_success("<boolean>0</boolean>"), RpcValue::Boolean(false));
    assert_eq!(decode_success("<i4>7</i4>"), RpcValue::Int(7));
    assert_eq!(decode_success("<i8>8589934592</i8>"), RpcValue::Int(8_589_934_592));
    assert_eq!(decode_success("<int> -3 </int>"), RpcValue::Int(-3));
    assert_eq!(decode_success("<double>0.25</double>"), RpcValue::Double(0.25));
    assert_eq!(
        decode_success("<string>a &amp; b</string>"),
        RpcValue::String("a & b".into())
    );
    assert_eq!(
        decode_success("<dateTime.iso8601>20240131T10:00:00</dateTime.iso8601>"),
        RpcValue::String("20240131T10:00:00".into())
    );
}

#[test]
fn test_wrapped_base64_decodes_to_bytes() {
    assert_eq!(
        decode_success("<base64>aGVs\nbG8=\n</base64>"),
        RpcValue::Binary(b"hello".to_vec())
    );
}

#[test]
fn test_invalid_integer_is_rejected() {
    let err = XmlDecoder::decode_response(&wrap_success("<int>abc</int>")).unwrap_err();
    assert!(matches!(err, CodecError::InvalidNumber { element: "int", .. }));
}

#[test]
fn test_response_without_params_is_nil() {
    assert_eq!(
        XmlDecoder::decode_response("<methodResponse></methodResponse>").unwrap(),
        RpcResponse::Success(RpcValue::Nil)
    );
}

#[test]
fn test_pretty_printed_response_ignores_whitespace() {
    let xml = "<methodResponse>\n  <params>\n    <param>\n      <value>\n        <array>\n          <data>\n            <value><int>1</int></value>\n            <value><int>2</int></value>\n          </data>\n        </array>\n      </value>\n    </param>\n  </params>\n</methodResponse>";

    assert_eq!(
        XmlDecoder::decode_response(xml).unwrap(),
        RpcResponse::Success(RpcValue::from(vec![1, 2]))
    );
}

#[test]
fn test_request_decodes_back() {
    let request = RpcRequest::new(
        "execute_kw",
        vec![
            "db".into(),
            RpcValue::Int(2),
            "key".into(),
            "res.partner".into(),
            "search".into(),
            RpcValue::from(vec![RpcValue::Array(vec![])]),
        ],
    );

    let decoded = XmlDecoder::decode_request(&XmlEncoder::encode_request(&request)).unwrap();
    assert_eq!(decoded, request);
}
