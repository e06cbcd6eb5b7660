// Endpoint related constants
pub const XMLRPC_COMMON_PATH: &str = "/xmlrpc/2/common";
pub const XMLRPC_OBJECT_PATH: &str = "/xmlrpc/2/object";

/// Declaration emitted at the head of every request envelope.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Content type sent with every request body.
pub const XMLRPC_CONTENT_TYPE: &str = "text/xml";

// Method names understood by the `common` endpoint
pub const METHOD_AUTHENTICATE: &str = "authenticate";
pub const METHOD_VERSION: &str = "version";

// Method names understood by the `object` endpoint
pub const METHOD_EXECUTE_KW: &str = "execute_kw";

/// Member names of the struct carried inside a fault envelope.
pub const FAULT_CODE_MEMBER: &str = "faultCode";
pub const FAULT_STRING_MEMBER: &str = "faultString";
