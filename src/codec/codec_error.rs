use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// The body is not well-formed XML (or has no root element at all).
    ///
    /// The parser's own diagnostic is kept in `detail` for logging; the
    /// displayed message is fixed.
    #[error("XML parsing error")]
    Malformed { detail: String },

    /// A numeric element whose text does not parse.
    #[error("invalid <{element}> value: {text:?}")]
    InvalidNumber { element: &'static str, text: String },

    #[error("invalid base64 payload: {detail}")]
    InvalidBase64 { detail: String },

    /// The envelope's structure does not match what was being decoded.
    #[error("expected <{expected}>, found <{found}>")]
    UnexpectedElement {
        expected: &'static str,
        found: String,
    },
}

impl CodecError {
    pub(crate) fn malformed(detail: impl ToString) -> Self {
        CodecError::Malformed {
            detail: detail.to_string(),
        }
    }
}
