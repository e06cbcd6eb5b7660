use serde::Serialize;

/// What a form submission reports back to the visitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub message: String,

    /// Id of the record created by the submission, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
}

impl SubmissionOutcome {
    pub(crate) fn accepted(message: &str, record_id: Option<i64>) -> Self {
        Self {
            success: true,
            message: message.to_owned(),
            record_id,
        }
    }

    pub(crate) fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_owned(),
            record_id: None,
        }
    }
}

/// A deliberately plain address check: one `@`, a non-empty local part, and a
/// dotted domain with no empty labels. No whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Trims form input the way the form handlers expect it.
pub(crate) fn clean(field: &str) -> String {
    field.trim().to_owned()
}
