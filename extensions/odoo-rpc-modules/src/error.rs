use odoo_rpc_client::OdooError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// The underlying Odoo call failed.
    #[error(transparent)]
    Client(#[from] OdooError),

    /// Input rejected before anything was sent.
    #[error("{0}")]
    Validation(String),

    #[error("No {model} record matches {key}")]
    NotFound { model: &'static str, key: String },
}

impl ServiceError {
    pub(crate) fn not_found(model: &'static str, key: impl ToString) -> Self {
        ServiceError::NotFound {
            model,
            key: key.to_string(),
        }
    }
}
