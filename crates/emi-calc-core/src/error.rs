use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmiError {
    #[error("Invalid parameter: {field} = {value} — {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown loan product: {0}")]
    UnknownProduct(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl EmiError {
    pub(crate) fn invalid(
        field: &str,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        EmiError::InvalidParameter {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field for parameter errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            EmiError::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for EmiError {
    fn from(e: serde_json::Error) -> Self {
        EmiError::SerializationError(e.to_string())
    }
}
