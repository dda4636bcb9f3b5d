//! FieldError for record conversion

/// Error type for building a [`Record`](crate::model::Record) from raw input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The raw input has a different type than the field's declared one.
    #[error("Field '{field}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The raw input for the field could not be converted to its declared type.
    #[error("Field '{field}' has an invalid value: {message}")]
    Invalid { field: String, message: String },
}

impl FieldError {
    /// Creates a new type mismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates a new invalid value error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::TypeMismatch { field, .. } | Self::Invalid { field, .. } => field,
        }
    }
}
