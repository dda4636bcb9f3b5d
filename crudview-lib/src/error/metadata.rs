//! Model metadata error types

/// Errors raised while assembling a [`ModelMetadata`](crate::model::metadata::ModelMetadata).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    /// The model or one of its attributes has an empty name.
    #[error("Model '{model}' has an attribute with an empty name")]
    EmptyName { model: String },

    /// The same attribute was declared twice.
    #[error("Attribute '{attribute}' declared twice on model '{model}'")]
    DuplicateAttribute { model: String, attribute: String },

    /// The declared primary key is not among the model's attributes.
    #[error("Primary key '{primary_key}' is not an attribute of model '{model}'")]
    MissingPrimaryKey { model: String, primary_key: String },
}
