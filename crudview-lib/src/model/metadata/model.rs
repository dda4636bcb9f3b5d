//! Model metadata and its builder

use super::AttributeMetadata;
use super::AttributeType;
use crate::error::MetadataError;

/// Describes a model: its name, route path, primary key and attributes.
///
/// This is the capability the table renderer uses in place of runtime
/// reflection. Attribute order is declaration order and determines the
/// default column order.
///
/// # Example
///
/// ```
/// use crudview_lib::model::metadata::AttributeType;
/// use crudview_lib::model::metadata::ModelMetadata;
///
/// let model = ModelMetadata::builder("person")
///     .attribute("id", AttributeType::Integer)
///     .attribute("name", AttributeType::String)
///     .attribute("created_at", AttributeType::DateTime)
///     .build()
///     .unwrap();
///
/// assert_eq!(model.path(), "/persons");
/// assert_eq!(model.default_attrs(), vec!["name", "created_at"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMetadata {
    name: String,
    path: String,
    primary_key: String,
    attributes: Vec<AttributeMetadata>,
}

impl ModelMetadata {
    /// Starts building metadata for the named model.
    pub fn builder(name: impl Into<String>) -> ModelMetadataBuilder {
        ModelMetadataBuilder::new(name)
    }

    /// Returns the model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the path of the model's list action, used as sort link target.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the primary key attribute name.
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// Returns all attributes in declaration order.
    pub fn attributes(&self) -> &[AttributeMetadata] {
        &self.attributes
    }

    /// Looks up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeMetadata> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Returns the type of the named attribute, if declared.
    pub fn attribute_type(&self, name: &str) -> Option<AttributeType> {
        self.attribute(name).map(|a| a.attribute_type)
    }

    /// Returns `true` if the model declares the attribute.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Returns every attribute name, primary key included.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }

    /// Returns all attribute names except the primary key.
    pub fn default_attrs(&self) -> Vec<&str> {
        self.column_names()
            .filter(|name| *name != self.primary_key)
            .collect()
    }
}

/// Builder for [`ModelMetadata`].
#[derive(Debug, Clone)]
pub struct ModelMetadataBuilder {
    name: String,
    path: Option<String>,
    primary_key: String,
    attributes: Vec<AttributeMetadata>,
}

impl ModelMetadataBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            primary_key: "id".to_string(),
            attributes: Vec::new(),
        }
    }

    /// Sets the list path. Defaults to `/<name>s`.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the primary key attribute. Defaults to `id`.
    pub fn primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = primary_key.into();
        self
    }

    /// Declares an attribute.
    pub fn attribute(self, name: impl Into<String>, attribute_type: AttributeType) -> Self {
        self.attribute_with(AttributeMetadata::new(name, attribute_type))
    }

    /// Declares an attribute from full metadata.
    pub fn attribute_with(mut self, attribute: AttributeMetadata) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Validates and builds the metadata.
    pub fn build(self) -> Result<ModelMetadata, MetadataError> {
        if self.name.is_empty() || self.attributes.iter().any(|a| a.name.is_empty()) {
            return Err(MetadataError::EmptyName { model: self.name });
        }

        for (i, attribute) in self.attributes.iter().enumerate() {
            if self.attributes[..i].iter().any(|a| a.name == attribute.name) {
                return Err(MetadataError::DuplicateAttribute {
                    model: self.name,
                    attribute: attribute.name.clone(),
                });
            }
        }

        if !self.attributes.iter().any(|a| a.name == self.primary_key) {
            return Err(MetadataError::MissingPrimaryKey {
                model: self.name,
                primary_key: self.primary_key,
            });
        }

        let path = self.path.unwrap_or_else(|| format!("/{}s", self.name));

        Ok(ModelMetadata {
            name: self.name,
            path,
            primary_key: self.primary_key,
            attributes: self.attributes,
        })
    }
}
