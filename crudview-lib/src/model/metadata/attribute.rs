//! Attribute metadata types

use serde::Deserialize;
use serde::Serialize;

/// Metadata for a model attribute (column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMetadata {
    /// The attribute name (e.g., "name", "companion_id").
    pub name: String,

    /// The attribute type.
    pub attribute_type: AttributeType,

    /// Caption used in table headers. Derived from the name when absent.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl AttributeMetadata {
    /// Creates attribute metadata without a display name.
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attribute_type,
            display_name: None,
        }
    }

    /// Sets the caption shown in table headers.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

/// Attribute type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// Boolean (true/false).
    Boolean,
    /// Calendar date.
    Date,
    /// Date and time.
    DateTime,
    /// Decimal number.
    Decimal,
    /// Double-precision floating point.
    Float,
    /// Integer.
    Integer,
    /// Foreign key to another model.
    Lookup,
    /// Single-line text.
    String,
    /// Multi-line text.
    Text,
    /// Time of day.
    Time,
}

impl AttributeType {
    /// Returns the type name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Lookup => "lookup",
            Self::String => "string",
            Self::Text => "text",
            Self::Time => "time",
        }
    }
}
