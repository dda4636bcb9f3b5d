//! Dynamic entity record

use std::collections::HashMap;

use super::Listable;
use super::Value;

/// A dynamic entity record.
///
/// Records hold attribute values as a `HashMap<String, Value>`, allowing
/// dynamic access to any attribute. Records are [`Listable`], so a slice of
/// them can be handed straight to the table renderer.
///
/// # Example
///
/// ```
/// use crudview_lib::model::Listable;
/// use crudview_lib::model::Record;
/// use crudview_lib::model::Value;
///
/// let record = Record::with_id(1)
///     .set("name", "AAAAA")
///     .set("children", 9i32);
///
/// assert_eq!(record.attribute("id"), Value::Long(1));
/// assert_eq!(record.attribute("children"), Value::Int(9));
/// assert!(record.attribute("whatever").is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// The integer primary key, if persisted.
    pub(crate) id: Option<i64>,

    /// The attribute values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new record with the given primary key.
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            fields: HashMap::new(),
        }
    }

    /// Returns the integer primary key, if set.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Sets the integer primary key.
    pub fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }
}

impl Listable for Record {
    /// Unknown fields read as null. Without an `id` field the integer
    /// primary key is reachable under the name `id`.
    fn attribute(&self, name: &str) -> Value {
        match self.fields.get(name) {
            Some(value) => value.clone(),
            None if name == "id" => Value::from(self.id),
            None => Value::Null,
        }
    }
}
