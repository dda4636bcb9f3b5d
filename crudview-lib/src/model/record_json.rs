//! Conversion of JSON objects into typed records.
//!
//! Data layers usually hand rows over as JSON. The model's attribute types
//! decide how each JSON value is read:
//! - numbers, booleans and strings map onto the matching [`Value`] variant
//! - dates (`2010-01-01`), times (`08:30`, `08:30:00`) and RFC 3339
//!   datetimes arrive as strings
//! - decimals may arrive as strings or numbers
//! - the primary key is kept as a field; integer keys also become the
//!   record id
//!
//! Keys the model doesn't declare are kept with an inferred type, so
//! computed values can be listed as well.

use std::str::FromStr;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveTime;
use chrono::Utc;
use rust_decimal::Decimal;

use super::Record;
use super::Value;
use super::metadata::AttributeType;
use super::metadata::ModelMetadata;
use crate::error::FieldError;

impl Record {
    /// Builds a record of `model` from a JSON object.
    ///
    /// # Example
    ///
    /// ```
    /// use crudview_lib::model::Record;
    /// use crudview_lib::model::metadata::AttributeType;
    /// use crudview_lib::model::metadata::ModelMetadata;
    ///
    /// let model = ModelMetadata::builder("person")
    ///     .attribute("id", AttributeType::Integer)
    ///     .attribute("birthdate", AttributeType::Date)
    ///     .build()
    ///     .unwrap();
    ///
    /// let json = serde_json::json!({ "id": 3, "birthdate": "1930-03-03" });
    /// let record = Record::from_json(&model, &json).unwrap();
    /// assert_eq!(record.id(), Some(3));
    /// ```
    pub fn from_json(model: &ModelMetadata, json: &serde_json::Value) -> Result<Record, FieldError> {
        let object = json
            .as_object()
            .ok_or_else(|| FieldError::invalid(model.name(), "expected a JSON object"))?;

        let mut record = Record::new();

        for (key, raw) in object {
            let value = match model.attribute_type(key) {
                Some(attribute_type) => typed_value(key, raw, attribute_type)?,
                None => inferred_value(key, raw)?,
            };
            if let Some(id) = raw.as_i64().filter(|_| key == model.primary_key()) {
                record.set_id(id);
            }
            record.insert(key.clone(), value);
        }

        Ok(record)
    }
}

fn typed_value(
    field: &str,
    raw: &serde_json::Value,
    attribute_type: AttributeType,
) -> Result<Value, FieldError> {
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let mismatch = || FieldError::type_mismatch(field, attribute_type.name(), json_type_name(raw));

    match attribute_type {
        AttributeType::Boolean => raw.as_bool().map(Value::Bool).ok_or_else(mismatch),
        AttributeType::Integer | AttributeType::Lookup => {
            let n = raw.as_i64().ok_or_else(mismatch)?;
            Ok(match i32::try_from(n) {
                Ok(small) => Value::Int(small),
                Err(_) => Value::Long(n),
            })
        }
        AttributeType::Float => raw.as_f64().map(Value::Float).ok_or_else(mismatch),
        AttributeType::Decimal => {
            let text = match raw {
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::String(s) => s.clone(),
                _ => return Err(mismatch()),
            };
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map(Value::Decimal)
                .map_err(|e| FieldError::invalid(field, e.to_string()))
        }
        AttributeType::String | AttributeType::Text => raw
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(mismatch),
        AttributeType::Date => {
            let text = raw.as_str().ok_or_else(mismatch)?;
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(Value::Date)
                .map_err(|e| FieldError::invalid(field, e.to_string()))
        }
        AttributeType::Time => {
            let text = raw.as_str().ok_or_else(mismatch)?;
            NaiveTime::parse_from_str(text, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
                .map(Value::Time)
                .map_err(|e| FieldError::invalid(field, e.to_string()))
        }
        AttributeType::DateTime => {
            let text = raw.as_str().ok_or_else(mismatch)?;
            DateTime::parse_from_rfc3339(text)
                .map(|dt| Value::DateTime(dt.with_timezone(&Utc)))
                .map_err(|e| FieldError::invalid(field, e.to_string()))
        }
    }
}

fn inferred_value(field: &str, raw: &serde_json::Value) -> Result<Value, FieldError> {
    match raw {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(Value::Long(i)),
            None => n
                .as_f64()
                .map(Value::Float)
                .ok_or_else(|| FieldError::invalid(field, "number out of range")),
        },
        serde_json::Value::String(s) => Ok(Value::String(s.clone())),
        other => Err(FieldError::type_mismatch(field, "scalar", json_type_name(other))),
    }
}

fn json_type_name(raw: &serde_json::Value) -> &'static str {
    match raw {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Listable;

    fn model() -> ModelMetadata {
        ModelMetadata::builder("crud_test_model")
            .attribute("id", AttributeType::Integer)
            .attribute("name", AttributeType::String)
            .attribute("income", AttributeType::Decimal)
            .attribute("gets_up_at", AttributeType::Time)
            .attribute("last_seen", AttributeType::DateTime)
            .attribute("human", AttributeType::Boolean)
            .build()
            .unwrap()
    }

    #[test]
    fn test_typed_conversion() {
        let record = Record::from_json(
            &model(),
            &json!({
                "id": 1,
                "name": "AAAAA",
                "income": "10000000.1111",
                "gets_up_at": "01:01",
                "last_seen": "2010-01-01T02:21:00Z",
                "human": false,
            }),
        )
        .unwrap();

        assert_eq!(record.id(), Some(1));
        assert_eq!(record.attribute("id"), Value::Int(1));
        assert_eq!(record.get("income"), Some(&Value::Decimal(Decimal::new(100000001111, 4))));
        assert_eq!(
            record.get("gets_up_at"),
            Some(&Value::Time(NaiveTime::from_hms_opt(1, 1, 0).unwrap()))
        );
        assert_eq!(record.attribute("human"), Value::Bool(false));
        assert!(record.attribute("last_seen").is_temporal());
    }

    #[test]
    fn test_unknown_keys_are_inferred() {
        let record = Record::from_json(&model(), &json!({ "chatty": 18, "mood": "ok" })).unwrap();
        assert_eq!(record.get("chatty"), Some(&Value::Long(18)));
        assert_eq!(record.get("mood"), Some(&Value::from("ok")));
    }

    #[test]
    fn test_string_primary_key_is_a_field() {
        let model = ModelMetadata::builder("tag")
            .primary_key("slug")
            .attribute("slug", AttributeType::String)
            .attribute("label", AttributeType::String)
            .build()
            .unwrap();
        let record = Record::from_json(&model, &json!({ "slug": "rust", "label": "Rust" })).unwrap();
        assert_eq!(record.id(), None);
        assert_eq!(record.attribute("slug"), Value::from("rust"));
    }

    #[test]
    fn test_integer_primary_key_under_custom_name() {
        let model = ModelMetadata::builder("city")
            .primary_key("code")
            .attribute("code", AttributeType::Integer)
            .build()
            .unwrap();
        let record = Record::from_json(&model, &json!({ "code": 42 })).unwrap();
        assert_eq!(record.id(), Some(42));
        assert_eq!(record.attribute("code"), Value::Int(42));
    }

    #[test]
    fn test_wrong_type_is_reported() {
        let err = Record::from_json(&model(), &json!({ "human": "yes" })).unwrap_err();
        assert_eq!(err, FieldError::type_mismatch("human", "boolean", "string"));
        assert_eq!(err.field(), "human");
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(Record::from_json(&model(), &json!([1, 2])).is_err());
    }
}
