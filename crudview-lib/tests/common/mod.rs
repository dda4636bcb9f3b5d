//! Shared fixture: the `crud_test_model` model and its six entries.

#![allow(dead_code)]

use chrono::NaiveDate;
use chrono::NaiveTime;
use chrono::TimeZone;
use chrono::Utc;
use crudview_lib::ListHelper;
use crudview_lib::model::Record;
use crudview_lib::model::Value;
use crudview_lib::model::metadata::AttributeType;
use crudview_lib::model::metadata::ModelMetadata;
use crudview_lib::query::SortMappings;
use crudview_lib::query::SortParams;
use rust_decimal::Decimal;

pub fn model() -> ModelMetadata {
    ModelMetadata::builder("crud_test_model")
        .path("/crud_test_models")
        .attribute("id", AttributeType::Integer)
        .attribute("name", AttributeType::String)
        .attribute("whatever", AttributeType::String)
        .attribute("children", AttributeType::Integer)
        .attribute("companion_id", AttributeType::Lookup)
        .attribute("rating", AttributeType::Float)
        .attribute("income", AttributeType::Decimal)
        .attribute("birthdate", AttributeType::Date)
        .attribute("gets_up_at", AttributeType::Time)
        .attribute("last_seen", AttributeType::DateTime)
        .attribute("human", AttributeType::Boolean)
        .attribute("remarks", AttributeType::Text)
        .attribute("created_at", AttributeType::DateTime)
        .attribute("updated_at", AttributeType::DateTime)
        .build()
        .expect("fixture model is valid")
}

pub fn sort_mappings() -> SortMappings {
    SortMappings::new().with("chatty", "len(remarks)")
}

pub fn helper<'h>(model: &'h ModelMetadata, query: &str) -> ListHelper<'h> {
    ListHelper::new(model)
        .with_params(SortParams::from_query(query))
        .with_sort_mappings(sort_mappings())
}

/// Five copies of the index-th capital letter: 1 gives "AAAAA".
fn letters(index: u32) -> String {
    char::from_u32(64 + index)
        .map(|c| c.to_string().repeat(5))
        .unwrap_or_default()
}

fn entry(index: u32, companion: Option<i64>) -> Record {
    let i = index as i32;
    let remarks = format!("{} {} {}\n", letters(index), letters(index + 1), letters(index + 2))
        .repeat((index % 3 + 1) as usize);
    let chatty = remarks.len() as i64;
    let stamp = Utc.with_ymd_and_hms(2011, 5, 1, 12, 0, 0).single();

    Record::with_id(i64::from(index))
        .set("name", letters(index))
        .set("whatever", Value::Null)
        .set("children", 10 - i)
        .set("companion_id", companion)
        .set("rating", f64::from(i) + f64::from(i) / 10.0)
        .set("income", Decimal::new(100_000_000_000 * i64::from(index) + 1111 * i64::from(index), 4))
        .set("birthdate", NaiveDate::from_ymd_opt(1900 + 10 * i, index, index))
        .set("gets_up_at", NaiveTime::from_hms_opt(index, index, 0))
        .set(
            "last_seen",
            Utc.with_ymd_and_hms(2000 + 10 * i, index, index, 1 + index, 20 + index, 0)
                .single(),
        )
        .set("human", index % 2 == 0)
        .set("remarks", remarks)
        .set("chatty", chatty)
        .set("created_at", stamp)
        .set("updated_at", stamp)
}

pub fn entries() -> Vec<Record> {
    (1..=6)
        .map(|index| entry(index, if index > 1 { Some(i64::from(index) - 1) } else { None }))
        .collect()
}
