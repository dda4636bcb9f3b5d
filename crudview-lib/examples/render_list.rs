//! Renders a small list table to stdout.
//!
//! Run with: cargo run --example render_list -- "sort=population&sort_dir=desc"
//!
//! Log output goes to render_list.log.

use std::env;
use std::fs::File;

use crudview_lib::ListHelper;
use crudview_lib::html::escape_html;
use crudview_lib::model::Listable;
use crudview_lib::model::Record;
use crudview_lib::model::metadata::AttributeType;
use crudview_lib::model::metadata::ModelMetadata;
use crudview_lib::query::SortMappings;
use crudview_lib::query::SortParams;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("render_list.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let query = env::args().nth(1).unwrap_or_default();

    let model = ModelMetadata::builder("city")
        .path("/cities")
        .attribute("id", AttributeType::Integer)
        .attribute("name", AttributeType::String)
        .attribute("population", AttributeType::Integer)
        .attribute("founded", AttributeType::Date)
        .build()?;

    let rows = serde_json::json!([
        { "id": 1, "name": "Bern", "population": 134794, "founded": "1191-01-01" },
        { "id": 2, "name": "Basel", "population": 177595, "founded": null },
        { "id": 3, "name": "Chur", "population": 37404, "founded": "1500-06-15" },
    ]);
    let mut entries = Vec::new();
    for row in rows.as_array().into_iter().flatten() {
        let mut record = Record::from_json(&model, row)?;
        let name_length = record.attribute("name").to_string().chars().count() as i64;
        record.insert("name_length", name_length);
        entries.push(record);
    }

    let helper = ListHelper::new(&model)
        .with_params(SortParams::from_query(&query))
        .with_sort_mappings(SortMappings::new().with("name_length", "length(name)"));

    helper.sort_entries(&mut entries);

    let html = helper.list_table_with(&entries, &["name", "name_length", "population", "founded"], |t| {
        t.col("Initial", |e| {
            let name = e.attribute("name").to_string();
            name.chars().next().map(|c| escape_html(&c.to_string())).unwrap_or_default()
        })
        .action_col("Show", |e| format!("/cities/{}", e.id().unwrap_or_default()));
    });

    println!("{}", html);
    Ok(())
}
