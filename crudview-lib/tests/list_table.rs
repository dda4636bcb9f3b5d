//! Tests for rendering list tables of the `crud_test_model` fixture.

mod common;

use crudview_lib::html::content_tag;
use crudview_lib::model::Listable;
use crudview_lib::model::Record;
use regex::Regex;

const ROWS: &str = r"(?s)<tr.+?</tr>";
const HEADERS: &str = r"(?s)<th.+?</th>";
const SORT_HEADERS: &str = r"(?s)<th><a .*?sort_dir=asc.*?>.*?</a></th>";

fn count(pattern: &str, html: &str) -> usize {
    Regex::new(pattern).unwrap().find_iter(html).count()
}

fn income_span(e: &Record) -> String {
    content_tag("span", &e.attribute("income").to_string())
}

// ============================================================================
// Default columns
// ============================================================================

#[test]
fn test_default_has_7_rows() {
    let model = common::model();
    let html = common::helper(&model, "").list_table(&common::entries(), &[]);
    assert_eq!(count(ROWS, &html), 7);
}

#[test]
fn test_default_has_13_sortable_headers() {
    let model = common::model();
    let html = common::helper(&model, "").list_table(&common::entries(), &[]);
    assert_eq!(count(HEADERS, &html), 13);
    assert_eq!(count(SORT_HEADERS, &html), 13);
}

#[test]
fn test_default_attrs_skip_id() {
    let model = common::model();
    let helper = common::helper(&model, "");
    assert_eq!(
        helper.default_attrs(),
        vec![
            "name",
            "whatever",
            "children",
            "companion_id",
            "rating",
            "income",
            "birthdate",
            "gets_up_at",
            "last_seen",
            "human",
            "remarks",
            "created_at",
            "updated_at",
        ]
    );
}

// ============================================================================
// Explicit attributes and builder columns
// ============================================================================

#[test]
fn test_custom_attributes() {
    let model = common::model();
    let html = common::helper(&model, "").list_table(&common::entries(), &["name", "children", "companion_id"]);
    assert_eq!(count(ROWS, &html), 7);
    assert_eq!(count(SORT_HEADERS, &html), 3);
}

#[test]
fn test_custom_block() {
    let model = common::model();
    let html = common::helper(&model, "").list_table_with(&common::entries(), &[], |t| {
        t.attrs(&["name", "children", "companion_id"]);
        t.col("head", income_span);
    });
    assert_eq!(count(ROWS, &html), 7);
    assert_eq!(count(HEADERS, &html), 4);
    assert_eq!(count(SORT_HEADERS, &html), 0);
    assert_eq!(count(r"<span>.+?</span>", &html), 6);
}

#[test]
fn test_custom_attributes_and_block() {
    let model = common::model();
    let html = common::helper(&model, "").list_table_with(
        &common::entries(),
        &["name", "children", "companion_id"],
        |t| {
            t.col("head", income_span);
        },
    );
    assert_eq!(count(ROWS, &html), 7);
    assert_eq!(count(HEADERS, &html), 4);
    assert_eq!(count(SORT_HEADERS, &html), 3);
    assert_eq!(count(r"<span>.+?</span>", &html), 6);
    assert!(html.contains("<td><span>10000000.1111</span></td>"));
}

#[test]
fn test_sortable_attrs_in_block() {
    let model = common::model();
    let html = common::helper(&model, "").list_table_with(&common::entries(), &[], |t| {
        t.sortable_attrs(&["name", "head"]).col("head", income_span);
    });
    // "head" is neither an attribute nor a sort mapping.
    assert_eq!(count(SORT_HEADERS, &html), 1);
    assert_eq!(count(HEADERS, &html), 3);
}

#[test]
fn test_empty_attrs_and_block_renders_only_custom_column() {
    let model = common::model();
    let html = common::helper(&model, "").list_table_with(&common::entries(), &[], |t| {
        t.col("head", income_span);
    });
    assert_eq!(count(HEADERS, &html), 1);
    assert_eq!(count(SORT_HEADERS, &html), 0);
}

// ============================================================================
// Sort parameters
// ============================================================================

#[test]
fn test_ascending_sort_params() {
    let model = common::model();
    let html = common::helper(&model, "sort=children&sort_dir=asc").list_table(&common::entries(), &[]);
    assert_eq!(count(SORT_HEADERS, &html), 12);
    assert_eq!(count(r"<th><a .*?sort_dir=desc.*?>Children</a> &darr;</th>", &html), 1);
}

#[test]
fn test_descending_sort_params() {
    let model = common::model();
    let html = common::helper(&model, "sort=children&sort_dir=desc").list_table(&common::entries(), &[]);
    assert_eq!(count(SORT_HEADERS, &html), 12);
    assert_eq!(count(r"<th><a .*?sort_dir=asc.*?>Children</a> &uarr;</th>", &html), 1);
    assert_eq!(count("&darr;", &html), 0);
}

#[test]
fn test_custom_column_sort_params() {
    let model = common::model();
    let html = common::helper(&model, "sort=chatty&sort_dir=asc")
        .list_table(&common::entries(), &["name", "children", "chatty"]);
    assert_eq!(count(SORT_HEADERS, &html), 2);
    assert_eq!(count(r"<th><a .*?sort_dir=desc.*?>Chatty</a> &darr;</th>", &html), 1);
}

#[test]
fn test_unmapped_key_without_attribute_is_plain() {
    let model = common::model();
    let helper = crudview_lib::ListHelper::new(&model);
    let html = helper.list_table(&common::entries(), &["name", "chatty"]);
    assert_eq!(count(SORT_HEADERS, &html), 1);
    assert!(html.contains("<th>Chatty</th>"));
}

#[test]
fn test_unknown_sort_key_is_ignored() {
    let model = common::model();
    let html = common::helper(&model, "sort=bogus&sort_dir=desc").list_table(&common::entries(), &[]);
    assert_eq!(count(SORT_HEADERS, &html), 13);
    assert_eq!(count("&uarr;|&darr;", &html), 0);
}

#[test]
fn test_sort_key_outside_active_columns_is_ignored() {
    let model = common::model();
    let html = common::helper(&model, "sort=rating&sort_dir=asc")
        .list_table(&common::entries(), &["name", "children"]);
    assert_eq!(count(SORT_HEADERS, &html), 2);
    assert_eq!(count("&darr;", &html), 0);
}

#[test]
fn test_sort_links_keep_other_params() {
    let model = common::model();
    let html = common::helper(&model, "q=AAA&sort=name&sort_dir=asc").list_table(&common::entries(), &["name"]);
    assert!(html.contains(
        r#"<th><a href="/crud_test_models?q=AAA&amp;sort=name&amp;sort_dir=desc">Name</a> &darr;</th>"#
    ));
}

// ============================================================================
// Rows and cells
// ============================================================================

#[test]
fn test_every_row_has_one_cell_per_column() {
    let model = common::model();
    let html = common::helper(&model, "").list_table(&common::entries(), &[]);
    let rows = Regex::new(ROWS).unwrap();
    let cells = Regex::new(r"(?s)<td.*?</td>").unwrap();
    let body: Vec<_> = rows.find_iter(&html).skip(1).collect();
    assert_eq!(body.len(), 6);
    for row in body {
        assert_eq!(cells.find_iter(row.as_str()).count(), 13);
    }
}

#[test]
fn test_cell_formatting() {
    let model = common::model();
    let html = common::helper(&model, "").list_table(&common::entries(), &[]);
    let first = html.lines().nth(2).unwrap();

    assert!(first.starts_with(r#"<tr class="even"><td>AAAAA</td><td>&nbsp;</td>"#));
    assert!(first.contains(r#"<td class="right_align">9</td>"#));
    assert!(first.contains(r#"<td class="right_align">1.10</td>"#));
    assert!(first.contains(r#"<td class="right_align">10,000,000.11</td>"#));
    assert!(first.contains(r#"<td class="center_align">1910-01-01</td>"#));
    assert!(first.contains(r#"<td class="center_align">01:01</td>"#));
    assert!(first.contains(r#"<td class="center_align">2010-01-01 02:21</td>"#));
    assert!(first.contains("<td>no</td>"));
    assert!(first.contains("<td><p>AAAAA BBBBB CCCCC<br />AAAAA BBBBB CCCCC</p></td>"));

    let second = html.lines().nth(3).unwrap();
    assert!(second.starts_with(r#"<tr class="odd">"#));
    assert!(second.contains(r#"<td class="right_align">1</td>"#));
    assert!(second.contains("<td>yes</td>"));
}

#[test]
fn test_sorted_entries_change_row_order() {
    let model = common::model();
    let helper = common::helper(&model, "sort=name&sort_dir=desc");
    let mut entries = common::entries();
    helper.sort_entries(&mut entries);
    let html = helper.list_table(&entries, &["name"]);
    let ffff = html.find("FFFFF").unwrap();
    let aaaa = html.find("<td>AAAAA").unwrap();
    assert!(ffff < aaaa);
}

#[test]
fn test_sorted_entries_by_mapped_key() {
    let model = common::model();
    let helper = common::helper(&model, "sort=chatty&sort_dir=desc");
    let mut entries = common::entries();
    helper.sort_entries(&mut entries);

    let chatty: Vec<_> = entries.iter().map(|e| e.attribute("chatty").to_string()).collect();
    assert_eq!(chatty, vec!["54", "54", "36", "36", "18", "18"]);
    let ids: Vec<_> = entries.iter().filter_map(Record::id).collect();
    assert_eq!(ids, vec![2, 5, 1, 4, 3, 6]);
}

#[test]
fn test_action_column() {
    let model = common::model();
    let html = common::helper(&model, "").list_table_with(&common::entries(), &["name"], |t| {
        t.action_col("Edit", |e| format!("/crud_test_models/{}/edit", e.id().unwrap_or_default()));
    });
    assert_eq!(count(HEADERS, &html), 2);
    assert!(html.contains(r#"<td><a href="/crud_test_models/3/edit">Edit</a></td>"#));
}

#[test]
fn test_empty_list() {
    let model = common::model();
    let html = common::helper(&model, "").list_table(&Vec::<Record>::new(), &[]);
    assert_eq!(html, r#"<div class="list">No entries found.</div>"#);
    assert_eq!(count(ROWS, &html), 0);
}

#[test]
fn test_rendering_is_idempotent() {
    let model = common::model();
    let helper = common::helper(&model, "sort=children&sort_dir=desc");
    let entries = common::entries();
    let first = helper.list_table_with(&entries, &["name", "children"], |t| {
        t.col("head", income_span);
    });
    let second = helper.list_table_with(&entries, &["name", "children"], |t| {
        t.col("head", income_span);
    });
    assert_eq!(first, second);
}
