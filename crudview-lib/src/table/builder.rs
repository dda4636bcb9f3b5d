//! Column builder

use log::debug;

use super::Column;
use crate::html::captionize;
use crate::html::escape_html;
use crate::html::link_to;
use crate::model::Listable;
use crate::model::metadata::ModelMetadata;

/// Collects the columns of a list table.
///
/// Handed by `&mut` to the closure of
/// [`ListHelper::list_table_with`](crate::ListHelper::list_table_with);
/// columns appear in the order they are added.
///
/// # Example
///
/// ```
/// use crudview_lib::html::content_tag;
/// use crudview_lib::model::Listable;
/// use crudview_lib::model::Record;
/// use crudview_lib::model::metadata::AttributeType;
/// use crudview_lib::model::metadata::ModelMetadata;
/// use crudview_lib::table::TableBuilder;
///
/// let model = ModelMetadata::builder("person")
///     .attribute("id", AttributeType::Integer)
///     .attribute("name", AttributeType::String)
///     .attribute("income", AttributeType::Decimal)
///     .build()
///     .unwrap();
///
/// let mut builder = TableBuilder::<Record>::new(&model);
/// builder
///     .sortable_attrs(&["name"])
///     .col("head", |e| content_tag("span", &e.attribute("income").to_string()));
///
/// let columns = builder.into_columns();
/// assert_eq!(columns.len(), 2);
/// assert!(columns[0].is_sortable());
/// assert!(!columns[1].is_sortable());
/// ```
pub struct TableBuilder<'m, 'a, R> {
    model: &'m ModelMetadata,
    columns: Vec<Column<'a, R>>,
}

impl<'m, 'a, R: Listable> TableBuilder<'m, 'a, R> {
    /// Creates an empty builder for entities of `model`.
    pub fn new(model: &'m ModelMetadata) -> Self {
        Self {
            model,
            columns: Vec::new(),
        }
    }

    /// Appends plain attribute columns without sort links.
    pub fn attrs(&mut self, keys: &[&str]) -> &mut Self {
        self.push_attrs(keys, false)
    }

    /// Appends attribute columns with sort links where the key is sortable.
    pub fn sortable_attrs(&mut self, keys: &[&str]) -> &mut Self {
        self.push_attrs(keys, true)
    }

    /// Appends a custom column. `render` returns the cell's HTML.
    pub fn col<F>(&mut self, label: impl Into<String>, render: F) -> &mut Self
    where
        F: Fn(&R) -> String + 'a,
    {
        self.columns.push(Column::custom(label, render));
        self
    }

    /// Appends a column with an untitled header holding one link per entry.
    ///
    /// `href` computes the link target for an entry, typically its show or
    /// edit path.
    pub fn action_col<F>(&mut self, link_label: impl Into<String>, href: F) -> &mut Self
    where
        F: Fn(&R) -> String + 'a,
    {
        let link_label = escape_html(&link_label.into());
        self.columns
            .push(Column::custom("", move |entry: &R| link_to(&link_label, &href(entry))));
        self
    }

    /// Appends an already built column.
    pub fn push(&mut self, column: Column<'a, R>) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// Returns the columns collected so far.
    pub fn columns(&self) -> &[Column<'a, R>] {
        &self.columns
    }

    /// Finishes building.
    pub fn into_columns(self) -> Vec<Column<'a, R>> {
        debug!(
            "[table] {} columns for {}: {:?}",
            self.columns.len(),
            self.model.name(),
            self.columns.iter().map(Column::key).collect::<Vec<_>>()
        );
        self.columns
    }

    fn push_attrs(&mut self, keys: &[&str], sortable: bool) -> &mut Self {
        for key in keys {
            let label = self
                .model
                .attribute(key)
                .and_then(|a| a.display_name.clone())
                .unwrap_or_else(|| captionize(key));
            self.columns.push(Column::attribute(*key, label, sortable));
        }
        self
    }
}
