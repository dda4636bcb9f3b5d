//! Table columns

use crate::html::align_class;
use crate::html::format_value;
use crate::model::Listable;
use crate::model::metadata::ModelMetadata;
use crate::table::TableConfig;

type CellRenderer<'a, R> = Box<dyn Fn(&R) -> String + 'a>;

/// One column of a list table.
///
/// Attribute columns read their cells through [`Listable::attribute`] and
/// may be sortable. Custom columns render cells with a closure and are
/// never sortable.
pub struct Column<'a, R> {
    key: String,
    label: String,
    kind: ColumnKind<'a, R>,
}

enum ColumnKind<'a, R> {
    Attribute { sortable: bool },
    Custom(CellRenderer<'a, R>),
}

impl<'a, R: Listable> Column<'a, R> {
    /// Creates an attribute column.
    pub fn attribute(key: impl Into<String>, label: impl Into<String>, sortable: bool) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: ColumnKind::Attribute { sortable },
        }
    }

    /// Creates a custom column. `render` returns the cell's HTML.
    pub fn custom<F>(label: impl Into<String>, render: F) -> Self
    where
        F: Fn(&R) -> String + 'a,
    {
        let label = label.into();
        Self {
            key: label.clone(),
            label,
            kind: ColumnKind::Custom(Box::new(render)),
        }
    }

    /// Returns the attribute name, or the label for custom columns.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the header caption.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` for attribute columns.
    pub fn is_attribute(&self) -> bool {
        matches!(self.kind, ColumnKind::Attribute { .. })
    }

    /// Returns `true` if the column was declared sortable.
    ///
    /// Whether a sort link is rendered also depends on the key being a
    /// known sort key.
    pub fn is_sortable(&self) -> bool {
        matches!(self.kind, ColumnKind::Attribute { sortable: true })
    }

    /// Renders the `<td>` of this column for `entry`.
    pub fn render_cell(&self, entry: &R, model: &ModelMetadata, config: &TableConfig) -> String {
        match &self.kind {
            ColumnKind::Attribute { .. } => {
                let value = entry.attribute(&self.key);
                let content = format_value(&value, model.attribute_type(&self.key), config);
                match align_class(&value) {
                    Some(class) => format!(r#"<td class="{}">{}</td>"#, class, content),
                    None => format!("<td>{}</td>", content),
                }
            }
            ColumnKind::Custom(render) => format!("<td>{}</td>", render(entry)),
        }
    }
}

impl<R> std::fmt::Debug for Column<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            ColumnKind::Attribute { sortable: true } => "sortable attribute",
            ColumnKind::Attribute { sortable: false } => "attribute",
            ColumnKind::Custom(_) => "custom",
        };
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &kind)
            .finish()
    }
}
