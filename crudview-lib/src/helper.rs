//! The list helper: entry point for rendering list views.

use log::debug;
use log::trace;

use crate::model::Listable;
use crate::model::metadata::ModelMetadata;
use crate::query::Direction;
use crate::query::OrderBy;
use crate::query::SortMappings;
use crate::query::SortParams;
use crate::query::SortState;
use crate::table::Column;
use crate::table::RenderContext;
use crate::table::TableBuilder;
use crate::table::TableConfig;
use crate::table::render_table;

/// Renders sortable list tables for one model and one request.
///
/// Holds the model description, the request's sort parameters, the
/// model's [`SortMappings`] and the presentation settings. Rendering is
/// pure: the same inputs always give the same HTML.
///
/// # Example
///
/// ```
/// use crudview_lib::ListHelper;
/// use crudview_lib::model::Record;
/// use crudview_lib::model::metadata::AttributeType;
/// use crudview_lib::model::metadata::ModelMetadata;
/// use crudview_lib::query::SortParams;
///
/// let model = ModelMetadata::builder("city")
///     .path("/cities")
///     .attribute("id", AttributeType::Integer)
///     .attribute("name", AttributeType::String)
///     .build()
///     .unwrap();
///
/// let helper = ListHelper::new(&model)
///     .with_params(SortParams::from_query("sort=name&sort_dir=asc"));
///
/// let entries = vec![Record::with_id(1).set("name", "Bern")];
/// let html = helper.list_table(&entries, &[]);
///
/// assert!(html.contains(r#"<a href="/cities?sort=name&amp;sort_dir=desc">Name</a> &darr;"#));
/// assert!(html.contains("<td>Bern</td>"));
/// ```
#[derive(Debug, Clone)]
pub struct ListHelper<'h> {
    model: &'h ModelMetadata,
    params: SortParams,
    state: SortState,
    mappings: SortMappings,
    config: TableConfig,
}

impl<'h> ListHelper<'h> {
    /// Creates a helper for `model` with no sort parameters.
    pub fn new(model: &'h ModelMetadata) -> Self {
        Self {
            model,
            params: SortParams::default(),
            state: SortState::default(),
            mappings: SortMappings::default(),
            config: TableConfig::default(),
        }
    }

    /// Sets the request parameters.
    pub fn with_params(mut self, params: SortParams) -> Self {
        self.state = params.sort_state();
        self.params = params;
        self
    }

    /// Sets the sortable keys that aren't model attributes.
    pub fn with_sort_mappings(mut self, mappings: SortMappings) -> Self {
        self.mappings = mappings;
        self
    }

    /// Sets the presentation settings.
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the listed model.
    pub fn model(&self) -> &ModelMetadata {
        self.model
    }

    /// Returns the current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.state
    }

    /// Returns the attributes listed when no columns are given: every model
    /// attribute except the primary key.
    pub fn default_attrs(&self) -> Vec<&str> {
        self.model.default_attrs()
    }

    /// Returns `true` if `key` can be sorted by: a model attribute or a
    /// sort mapping.
    pub fn is_sortable(&self, key: &str) -> bool {
        self.context().is_sort_key(key)
    }

    /// Returns the ordering the data layer should apply for this request.
    ///
    /// Mapped keys order by their expression, attributes by their name.
    /// Only an explicit `desc` sorts descending. Ties are broken by the
    /// primary key in ascending order. Unknown keys give `None`.
    pub fn order_by(&self) -> Option<OrderBy> {
        let (key, direction) = self.requested_sort()?;
        let expression = self.mappings.get(key).unwrap_or(key);
        Some(self.with_tie_break(OrderBy::new(expression, direction), expression))
    }

    /// Orders entities in memory for this request.
    ///
    /// Attributes sort by their values. A mapped key whose expression is
    /// not itself an attribute sorts by the entities' value for the key.
    pub fn sort_entries<R: Listable>(&self, entries: &mut [R]) {
        let Some((key, direction)) = self.requested_sort() else {
            return;
        };
        let field = match self.mappings.get(key) {
            Some(expression) if self.model.has_attribute(expression) => expression,
            _ => key,
        };
        self.with_tie_break(OrderBy::new(field, direction), field)
            .sort_records(entries);
    }

    /// Returns the requested sort key if it is known, with its direction.
    fn requested_sort(&self) -> Option<(&str, Direction)> {
        let key = self.state.column.as_deref()?;
        if !self.is_sortable(key) {
            trace!("[list] ignoring unknown sort key '{}' for {}", key, self.model.name());
            return None;
        }
        Some((key, self.state.direction.unwrap_or(Direction::Asc)))
    }

    fn with_tie_break(&self, order: OrderBy, field: &str) -> OrderBy {
        let primary_key = self.model.primary_key();
        if field == primary_key {
            order
        } else {
            order.then_asc(primary_key)
        }
    }

    /// Renders a table with sortable columns for `attrs`, or for the
    /// [default attributes](Self::default_attrs) if `attrs` is empty.
    pub fn list_table<R: Listable>(&self, entries: &[R], attrs: &[&str]) -> String {
        let mut builder = TableBuilder::new(self.model);
        if attrs.is_empty() {
            builder.sortable_attrs(&self.default_attrs());
        } else {
            builder.sortable_attrs(attrs);
        }
        self.render(entries, &builder.into_columns())
    }

    /// Renders a table with sortable columns for `attrs` followed by the
    /// columns `build` adds.
    ///
    /// Empty `attrs` are not replaced by the default attributes here; the
    /// table then consists of the builder's columns only.
    pub fn list_table_with<'a, R, F>(&self, entries: &[R], attrs: &[&str], build: F) -> String
    where
        R: Listable,
        F: FnOnce(&mut TableBuilder<'h, 'a, R>),
    {
        let mut builder = TableBuilder::new(self.model);
        builder.sortable_attrs(attrs);
        build(&mut builder);
        self.render(entries, &builder.into_columns())
    }

    /// Renders a table from prepared columns.
    pub fn render<R: Listable>(&self, entries: &[R], columns: &[Column<'_, R>]) -> String {
        let ctx = self.context();

        if let Some(key) = self.state.column.as_deref() {
            if !columns.iter().any(|c| c.key() == key && ctx.links_header(c)) {
                trace!("[list] sort key '{}' matches no sortable column, ignored", key);
            }
        }

        debug!(
            "[list] {} entries of {}, sort: {:?}",
            entries.len(),
            self.model.name(),
            self.state
        );
        render_table(columns, entries, &ctx)
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext {
            model: self.model,
            params: &self.params,
            state: &self.state,
            mappings: &self.mappings,
            config: &self.config,
        }
    }
}
