//! Table rendering configuration

use serde::Deserialize;

/// Presentation settings for list tables.
///
/// Controls CSS classes, placeholder texts and how attribute values are
/// formatted. Every field has a default, so a partial JSON document is
/// enough to override single settings.
///
/// # Example
///
/// ```
/// use crudview_lib::table::TableConfig;
///
/// let config = TableConfig::default()
///     .with_empty_message("Nothing here yet.")
///     .with_precision(3);
///
/// let config: TableConfig = serde_json::from_str(r#"{ "delimiter": "'" }"#).unwrap();
/// assert_eq!(config.delimiter, "'");
/// assert_eq!(config.precision, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// CSS class of the `<table>` element and of the empty-list `<div>`.
    ///
    /// Default: `list`
    pub table_class: String,

    /// Text shown instead of a table when there are no entries.
    ///
    /// Default: `No entries found.`
    pub empty_message: String,

    /// Markup rendered for null values.
    ///
    /// Default: `&nbsp;`
    pub empty_value: String,

    /// Label for `true`.
    pub true_label: String,

    /// Label for `false`.
    pub false_label: String,

    /// Thousands delimiter for numbers.
    ///
    /// Default: `,`
    pub delimiter: String,

    /// Decimal separator for floats and decimals.
    ///
    /// Default: `.`
    pub separator: String,

    /// Number of fraction digits for floats and decimals.
    ///
    /// Default: 2
    pub precision: usize,

    /// `chrono` format for dates.
    pub date_format: String,

    /// `chrono` format for times of day.
    pub time_format: String,

    /// `chrono` format for datetimes.
    pub datetime_format: String,

    /// Glyph appended to the header of a column sorted ascending.
    pub asc_arrow: String,

    /// Glyph appended to the header of a column sorted descending.
    pub desc_arrow: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_class: "list".to_string(),
            empty_message: "No entries found.".to_string(),
            empty_value: "&nbsp;".to_string(),
            true_label: "yes".to_string(),
            false_label: "no".to_string(),
            delimiter: ",".to_string(),
            separator: ".".to_string(),
            precision: 2,
            date_format: "%Y-%m-%d".to_string(),
            time_format: "%H:%M".to_string(),
            datetime_format: "%Y-%m-%d %H:%M".to_string(),
            asc_arrow: "&darr;".to_string(),
            desc_arrow: "&uarr;".to_string(),
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table CSS class.
    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = class.into();
        self
    }

    /// Sets the empty-list message.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the boolean labels.
    pub fn with_bool_labels(mut self, true_label: impl Into<String>, false_label: impl Into<String>) -> Self {
        self.true_label = true_label.into();
        self.false_label = false_label.into();
        self
    }

    /// Sets the thousands delimiter and decimal separator.
    pub fn with_number_format(mut self, delimiter: impl Into<String>, separator: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self.separator = separator.into();
        self
    }

    /// Sets the fraction digits for floats and decimals.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the date, time and datetime formats.
    pub fn with_date_formats(
        mut self,
        date: impl Into<String>,
        time: impl Into<String>,
        datetime: impl Into<String>,
    ) -> Self {
        self.date_format = date.into();
        self.time_format = time.into();
        self.datetime_format = datetime.into();
        self
    }
}
