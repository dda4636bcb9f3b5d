//! Formatting of attribute values and captions for display.

use std::fmt::Display;
use std::fmt::Write;

use super::escape_html;
use crate::model::Value;
use crate::model::metadata::AttributeType;
use crate::table::TableConfig;

/// Formats a value as HTML for a table cell.
///
/// `attribute_type` is the declared type of the attribute, if the model
/// declares it. Lookups print the raw key and text attributes are broken
/// into paragraphs; everything else is formatted by its value:
///
/// ```
/// use crudview_lib::html::format_value;
/// use crudview_lib::model::Value;
/// use crudview_lib::table::TableConfig;
///
/// let config = TableConfig::default();
/// assert_eq!(format_value(&Value::Long(1234567), None, &config), "1,234,567");
/// assert_eq!(format_value(&Value::Float(1.1), None, &config), "1.10");
/// assert_eq!(format_value(&Value::Bool(true), None, &config), "yes");
/// assert_eq!(format_value(&Value::Null, None, &config), "&nbsp;");
/// ```
pub fn format_value(value: &Value, attribute_type: Option<AttributeType>, config: &TableConfig) -> String {
    match (value, attribute_type) {
        (Value::Null, _) => config.empty_value.clone(),
        (Value::Int(n), Some(AttributeType::Lookup)) => n.to_string(),
        (Value::Long(n), Some(AttributeType::Lookup)) => n.to_string(),
        (Value::String(s), Some(AttributeType::Text)) => simple_format(s),
        (Value::String(s), _) => escape_html(s),
        (Value::Bool(true), _) => escape_html(&config.true_label),
        (Value::Bool(false), _) => escape_html(&config.false_label),
        (Value::Int(n), _) => number_with_delimiter(&n.to_string(), config),
        (Value::Long(n), _) => number_with_delimiter(&n.to_string(), config),
        (Value::Float(n), _) => {
            number_with_delimiter(&format!("{:.*}", config.precision, n), config)
        }
        (Value::Decimal(d), _) => {
            number_with_delimiter(&format!("{:.*}", config.precision, d), config)
        }
        (Value::Date(d), _) => format_temporal(d.format(&config.date_format), d),
        (Value::Time(t), _) => format_temporal(t.format(&config.time_format), t),
        (Value::DateTime(dt), _) => format_temporal(dt.format(&config.datetime_format), dt),
    }
}

/// Returns the CSS alignment class of a table cell holding `value`.
pub fn align_class(value: &Value) -> Option<&'static str> {
    if value.is_numeric() {
        Some("right_align")
    } else if value.is_temporal() {
        Some("center_align")
    } else {
        None
    }
}

/// Turns an attribute name into a header caption.
///
/// A trailing `_id` is dropped and every word is capitalized:
/// `companion_id` becomes `Companion`, `gets_up_at` becomes `Gets Up At`.
pub fn captionize(key: &str) -> String {
    let base = key.strip_suffix("_id").filter(|s| !s.is_empty()).unwrap_or(key);
    base.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escapes text and converts it into paragraphs.
///
/// Blank lines separate `<p>` elements, single line breaks become `<br />`.
pub fn simple_format(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    text.split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| {
            let lines: Vec<_> = paragraph.lines().map(escape_html).collect();
            format!("<p>{}</p>", lines.join("<br />"))
        })
        .collect()
}

/// Inserts the configured thousands delimiter into a formatted number and
/// swaps in the configured decimal separator.
pub fn number_with_delimiter(number: &str, config: &TableConfig) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push_str(&config.delimiter);
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}{}{}", sign, grouped, config.separator, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

// An invalid chrono format string fails at display time; fall back to the
// value's default representation instead of panicking.
fn format_temporal(formatted: impl Display, fallback: &impl Display) -> String {
    let mut out = String::new();
    if write!(out, "{}", formatted).is_err() {
        out = fallback.to_string();
    }
    escape_html(&out)
}
