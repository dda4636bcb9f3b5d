//! Tag helpers.

use super::escape_html;

/// Wraps escaped `text` in a tag: `content_tag("span", "a<b")` gives
/// `<span>a&lt;b</span>`.
pub fn content_tag(name: &str, text: &str) -> String {
    format!("<{name}>{}</{name}>", escape_html(text))
}

/// Builds a tag with attributes around already rendered markup.
///
/// Attribute values are escaped, `inner_html` is inserted as is.
pub fn tag_with_attrs(name: &str, attrs: &[(&str, &str)], inner_html: &str) -> String {
    let mut out = format!("<{name}");
    for (key, value) in attrs {
        out.push_str(&format!(r#" {}="{}""#, key, escape_html(value)));
    }
    out.push('>');
    out.push_str(inner_html);
    out.push_str(&format!("</{name}>"));
    out
}

/// Builds a link around already rendered markup.
pub fn link_to(label_html: &str, href: &str) -> String {
    tag_with_attrs("a", &[("href", href)], label_html)
}
