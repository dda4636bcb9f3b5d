//! The capability an entity needs to be listed

use super::Value;

/// Read access to an entity's attributes by name.
///
/// The table renderer never inspects entities any other way: every
/// attribute column reads its cell through [`attribute`](Listable::attribute)
/// and custom columns receive the entity itself.
///
/// # Example
///
/// ```
/// use crudview_lib::model::Listable;
/// use crudview_lib::model::Value;
///
/// struct City {
///     name: String,
///     population: i64,
/// }
///
/// impl Listable for City {
///     fn attribute(&self, name: &str) -> Value {
///         match name {
///             "name" => Value::from(self.name.as_str()),
///             "population" => Value::from(self.population),
///             _ => Value::Null,
///         }
///     }
/// }
///
/// let city = City { name: "Bern".into(), population: 134_000 };
/// assert_eq!(city.attribute("population"), Value::Long(134_000));
/// assert!(city.attribute("mayor").is_null());
/// ```
pub trait Listable {
    /// Returns the value of the named attribute, or [`Value::Null`] if the
    /// entity has no such attribute.
    fn attribute(&self, name: &str) -> Value;
}

impl<T: Listable + ?Sized> Listable for &T {
    fn attribute(&self, name: &str) -> Value {
        (**self).attribute(name)
    }
}
