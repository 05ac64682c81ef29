//! Mock synthesis.
//!
//! A mock is a value rebuilt from a catalogue rather than copied from the
//! caller's example: keys follow the catalogue's naming convention and arrays
//! hold a single representative element.

use serde_json::{Map, Value};

use crate::item::{Item, Kind};

/// Builds a representative value matching the shape of `item`.
///
/// Scalars use their recorded example, falling back to
/// [`Kind::placeholder`] for hand-built descriptors without one.
///
/// ## Examples
///
/// ```
/// use draft_reflect::{get, mock, Options, Sample};
/// use serde_json::json;
///
/// let sample = Sample::capture(&json!({ "Tags": ["a", "b", "c"], "Count": 3 })).unwrap();
/// let item = get(&sample, &Options::snake_case()).unwrap();
///
/// assert_eq!(mock(&item), json!({ "count": 3, "tags": ["a"] }));
/// ```
pub fn mock(item: &Item) -> Value {
    match item.kind {
        Kind::Object => Value::Object(
            item.nested
                .iter()
                .map(|field| (field.name.clone(), mock(field)))
                .collect::<Map<_, _>>(),
        ),
        Kind::Array => Value::Array(item.element().map(mock).into_iter().collect()),
        _ => item
            .example
            .clone()
            .unwrap_or_else(|| item.kind.placeholder()),
    }
}
