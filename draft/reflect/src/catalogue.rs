//! Building field catalogues from samples.
//!
//! [`get`] walks a captured example and returns a root [`Item`] (named `""`)
//! whose `nested` descriptors are the fields found in the example. Arrays are
//! summarised by one element descriptor: the union of every element's shape.
//!
//! Any serialized value can be catalogued:
//! - keys that convert to the same name collapse into one field, the later
//!   key (in map order) replacing the earlier one;
//! - arrays and objects at `options.max_depth` keep their kind but are not
//!   descended into.

use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::error::ReflectError;
use crate::item::{ELEMENT_NAME, Item, Kind};
use crate::options::Options;
use crate::sample::Sample;

/// Catalogues `sample` into a descriptor tree.
///
/// ## Errors
///
/// Returns [`ReflectError::Serialize`] if the sample was rejected when captured.
///
/// ## Examples
///
/// ```
/// use draft_reflect::{get, Kind, Options, Sample};
/// use serde_json::json;
///
/// let sample = Sample::capture(&json!({ "tags": ["a", "b"] })).unwrap();
/// let root = get(&sample, &Options::default()).unwrap();
///
/// let tags = root.field("tags").unwrap();
/// assert_eq!(tags.kind, Kind::Array);
/// assert_eq!(tags.element().map(|e| e.kind), Some(Kind::String));
/// ```
pub fn get(sample: &Sample, options: &Options) -> Result<Item, ReflectError> {
    match sample {
        Sample::Value(value) => Ok(Walker { options }.describe(String::new(), value, 0)),
        Sample::Rejected(message) => {
            warn!(%message, "cannot catalogue a rejected example");
            Err(ReflectError::serialize(message.clone()))
        }
    }
}

struct Walker<'a> {
    options: &'a Options,
}

impl Walker<'_> {
    fn describe(&self, name: String, value: &Value, depth: usize) -> Item {
        let item = Item::new(name, Kind::of(value));
        match value {
            Value::Null => item,
            Value::Object(_) | Value::Array(_) if depth >= self.options.max_depth => {
                trace!(field = %item.name, depth, "depth limit reached, shape truncated");
                item
            }
            Value::Object(fields) => item.with_nested(self.fields(fields, depth)),
            Value::Array(elements) => item.with_nested(self.element(elements, depth)),
            scalar => item.with_example(scalar.clone()),
        }
    }

    fn fields(&self, fields: &Map<String, Value>, depth: usize) -> Vec<Item> {
        let mut parent = Item::new("", Kind::Object);
        for (key, value) in fields {
            let name = self.options.naming.apply(key);
            parent.upsert(self.describe(name, value, depth + 1));
        }
        parent.nested
    }

    fn element(&self, elements: &[Value], depth: usize) -> Vec<Item> {
        elements
            .iter()
            .map(|value| self.describe(ELEMENT_NAME.to_string(), value, depth + 1))
            .reduce(merge_shapes)
            .into_iter()
            .collect()
    }
}

/// Folds `other` into `into`.
///
/// The first non-null kind wins. Objects take the union of their fields,
/// later same-named fields replacing earlier ones; scalars keep the first example.
fn merge_shapes(mut into: Item, other: Item) -> Item {
    if into.kind == Kind::Null {
        return Item {
            name: into.name,
            ..other
        };
    }
    if other.kind != into.kind {
        return into;
    }

    match into.kind {
        Kind::Object => {
            for field in other.nested {
                into.upsert(field);
            }
        }
        Kind::Array => {
            let mine = into.nested.pop();
            let theirs = other.nested.into_iter().next();
            into.nested = match (mine, theirs) {
                (Some(a), Some(b)) => vec![merge_shapes(a, b)],
                (a, b) => a.or(b).into_iter().collect(),
            };
        }
        _ => {}
    }

    into
}
