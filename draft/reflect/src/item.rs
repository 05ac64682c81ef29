//! Field descriptors.
//!
//! An [`Item`] describes one named value found in an example: its JSON
//! [`Kind`], a sample of the value when it is a scalar, and the descriptors
//! of anything nested inside it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

/// Name given to the element descriptor of an array.
pub const ELEMENT_NAME: &str = "[]";

/// The JSON shape of a described value.
///
/// ## Examples
///
/// ```
/// use draft_reflect::Kind;
/// use serde_json::json;
///
/// assert_eq!(Kind::of(&json!(1)), Kind::Integer);
/// assert_eq!(Kind::of(&json!(1.5)), Kind::Number);
/// assert_eq!(Kind::of(&json!({"a": 1})), Kind::Object);
/// assert_eq!(Kind::Integer.to_string(), "integer");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Classifies a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// A neutral value of this kind, used when no example was recorded.
    pub fn placeholder(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Boolean => Value::Bool(false),
            Self::Integer => Value::from(0),
            Self::Number => Value::from(0.0),
            Self::String => Value::String(String::new()),
            Self::Array => Value::Array(Vec::new()),
            Self::Object => Value::Object(serde_json::Map::new()),
        }
    }
}

/// A named field descriptor.
///
/// Objects list their fields in `nested`; arrays carry a single element
/// descriptor named [`ELEMENT_NAME`] describing every element seen.
///
/// ## Examples
///
/// ```
/// use draft_reflect::{Item, Kind};
/// use serde_json::json;
///
/// let user = Item::new("user", Kind::Object).with_nested(vec![
///     Item::new("id", Kind::Integer).with_example(json!(1)),
///     Item::new("name", Kind::String),
/// ]);
///
/// assert_eq!(user.field("id").map(|f| f.kind), Some(Kind::Integer));
/// assert!(user.field("email").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Field name after the naming convention was applied.
    pub name: String,
    /// JSON shape of the field.
    #[serde(rename = "type")]
    pub kind: Kind,
    /// Sample value for scalar fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Descriptors of object fields or of the array element.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<Item>,
}

impl Item {
    /// Creates a descriptor with no example and no children.
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            example: None,
            nested: Vec::new(),
        }
    }

    /// Sets the sample value.
    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    /// Sets the nested descriptors.
    pub fn with_nested(mut self, nested: Vec<Item>) -> Self {
        self.nested = nested;
        self
    }

    /// Looks up a direct child by name.
    pub fn field(&self, name: &str) -> Option<&Item> {
        self.nested.iter().find(|f| f.name == name)
    }

    /// Returns the element descriptor of an array, if any element was seen.
    pub fn element(&self) -> Option<&Item> {
        match self.kind {
            Kind::Array => self.nested.first(),
            _ => None,
        }
    }

    /// Inserts `field` among the children, replacing a same-named child in place.
    pub fn upsert(&mut self, field: Item) {
        match self.nested.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.nested.push(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_of_classifies_every_json_shape() {
        assert_eq!(Kind::of(&Value::Null), Kind::Null);
        assert_eq!(Kind::of(&json!(true)), Kind::Boolean);
        assert_eq!(Kind::of(&json!(-3)), Kind::Integer);
        assert_eq!(Kind::of(&json!(u64::MAX)), Kind::Integer);
        assert_eq!(Kind::of(&json!(0.25)), Kind::Number);
        assert_eq!(Kind::of(&json!("x")), Kind::String);
        assert_eq!(Kind::of(&json!([])), Kind::Array);
        assert_eq!(Kind::of(&json!({})), Kind::Object);
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut item = Item::new("", Kind::Object).with_nested(vec![
            Item::new("a", Kind::Integer),
            Item::new("b", Kind::Integer),
        ]);

        item.upsert(Item::new("a", Kind::String));
        item.upsert(Item::new("c", Kind::Boolean));

        let names: Vec<_> = item.nested.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(item.nested[0].kind, Kind::String);
    }

    #[test]
    fn element_only_for_arrays() {
        let array = Item::new("tags", Kind::Array)
            .with_nested(vec![Item::new(ELEMENT_NAME, Kind::String)]);
        assert_eq!(array.element().map(|e| e.kind), Some(Kind::String));

        let object = Item::new("user", Kind::Object)
            .with_nested(vec![Item::new("id", Kind::Integer)]);
        assert!(object.element().is_none());
    }

    #[test]
    fn serializes_kind_as_type_and_skips_empty_parts() {
        let item = Item::new("id", Kind::Integer).with_example(json!(1));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, json!({ "name": "id", "type": "integer", "example": 1 }));

        let bare = serde_json::to_value(Item::new("meta", Kind::Object)).unwrap();
        assert_eq!(bare, json!({ "name": "meta", "type": "object" }));
    }

    #[test]
    fn deserializes_without_optional_parts() {
        let item: Item = serde_json::from_value(json!({ "name": "n", "type": "string" })).unwrap();
        assert_eq!(item, Item::new("n", Kind::String));
    }
}
