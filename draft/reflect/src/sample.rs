//! Captured example values.

use serde::Serialize;
use serde_json::Value;

/// An example value captured from any [`Serialize`] type.
///
/// Capturing happens eagerly so a [`Sample`] can be stored, cloned and
/// catalogued later without keeping the original type around. A value that
/// fails to serialize is kept as [`Sample::Rejected`]; the failure is reported
/// when the sample is catalogued.
///
/// ## Examples
///
/// ```
/// use draft_reflect::Sample;
/// use serde_json::json;
///
/// let sample = Sample::capture(&json!({ "id": 1 }));
/// assert_eq!(sample.unwrap().value(), Some(&json!({ "id": 1 })));
///
/// // `None` (or anything serializing to null) means "no example"
/// assert!(Sample::capture(&None::<u32>).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    /// The serialized example.
    Value(Value),
    /// Serialization failed with this message.
    Rejected(String),
}

impl Sample {
    /// Captures `value`, returning `None` when it serializes to `null`.
    pub fn capture<T: Serialize + ?Sized>(value: &T) -> Option<Self> {
        match serde_json::to_value(value) {
            Ok(Value::Null) => None,
            Ok(value) => Some(Self::Value(value)),
            Err(err) => Some(Self::Rejected(err.to_string())),
        }
    }

    /// Returns the serialized value, or `None` for a rejected sample.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    /// Returns `true` if the value failed to serialize when captured.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
