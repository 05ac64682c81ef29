//! Error types for cataloguing example values.

use thiserror::Error;

/// Errors that can occur while turning a [`Sample`](crate::Sample) into a
/// field catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    /// The example value could not be serialized when it was captured.
    #[error("Example value could not be serialized: {message}")]
    Serialize {
        /// The serializer's error message.
        message: String,
    },
}

impl ReflectError {
    /// Creates a serialization error from any displayable cause.
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_error_message() {
        let err = ReflectError::serialize("key must be a string");
        assert_eq!(
            err.to_string(),
            "Example value could not be serialized: key must be a string"
        );
    }
}
