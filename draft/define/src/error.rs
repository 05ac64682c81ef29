//! Error types for exporting schemes.

use draft_reflect::ReflectError;
use thiserror::Error;

/// Errors that can occur while exporting a [`Scheme`](crate::Scheme).
#[derive(Debug, Error)]
pub enum DraftError {
    /// An example value could not be catalogued.
    ///
    /// The reflection error is passed through unchanged.
    #[error(transparent)]
    Reflect(#[from] ReflectError),

    /// The exported document could not be encoded as JSON.
    #[error("Failed to encode scheme document: {0}")]
    Encode(#[from] serde_json::Error),
}
