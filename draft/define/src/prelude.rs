//! Convenient re-exports for describing endpoints.
//!
//! ## Examples
//!
//! ```
//! use draft_define::prelude::*;
//!
//! let mut scheme = Scheme::new("/health");
//! scheme.method(Method::Get).consumes(MimeType::Json);
//! scheme.case(Status::OK, "up", |case| {
//!     case.body("ok");
//! });
//! ```

pub use crate::case::{Configure, Defaults, SchemeCase, SchemeCaseHeaders};
pub use crate::error::DraftError;
pub use crate::export::{ExportOptions, JsonCase, JsonScheme, JsonSchemeDetail};
pub use crate::scheme::Scheme;
pub use crate::types::{Access, Method, MimeType, Status};
pub use draft_reflect::{Item, Kind, NameConvention, Sample};
