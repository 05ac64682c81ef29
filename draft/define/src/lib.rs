//! Draft Definition Library
//!
//! This crate describes one HTTP endpoint declaratively — URL, access rule,
//! method, consumed media type, parameters, headers and body — and records
//! named, status-keyed *cases* that refine those defaults. A scheme exports
//! to a single JSON document that groups the cases by status and merges the
//! field catalogues inferred from their example values.
//!
//! ## Core Types
//!
//! - [`Scheme`] - Endpoint metadata, defaults and recorded cases
//! - [`SchemeCase`] - One named, status-tagged example
//! - [`Configure`] - Setters shared by scheme defaults and cases
//! - [`JsonScheme`] - The exported document
//! - [`Access`], [`Method`], [`MimeType`], [`Status`] - Closed value sets
//!
//! Field catalogues and mocks come from the `draft-reflect` crate.
//!
//! ## Examples
//!
//! ```
//! use draft_define::prelude::*;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let mut scheme = Scheme::new("/users");
//! scheme.method(Method::Get).access(Access::Public);
//!
//! scheme.case(Status::OK, "ok", |case| {
//!     case.body(User { id: 1, name: "a".into() });
//! });
//! scheme.case(Status::NOT_FOUND, "missing", |case| {
//!     case.access(Access::Admin);
//! });
//!
//! let doc = scheme.to_json().unwrap();
//! assert_eq!(doc.detail[&Status::OK].access, Access::Public);
//! assert!(doc.detail[&Status::OK].response.body.contains_key("id"));
//! assert!(doc.detail[&Status::OK].response.body.contains_key("name"));
//! assert_eq!(doc.detail[&Status::NOT_FOUND].access, Access::Admin);
//! assert_eq!(doc.cases.len(), 2);
//! ```
//!
//! ## Concurrency
//!
//! Defaults can only change through `&mut Scheme`. Recording a case only
//! needs `&Scheme`, commits are atomic appends, and no lock is held while a
//! case is being configured. [`Scheme::to_json`] works on a snapshot of the
//! recorded cases and leaves the scheme untouched.

pub mod case;
pub mod error;
pub mod export;
pub mod prelude;
pub mod scheme;
pub mod types;

pub use case::{Configure, Defaults, SchemeCase, SchemeCaseHeaders};
pub use error::DraftError;
pub use export::{
    Catalogue, ExportOptions, JsonCase, JsonCaseHeaders, JsonScheme, JsonSchemeDetail,
    JsonSchemeRequest, JsonSchemeResponse,
};
pub use scheme::Scheme;
pub use types::{Access, Method, MimeType, Status};
