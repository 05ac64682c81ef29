//! Draft Reflection Library
//!
//! This crate turns arbitrary example values into named, typed field
//! descriptors (a *catalogue*) and rebuilds representative *mock* values
//! from those descriptors. It is the introspection engine behind
//! `draft-define`'s export step, but has no knowledge of schemes or cases.
//!
//! ## Core Types
//!
//! - [`Sample`] - An example value captured from any `Serialize` type
//! - [`Item`] - A named field descriptor with type and nested children
//! - [`Kind`] - The JSON shape of a described value
//! - [`Options`] - Naming convention and depth limit for a catalogue walk
//! - [`NameConvention`] - How object keys are renamed (preserve, snake, camel)
//! - [`ReflectError`] - Failures while cataloguing a sample
//!
//! ## Examples
//!
//! ```
//! use draft_reflect::{get, mock, Options, Sample};
//! use serde_json::json;
//!
//! let sample = Sample::capture(&json!({ "userId": 7, "displayName": "ann" })).unwrap();
//! let item = get(&sample, &Options::snake_case()).unwrap();
//!
//! let names: Vec<_> = item.nested.iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, vec!["display_name", "user_id"]);
//!
//! assert_eq!(mock(&item), json!({ "display_name": "ann", "user_id": 7 }));
//! ```

pub mod catalogue;
pub mod error;
pub mod item;
pub mod mock;
pub mod naming;
pub mod options;
pub mod sample;

pub use catalogue::get;
pub use error::ReflectError;
pub use item::{Item, Kind};
pub use mock::mock;
pub use naming::NameConvention;
pub use options::{DEFAULT_MAX_DEPTH, Options};
pub use sample::Sample;
