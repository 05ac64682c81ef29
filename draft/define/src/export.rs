//! Exporting a scheme as a JSON document.
//!
//! [`Scheme::to_json`] walks the recorded cases in order and, per status,
//! folds every case's example catalogues into one consolidated
//! [`JsonSchemeDetail`]. The exported case list keeps recording order and
//! shows a mock rebuilt from each example instead of the raw value.
//!
//! Per status:
//! - `method` and `consumes` come from the first case seen;
//! - `access` is overwritten by every case, so the last one wins;
//! - catalogues are the by-name union of all cases' fields, later
//!   same-named fields replacing earlier ones;
//! - a case without an example for a slot contributes nothing to it.

use draft_reflect::{Item, NameConvention, Options, ReflectError, Sample};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{Span, debug, instrument, trace};

use crate::case::SchemeCase;
use crate::error::DraftError;
use crate::scheme::Scheme;
use crate::types::{Access, Method, MimeType, Status};

/// Field descriptors keyed by field name.
pub type Catalogue = BTreeMap<String, Item>;

/// Options for [`Scheme::to_json_with`].
///
/// ## Examples
///
/// ```
/// use draft_define::ExportOptions;
/// use draft_reflect::NameConvention;
///
/// assert_eq!(ExportOptions::default().reflect.naming, NameConvention::SnakeCase);
///
/// let options = ExportOptions::default().with_naming(NameConvention::Preserve);
/// assert_eq!(options.reflect.naming, NameConvention::Preserve);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Options passed to the reflection service for every example.
    pub reflect: Options,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            reflect: Options::snake_case(),
        }
    }
}

impl ExportOptions {
    /// Sets the field naming convention.
    pub fn with_naming(mut self, naming: NameConvention) -> Self {
        self.reflect = self.reflect.with_naming(naming);
        self
    }

    /// Sets how deeply examples may nest.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.reflect = self.reflect.with_max_depth(max_depth);
        self
    }
}

/// The exported description of an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonScheme {
    pub url: String,
    pub name: String,
    pub project: String,
    pub description: String,
    /// One consolidated record per status present in `cases`.
    pub detail: BTreeMap<Status, JsonSchemeDetail>,
    /// Every case, in recording order.
    pub cases: Vec<JsonCase>,
}

impl JsonScheme {
    /// Encodes the document as a JSON value.
    pub fn to_value(&self) -> Result<Value, DraftError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Encodes the document as pretty-printed JSON text.
    pub fn to_string_pretty(&self) -> Result<String, DraftError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Everything known about one status across its cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchemeDetail {
    pub access: Access,
    pub request: JsonSchemeRequest,
    pub response: JsonSchemeResponse,
}

impl JsonSchemeDetail {
    fn seeded_from(case: &SchemeCase) -> Self {
        Self {
            access: case.access,
            request: JsonSchemeRequest {
                method: case.method,
                consumes: case.consumes,
                headers: Catalogue::new(),
                params: Catalogue::new(),
            },
            response: JsonSchemeResponse {
                headers: Catalogue::new(),
                body: Catalogue::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchemeRequest {
    pub method: Method,
    pub consumes: MimeType,
    pub headers: Catalogue,
    pub params: Catalogue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchemeResponse {
    pub headers: Catalogue,
    pub body: Catalogue,
}

/// An exported case: the recorded case with its examples replaced by mocks.
///
/// Absent examples are omitted from the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonCase {
    pub name: String,
    pub description: String,
    pub access: Access,
    pub status: Status,
    pub method: Method,
    pub consumes: MimeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    pub headers: JsonCaseHeaders,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonCaseHeaders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

impl Scheme {
    /// Exports the scheme with default [`ExportOptions`] (snake_case field names).
    ///
    /// ## Errors
    ///
    /// Returns [`DraftError::Reflect`] if any example cannot be catalogued.
    pub fn to_json(&self) -> Result<JsonScheme, DraftError> {
        self.to_json_with(&ExportOptions::default())
    }

    /// Exports the scheme.
    ///
    /// Every call catalogues and mocks all examples afresh; the scheme itself
    /// is not modified.
    #[instrument(skip(self, options), fields(url = %self.url, cases = tracing::field::Empty))]
    pub fn to_json_with(&self, options: &ExportOptions) -> Result<JsonScheme, DraftError> {
        let cases = self.cases();
        Span::current().record("cases", cases.len());
        let mut detail: BTreeMap<Status, JsonSchemeDetail> = BTreeMap::new();
        let mut exported = Vec::with_capacity(cases.len());

        for case in &cases {
            let entry = detail.entry(case.status).or_insert_with(|| {
                debug!(status = %case.status, "new status detail");
                JsonSchemeDetail::seeded_from(case)
            });
            entry.access = case.access;

            let reflect = &options.reflect;
            let headers = JsonCaseHeaders {
                request: fold(
                    &mut entry.request.headers,
                    case.headers.request.as_ref(),
                    reflect,
                )?,
                response: fold(
                    &mut entry.response.headers,
                    case.headers.response.as_ref(),
                    reflect,
                )?,
            };
            let params = fold(&mut entry.request.params, case.params.as_ref(), reflect)?;
            let body = fold(&mut entry.response.body, case.body.as_ref(), reflect)?;

            exported.push(JsonCase {
                name: case.name.clone(),
                description: case.description.clone(),
                access: case.access,
                status: case.status,
                method: case.method,
                consumes: case.consumes,
                params,
                headers,
                body,
            });
        }

        debug!(cases = exported.len(), statuses = detail.len(), "exported scheme");

        Ok(JsonScheme {
            url: self.url.clone(),
            name: self.name.clone(),
            project: self.project.clone(),
            description: self.description.clone(),
            detail,
            cases: exported,
        })
    }
}

/// Catalogues `sample`, merges its top-level fields into `catalogue` and
/// returns the mock rebuilt from it. `None` in, `None` out.
fn fold(
    catalogue: &mut Catalogue,
    sample: Option<&Sample>,
    options: &Options,
) -> Result<Option<Value>, ReflectError> {
    let Some(sample) = sample else {
        return Ok(None);
    };

    let root = draft_reflect::get(sample, options)?;
    let mock = draft_reflect::mock(&root);
    trace!(fields = root.nested.len(), "folding example into catalogue");

    for field in root.nested {
        catalogue.insert(field.name.clone(), field);
    }

    Ok(Some(mock))
}
